use clap::{Args, Parser, Subcommand};
use molscope::core::models::measurement::MeasurementKind;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "MolScope Developers",
    version,
    about = "MolScope CLI - Inspect, relax, measure and convert small molecular structures.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a summary of a structure file: counts, formula, mass and energy.
    Info(InfoArgs),
    /// Relax a structure by steepest descent and write the result as PDB.
    Minimize(MinimizeArgs),
    /// Measure a distance, angle or dihedral between atoms.
    Measure(MeasureArgs),
    /// Convert any supported structure file to PDB.
    Convert(ConvertArgs),
    /// Look up a compound by name on PubChem.
    Fetch(FetchArgs),
    /// Emit the built-in caffeine demo structure.
    Demo(DemoArgs),
}

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Path to the input structure (.pdb, .ent, .sdf, .mol, .mol2).
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,
}

/// Arguments for the `minimize` subcommand.
#[derive(Args, Debug)]
pub struct MinimizeArgs {
    // --- Core Arguments ---
    /// Path to the input structure (.pdb, .ent, .sdf, .mol, .mol2).
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the relaxed structure in PDB format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Minimization Overrides ---
    /// Override the total number of steepest-descent steps.
    #[arg(short = 'n', long, value_name = "INT")]
    pub steps: Option<usize>,

    /// Override the number of steps run between progress updates.
    #[arg(long, value_name = "INT")]
    pub chunk_size: Option<usize>,

    /// Override the integration step size.
    #[arg(short = 's', long, value_name = "FLOAT")]
    pub step_size: Option<f64>,

    /// Override the per-atom force cap.
    #[arg(long, value_name = "FLOAT")]
    pub max_force: Option<f64>,

    // --- Forcefield Overrides ---
    /// Override the force field parameter file.
    #[arg(long, value_name = "PATH")]
    pub parameters: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S minimization.steps=200
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `measure` subcommand.
#[derive(Args, Debug)]
pub struct MeasureArgs {
    /// Path to the input structure (.pdb, .ent, .sdf, .mol, .mol2).
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Kind of measurement: distance, angle or dihedral.
    #[arg(short, long, value_name = "KIND")]
    pub kind: MeasurementKind,

    /// 1-based atom serial numbers (2 for distance, 3 for angle, 4 for dihedral).
    #[arg(required = true, num_args = 2..=4, value_name = "ATOM")]
    pub atoms: Vec<usize>,
}

/// Arguments for the `convert` subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Path to the input structure (.pdb, .ent, .sdf, .mol, .mol2).
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the PDB output file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,
}

/// Arguments for the `fetch` subcommand.
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Compound name to search for (e.g., "aspirin").
    #[arg(required = true, value_name = "QUERY")]
    pub query: String,

    /// Write the structure as PDB instead of printing a summary.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,
}

/// Arguments for the `demo` subcommand.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Write the demo structure to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
