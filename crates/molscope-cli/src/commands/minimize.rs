use super::{load_structure, write_pdb};
use crate::cli::MinimizeArgs;
use crate::config::PartialConfig;
use crate::error::Result;
use crate::utils::progress::MinimizationProgress;
use molscope::{engine::progress::ProgressReporter, workflows};
use tracing::info;

pub async fn run(args: MinimizeArgs) -> Result<()> {
    let partial_config = PartialConfig::load(args.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let final_config = partial_config.merge_with_cli(&args)?;

    let molecule = load_structure(&args.input)?;

    let progress_view = MinimizationProgress::new();
    let reporter = ProgressReporter::with_callback(progress_view.callback());

    println!(
        "Minimizing {} ({} atoms, {} steps)...",
        molecule.name,
        molecule.atom_count(),
        final_config.total_steps
    );
    info!("Invoking the core minimization workflow...");

    let result = tokio::task::block_in_place(|| {
        workflows::minimize::run(&molecule, &final_config, &reporter)
    })?;

    write_pdb(&result.molecule, &args.output)?;
    println!("  Initial energy: {}", result.initial_energy);
    println!("  Final energy:   {}", result.final_energy);
    println!(
        "✓ Relaxed structure ({:+.4} kcal/mol) written to: {}",
        result.energy_change(),
        args.output.display()
    );
    Ok(())
}
