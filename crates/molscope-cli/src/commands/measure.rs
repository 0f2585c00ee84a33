use super::load_structure;
use crate::cli::MeasureArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use molscope::core::measure::measure;
use tracing::debug;

pub fn run(args: MeasureArgs) -> Result<()> {
    let indices = parser::serials_to_indices(&args.atoms)
        .map_err(|e| CliError::Argument(e.to_string()))?;
    let molecule = load_structure(&args.input)?;

    let measurement = measure(&molecule, &indices, args.kind)?;
    debug!(?measurement, "Measurement computed.");

    let labels: Vec<String> = indices
        .iter()
        .filter_map(|&i| molecule.atom(i))
        .map(|a| format!("{}{}", a.name, a.id + 1))
        .collect();
    println!("{} {}: {}", args.kind, labels.join("-"), measurement);
    Ok(())
}
