use super::{info::summarize, write_pdb};
use crate::cli::FetchArgs;
use crate::error::Result;
use crate::lookup::{PubChemClient, fetch_structure};
use std::time::Duration;
use tracing::info;

pub async fn run(args: FetchArgs) -> Result<()> {
    let client = PubChemClient::new(Duration::from_secs(args.timeout))?;
    info!("Looking up '{}' on PubChem...", args.query);
    let molecule = fetch_structure(&client, &args.query).await?;

    match &args.output {
        Some(path) => {
            write_pdb(&molecule, path)?;
            println!(
                "✓ {} ({} atoms) written to: {}",
                molecule.name,
                molecule.atom_count(),
                path.display()
            );
        }
        None => print!("{}", summarize(&molecule)),
    }
    Ok(())
}
