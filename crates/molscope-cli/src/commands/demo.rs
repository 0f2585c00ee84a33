use super::write_pdb;
use crate::cli::DemoArgs;
use crate::error::Result;
use molscope::core::io::pdb::PdbFile;
use molscope::core::io::traits::MolecularWriter;
use molscope::core::models::molecule::Molecule;

pub fn run(args: DemoArgs) -> Result<()> {
    let molecule = Molecule::demo_caffeine();
    match &args.output {
        Some(path) => {
            write_pdb(&molecule, path)?;
            println!("✓ Demo structure written to: {}", path.display());
        }
        None => println!("{}", PdbFile::serialize(&molecule)),
    }
    Ok(())
}
