use super::{load_structure, write_pdb};
use crate::cli::ConvertArgs;
use crate::error::Result;

pub fn run(args: ConvertArgs) -> Result<()> {
    let molecule = load_structure(&args.input)?;
    write_pdb(&molecule, &args.output)?;
    println!(
        "✓ Wrote {} atoms and {} bonds to {}",
        molecule.atom_count(),
        molecule.bond_count(),
        args.output.display()
    );
    Ok(())
}
