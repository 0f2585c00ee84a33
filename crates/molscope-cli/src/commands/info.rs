use super::load_structure;
use crate::cli::InfoArgs;
use crate::error::Result;
use molscope::core::forcefield::scoring::total_energy;
use molscope::core::models::molecule::Molecule;

pub fn run(args: InfoArgs) -> Result<()> {
    let molecule = load_structure(&args.input)?;
    print!("{}", summarize(&molecule));
    Ok(())
}

/// Human-readable overview of a molecule, one fact per line.
pub(crate) fn summarize(molecule: &Molecule) -> String {
    let mut lines = vec![
        format!("Name:      {}", molecule.name),
        format!("Formula:   {}", molecule.formula()),
        format!("Mass:      {:.3} g/mol", molecule.molecular_mass()),
        format!("Atoms:     {}", molecule.atom_count()),
        format!("Bonds:     {}", molecule.bond_count()),
        format!("Residues:  {}", molecule.residues().len()),
        format!("Chains:    {}", molecule.chains().len()),
    ];
    if let Some(c) = molecule.centroid() {
        lines.push(format!("Centroid:  ({:.3}, {:.3}, {:.3})", c.x, c.y, c.z));
    }
    lines.push(format!("Energy:    {}", total_energy(molecule)));
    for (key, value) in &molecule.metadata {
        lines.push(format!("  {}: {}", key, value));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_counts_formula_and_metadata() {
        let text = summarize(&Molecule::demo_caffeine());
        assert!(text.contains("Name:      Caffeine"));
        assert!(text.contains("Formula:   C8N4O2"));
        assert!(text.contains("Atoms:     14"));
        assert!(text.contains("Bonds:     15"));
        assert!(text.contains("Energy:    total "));
        assert!(text.contains("  header: "));
        assert!(text.ends_with('\n'));
    }
}
