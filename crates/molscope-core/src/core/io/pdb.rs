use super::columns::{rest_and_trim, slice_and_trim};
use super::error::ParseError;
use super::traits::{MolecularFile, MolecularWriter};
use crate::core::elements::normalize_symbol;
use crate::core::models::atom::Atom;
use crate::core::models::builder::MoleculeBuilder;
use crate::core::models::ids::IdGenerator;
use crate::core::models::molecule::Molecule;
use crate::core::models::topology::BondOrder;
use nalgebra::Point3;
use std::str::FromStr;
use tracing::debug;

pub struct PdbFile;

impl PdbFile {
    /// Parses fixed-column records. Every field has a fallback, so this never fails.
    pub fn parse_records(text: &str, default_name: &str, ids: &dyn IdGenerator) -> Molecule {
        let mut builder = MoleculeBuilder::new(default_name);
        let mut title_parts: Vec<String> = Vec::new();

        for (line_idx, line) in text.lines().enumerate() {
            let line_num = line_idx + 1;
            match slice_and_trim(line, 0, 6) {
                "HEADER" => {
                    builder.metadata("header", slice_and_trim(line, 10, 50));
                }
                "TITLE" => {
                    let part = rest_and_trim(line, 10);
                    if !part.is_empty() {
                        title_parts.push(part.to_string());
                    }
                }
                "ATOM" | "HETATM" => {
                    builder.push_atom(parse_atom_record(line, line_num));
                }
                "CONECT" => parse_conect_record(line, line_num, &mut builder),
                _ => {}
            }
        }

        if !title_parts.is_empty() {
            builder.metadata("title", &title_parts.join(" "));
        }
        builder.build(ids)
    }
}

impl MolecularFile for PdbFile {
    fn parse_with(
        text: &str,
        default_name: &str,
        ids: &dyn IdGenerator,
    ) -> Result<Molecule, ParseError> {
        Ok(Self::parse_records(text, default_name, ids))
    }
}

impl MolecularWriter for PdbFile {
    fn serialize(molecule: &Molecule) -> String {
        let mut lines = Vec::with_capacity(molecule.atom_count() + molecule.bond_count() + 2);
        lines.push(format!("HEADER    {}", molecule.name));

        for (i, atom) in molecule.atoms().iter().enumerate() {
            lines.push(format!(
                "ATOM  {:>5} {:<4.4} {:>3.3} {:1.1}{:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}          {:>2}",
                i + 1,
                atom.name,
                atom.residue_name,
                atom.chain_id,
                atom.residue_id,
                atom.position.x,
                atom.position.y,
                atom.position.z,
                atom.occupancy,
                atom.b_factor,
                atom.element,
            ));
        }

        // Lower index first so the edge survives the target > source rule on reparse.
        for bond in molecule.bonds() {
            let (a, b) = bond.key();
            lines.push(format!("CONECT{:>5}{:>5}", a + 1, b + 1));
        }

        lines.push("END".to_string());
        lines.join("\n")
    }
}

fn parse_atom_record(line: &str, line_num: usize) -> Atom {
    let name = slice_and_trim(line, 12, 16);
    let residue_name = slice_and_trim(line, 17, 20);
    let chain_id = match slice_and_trim(line, 21, 22) {
        "" => "A",
        id => id,
    };
    let residue_id = field_or(line, 22, 26, line_num, "resSeq", 0isize);
    let x = field_or(line, 30, 38, line_num, "x", 0.0);
    let y = field_or(line, 38, 46, line_num, "y", 0.0);
    let z = field_or(line, 46, 54, line_num, "z", 0.0);
    let occupancy = field_or(line, 54, 60, line_num, "occupancy", 1.0);
    let b_factor = field_or(line, 60, 66, line_num, "bFactor", 0.0);

    let element = match slice_and_trim(line, 76, 78) {
        "" => {
            let stripped: String = name.chars().filter(|c| !c.is_ascii_digit()).collect();
            stripped.chars().next().map(String::from).unwrap_or_default()
        }
        explicit => explicit.to_string(),
    };
    let element = normalize_symbol(&element);

    let mut atom = Atom::new(0, &element, name, Point3::new(x, y, z));
    atom.residue_name = residue_name.to_string();
    atom.residue_id = residue_id;
    atom.chain_id = chain_id.to_string();
    atom.occupancy = occupancy;
    atom.b_factor = b_factor;
    atom
}

// Indices are 1-based positions in the atom sequence, not serial numbers.
fn parse_conect_record(line: &str, line_num: usize, builder: &mut MoleculeBuilder) {
    let source = match slice_and_trim(line, 6, 11).parse::<usize>() {
        Ok(s) if s >= 1 => s - 1,
        _ => {
            debug!(line = line_num, "Skipping CONECT record with invalid source index.");
            return;
        }
    };

    let width = line.chars().count();
    let mut start = 11;
    while start < width {
        let field = slice_and_trim(line, start, start + 5);
        start += 5;
        if field.is_empty() {
            continue;
        }
        let target = match field.parse::<usize>() {
            Ok(t) if t >= 1 => t - 1,
            _ => {
                debug!(line = line_num, field, "Skipping unparsable CONECT target.");
                continue;
            }
        };
        if target > source && target < builder.atom_count() {
            builder.add_bond(source, target, BondOrder::Single);
        }
    }
}

fn field_or<T: FromStr + Copy>(
    line: &str,
    start: usize,
    end: usize,
    line_num: usize,
    field: &'static str,
    default: T,
) -> T {
    let raw = slice_and_trim(line, start, end);
    match raw.parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            if !raw.is_empty() {
                debug!(line = line_num, field, raw, "Unparsable field; using default.");
            }
            default
        }
    }
}
