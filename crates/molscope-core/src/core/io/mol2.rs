use super::Format;
use super::error::ParseError;
use super::traits::MolecularFile;
use crate::core::elements::normalize_symbol;
use crate::core::models::atom::Atom;
use crate::core::models::builder::MoleculeBuilder;
use crate::core::models::ids::IdGenerator;
use crate::core::models::molecule::Molecule;
use crate::core::models::topology::BondOrder;
use nalgebra::Point3;
use tracing::debug;

const SECTION_TAG: &str = "@<TRIPOS>";

pub struct Mol2File;

/// A `@<TRIPOS>` section with the 1-based line number of its tag line.
struct Section<'a> {
    text: &'a str,
    first_line: usize,
}

impl<'a> Section<'a> {
    /// Non-blank body lines (everything after the tag line) with their line numbers.
    fn records(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.text
            .split('\n')
            .enumerate()
            .skip(1)
            .map(|(i, l)| (self.first_line + i, l.trim()))
            .filter(|(_, l)| !l.is_empty())
    }
}

#[derive(Default)]
struct Sections<'a> {
    molecule: Option<Section<'a>>,
    atom: Option<Section<'a>>,
    bond: Option<Section<'a>>,
}

fn split_sections(text: &str) -> Sections<'_> {
    let mut sections = Sections::default();
    let mut line = 1;
    for chunk in text.split(SECTION_TAG) {
        let section = Section {
            text: chunk,
            first_line: line,
        };
        line += chunk.matches('\n').count();
        if chunk.starts_with("MOLECULE") {
            sections.molecule = Some(section);
        } else if chunk.starts_with("ATOM") {
            sections.atom = Some(section);
        } else if chunk.starts_with("BOND") {
            sections.bond = Some(section);
        }
    }
    sections
}

impl MolecularFile for Mol2File {
    fn parse_with(
        text: &str,
        default_name: &str,
        ids: &dyn IdGenerator,
    ) -> Result<Molecule, ParseError> {
        let sections = split_sections(text);

        let name = sections
            .molecule
            .as_ref()
            .and_then(|s| s.text.split('\n').nth(1))
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(default_name);
        let mut builder = MoleculeBuilder::new(name);
        builder.metadata("name", name);

        let atom_section = sections.atom.ok_or_else(|| {
            ParseError::malformed(Format::Mol2, text.lines().count(), "missing ATOM section")
        })?;
        for (line_num, line) in atom_section.records() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() < 6 {
                debug!(line = line_num, "Skipping short ATOM record.");
                continue;
            }
            builder.push_atom(parse_atom(&tokens, line_num)?);
        }

        if let Some(bond_section) = sections.bond {
            let atom_count = builder.atom_count();
            for (line_num, line) in bond_section.records() {
                let tokens: Vec<&str> = line.split_whitespace().collect();
                if tokens.len() < 4 {
                    debug!(line = line_num, "Skipping short BOND record.");
                    continue;
                }
                let a1 = parse_atom_ref(tokens[1], line_num, atom_count)?;
                let a2 = parse_atom_ref(tokens[2], line_num, atom_count)?;
                builder.add_bond(a1, a2, bond_order(tokens[3]));
            }
        }

        Ok(builder.build(ids))
    }
}

// Tokens: id, name, x, y, z, type[, resSeq[, resName[, charge]]]
fn parse_atom(tokens: &[&str], line_num: usize) -> Result<Atom, ParseError> {
    let coord = |i: usize| {
        tokens[i].parse::<f64>().map_err(|_| {
            ParseError::malformed(
                Format::Mol2,
                line_num,
                format!("invalid coordinate '{}'", tokens[i]),
            )
        })
    };
    let position = Point3::new(coord(2)?, coord(3)?, coord(4)?);
    let element = normalize_symbol(tokens[5].split('.').next().unwrap_or_default());

    let mut atom = Atom::new(0, &element, tokens[1], position);
    atom.residue_id = tokens
        .get(6)
        .and_then(|t| t.parse::<isize>().ok())
        .unwrap_or(1);
    atom.residue_name = tokens.get(7).copied().unwrap_or("LIG").to_string();
    atom.charge = tokens
        .get(8)
        .and_then(|t| t.parse::<f64>().ok())
        .unwrap_or(0.0);
    Ok(atom)
}

fn parse_atom_ref(token: &str, line_num: usize, atom_count: usize) -> Result<usize, ParseError> {
    match token.parse::<usize>() {
        Ok(i) if i >= 1 && i <= atom_count => Ok(i - 1),
        Ok(i) => Err(ParseError::malformed(
            Format::Mol2,
            line_num,
            format!("bond atom index {} outside 1..={}", i, atom_count),
        )),
        Err(_) => Err(ParseError::malformed(
            Format::Mol2,
            line_num,
            format!("invalid bond atom index '{}'", token),
        )),
    }
}

// Named types (`ar`, `am`) go through `FromStr`; other integer codes through `from_code`.
fn bond_order(token: &str) -> BondOrder {
    token
        .parse::<BondOrder>()
        .ok()
        .or_else(|| token.parse::<i64>().ok().map(BondOrder::from_code))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ids::SequentialIdGenerator;

    fn parse(text: &str) -> Result<Molecule, ParseError> {
        Mol2File::parse_with(text, "fallback", &SequentialIdGenerator::new("mol2"))
    }

    const ACETAMIDE: &str = "\
@<TRIPOS>MOLECULE
acetamide
 4 3 0 0 0
SMALL
USER_CHARGES

@<TRIPOS>ATOM
      1 C1          0.0000    0.0000    0.0000 C.3     1  ACM        -0.1000
      2 C2          1.5200    0.0000    0.0000 C.2     1  ACM         0.5000
      3 O1          2.1400    1.0500    0.0000 O.2     1  ACM        -0.5000
      4 N1          2.1600   -1.1800    0.0000 N.am    2  NH2        -0.4000
@<TRIPOS>BOND
     1     1     2    1
     2     2     3    2
     3     2     4   am
";

    fn assert_malformed(result: Result<Molecule, ParseError>, expected_line: usize) {
        match result {
            Err(ParseError::MalformedInput { format, line, .. }) => {
                assert_eq!(format, Format::Mol2);
                assert_eq!(line, expected_line);
            }
            other => panic!("expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn parses_name_atoms_and_typed_elements() {
        let mol = parse(ACETAMIDE).unwrap();
        assert_eq!(mol.name, "acetamide");
        assert_eq!(mol.atom_count(), 4);

        let elements: Vec<&str> = mol.atoms().iter().map(|a| a.element.as_str()).collect();
        assert_eq!(elements, vec!["C", "C", "O", "N"]);
        let n = &mol.atoms()[3];
        assert_eq!(n.name, "N1");
        assert_eq!(n.position, Point3::new(2.16, -1.18, 0.0));
        assert_eq!(n.residue_id, 2);
        assert_eq!(n.residue_name, "NH2");
        assert_eq!(n.charge, -0.4);
        assert_eq!(n.chain_id, "A");
    }

    #[test]
    fn residues_follow_atom_records() {
        let mol = parse(ACETAMIDE).unwrap();
        let residues: Vec<(isize, &str)> = mol
            .residues()
            .iter()
            .map(|r| (r.id, r.name.as_str()))
            .collect();
        assert_eq!(residues, vec![(1, "ACM"), (2, "NH2")]);
        assert_eq!(mol.chains()[0].residues(), &[1, 2]);
    }

    #[test]
    fn bond_types_map_to_orders() {
        let mol = parse(ACETAMIDE).unwrap();
        let orders: Vec<BondOrder> = mol.bonds().iter().map(|b| b.order).collect();
        assert_eq!(
            orders,
            vec![BondOrder::Single, BondOrder::Double, BondOrder::Single]
        );
        assert_eq!(bond_order("ar"), BondOrder::Double);
        assert_eq!(bond_order("3"), BondOrder::Triple);
        assert_eq!(bond_order("AR"), BondOrder::Double);
        assert_eq!(bond_order("am"), BondOrder::Single);
        assert_eq!(bond_order("4"), BondOrder::Double);
        assert_eq!(bond_order("du"), BondOrder::Single);
        assert_eq!(bond_order("nc"), BondOrder::Single);
    }

    #[test]
    fn optional_atom_columns_use_defaults() {
        let text = "@<TRIPOS>ATOM\n1 Cl1 0.0 0.0 0.0 Cl\n2 C1 1.7 0.0 0.0 C.3\n";
        let mol = parse(text).unwrap();
        let cl = &mol.atoms()[0];
        assert_eq!(cl.element, "Cl");
        assert_eq!(cl.residue_id, 1);
        assert_eq!(cl.residue_name, "LIG");
        assert_eq!(cl.charge, 0.0);
        assert_eq!(mol.name, "fallback");
        assert_eq!(mol.bond_count(), 1);
    }

    #[test]
    fn short_atom_and_bond_lines_are_skipped() {
        let text = "@<TRIPOS>ATOM\n1 C1 0.0 0.0\n2 C2 0.0 0.0 0.0 C\n3 C3 1.5 0.0 0.0 C\n\
                    @<TRIPOS>BOND\n1 1 2\n2 1 2 1\n";
        let mol = parse(text).unwrap();
        assert_eq!(mol.atom_count(), 2);
        assert_eq!(mol.bond_count(), 1);
    }

    #[test]
    fn missing_atom_section_is_malformed() {
        let text = "@<TRIPOS>MOLECULE\nempty\n";
        assert_malformed(parse(text), 2);
    }

    #[test]
    fn unparsable_coordinate_reports_its_line() {
        let text = ACETAMIDE.replacen("2.1400", "2.1.00", 1);
        assert_malformed(parse(&text), 10);
    }

    #[test]
    fn out_of_range_bond_index_reports_its_line() {
        let text = ACETAMIDE.replacen("     3     2     4   am", "     3     2     7   am", 1);
        assert_malformed(parse(&text), 15);
    }

    #[test]
    fn unparsable_bond_index_reports_its_line() {
        let text = ACETAMIDE.replacen("     2     2     3    2", "     2     X     3    2", 1);
        assert_malformed(parse(&text), 14);
    }
}
