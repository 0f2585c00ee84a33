use super::Format;
use super::columns::slice_and_trim;
use super::error::ParseError;
use super::traits::MolecularFile;
use crate::core::elements::normalize_symbol;
use crate::core::models::builder::MoleculeBuilder;
use crate::core::models::ids::IdGenerator;
use crate::core::models::molecule::Molecule;
use crate::core::models::topology::BondOrder;
use nalgebra::Point3;
use tracing::debug;

const COUNTS_LINE: usize = 3;

pub struct SdfFile;

impl MolecularFile for SdfFile {
    fn parse_with(
        text: &str,
        default_name: &str,
        ids: &dyn IdGenerator,
    ) -> Result<Molecule, ParseError> {
        let lines: Vec<&str> = text
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect();
        if lines.len() <= COUNTS_LINE {
            return Err(ParseError::malformed(
                Format::Sdf,
                lines.len(),
                "expected a header block and a counts line",
            ));
        }

        let name = match lines[0].trim() {
            "" => default_name,
            title => title,
        };
        let mut builder = MoleculeBuilder::new(name);
        builder.metadata("name", name);

        let (atom_count, bond_count) = parse_counts(lines[COUNTS_LINE])?;
        let atom_start = COUNTS_LINE + 1;
        let bond_start = atom_start + atom_count;

        for i in 0..atom_count {
            let idx = atom_start + i;
            let line = lines.get(idx).ok_or_else(|| {
                ParseError::malformed(
                    Format::Sdf,
                    idx + 1,
                    format!("declared {} atoms but the file ended", atom_count),
                )
            })?;
            let x = parse_coord(line, 0, 10, idx + 1, "x")?;
            let y = parse_coord(line, 10, 20, idx + 1, "y")?;
            let z = parse_coord(line, 20, 30, idx + 1, "z")?;
            let element = normalize_symbol(slice_and_trim(line, 31, 34));
            let atom_name = format!("{}{}", element, i + 1);
            builder.add_atom(&element, &atom_name, Point3::new(x, y, z));
        }

        for i in 0..bond_count {
            let idx = bond_start + i;
            let line = lines.get(idx).ok_or_else(|| {
                ParseError::malformed(
                    Format::Sdf,
                    idx + 1,
                    format!("declared {} bonds but the file ended", bond_count),
                )
            })?;
            let a1 = parse_atom_ref(line, 0, 3, idx + 1, atom_count)?;
            let a2 = parse_atom_ref(line, 3, 6, idx + 1, atom_count)?;
            let order = slice_and_trim(line, 6, 9)
                .parse::<i64>()
                .map(BondOrder::from_code)
                .unwrap_or_default();
            if !builder.add_bond(a1, a2, order) {
                debug!(line = idx + 1, a1, a2, "Ignoring self or duplicate bond.");
            }
        }

        Ok(builder.build(ids))
    }
}

fn parse_counts(line: &str) -> Result<(usize, usize), ParseError> {
    let line_num = COUNTS_LINE + 1;
    let atoms = slice_and_trim(line, 0, 3)
        .parse::<usize>()
        .map_err(|_| ParseError::malformed(Format::Sdf, line_num, "invalid atom count"))?;
    let bonds = slice_and_trim(line, 3, 6)
        .parse::<usize>()
        .map_err(|_| ParseError::malformed(Format::Sdf, line_num, "invalid bond count"))?;
    Ok((atoms, bonds))
}

fn parse_coord(
    line: &str,
    start: usize,
    end: usize,
    line_num: usize,
    axis: &str,
) -> Result<f64, ParseError> {
    let raw = slice_and_trim(line, start, end);
    raw.parse::<f64>().map_err(|_| {
        ParseError::malformed(
            Format::Sdf,
            line_num,
            format!("invalid {} coordinate '{}'", axis, raw),
        )
    })
}

/// Parses a 1-based atom reference and returns the 0-based index.
fn parse_atom_ref(
    line: &str,
    start: usize,
    end: usize,
    line_num: usize,
    atom_count: usize,
) -> Result<usize, ParseError> {
    let raw = slice_and_trim(line, start, end);
    let index = raw.parse::<usize>().map_err(|_| {
        ParseError::malformed(
            Format::Sdf,
            line_num,
            format!("invalid bond atom index '{}'", raw),
        )
    })?;
    if index == 0 || index > atom_count {
        return Err(ParseError::malformed(
            Format::Sdf,
            line_num,
            format!("bond atom index {} outside 1..={}", index, atom_count),
        ));
    }
    Ok(index - 1)
}
