//! # I/O Module
//!
//! Readers for three molecular text formats and a writer for the fixed-column one.
//!
//! ## Formats
//!
//! - [`pdb`] - Fixed-column records (`ATOM`/`HETATM`/`CONECT`); read and write
//! - [`sdf`] - Counts-block connection tables; read only
//! - [`mol2`] - `@<TRIPOS>` sectioned tags; read only
//!
//! Every reader implements [`traits::MolecularFile`] and produces a
//! [`Molecule`](crate::core::models::molecule::Molecule). When a reader finds no
//! bond records, connectivity is inferred from interatomic distances.
//!
//! ```
//! use molscope::core::io::pdb::PdbFile;
//! use molscope::core::io::traits::{MolecularFile, MolecularWriter};
//!
//! let text = "ATOM      1  O   HOH A   1       0.000   0.000   0.000  1.00  0.00           O\n\
//!             ATOM      2  H1  HOH A   1       0.960   0.000   0.000  1.00  0.00           H\n\
//!             END";
//! let water = PdbFile::parse(text, "water")?;
//! assert_eq!(water.atom_count(), 2);
//! assert_eq!(water.bond_count(), 1);
//!
//! let out = PdbFile::serialize(&water);
//! assert!(out.starts_with("HEADER    water"));
//! # Ok::<(), molscope::core::io::error::ParseError>(())
//! ```

pub(crate) mod columns;
pub mod error;
pub mod mol2;
pub mod pdb;
pub mod samples;
pub mod sdf;
pub mod traits;

use crate::core::models::ids::IdGenerator;
use crate::core::models::molecule::Molecule;
use error::ParseError;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use traits::MolecularFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Pdb,
    Sdf,
    Mol2,
}

impl Format {
    /// Picks a format from a file extension. Unknown or missing extensions map to
    /// the fixed-column format.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("sdf") | Some("mol") => Self::Sdf,
            Some("mol2") => Self::Mol2,
            _ => Self::Pdb,
        }
    }

    pub fn parse_with(
        self,
        text: &str,
        default_name: &str,
        ids: &dyn IdGenerator,
    ) -> Result<Molecule, ParseError> {
        match self {
            Self::Pdb => pdb::PdbFile::parse_with(text, default_name, ids),
            Self::Sdf => sdf::SdfFile::parse_with(text, default_name, ids),
            Self::Mol2 => mol2::Mol2File::parse_with(text, default_name, ids),
        }
    }

    pub fn parse(self, text: &str, default_name: &str) -> Result<Molecule, ParseError> {
        match self {
            Self::Pdb => pdb::PdbFile::parse(text, default_name),
            Self::Sdf => sdf::SdfFile::parse(text, default_name),
            Self::Mol2 => mol2::Mol2File::parse(text, default_name),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Pdb => "PDB",
                Self::Sdf => "SDF",
                Self::Mol2 => "MOL2",
            }
        )
    }
}

impl FromStr for Format {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdb" | "ent" => Ok(Self::Pdb),
            "sdf" | "mol" => Ok(Self::Sdf),
            "mol2" => Ok(Self::Mol2),
            other => Err(format!("unknown format '{}'", other)),
        }
    }
}

/// Reads a file, choosing the format from its extension.
pub fn read_path<P: AsRef<Path>>(path: P) -> Result<Molecule, ParseError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    Format::from_path(path).parse(&text, &traits::default_name_for(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn format_from_path_uses_extension_case_insensitively() {
        assert_eq!(Format::from_path(Path::new("a.pdb")), Format::Pdb);
        assert_eq!(Format::from_path(Path::new("a.ent")), Format::Pdb);
        assert_eq!(Format::from_path(Path::new("a.SDF")), Format::Sdf);
        assert_eq!(Format::from_path(Path::new("a.mol")), Format::Sdf);
        assert_eq!(Format::from_path(Path::new("a.mol2")), Format::Mol2);
        assert_eq!(Format::from_path(Path::new("a.xyz")), Format::Pdb);
        assert_eq!(Format::from_path(Path::new("noext")), Format::Pdb);
    }

    #[test]
    fn format_from_str_rejects_unknown_names() {
        assert_eq!("MOL2".parse::<Format>().unwrap(), Format::Mol2);
        assert!("cif".parse::<Format>().is_err());
    }

    #[test]
    fn read_path_dispatches_on_extension_and_names_after_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ethane.sdf");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            "\n  test\n\n  2  1  0  0  0  0  0  0  0  0999 V2000\n\
             \x20   0.0000    0.0000    0.0000 C   0  0\n\
             \x20   1.5400    0.0000    0.0000 C   0  0\n\
             \x20 1  2  1  0\nM  END\n"
        )
        .unwrap();

        let mol = read_path(&path).unwrap();
        assert_eq!(mol.name, "ethane");
        assert_eq!(mol.atom_count(), 2);
        assert_eq!(mol.bond_count(), 1);
    }

    #[test]
    fn parse_with_draws_ids_from_the_given_generator() {
        use crate::core::models::ids::SequentialIdGenerator;

        let text = "ATOM      1  C1  LIG A   1       0.000   0.000   0.000  1.00  0.00           C\n\
                    ATOM      2  C2  LIG A   1       1.540   0.000   0.000  1.00  0.00           C\n";
        let ids = SequentialIdGenerator::new("fmt");
        let first = Format::Pdb.parse_with(text, "ligand", &ids).unwrap();
        let second = Format::Pdb.parse_with(text, "ligand", &ids).unwrap();

        assert_eq!(first.id, "fmt-1");
        assert_eq!(second.id, "fmt-2");
        assert_eq!(first.name, "ligand");
        assert_eq!(first.atom_count(), 2);
        assert_eq!(first.bond_count(), 1);
        assert!(Format::Mol2.parse_with(text, "ligand", &ids).is_err());
    }

    #[test]
    fn read_path_reports_missing_file_as_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_path(dir.path().join("missing.pdb")).unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
    }
}
