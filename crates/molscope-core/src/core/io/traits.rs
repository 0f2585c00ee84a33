use super::error::ParseError;
use crate::core::models::ids::{IdGenerator, UuidGenerator};
use crate::core::models::molecule::Molecule;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Defines the interface for reading a molecular text format.
///
/// Implementors provide [`parse_with`](Self::parse_with); everything else is derived
/// from it. Parsing never touches the filesystem itself, the `*_path` helpers only
/// load the text and derive a default name from the file stem.
pub trait MolecularFile {
    /// Parses `text` into a molecule, drawing the molecule id from `ids`.
    ///
    /// # Arguments
    ///
    /// * `text` - The complete file contents.
    /// * `default_name` - Name used when the text does not carry one.
    /// * `ids` - Source of the molecule's opaque identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedInput`] when structurally required fields are
    /// missing or unparsable.
    fn parse_with(
        text: &str,
        default_name: &str,
        ids: &dyn IdGenerator,
    ) -> Result<Molecule, ParseError>;

    /// Parses `text` with randomly generated identifiers.
    fn parse(text: &str, default_name: &str) -> Result<Molecule, ParseError> {
        Self::parse_with(text, default_name, &UuidGenerator)
    }

    /// Reads the whole stream and parses it.
    fn read_from(reader: &mut impl Read, default_name: &str) -> Result<Molecule, ParseError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text, default_name)
    }

    /// Reads and parses a file, naming the molecule after the file stem.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Molecule, ParseError> {
        let path = path.as_ref();
        let default_name = default_name_for(path);
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader, &default_name)
    }
}

/// Defines the interface for writing a molecular text format.
pub trait MolecularWriter {
    fn serialize(molecule: &Molecule) -> String;

    fn write_to(molecule: &Molecule, writer: &mut impl Write) -> io::Result<()> {
        writer.write_all(Self::serialize(molecule).as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()
    }

    fn write_to_path<P: AsRef<Path>>(molecule: &Molecule, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(molecule, &mut writer)
    }
}

pub(crate) fn default_name_for(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("molecule")
        .to_string()
}
