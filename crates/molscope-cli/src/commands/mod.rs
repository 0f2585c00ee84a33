pub mod convert;
pub mod demo;
pub mod fetch;
pub mod info;
pub mod measure;
pub mod minimize;

use crate::error::{CliError, Result};
use molscope::core::io::{self, Format};
use molscope::core::io::pdb::PdbFile;
use molscope::core::io::traits::MolecularWriter;
use molscope::core::models::molecule::Molecule;
use std::path::Path;
use tracing::info;

/// Reads a structure file, choosing the parser from the file extension.
pub(crate) fn load_structure(path: &Path) -> Result<Molecule> {
    info!(
        "Loading {} structure from {:?}",
        Format::from_path(path),
        path
    );
    io::read_path(path).map_err(|e| CliError::parsing(path, e))
}

pub(crate) fn write_pdb(molecule: &Molecule, path: &Path) -> Result<()> {
    info!("Writing {} atoms to {:?}", molecule.atom_count(), path);
    PdbFile::write_to_path(molecule, path)?;
    Ok(())
}
