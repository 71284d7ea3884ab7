//! Input files, as they are read from disk.
use std::{fs::File, io::BufReader, path::Path};

use serde::de::DeserializeOwned;

use crate::error::OrbitalError;

pub use molecule::{ConfigAtom, ConfigMolecule};
pub use orbitals::ConfigOrbitalEnergies;

mod molecule;
mod orbitals;

/// Read a json config file
pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, OrbitalError> {
    let path = path.as_ref();
    log::debug!("reading {}", path.display());
    Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?)
}
