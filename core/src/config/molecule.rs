use serde::Deserialize;

use crate::{atom::Atom, error::OrbitalError, molecule::Molecule, periodic_table::ElementType};

/// Represents a full molecule in a config file.
/// A molecule is a list of positioned atoms, optionally together with its charge.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum ConfigMolecule {
    Neutral(Vec<ConfigAtom>),
    Charged {
        #[serde(default)]
        charge: i32,
        atoms: Vec<ConfigAtom>,
    },
}

#[derive(Deserialize, Debug)]
pub struct ConfigAtom {
    element: ElementType,
    position: Vec<f64>,
}

impl TryFrom<ConfigMolecule> for Molecule {
    type Error = OrbitalError;

    fn try_from(value: ConfigMolecule) -> Result<Self, Self::Error> {
        let (config_atoms, charge) = match value {
            ConfigMolecule::Neutral(atoms) => (atoms, 0),
            ConfigMolecule::Charged { charge, atoms } => (atoms, charge),
        };

        let mut atoms = Vec::with_capacity(config_atoms.len());

        for (index, atom) in config_atoms.into_iter().enumerate() {
            let &[x, y, z] = atom.position.as_slice() else {
                return Err(OrbitalError::InvalidPosition {
                    index,
                    len: atom.position.len(),
                });
            };

            atoms.push(Atom::new(atom.element, [x, y, z]));
        }

        Ok(Molecule::new(atoms, charge))
    }
}
