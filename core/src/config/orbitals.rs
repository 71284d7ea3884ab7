use serde::Deserialize;

use crate::units::EnergyUnit;

/// A list of orbital energies. Either a bare list of numbers, in Hartree, or
/// an object that also names the unit.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum ConfigOrbitalEnergies {
    Bare(Vec<f64>),
    Tagged {
        #[serde(default)]
        unit: EnergyUnit,
        energies: Vec<f64>,
    },
}

impl ConfigOrbitalEnergies {
    pub fn unit(&self) -> EnergyUnit {
        match self {
            ConfigOrbitalEnergies::Bare(_) => EnergyUnit::Hartree,
            ConfigOrbitalEnergies::Tagged { unit, .. } => *unit,
        }
    }

    /// The orbital energies, converted to Hartree
    pub fn into_hartree(self) -> Vec<f64> {
        let unit = self.unit();
        let energies = match self {
            ConfigOrbitalEnergies::Bare(energies) => energies,
            ConfigOrbitalEnergies::Tagged { energies, .. } => energies,
        };

        energies
            .into_iter()
            .map(|energy| unit.to_hartree(energy))
            .collect()
    }
}
