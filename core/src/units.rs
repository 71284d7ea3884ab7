use serde::{Deserialize, Serialize};

/// Hartree to electron volt, CODATA 2018
pub const HARTREE_TO_EV: f64 = 27.211386245988;

/// The unit an orbital energy is expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUnit {
    #[default]
    Hartree,
    #[serde(alias = "ev")]
    ElectronVolt,
}

impl EnergyUnit {
    pub fn to_hartree(self, value: f64) -> f64 {
        match self {
            EnergyUnit::Hartree => value,
            EnergyUnit::ElectronVolt => value / HARTREE_TO_EV,
        }
    }

    pub fn from_hartree(self, value: f64) -> f64 {
        match self {
            EnergyUnit::Hartree => value,
            EnergyUnit::ElectronVolt => value * HARTREE_TO_EV,
        }
    }
}
