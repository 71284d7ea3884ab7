use serde::{Deserialize, Serialize};

use crate::{
    frontier::{self, FrontierOrbitals},
    occupancy,
    tolerance::Tolerance,
};

/// Occupancies and frontier orbitals of a set of molecular orbitals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalAnalysis {
    /// the number of electrons (0, 1 or 2) in each orbital
    pub occupancies: Vec<u8>,
    #[serde(flatten)]
    pub frontier: FrontierOrbitals,
}

impl OrbitalAnalysis {
    /// Fill the orbitals with `n_electrons` electrons and locate the HOMO and LUMO.
    pub fn new(energies: &[f64], n_electrons: i64, tolerance: Tolerance) -> Self {
        let occupancies = occupancy::assign_occupancies(energies, n_electrons, tolerance);
        let frontier = frontier::locate_unchecked(energies, &occupancies, tolerance);

        Self {
            occupancies,
            frontier,
        }
    }

    pub fn occupancies(&self) -> &[u8] {
        &self.occupancies
    }

    pub fn homo(&self) -> &[usize] {
        &self.frontier.homo
    }

    pub fn lumo(&self) -> &[usize] {
        &self.frontier.lumo
    }

    /// See [`FrontierOrbitals::gap`]
    pub fn gap(&self, energies: &[f64]) -> Option<f64> {
        self.frontier.gap(energies)
    }

    /// Number of orbitals holding at least one electron
    pub fn n_occupied(&self) -> usize {
        self.occupancies.iter().filter(|&&o| o > 0).count()
    }

    /// Number of orbitals holding exactly one electron
    pub fn n_singly_occupied(&self) -> usize {
        self.occupancies.iter().filter(|&&o| o == 1).count()
    }
}
