//! Aufbau occupancy assignment and HOMO/LUMO identification for molecular orbitals.
pub mod analysis;
pub mod atom;
pub mod config;
pub mod error;
pub mod frontier;
pub mod molecule;
pub mod occupancy;
pub mod periodic_table;
pub mod tolerance;
pub mod units;

pub use analysis::OrbitalAnalysis;
pub use error::OrbitalError;
pub use frontier::{locate_frontier_orbitals, FrontierOrbitals, OrbitalSet};
pub use occupancy::assign_occupancies;
pub use tolerance::Tolerance;
