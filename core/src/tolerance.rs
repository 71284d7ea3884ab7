use serde::{Deserialize, Serialize};

use crate::error::OrbitalError;

/// The largest energy difference for which two orbitals are treated as degenerate.
///
/// The tolerance is expressed in the same unit as the energies it is compared
/// against. Callers working in another unit than Hartree have to rescale it.
/// Any non-negative value is accepted; an infinite tolerance makes every pair
/// of finite energies degenerate.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Tolerance(f64);

impl Tolerance {
    /// 1e-4, in Hartree.
    pub const DEFAULT: Tolerance = Tolerance(1e-4);

    pub fn new(value: f64) -> Result<Self, OrbitalError> {
        if value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(OrbitalError::InvalidTolerance(value))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Returns true if `a` and `b` lie within this tolerance of each other
    #[inline(always)]
    pub fn degenerate(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = OrbitalError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tolerance> for f64 {
    fn from(value: Tolerance) -> Self {
        value.0
    }
}
