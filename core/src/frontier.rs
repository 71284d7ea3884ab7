//! Identification of the highest occupied and lowest unoccupied molecular orbitals.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{error::OrbitalError, tolerance::Tolerance};

/// Indices of a set of degenerate orbitals. These are rarely more than a handful.
pub type OrbitalSet = SmallVec<[usize; 4]>;

/// The frontier orbitals of a system, given as indices into its orbital energies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontierOrbitals {
    /// the orbital the HOMO set was built around
    pub homo_anchor: Option<usize>,
    /// the orbital the LUMO set was built around
    pub lumo_anchor: Option<usize>,
    /// every orbital degenerate with the HOMO anchor, including the anchor itself.
    /// This can contain orbitals that did not receive an electron.
    pub homo: OrbitalSet,
    /// every orbital degenerate with the LUMO anchor, including the anchor itself
    pub lumo: OrbitalSet,
}

impl FrontierOrbitals {
    /// The energy difference between the LUMO and the HOMO, in the unit of `energies`.
    /// Returns `None` if either of them doesn't exist.
    pub fn gap(&self, energies: &[f64]) -> Option<f64> {
        let homo = *energies.get(self.homo_anchor?)?;
        let lumo = *energies.get(self.lumo_anchor?)?;
        Some(lumo - homo)
    }
}

/// Find the HOMO and LUMO sets for the given occupancies.
///
/// The HOMO anchor is the occupied orbital with the largest index. Note that
/// this is only the occupied orbital of highest energy if `energies` is sorted
/// in ascending order. The LUMO anchor is the first empty orbital after the
/// HOMO anchor; empty orbitals before it are never considered. Both sets are
/// extended to every orbital within `tolerance` of their anchor's energy.
pub fn locate_frontier_orbitals(
    energies: &[f64],
    occupancies: &[u8],
    tolerance: Tolerance,
) -> Result<FrontierOrbitals, OrbitalError> {
    if energies.len() != occupancies.len() {
        return Err(OrbitalError::LengthMismatch {
            energies: energies.len(),
            occupancies: occupancies.len(),
        });
    }

    Ok(locate_unchecked(energies, occupancies, tolerance))
}

/// Same as [`locate_frontier_orbitals`], for slices known to have the same length.
pub(crate) fn locate_unchecked(
    energies: &[f64],
    occupancies: &[u8],
    tolerance: Tolerance,
) -> FrontierOrbitals {
    debug_assert_eq!(energies.len(), occupancies.len());

    let Some(homo_anchor) = occupancies.iter().rposition(|&occupancy| occupancy > 0) else {
        log::debug!("no occupied orbitals, no frontier orbitals");
        return FrontierOrbitals::default();
    };
    let homo = degenerate_with(energies, homo_anchor, tolerance);

    let lumo_anchor = occupancies[homo_anchor + 1..]
        .iter()
        .position(|&occupancy| occupancy == 0)
        .map(|offset| homo_anchor + 1 + offset);
    let lumo = lumo_anchor
        .map(|anchor| degenerate_with(energies, anchor, tolerance))
        .unwrap_or_default();

    log::debug!(
        "homo anchor {homo_anchor} -> {homo:?}, lumo anchor {lumo_anchor:?} -> {lumo:?}"
    );

    FrontierOrbitals {
        homo_anchor: Some(homo_anchor),
        lumo_anchor,
        homo,
        lumo,
    }
}

/// All orbitals within `tolerance` of the anchor's energy. The anchor itself is
/// always part of the set, even if its energy is NaN.
fn degenerate_with(energies: &[f64], anchor: usize, tolerance: Tolerance) -> OrbitalSet {
    let reference = energies[anchor];
    energies
        .iter()
        .enumerate()
        .filter(|&(index, energy)| index == anchor || tolerance.degenerate(*energy, reference))
        .map(|(index, _)| index)
        .collect()
}
