//! Aufbau filling of molecular orbitals with Hund's rule for degenerate levels.
use itertools::Itertools;

use crate::tolerance::Tolerance;

/// Assign 0, 1 or 2 electrons to every orbital.
///
/// Orbitals are filled from the lowest energy upwards. Orbitals whose energies
/// lie within `tolerance` of the lowest member of their group form a
/// degenerate group, which is first filled singly and only then paired.
/// Filling stops as soon as the electrons run out, so the last group reached
/// may be left partially filled.
///
/// The returned occupancies are indexed like `energies`, regardless of the
/// order the energies are given in. A non-positive electron count yields an
/// all-zero array.
pub fn assign_occupancies(energies: &[f64], n_electrons: i64, tolerance: Tolerance) -> Vec<u8> {
    let mut occupancies = vec![0u8; energies.len()];
    if energies.is_empty() || n_electrons <= 0 {
        return occupancies;
    }

    // stable, so equal energies are filled in order of their original index
    let order = (0..energies.len())
        .sorted_by(|&a, &b| energies[a].total_cmp(&energies[b]))
        .collect::<Vec<_>>();

    let mut remaining = n_electrons as u64;
    let mut start = 0;

    while start < order.len() && remaining > 0 {
        let group = degenerate_group(energies, &order[start..], tolerance);
        log::debug!(
            "degenerate group at energy {:.6}: orbitals {group:?}",
            energies[group[0]]
        );

        // first pass: one electron each
        for &orbital in group {
            if remaining == 0 {
                break;
            }
            occupancies[orbital] += 1;
            remaining -= 1;
        }

        // second pass: pair up
        for &orbital in group {
            if remaining == 0 {
                break;
            }
            if occupancies[orbital] == 1 {
                occupancies[orbital] += 1;
                remaining -= 1;
            }
        }

        start += group.len();
    }

    log::trace!("occupancies: {occupancies:?}, {remaining} electrons left over");
    occupancies
}

/// Returns the leading run of `sorted` whose energies are within `tolerance`
/// of the first entry. The first entry always belongs to the group, even if
/// its energy is NaN, so this is never empty when `sorted` isn't.
fn degenerate_group<'a>(
    energies: &[f64],
    sorted: &'a [usize],
    tolerance: Tolerance,
) -> &'a [usize] {
    let Some(&first) = sorted.first() else {
        return sorted;
    };
    let reference = energies[first];

    let len = 1 + sorted[1..]
        .iter()
        .take_while(|&&orbital| tolerance.degenerate(energies[orbital], reference))
        .count();

    &sorted[..len]
}

/// Total number of electrons held by the given occupancies
pub fn total_electrons(occupancies: &[u8]) -> u64 {
    occupancies.iter().map(|&occupancy| occupancy as u64).sum()
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::{assign_occupancies, degenerate_group, total_electrons};
    use crate::tolerance::Tolerance;

    const TOL: Tolerance = Tolerance::DEFAULT;

    #[test]
    fn hund_fills_degenerate_singly() {
        assert_eq!(assign_occupancies(&[0.0, 0.0, 0.0], 3, TOL), vec![1, 1, 1]);
    }

    #[test]
    fn hund_pairs_after_single_fill() {
        assert_eq!(assign_occupancies(&[0.0, 0.0, 0.0], 4, TOL), vec![2, 1, 1]);
        assert_eq!(assign_occupancies(&[0.0, 0.0, 0.0], 5, TOL), vec![2, 2, 1]);
    }

    #[test]
    fn degenerate_pair_above_core() {
        assert_eq!(
            assign_occupancies(&[-0.5, -0.3, -0.3, 0.1], 4, TOL),
            vec![2, 1, 1, 0]
        );
    }

    #[test]
    fn empty_energies() {
        assert!(assign_occupancies(&[], 10, TOL).is_empty());
        assert!(assign_occupancies(&[], 0, TOL).is_empty());
    }

    #[test]
    fn no_electrons() {
        assert_eq!(assign_occupancies(&[-1.0, 0.0, 1.0], 0, TOL), vec![0, 0, 0]);
        assert_eq!(assign_occupancies(&[-1.0, 0.0, 1.0], -3, TOL), vec![0, 0, 0]);
    }

    #[test]
    fn surplus_electrons_fill_everything() {
        assert_eq!(assign_occupancies(&[-1.0, 0.0, 1.0], 100, TOL), vec![2, 2, 2]);
    }

    #[test]
    fn tolerance_does_not_chain() {
        let energies = [0.0, 0.00009, 0.00018];
        let order = [0, 1, 2];
        assert_eq!(degenerate_group(&energies, &order, TOL), &[0, 1]);
        assert_eq!(degenerate_group(&energies, &order[2..], TOL), &[2]);

        // {0, 1} is filled singly before pairing, then 2 is its own group
        assert_eq!(assign_occupancies(&energies, 2, TOL), vec![1, 1, 0]);
        assert_eq!(assign_occupancies(&energies, 3, TOL), vec![2, 1, 0]);
        assert_eq!(assign_occupancies(&energies, 5, TOL), vec![2, 2, 1]);
        assert_eq!(assign_occupancies(&energies, 6, TOL), vec![2, 2, 2]);
    }

    #[test]
    fn unsorted_input_keeps_original_indices() {
        let energies = [0.3, -0.7, 0.1, -0.2];
        assert_eq!(assign_occupancies(&energies, 5, TOL), vec![0, 2, 1, 2]);
    }

    #[test]
    fn equal_energies_fill_in_index_order() {
        let energies = [0.2, -0.1, 0.2, -0.1];
        assert_eq!(assign_occupancies(&energies, 3, TOL), vec![0, 2, 0, 1]);
        assert_eq!(assign_occupancies(&energies, 5, TOL), vec![1, 2, 0, 2]);
    }

    #[test]
    fn zero_tolerance_only_groups_exact_ties() {
        let tol = Tolerance::new(0.0).unwrap();
        let energies = [0.0, 0.0, 1e-12];
        assert_eq!(assign_occupancies(&energies, 2, tol), vec![1, 1, 0]);
        assert_eq!(assign_occupancies(&energies, 3, tol), vec![2, 1, 0]);
        assert_eq!(assign_occupancies(&energies, 5, tol), vec![2, 2, 1]);
    }

    #[test]
    fn nan_energies_are_filled_last() {
        let energies = [-1.0, f64::NAN];
        let order = [1];
        assert_eq!(degenerate_group(&energies, &order, TOL), &[1]);

        assert_eq!(assign_occupancies(&energies, 4, TOL), vec![2, 2]);
        assert_eq!(assign_occupancies(&energies, 3, TOL), vec![2, 1]);
        assert_eq!(assign_occupancies(&[f64::NAN, f64::NAN, 0.0], 3, TOL), vec![1, 0, 2]);
    }

    #[test]
    fn infinite_tolerance_is_one_group() {
        let tol = Tolerance::new(f64::INFINITY).unwrap();
        assert_eq!(assign_occupancies(&[-3.0, 0.0, 5.0], 4, tol), vec![2, 1, 1]);
    }

    #[test]
    fn random_inputs_conserve_electrons() {
        let mut rng = StdRng::seed_from_u64(0x0c_c0);

        for _ in 0..500 {
            let n_orbitals = rng.gen_range(0..40usize);
            // coarse grid so that exact and near degeneracies show up
            let energies = (0..n_orbitals)
                .map(|_| {
                    rng.gen_range(-20..20i32) as f64 * 0.05 + rng.gen_range(0..3i32) as f64 * 4e-5
                })
                .collect::<Vec<_>>();
            let n_electrons = rng.gen_range(-5..100);

            let occupancies = assign_occupancies(&energies, n_electrons, TOL);
            let expected = n_electrons.clamp(0, 2 * n_orbitals as i64) as u64;

            assert_eq!(occupancies.len(), energies.len());
            assert_eq!(total_electrons(&occupancies), expected);
            assert!(occupancies.iter().all(|&o| o <= 2));
            assert_eq!(occupancies, assign_occupancies(&energies, n_electrons, TOL));
        }
    }

    #[test]
    fn aufbau_order_is_respected() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let n_orbitals = rng.gen_range(1..30usize);
            let energies = (0..n_orbitals)
                .map(|_| rng.gen_range(-5.0..5.0))
                .collect::<Vec<f64>>();
            let n_electrons = rng.gen_range(0..(2 * n_orbitals as i64 + 1));

            let occupancies = assign_occupancies(&energies, n_electrons, TOL);

            // no orbital is occupied while a clearly lower one is empty
            for (i, &e_i) in energies.iter().enumerate() {
                for (j, &e_j) in energies.iter().enumerate() {
                    if e_i + TOL.get() < e_j && occupancies[j] > 0 {
                        assert_eq!(occupancies[i], 2, "{energies:?} {occupancies:?}");
                    }
                }
            }
        }
    }
}
