use crate::core::models::atom::Atom;
use crate::core::models::topology::{Bond, BondOrder};

/// Pairs closer than this are treated as overlapping atoms, not as bonded.
pub const MIN_BOND_DISTANCE: f64 = 0.4;
/// Scale factor applied to the sum of the two atoms' radii.
pub const BOND_TOLERANCE: f64 = 1.3;

/// Returns `true` when two atoms at distance `dist` with radii `r1`, `r2` are
/// considered bonded.
#[inline]
pub fn within_bonding_range(dist: f64, r1: f64, r2: f64) -> bool {
    dist > MIN_BOND_DISTANCE && dist < BOND_TOLERANCE * (r1 + r2)
}

/// Builds single bonds for every atom pair inside the bonding window.
///
/// Pairs are visited as `(i, j)` with `i < j`, so bond ids follow that order and each
/// bond stores the lower index first. O(n²) in the number of atoms.
pub fn infer_bonds(atoms: &[Atom]) -> Vec<Bond> {
    let mut bonds = Vec::new();
    for (i, a) in atoms.iter().enumerate() {
        for (j, b) in atoms.iter().enumerate().skip(i + 1) {
            if within_bonding_range(a.distance_to(b), a.radius, b.radius) {
                bonds.push(Bond::new(bonds.len(), i, j, BondOrder::Single));
            }
        }
    }
    bonds
}
