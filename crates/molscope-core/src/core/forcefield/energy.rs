use super::params::ForcefieldParams;
use super::potentials;
use crate::core::models::atom::Atom;
use crate::core::models::topology::BondOrder;

pub struct EnergyCalculator;

impl EnergyCalculator {
    /// Harmonic stretch energy of one bond. The equilibrium length is the sum of
    /// the two atoms' radii and the force constant scales with the bond order.
    pub fn calculate_bond(
        atom1: &Atom,
        atom2: &Atom,
        order: BondOrder,
        params: &ForcefieldParams,
    ) -> f64 {
        let dist = atom1.distance_to(atom2);
        let k = params.bond_force_constant * f64::from(order.value());
        potentials::harmonic_bond(dist, atom1.radius + atom2.radius, k)
    }

    /// Lennard-Jones energy of a non-bonded pair. Pairs closer than the
    /// configured minimum distance contribute nothing.
    pub fn calculate_vdw(atom1: &Atom, atom2: &Atom, params: &ForcefieldParams) -> f64 {
        let dist = atom1.distance_to(atom2);
        if dist < params.min_vdw_distance {
            return 0.0;
        }
        let lj = potentials::combine_lennard_jones(
            params.lennard_jones(&atom1.element),
            params.lennard_jones(&atom2.element),
        );
        potentials::lennard_jones_12_6(dist, lj.sigma, lj.epsilon)
    }
}
