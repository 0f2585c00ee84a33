use super::config::DEFAULT_MAX_FORCE;
use crate::core::forcefield::params::ForcefieldParams;
use crate::core::forcefield::potentials;
use crate::core::models::molecule::Molecule;
use nalgebra::Vector3;
use std::sync::OnceLock;
use tracing::trace;

/// Bonds shorter than this exert no force.
pub const MIN_FORCE_DISTANCE: f64 = 0.01;

fn default_params() -> &'static ForcefieldParams {
    static PARAMS: OnceLock<ForcefieldParams> = OnceLock::new();
    PARAMS.get_or_init(ForcefieldParams::default)
}

/// Per-atom forces from the harmonic bond terms only.
///
/// Each bond pulls its atoms along the `atom1 -> atom2` axis with magnitude
/// `k (d - d0)`; the force is added to `atom1` and subtracted from `atom2`.
pub fn bond_forces(molecule: &Molecule, params: &ForcefieldParams) -> Vec<Vector3<f64>> {
    let atoms = molecule.atoms();
    let mut forces = vec![Vector3::zeros(); atoms.len()];

    for bond in molecule.bonds() {
        let a1 = &atoms[bond.atom1];
        let a2 = &atoms[bond.atom2];
        let axis = a2.position - a1.position;
        let dist = axis.norm();
        if dist < MIN_FORCE_DISTANCE {
            continue;
        }
        let k = params.bond_force_constant * f64::from(bond.order.value());
        let magnitude = potentials::harmonic_bond_force(dist, a1.radius + a2.radius, k);
        let force = axis / dist * magnitude;
        forces[bond.atom1] += force;
        forces[bond.atom2] -= force;
    }

    forces
}

/// Runs `steps` steepest-descent iterations with the built-in parameters.
///
/// See [`minimize_with`].
pub fn minimize(molecule: &Molecule, steps: usize, step_size: f64) -> Molecule {
    minimize_with(molecule, steps, step_size, DEFAULT_MAX_FORCE, default_params())
}

/// Runs exactly `steps` steepest-descent iterations and returns the relaxed copy.
///
/// Forces come from bond terms only, each atom's force is capped at `max_force`
/// and positions advance by `force * step_size`. There is no convergence test. The
/// input molecule is left untouched and everything except atom positions is
/// carried over unchanged.
pub fn minimize_with(
    molecule: &Molecule,
    steps: usize,
    step_size: f64,
    max_force: f64,
    params: &ForcefieldParams,
) -> Molecule {
    let mut result = molecule.clone();

    for step in 0..steps {
        let forces = bond_forces(&result, params);
        for (atom, mut force) in result.atoms_mut().iter_mut().zip(forces) {
            let magnitude = force.norm();
            if magnitude > max_force {
                force *= max_force / magnitude;
            }
            atom.position += force * step_size;
        }
        trace!(step, "Minimization step applied.");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forcefield::scoring::{Scorer, total_energy};
    use crate::core::models::builder::MoleculeBuilder;
    use crate::core::models::ids::SequentialIdGenerator;
    use crate::core::models::topology::BondOrder;
    use nalgebra::Point3;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn carbon_pair(separation: f64) -> Molecule {
        let mut builder = MoleculeBuilder::new("ethane-core");
        builder.add_atom("C", "C1", Point3::origin());
        builder.add_atom("C", "C2", Point3::new(separation, 0.0, 0.0));
        builder.add_bond(0, 1, BondOrder::Single);
        builder.build(&SequentialIdGenerator::new("mol"))
    }

    #[test]
    fn bond_forces_pull_stretched_atoms_together() {
        let mol = carbon_pair(1.62);
        let forces = bond_forces(&mol, &ForcefieldParams::default());
        assert!(f64_approx_equal(forces[0].x, 30.0));
        assert!(f64_approx_equal(forces[1].x, -30.0));
        assert!(f64_approx_equal(forces[0].y, 0.0));
    }

    #[test]
    fn bond_forces_skip_coincident_atoms() {
        let mol = carbon_pair(0.005);
        let forces = bond_forces(&mol, &ForcefieldParams::default());
        assert_eq!(forces, vec![Vector3::zeros(), Vector3::zeros()]);
    }

    #[test]
    fn force_is_clamped_before_integration() {
        // Unclamped force is 30; the cap of 10 moves each atom by 0.01.
        let mol = carbon_pair(1.62);
        let relaxed = minimize(&mol, 1, 0.001);
        assert!(f64_approx_equal(relaxed.atoms()[0].position.x, 0.01));
        assert!(f64_approx_equal(relaxed.atoms()[1].position.x, 1.61));
    }

    #[test]
    fn custom_force_cap_is_honored() {
        let mol = carbon_pair(1.62);
        let relaxed = minimize_with(&mol, 1, 0.001, 100.0, &ForcefieldParams::default());
        assert!(f64_approx_equal(relaxed.atoms()[0].position.x, 0.03));
    }

    #[test]
    fn minimize_is_deterministic_and_leaves_input_untouched() {
        let mol = Molecule::demo_caffeine();
        let before = mol.clone();
        let a = minimize(&mol, 50, 0.005);
        let b = minimize(&mol, 50, 0.005);
        assert_eq!(a.atoms(), b.atoms());
        assert_eq!(mol, before);
    }

    #[test]
    fn minimize_keeps_everything_but_positions() {
        let mol = Molecule::demo_caffeine();
        let relaxed = minimize(&mol, 10, 0.005);
        assert_eq!(relaxed.id, mol.id);
        assert_eq!(relaxed.bonds(), mol.bonds());
        assert_eq!(relaxed.residues(), mol.residues());
        assert_eq!(relaxed.metadata, mol.metadata);
        for (a, b) in relaxed.atoms().iter().zip(mol.atoms()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.element, b.element);
        }
    }

    #[test]
    fn zero_steps_returns_an_identical_copy() {
        let mol = carbon_pair(1.7);
        assert_eq!(minimize(&mol, 0, 0.01), mol);
    }

    #[test]
    fn relaxation_reduces_bond_strain() {
        let mol = carbon_pair(1.9);
        let params = ForcefieldParams::default();
        let scorer = Scorer::new(&params);
        let relaxed = minimize(&mol, 20, 0.001);
        assert!(scorer.bond_energy(&relaxed) < scorer.bond_energy(&mol));
    }

    // Forces ignore the Lennard-Jones term that the energy model scores.
    #[test]
    fn non_bonded_overlap_exerts_no_force() {
        let mut builder = MoleculeBuilder::new("two-fragments");
        builder.add_atom("C", "C1", Point3::origin());
        builder.add_atom("C", "C2", Point3::new(2.0, 0.0, 0.0));
        builder.add_atom("C", "C3", Point3::new(1000.0, 0.0, 0.0));
        builder.add_atom("C", "C4", Point3::new(1003.0, 0.0, 0.0));
        builder.add_bond(0, 1, BondOrder::Single);
        let mol = builder.build(&SequentialIdGenerator::new("mol"));

        let before = total_energy(&mol);
        assert!(before.vdw > 0.8);

        let relaxed = minimize(&mol, 20, 0.005);
        let after = total_energy(&relaxed);
        assert_eq!(relaxed.atoms()[2].position, mol.atoms()[2].position);
        assert_eq!(relaxed.atoms()[3].position, mol.atoms()[3].position);
        assert!(f64_approx_equal(after.vdw, before.vdw));
        assert!(after.bond < before.bond);
    }

    #[test]
    fn relaxing_a_bond_can_raise_total_energy() {
        let mut builder = MoleculeBuilder::new("crowded");
        builder.add_atom("C", "C1", Point3::origin());
        builder.add_atom("C", "C2", Point3::new(2.5, 0.0, 0.0));
        builder.add_atom("C", "C3", Point3::new(1.25, 1.2, 0.0));
        builder.add_bond(0, 1, BondOrder::Single);
        let mol = builder.build(&SequentialIdGenerator::new("mol"));

        let before = total_energy(&mol);
        let relaxed = minimize(&mol, 20, 0.005);
        let after = total_energy(&relaxed);

        assert_eq!(relaxed.atoms()[2].position, mol.atoms()[2].position);
        assert!(after.bond < before.bond);
        assert!(after.total() > before.total());
    }
}
