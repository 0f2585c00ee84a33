use super::energy::EnergyCalculator;
use super::params::ForcefieldParams;
use super::term::EnergyBreakdown;
use crate::core::models::molecule::Molecule;
use std::sync::OnceLock;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Evaluates the energy of whole molecules under one parameter set.
pub struct Scorer<'a> {
    params: &'a ForcefieldParams,
}

impl<'a> Scorer<'a> {
    pub fn new(params: &'a ForcefieldParams) -> Self {
        Self { params }
    }

    pub fn score(&self, molecule: &Molecule) -> EnergyBreakdown {
        EnergyBreakdown::new(self.bond_energy(molecule), self.vdw_energy(molecule))
    }

    pub fn bond_energy(&self, molecule: &Molecule) -> f64 {
        let atoms = molecule.atoms();
        molecule
            .bonds()
            .iter()
            .map(|bond| {
                EnergyCalculator::calculate_bond(
                    &atoms[bond.atom1],
                    &atoms[bond.atom2],
                    bond.order,
                    self.params,
                )
            })
            .sum()
    }

    /// Lennard-Jones energy summed over every atom pair not joined by a bond.
    pub fn vdw_energy(&self, molecule: &Molecule) -> f64 {
        let atoms = molecule.atoms();
        let bonded = molecule.bonded_pairs();

        let row = |i: usize| -> f64 {
            let a = &atoms[i];
            atoms[i + 1..]
                .iter()
                .enumerate()
                .filter(|(offset, _)| !bonded.contains(&(i, i + 1 + offset)))
                .map(|(_, b)| EnergyCalculator::calculate_vdw(a, b, self.params))
                .sum()
        };

        #[cfg(not(feature = "parallel"))]
        let iterator = 0..atoms.len();

        #[cfg(feature = "parallel")]
        let iterator = (0..atoms.len()).into_par_iter();

        iterator.map(row).sum()
    }
}

/// Total energy under the built-in parameters.
pub fn total_energy(molecule: &Molecule) -> EnergyBreakdown {
    static DEFAULT_PARAMS: OnceLock<ForcefieldParams> = OnceLock::new();
    Scorer::new(DEFAULT_PARAMS.get_or_init(ForcefieldParams::default)).score(molecule)
}
