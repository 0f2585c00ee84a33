use super::atom::Atom;
use super::chain::Chain;
use super::residue::Residue;
use super::topology::Bond;
use nalgebra::{Point3, Vector3};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Atom count mismatch: expected {expected}, found {found}")]
    AtomCountMismatch { expected: usize, found: usize },
    #[error("Atom at index {index} carries id {id}")]
    AtomIdMismatch { index: usize, id: usize },
}

/// A complete molecular structure: atoms, bonds, residues, chains and metadata.
///
/// Atoms are stored in a dense sequence and every cross-reference (bond endpoints,
/// residue membership) is an index into that sequence. A `Molecule` is treated as an
/// immutable value by the algorithms in this crate: operations that move atoms return
/// a new `Molecule` and leave the input untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    /// Opaque unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form metadata (header, title, source, external identifiers).
    pub metadata: BTreeMap<String, String>,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    residues: Vec<Residue>,
    chains: Vec<Chain>,
}

impl Molecule {
    pub(crate) fn from_parts(
        id: String,
        name: String,
        atoms: Vec<Atom>,
        bonds: Vec<Bond>,
        residues: Vec<Residue>,
        chains: Vec<Chain>,
        metadata: BTreeMap<String, String>,
    ) -> Self {
        Self {
            id,
            name,
            metadata,
            atoms,
            bonds,
            residues,
            chains,
        }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    // Slice access keeps the atom count fixed.
    pub(crate) fn atoms_mut(&mut self) -> &mut [Atom] {
        &mut self.atoms
    }

    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Returns the set of unordered bonded atom pairs, lower index first.
    pub fn bonded_pairs(&self) -> HashSet<(usize, usize)> {
        self.bonds.iter().map(Bond::key).collect()
    }

    /// Returns the indices of all atoms directly bonded to `index`.
    pub fn neighbors(&self, index: usize) -> Vec<usize> {
        self.bonds
            .iter()
            .filter_map(|bond| {
                if bond.atom1 == index {
                    Some(bond.atom2)
                } else if bond.atom2 == index {
                    Some(bond.atom1)
                } else {
                    None
                }
            })
            .collect()
    }

    /// Returns a copy of this molecule with its atom sequence replaced.
    ///
    /// The replacement must keep the dense id invariant: the same number of atoms, and
    /// each atom's `id` equal to its index. Bonds, residues, chains and metadata are
    /// carried over unchanged.
    pub fn with_atoms(&self, atoms: Vec<Atom>) -> Result<Self, ModelError> {
        if atoms.len() != self.atoms.len() {
            return Err(ModelError::AtomCountMismatch {
                expected: self.atoms.len(),
                found: atoms.len(),
            });
        }
        if let Some((index, atom)) = atoms.iter().enumerate().find(|(i, a)| a.id != *i) {
            return Err(ModelError::AtomIdMismatch {
                index,
                id: atom.id,
            });
        }
        Ok(Self {
            atoms,
            ..self.clone()
        })
    }

    /// Returns a copy of this molecule with every atom moved by `offset`.
    pub fn translated(&self, offset: &Vector3<f64>) -> Self {
        let atoms = self
            .atoms
            .iter()
            .map(|atom| Atom {
                position: atom.position + offset,
                ..atom.clone()
            })
            .collect();
        Self {
            atoms,
            ..self.clone()
        }
    }

    /// Returns a copy with the transient selection flag set on exactly `indices`.
    pub fn with_selection(&self, indices: &[usize]) -> Self {
        let selected: HashSet<usize> = indices.iter().copied().collect();
        let atoms = self
            .atoms
            .iter()
            .map(|atom| Atom {
                selected: selected.contains(&atom.id),
                ..atom.clone()
            })
            .collect();
        Self {
            atoms,
            ..self.clone()
        }
    }

    pub fn element_set(&self) -> BTreeSet<String> {
        self.atoms.iter().map(|a| a.element.clone()).collect()
    }

    /// Molecular formula in Hill order: carbon, then hydrogen, then the remaining
    /// elements alphabetically. Without carbon, all elements are alphabetical.
    pub fn formula(&self) -> String {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for atom in &self.atoms {
            *counts.entry(atom.element.as_str()).or_insert(0) += 1;
        }

        let mut ordered: Vec<(&str, usize)> = Vec::with_capacity(counts.len());
        if let Some(c) = counts.remove("C") {
            ordered.push(("C", c));
            if let Some(h) = counts.remove("H") {
                ordered.push(("H", h));
            }
        }
        ordered.extend(counts);

        ordered
            .into_iter()
            .map(|(symbol, count)| {
                if count == 1 {
                    symbol.to_string()
                } else {
                    format!("{}{}", symbol, count)
                }
            })
            .collect()
    }

    pub fn molecular_mass(&self) -> f64 {
        self.atoms.iter().map(Atom::mass).sum()
    }

    /// Geometric center of all atom positions, or `None` for an empty molecule.
    pub fn centroid(&self) -> Option<Point3<f64>> {
        if self.atoms.is_empty() {
            return None;
        }
        let sum = self
            .atoms
            .iter()
            .fold(Vector3::zeros(), |acc, atom| acc + atom.position.coords);
        Some(Point3::from(sum / self.atoms.len() as f64))
    }
}
