use super::atom::Atom;
use super::chain::Chain;
use super::ids::IdGenerator;
use super::molecule::Molecule;
use super::residue::Residue;
use super::topology::{Bond, BondOrder};
use crate::core::topology::inference::infer_bonds;
use nalgebra::Point3;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

pub struct MoleculeBuilder {
    name: String,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    metadata: BTreeMap<String, String>,

    // --- Builder-specific state for grouping and deduplication ---
    bond_keys: HashSet<(usize, usize)>,
    residues: Vec<Residue>,
    residue_map: HashMap<(String, isize), usize>,
    chains: Vec<Chain>,
    chain_map: HashMap<String, usize>,
    current_chain: String,
    current_residue: (isize, String),
}

impl MoleculeBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            atoms: Vec::new(),
            bonds: Vec::new(),
            metadata: BTreeMap::new(),
            bond_keys: HashSet::new(),
            residues: Vec::new(),
            residue_map: HashMap::new(),
            chains: Vec::new(),
            chain_map: HashMap::new(),
            current_chain: "A".to_string(),
            current_residue: (1, "LIG".to_string()),
        }
    }

    pub fn name(&mut self, name: &str) -> &mut Self {
        self.name = name.to_string();
        self
    }

    pub fn metadata(&mut self, key: &str, value: &str) -> &mut Self {
        self.metadata.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets the residue context used by subsequent [`add_atom`](Self::add_atom) calls.
    pub fn start_residue(&mut self, chain_id: &str, residue_id: isize, name: &str) -> &mut Self {
        self.current_chain = chain_id.to_string();
        self.current_residue = (residue_id, name.to_string());
        self
    }

    /// Adds an atom in the current residue context and returns its index.
    pub fn add_atom(&mut self, element: &str, name: &str, position: Point3<f64>) -> usize {
        let mut atom = Atom::new(self.atoms.len(), element, name, position);
        atom.chain_id = self.current_chain.clone();
        atom.residue_id = self.current_residue.0;
        atom.residue_name = self.current_residue.1.clone();
        self.push_atom(atom)
    }

    /// Appends a fully populated atom and returns its index.
    ///
    /// The atom's `id` is overwritten with its position in the sequence. Residue and
    /// chain membership come from the atom's own fields; residues are keyed by
    /// (chain, sequence number) and created in order of first appearance.
    pub fn push_atom(&mut self, mut atom: Atom) -> usize {
        let index = self.atoms.len();
        atom.id = index;

        let chain_idx = *self
            .chain_map
            .entry(atom.chain_id.clone())
            .or_insert_with(|| {
                self.chains.push(Chain::new(&atom.chain_id));
                self.chains.len() - 1
            });

        let residue_key = (atom.chain_id.clone(), atom.residue_id);
        let residue_idx = *self.residue_map.entry(residue_key).or_insert_with(|| {
            self.residues.push(Residue::new(
                atom.residue_id,
                &atom.residue_name,
                &atom.chain_id,
            ));
            self.residues.len() - 1
        });

        self.residues[residue_idx].add_atom(index);
        self.chains[chain_idx].add_residue(atom.residue_id);
        self.atoms.push(atom);
        index
    }

    /// Adds a bond between two atom indices.
    ///
    /// Returns `false` without modifying the builder when either index is out of
    /// range, both indices are equal, or the unordered pair is already bonded.
    pub fn add_bond(&mut self, atom1: usize, atom2: usize, order: BondOrder) -> bool {
        let n = self.atoms.len();
        if atom1 >= n || atom2 >= n || atom1 == atom2 {
            return false;
        }
        let bond = Bond::new(self.bonds.len(), atom1, atom2, order);
        if !self.bond_keys.insert(bond.key()) {
            return false;
        }
        self.bonds.push(bond);
        true
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Finalizes the molecule, inferring connectivity from geometry when no bond was
    /// added explicitly.
    pub fn build(self, ids: &dyn IdGenerator) -> Molecule {
        let bonds = if self.bonds.is_empty() && self.atoms.len() > 1 {
            let inferred = infer_bonds(&self.atoms);
            debug!(
                molecule = %self.name,
                inferred = inferred.len(),
                "No explicit bonds; inferred connectivity from distances."
            );
            inferred
        } else {
            self.bonds
        };

        Molecule::from_parts(
            ids.next_id(),
            self.name,
            self.atoms,
            bonds,
            self.residues,
            self.chains,
            self.metadata,
        )
    }
}
