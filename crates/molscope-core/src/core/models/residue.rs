#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    pub id: isize,                  // Residue sequence number from source file
    pub name: String,               // Name of the residue (e.g., "ALA", "LIG")
    pub chain_id: String,           // Identifier of the parent chain
    pub(crate) atoms: Vec<usize>,   // Indices of atoms belonging to this residue
}

impl Residue {
    pub(crate) fn new(id: isize, name: &str, chain_id: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            chain_id: chain_id.to_string(),
            atoms: Vec::new(),
        }
    }

    pub(crate) fn add_atom(&mut self, atom_index: usize) {
        if !self.atoms.contains(&atom_index) {
            self.atoms.push(atom_index);
        }
    }

    pub fn atoms(&self) -> &[usize] {
        &self.atoms
    }
}
