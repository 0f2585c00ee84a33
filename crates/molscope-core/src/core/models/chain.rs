#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub id: String,                   // Chain identifier (e.g., "A", "B")
    pub(crate) residues: Vec<isize>,  // Ordered list of residue ids belonging to this chain
}

impl Chain {
    pub(crate) fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            residues: Vec::new(),
        }
    }

    pub(crate) fn add_residue(&mut self, residue_id: isize) {
        if !self.residues.contains(&residue_id) {
            self.residues.push(residue_id);
        }
    }

    pub fn residues(&self) -> &[isize] {
        &self.residues
    }
}
