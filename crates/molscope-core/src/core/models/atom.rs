use crate::core::elements;
use nalgebra::Point3;

/// Represents an atom in a molecular structure.
///
/// The `id` of an atom always equals its index in the owning molecule's atom
/// sequence; bonds and residues refer to atoms through that index. The `radius` and
/// `color` fields are copies of the element table entry taken at construction time
/// and may be changed on this atom without affecting the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Dense 0-based index of the atom in its molecule.
    pub id: usize,
    /// Title-case element symbol (e.g., "C", "Cl").
    pub element: String,
    /// The display name of the atom (e.g., "CA", "N1").
    pub name: String,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// Name of the residue this atom belongs to (e.g., "ALA", "LIG").
    pub residue_name: String,
    /// Sequence number of the residue this atom belongs to.
    pub residue_id: isize,
    /// Identifier of the chain this atom belongs to.
    pub chain_id: String,
    /// Crystallographic occupancy.
    pub occupancy: f64,
    /// Crystallographic temperature factor.
    pub b_factor: f64,
    /// Partial atomic charge in elementary charge units.
    pub charge: f64,
    /// Display radius in Angstroms, copied from the element table.
    pub radius: f64,
    /// Display color, copied from the element table.
    pub color: String,
    /// Transient selection flag. Never read by the core algorithms.
    pub selected: bool,
}

impl Atom {
    /// Creates a new `Atom` whose radius and color are taken from the element table.
    ///
    /// Residue and chain membership default to residue `LIG` 1 on chain `A`,
    /// occupancy to 1.0 and b-factor and charge to 0.0.
    pub fn new(id: usize, element: &str, name: &str, position: Point3<f64>) -> Self {
        let data = elements::element_data(element);
        Self {
            id,
            element: element.to_string(),
            name: name.to_string(),
            position,
            residue_name: "LIG".to_string(),
            residue_id: 1,
            chain_id: "A".to_string(),
            occupancy: 1.0,
            b_factor: 0.0,
            charge: 0.0,
            radius: data.radius,
            color: data.color.to_string(),
            selected: false,
        }
    }

    pub fn distance_to(&self, other: &Atom) -> f64 {
        (self.position - other.position).norm()
    }

    pub fn mass(&self) -> f64 {
        elements::element_data(&self.element).mass
    }
}
