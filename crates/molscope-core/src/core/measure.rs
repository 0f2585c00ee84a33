use crate::core::models::ids::{IdGenerator, UuidGenerator};
use crate::core::models::measurement::{Measurement, MeasurementKind};
use crate::core::models::molecule::Molecule;
use crate::core::utils::geometry;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeasurementError {
    #[error("A {kind} measurement needs {expected} atoms, got {found}")]
    InvalidArity {
        kind: MeasurementKind,
        expected: usize,
        found: usize,
    },
    #[error("Atom index {index} is out of range for a molecule with {atom_count} atoms")]
    AtomIndexOutOfRange { index: usize, atom_count: usize },
}

/// Measures a distance, angle or dihedral over the atoms at `indices`.
///
/// The value is rounded to two decimals. Distances are in Angstroms, angles and
/// dihedrals in degrees; dihedrals are signed.
///
/// # Errors
///
/// Returns [`MeasurementError::InvalidArity`] when the number of indices does not
/// match the kind, and [`MeasurementError::AtomIndexOutOfRange`] when an index does
/// not refer to an atom. Both checks run before any geometry is computed.
pub fn measure(
    molecule: &Molecule,
    indices: &[usize],
    kind: MeasurementKind,
) -> Result<Measurement, MeasurementError> {
    measure_with(molecule, indices, kind, &UuidGenerator)
}

pub fn measure_with(
    molecule: &Molecule,
    indices: &[usize],
    kind: MeasurementKind,
    ids: &dyn IdGenerator,
) -> Result<Measurement, MeasurementError> {
    if indices.len() != kind.arity() {
        return Err(MeasurementError::InvalidArity {
            kind,
            expected: kind.arity(),
            found: indices.len(),
        });
    }

    let atom_count = molecule.atom_count();
    let positions = indices
        .iter()
        .map(|&index| {
            molecule
                .atom(index)
                .map(|a| a.position)
                .ok_or(MeasurementError::AtomIndexOutOfRange { index, atom_count })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let value = match kind {
        MeasurementKind::Distance => geometry::distance(&positions[0], &positions[1]),
        MeasurementKind::Angle => geometry::angle(&positions[0], &positions[1], &positions[2]),
        MeasurementKind::Dihedral => geometry::dihedral(
            &positions[0],
            &positions[1],
            &positions[2],
            &positions[3],
        ),
    };

    Ok(Measurement {
        id: ids.next_id(),
        kind,
        atom_indices: indices.to_vec(),
        value: geometry::round2(value),
        unit: kind.unit().to_string(),
        visible: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::builder::MoleculeBuilder;
    use crate::core::models::ids::SequentialIdGenerator;
    use nalgebra::Point3;

    fn butane_like(d_y: f64) -> Molecule {
        let mut builder = MoleculeBuilder::new("frame");
        builder.add_atom("C", "C1", Point3::new(0.0, 1.5, 0.0));
        builder.add_atom("C", "C2", Point3::new(0.0, 0.0, 0.0));
        builder.add_atom("C", "C3", Point3::new(1.5, 0.0, 0.0));
        builder.add_atom("C", "C4", Point3::new(1.5, d_y, 0.0));
        builder.build(&SequentialIdGenerator::new("m"))
    }

    fn ids() -> SequentialIdGenerator {
        SequentialIdGenerator::new("meas")
    }

    #[test]
    fn distance_is_rounded_and_in_angstrom() {
        let mol = butane_like(1.5);
        let m = measure_with(&mol, &[0, 2], MeasurementKind::Distance, &ids()).unwrap();
        assert_eq!(m.value, 2.12);
        assert_eq!(m.unit, "Å");
        assert_eq!(m.id, "meas-1");
        assert_eq!(m.atom_indices, vec![0, 2]);
        assert!(m.visible);
    }

    #[test]
    fn angle_is_in_degrees() {
        let mol = butane_like(1.5);
        let m = measure(&mol, &[0, 1, 2], MeasurementKind::Angle).unwrap();
        assert_eq!(m.value, 90.0);
        assert_eq!(m.unit, "°");
    }

    #[test]
    fn cis_and_trans_dihedrals() {
        let cis = measure(&butane_like(1.5), &[0, 1, 2, 3], MeasurementKind::Dihedral).unwrap();
        assert!((cis.value - 0.0).abs() < 0.01);

        let trans = measure(&butane_like(-1.5), &[0, 1, 2, 3], MeasurementKind::Dihedral).unwrap();
        assert!((trans.value - 180.0).abs() < 0.01);
    }

    #[test]
    fn wrong_index_count_is_rejected() {
        let mol = butane_like(1.5);
        let err = measure(&mol, &[0, 1, 2], MeasurementKind::Distance).unwrap_err();
        assert_eq!(
            err,
            MeasurementError::InvalidArity {
                kind: MeasurementKind::Distance,
                expected: 2,
                found: 3
            }
        );
        assert!(measure(&mol, &[0], MeasurementKind::Dihedral).is_err());
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mol = butane_like(1.5);
        let err = measure(&mol, &[0, 9, 2], MeasurementKind::Angle).unwrap_err();
        assert_eq!(
            err,
            MeasurementError::AtomIndexOutOfRange {
                index: 9,
                atom_count: 4
            }
        );
    }
}
