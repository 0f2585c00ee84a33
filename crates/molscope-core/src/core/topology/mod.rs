//! # Topology Module
//!
//! Connectivity derived from geometry rather than from explicit records.
//!
//! Parsers that find no bond records in their input hand the atom sequence to
//! [`inference::infer_bonds`], which connects every pair of atoms whose separation
//! falls inside a window scaled by the atoms' radii.

pub mod inference;
