//! # Core Models Module
//!
//! Data structures describing a molecular structure: atoms, bonds, residues, chains
//! and the measurements taken against them.
//!
//! ## Overview
//!
//! A [`molecule::Molecule`] owns a dense atom sequence. Every cross-reference (bond
//! endpoints, residue membership, measurement atoms) is an index into that sequence,
//! and each atom's `id` equals its index. Molecules are assembled through
//! [`builder::MoleculeBuilder`], which groups residues and chains, rejects invalid
//! bonds and falls back to distance-based bond inference when no connectivity is
//! supplied.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom with coordinates, element and crystallographic fields
//! - [`topology`] - Bonds and bond orders
//! - [`residue`] / [`chain`] - Grouping of atoms by residue and chain
//! - [`molecule`] - The complete structure and its derived properties
//! - [`measurement`] - Distance, angle and dihedral results and their collection
//! - [`ids`] - Pluggable generation of opaque molecule and measurement identifiers
//!
//! ## Usage
//!
//! ```
//! use molscope::core::models::builder::MoleculeBuilder;
//! use molscope::core::models::ids::SequentialIdGenerator;
//! use molscope::core::models::topology::BondOrder;
//! use nalgebra::Point3;
//!
//! let mut builder = MoleculeBuilder::new("carbon monoxide");
//! let c = builder.add_atom("C", "C1", Point3::new(0.0, 0.0, 0.0));
//! let o = builder.add_atom("O", "O1", Point3::new(1.13, 0.0, 0.0));
//! builder.add_bond(c, o, BondOrder::Triple);
//!
//! let molecule = builder.build(&SequentialIdGenerator::new("mol"));
//! assert_eq!(molecule.formula(), "CO");
//! ```

pub mod atom;
pub mod builder;
pub mod chain;
pub mod ids;
pub mod measurement;
pub mod molecule;
pub mod residue;
pub mod topology;
