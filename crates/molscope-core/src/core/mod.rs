//! # Core Module
//!
//! Stateless building blocks: the molecular data model, file formats, connectivity
//! inference, the energy model and geometric measurement.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms, bonds, residues, chains and molecules
//! - **Element Data** ([`elements`]) - Static per-element display and Lennard-Jones parameters
//! - **File I/O** ([`io`]) - Fixed-column, counts-block and sectioned-tag readers; fixed-column writer
//! - **Connectivity** ([`topology`]) - Distance-based bond inference
//! - **Energy Calculations** ([`forcefield`]) - Harmonic bond and Lennard-Jones terms
//! - **Measurement** ([`measure`]) - Distances, angles and dihedrals over atom sets
//!
//! Every operation here takes its input by reference and returns a new value; none of
//! them perform I/O except the explicit `*_path` helpers in [`io`].

pub mod elements;
pub mod forcefield;
pub mod io;
pub mod measure;
pub mod models;
pub mod topology;
pub mod utils;
