//! # MolScope Core Library
//!
//! Parsing, modeling, energy evaluation, relaxation and measurement of small molecular
//! structures.
//!
//! ## Architectural Philosophy
//!
//! The library is split into three layers, each depending only on the ones below it.
//!
//! - **[`core`]: The Foundation.** Immutable data models (`Molecule`, `Atom`, `Bond`),
//!   the element table, format parsers and the PDB writer, bond inference, the energy
//!   model (`potentials`, `scoring`) and geometry measurement. Everything here is a pure
//!   function of its inputs.
//!
//! - **[`engine`]: The Relaxation Kernel.** Validated minimization settings, the
//!   steepest-descent minimizer and the progress events emitted while it runs.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together into complete
//!   procedures, such as chunked minimization with energy tracing.

pub mod core;
pub mod engine;
pub mod workflows;
