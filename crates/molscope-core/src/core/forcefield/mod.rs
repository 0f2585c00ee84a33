//! # Forcefield Module
//!
//! A deliberately small molecular mechanics model: a harmonic stretch term for every
//! bond and a Lennard-Jones 12-6 term for every non-bonded atom pair.
//!
//! ## Key Components
//!
//! - [`params`] - Force constants and per-element Lennard-Jones parameters, with TOML overrides
//! - [`potentials`] - Pure potential functions and mixing rules
//! - [`term`] - [`term::EnergyBreakdown`], the per-contribution result
//! - [`scoring`] - Whole-molecule evaluation through [`scoring::Scorer`] and [`scoring::total_energy`]
//!
//! ## Usage
//!
//! ```
//! use molscope::core::forcefield::scoring::total_energy;
//! use molscope::core::models::molecule::Molecule;
//!
//! let caffeine = Molecule::demo_caffeine();
//! let energy = total_energy(&caffeine);
//! assert_eq!(energy.total(), energy.bond + energy.vdw);
//! ```

pub(crate) mod energy;
pub mod params;
pub mod potentials;
pub mod scoring;
pub mod term;
