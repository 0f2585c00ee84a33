//! # Workflows Module
//!
//! Top-level entry points that combine the core algorithms with configuration,
//! logging and progress reporting.
//!
//! - **Minimization Workflow** ([`minimize`]) - chunked steepest-descent relaxation with
//!   per-chunk energy tracing.

pub mod minimize;
