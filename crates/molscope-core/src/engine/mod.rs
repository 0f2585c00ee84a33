//! # Engine Module
//!
//! Geometric relaxation machinery shared by the workflows.
//!
//! - **Configuration** ([`config`]) - step counts, step size and force cap, with a builder
//!   that validates every value before a run starts.
//! - **Minimizer** ([`minimizer`]) - the steepest-descent kernel. It is a pure function of
//!   its inputs: callers that want incremental progress invoke it repeatedly with a
//!   bounded step count, feeding each result back in.
//! - **Progress Monitoring** ([`progress`]) - events emitted by long-running workflows.
//! - **Error Handling** ([`error`]) - failures surfaced by the workflows.

pub mod config;
pub mod error;
pub mod minimizer;
pub mod progress;
