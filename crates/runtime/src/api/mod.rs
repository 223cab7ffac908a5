//! Public runtime API surface.
//!
//! This module gathers the error types exposed to consumers of the runtime
//! crate so the brain and world layers can stay focused on their own concerns.

pub mod errors;

pub use errors::{Result, SimulationError};
