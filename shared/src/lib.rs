//! Shared types and conversion logic for the Coffee Yield Calculator
//!
//! This crate contains the processing-stage data model, the static
//! mass-ratio table, and the conversion engine shared between the
//! frontend (via WASM) and other consumers.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
