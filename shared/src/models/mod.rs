//! Domain models for the Coffee Yield Calculator

mod conversion;
mod ratio;
mod stage;

pub use conversion::*;
pub use ratio::*;
pub use stage::*;
