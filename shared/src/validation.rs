//! Validation utilities for the Coffee Yield Calculator
//!
//! Input-side checks that keep NaN and negative weights away from the
//! conversion engine, plus a structural check on the static ratio table.

use crate::models::{ProcessingStage, RatioEntry, CONVERSION_TABLE};

/// Validate a weight quantity before conversion
pub fn validate_quantity(quantity: f64) -> Result<(), &'static str> {
    if quantity.is_nan() {
        return Err("Quantity is not a number");
    }
    if quantity.is_infinite() {
        return Err("Quantity must be finite");
    }
    if quantity < 0.0 {
        return Err("Quantity cannot be negative");
    }
    Ok(())
}

/// Parse free-text weight input from a form field
///
/// Unparseable text, negative values, and non-finite values all coerce
/// to 0.0, so NaN never reaches the engine.
pub fn parse_quantity(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

/// Check the static ratio table against its structural invariants
///
/// The table is complete by construction; this guards the invariants a
/// future edit could break: canonical order, a green coffee basis of
/// exactly 1.0, strictly positive ratios that never increase along the
/// chain, and the estimate flag sitting only on honey parchment.
pub fn verify_conversion_table() -> Result<(), &'static str> {
    for (i, entry) in CONVERSION_TABLE.iter().enumerate() {
        if entry.stage != ProcessingStage::ALL[i] {
            return Err("Ratio table is not in canonical chain order");
        }
        if !(entry.ratio > 0.0) {
            return Err("Ratios must be strictly positive");
        }
        if i > 0 && entry.ratio > CONVERSION_TABLE[i - 1].ratio {
            return Err("Ratios must not increase along the chain");
        }
        if entry.is_estimate != (entry.stage == ProcessingStage::HoneyParchment) {
            return Err("Only the honey parchment ratio is an estimate");
        }
    }
    if RatioEntry::for_stage(ProcessingStage::GreenCoffee).ratio != 1.0 {
        return Err("Green coffee ratio must be exactly 1.0");
    }
    Ok(())
}
