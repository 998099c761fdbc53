//! WebAssembly module for the Coffee Yield Calculator
//!
//! Provides client-side computation for:
//! - Stage-to-stage weight conversion
//! - Green-coffee-equivalent lookups
//! - Ratio table metadata for the form, chart, and metric cards
//! - Form input parsing

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Convert a weight at one stage into the equivalent weight at every
/// stage, returned as a JSON array in canonical chain order
#[wasm_bindgen]
pub fn convert_weights(quantity: f64, stage: &str) -> Result<String, JsValue> {
    let stage: ProcessingStage = stage
        .parse()
        .map_err(|e: UnknownStageError| JsValue::from_str(&e.to_string()))?;

    let results = convert(quantity, stage);
    serde_json::to_string(&results)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Green-coffee-equivalent weight of a quantity at the given stage
///
/// Returns 0.0 for an unknown stage code or invalid quantity.
#[wasm_bindgen]
pub fn green_equivalent_of(quantity: f64, stage: &str) -> f64 {
    match stage.parse::<ProcessingStage>() {
        Ok(stage) => green_equivalent(quantity, stage),
        Err(_) => 0.0,
    }
}

/// The full ratio table (labels, ratios, colors, descriptions, estimate
/// flags) as JSON, in canonical chain order
#[wasm_bindgen]
pub fn stage_table() -> String {
    serde_json::to_string(&CONVERSION_TABLE).unwrap_or_else(|_| "[]".to_string())
}

/// Stage codes in canonical chain order, as a JSON array of strings
#[wasm_bindgen]
pub fn stage_codes() -> String {
    let codes: Vec<&str> = ProcessingStage::ALL.iter().map(|s| s.code()).collect();
    serde_json::to_string(&codes).unwrap_or_else(|_| "[]".to_string())
}

/// Parse free-text weight input from the form field
///
/// Unparseable or negative text coerces to 0.0 so NaN never reaches the
/// conversion engine.
#[wasm_bindgen]
pub fn parse_weight_input(text: &str) -> f64 {
    parse_quantity(text)
}
