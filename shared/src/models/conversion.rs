//! The conversion engine and its result types

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{ProcessingStage, RatioEntry};
use crate::types::MassUnit;

/// Equivalent weight at one stage, in the same (display-only) unit as
/// the original input
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ConversionResult {
    pub stage: ProcessingStage,
    pub weight: f64,
}

/// Convert a measured weight at one stage into the equivalent weight at
/// every stage
///
/// The input is first reduced to its green-coffee equivalent
/// (`quantity / ratio[stage]`), then projected back out through each
/// stage's ratio. Two guarantees follow: the entry for `input_stage`
/// reproduces the input weight (within floating-point rounding), and the
/// green coffee entry always equals the shared basis.
///
/// Returns one entry per stage in canonical chain order. NaN or negative
/// input yields an empty vec rather than partial or garbage results.
pub fn convert(input_quantity: f64, input_stage: ProcessingStage) -> Vec<ConversionResult> {
    if input_quantity.is_nan() || input_quantity < 0.0 {
        return Vec::new();
    }

    let green_equivalent = input_quantity / RatioEntry::for_stage(input_stage).ratio;

    ProcessingStage::ALL
        .iter()
        .map(|&stage| ConversionResult {
            stage,
            weight: green_equivalent * RatioEntry::for_stage(stage).ratio,
        })
        .collect()
}

/// Green-coffee-equivalent weight of a quantity at the given stage
///
/// Returns 0.0 when the quantity is NaN or negative.
pub fn green_equivalent(quantity: f64, stage: ProcessingStage) -> f64 {
    if quantity.is_nan() || quantity < 0.0 {
        return 0.0;
    }
    quantity / RatioEntry::for_stage(stage).ratio
}

/// A conversion request as supplied by an input form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConversionRequest {
    #[validate(range(min = 0.0))]
    pub quantity: f64,
    pub stage: ProcessingStage,
    /// Display unit only; never affects the arithmetic
    #[serde(default)]
    pub unit: MassUnit,
}

impl ConversionRequest {
    /// Run the engine for this request
    pub fn results(&self) -> Vec<ConversionResult> {
        convert(self.quantity, self.stage)
    }
}

/// Headline figures from a full result set: the exportable green weight
/// plus the washed and natural process outcomes
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ConversionSummary {
    pub green_coffee: f64,
    pub dry_parchment: f64,
    pub dried_cherry: f64,
}

impl ConversionSummary {
    /// Extract the summary figures, or None when the result set is empty
    pub fn from_results(results: &[ConversionResult]) -> Option<Self> {
        let weight_of = |stage: ProcessingStage| {
            results
                .iter()
                .find(|r| r.stage == stage)
                .map(|r| r.weight)
        };
        Some(Self {
            green_coffee: weight_of(ProcessingStage::GreenCoffee)?,
            dry_parchment: weight_of(ProcessingStage::DryParchment)?,
            dried_cherry: weight_of(ProcessingStage::DriedCherry)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_returns_all_stages_in_order() {
        let results = convert(50.0, ProcessingStage::PulpedCoffee);
        assert_eq!(results.len(), 7);
        for (result, expected) in results.iter().zip(ProcessingStage::ALL) {
            assert_eq!(result.stage, expected);
        }
    }

    #[test]
    fn test_convert_rejects_nan_and_negative() {
        for stage in ProcessingStage::ALL {
            assert!(convert(f64::NAN, stage).is_empty());
            assert!(convert(-1.0, stage).is_empty());
        }
    }

    #[test]
    fn test_green_equivalent_guards_bad_input() {
        assert_eq!(green_equivalent(f64::NAN, ProcessingStage::FreshCherry), 0.0);
        assert_eq!(green_equivalent(-5.0, ProcessingStage::GreenCoffee), 0.0);
        let expected = 100.0 / 5.56;
        assert!((green_equivalent(100.0, ProcessingStage::FreshCherry) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_request_validation() {
        let valid = ConversionRequest {
            quantity: 100.0,
            stage: ProcessingStage::FreshCherry,
            unit: MassUnit::Kg,
        };
        assert!(valid.validate().is_ok());

        let negative = ConversionRequest {
            quantity: -1.0,
            ..valid.clone()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_request_deserializes_with_default_unit() {
        let request: ConversionRequest =
            serde_json::from_str(r#"{"quantity": 100, "stage": "fresh_cherry"}"#).unwrap();
        assert_eq!(request.unit, MassUnit::Kg);
        assert_eq!(request.stage, ProcessingStage::FreshCherry);
        assert_eq!(request.results().len(), 7);
    }

    #[test]
    fn test_summary_from_results() {
        let results = convert(100.0, ProcessingStage::GreenCoffee);
        let summary = ConversionSummary::from_results(&results).unwrap();
        assert!((summary.green_coffee - 100.0).abs() < 1e-9);
        assert!((summary.dry_parchment - 125.0).abs() < 1e-9);
        assert!((summary.dried_cherry - 225.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_empty_results() {
        assert!(ConversionSummary::from_results(&[]).is_none());
    }
}
