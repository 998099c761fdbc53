//! Static mass-ratio table referenced to green coffee

use serde::Serialize;

use super::ProcessingStage;

/// Static metadata for one processing stage
///
/// `ratio` is the mass of this stage's material equivalent to 1 kg of
/// green coffee, so `input mass / ratio` gives the green-coffee
/// equivalent. Ratios are unit-agnostic multipliers.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct RatioEntry {
    pub stage: ProcessingStage,
    pub label: &'static str,
    pub ratio: f64,
    pub description: &'static str,
    /// Hex color used by the chart and metric cards
    pub color: &'static str,
    /// True when the ratio is an interpolated estimate rather than a
    /// sourced reference value
    pub is_estimate: bool,
}

/// Conversion ratios per stage, in canonical chain order.
///
/// The honey parchment ratio has no authoritative source; 1.30 is an
/// interpolation between dry parchment (1.25) and dried cherry (2.25)
/// and is flagged as an estimate.
pub const CONVERSION_TABLE: [RatioEntry; 7] = [
    RatioEntry {
        stage: ProcessingStage::FreshCherry,
        label: "Fresh Red Cherry",
        ratio: 5.56,
        description: "Raw harvested fruit",
        color: "#D9381E",
        is_estimate: false,
    },
    RatioEntry {
        stage: ProcessingStage::PulpedCoffee,
        label: "Pulped Coffee",
        ratio: 3.39,
        description: "Skin removed, wet mucilage",
        color: "#E6B98C",
        is_estimate: false,
    },
    RatioEntry {
        stage: ProcessingStage::DrainedParchment,
        label: "Drained Parchment",
        ratio: 2.31,
        description: "Washed and drained, wet",
        color: "#D6CFC7",
        is_estimate: false,
    },
    RatioEntry {
        stage: ProcessingStage::DriedCherry,
        label: "Dried Cherry (Natural)",
        ratio: 2.25,
        description: "Dry whole fruit (Natural Process)",
        color: "#8C5A47",
        is_estimate: false,
    },
    RatioEntry {
        stage: ProcessingStage::HoneyParchment,
        label: "Dry Honey (Est.)",
        ratio: 1.30,
        description: "Dried with mucilage attached",
        color: "#D4A017",
        is_estimate: true,
    },
    RatioEntry {
        stage: ProcessingStage::DryParchment,
        label: "Dry Parchment",
        ratio: 1.25,
        description: "Dried, hull intact (Washed Process)",
        color: "#F2E8C9",
        is_estimate: false,
    },
    RatioEntry {
        stage: ProcessingStage::GreenCoffee,
        label: "Green Coffee",
        ratio: 1.00,
        description: "Exportable milled beans",
        color: "#5A7C65",
        is_estimate: false,
    },
];

impl RatioEntry {
    /// Look up the table entry for a stage
    ///
    /// Total lookup: the enum discriminants follow canonical chain order,
    /// which is also the table order.
    pub fn for_stage(stage: ProcessingStage) -> &'static RatioEntry {
        &CONVERSION_TABLE[stage as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_in_canonical_order() {
        for (i, entry) in CONVERSION_TABLE.iter().enumerate() {
            assert_eq!(entry.stage, ProcessingStage::ALL[i]);
            assert_eq!(entry.stage as usize, i);
        }
    }

    #[test]
    fn test_lookup_returns_matching_entry() {
        for stage in ProcessingStage::ALL {
            assert_eq!(RatioEntry::for_stage(stage).stage, stage);
        }
    }

    #[test]
    fn test_green_coffee_is_reference() {
        let green = RatioEntry::for_stage(ProcessingStage::GreenCoffee);
        assert_eq!(green.ratio, 1.00);
        assert!(!green.is_estimate);
    }

    #[test]
    fn test_ratios_non_increasing_along_chain() {
        for pair in CONVERSION_TABLE.windows(2) {
            assert!(
                pair[0].ratio >= pair[1].ratio,
                "{} ({}) should be >= {} ({})",
                pair[0].label,
                pair[0].ratio,
                pair[1].label,
                pair[1].ratio
            );
        }
    }

    #[test]
    fn test_only_honey_is_estimate() {
        for entry in &CONVERSION_TABLE {
            assert_eq!(
                entry.is_estimate,
                entry.stage == ProcessingStage::HoneyParchment
            );
        }
    }
}
