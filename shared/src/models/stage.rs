//! Coffee processing stages

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A discrete point in the coffee value chain, from harvested fruit to
/// exportable milled beans
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStage {
    FreshCherry,
    PulpedCoffee,
    DrainedParchment,
    /// Whole fruit dried without pulping (natural process)
    DriedCherry,
    /// Dried with mucilage attached (honey process)
    HoneyParchment,
    /// Dried in the hull after washing (washed process)
    DryParchment,
    /// Canonical reference stage (ratio 1.00)
    GreenCoffee,
}

impl ProcessingStage {
    /// All stages in canonical chain order, fresh cherry first
    pub const ALL: [ProcessingStage; 7] = [
        ProcessingStage::FreshCherry,
        ProcessingStage::PulpedCoffee,
        ProcessingStage::DrainedParchment,
        ProcessingStage::DriedCherry,
        ProcessingStage::HoneyParchment,
        ProcessingStage::DryParchment,
        ProcessingStage::GreenCoffee,
    ];

    /// Stable identifier, matching the serialized form
    pub fn code(&self) -> &'static str {
        match self {
            ProcessingStage::FreshCherry => "fresh_cherry",
            ProcessingStage::PulpedCoffee => "pulped_coffee",
            ProcessingStage::DrainedParchment => "drained_parchment",
            ProcessingStage::DriedCherry => "dried_cherry",
            ProcessingStage::HoneyParchment => "honey_parchment",
            ProcessingStage::DryParchment => "dry_parchment",
            ProcessingStage::GreenCoffee => "green_coffee",
        }
    }

    /// Human-readable name from the ratio table
    pub fn label(&self) -> &'static str {
        crate::models::RatioEntry::for_stage(*self).label
    }
}

impl std::fmt::Display for ProcessingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when a stage code does not name one of the seven stages
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown processing stage: {0}")]
pub struct UnknownStageError(pub String);

impl FromStr for ProcessingStage {
    type Err = UnknownStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProcessingStage::ALL
            .iter()
            .copied()
            .find(|stage| stage.code() == s)
            .ok_or_else(|| UnknownStageError(s.to_string()))
    }
}
