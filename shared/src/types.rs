//! Common types used across the calculator

use serde::{Deserialize, Serialize};

/// Display units offered by the weight input
///
/// Purely a label: ratios are unit-agnostic multipliers, so the selected
/// unit never changes the arithmetic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    #[default]
    Kg,
    Lbs,
    /// Quintal, the Latin American coffee bag convention
    Qq,
}

impl MassUnit {
    pub fn code(&self) -> &'static str {
        match self {
            MassUnit::Kg => "kg",
            MassUnit::Lbs => "lbs",
            MassUnit::Qq => "qq",
        }
    }
}

impl std::fmt::Display for MassUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
