//! Tire condition and pressure classification.

use serde::Serialize;

/// Wear-based condition bucket for a tire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TireCondition {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs replacement")]
    NeedsReplacement,
}

impl TireCondition {
    /// Bucket a wear percentage: `<20` excellent, `<50` good, `<80` fair,
    /// anything else needs replacement.
    pub fn from_wear(wear_percentage: i32) -> Self {
        match wear_percentage {
            w if w < 20 => Self::Excellent,
            w if w < 50 => Self::Good,
            w if w < 80 => Self::Fair,
            _ => Self::NeedsReplacement,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsReplacement => "Needs replacement",
        }
    }
}

impl std::fmt::Display for TireCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Lower bound (bar) of the normal pressure band.
pub const PRESSURE_LOW_BELOW: f64 = 1.8;
/// Upper bound (bar) of the normal pressure band.
pub const PRESSURE_HIGH_ABOVE: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PressureRecommendation {
    Low,
    Normal,
    High,
}

impl PressureRecommendation {
    pub fn from_pressure(pressure: f64) -> Self {
        if pressure < PRESSURE_LOW_BELOW {
            Self::Low
        } else if pressure > PRESSURE_HIGH_ABOVE {
            Self::High
        } else {
            Self::Normal
        }
    }
}
