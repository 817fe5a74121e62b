// =============================================================================
// Shared types used across the setup screener
// =============================================================================

use serde::{Deserialize, Serialize};

/// Which pattern family a screening run is filtering on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternType {
    Reversal,
    Breakout,
    Both,
}

impl Default for PatternType {
    fn default() -> Self {
        Self::Both
    }
}

impl std::fmt::Display for PatternType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reversal => write!(f, "reversal"),
            Self::Breakout => write!(f, "breakout"),
            Self::Both => write!(f, "both"),
        }
    }
}

impl std::str::FromStr for PatternType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reversal" => Ok(Self::Reversal),
            "breakout" => Ok(Self::Breakout),
            "both" => Ok(Self::Both),
            other => Err(format!("unknown pattern type: {other}")),
        }
    }
}

/// Actionable tier derived from the composite score.
///
/// Boundaries are inclusive at the lower bound:
///   [75, 100] Strong Setup, [60, 75) Good Setup,
///   [45, 60)  Monitor,      [0, 45)  Weak Setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    StrongSetup,
    GoodSetup,
    Monitor,
    WeakSetup,
}

impl Recommendation {
    /// Map a composite score to its tier.
    pub fn from_composite(score: f64) -> Self {
        if score >= 75.0 {
            Self::StrongSetup
        } else if score >= 60.0 {
            Self::GoodSetup
        } else if score >= 45.0 {
            Self::Monitor
        } else {
            Self::WeakSetup
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StrongSetup => write!(f, "Strong Setup"),
            Self::GoodSetup => write!(f, "Good Setup"),
            Self::Monitor => write!(f, "Monitor"),
            Self::WeakSetup => write!(f, "Weak Setup"),
        }
    }
}
