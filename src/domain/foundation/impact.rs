//! Impact value object: whether higher or lower values of a criterion are preferred.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Tokens accepted when parsing an impact.
pub const IMPACT_TOKENS: [&str; 2] = ["+", "-"];

/// Preference direction of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    /// Higher is better (`+`).
    #[serde(rename = "+")]
    Benefit,
    /// Lower is better (`-`).
    #[serde(rename = "-")]
    Cost,
}

impl Impact {
    /// Returns the textual token.
    pub fn token(&self) -> &'static str {
        match self {
            Impact::Benefit => "+",
            Impact::Cost => "-",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Impact::Benefit => "Benefit",
            Impact::Cost => "Cost",
        }
    }

    /// Returns the opposite direction.
    pub fn flipped(&self) -> Self {
        match self {
            Impact::Benefit => Impact::Cost,
            Impact::Cost => Impact::Benefit,
        }
    }

    pub fn is_benefit(&self) -> bool {
        matches!(self, Impact::Benefit)
    }
}

impl FromStr for Impact {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Impact::Benefit),
            "-" => Ok(Impact::Cost),
            other => Err(ValidationError::unknown_impact(other, &IMPACT_TOKENS)),
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
