//! Criteria vectors - Weights and impacts, plus their text-level parsers.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Impact, ValidationError};

/// One positive weight per criterion, in column order.
///
/// Weights need not sum to one; only their ratios affect the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Wraps weights without checking them; the Validator checks positivity.
    pub fn new(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    /// Wraps weights, rejecting any that is not strictly positive.
    pub fn try_new(weights: Vec<f64>) -> Result<Self, ValidationError> {
        check_weights_positive(&weights)?;
        Ok(Self(weights))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a copy with every weight multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self(self.0.iter().map(|w| w * factor).collect())
    }

    /// Returns the weights divided by the largest, so the biggest is `1.0`.
    ///
    /// Ratios are unchanged. Weights without a positive finite maximum are
    /// returned as they are.
    pub fn relative(&self) -> Self {
        let largest = self.0.iter().fold(0.0_f64, |acc, w| acc.max(*w));
        if largest <= 0.0 || !largest.is_finite() {
            return self.clone();
        }
        Self(self.0.iter().map(|w| w / largest).collect())
    }
}

impl From<Vec<f64>> for WeightVector {
    fn from(weights: Vec<f64>) -> Self {
        Self::new(weights)
    }
}

/// One impact per criterion, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImpactVector(Vec<Impact>);

impl ImpactVector {
    pub fn new(impacts: Vec<Impact>) -> Self {
        Self(impacts)
    }

    /// Parses tokens, failing on the first one that is not `+` or `-`.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, ValidationError> {
        tokens
            .iter()
            .map(|token| token.as_ref().parse::<Impact>())
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn as_slice(&self) -> &[Impact] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a copy with the impact at `index` reversed.
    pub fn with_flipped(&self, index: usize) -> Self {
        let mut impacts = self.0.clone();
        if let Some(impact) = impacts.get_mut(index) {
            *impact = impact.flipped();
        }
        Self(impacts)
    }

    /// Tokens joined for display, e.g. `+, +, -`.
    pub fn joined(&self) -> String {
        self.0
            .iter()
            .map(Impact::token)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl From<Vec<Impact>> for ImpactVector {
    fn from(impacts: Vec<Impact>) -> Self {
        Self::new(impacts)
    }
}

/// Fails with a range error unless every weight is finite and strictly positive.
pub(crate) fn check_weights_positive(weights: &[f64]) -> Result<(), ValidationError> {
    if let Some((index, weight)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| !w.is_finite() || **w <= 0.0)
    {
        return Err(ValidationError::range(
            "weights",
            format!(
                "all weights must be positive numbers (> 0), weight {} is {}",
                index + 1,
                weight
            ),
        ));
    }
    Ok(())
}

/// Parses comma-separated weights such as `"1,1,1,2"`.
///
/// Blank tokens are skipped. Positivity is not checked here.
pub fn parse_weights(text: &str) -> Result<Vec<f64>, ValidationError> {
    let weights = text
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<f64>().map_err(|_| {
                ValidationError::schema(
                    "weights",
                    format!(
                        "'{}' is not a number; use comma-separated values like 1,2,3",
                        token
                    ),
                )
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if weights.is_empty() {
        return Err(ValidationError::schema("weights", "weights cannot be empty"));
    }
    Ok(weights)
}

/// Splits comma-separated impact tokens such as `"+,+,-"`.
///
/// Input without commas that consists only of `+`/`-` symbols and spaces
/// (e.g. `"++-"`) is split per symbol. Tokens are not checked here; see
/// [`ImpactVector::from_tokens`].
pub fn parse_impacts(text: &str) -> Result<Vec<String>, ValidationError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let tokens: Vec<String> = if !compact.contains(',')
        && !compact.is_empty()
        && compact.chars().all(|c| c == '+' || c == '-')
    {
        compact.chars().map(String::from).collect()
    } else {
        text.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(String::from)
            .collect()
    };

    if tokens.is_empty() {
        return Err(ValidationError::schema("impacts", "impacts cannot be empty"));
    }
    Ok(tokens)
}
