//! Ideal-Point Resolver - Best and worst attainable value per criterion.

use serde::{Deserialize, Serialize};

use super::criteria::ImpactVector;
use super::normalizer::WeightedMatrix;
use crate::domain::foundation::Impact;

/// Ideal and anti-ideal profiles of a weighted matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealSolution {
    /// Best attainable value per criterion.
    pub ideal: Vec<f64>,
    /// Worst attainable value per criterion.
    pub anti_ideal: Vec<f64>,
}

impl IdealSolution {
    /// Resolves both profiles column by column.
    ///
    /// Benefit criteria take the column maximum as ideal and the minimum as
    /// anti-ideal; cost criteria the reverse. Only values are kept, so
    /// ties between rows do not matter.
    pub fn resolve(weighted: &WeightedMatrix, impacts: &ImpactVector) -> Self {
        let mut ideal = Vec::with_capacity(impacts.len());
        let mut anti_ideal = Vec::with_capacity(impacts.len());

        for (j, impact) in impacts.as_slice().iter().enumerate() {
            let (min, max) = weighted.iter().map(|row| row[j]).fold(
                (f64::INFINITY, f64::NEG_INFINITY),
                |(min, max), value| (min.min(value), max.max(value)),
            );

            match impact {
                Impact::Benefit => {
                    ideal.push(max);
                    anti_ideal.push(min);
                }
                Impact::Cost => {
                    ideal.push(min);
                    anti_ideal.push(max);
                }
            }
        }

        Self { ideal, anti_ideal }
    }
}
