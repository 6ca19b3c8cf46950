//! Separation & Scoring - Distances to the ideal profiles and closeness coefficients.

use super::ideal::IdealSolution;
use super::normalizer::{euclidean_length, WeightedMatrix};

/// Score given when an alternative is at zero distance from both profiles.
pub const INDISTINGUISHABLE_SCORE: f64 = 0.5;

/// Per-alternative distances to the ideal (`S⁺`) and anti-ideal (`S⁻`).
#[derive(Debug, Clone, PartialEq)]
pub struct Separations {
    pub to_ideal: Vec<f64>,
    pub to_anti_ideal: Vec<f64>,
}

fn euclidean_distance(row: &[f64], point: &[f64]) -> f64 {
    euclidean_length(row.iter().zip(point).map(|(value, target)| value - target))
}

/// Euclidean separation of every row from both profiles.
pub fn separations(weighted: &WeightedMatrix, solution: &IdealSolution) -> Separations {
    Separations {
        to_ideal: weighted
            .iter()
            .map(|row| euclidean_distance(row, &solution.ideal))
            .collect(),
        to_anti_ideal: weighted
            .iter()
            .map(|row| euclidean_distance(row, &solution.anti_ideal))
            .collect(),
    }
}

/// Closeness coefficient `C_i = S⁻_i / (S⁺_i + S⁻_i)`, clamped to [0, 1].
///
/// A zero denominator only happens when every alternative is identical on
/// every criterion; such rows score [`INDISTINGUISHABLE_SCORE`]. Distances
/// must be finite and non-negative. When their sum overflows, both are
/// divided by the larger one first, so the ratio is always finite.
pub fn closeness(to_ideal: f64, to_anti_ideal: f64) -> f64 {
    debug_assert!(
        to_ideal.is_finite() && to_anti_ideal.is_finite(),
        "separations must be finite: S+ = {}, S- = {}",
        to_ideal,
        to_anti_ideal
    );
    let largest = to_ideal.max(to_anti_ideal);
    if largest == 0.0 {
        return INDISTINGUISHABLE_SCORE;
    }

    let total = to_ideal + to_anti_ideal;
    let ratio = if total.is_finite() {
        to_anti_ideal / total
    } else {
        let (plus, minus) = (to_ideal / largest, to_anti_ideal / largest);
        minus / (plus + minus)
    };
    ratio.clamp(0.0, 1.0)
}

/// Closeness coefficient for every alternative, in input order.
pub fn closeness_scores(separations: &Separations) -> Vec<f64> {
    separations
        .to_ideal
        .iter()
        .zip(&separations.to_anti_ideal)
        .map(|(plus, minus)| closeness(*plus, *minus))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn separations_are_euclidean_distances() {
        let weighted = vec![vec![0.0, 0.0], vec![3.0, 4.0]];
        let solution = IdealSolution {
            ideal: vec![3.0, 4.0],
            anti_ideal: vec![0.0, 0.0],
        };
        let result = separations(&weighted, &solution);
        assert_eq!(result.to_ideal, vec![5.0, 0.0]);
        assert_eq!(result.to_anti_ideal, vec![0.0, 5.0]);
    }

    #[test]
    fn closeness_is_one_at_ideal_and_zero_at_anti_ideal() {
        assert_eq!(closeness(0.0, 5.0), 1.0);
        assert_eq!(closeness(5.0, 0.0), 0.0);
    }

    #[test]
    fn closeness_falls_back_when_indistinguishable() {
        assert_eq!(closeness(0.0, 0.0), INDISTINGUISHABLE_SCORE);
    }

    #[test]
    fn closeness_stays_finite_when_distance_sum_overflows() {
        assert_eq!(closeness(f64::MAX, f64::MAX), 0.5);
        let third = closeness(f64::MAX, f64::MAX / 2.0);
        assert!((third - 1.0 / 3.0).abs() < EPSILON);
    }

    #[test]
    fn separations_of_huge_coordinates_are_finite() {
        let weighted = vec![vec![1e200, 1e200], vec![2e200, 2e200]];
        let solution = IdealSolution {
            ideal: vec![2e200, 2e200],
            anti_ideal: vec![1e200, 1e200],
        };
        let result = separations(&weighted, &solution);
        let diagonal = 2.0_f64.sqrt() * 1e200;
        assert!((result.to_ideal[0] / diagonal - 1.0).abs() < EPSILON);
        assert_eq!(result.to_ideal[1], 0.0);
        assert!((result.to_anti_ideal[1] / diagonal - 1.0).abs() < EPSILON);
    }

    #[test]
    fn separations_of_tiny_coordinates_do_not_vanish() {
        let weighted = vec![vec![3e-200, 4e-200], vec![0.0, 0.0]];
        let solution = IdealSolution {
            ideal: vec![3e-200, 4e-200],
            anti_ideal: vec![0.0, 0.0],
        };
        let result = separations(&weighted, &solution);
        assert!((result.to_anti_ideal[0] / 5e-200 - 1.0).abs() < EPSILON);
        assert_eq!(closeness_scores(&result), vec![1.0, 0.0]);
    }

    #[test]
    fn closeness_is_ratio_of_anti_ideal_distance() {
        assert!((closeness(1.0, 3.0) - 0.75).abs() < EPSILON);
    }

    #[test]
    fn closeness_scores_pairs_distances() {
        let scores = closeness_scores(&Separations {
            to_ideal: vec![1.0, 3.0],
            to_anti_ideal: vec![3.0, 1.0],
        });
        assert_eq!(scores, vec![0.75, 0.25]);
    }
}
