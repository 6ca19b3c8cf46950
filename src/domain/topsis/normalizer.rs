//! Normalizer and Weighter - Column-wise vector normalization and weighting.

use super::criteria::WeightVector;
use super::DecisionMatrix;
use crate::domain::foundation::ValidationError;

/// Row-major matrix whose columns have unit Euclidean length.
pub type NormalizedMatrix = Vec<Vec<f64>>;

/// Row-major normalized matrix scaled by criterion weights.
pub type WeightedMatrix = Vec<Vec<f64>>;

/// Euclidean length of `components`, computed as `largest · sqrt(Σ (c / largest)²)`
/// so squaring neither overflows nor underflows for finite input.
pub(super) fn euclidean_length<I>(components: I) -> f64
where
    I: IntoIterator<Item = f64> + Clone,
{
    let largest = components
        .clone()
        .into_iter()
        .fold(0.0_f64, |acc, c| acc.max(c.abs()));
    if largest == 0.0 || !largest.is_finite() {
        return largest;
    }
    let sum: f64 = components
        .into_iter()
        .map(|c| {
            let ratio = c / largest;
            ratio * ratio
        })
        .sum();
    largest * sum.sqrt()
}

/// Euclidean norm of every criterion column: `sqrt(Σ_i a_ij²)`.
///
/// Finite for any finite column except one that sits at the edge of the
/// `f64` range, where the norm itself exceeds `f64::MAX`. [`normalize`]
/// does not depend on the norm being representable.
pub fn column_norms(matrix: &DecisionMatrix) -> Vec<f64> {
    (0..matrix.criterion_count())
        .map(|j| euclidean_length(matrix.rows().iter().map(|row| row[j])))
        .collect()
}

/// Rescales each column to unit length: `n_ij = a_ij / norm_j`.
///
/// Two passes: every column's largest magnitude and unit-scaled length
/// first, then the division. Each value is divided by the column maximum
/// before the length is taken, so huge or tiny columns normalize like any
/// other. An all-zero column fails with `DegenerateColumn`.
pub fn normalize(matrix: &DecisionMatrix) -> Result<NormalizedMatrix, ValidationError> {
    let mut scales = Vec::with_capacity(matrix.criterion_count());
    for (j, criterion) in matrix.criteria().iter().enumerate() {
        let largest = matrix
            .rows()
            .iter()
            .fold(0.0_f64, |acc, row| acc.max(row[j].abs()));
        if largest == 0.0 || !largest.is_finite() {
            return Err(ValidationError::degenerate_column(criterion.as_str()));
        }
        let unit_length = euclidean_length(matrix.rows().iter().map(|row| row[j] / largest));
        scales.push((largest, unit_length));
    }

    Ok(matrix
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .zip(&scales)
                .map(|(value, (largest, unit_length))| value / largest / unit_length)
                .collect()
        })
        .collect())
}

/// Scales every normalized column by its weight: `v_ij = w_j · n_ij`.
pub fn apply_weights(normalized: &NormalizedMatrix, weights: &WeightVector) -> WeightedMatrix {
    normalized
        .iter()
        .map(|row| {
            row.iter()
                .zip(weights.as_slice())
                .map(|(value, weight)| value * weight)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn sample() -> DecisionMatrix {
        DecisionMatrix::builder()
            .row("A", vec![10.0, 20.0, 30.0])
            .row("B", vec![15.0, 25.0, 35.0])
            .row("C", vec![20.0, 30.0, 40.0])
            .build()
            .unwrap()
    }

    #[test]
    fn column_norms_are_euclidean() {
        let norms = column_norms(&sample());
        let expected = (10.0_f64.powi(2) + 15.0_f64.powi(2) + 20.0_f64.powi(2)).sqrt();
        assert!((norms[0] - expected).abs() < EPSILON);
    }

    #[test]
    fn normalized_columns_have_unit_length() {
        let normalized = normalize(&sample()).unwrap();
        assert_eq!(normalized.len(), 3);
        for j in 0..3 {
            let length: f64 = normalized.iter().map(|row| row[j] * row[j]).sum::<f64>().sqrt();
            assert!((length - 1.0).abs() < EPSILON, "column {} has length {}", j, length);
        }
    }

    #[test]
    fn normalize_preserves_shape() {
        let normalized = normalize(&sample()).unwrap();
        assert!(normalized.iter().all(|row| row.len() == 3));
    }

    #[test]
    fn zero_column_is_degenerate() {
        let matrix = DecisionMatrix::builder()
            .criteria(vec!["Price", "Zero"])
            .row("A", vec![1.0, 0.0])
            .row("B", vec![2.0, 0.0])
            .build()
            .unwrap();
        assert_eq!(
            normalize(&matrix).unwrap_err(),
            ValidationError::degenerate_column("Zero")
        );
    }

    #[test]
    fn columns_at_the_edge_of_f64_range_still_normalize() {
        let matrix = DecisionMatrix::builder()
            .row("A", vec![f64::MAX, 1e200])
            .row("B", vec![f64::MAX, 2e200])
            .build()
            .unwrap();
        let normalized = normalize(&matrix).unwrap();

        let half = std::f64::consts::FRAC_1_SQRT_2;
        assert!((normalized[0][0] - half).abs() < EPSILON);
        assert!((normalized[1][0] - half).abs() < EPSILON);
        assert!((normalized[0][1] - 1.0 / 5.0_f64.sqrt()).abs() < EPSILON);
        assert!((normalized[1][1] - 2.0 / 5.0_f64.sqrt()).abs() < EPSILON);
    }

    #[test]
    fn tiny_columns_normalize_without_underflow() {
        let matrix = DecisionMatrix::builder()
            .row("A", vec![3e-200])
            .row("B", vec![4e-200])
            .build()
            .unwrap();
        let normalized = normalize(&matrix).unwrap();
        assert!((normalized[0][0] - 0.6).abs() < EPSILON);
        assert!((normalized[1][0] - 0.8).abs() < EPSILON);
    }

    #[test]
    fn euclidean_length_survives_large_and_small_components() {
        assert_eq!(euclidean_length([3.0, 4.0]), 5.0);
        assert_eq!(euclidean_length([0.0, 0.0]), 0.0);
        assert!((euclidean_length([3e200, 4e200]) / 5e200 - 1.0).abs() < EPSILON);
        assert!((euclidean_length([3e-200, 4e-200]) / 5e-200 - 1.0).abs() < EPSILON);

        let single = DecisionMatrix::builder()
            .row("A", vec![f64::MAX])
            .build()
            .unwrap();
        assert_eq!(column_norms(&single), vec![f64::MAX]);
    }

    #[test]
    fn apply_weights_scales_columns() {
        let normalized = vec![vec![0.6, 0.8], vec![0.8, 0.6]];
        let weighted = apply_weights(&normalized, &WeightVector::new(vec![1.0, 2.0]));
        assert_eq!(weighted, vec![vec![0.6, 1.6], vec![0.8, 1.2]]);
    }
}
