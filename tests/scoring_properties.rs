//! Algebraic properties of TOPSIS scoring.
//!
//! Generates random positive decision matrices and checks bounds, rank
//! consistency and the invariances of vector normalization. Values and
//! weights span the whole positive `f64` range, not only everyday
//! magnitudes.

use std::ops::Range;

use proptest::prelude::*;

use topsis_ranker::domain::foundation::Impact;
use topsis_ranker::domain::topsis::{DecisionMatrix, ImpactVector, TopsisEngine, WeightVector};

const EPSILON: f64 = 1e-9;

/// Decimal exponents of values and weights in the full-range properties.
const FULL_RANGE: Range<f64> = -300.0..300.0;

/// Narrower exponents for properties that multiply by a scale factor drawn
/// from `SCALE_RANGE`, so the product stays finite.
const SCALABLE_RANGE: Range<f64> = -200.0..200.0;
const SCALE_RANGE: Range<f64> = -100.0..100.0;

#[derive(Debug, Clone)]
struct Problem {
    values: Vec<Vec<f64>>,
    weights: Vec<f64>,
    impacts: Vec<Impact>,
}

impl Problem {
    fn matrix(&self) -> DecisionMatrix {
        self.values
            .iter()
            .enumerate()
            .fold(DecisionMatrix::builder(), |builder, (i, row)| {
                builder.row(format!("A{}", i + 1), row.clone())
            })
            .build()
            .unwrap()
    }

    fn scores(&self) -> Vec<f64> {
        self.scores_with(
            &self.matrix(),
            &WeightVector::new(self.weights.clone()),
            &ImpactVector::new(self.impacts.clone()),
        )
    }

    fn scores_with(
        &self,
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Vec<f64> {
        TopsisEngine::score(matrix, weights, impacts)
            .unwrap()
            .scores()
    }
}

fn impact() -> impl Strategy<Value = Impact> {
    prop_oneof![Just(Impact::Benefit), Just(Impact::Cost)]
}

fn log_uniform(exponents: Range<f64>) -> impl Strategy<Value = f64> {
    exponents.prop_map(|exponent| 10f64.powf(exponent))
}

/// Everyday magnitudes half the time, otherwise anywhere in `10^exponents`.
fn magnitude(exponents: Range<f64>) -> impl Strategy<Value = f64> {
    prop_oneof![0.1f64..1000.0, log_uniform(exponents)]
}

fn problem_within(exponents: Range<f64>) -> impl Strategy<Value = Problem> {
    (1usize..7, 1usize..5).prop_flat_map(move |(alternatives, criteria)| {
        (
            prop::collection::vec(
                prop::collection::vec(magnitude(exponents.clone()), criteria),
                alternatives,
            ),
            prop::collection::vec(magnitude(exponents.clone()), criteria),
            prop::collection::vec(impact(), criteria),
        )
            .prop_map(|(values, weights, impacts)| Problem {
                values,
                weights,
                impacts,
            })
    })
}

fn problem() -> impl Strategy<Value = Problem> {
    problem_within(FULL_RANGE)
}

fn scalable_problem() -> impl Strategy<Value = Problem> {
    problem_within(SCALABLE_RANGE)
}

fn assert_close(left: &[f64], right: &[f64]) {
    assert_eq!(left.len(), right.len());
    for (l, r) in left.iter().zip(right) {
        assert!((l - r).abs() < EPSILON, "{} != {}", l, r);
    }
}

proptest! {
    #[test]
    fn scores_stay_in_unit_interval(problem in problem()) {
        for score in problem.scores() {
            prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
        }
    }

    #[test]
    fn ranks_are_consistent_with_scores(problem in problem()) {
        let ranking = TopsisEngine::score(
            &problem.matrix(),
            &WeightVector::new(problem.weights.clone()),
            &ImpactVector::new(problem.impacts.clone()),
        )
        .unwrap();
        let count = ranking.len();

        for a in &ranking.rows {
            prop_assert!(a.rank >= 1 && a.rank <= count);
            for b in &ranking.rows {
                if a.score == b.score {
                    prop_assert_eq!(a.rank, b.rank);
                } else if a.score > b.score {
                    prop_assert!(a.rank < b.rank);
                }
            }
        }
        prop_assert_eq!(ranking.best().map(|row| row.rank), Some(1));
    }

    #[test]
    fn scaling_a_column_leaves_scores_unchanged(
        problem in scalable_problem(),
        factor in log_uniform(SCALE_RANGE),
        column_seed in any::<prop::sample::Index>(),
    ) {
        let matrix = problem.matrix();
        let column = column_seed.index(matrix.criterion_count());
        let scaled = matrix.with_scaled_column(column, factor);

        let weights = WeightVector::new(problem.weights.clone());
        let impacts = ImpactVector::new(problem.impacts.clone());
        assert_close(
            &problem.scores_with(&matrix, &weights, &impacts),
            &problem.scores_with(&scaled, &weights, &impacts),
        );
    }

    #[test]
    fn scaling_all_weights_leaves_scores_unchanged(
        problem in scalable_problem(),
        factor in log_uniform(SCALE_RANGE),
    ) {
        let matrix = problem.matrix();
        let weights = WeightVector::new(problem.weights.clone());
        let impacts = ImpactVector::new(problem.impacts.clone());
        assert_close(
            &problem.scores_with(&matrix, &weights, &impacts),
            &problem.scores_with(&matrix, &weights.scaled(factor), &impacts),
        );
    }

    #[test]
    fn flipping_an_impact_never_helps_the_leader_on_that_criterion(
        problem in problem(),
        column_seed in any::<prop::sample::Index>(),
    ) {
        let matrix = problem.matrix();
        let column = column_seed.index(matrix.criterion_count());
        let impacts = ImpactVector::new(problem.impacts.clone());
        let weights = WeightVector::new(problem.weights.clone());

        // Alternative at the ideal end of the column under the current impact
        let values = matrix.column(column);
        let leader = (0..values.len())
            .max_by(|&a, &b| {
                let ord = values[a].total_cmp(&values[b]);
                if impacts.as_slice()[column].is_benefit() { ord } else { ord.reverse() }
            })
            .unwrap();

        let before = problem.scores_with(&matrix, &weights, &impacts)[leader];
        let after = problem.scores_with(&matrix, &weights, &impacts.with_flipped(column))[leader];
        prop_assert!(after <= before + EPSILON, "{} improved to {}", before, after);
    }

    #[test]
    fn scoring_is_deterministic(problem in problem()) {
        prop_assert_eq!(problem.scores(), problem.scores());
    }
}

#[test]
fn extreme_weights_keep_scores_in_unit_interval() {
    let problem = Problem {
        values: vec![vec![1.0, 2.0], vec![2.0, 1.0]],
        weights: vec![1e308, 1e308],
        impacts: vec![Impact::Benefit; 2],
    };
    assert_eq!(problem.scores(), vec![0.5, 0.5]);
}

#[test]
fn extreme_values_still_score() {
    let problem = Problem {
        values: vec![vec![1e200, f64::MAX], vec![2e200, f64::MAX / 2.0]],
        weights: vec![1.0, 1.0],
        impacts: vec![Impact::Benefit, Impact::Cost],
    };
    let scores = problem.scores();
    assert!(scores.iter().all(|score| (0.0..=1.0).contains(score)));
    assert!(scores[1] > scores[0]);
}

#[test]
fn single_alternative_scores_one_half() {
    let problem = Problem {
        values: vec![vec![1.0, 2.0, 3.0]],
        weights: vec![1.0, 1.0, 1.0],
        impacts: vec![Impact::Benefit; 3],
    };
    assert_eq!(problem.scores(), vec![0.5]);
}

#[test]
fn identical_alternatives_tie_at_one_half() {
    let problem = Problem {
        values: vec![vec![5.0, 5.0], vec![5.0, 5.0]],
        weights: vec![1.0, 1.0],
        impacts: vec![Impact::Benefit; 2],
    };
    let ranking = TopsisEngine::score(
        &problem.matrix(),
        &WeightVector::new(problem.weights.clone()),
        &ImpactVector::new(problem.impacts.clone()),
    )
    .unwrap();

    assert!(ranking.rows.iter().all(|row| row.score == 0.5 && row.rank == 1));
}
