//! TOPSIS Engine - Runs the full scoring pipeline.

use super::criteria::{ImpactVector, WeightVector};
use super::ideal::IdealSolution;
use super::normalizer::{apply_weights, normalize, NormalizedMatrix, WeightedMatrix};
use super::ranker::{rank, ranked_order};
use super::ranking::{Ranking, ResultRow};
use super::raw_table::RawTable;
use super::separation::{closeness_scores, separations, Separations};
use super::validator::Validator;
use super::DecisionMatrix;
use crate::domain::foundation::ValidationError;

/// Every intermediate of one scoring run, for inspection and reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct TopsisAnalysis {
    pub normalized: NormalizedMatrix,
    pub weighted: WeightedMatrix,
    pub solution: IdealSolution,
    pub separations: Separations,
    /// Closeness coefficients in input order.
    pub scores: Vec<f64>,
    /// Ranks in input order.
    pub ranks: Vec<usize>,
}

/// The five-step TOPSIS procedure.
///
/// Stateless and deterministic: the same input always yields the same
/// ranking, and independent runs share nothing.
pub struct TopsisEngine;

impl TopsisEngine {
    /// Scores and ranks typed input.
    ///
    /// # Errors
    /// Returns the first failed validation check; no partial result is
    /// produced.
    pub fn score(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<Ranking, ValidationError> {
        let analysis = Self::analyze(matrix, weights, impacts)?;
        Ok(Self::into_ranking(matrix, &analysis))
    }

    /// Validates an ingested table with raw weights and impact tokens, then scores it.
    pub fn score_table<S: AsRef<str>>(
        table: &RawTable,
        weights: &[f64],
        impacts: &[S],
    ) -> Result<Ranking, ValidationError> {
        let input = Validator::validate(table, weights, impacts)?;
        Self::score(&input.matrix, &input.weights, &input.impacts)
    }

    /// Runs the pipeline and keeps every intermediate.
    ///
    /// Weights are applied relative to the largest one, which leaves scores
    /// unchanged and keeps every weighted value within `[0, 1]`.
    pub fn analyze(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<TopsisAnalysis, ValidationError> {
        Validator::check(matrix, weights, impacts)?;

        let normalized = normalize(matrix)?;
        let weighted = apply_weights(&normalized, &weights.relative());
        let solution = IdealSolution::resolve(&weighted, impacts);
        let separations = separations(&weighted, &solution);
        let scores = closeness_scores(&separations);
        let ranks = rank(&scores);

        Ok(TopsisAnalysis {
            normalized,
            weighted,
            solution,
            separations,
            scores,
            ranks,
        })
    }

    fn into_ranking(matrix: &DecisionMatrix, analysis: &TopsisAnalysis) -> Ranking {
        let rows = ranked_order(&analysis.scores)
            .into_iter()
            .map(|index| ResultRow {
                identifier: matrix.alternatives()[index].clone(),
                input_index: index,
                values: matrix.rows()[index].clone(),
                score: analysis.scores[index],
                rank: analysis.ranks[index],
            })
            .collect();

        Ranking {
            identifier_header: matrix.identifier_header().to_string(),
            criteria: matrix.criteria().to_vec(),
            rows,
        }
    }
}
