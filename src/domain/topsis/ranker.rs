//! Ranker - Orders alternatives by closeness and assigns rank numbers.

use std::cmp::Ordering;

/// Rank of every alternative, in input order.
///
/// Rank 1 goes to the highest score. Equal scores share a rank using
/// competition ranking: a tie group takes the position of its first member
/// and the next distinct score takes its own position (0.9, 0.9, 0.4 gives
/// 1, 1, 3).
pub fn rank(scores: &[f64]) -> Vec<usize> {
    let order = ranked_order(scores);
    let mut ranks = vec![0; scores.len()];

    for (position, &index) in order.iter().enumerate() {
        ranks[index] = match position {
            0 => 1,
            _ => {
                let previous = order[position - 1];
                if scores[previous] == scores[index] {
                    ranks[previous]
                } else {
                    position + 1
                }
            }
        };
    }

    ranks
}

/// Input indices sorted by score descending; exact ties keep input order.
pub fn ranked_order(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
    });
    order
}
