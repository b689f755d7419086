//! Per-runner score presentation.
//!
//! Reconciles the three partially-overlapping response fields (`runners`,
//! `included_indices`, `scores`) into one fixed-length list of display rows.
//! The function is total: inconsistent payloads degrade to sentinel values,
//! they never fail the render.

use std::collections::HashSet;

use crate::consensus::ConsensusResult;

/// One scoreboard row for a single runner slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerView {
    /// Zero-based runner slot.
    pub index: usize,
    /// Human label, `Runner #<index>`.
    pub label: String,
    /// Rendered score: a 4-decimal number, `"N/A"` for a runner that did
    /// not participate, or `"0.0000"` for one that participated without a
    /// usable score.
    pub display_value: String,
}

/// Build the scoreboard for a verdict, one row per runner slot in ascending
/// index order.
///
/// A runner outside `included_indices` (or every runner, when the field is
/// absent) renders as `"N/A"`. An included runner whose score is missing or
/// non-finite renders as `"0.0000"`; the two sentinels are deliberately
/// distinct. `votes_per_candidate` is a legacy field and is never consulted.
pub fn runner_scoreboard(result: &ConsensusResult) -> Vec<RunnerView> {
    let n = result.runners.max(0) as usize;
    let included: HashSet<i64> = result
        .included_indices
        .as_deref()
        .unwrap_or_default()
        .iter()
        .copied()
        .collect();

    (0..n)
        .map(|i| {
            let display_value = if !included.contains(&(i as i64)) {
                "N/A".to_string()
            } else {
                match result.scores.as_ref().and_then(|scores| scores.get(i)) {
                    Some(score) if score.is_finite() => format!("{score:.4}"),
                    _ => "0.0000".to_string(),
                }
            };
            RunnerView {
                index: i,
                label: format!("Runner #{i}"),
                display_value,
            }
        })
        .collect()
}
