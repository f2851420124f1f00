pub mod charts;

pub use charts::*;

use serde_json::json;

use crate::model::{Round, ShotType, StatsSummary};
use crate::storage::RoundStore;

/// Folds every hole of `rounds` into one summary. Hole order does not matter.
#[must_use]
pub fn summarize_rounds(rounds: &[Round]) -> StatsSummary {
    let mut summary = StatsSummary {
        total_rounds: rounds.len() as u64,
        ..StatsSummary::default()
    };

    for hole in rounds.iter().flat_map(|round| round.holes.iter()) {
        summary.total_holes += 1;
        for shot in ShotType::ALL {
            summary.add(shot, u64::from(hole.count(shot)));
        }
    }

    summary
}

/// Lifetime stats over all non-discarded rounds in `store`.
///
/// A store that cannot be read is logged and treated as holding no rounds.
#[must_use]
pub fn compute_stats(store: &dyn RoundStore) -> StatsSummary {
    let rounds = match store.fetch_rounds(false) {
        Ok(rounds) => rounds,
        Err(e) => {
            eprintln!(
                "{}",
                json!({"stats":"compute_stats","error": e.to_string()})
            );
            Vec::new()
        }
    };
    let summary = summarize_rounds(&rounds);
    if cfg!(debug_assertions) {
        eprintln!(
            "{}",
            json!({"stats":"computed","rounds": summary.total_rounds,"holes": summary.total_holes,"shots": summary.total_shots()})
        );
    }
    summary
}
