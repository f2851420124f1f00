use serde::Serialize;

use crate::model::{ShotType, StatsSummary};

#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct ChartPoint {
    pub shot: ShotType,
    pub value: f64,
}

/// Percentage of all shots per shot type, for the distribution chart.
#[must_use]
pub fn shot_distribution(stats: &StatsSummary) -> Vec<ChartPoint> {
    ShotType::ALL
        .into_iter()
        .map(|shot| ChartPoint {
            shot,
            value: stats.percentage(shot),
        })
        .collect()
}

/// Average shots of each type per hole.
///
/// The summary only carries four averages; the rest are divided out here
/// against at least one hole.
#[must_use]
pub fn average_shots_per_hole(stats: &StatsSummary) -> Vec<ChartPoint> {
    ShotType::ALL
        .into_iter()
        .map(|shot| {
            let value = match shot {
                ShotType::Drives => stats.average_drives_per_hole(),
                ShotType::Approaches => stats.average_approaches_per_hole(),
                ShotType::Chips => stats.average_chips_per_hole(),
                ShotType::Putts => stats.average_putts_per_hole(),
                other => stats.count(other) as f64 / stats.total_holes.max(1) as f64,
            };
            ChartPoint { shot, value }
        })
        .collect()
}
