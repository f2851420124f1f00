use serde::{Deserialize, Serialize};

use super::hole::ShotType;

/// Lifetime totals across every non-discarded round. Recomputed on demand, never stored.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatsSummary {
    pub total_rounds: u64,
    pub total_holes: u64,
    pub total_drives: u64,
    pub total_long_shots: u64,
    pub total_approaches: u64,
    pub total_chips: u64,
    pub total_putts: u64,
    pub total_fairway_bunker_shots: u64,
    pub total_greenside_bunker_shots: u64,
    pub total_penalties: u64,
}

// 0 when the denominator is 0
fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}

impl StatsSummary {
    #[must_use]
    pub fn count(&self, shot: ShotType) -> u64 {
        match shot {
            ShotType::Drives => self.total_drives,
            ShotType::LongShots => self.total_long_shots,
            ShotType::Approaches => self.total_approaches,
            ShotType::Chips => self.total_chips,
            ShotType::Putts => self.total_putts,
            ShotType::FairwayBunkerShots => self.total_fairway_bunker_shots,
            ShotType::GreensideBunkerShots => self.total_greenside_bunker_shots,
            ShotType::Penalties => self.total_penalties,
        }
    }

    pub(crate) fn add(&mut self, shot: ShotType, value: u64) {
        let total = match shot {
            ShotType::Drives => &mut self.total_drives,
            ShotType::LongShots => &mut self.total_long_shots,
            ShotType::Approaches => &mut self.total_approaches,
            ShotType::Chips => &mut self.total_chips,
            ShotType::Putts => &mut self.total_putts,
            ShotType::FairwayBunkerShots => &mut self.total_fairway_bunker_shots,
            ShotType::GreensideBunkerShots => &mut self.total_greenside_bunker_shots,
            ShotType::Penalties => &mut self.total_penalties,
        };
        *total += value;
    }

    #[must_use]
    pub fn total_shots(&self) -> u64 {
        ShotType::ALL.iter().map(|&shot| self.count(shot)).sum()
    }

    #[must_use]
    pub fn average_drives_per_hole(&self) -> f64 {
        ratio(self.total_drives, self.total_holes)
    }

    #[must_use]
    pub fn average_approaches_per_hole(&self) -> f64 {
        ratio(self.total_approaches, self.total_holes)
    }

    #[must_use]
    pub fn average_chips_per_hole(&self) -> f64 {
        ratio(self.total_chips, self.total_holes)
    }

    #[must_use]
    pub fn average_putts_per_hole(&self) -> f64 {
        ratio(self.total_putts, self.total_holes)
    }

    /// Share of `total_shots` taken with `shot`, in percent.
    #[must_use]
    pub fn percentage(&self, shot: ShotType) -> f64 {
        ratio(self.count(shot), self.total_shots()) * 100.0
    }

    #[must_use]
    pub fn drives_percentage(&self) -> f64 {
        self.percentage(ShotType::Drives)
    }

    #[must_use]
    pub fn long_shots_percentage(&self) -> f64 {
        self.percentage(ShotType::LongShots)
    }

    #[must_use]
    pub fn approaches_percentage(&self) -> f64 {
        self.percentage(ShotType::Approaches)
    }

    #[must_use]
    pub fn chips_percentage(&self) -> f64 {
        self.percentage(ShotType::Chips)
    }

    #[must_use]
    pub fn putts_percentage(&self) -> f64 {
        self.percentage(ShotType::Putts)
    }

    #[must_use]
    pub fn fairway_bunker_shots_percentage(&self) -> f64 {
        self.percentage(ShotType::FairwayBunkerShots)
    }

    #[must_use]
    pub fn greenside_bunker_shots_percentage(&self) -> f64 {
        self.percentage(ShotType::GreensideBunkerShots)
    }

    #[must_use]
    pub fn penalties_percentage(&self) -> f64 {
        self.percentage(ShotType::Penalties)
    }
}
