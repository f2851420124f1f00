use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::ValidationError;

pub const DEFAULT_PAR: u32 = 4;
pub const MIN_PAR: u32 = 3;
pub const MAX_PAR: u32 = 6;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ShotType {
    Drives,
    LongShots,
    Approaches,
    Chips,
    Putts,
    FairwayBunkerShots,
    GreensideBunkerShots,
    Penalties,
}

impl ShotType {
    pub const ALL: [ShotType; 8] = [
        ShotType::Drives,
        ShotType::LongShots,
        ShotType::Approaches,
        ShotType::Chips,
        ShotType::Putts,
        ShotType::FairwayBunkerShots,
        ShotType::GreensideBunkerShots,
        ShotType::Penalties,
    ];

    /// Column / key name used by the sqlite store and the cli.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ShotType::Drives => "drives",
            ShotType::LongShots => "long_shots",
            ShotType::Approaches => "approaches",
            ShotType::Chips => "chips",
            ShotType::Putts => "putts",
            ShotType::FairwayBunkerShots => "fairway_bunker_shots",
            ShotType::GreensideBunkerShots => "greenside_bunker_shots",
            ShotType::Penalties => "penalties",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ShotType::Drives => "Drives",
            ShotType::LongShots => "Long Shots",
            ShotType::Approaches => "Approaches",
            ShotType::Chips => "Chips",
            ShotType::Putts => "Putts",
            ShotType::FairwayBunkerShots => "Fairway Bunker",
            ShotType::GreensideBunkerShots => "Greenside Bunker",
            ShotType::Penalties => "Penalties",
        }
    }
}

impl fmt::Display for ShotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ShotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        ShotType::ALL
            .into_iter()
            .find(|shot| shot.key() == wanted)
            .ok_or_else(|| format!("unknown shot type '{s}'"))
    }
}

/// # Errors
///
/// Will return `Err` if `par` is outside 3..=6
pub fn validate_par(par: u32) -> Result<u32, ValidationError> {
    if (MIN_PAR..=MAX_PAR).contains(&par) {
        Ok(par)
    } else {
        Err(ValidationError::Par(par))
    }
}

// Stroke totals stay far below i64::MAX: at most 8 * 18 counters of u32::MAX.
pub(crate) fn to_signed(total: u64) -> i64 {
    i64::try_from(total).unwrap_or(i64::MAX)
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Hole {
    pub round_id: Uuid,
    pub hole_number: u32,
    pub par: u32,
    pub drives: u32,
    pub long_shots: u32,
    pub approaches: u32,
    pub chips: u32,
    pub putts: u32,
    pub fairway_bunker_shots: u32,
    pub greenside_bunker_shots: u32,
    pub penalties: u32,
}

impl Hole {
    #[must_use]
    pub fn new(round_id: Uuid, hole_number: u32) -> Self {
        Self {
            round_id,
            hole_number,
            par: DEFAULT_PAR,
            drives: 0,
            long_shots: 0,
            approaches: 0,
            chips: 0,
            putts: 0,
            fairway_bunker_shots: 0,
            greenside_bunker_shots: 0,
            penalties: 0,
        }
    }

    #[must_use]
    pub fn count(&self, shot: ShotType) -> u32 {
        match shot {
            ShotType::Drives => self.drives,
            ShotType::LongShots => self.long_shots,
            ShotType::Approaches => self.approaches,
            ShotType::Chips => self.chips,
            ShotType::Putts => self.putts,
            ShotType::FairwayBunkerShots => self.fairway_bunker_shots,
            ShotType::GreensideBunkerShots => self.greenside_bunker_shots,
            ShotType::Penalties => self.penalties,
        }
    }

    fn counter_mut(&mut self, shot: ShotType) -> &mut u32 {
        match shot {
            ShotType::Drives => &mut self.drives,
            ShotType::LongShots => &mut self.long_shots,
            ShotType::Approaches => &mut self.approaches,
            ShotType::Chips => &mut self.chips,
            ShotType::Putts => &mut self.putts,
            ShotType::FairwayBunkerShots => &mut self.fairway_bunker_shots,
            ShotType::GreensideBunkerShots => &mut self.greenside_bunker_shots,
            ShotType::Penalties => &mut self.penalties,
        }
    }

    pub fn increment(&mut self, shot: ShotType) {
        let counter = self.counter_mut(shot);
        *counter = counter.saturating_add(1);
    }

    /// Floors at zero; decrementing an empty counter does nothing.
    pub fn decrement(&mut self, shot: ShotType) {
        let counter = self.counter_mut(shot);
        *counter = counter.saturating_sub(1);
    }

    /// Sets a counter from signed form input, clamping negatives to zero.
    pub fn set_count(&mut self, shot: ShotType, value: i64) {
        *self.counter_mut(shot) = u32::try_from(value.max(0)).unwrap_or(u32::MAX);
    }

    /// # Errors
    ///
    /// Will return `Err` if `par` is outside 3..=6; the hole is left unchanged
    pub fn set_par(&mut self, par: u32) -> Result<(), ValidationError> {
        self.par = validate_par(par)?;
        Ok(())
    }

    /// Sum of all eight counters, widened so saturated counters still add up exactly.
    #[must_use]
    pub fn total_strokes(&self) -> u64 {
        ShotType::ALL
            .iter()
            .map(|&shot| u64::from(self.count(shot)))
            .sum()
    }

    #[must_use]
    pub fn score_relative_to_par(&self) -> i64 {
        to_signed(self.total_strokes()) - i64::from(self.par)
    }
}
