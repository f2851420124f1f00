use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::hole::{Hole, to_signed};
use crate::error::ValidationError;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum HolesCount {
    Nine,
    #[default]
    Eighteen,
}

impl HolesCount {
    #[must_use]
    pub fn get(self) -> u32 {
        match self {
            HolesCount::Nine => 9,
            HolesCount::Eighteen => 18,
        }
    }
}

impl TryFrom<u32> for HolesCount {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            9 => Ok(HolesCount::Nine),
            18 => Ok(HolesCount::Eighteen),
            other => Err(ValidationError::HolesCount(other)),
        }
    }
}

impl From<HolesCount> for u32 {
    fn from(value: HolesCount) -> Self {
        value.get()
    }
}

/// # Errors
///
/// Will return `Err` if the course name is blank after trimming
pub fn validate_course_name(course_name: &str) -> Result<String, ValidationError> {
    let trimmed = course_name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyCourseName);
    }
    Ok(trimmed.to_string())
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Round {
    pub id: Uuid,
    pub course_name: String,
    pub holes_count: HolesCount,
    pub start_date: DateTime<Utc>,
    pub is_discarded: bool,
    pub holes: Vec<Hole>,
    pub user_id: Option<Uuid>,
}

impl Round {
    /// New round starting now, with one hole per number at par 4.
    #[must_use]
    pub fn new(course_name: String, holes_count: HolesCount, user_id: Option<Uuid>) -> Self {
        let id = Uuid::new_v4();
        let holes = (1..=holes_count.get())
            .map(|hole_number| Hole::new(id, hole_number))
            .collect();
        Self {
            id,
            course_name,
            holes_count,
            start_date: Utc::now(),
            is_discarded: false,
            holes,
            user_id,
        }
    }

    #[must_use]
    pub fn contains_hole_number(&self, hole_number: u32) -> bool {
        (1..=self.holes_count.get()).contains(&hole_number)
    }

    #[must_use]
    pub fn hole(&self, hole_number: u32) -> Option<&Hole> {
        self.holes.iter().find(|h| h.hole_number == hole_number)
    }

    /// Returns the hole, creating it at par 4 when the round is missing it.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `hole_number` is outside 1..=holes_count
    pub fn hole_or_insert(&mut self, hole_number: u32) -> Result<&mut Hole, ValidationError> {
        if !self.contains_hole_number(hole_number) {
            return Err(ValidationError::HoleNumber {
                hole: hole_number,
                holes_count: self.holes_count.get(),
            });
        }
        let idx = match self.holes.iter().position(|h| h.hole_number == hole_number) {
            Some(idx) => idx,
            None => {
                let at = self.holes.partition_point(|h| h.hole_number < hole_number);
                self.holes.insert(at, Hole::new(self.id, hole_number));
                at
            }
        };
        Ok(&mut self.holes[idx])
    }

    /// Replaces the stored copy of `hole` (matched by hole number).
    pub fn put_hole(&mut self, hole: Hole) {
        match self
            .holes
            .iter_mut()
            .find(|h| h.hole_number == hole.hole_number)
        {
            Some(existing) => *existing = hole,
            None => {
                let at = self.holes.partition_point(|h| h.hole_number < hole.hole_number);
                self.holes.insert(at, hole);
            }
        }
    }

    #[must_use]
    pub fn total_strokes(&self) -> u64 {
        self.holes.iter().map(Hole::total_strokes).sum()
    }

    #[must_use]
    pub fn total_par(&self) -> u64 {
        self.holes.iter().map(|h| u64::from(h.par)).sum()
    }

    #[must_use]
    pub fn score_relative_to_par(&self) -> i64 {
        to_signed(self.total_strokes()) - to_signed(self.total_par())
    }
}
