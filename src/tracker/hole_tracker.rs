use serde_json::json;

use crate::error::ValidationError;
use crate::model::{Hole, Round, ShotType, validate_par};
use crate::storage::RoundStore;

fn persist(store: &dyn RoundStore, hole: &Hole) {
    if let Err(e) = store.save_hole(hole) {
        eprintln!(
            "{}",
            json!({"tracker":"save_hole","round": hole.round_id.to_string(),"hole": hole.hole_number,"error": e.to_string()})
        );
    }
}

/// Hole-by-hole entry for one round in play.
///
/// Every counter or par change is written through to the store straight away.
/// A failed write is logged and the in-memory round keeps the change.
pub struct HoleTracker<'a> {
    store: &'a dyn RoundStore,
    round: Round,
    current_hole_number: u32,
}

impl<'a> HoleTracker<'a> {
    #[must_use]
    pub fn new(store: &'a dyn RoundStore, round: Round) -> Self {
        let mut tracker = Self {
            store,
            round,
            current_hole_number: 1,
        };
        tracker.load_hole();
        tracker
    }

    /// Refreshes the current hole from the store, creating it at par 4 if it is missing.
    pub fn load_hole(&mut self) {
        let number = self.current_hole_number;
        match self.store.fetch_hole(self.round.id, number) {
            Ok(Some(hole)) => self.round.put_hole(hole),
            Ok(None) => {
                if let Ok(hole) = self.round.hole_or_insert(number) {
                    persist(self.store, hole);
                }
            }
            Err(e) => {
                eprintln!(
                    "{}",
                    json!({"tracker":"fetch_hole","round": self.round.id.to_string(),"hole": number,"error": e.to_string()})
                );
                let _ = self.round.hole_or_insert(number);
            }
        }
    }

    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn into_round(self) -> Round {
        self.round
    }

    #[must_use]
    pub fn current_hole_number(&self) -> u32 {
        self.current_hole_number
    }

    #[must_use]
    pub fn current_hole(&self) -> Option<&Hole> {
        self.round.hole(self.current_hole_number)
    }

    #[must_use]
    pub fn is_first_hole(&self) -> bool {
        self.current_hole_number == 1
    }

    #[must_use]
    pub fn is_last_hole(&self) -> bool {
        self.current_hole_number == self.round.holes_count.get()
    }

    #[must_use]
    pub fn round_total_strokes(&self) -> u64 {
        self.round.total_strokes()
    }

    #[must_use]
    pub fn round_score_relative_to_par(&self) -> i64 {
        self.round.score_relative_to_par()
    }

    pub fn increment_shot(&mut self, shot: ShotType) {
        if let Ok(hole) = self.round.hole_or_insert(self.current_hole_number) {
            hole.increment(shot);
            persist(self.store, hole);
        }
    }

    /// No-op on a counter already at zero, apart from the save.
    pub fn decrement_shot(&mut self, shot: ShotType) {
        if let Ok(hole) = self.round.hole_or_insert(self.current_hole_number) {
            hole.decrement(shot);
            persist(self.store, hole);
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if `par` is outside 3..=6
    pub fn set_par(&mut self, par: u32) -> Result<(), ValidationError> {
        let par = validate_par(par)?;
        let hole = self.round.hole_or_insert(self.current_hole_number)?;
        hole.par = par;
        persist(self.store, hole);
        Ok(())
    }

    pub fn next_hole(&mut self) {
        if self.current_hole_number < self.round.holes_count.get() {
            self.current_hole_number += 1;
            self.load_hole();
        }
    }

    pub fn previous_hole(&mut self) {
        if self.current_hole_number > 1 {
            self.current_hole_number -= 1;
            self.load_hole();
        }
    }

    /// Moves to `hole_number`; returns false and stays put when it is out of range.
    pub fn jump_to_hole(&mut self, hole_number: u32) -> bool {
        if !self.round.contains_hole_number(hole_number) {
            return false;
        }
        self.current_hole_number = hole_number;
        self.load_hole();
        true
    }
}
