use serde_json::json;
use uuid::Uuid;

use crate::error::CoreError;
use crate::model::{HolesCount, Round, ShotType, User, validate_course_name, validate_par};
use crate::storage::RoundStore;

/// Starts a round after checking the new-round form input.
///
/// # Errors
///
/// Will return `Err` if the course name is blank, the holes count is not 9 or 18,
/// or the store cannot write the round
pub fn new_round(
    store: &dyn RoundStore,
    course_name: &str,
    holes_count: u32,
    user: Option<&User>,
) -> Result<Round, CoreError> {
    let course_name = validate_course_name(course_name)?;
    let holes_count = HolesCount::try_from(holes_count)?;
    let round = store.create_round(&course_name, holes_count, user)?;
    if cfg!(debug_assertions) {
        eprintln!(
            "{}",
            json!({"rounds":"created","round": round.id.to_string(),"course": round.course_name,"holes": round.holes_count.get()})
        );
    }
    Ok(round)
}

/// # Errors
///
/// Will return `Err` if the store cannot be read or holds no round with `round_id`
pub fn load_round(store: &dyn RoundStore, round_id: Uuid) -> Result<Round, CoreError> {
    store
        .fetch_round(round_id)?
        .ok_or_else(|| CoreError::NotFound(format!("round {round_id}")))
}

/// Active rounds, newest first. An unreadable store yields an empty list.
#[must_use]
pub fn list_rounds(store: &dyn RoundStore) -> Vec<Round> {
    let mut rounds = store.fetch_rounds(false).unwrap_or_else(|e| {
        eprintln!(
            "{}",
            json!({"rounds":"fetch_rounds","error": e.to_string()})
        );
        Vec::new()
    });
    rounds.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    rounds
}

/// Soft-deletes the round and returns the refreshed list.
#[must_use]
pub fn discard_round(store: &dyn RoundStore, round_id: Uuid) -> Vec<Round> {
    if let Err(e) = store.mark_round_discarded(round_id) {
        eprintln!(
            "{}",
            json!({"rounds":"mark_round_discarded","round": round_id.to_string(),"error": e.to_string()})
        );
    }
    list_rounds(store)
}

/// Permanently removes discarded rounds; returns how many were removed.
#[must_use]
pub fn purge_discarded_rounds(store: &dyn RoundStore) -> usize {
    match store.hard_delete_discarded_rounds() {
        Ok(removed) => removed,
        Err(e) => {
            eprintln!(
                "{}",
                json!({"rounds":"hard_delete_discarded_rounds","error": e.to_string()})
            );
            0
        }
    }
}

/// Full edit of one hole from the round detail screen. Counts come in signed
/// and are clamped at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoleEdit {
    pub par: u32,
    pub drives: i64,
    pub long_shots: i64,
    pub approaches: i64,
    pub chips: i64,
    pub putts: i64,
    pub fairway_bunker_shots: i64,
    pub greenside_bunker_shots: i64,
    pub penalties: i64,
}

impl HoleEdit {
    #[must_use]
    pub fn value(&self, shot: ShotType) -> i64 {
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
}

/// # Errors
///
/// Will return `Err` if `par` is outside 3..=6 or the hole number is outside the round
pub fn update_hole(
    store: &dyn RoundStore,
    round: &mut Round,
    hole_number: u32,
    edit: &HoleEdit,
) -> Result<(), CoreError> {
    let par = validate_par(edit.par)?;
    let hole = round.hole_or_insert(hole_number)?;
    for shot in ShotType::ALL {
        hole.set_count(shot, edit.value(shot));
    }
    hole.par = par;
    if let Err(e) = store.save_hole(hole) {
        eprintln!(
            "{}",
            json!({"rounds":"update_hole","round": hole.round_id.to_string(),"hole": hole_number,"error": e.to_string()})
        );
    }
    Ok(())
}
