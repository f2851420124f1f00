#![allow(dead_code)]

use golf_shot_tracker::model::{Hole, HolesCount, Round, ShotType, StatsSummary};
use golf_shot_tracker::storage::{RoundStore, StorageError};
use golf_shot_tracker::model::User;
use uuid::Uuid;

/// Counts in `ShotType::ALL` order: drives, long shots, approaches, chips,
/// putts, fairway bunker, greenside bunker, penalties.
pub type Counts = [u32; 8];

pub fn fill_hole(hole: &mut Hole, counts: Counts) {
    for (shot, n) in ShotType::ALL.into_iter().zip(counts) {
        hole.set_count(shot, i64::from(n));
    }
}

/// A round where every hole was played with the same shots.
pub fn played_round(course: &str, holes_count: HolesCount, per_hole: Counts) -> Round {
    let mut round = Round::new(course.to_string(), holes_count, None);
    for hole in &mut round.holes {
        fill_hole(hole, per_hole);
    }
    round
}

pub fn summary(total_rounds: u64, total_holes: u64, counts: [u64; 8]) -> StatsSummary {
    StatsSummary {
        total_rounds,
        total_holes,
        total_drives: counts[0],
        total_long_shots: counts[1],
        total_approaches: counts[2],
        total_chips: counts[3],
        total_putts: counts[4],
        total_fairway_bunker_shots: counts[5],
        total_greenside_bunker_shots: counts[6],
        total_penalties: counts[7],
    }
}

/// Store whose every call fails, for the log-and-carry-on paths.
pub struct FailingStore;

fn broken<T>() -> Result<T, StorageError> {
    Err(StorageError::new("disk on fire"))
}

impl RoundStore for FailingStore {
    fn fetch_rounds(&self, _include_discarded: bool) -> Result<Vec<Round>, StorageError> {
        broken()
    }
    fn fetch_round(&self, _round_id: Uuid) -> Result<Option<Round>, StorageError> {
        broken()
    }
    fn insert_round(&self, _round: &Round) -> Result<(), StorageError> {
        broken()
    }
    fn fetch_hole(&self, _round_id: Uuid, _hole_number: u32) -> Result<Option<Hole>, StorageError> {
        broken()
    }
    fn save_hole(&self, _hole: &Hole) -> Result<(), StorageError> {
        broken()
    }
    fn mark_round_discarded(&self, _round_id: Uuid) -> Result<(), StorageError> {
        broken()
    }
    fn hard_delete_discarded_rounds(&self) -> Result<usize, StorageError> {
        broken()
    }
    fn fetch_primary_user(&self) -> Result<Option<User>, StorageError> {
        broken()
    }
    fn save_primary_user(&self, _user: &User) -> Result<(), StorageError> {
        broken()
    }
}

/// Behaviour every `RoundStore` must share, run against each implementation.
pub fn exercise_store_contract(store: &dyn RoundStore) -> Result<(), Box<dyn std::error::Error>> {
    assert!(store.fetch_rounds(true)?.is_empty());
    assert!(store.fetch_primary_user()?.is_none());

    let front = store.create_round("Front Nine", HolesCount::Nine, None)?;
    let full = store.create_round("Links", HolesCount::Eighteen, None)?;

    let fetched = store
        .fetch_round(front.id)?
        .ok_or("front nine should be stored")?;
    assert_eq!(fetched, front);
    assert_eq!(fetched.holes.len(), 9);
    assert!(store.fetch_round(Uuid::new_v4())?.is_none());

    let mut hole = store
        .fetch_hole(full.id, 7)?
        .ok_or("hole 7 should exist")?;
    assert_eq!(hole.par, 4);
    fill_hole(&mut hole, [1, 1, 1, 0, 2, 0, 1, 1]);
    hole.set_par(5)?;
    store.save_hole(&hole)?;
    assert_eq!(store.fetch_hole(full.id, 7)?, Some(hole.clone()));
    assert!(store.fetch_hole(full.id, 19)?.is_none());

    let orphan = Hole::new(Uuid::new_v4(), 1);
    assert!(store.save_hole(&orphan).is_err());

    // the user link is optional and does not require a saved profile
    let unsaved = User {
        id: Uuid::new_v4(),
        first_name: "Nelly".to_string(),
        last_name: "Korda".to_string(),
        email: "nelly@example.com".to_string(),
        phone: None,
    };
    let linked = store.create_round("Linked", HolesCount::Nine, Some(&unsaved))?;
    assert_eq!(
        store.fetch_round(linked.id)?.and_then(|r| r.user_id),
        Some(unsaved.id)
    );
    assert!(store.fetch_primary_user()?.is_none());
    store.mark_round_discarded(linked.id)?;

    store.mark_round_discarded(front.id)?;
    assert!(store.mark_round_discarded(Uuid::new_v4()).is_err());
    let active = store.fetch_rounds(false)?;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, full.id);
    assert_eq!(active[0].total_strokes(), 7);
    assert_eq!(store.fetch_rounds(true)?.len(), 3);

    assert_eq!(store.hard_delete_discarded_rounds()?, 2);
    assert_eq!(store.hard_delete_discarded_rounds()?, 0);
    assert!(store.fetch_round(front.id)?.is_none());
    assert!(store.fetch_hole(front.id, 1)?.is_none());
    assert_eq!(store.fetch_rounds(true)?.len(), 1);

    Ok(())
}
