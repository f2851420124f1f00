use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use super::{RoundStore, StorageError};
use crate::model::{Hole, Round, User};

#[derive(Default)]
struct Arena {
    rounds: HashMap<Uuid, Round>,
    // creation order, so fetches come back stable
    order: Vec<Uuid>,
    user: Option<User>,
}

/// Arena-backed store; rounds own their holes and the whole arena sits behind one lock.
#[derive(Default)]
pub struct MemoryStore {
    arena: RwLock<Arena>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Arena>, StorageError> {
        self.arena
            .read()
            .map_err(|e| StorageError::new(format!("memory store lock poisoned: {e}")))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Arena>, StorageError> {
        self.arena
            .write()
            .map_err(|e| StorageError::new(format!("memory store lock poisoned: {e}")))
    }
}

impl RoundStore for MemoryStore {
    fn fetch_rounds(&self, include_discarded: bool) -> Result<Vec<Round>, StorageError> {
        let arena = self.read()?;
        Ok(arena
            .order
            .iter()
            .filter_map(|id| arena.rounds.get(id))
            .filter(|round| include_discarded || !round.is_discarded)
            .cloned()
            .collect())
    }

    fn fetch_round(&self, round_id: Uuid) -> Result<Option<Round>, StorageError> {
        Ok(self.read()?.rounds.get(&round_id).cloned())
    }

    fn insert_round(&self, round: &Round) -> Result<(), StorageError> {
        let mut arena = self.write()?;
        if arena.rounds.insert(round.id, round.clone()).is_none() {
            arena.order.push(round.id);
        }
        Ok(())
    }

    fn fetch_hole(&self, round_id: Uuid, hole_number: u32) -> Result<Option<Hole>, StorageError> {
        Ok(self
            .read()?
            .rounds
            .get(&round_id)
            .and_then(|round| round.hole(hole_number))
            .cloned())
    }

    fn save_hole(&self, hole: &Hole) -> Result<(), StorageError> {
        let mut arena = self.write()?;
        let round = arena
            .rounds
            .get_mut(&hole.round_id)
            .ok_or_else(|| StorageError::new(format!("round {} not found", hole.round_id)))?;
        round.put_hole(hole.clone());
        Ok(())
    }

    fn mark_round_discarded(&self, round_id: Uuid) -> Result<(), StorageError> {
        let mut arena = self.write()?;
        let round = arena
            .rounds
            .get_mut(&round_id)
            .ok_or_else(|| StorageError::new(format!("round {round_id} not found")))?;
        round.is_discarded = true;
        Ok(())
    }

    fn hard_delete_discarded_rounds(&self) -> Result<usize, StorageError> {
        let mut arena = self.write()?;
        let before = arena.rounds.len();
        arena.rounds.retain(|_, round| !round.is_discarded);
        let Arena { rounds, order, .. } = &mut *arena;
        order.retain(|id| rounds.contains_key(id));
        Ok(before - rounds.len())
    }

    fn fetch_primary_user(&self) -> Result<Option<User>, StorageError> {
        Ok(self.read()?.user.clone())
    }

    fn save_primary_user(&self, user: &User) -> Result<(), StorageError> {
        self.write()?.user = Some(user.clone());
        Ok(())
    }
}
