use std::error::Error;
use std::fmt;
use uuid::Uuid;

use crate::model::{Hole, HolesCount, Round, User};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::new(format!("sqlite: {value}"))
    }
}

/// Local record store for rounds, holes and the device's single user.
///
/// Reads hand back owned copies, so a caller always works on a consistent
/// snapshot; every mutation is an explicit save.
pub trait RoundStore: Send + Sync {
    /// # Errors
    ///
    /// Will return `Err` if the underlying store cannot be read
    fn fetch_rounds(&self, include_discarded: bool) -> Result<Vec<Round>, StorageError>;

    /// # Errors
    ///
    /// Will return `Err` if the underlying store cannot be read
    fn fetch_round(&self, round_id: Uuid) -> Result<Option<Round>, StorageError>;

    /// Persists a new round together with all of its holes.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the round cannot be written
    fn insert_round(&self, round: &Round) -> Result<(), StorageError>;

    /// Builds a round with one par-4 hole per hole number and persists it.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the round cannot be written
    fn create_round(
        &self,
        course_name: &str,
        holes_count: HolesCount,
        user: Option<&User>,
    ) -> Result<Round, StorageError> {
        let round = Round::new(
            course_name.to_string(),
            holes_count,
            user.map(|u| u.id),
        );
        self.insert_round(&round)?;
        Ok(round)
    }

    /// # Errors
    ///
    /// Will return `Err` if the underlying store cannot be read
    fn fetch_hole(&self, round_id: Uuid, hole_number: u32) -> Result<Option<Hole>, StorageError>;

    /// Inserts or replaces the hole under its owning round.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the owning round does not exist or the write fails
    fn save_hole(&self, hole: &Hole) -> Result<(), StorageError>;

    /// Soft delete: the round stays stored but drops out of `fetch_rounds(false)`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the round does not exist or the write fails
    fn mark_round_discarded(&self, round_id: Uuid) -> Result<(), StorageError>;

    /// Removes every discarded round and its holes; returns how many rounds went.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the delete fails
    fn hard_delete_discarded_rounds(&self) -> Result<usize, StorageError>;

    /// # Errors
    ///
    /// Will return `Err` if the underlying store cannot be read
    fn fetch_primary_user(&self) -> Result<Option<User>, StorageError>;

    /// # Errors
    ///
    /// Will return `Err` if the user cannot be written
    fn save_primary_user(&self, user: &User) -> Result<(), StorageError>;
}
