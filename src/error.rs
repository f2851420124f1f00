use crate::storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("course name must not be empty")]
    EmptyCourseName,
    #[error("holes count must be 9 or 18, got {0}")]
    HolesCount(u32),
    #[error("par must be between 3 and 6, got {0}")]
    Par(u32),
    #[error("hole {hole} is outside 1..={holes_count}")]
    HoleNumber { hole: u32, holes_count: u32 },
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("invalid email address: {0}")]
    Email(String),
}

#[derive(Error, Debug, Clone)]
pub enum CoreError {
    #[error("db error: {0}")]
    Db(String),
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("not found: {0}")]
    NotFound(String),
}

impl From<StorageError> for CoreError {
    fn from(err: StorageError) -> Self {
        Self::Db(err.to_string())
    }
}
