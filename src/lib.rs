pub mod advice;
pub mod args;
pub mod error;
pub mod model;
pub mod stats;
pub mod storage;
pub mod tracker;
pub mod view;

pub use advice::{Advisor, RulesBasedAdvisor, generate_advice};
pub use error::{CoreError, ValidationError};
pub use stats::{compute_stats, summarize_rounds};
pub use storage::{MemoryStore, RoundStore, SqliteStore, StorageError};
