pub mod rules;

pub use rules::*;

use async_trait::async_trait;

use crate::model::StatsSummary;

/// Turns a stats summary into practice suggestions for the player.
///
/// Async so slower strategies can sit behind the same seam; implementations
/// always return non-empty text and never fail.
#[async_trait]
pub trait Advisor: Send + Sync {
    async fn generate_advice(&self, stats: &StatsSummary) -> String;
}
