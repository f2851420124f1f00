pub mod hole;
pub mod round;
pub mod score;
pub mod stats;
pub mod user;

pub use hole::*;
pub use round::*;
pub use score::*;
pub use stats::*;
pub use user::*;
