pub mod round;
pub mod stats;

pub use round::*;
pub use stats::*;
