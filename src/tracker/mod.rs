pub mod hole_tracker;
pub mod profile;
pub mod rounds;

pub use hole_tracker::*;
pub use profile::*;
pub use rounds::*;
