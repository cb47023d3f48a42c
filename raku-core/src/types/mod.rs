//! Record types as they appear in the static data files

mod compat;
mod discussion;
mod quiz;
mod story;

pub use compat::{first_non_empty, first_present};
pub use discussion::Discussion;
pub use quiz::Quiz;
pub use story::{RawLevel, Story, DEFAULT_LESSON};
