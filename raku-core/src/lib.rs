//! Raku Core Library
//!
//! Core types and logic for Raku, a catalog of graded Japanese reading
//! passages. Stories carry furigana markup and difficulty levels in several
//! notations; this crate normalizes both, orders and navigates the catalog,
//! and holds the interactive state of quizzes and read-aloud playback.

pub mod badge;
pub mod catalog;
pub mod config;
pub mod discussion;
pub mod error;
pub mod level;
pub mod loader;
pub mod quiz;
pub mod speech;
pub mod text;
pub mod types;
pub mod validate;
pub mod view;

pub use catalog::{Adjacent, Catalog, LevelFilter, Navigation};
pub use config::{ReaderConfig, SpeechSettings};
pub use error::{ContentError, LoadError, QuizError, RakuError, Result};
pub use level::{CanonicalLevel, LevelParser};
pub use types::{Discussion, Quiz, RawLevel, Story};
