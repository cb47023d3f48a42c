//! The Story record - one graded reading passage

use super::{first_non_empty, first_present, Quiz};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Lesson tag shown when a story does not carry one
pub const DEFAULT_LESSON: &str = "L1";

/// A level exactly as written in the data file
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RawLevel {
    /// Bare textbook level, e.g. `3`
    Number(i64),

    /// Labelled level, e.g. `"Level 3"` or `"N4"`
    Text(String),
}

impl<'de> Deserialize<'de> for RawLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Int(i64),
            Float(f64),
            Text(String),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Int(n) => RawLevel::Number(n),
            // JSON writers sometimes emit 2.0; the fraction carries no meaning
            Repr::Float(f) => RawLevel::Number(f.trunc() as i64),
            Repr::Text(s) => RawLevel::Text(s),
        })
    }
}

impl From<i64> for RawLevel {
    fn from(n: i64) -> Self {
        RawLevel::Number(n)
    }
}

impl From<&str> for RawLevel {
    fn from(s: &str) -> Self {
        RawLevel::Text(s.to_string())
    }
}

impl fmt::Display for RawLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawLevel::Number(n) => write!(f, "{}", n),
            RawLevel::Text(s) => f.write_str(s),
        }
    }
}

/// A story as loaded from the static catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Story {
    /// Stable identifier, also used as the route segment
    pub id: String,

    /// Title markup (may contain furigana)
    pub title: String,

    /// Difficulty level in whatever form the author used
    pub level: RawLevel,

    #[serde(default)]
    pub lesson: Option<String>,

    /// Hand-written excerpt, preferred over a generated one
    #[serde(default)]
    pub excerpt: Option<String>,

    #[serde(default)]
    pub story_html: Option<String>,

    #[serde(default)]
    pub content_html: Option<String>,

    #[serde(default)]
    pub content: Option<String>,

    /// English translation markup
    #[serde(default)]
    pub translation: Option<String>,

    #[serde(default)]
    pub schema_activation: Option<Vec<String>>,

    #[serde(default)]
    pub schema_questions: Option<Vec<String>>,

    #[serde(default)]
    pub quizzes: Vec<Quiz>,
}

impl Story {
    /// Create a story with a title, level and body; remaining fields empty
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        level: impl Into<RawLevel>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            level: level.into(),
            lesson: None,
            excerpt: None,
            story_html: Some(body.into()),
            content_html: None,
            content: None,
            translation: None,
            schema_activation: None,
            schema_questions: None,
            quizzes: Vec::new(),
        }
    }

    /// Attach quizzes
    pub fn with_quizzes(mut self, quizzes: Vec<Quiz>) -> Self {
        self.quizzes = quizzes;
        self
    }

    /// Set the translation
    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }

    /// Body markup, newest field name first
    pub fn body_candidate(&self) -> Option<&str> {
        first_non_empty(&[&self.story_html, &self.content_html, &self.content])
    }

    /// Reading-goal prompts shown before the story
    pub fn reading_goals(&self) -> &[String] {
        first_present(&[&self.schema_activation, &self.schema_questions])
            .map(|v| v.as_slice())
            .unwrap_or_default()
    }

    pub fn lesson(&self) -> &str {
        self.lesson
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LESSON)
    }

    /// Translation, if it has any content
    pub fn translation(&self) -> Option<&str> {
        self.translation.as_deref().filter(|t| !t.is_empty())
    }
}
