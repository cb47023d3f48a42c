//! Comprehension quiz attached to a story

use super::first_present;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A multiple-choice question
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quiz {
    /// Question markup
    pub question: String,

    #[serde(default)]
    pub choices: Option<Vec<String>>,

    /// Legacy name for `choices`
    #[serde(default)]
    pub options: Option<Vec<String>>,

    /// Zero-based index of the correct choice as written by the author.
    /// `None` when missing or not a number; such a quiz is never answered
    /// correctly but still loads with its story.
    #[serde(default, deserialize_with = "lenient_index")]
    pub answer_index: Option<i64>,

    #[serde(default)]
    pub question_translation: Option<String>,
}

impl Quiz {
    pub fn new(question: impl Into<String>, choices: Vec<String>, answer_index: i64) -> Self {
        Self {
            question: question.into(),
            choices: Some(choices),
            options: None,
            answer_index: Some(answer_index),
            question_translation: None,
        }
    }

    /// Choice markup in display order
    pub fn choices(&self) -> &[String] {
        first_present(&[&self.choices, &self.options])
            .map(|v| v.as_slice())
            .unwrap_or_default()
    }

    /// The correct choice index, if it points at an existing choice
    pub fn answer(&self) -> Option<usize> {
        self.answer_index
            .and_then(|i| usize::try_from(i).ok())
            .filter(|&i| i < self.choices().len())
    }

    /// Markup of the correct choice, if the answer index is valid
    pub fn answer_text(&self) -> Option<&str> {
        self.answer().map(|i| self.choices()[i].as_str())
    }
}

/// Accept any JSON value; only whole numbers become an index
fn lenient_index<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let index = value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    });

    if index.is_none() && !value.is_null() {
        tracing::debug!("Unreadable quiz answer index {}", value);
    }
    Ok(index)
}
