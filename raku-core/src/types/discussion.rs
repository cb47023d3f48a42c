//! Daily discussion prompt

use serde::{Deserialize, Serialize};

/// A conversation prompt with a sample answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Discussion {
    pub id: u32,

    #[serde(default)]
    pub level: u32,

    /// Question markup (may contain furigana)
    pub question_jp: String,

    pub question_en: String,

    /// Sample answer markup
    pub answer_jp: String,

    pub answer_en: String,
}
