//! Plain-text views of story markup

use super::markup;
use crate::error::ContentError;
use crate::types::Story;

/// Excerpt length used by story cards
pub const DEFAULT_EXCERPT_LENGTH: usize = 60;

/// Marker appended to truncated excerpts
pub const ELLIPSIS: &str = "...";

/// Body markup of a story.
///
/// Fails with `ContentMissing` when none of the body fields is populated.
pub fn body_of(story: &Story) -> Result<&str, ContentError> {
    story
        .body_candidate()
        .ok_or_else(|| ContentError::ContentMissing(story.id.clone()))
}

/// Body markup, rendering a missing body as empty
pub fn body_or_empty(story: &Story) -> &str {
    body_of(story).unwrap_or_else(|e| {
        tracing::debug!("{}", e);
        ""
    })
}

/// Short plain-text preview of a story, at most `max_len` characters plus
/// the ellipsis.
///
/// Common entities are decoded before cutting; the cut never lands inside
/// any entity that remains.
pub fn excerpt_of(story: &Story, max_len: usize) -> String {
    if let Some(excerpt) = story.excerpt.as_deref().filter(|e| !e.is_empty()) {
        return excerpt.to_string();
    }

    let text = flatten(body_or_empty(story));
    let text = markup::decode_common_entities(&text);
    truncate_chars(text.trim(), max_len)
}

/// Text handed to the speech synthesizer.
///
/// Furigana readings replace their base characters so a generic
/// synthesizer pronounces the intended reading instead of guessing one for
/// the kanji. The result contains no markup and is stable under reapplication.
pub fn speech_text_of(html: &str) -> String {
    let text = markup::substitute_readings(html);
    let text = markup::drop_readings(&text);
    let text = markup::breaks_to_spaces(&text);
    let text = markup::strip_tags(&text);
    let text = markup::drop_stray_brackets(&text);
    let text = markup::decode_common_entities(&text);
    text.trim().to_string()
}

/// Body text without markup or readings, for terminal display
pub fn plain_text_of(html: &str) -> String {
    let text = markup::drop_readings(html);
    let text = markup::breaks_to_spaces(&text);
    let text = flatten(&text);
    let text = markup::drop_stray_brackets(&text);
    markup::decode_common_entities(&text).trim().to_string()
}

/// Body text with each reading in parentheses after its kanji,
/// `漢字(かんじ)`, for terminal display with furigana shown
pub fn with_readings_of(html: &str) -> String {
    plain_text_of(&markup::annotate_readings(html))
}

/// Title without markup or readings, for page metadata
pub fn plain_title_of(html: &str) -> String {
    let text = flatten(html);
    markup::decode_common_entities(&text).trim().to_string()
}

/// Strip readings and tags and fold line breaks
fn flatten(html: &str) -> String {
    let text = markup::drop_readings(html);
    let text = markup::strip_tags(&text);
    markup::collapse_line_breaks(&text).trim().to_string()
}

fn truncate_chars(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((cut, _)) => {
            let cut = markup::entity_split_at(text, cut).unwrap_or(cut);
            format!("{}{}", &text[..cut], ELLIPSIS)
        }
        None => text.to_string(),
    }
}
