//! Low-level markup passes shared by the normalizer functions
//!
//! Story markup is author-controlled HTML fragments with `<ruby>` furigana,
//! so a handful of regex passes is enough; nothing here builds a DOM.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static RE_RUBY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<ruby\b[^>]*>(.*?)</ruby\s*>").unwrap());
static RE_RT_CONTENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<rt\b[^>]*>(.*?)</rt\s*>").unwrap());
static RE_READING_ELEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<rt\b[^>]*>.*?</rt\s*>|<rp\b[^>]*>.*?</rp\s*>").unwrap()
});
static RE_RP_ELEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<rp\b[^>]*>.*?</rp\s*>").unwrap());
static RE_READING_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</?r[tp]\b[^>]*>").unwrap());
static RE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>|</p\s*>").unwrap());
static RE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static RE_LINE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n]+").unwrap());
static RE_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(?:nbsp|#160|quot|#39|apos);").unwrap());
static RE_ENTITY_TAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"&#?[A-Za-z0-9]*$").unwrap());
static RE_ENTITY_HEAD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^&#?[A-Za-z0-9]+;").unwrap());

/// Replace every `<ruby>` element that carries readings with the readings
/// alone. A ruby element without `<rt>` keeps its base text.
pub(crate) fn substitute_readings(html: &str) -> String {
    RE_RUBY
        .replace_all(html, |caps: &Captures| {
            let inner = &caps[1];
            let readings: Vec<String> = RE_RT_CONTENT
                .captures_iter(inner)
                .map(|rt| strip_tags(&rt[1]))
                .collect();

            if readings.is_empty() {
                drop_readings(inner)
            } else {
                readings.concat()
            }
        })
        .into_owned()
}

/// Write each reading in parentheses after its base text, `漢字(かんじ)`.
/// Author-supplied `<rp>` fallbacks are discarded so brackets never double up.
pub(crate) fn annotate_readings(html: &str) -> String {
    RE_RUBY
        .replace_all(html, |caps: &Captures| {
            let inner = RE_RP_ELEMENT.replace_all(&caps[1], "");
            RE_RT_CONTENT
                .replace_all(&inner, |rt: &Captures| format!("({})", strip_tags(&rt[1])))
                .into_owned()
        })
        .into_owned()
}

/// Remove `<rt>` / `<rp>` elements together with their content, then any
/// unpaired reading tags left behind by malformed markup.
pub(crate) fn drop_readings(html: &str) -> String {
    let without_elements = RE_READING_ELEMENT.replace_all(html, "");
    RE_READING_TAG
        .replace_all(&without_elements, "")
        .into_owned()
}

/// Turn `<br>` and paragraph ends into a single space
pub(crate) fn breaks_to_spaces(html: &str) -> String {
    RE_BREAK.replace_all(html, " ").into_owned()
}

pub(crate) fn strip_tags(html: &str) -> String {
    RE_TAG.replace_all(html, "").into_owned()
}

/// Collapse each run of line breaks into one space
pub(crate) fn collapse_line_breaks(text: &str) -> String {
    RE_LINE_BREAKS.replace_all(text, " ").into_owned()
}

/// Drop angle brackets that survived tag stripping (`a < b`, cut-off tags)
pub(crate) fn drop_stray_brackets(text: &str) -> String {
    text.replace(|c: char| c == '<' || c == '>', "")
}

/// Decode the few entities that show up in story data.
///
/// Only entities whose replacement cannot start a new tag or entity are
/// decoded, which keeps the speech transform idempotent.
pub(crate) fn decode_common_entities(text: &str) -> String {
    RE_ENTITY
        .replace_all(text, |caps: &Captures| match &caps[0] {
            "&quot;" => "\"",
            "&#39;" | "&apos;" => "'",
            _ => " ",
        })
        .into_owned()
}

/// Start of an entity that `cut` would split, e.g. the `&` of `&nbsp;`
/// when `cut` falls inside it
pub(crate) fn entity_split_at(text: &str, cut: usize) -> Option<usize> {
    let start = RE_ENTITY_TAIL.find(&text[..cut])?.start();
    RE_ENTITY_HEAD.is_match(&text[start..]).then_some(start)
}
