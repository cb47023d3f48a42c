//! Versioned-schema compatibility shim.
//!
//! Older data files used different field names for the same concept
//! (`content_html` before `story_html`, `options` before `choices`, ...).
//! Records keep every historical field and resolve them through an ordered
//! candidate list, newest name first.

/// Return the first candidate that is present at all.
///
/// An empty list still counts as present, so a record that explicitly sets
/// `choices: []` does not fall through to a stale legacy field.
pub fn first_present<'a, T>(candidates: &[&'a Option<T>]) -> Option<&'a T> {
    candidates.iter().find_map(|c| c.as_ref())
}

/// Return the first candidate that holds a non-empty string.
pub fn first_non_empty<'a>(candidates: &[&'a Option<String>]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|c| c.as_deref())
        .find(|s| !s.is_empty())
}
