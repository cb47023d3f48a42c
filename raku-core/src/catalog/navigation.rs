//! Story numbering and previous/next links
//!
//! Both functions walk the catalog in its original order and share one
//! exclusion predicate, so "story 5" and the links around it always agree.

use crate::level::{CanonicalLevel, LevelParser};
use crate::types::Story;

/// Neighbours of a story in navigation order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjacent<'a> {
    pub prev: Option<&'a Story>,
    pub next: Option<&'a Story>,
}

impl<'a> Adjacent<'a> {
    pub fn prev_id(&self) -> Option<&'a str> {
        self.prev.map(|s| s.id.as_str())
    }

    pub fn next_id(&self) -> Option<&'a str> {
        self.next.map(|s| s.id.as_str())
    }
}

/// Whether a story takes part in numbering and prev/next navigation
pub fn is_navigable(story: &Story, parser: &LevelParser, excluded: Option<&CanonicalLevel>) -> bool {
    match excluded {
        Some(tier) => parser.normalize(&story.level) != *tier,
        None => true,
    }
}

/// Nearest navigable neighbours of the story at `index`.
///
/// The story itself may be excluded; its neighbours are still found.
pub fn adjacent_at<'a>(
    stories: &'a [Story],
    index: usize,
    parser: &LevelParser,
    excluded: Option<&CanonicalLevel>,
) -> Adjacent<'a> {
    let navigable = |s: &&Story| is_navigable(s, parser, excluded);

    let prev = stories[..index].iter().rev().find(navigable);
    let next = stories
        .get(index + 1..)
        .and_then(|rest| rest.iter().find(navigable));

    Adjacent { prev, next }
}

/// 1-based position of `id` among navigable stories
pub fn ordinal_of(
    stories: &[Story],
    id: &str,
    parser: &LevelParser,
    excluded: Option<&CanonicalLevel>,
) -> Option<usize> {
    stories
        .iter()
        .filter(|s| is_navigable(s, parser, excluded))
        .position(|s| s.id == id)
        .map(|p| p + 1)
}
