//! Level filter groups for the story listing

use crate::level::{CanonicalLevel, LevelParser, DEFAULT_LEVEL_PREFIX};
use std::fmt;

/// Width of each textbook range group (`Level 1-3`, `Level 4-6`, ...)
pub const TEXTBOOK_GROUP_WIDTH: u32 = 3;

/// Number of textbook range groups offered by the listing
pub const TEXTBOOK_GROUP_COUNT: u32 = 10;

/// A listing filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelFilter {
    /// Every story
    All,

    /// Stories whose canonical level equals this one
    Exact(CanonicalLevel),

    /// Textbook levels `min..=max`; JLPT and opaque levels never match
    Range { min: u32, max: u32 },
}

impl LevelFilter {
    /// Parse a filter group name: `All`, `Level a-b`, or any level label
    pub fn parse(group: &str, parser: &LevelParser) -> Self {
        let group = group.trim();
        if group.is_empty() || group.eq_ignore_ascii_case("all") {
            return LevelFilter::All;
        }

        if let Some((min, max)) = parse_range(group, parser.prefix()) {
            return LevelFilter::Range { min, max };
        }

        LevelFilter::Exact(parser.normalize_str(group))
    }

    /// Whether a story at `level` belongs to this group
    pub fn matches(&self, level: &CanonicalLevel) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Exact(wanted) => wanted == level,
            LevelFilter::Range { min, max } => match level {
                CanonicalLevel::Numeric(n) => (*min..=*max).contains(n),
                _ => false,
            },
        }
    }

    /// Group name with `prefix` on textbook levels and ranges
    pub fn label_with(&self, prefix: &str) -> String {
        match self {
            LevelFilter::All => "All".to_string(),
            LevelFilter::Exact(level) => level.label_with(prefix),
            LevelFilter::Range { min, max } => format!("{} {}-{}", prefix, min, max),
        }
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label_with(DEFAULT_LEVEL_PREFIX))
    }
}

fn parse_range(group: &str, prefix: &str) -> Option<(u32, u32)> {
    let rest = group.strip_prefix(prefix)?;
    let (min, max) = rest.split_once('-')?;
    Some((min.trim().parse().ok()?, max.trim().parse().ok()?))
}

/// `Level 1-3` through `Level 28-30`
pub fn textbook_groups() -> Vec<LevelFilter> {
    (0..TEXTBOOK_GROUP_COUNT)
        .map(|i| LevelFilter::Range {
            min: i * TEXTBOOK_GROUP_WIDTH + 1,
            max: (i + 1) * TEXTBOOK_GROUP_WIDTH,
        })
        .collect()
}

/// `N5` through `N1`, easiest first
pub fn jlpt_groups() -> Vec<LevelFilter> {
    (1..=5u8)
        .rev()
        .map(|n| LevelFilter::Exact(CanonicalLevel::Jlpt(n)))
        .collect()
}
