//! Level model: canonical difficulty levels and their ordering
//!
//! Story levels arrive in three shapes: bare textbook numbers (`3`),
//! prefixed labels (`"Level 3"`) and JLPT codes (`"N4"`). Everything the
//! catalog does with levels (filtering, sorting, badges, navigation
//! exclusion) goes through [`CanonicalLevel`] so those views never disagree.

use crate::error::ContentError;
use crate::types::RawLevel;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Prefix used by textbook level labels
pub const DEFAULT_LEVEL_PREFIX: &str = "Level";

/// Lowest textbook level; unparsable numbers fall back to it
pub const MIN_LEVEL: u32 = 1;

/// First score used by JLPT levels, past every possible numeric score
pub const JLPT_SCORE_BASE: u64 = 10 * (u32::MAX as u64 + 1);

/// Score of unrecognised labels; they sort after everything else
pub const OPAQUE_SCORE: u64 = u64::MAX;

static RE_JLPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^N([1-5])$").unwrap());
static RE_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Normalized difficulty level
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CanonicalLevel {
    /// Textbook level, 1 and up
    Numeric(u32),

    /// JLPT level 1..=5, where 5 is the easiest
    Jlpt(u8),

    /// Label that matches no known scheme, kept verbatim for display
    Opaque(String),
}

impl CanonicalLevel {
    /// Key used only for ordering stories by difficulty
    pub fn difficulty_score(&self) -> u64 {
        match self {
            CanonicalLevel::Numeric(n) => u64::from(*n) * 10,
            CanonicalLevel::Jlpt(n) => JLPT_SCORE_BASE + u64::from(6u8.saturating_sub(*n)) * 10,
            CanonicalLevel::Opaque(_) => OPAQUE_SCORE,
        }
    }

    /// Display label, e.g. `Level 3`, `N4`
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Display label with `prefix` in front of textbook levels
    pub fn label_with(&self, prefix: &str) -> String {
        match self {
            CanonicalLevel::Numeric(n) => format!("{} {}", prefix, n),
            other => other.to_string(),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, CanonicalLevel::Numeric(_))
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, CanonicalLevel::Opaque(_))
    }
}

impl fmt::Display for CanonicalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalLevel::Numeric(n) => write!(f, "{} {}", DEFAULT_LEVEL_PREFIX, n),
            CanonicalLevel::Jlpt(n) => write!(f, "N{}", n),
            CanonicalLevel::Opaque(raw) => f.write_str(raw),
        }
    }
}

/// Difficulty score of a canonical level (see [`CanonicalLevel::difficulty_score`])
pub fn difficulty_score(level: &CanonicalLevel) -> u64 {
    level.difficulty_score()
}

/// Normalize a raw level using the default `Level` prefix
pub fn normalize_level(raw: &RawLevel) -> CanonicalLevel {
    LevelParser::default().normalize(raw)
}

/// Turns raw level values into canonical ones
#[derive(Debug, Clone)]
pub struct LevelParser {
    prefix: String,
}

impl LevelParser {
    /// Create a parser recognising `prefix` as the textbook label prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Label that this parser reads back as the same level
    pub fn label(&self, level: &CanonicalLevel) -> String {
        level.label_with(&self.prefix)
    }

    /// Total normalization: unrecognised labels become `Opaque`
    pub fn normalize(&self, raw: &RawLevel) -> CanonicalLevel {
        match raw {
            RawLevel::Number(n) => CanonicalLevel::Numeric(clamp_level(*n)),
            RawLevel::Text(s) => self.normalize_str(s),
        }
    }

    /// Normalize a level label such as `"Level 2"` or `"N5"`
    pub fn normalize_str(&self, raw: &str) -> CanonicalLevel {
        let trimmed = raw.trim();

        if let Some(rest) = trimmed.strip_prefix(self.prefix.as_str()) {
            let n = RE_DIGITS
                .find(rest)
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .unwrap_or(MIN_LEVEL)
                .max(MIN_LEVEL);
            return CanonicalLevel::Numeric(n);
        }

        if let Some(caps) = RE_JLPT.captures(trimmed) {
            // The pattern only admits a single digit 1-5
            let n = caps[1].parse::<u8>().unwrap_or(5);
            return CanonicalLevel::Jlpt(n);
        }

        tracing::debug!("Unrecognised level label {:?}, sorting it last", raw);
        CanonicalLevel::Opaque(raw.to_string())
    }

    /// Strict normalization used by data validation
    pub fn parse(&self, raw: &RawLevel) -> Result<CanonicalLevel, ContentError> {
        match self.normalize(raw) {
            CanonicalLevel::Opaque(label) => Err(ContentError::MalformedLevel(label)),
            level => Ok(level),
        }
    }
}

impl Default for LevelParser {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL_PREFIX)
    }
}

fn clamp_level(n: i64) -> u32 {
    u32::try_from(n.max(i64::from(MIN_LEVEL))).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(raw: impl Into<RawLevel>) -> CanonicalLevel {
        normalize_level(&raw.into())
    }

    #[test]
    fn test_numeric_and_prefixed_agree() {
        assert_eq!(norm(2i64), CanonicalLevel::Numeric(2));
        assert_eq!(norm("Level 2"), CanonicalLevel::Numeric(2));
        assert_eq!(norm("Level2"), CanonicalLevel::Numeric(2));
        assert_eq!(norm(2i64).label(), "Level 2");
        assert_eq!(norm(2i64).label_with("Lv"), "Lv 2");
    }

    #[test]
    fn test_unparsable_prefixed_level_defaults_to_minimum() {
        assert_eq!(norm("Level ?"), CanonicalLevel::Numeric(MIN_LEVEL));
        assert_eq!(norm("Level 0"), CanonicalLevel::Numeric(MIN_LEVEL));
        assert_eq!(norm(-4i64), CanonicalLevel::Numeric(MIN_LEVEL));
        assert_eq!(norm("Level 99999999999"), CanonicalLevel::Numeric(MIN_LEVEL));
    }

    #[test]
    fn test_jlpt_codes() {
        assert_eq!(norm("N3"), CanonicalLevel::Jlpt(3));
        assert_eq!(norm(" N5 "), CanonicalLevel::Jlpt(5));
        assert_eq!(norm("N6"), CanonicalLevel::Opaque("N6".to_string()));
        assert_eq!(norm("N"), CanonicalLevel::Opaque("N".to_string()));
    }

    #[test]
    fn test_opaque_keeps_raw_label() {
        let level = norm("上級");
        assert_eq!(level.label(), "上級");
        assert_eq!(level.difficulty_score(), OPAQUE_SCORE);
    }

    #[test]
    fn test_scores() {
        assert_eq!(norm(3i64).difficulty_score(), 30);
        assert!(norm("N5").difficulty_score() < norm("N1").difficulty_score());
        assert!(norm(u32::MAX as i64).difficulty_score() < norm("N5").difficulty_score());
        assert!(norm("N1").difficulty_score() < norm("???").difficulty_score());
    }

    #[test]
    fn test_custom_prefix() {
        let parser = LevelParser::new("Lv");
        assert_eq!(parser.normalize(&"Lv 7".into()), CanonicalLevel::Numeric(7));
        assert!(parser.normalize(&"Level 7".into()).is_opaque());
    }

    #[test]
    fn test_strict_parse() {
        let parser = LevelParser::default();
        assert_eq!(parser.parse(&"N2".into()), Ok(CanonicalLevel::Jlpt(2)));
        assert_eq!(
            parser.parse(&"beginner".into()),
            Err(ContentError::MalformedLevel("beginner".to_string()))
        );
    }
}
