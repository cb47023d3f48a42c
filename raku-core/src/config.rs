//! Reader configuration
//!
//! Defaults match the published site. Every value can be overridden from
//! the environment (`RAKU_*`), and the CLI layers its own flags on top.

use crate::level::{CanonicalLevel, LevelParser, DEFAULT_LEVEL_PREFIX};
use crate::text::DEFAULT_EXCERPT_LENGTH;
use serde::{Deserialize, Serialize};

pub const ENV_EXCERPT_LENGTH: &str = "RAKU_EXCERPT_LENGTH";
pub const ENV_LEVEL_PREFIX: &str = "RAKU_LEVEL_PREFIX";
pub const ENV_EXCLUDED_TIER: &str = "RAKU_EXCLUDED_TIER";
pub const ENV_SPEECH_LANG: &str = "RAKU_SPEECH_LANG";
pub const ENV_SPEECH_RATE: &str = "RAKU_SPEECH_RATE";

/// Speech synthesis parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechSettings {
    /// BCP 47 language tag
    pub lang: String,

    /// Playback rate, 1.0 being the platform default
    pub rate: f32,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            lang: "ja-JP".to_string(),
            // Slower than default for learners
            rate: 0.85,
        }
    }
}

/// Settings shared by the catalog, the normalizer and the speech controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Maximum characters in a generated excerpt
    pub excerpt_length: usize,

    /// Prefix of textbook level labels
    pub level_prefix: String,

    /// Level label kept out of navigation numbering and prev/next links.
    /// Whether a beginner tier should be excluded is still an open product
    /// question, so nothing is excluded unless configured.
    pub excluded_tier: Option<String>,

    pub speech: SpeechSettings,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            excerpt_length: DEFAULT_EXCERPT_LENGTH,
            level_prefix: DEFAULT_LEVEL_PREFIX.to_string(),
            excluded_tier: None,
            speech: SpeechSettings::default(),
        }
    }
}

impl ReaderConfig {
    /// Defaults overridden by `RAKU_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_EXCERPT_LENGTH) {
            match value.trim().parse() {
                Ok(n) => config.excerpt_length = n,
                Err(e) => tracing::warn!("Ignoring {}={:?}: {}", ENV_EXCERPT_LENGTH, value, e),
            }
        }

        if let Some(value) = lookup(ENV_LEVEL_PREFIX).filter(|v| !v.trim().is_empty()) {
            config.level_prefix = value.trim().to_string();
        }

        if let Some(value) = lookup(ENV_EXCLUDED_TIER) {
            config = config.with_excluded_tier(Some(value));
        }

        if let Some(value) = lookup(ENV_SPEECH_LANG).filter(|v| !v.trim().is_empty()) {
            config.speech.lang = value.trim().to_string();
        }

        if let Some(value) = lookup(ENV_SPEECH_RATE) {
            match value.trim().parse::<f32>() {
                Ok(rate) if rate > 0.0 => config.speech.rate = rate,
                Ok(rate) => tracing::warn!("Ignoring non-positive speech rate {}", rate),
                Err(e) => tracing::warn!("Ignoring {}={:?}: {}", ENV_SPEECH_RATE, value, e),
            }
        }

        config
    }

    /// Set the navigation-excluded tier; blank or `none` clears it
    pub fn with_excluded_tier(mut self, tier: Option<String>) -> Self {
        self.excluded_tier = tier
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty() && !t.eq_ignore_ascii_case("none"));
        self
    }

    pub fn level_parser(&self) -> LevelParser {
        LevelParser::new(self.level_prefix.clone())
    }

    /// The excluded tier in canonical form
    pub fn excluded_level(&self) -> Option<CanonicalLevel> {
        let parser = self.level_parser();
        self.excluded_tier
            .as_deref()
            .map(|tier| parser.normalize_str(tier))
    }
}
