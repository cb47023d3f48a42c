//! Story catalog: lookup, filtering, difficulty ordering and navigation

mod filter;
mod navigation;

pub use filter::{jlpt_groups, textbook_groups, LevelFilter, TEXTBOOK_GROUP_COUNT, TEXTBOOK_GROUP_WIDTH};
pub use navigation::{adjacent_at, is_navigable, ordinal_of, Adjacent};

use crate::config::ReaderConfig;
use crate::error::ContentError;
use crate::level::{CanonicalLevel, LevelParser};
use crate::types::Story;
use std::collections::HashMap;

/// Position of a story in the reading sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Navigation<'a> {
    /// 1-based serial number; `None` for stories in the excluded tier
    pub ordinal: Option<usize>,
    pub adjacent: Adjacent<'a>,
}

/// The immutable, ordered collection of stories
#[derive(Debug, Clone)]
pub struct Catalog {
    stories: Vec<Story>,
    index: HashMap<String, usize>,
    duplicates: Vec<String>,
    parser: LevelParser,
    excluded: Option<CanonicalLevel>,
    excerpt_length: usize,
}

impl Catalog {
    /// Build a catalog; later records reusing an id are dropped
    pub fn new(stories: Vec<Story>, config: &ReaderConfig) -> Self {
        let mut kept = Vec::with_capacity(stories.len());
        let mut index = HashMap::with_capacity(stories.len());
        let mut duplicates = Vec::new();

        for story in stories {
            if index.contains_key(&story.id) {
                tracing::warn!("Duplicate story id {:?}, keeping the first record", story.id);
                duplicates.push(story.id);
                continue;
            }
            index.insert(story.id.clone(), kept.len());
            kept.push(story);
        }

        Self {
            stories: kept,
            index,
            duplicates,
            parser: config.level_parser(),
            excluded: config.excluded_level(),
            excerpt_length: config.excerpt_length,
        }
    }

    /// Stories in catalog order
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    /// Ids of records dropped for reusing an earlier id, one entry per drop
    pub fn duplicate_ids(&self) -> &[String] {
        &self.duplicates
    }

    pub fn parser(&self) -> &LevelParser {
        &self.parser
    }

    /// Tier kept out of numbering and prev/next links, if any
    pub fn excluded_tier(&self) -> Option<&CanonicalLevel> {
        self.excluded.as_ref()
    }

    /// Characters kept in generated excerpts
    pub fn excerpt_length(&self) -> usize {
        self.excerpt_length
    }

    /// Canonical level of a story
    pub fn level_of(&self, story: &Story) -> CanonicalLevel {
        self.parser.normalize(&story.level)
    }

    /// Display label of a level using the configured prefix
    pub fn label_of(&self, level: &CanonicalLevel) -> String {
        self.parser.label(level)
    }

    /// Group name that [`Catalog::filter_group`] parses back to `filter`
    pub fn group_label(&self, filter: &LevelFilter) -> String {
        filter.label_with(self.parser.prefix())
    }

    /// Parse a filter group name with this catalog's level parser
    pub fn filter_group(&self, group: &str) -> LevelFilter {
        LevelFilter::parse(group, &self.parser)
    }

    /// Look up a story by id
    pub fn get(&self, id: &str) -> Result<&Story, ContentError> {
        self.position(id).map(|i| &self.stories[i])
    }

    fn position(&self, id: &str) -> Result<usize, ContentError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| ContentError::NotFound(id.to_string()))
    }

    /// Stories in the group, in catalog order
    pub fn filter(&self, filter: &LevelFilter) -> Vec<&Story> {
        self.stories
            .iter()
            .filter(|s| filter.matches(&self.level_of(s)))
            .collect()
    }

    /// Stable sort by difficulty score; equal scores keep their input order
    pub fn sort_by_difficulty<'a>(&self, mut stories: Vec<&'a Story>) -> Vec<&'a Story> {
        stories.sort_by_key(|s| self.level_of(s).difficulty_score());
        stories
    }

    /// Listing view: filter, then order by difficulty
    pub fn browse(&self, filter: &LevelFilter) -> Vec<&Story> {
        self.sort_by_difficulty(self.filter(filter))
    }

    /// Nearest neighbours of `id` in catalog order, skipping `excluded`
    pub fn adjacent_of(
        &self,
        id: &str,
        excluded: Option<&CanonicalLevel>,
    ) -> Result<Adjacent<'_>, ContentError> {
        let index = self.position(id)?;
        Ok(adjacent_at(&self.stories, index, &self.parser, excluded))
    }

    /// 1-based serial number of `id` among stories outside `excluded`
    pub fn ordinal_of(&self, id: &str, excluded: Option<&CanonicalLevel>) -> Option<usize> {
        ordinal_of(&self.stories, id, &self.parser, excluded)
    }

    /// Serial number and neighbours using the configured excluded tier
    pub fn navigation(&self, id: &str) -> Result<Navigation<'_>, ContentError> {
        let excluded = self.excluded.as_ref();
        let adjacent = self.adjacent_of(id, excluded)?;
        Ok(Navigation {
            ordinal: self.ordinal_of(id, excluded),
            adjacent,
        })
    }
}
