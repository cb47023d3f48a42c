//! View models for the story listing and the story page
//!
//! These gather everything a renderer needs from one story so the CLI (or
//! any other front end) never touches raw field fallbacks itself.

use crate::badge::{badge_color, BadgeColor};
use crate::catalog::Catalog;
use crate::error::ContentError;
use crate::text::{body_or_empty, excerpt_of, plain_title_of, speech_text_of};
use crate::types::{Quiz, Story};
use serde::Serialize;

/// Site name appended to every story page title
pub const PAGE_TITLE_SUFFIX: &str = "Japanese Stories";

/// Title of the page for an unknown story id
pub const NOT_FOUND_TITLE: &str = "Story Not Found";

/// `<plain title> | Japanese Stories`
pub fn page_title(title_html: &str) -> String {
    format!("{} | {}", plain_title_of(title_html), PAGE_TITLE_SUFFIX)
}

/// One row of the story listing
#[derive(Debug, Clone, Serialize)]
pub struct StoryCard<'a> {
    pub id: &'a str,
    pub title_html: &'a str,
    pub plain_title: String,
    pub level: String,
    pub badge: BadgeColor,
    pub excerpt: String,
    pub lesson: &'a str,

    /// Serial number, absent for stories in the excluded tier
    pub ordinal: Option<usize>,
}

/// Document metadata for a story route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
}

/// Everything shown on a story's own page
#[derive(Debug, Clone, Serialize)]
pub struct StoryPage<'a> {
    pub id: &'a str,
    pub title_html: &'a str,
    pub meta: PageMeta,
    pub level: String,
    pub badge: BadgeColor,
    pub lesson: &'a str,
    pub serial: Option<usize>,
    pub prev: Option<&'a str>,
    pub next: Option<&'a str>,
    pub reading_goals: &'a [String],
    pub body_html: &'a str,
    pub speech_text: String,
    pub translation: Option<&'a str>,
    pub quizzes: &'a [Quiz],
}

impl Catalog {
    /// Listing row for a story
    pub fn card<'a>(&self, story: &'a Story) -> StoryCard<'a> {
        let level = self.level_of(story);
        StoryCard {
            id: &story.id,
            title_html: &story.title,
            plain_title: plain_title_of(&story.title),
            level: self.label_of(&level),
            badge: badge_color(&level),
            excerpt: excerpt_of(story, self.excerpt_length()),
            lesson: story.lesson(),
            ordinal: self.ordinal_of(&story.id, self.excluded_tier()),
        }
    }

    /// Listing rows in the order given
    pub fn cards<'a>(&self, stories: &[&'a Story]) -> Vec<StoryCard<'a>> {
        stories.iter().map(|s| self.card(s)).collect()
    }

    /// Title and description for a route, including unknown ids
    pub fn page_meta(&self, id: &str) -> PageMeta {
        match self.get(id) {
            Ok(story) => PageMeta {
                title: page_title(&story.title),
                description: Some(excerpt_of(story, self.excerpt_length())),
            },
            Err(_) => PageMeta {
                title: NOT_FOUND_TITLE.to_string(),
                description: None,
            },
        }
    }

    /// Full page for a story
    pub fn page(&self, id: &str) -> Result<StoryPage<'_>, ContentError> {
        let story = self.get(id)?;
        let nav = self.navigation(id)?;
        let level = self.level_of(story);
        let body_html = body_or_empty(story);

        Ok(StoryPage {
            id: &story.id,
            title_html: &story.title,
            meta: self.page_meta(id),
            level: self.label_of(&level),
            badge: badge_color(&level),
            lesson: story.lesson(),
            serial: nav.ordinal,
            prev: nav.adjacent.prev_id(),
            next: nav.adjacent.next_id(),
            reading_goals: story.reading_goals(),
            body_html,
            speech_text: speech_text_of(body_html),
            translation: story.translation(),
            quizzes: &story.quizzes,
        })
    }
}
