//! Daily discussion topic rotation

use crate::types::Discussion;
use chrono::{Datelike, Local, NaiveDate};

/// Topic shown on `date`: the day of the year (1 for January 1st) modulo
/// the number of topics.
pub fn topic_for_date(topics: &[Discussion], date: NaiveDate) -> Option<&Discussion> {
    if topics.is_empty() {
        return None;
    }
    topics.get(date.ordinal() as usize % topics.len())
}

/// Topic for the current local date, re-read from the clock on every call
pub fn todays_topic(topics: &[Discussion]) -> Option<&Discussion> {
    topic_for_date(topics, Local::now().date_naive())
}
