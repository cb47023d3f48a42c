//! Today command implementation

use super::Context;
use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use raku_core::discussion::{topic_for_date, todays_topic};
use raku_core::loader::load_discussions;
use raku_core::text::plain_title_of;

/// Show the discussion topic for a date (today by default)
pub fn today(ctx: &Context, date: Option<NaiveDate>, json: bool) -> Result<()> {
    let report = load_discussions(&ctx.discussions).with_context(|| {
        format!(
            "Failed to load discussions from {}",
            ctx.discussions.display()
        )
    })?;
    let topics = report.records;

    let topic = match date {
        Some(date) => topic_for_date(&topics, date),
        None => todays_topic(&topics),
    };

    let Some(topic) = topic else {
        println!("No discussion topics available");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(topic)?);
        return Ok(());
    }

    println!("Q: {}", plain_title_of(&topic.question_jp));
    println!("   {}", topic.question_en);
    println!("A: {}", plain_title_of(&topic.answer_jp));
    println!("   {}", topic.answer_en);

    Ok(())
}
