//! Show command implementation

use super::Context;
use anyhow::{Context as _, Result};
use raku_core::text::{plain_text_of, plain_title_of, with_readings_of};
use raku_core::view::NOT_FOUND_TITLE;

/// Print a story page; furigana is shown as `漢字(かんじ)` unless hidden
pub fn show(
    ctx: &Context,
    id: &str,
    translation: bool,
    furigana: bool,
    json: bool,
) -> Result<()> {
    let catalog = ctx.catalog()?;
    let mut page = catalog
        .page(id)
        .with_context(|| format!("{}: {}", NOT_FOUND_TITLE, id))?;

    if !translation {
        page.translation = None;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    println!("{}", page.meta.title);
    match page.serial {
        Some(n) => println!("{} / {} / Story {}", page.level, page.lesson, n),
        None => println!("{} / {}", page.level, page.lesson),
    }
    if page.prev.is_some() || page.next.is_some() {
        println!(
            "Previous: {}   Next: {}",
            page.prev.unwrap_or("-"),
            page.next.unwrap_or("-")
        );
    }

    if !page.reading_goals.is_empty() {
        println!("\nBefore you read:");
        for goal in page.reading_goals {
            println!("  - {}", plain_title_of(goal));
        }
    }

    let body = if furigana {
        with_readings_of(page.body_html)
    } else {
        plain_text_of(page.body_html)
    };
    println!("\n{}", body);

    if let Some(text) = page.translation {
        println!("\nTranslation:\n{}", plain_text_of(text));
    }

    if !page.quizzes.is_empty() {
        println!(
            "\n{} quiz question(s): raku quiz {}",
            page.quizzes.len(),
            page.id
        );
    }

    Ok(())
}
