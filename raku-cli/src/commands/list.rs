//! List command implementation

use super::Context;
use anyhow::Result;

/// List stories in a level group, easiest first
pub fn list(ctx: &Context, level: &str, json: bool) -> Result<()> {
    let catalog = ctx.catalog()?;
    let filter = catalog.filter_group(level);
    let stories = catalog.browse(&filter);
    let cards = catalog.cards(&stories);

    let group = catalog.group_label(&filter);
    tracing::debug!("{} stories in group {}", cards.len(), group);

    if json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    if cards.is_empty() {
        println!("No stories in {}", group);
        return Ok(());
    }

    for card in &cards {
        let ordinal = card
            .ordinal
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>4}  {:<10} {:<4} {}  ({})",
            ordinal, card.level, card.lesson, card.plain_title, card.id
        );
        if !card.excerpt.is_empty() {
            println!("      {}", card.excerpt);
        }
    }

    Ok(())
}
