//! Groups command implementation

use super::Context;
use anyhow::Result;
use raku_core::catalog::{jlpt_groups, textbook_groups};
use raku_core::LevelFilter;

/// Show every listing group with its story count
pub fn groups(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    println!("{:<12} {}", catalog.group_label(&LevelFilter::All), catalog.len());

    println!("\nTextbook:");
    for group in textbook_groups() {
        println!("  {:<12} {}", catalog.group_label(&group), catalog.filter(&group).len());
    }

    println!("\nJLPT:");
    for group in jlpt_groups() {
        println!("  {:<12} {}", catalog.group_label(&group), catalog.filter(&group).len());
    }

    Ok(())
}
