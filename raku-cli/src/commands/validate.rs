//! Validate command implementation

use super::Context;
use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};
use raku_core::loader::SkippedRecord;
use raku_core::validate::{validate_catalog, Issue};
use raku_core::Catalog;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Outcome of checking one data file
struct FileReport {
    path: PathBuf,
    stories: usize,
    skipped: Vec<SkippedRecord>,
    issues: Vec<Issue>,
}

impl FileReport {
    fn problems(&self) -> usize {
        self.skipped.len() + self.issues.len()
    }
}

/// Validate story data files in parallel
pub fn validate(ctx: &Context, files: Vec<PathBuf>) -> Result<()> {
    let files = if files.is_empty() {
        vec![ctx.data.clone()]
    } else {
        files
    };

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")?
            .progress_chars("##-"),
    );

    // Each file is independent
    let results: Vec<Result<FileReport>> = files
        .par_iter()
        .map(|path| {
            let result = check_file(ctx, path);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();

    let mut failed = 0;
    for (path, result) in files.iter().zip(results) {
        match result {
            Ok(report) if report.problems() == 0 => {
                println!("{}: OK ({} stories)", report.path.display(), report.stories);
            }
            Ok(report) => {
                failed += 1;
                println!(
                    "{}: {} problem(s) in {} stories",
                    report.path.display(),
                    report.problems(),
                    report.stories
                );
                for record in &report.skipped {
                    println!(
                        "  record {} ({}): {}",
                        record.index,
                        record.id.as_deref().unwrap_or("no id"),
                        record.reason
                    );
                }
                for issue in &report.issues {
                    println!("  {}: {}", issue.story, issue.problem);
                }
            }
            Err(e) => {
                failed += 1;
                eprintln!("{}: {:#}", path.display(), e);
            }
        }
    }

    if failed > 0 {
        bail!("Validation failed for {} of {} file(s)", failed, files.len());
    }

    Ok(())
}

fn check_file(ctx: &Context, path: &Path) -> Result<FileReport> {
    let (catalog, skipped) = Catalog::load(path, &ctx.config)?;
    let issues = validate_catalog(&catalog);
    tracing::info!("Checked {:?}: {} issues", path, issues.len());

    Ok(FileReport {
        path: path.to_path_buf(),
        stories: catalog.len(),
        skipped,
        issues,
    })
}
