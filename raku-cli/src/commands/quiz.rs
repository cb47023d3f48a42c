//! Quiz command implementation

use super::Context;
use anyhow::{Context as _, Result};
use raku_core::quiz::{QuizSession, Verdict};
use raku_core::text::plain_title_of;
use raku_core::view::NOT_FOUND_TITLE;
use std::io::{self, BufRead};

/// Ask each question of a story's quiz, reading one answer per line
pub fn quiz(ctx: &Context, id: &str) -> Result<()> {
    let catalog = ctx.catalog()?;
    let story = catalog
        .get(id)
        .with_context(|| format!("{}: {}", NOT_FOUND_TITLE, id))?;

    if story.quizzes.is_empty() {
        println!("{} has no quiz", plain_title_of(&story.title));
        return Ok(());
    }

    let mut session = QuizSession::new(&story.quizzes);
    let stdin = io::stdin();
    let mut answers = stdin.lock().lines();

    for (i, quiz) in story.quizzes.iter().enumerate() {
        println!("\nQ{}. {}", i + 1, plain_title_of(&quiz.question));
        for (n, choice) in quiz.choices().iter().enumerate() {
            println!("  {}) {}", n + 1, plain_title_of(choice));
        }

        let line = match answers.next() {
            Some(line) => line.context("Failed to read answer")?,
            None => String::new(),
        };

        let Some(choice) = parse_choice(&line) else {
            println!("(skipped)");
            continue;
        };

        if let Err(e) = session.select_choice(i, choice) {
            println!("(skipped: {})", e);
            continue;
        }
        session.reveal(i)?;

        match session.verdict(i)? {
            Some(Verdict::Correct) => println!("Correct!"),
            Some(Verdict::Incorrect { answer: Some(answer) }) => {
                println!("Incorrect. The answer is: {}", plain_title_of(&answer))
            }
            Some(Verdict::Incorrect { answer: None }) => println!("Incorrect."),
            None => {}
        }

        if let Some(translation) = &quiz.question_translation {
            println!("({})", translation);
        }
    }

    let score = session.score();
    println!("\nScore: {}/{}", score.correct, score.total);

    Ok(())
}

/// 1-based choice number to index
fn parse_choice(line: &str) -> Option<usize> {
    line.trim().parse::<usize>().ok()?.checked_sub(1)
}
