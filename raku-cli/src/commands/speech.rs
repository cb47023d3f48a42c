//! Speech command implementation
//!
//! The terminal has no speech engine, so the synthesizer prints each
//! utterance instead of playing it.

use super::Context;
use anyhow::{Context as _, Result};
use raku_core::speech::{
    PlaybackAction, PlaybackController, SpeechEvent, SpeechSynthesizer, Utterance,
};
use raku_core::text::body_or_empty;
use raku_core::view::NOT_FOUND_TITLE;
use std::rc::Rc;

/// Prints utterances to stdout
struct TranscriptSynthesizer;

impl SpeechSynthesizer for TranscriptSynthesizer {
    fn cancel(&self) {
        tracing::debug!("Speech cancelled");
    }

    fn speak(&self, utterance: Utterance) {
        println!("[{} x{}] {}", utterance.lang, utterance.rate, utterance.text);
    }
}

/// Print what the "listen" control would read aloud
pub fn speech(ctx: &Context, id: &str) -> Result<()> {
    let catalog = ctx.catalog()?;
    let story = catalog
        .get(id)
        .with_context(|| format!("{}: {}", NOT_FOUND_TITLE, id))?;

    let synth = Rc::new(TranscriptSynthesizer);
    let mut controller = PlaybackController::new(synth, ctx.config.speech.clone());

    match controller.toggle(body_or_empty(story)) {
        PlaybackAction::Requested(utterance) => {
            // Printing is the whole utterance, so it starts and ends at once
            controller.handle(utterance, SpeechEvent::Start);
            controller.handle(utterance, SpeechEvent::End);
        }
        PlaybackAction::Idle => println!("Nothing to read in {}", id),
        PlaybackAction::Stopped => {}
    }

    Ok(())
}
