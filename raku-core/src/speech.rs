//! Speech playback controller
//!
//! The platform speech engine is a process-wide singleton that plays one
//! utterance at a time. Every controller shares it through an `Rc`, cancels
//! whatever is playing before speaking, and tracks only its own utterance:
//! notifications for an utterance it no longer owns are ignored, so a late
//! `End` from a preempted utterance cannot flip the state of a newer one.

use crate::config::SpeechSettings;
use crate::text::speech_text_of;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one submitted utterance across all controllers
pub type UtteranceId = u64;

static NEXT_UTTERANCE: AtomicU64 = AtomicU64::new(1);

/// A request to speak plain text
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub id: UtteranceId,
    pub text: String,
    pub lang: String,
    pub rate: f32,
}

/// Notifications the engine sends back for an utterance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    Start,
    End,
    Error(String),
}

/// The platform speech capability.
///
/// Implementations report progress by routing [`SpeechEvent`]s for the
/// utterance id to [`PlaybackController::handle`].
pub trait SpeechSynthesizer {
    /// Stop and discard any utterance in flight
    fn cancel(&self);

    /// Start speaking, replacing nothing (callers cancel first)
    fn speak(&self, utterance: Utterance);
}

/// What a toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackAction {
    /// Playback was running and has been cancelled
    Stopped,

    /// Nothing to say after normalization
    Idle,

    /// An utterance was submitted; playing starts with its `Start` event
    Requested(UtteranceId),
}

/// Play/stop state of one "listen" control
pub struct PlaybackController<S: SpeechSynthesizer + ?Sized> {
    synth: Rc<S>,
    settings: SpeechSettings,
    is_playing: bool,
    current: Option<UtteranceId>,
}

impl<S: SpeechSynthesizer + ?Sized> PlaybackController<S> {
    pub fn new(synth: Rc<S>, settings: SpeechSettings) -> Self {
        Self {
            synth,
            settings,
            is_playing: false,
            current: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Utterance this controller is waiting on or playing
    pub fn current(&self) -> Option<UtteranceId> {
        self.current
    }

    /// Stop if playing, otherwise speak the reading of `html`
    pub fn toggle(&mut self, html: &str) -> PlaybackAction {
        if self.is_playing {
            self.synth.cancel();
            self.is_playing = false;
            self.current = None;
            return PlaybackAction::Stopped;
        }

        // Another control may still be speaking
        self.synth.cancel();

        let text = speech_text_of(html);
        if text.is_empty() {
            self.current = None;
            return PlaybackAction::Idle;
        }

        let id = NEXT_UTTERANCE.fetch_add(1, Ordering::Relaxed);
        tracing::debug!("Speaking utterance {} ({} chars)", id, text.chars().count());

        self.current = Some(id);
        self.synth.speak(Utterance {
            id,
            text,
            lang: self.settings.lang.clone(),
            rate: self.settings.rate,
        });

        PlaybackAction::Requested(id)
    }

    /// Apply an engine notification
    pub fn handle(&mut self, id: UtteranceId, event: SpeechEvent) {
        if self.current != Some(id) {
            tracing::trace!("Ignoring {:?} for stale utterance {}", event, id);
            return;
        }

        match event {
            SpeechEvent::Start => self.is_playing = true,
            SpeechEvent::End => {
                self.is_playing = false;
                self.current = None;
            }
            SpeechEvent::Error(reason) => {
                tracing::debug!("Utterance {} failed: {}", id, reason);
                self.is_playing = false;
                self.current = None;
            }
        }
    }
}

impl<S: SpeechSynthesizer + ?Sized> Drop for PlaybackController<S> {
    fn drop(&mut self) {
        self.synth.cancel();
    }
}
