//! Text normalizer: excerpts, speech text and plain titles from story markup

mod markup;
mod normalizer;

pub use normalizer::{
    body_of, body_or_empty, excerpt_of, plain_text_of, plain_title_of, speech_text_of,
    with_readings_of, DEFAULT_EXCERPT_LENGTH, ELLIPSIS,
};
