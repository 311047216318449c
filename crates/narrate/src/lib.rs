mod audio;
mod client;
mod error;
mod narrator;

pub use audio::wav_duration_ms;
pub use client::{SpeechClient, SpeechConfig};
pub use error::Error;
pub use narrator::{NarratedUnit, Narrator};
