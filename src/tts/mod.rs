//! TTS module: turns text into audio bytes through the remote speech endpoint.

mod client;
mod types;

pub use client::{percent_encode, TtsClient, TtsClientBuilder};
pub use types::{
    AudioOutput, TtsEndpoint, DEFAULT_BASE_URL, DEFAULT_CLIENT, DEFAULT_ENDPOINT_PATH,
    DEFAULT_INPUT_ENCODING, DEFAULT_LOCALE, DEFAULT_USER_AGENT,
};

use crate::Result;
use async_trait::async_trait;

/// Anything that can produce spoken audio for a piece of text.
///
/// [`TtsClient`] is the production implementation; the batch runner only
/// depends on this trait.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<AudioOutput>;
}
