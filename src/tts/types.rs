//! TTS (Text-to-Speech) types.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://translate.google.com";
pub const DEFAULT_ENDPOINT_PATH: &str = "/translate_tts";
pub const DEFAULT_LOCALE: &str = "pt-PT";
pub const DEFAULT_CLIENT: &str = "tw-ob";
pub const DEFAULT_INPUT_ENCODING: &str = "UTF-8";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Audio returned by the speech service, byte-for-byte.
#[derive(Debug, Clone)]
pub struct AudioOutput {
    pub data: Bytes,
    pub content_type: Option<String>,
}

impl AudioOutput {
    pub fn len(&self) -> usize {
        self.data.len()
    }
}

/// Where and how to reach the speech service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TtsEndpoint {
    pub base_url: String,
    pub endpoint_path: String,
    /// Sent as `tl`.
    pub locale: String,
    /// Sent as `client`.
    pub client: String,
    /// Sent as `ie`.
    pub input_encoding: String,
    pub user_agent: String,
    /// Per-request timeout; `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for TtsEndpoint {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            client: DEFAULT_CLIENT.to_string(),
            input_encoding: DEFAULT_INPUT_ENCODING.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}
