//! TTS (Text-to-Speech) client.

use super::types::{AudioOutput, TtsEndpoint};
use super::Synthesizer;
use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use std::time::Duration;
use url::Url;

/// Longest slice of an error body echoed back in `Error::Remote`.
const MAX_ERROR_BODY: usize = 200;

/// Client for the translate-style GET speech endpoint.
pub struct TtsClient {
    http_client: reqwest::Client,
    endpoint: TtsEndpoint,
}

impl TtsClient {
    pub fn builder() -> TtsClientBuilder {
        TtsClientBuilder::new()
    }

    /// Full request URL for `text`, with every query value percent-encoded.
    pub fn request_url(&self, text: &str) -> Result<Url> {
        let raw = format!(
            "{}{}",
            self.endpoint.base_url.trim_end_matches('/'),
            self.endpoint.endpoint_path
        );
        let mut url = Url::parse(&raw).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid TTS endpoint URL: {}", e),
                ErrorContext::new()
                    .with_field_path("tts.base_url")
                    .with_details(raw.clone()),
            )
        })?;
        let query = format!(
            "ie={}&tl={}&client={}&q={}",
            percent_encode(&self.endpoint.input_encoding),
            percent_encode(&self.endpoint.locale),
            percent_encode(&self.endpoint.client),
            percent_encode(text),
        );
        url.set_query(Some(&query));
        Ok(url)
    }

    /// Fetch the spoken audio for `text`. One attempt, no retry.
    pub async fn synthesize(&self, text: &str) -> Result<AudioOutput> {
        if text.trim().is_empty() {
            return Err(Error::validation_with_context(
                "TTS text must not be empty",
                ErrorContext::new().with_source("tts"),
            ));
        }
        let url = self.request_url(text)?;
        tracing::debug!(url = %url, "requesting speech");

        let response = self
            .http_client
            .get(url)
            .header(USER_AGENT, &self.endpoint.user_agent)
            .send()
            .await
            .map_err(|e| {
                Error::network_with_context(
                    format!("TTS request failed: {}", e),
                    ErrorContext::new().with_details(text).with_source("tts"),
                )
            })?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await.map_err(|e| {
            Error::network_with_context(
                format!("Failed to read TTS response: {}", e),
                ErrorContext::new().with_source("tts"),
            )
        })?;
        if !status.is_success() {
            let body_str = String::from_utf8_lossy(&bytes);
            let message: String = body_str.chars().take(MAX_ERROR_BODY).collect();
            return Err(Error::Remote {
                status: status.as_u16(),
                message,
            });
        }
        Ok(AudioOutput {
            data: bytes,
            content_type,
        })
    }
}

#[async_trait]
impl Synthesizer for TtsClient {
    async fn synthesize(&self, text: &str) -> Result<AudioOutput> {
        TtsClient::synthesize(self, text).await
    }
}

/// `application/x-www-form-urlencoded` output with spaces as `%20` instead of `+`.
/// A literal `+` is already escaped as `%2B`, so the swap is unambiguous.
pub fn percent_encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

pub struct TtsClientBuilder {
    endpoint: TtsEndpoint,
    timeout: Option<Duration>,
}

impl TtsClientBuilder {
    pub fn new() -> Self {
        Self {
            endpoint: TtsEndpoint::default(),
            timeout: None,
        }
    }
    /// Replace every setting, including the timeout, with `endpoint`.
    pub fn endpoint(mut self, endpoint: TtsEndpoint) -> Self {
        self.timeout = endpoint.timeout_secs.map(Duration::from_secs);
        self.endpoint = endpoint;
        self
    }
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint.base_url = url.into();
        self
    }
    pub fn endpoint_path(mut self, path: impl Into<String>) -> Self {
        self.endpoint.endpoint_path = path.into();
        self
    }
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.endpoint.locale = locale.into();
        self
    }
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.endpoint.user_agent = user_agent.into();
        self
    }
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<TtsClient> {
        let mut endpoint = self.endpoint;
        if endpoint.base_url.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "TTS base URL must be specified",
                ErrorContext::new().with_field_path("tts.base_url"),
            ));
        }
        if !endpoint.endpoint_path.starts_with('/') {
            endpoint.endpoint_path = format!("/{}", endpoint.endpoint_path);
        }
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            if timeout.is_zero() {
                return Err(Error::configuration_with_context(
                    "TTS timeout must be greater than zero",
                    ErrorContext::new().with_field_path("tts.timeout_secs"),
                ));
            }
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;
        let client = TtsClient {
            http_client,
            endpoint,
        };
        // Surface a malformed base URL now rather than on the first item.
        client.request_url("A")?;
        Ok(client)
    }
}

impl Default for TtsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
