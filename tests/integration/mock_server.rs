//! Mock speech endpoint for integration tests

use alfabeto_audio::tts::{TtsClient, DEFAULT_ENDPOINT_PATH, DEFAULT_USER_AGENT};
use mockito::{Matcher, Mock, Server, ServerGuard};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Test fixture that manages a mock TTS server
pub struct MockTtsServer {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

impl MockTtsServer {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    /// Client pointed at the mock server, otherwise default settings.
    pub fn client(&self) -> TtsClient {
        TtsClient::builder()
            .base_url(&self.base_url)
            .build()
            .expect("client")
    }

    /// Query the default pt-PT client sends for `text`.
    fn query_for(text: &str) -> Matcher {
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("ie".into(), "UTF-8".into()),
            Matcher::UrlEncoded("tl".into(), "pt-PT".into()),
            Matcher::UrlEncoded("client".into(), "tw-ob".into()),
            Matcher::UrlEncoded("q".into(), text.into()),
        ])
    }

    /// Serve `body` as MP3 for exactly one request speaking `text`.
    pub async fn mock_speech(&self, text: &str, body: &[u8]) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("GET", DEFAULT_ENDPOINT_PATH)
            .match_query(Self::query_for(text))
            .match_header("user-agent", DEFAULT_USER_AGENT)
            .with_status(200)
            .with_header("content-type", "audio/mpeg")
            .with_body(body)
            .expect(1)
            .create_async()
            .await
    }

    /// Answer the request for `text` with an HTTP error.
    pub async fn mock_error(&self, text: &str, status: usize) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("GET", DEFAULT_ENDPOINT_PATH)
            .match_query(Self::query_for(text))
            .with_status(status)
            .with_body("rate limited")
            .expect(1)
            .create_async()
            .await
    }
}
