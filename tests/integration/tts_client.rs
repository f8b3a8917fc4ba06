//! TtsClient against the mock endpoint

use crate::integration::mock_server::MockTtsServer;
use alfabeto_audio::tts::{Synthesizer, TtsClient};
use alfabeto_audio::Error;
use std::time::Duration;

#[tokio::test]
async fn test_vowel_request_and_body_passthrough() {
    let fixture = MockTtsServer::new().await;
    let body: &[u8] = b"ID3\x04\x00fake-mp3-frames\xff\xfb";
    let mock = fixture.mock_speech("á", body).await;

    let audio = fixture.client().synthesize("á").await.expect("synthesize");

    assert_eq!(audio.data.as_ref(), body);
    assert_eq!(audio.content_type.as_deref(), Some("audio/mpeg"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_phrase_with_spaces_and_accents() {
    let fixture = MockTtsServer::new().await;
    let mock = fixture
        .mock_speech("Parabéns, completaste o alfabeto", b"victory")
        .await;

    let client = fixture.client();
    let synth: &dyn Synthesizer = &client;
    let audio = synth
        .synthesize("Parabéns, completaste o alfabeto")
        .await
        .expect("synthesize");

    assert_eq!(audio.data.as_ref(), b"victory");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_http_error_is_remote_error() {
    let fixture = MockTtsServer::new().await;
    let mock = fixture.mock_error("Q", 429).await;

    let err = fixture.client().synthesize("Q").await.unwrap_err();

    match err {
        Error::Remote { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "rate limited");
        }
        other => panic!("unexpected error: {other}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_connection_failure_is_network_error() {
    let client = TtsClient::builder()
        .base_url("http://127.0.0.1:1")
        .build()
        .expect("client");

    let err = client.synthesize("B").await.unwrap_err();

    assert!(matches!(err, Error::Network { .. }), "got {err}");
}

#[tokio::test]
async fn test_sub_second_timeout_allows_prompt_response() {
    let fixture = MockTtsServer::new().await;
    let mock = fixture.mock_speech("B", b"bee").await;
    let client = TtsClient::builder()
        .base_url(&fixture.base_url)
        .timeout(Some(Duration::from_millis(500)))
        .build()
        .expect("client");

    let audio = client.synthesize("B").await.expect("synthesize");

    assert_eq!(audio.data.as_ref(), b"bee");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_timeout_fires_on_silent_server() {
    // Accepts the connection but never answers.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let client = TtsClient::builder()
        .base_url(format!("http://{addr}"))
        .timeout(Some(Duration::from_millis(200)))
        .build()
        .expect("client");

    let started = std::time::Instant::now();
    let err = client.synthesize("B").await.unwrap_err();

    assert!(matches!(err, Error::Network { .. }), "got {err}");
    assert!(started.elapsed() < Duration::from_secs(5));
    drop(listener);
}
