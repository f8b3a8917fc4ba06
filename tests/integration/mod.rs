//! Integration tests against a mock HTTP speech endpoint

pub mod generator;
pub mod mock_server;
pub mod tts_client;
