//! Full runs against the mock endpoint

use crate::integration::mock_server::MockTtsServer;
use alfabeto_audio::pronunciation::{PronunciationOverride, ALPHABET};
use alfabeto_audio::{AudioGenerator, GeneratorConfig, Selection};
use mockito::Mock;

fn config_for(fixture: &MockTtsServer, out: &std::path::Path) -> GeneratorConfig {
    let mut config = GeneratorConfig {
        output_dir: out.to_path_buf(),
        delay_ms: 0,
        ..GeneratorConfig::default()
    };
    config.tts.base_url = fixture.base_url.clone();
    config
}

async fn mock_letters(fixture: &MockTtsServer, failing: &[char]) -> Vec<Mock> {
    let table = PronunciationOverride::default();
    let mut mocks = Vec::new();
    for letter in ALPHABET.chars() {
        let spoken = table.spoken_form(letter);
        let mock = if failing.contains(&letter) {
            fixture.mock_error(&spoken, 500).await
        } else {
            fixture
                .mock_speech(&spoken, format!("audio:{spoken}").as_bytes())
                .await
        };
        mocks.push(mock);
    }
    mocks
}

#[tokio::test]
async fn test_full_run_writes_every_clip() {
    let fixture = MockTtsServer::new().await;
    let out = tempfile::tempdir().unwrap();
    let mut mocks = mock_letters(&fixture, &[]).await;
    for phrase in [
        "Muito bem",
        "Tenta outra vez",
        "Parabéns, completaste o alfabeto",
        "Encontra a letra",
    ] {
        mocks.push(
            fixture
                .mock_speech(phrase, format!("audio:{phrase}").as_bytes())
                .await,
        );
    }

    let generator = AudioGenerator::from_config(config_for(&fixture, out.path())).unwrap();
    let report = generator.run(Selection::All).await.unwrap();

    assert!(report.is_complete());
    assert_eq!(report.succeeded(), 30);
    let a = std::fs::read(out.path().join("audio/letters/A.mp3")).unwrap();
    assert_eq!(a, "audio:á".as_bytes());
    let b = std::fs::read(out.path().join("audio/letters/B.mp3")).unwrap();
    assert_eq!(b, b"audio:B");
    let success = std::fs::read(out.path().join("audio/sounds/success.mp3")).unwrap();
    assert_eq!(success, b"audio:Muito bem");
    assert!(out.path().join("audio/sounds/find_letter.mp3").exists());
    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_failed_letter_does_not_stop_the_run() {
    let fixture = MockTtsServer::new().await;
    let out = tempfile::tempdir().unwrap();
    let mocks = mock_letters(&fixture, &['Q']).await;

    let generator = AudioGenerator::from_config(config_for(&fixture, out.path())).unwrap();
    let report = generator.run(Selection::Letters).await.unwrap();

    let letters = report.letters.as_ref().unwrap();
    assert_eq!(letters.succeeded, 25);
    assert_eq!(letters.total, 26);
    assert_eq!(letters.failed, vec!["Q".to_string()]);
    assert!(report.sounds.is_none());
    assert!(!out.path().join("audio/letters/Q.mp3").exists());
    assert!(out.path().join("audio/letters/R.mp3").exists());
    assert!(report.to_string().contains("Run the tool again"));
    // Every letter was requested exactly once, Q included.
    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_directories_created() {
    let fixture = MockTtsServer::new().await;
    let out = tempfile::tempdir().unwrap();
    let root = out.path().join("nested/site");

    let generator = AudioGenerator::from_config(config_for(&fixture, &root)).unwrap();
    generator.create_directories().await.unwrap();

    assert!(root.join("audio/letters").is_dir());
    assert!(root.join("audio/sounds").is_dir());
}

#[tokio::test]
async fn test_duplicate_sound_names_rejected_before_any_request() {
    let fixture = MockTtsServer::new().await;
    let out = tempfile::tempdir().unwrap();
    let mut config = config_for(&fixture, out.path());
    config.sound_effects = vec![
        alfabeto_audio::catalog::SoundEffectSpec::new("Muito bem", "same.mp3"),
        alfabeto_audio::catalog::SoundEffectSpec::new("Boa", "same.mp3"),
    ];

    let generator = AudioGenerator::from_config(config).unwrap();
    let err = generator.run(Selection::Sounds).await.unwrap_err();

    assert!(matches!(err, alfabeto_audio::Error::Validation { .. }));
    assert!(!out.path().join("audio").exists());
}
