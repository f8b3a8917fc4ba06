//! End-to-end run: prepare directories, generate letters, generate sounds.

use crate::batch::{BatchExecutor, BatchExecutorConfig};
use crate::catalog::{self, WorkItem};
use crate::config::GeneratorConfig;
use crate::report::{section_summary, FinalReport, SectionCounts};
use crate::tts::{Synthesizer, TtsClient};
use crate::{Error, ErrorContext, Result};
use std::str::FromStr;

/// Which work lists a run covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Letters,
    Sounds,
}

impl Selection {
    pub fn includes_letters(self) -> bool {
        matches!(self, Selection::All | Selection::Letters)
    }

    pub fn includes_sounds(self) -> bool {
        matches!(self, Selection::All | Selection::Sounds)
    }
}

impl FromStr for Selection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Selection::All),
            "letters" => Ok(Selection::Letters),
            "sounds" => Ok(Selection::Sounds),
            other => Err(Error::configuration_with_context(
                "expected one of: all, letters, sounds",
                ErrorContext::new()
                    .with_field_path("--only")
                    .with_details(other.to_string()),
            )),
        }
    }
}

pub struct AudioGenerator<S> {
    config: GeneratorConfig,
    synthesizer: S,
}

impl AudioGenerator<TtsClient> {
    /// Generator backed by the real speech endpoint described in `config.tts`.
    pub fn from_config(config: GeneratorConfig) -> Result<Self> {
        let client = TtsClient::builder().endpoint(config.tts.clone()).build()?;
        Ok(Self::new(config, client))
    }
}

impl<S: Synthesizer> AudioGenerator<S> {
    pub fn new(config: GeneratorConfig, synthesizer: S) -> Self {
        Self {
            config,
            synthesizer,
        }
    }

    pub fn letter_items(&self) -> Vec<WorkItem> {
        catalog::letter_items(
            &self.config.alphabet,
            &self.config.pronunciation_table(),
            &self.config.letters_dir(),
        )
    }

    pub fn sound_items(&self) -> Result<Vec<WorkItem>> {
        catalog::sound_items(&self.config.sound_effects, &self.config.sounds_dir())
    }

    pub async fn create_directories(&self) -> Result<()> {
        for dir in [self.config.letters_dir(), self.config.sounds_dir()] {
            tokio::fs::create_dir_all(&dir).await.map_err(|e| {
                Error::configuration_with_context(
                    format!("Cannot create output directory: {}", e),
                    ErrorContext::new()
                        .with_details(dir.display().to_string())
                        .with_source("generator"),
                )
            })?;
        }
        Ok(())
    }

    /// Run the selected batches. Item failures only lower the counts in the
    /// returned report; errors here mean nothing was attempted.
    pub async fn run(&self, selection: Selection) -> Result<FinalReport> {
        let letters = if selection.includes_letters() {
            self.letter_items()
        } else {
            Vec::new()
        };
        let sounds = if selection.includes_sounds() {
            self.sound_items()?
        } else {
            Vec::new()
        };
        let all: Vec<WorkItem> = letters.iter().chain(sounds.iter()).cloned().collect();
        catalog::ensure_unique_outputs(&all)?;

        self.create_directories().await?;
        println!("✅ Directories ready");
        println!();

        let executor = BatchExecutor::with_config(
            BatchExecutorConfig::new()
                .with_delay(self.config.delay())
                .with_skip_existing(self.config.skip_existing),
        );
        let mut report = FinalReport::default();

        if selection.includes_letters() {
            println!("📝 Generating letter clips...");
            let result = executor.run_batch(&self.synthesizer, &letters).await;
            let counts = SectionCounts::from(&result);
            println!("{}", section_summary("Letters", &counts));
            println!();
            report.letters = Some(counts);
        }

        if selection.includes_sounds() {
            println!("🔊 Generating feedback sounds...");
            let result = executor.run_batch(&self.synthesizer, &sounds).await;
            let counts = SectionCounts::from(&result);
            println!("{}", section_summary("Sounds", &counts));
            println!();
            report.sounds = Some(counts);
        }

        Ok(report)
    }
}
