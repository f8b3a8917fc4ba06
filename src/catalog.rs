//! Work lists: which clips to generate and where each one lands.

use crate::pronunciation::PronunciationOverride;
use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Directory for letter clips, relative to the output root.
pub const LETTERS_DIR: &str = "audio/letters";
/// Directory for feedback clips, relative to the output root.
pub const SOUNDS_DIR: &str = "audio/sounds";

/// A fixed feedback utterance and the file it is saved as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundEffectSpec {
    pub phrase: String,
    pub filename: String,
}

impl SoundEffectSpec {
    pub fn new(phrase: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            filename: filename.into(),
        }
    }
}

/// The four feedback clips the game plays.
pub fn default_sound_effects() -> Vec<SoundEffectSpec> {
    vec![
        SoundEffectSpec::new("Muito bem", "success.mp3"),
        SoundEffectSpec::new("Tenta outra vez", "error.mp3"),
        SoundEffectSpec::new("Parabéns, completaste o alfabeto", "victory.mp3"),
        SoundEffectSpec::new("Encontra a letra", "find_letter.mp3"),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Letter,
    Sound,
}

/// One unit of work: text to synthesize and the file to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    /// Letter (`"A"`) or sound filename (`"success.mp3"`); used in logs.
    pub id: String,
    pub text: String,
    pub output: PathBuf,
    pub kind: ItemKind,
}

impl WorkItem {
    pub fn letter(letter: char, table: &PronunciationOverride, letters_dir: &Path) -> Self {
        let letter = letter.to_ascii_uppercase();
        Self {
            id: letter.to_string(),
            text: table.spoken_form(letter),
            output: letters_dir.join(format!("{letter}.mp3")),
            kind: ItemKind::Letter,
        }
    }

    pub fn sound(spec: &SoundEffectSpec, sounds_dir: &Path) -> Self {
        Self {
            id: spec.filename.clone(),
            text: spec.phrase.clone(),
            output: sounds_dir.join(&spec.filename),
            kind: ItemKind::Sound,
        }
    }

    /// Console line printed once the clip is on disk.
    pub fn success_line(&self) -> String {
        let label = match self.kind {
            ItemKind::Letter => "Letter",
            ItemKind::Sound => "Sound",
        };
        format!(
            "✅ {} {} → {} → {}",
            label,
            self.id,
            self.text,
            self.output.display()
        )
    }
}

/// Letter items for every symbol of `alphabet`, in order.
pub fn letter_items(
    alphabet: &str,
    table: &PronunciationOverride,
    letters_dir: &Path,
) -> Vec<WorkItem> {
    alphabet
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| WorkItem::letter(c, table, letters_dir))
        .collect()
}

/// Sound items, rejecting specs that could not produce a valid file.
pub fn sound_items(specs: &[SoundEffectSpec], sounds_dir: &Path) -> Result<Vec<WorkItem>> {
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            validate_sound_spec(spec, i)?;
            Ok(WorkItem::sound(spec, sounds_dir))
        })
        .collect()
}

fn validate_sound_spec(spec: &SoundEffectSpec, index: usize) -> Result<()> {
    let field = format!("sound_effects[{index}]");
    if spec.phrase.trim().is_empty() {
        return Err(Error::validation_with_context(
            "sound phrase must not be empty",
            ErrorContext::new()
                .with_field_path(format!("{field}.phrase"))
                .with_source("catalog"),
        ));
    }
    let name = spec.filename.trim();
    if name.is_empty() || name.contains('/') || name.contains('\\') || name == ".." {
        return Err(Error::validation_with_context(
            "sound filename must be a plain file name",
            ErrorContext::new()
                .with_field_path(format!("{field}.filename"))
                .with_details(spec.filename.clone())
                .with_source("catalog"),
        ));
    }
    Ok(())
}

/// Output paths must be unique so no clip silently replaces another.
pub fn ensure_unique_outputs(items: &[WorkItem]) -> Result<()> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.output.as_path()) {
            return Err(Error::validation_with_context(
                "duplicate output file",
                ErrorContext::new()
                    .with_field_path(item.id.clone())
                    .with_details(item.output.display().to_string())
                    .with_source("catalog"),
            ));
        }
    }
    Ok(())
}
