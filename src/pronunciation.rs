//! Letter pronunciation table.
//!
//! Vowels are sent to the speech service in their accented form (`A` → `á`).
//! Consonants are spoken as their own symbol.

use std::collections::BTreeMap;

/// The 26 letters the game teaches, in order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Maps letters to an alternate spoken form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronunciationOverride {
    overrides: BTreeMap<char, String>,
}

impl PronunciationOverride {
    /// Empty table: every letter is spoken as itself.
    pub fn new() -> Self {
        Self {
            overrides: BTreeMap::new(),
        }
    }

    /// Accented vowel sounds used for pt-PT.
    pub fn portuguese_vowels() -> Self {
        Self::new()
            .with_override('A', "á")
            .with_override('E', "é")
            .with_override('I', "í")
            .with_override('O', "ó")
            .with_override('U', "ú")
    }

    /// Build from a config map. Keys are matched case-insensitively on their first char.
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        map.iter()
            .filter_map(|(k, v)| k.chars().next().map(|c| (c, v)))
            .fold(Self::new(), |table, (c, v)| table.with_override(c, v.clone()))
    }

    pub fn with_override(mut self, letter: char, spoken: impl Into<String>) -> Self {
        self.overrides
            .insert(letter.to_ascii_uppercase(), spoken.into());
        self
    }

    /// Text to send to the speech service for `letter`.
    pub fn spoken_form(&self, letter: char) -> String {
        let letter = letter.to_ascii_uppercase();
        match self.overrides.get(&letter) {
            Some(spoken) => spoken.clone(),
            None => letter.to_string(),
        }
    }
}

impl Default for PronunciationOverride {
    fn default() -> Self {
        Self::portuguese_vowels()
    }
}
