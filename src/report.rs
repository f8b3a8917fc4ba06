//! Human-readable summaries printed at the end of each batch and of the run.

use crate::batch::BatchResult;

/// Outcome counts for one section (letters or sounds).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionCounts {
    pub succeeded: usize,
    pub total: usize,
    pub failed: Vec<String>,
}

impl SectionCounts {
    pub fn is_complete(&self) -> bool {
        self.succeeded == self.total
    }
}

impl From<&BatchResult> for SectionCounts {
    fn from(result: &BatchResult) -> Self {
        Self {
            succeeded: result.success_count(),
            total: result.total(),
            failed: result.failed_ids().into_iter().map(str::to_string).collect(),
        }
    }
}

/// `📊 Letters generated: 25/26`
pub fn section_summary(label: &str, counts: &SectionCounts) -> String {
    format!("📊 {} generated: {}/{}", label, counts.succeeded, counts.total)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinalReport {
    pub letters: Option<SectionCounts>,
    pub sounds: Option<SectionCounts>,
}

impl FinalReport {
    fn sections(&self) -> impl Iterator<Item = &SectionCounts> {
        self.letters.iter().chain(self.sounds.iter())
    }

    pub fn succeeded(&self) -> usize {
        self.sections().map(|s| s.succeeded).sum()
    }

    pub fn expected(&self) -> usize {
        self.sections().map(|s| s.total).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.succeeded() == self.expected()
    }
}

impl std::fmt::Display for FinalReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "🎯 FINAL REPORT")?;
        writeln!(
            f,
            "📁 Total files generated: {}/{}",
            self.succeeded(),
            self.expected()
        )?;
        if let Some(letters) = &self.letters {
            writeln!(f, "📝 Letters: {}/{}", letters.succeeded, letters.total)?;
        }
        if let Some(sounds) = &self.sounds {
            writeln!(f, "🔊 Sounds: {}/{}", sounds.succeeded, sounds.total)?;
        }
        writeln!(f)?;

        if self.is_complete() {
            writeln!(f, "✅ SUCCESS! All files were generated.")?;
            writeln!(f, "🎵 Every clip uses the same pt-PT voice.")?;
        } else {
            let missing: Vec<&str> = self
                .sections()
                .flat_map(|s| s.failed.iter().map(String::as_str))
                .collect();
            writeln!(
                f,
                "⚠️  WARNING! Some files were not generated: {}",
                missing.join(", ")
            )?;
            writeln!(f, "🔄 Run the tool again to retry the missing files.")?;
        }

        writeln!(f)?;
        writeln!(f, "📋 Next steps:")?;
        writeln!(f, "1. Check that every file is in the 'audio' folder")?;
        writeln!(f, "2. Play a few MP3 files manually")?;
        writeln!(f, "3. Point the game at these files")
    }
}
