//! Batch executor.

use crate::catalog::WorkItem;
use crate::tts::Synthesizer;
use crate::Result;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Pause after each item unless configured otherwise.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct BatchResult {
    pub successes: Vec<String>,
    pub skipped: Vec<String>,
    pub failures: Vec<BatchError>,
    pub execution_time: Duration,
    pub total_processed: usize,
}

impl BatchResult {
    pub fn new() -> Self {
        Self {
            successes: Vec::new(),
            skipped: Vec::new(),
            failures: Vec::new(),
            execution_time: Duration::ZERO,
            total_processed: 0,
        }
    }
    pub fn add_success(&mut self, id: impl Into<String>) {
        self.successes.push(id.into());
    }
    pub fn add_skipped(&mut self, id: impl Into<String>) {
        self.skipped.push(id.into());
    }
    pub fn add_failure(&mut self, e: BatchError) {
        self.failures.push(e);
    }
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
    /// Generated plus skipped-because-present.
    pub fn success_count(&self) -> usize {
        self.successes.len() + self.skipped.len()
    }
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
    pub fn total(&self) -> usize {
        self.total_processed
    }
    pub fn failed_ids(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.item.as_str()).collect()
    }
}

impl Default for BatchResult {
    fn default() -> Self {
        Self::new()
    }
}

/// One item that could not be fetched or written.
#[derive(Debug, Clone)]
pub struct BatchError {
    pub message: String,
    pub index: usize,
    pub item: String,
}

impl BatchError {
    pub fn new(msg: impl Into<String>, idx: usize, item: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            index: idx,
            item: item.into(),
        }
    }
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to generate {}: {}", self.item, self.message)
    }
}

impl std::error::Error for BatchError {}

#[derive(Debug, Clone)]
pub struct BatchExecutorConfig {
    /// Sleep after every processed item, the last one included.
    pub delay: Duration,
    /// Leave non-empty existing files alone instead of regenerating them.
    pub skip_existing: bool,
}

impl Default for BatchExecutorConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            skip_existing: false,
        }
    }
}

impl BatchExecutorConfig {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_delay(mut self, d: Duration) -> Self {
        self.delay = d;
        self
    }
    pub fn with_skip_existing(mut self, s: bool) -> Self {
        self.skip_existing = s;
        self
    }
}

/// Runs work items one after another: synthesize, write, sleep.
pub struct BatchExecutor {
    config: BatchExecutorConfig,
}

impl BatchExecutor {
    pub fn new() -> Self {
        Self {
            config: BatchExecutorConfig::default(),
        }
    }
    pub fn with_config(config: BatchExecutorConfig) -> Self {
        Self { config }
    }

    /// Process `items` in order. Per-item failures are printed, logged and
    /// counted; they never stop the batch.
    pub async fn run_batch<S>(&self, synthesizer: &S, items: &[WorkItem]) -> BatchResult
    where
        S: Synthesizer + ?Sized,
    {
        let start = Instant::now();
        let mut result = BatchResult::new();
        tracing::info!(items = items.len(), "batch started");

        for (i, item) in items.iter().enumerate() {
            if self.config.skip_existing && already_present(&item.output).await {
                println!("⏭️  {} already exists → {}", item.id, item.output.display());
                tracing::debug!(item = %item.id, "skipped existing file");
                result.add_skipped(item.id.clone());
                continue;
            }

            match process_item(synthesizer, item).await {
                Ok(written) => {
                    println!("{}", item.success_line());
                    tracing::debug!(item = %item.id, bytes = written, "clip written");
                    result.add_success(item.id.clone());
                }
                Err(e) => {
                    let failure = BatchError::new(e.to_string(), i, item.id.clone());
                    println!("❌ {}", failure);
                    tracing::warn!(item = %item.id, error = %e, "item failed");
                    result.add_failure(failure);
                }
            }

            if !self.config.delay.is_zero() {
                tokio::time::sleep(self.config.delay).await;
            }
        }

        result.execution_time = start.elapsed();
        result.total_processed = items.len();
        tracing::info!(
            succeeded = result.success_count(),
            failed = result.failure_count(),
            "batch finished"
        );
        result
    }
}

impl Default for BatchExecutor {
    fn default() -> Self {
        Self::new()
    }
}

async fn process_item<S>(synthesizer: &S, item: &WorkItem) -> Result<usize>
where
    S: Synthesizer + ?Sized,
{
    let audio = synthesizer.synthesize(&item.text).await?;
    write_atomically(&item.output, &audio.data).await?;
    Ok(audio.len())
}

/// Sibling file the clip is staged in before it replaces `output`.
fn staging_path(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_os_string();
    name.push(".part");
    PathBuf::from(name)
}

/// Only a fully written clip ever appears at `output`.
async fn write_atomically(output: &Path, data: &[u8]) -> Result<()> {
    let staging = staging_path(output);
    let written = match tokio::fs::write(&staging, data).await {
        Ok(()) => tokio::fs::rename(&staging, output).await,
        Err(e) => Err(e),
    };
    if let Err(e) = written {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(e.into());
    }
    Ok(())
}

async fn already_present(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file() && m.len() > 0)
        .unwrap_or(false)
}
