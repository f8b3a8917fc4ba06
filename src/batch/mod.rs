//! Sequential batch execution.
//!
//! # Batch Module
//!
//! Every clip is one [`WorkItem`](crate::catalog::WorkItem): the executor asks a
//! [`Synthesizer`](crate::tts::Synthesizer) for its audio, writes the bytes to the
//! item's output path and then pauses for the configured delay before moving on.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`BatchExecutor`] | Runs items strictly in order, one request at a time |
//! | [`BatchExecutorConfig`] | Throttle delay and skip-existing switch |
//! | [`BatchResult`] | Per-batch successes, skips and failures |
//! | [`BatchError`] | A single item that could not be fetched or written |
//!
//! Failures are isolated per item: they are printed, logged and counted, and
//! the batch continues with the next item.

mod executor;

pub use executor::{BatchError, BatchExecutor, BatchExecutorConfig, BatchResult, DEFAULT_DELAY};
