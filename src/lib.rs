//! # alfabeto-audio
//!
//! Generates the audio clips used by the Alfabeto Aprender game: one clip per
//! letter A–Z and four feedback phrases, all synthesized by the same pt-PT
//! text-to-speech endpoint so the voice stays uniform.
//!
//! ## Overview
//!
//! Each clip is a [`catalog::WorkItem`]. The [`batch::BatchExecutor`] walks the
//! items strictly in order: one GET to the speech service, one file write, then
//! a fixed pause before the next request. A failed item is printed and counted
//! but never stops the run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use alfabeto_audio::{AudioGenerator, GeneratorConfig, Selection};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> alfabeto_audio::Result<()> {
//!     let generator = AudioGenerator::from_config(GeneratorConfig::default())?;
//!     let report = generator.run(Selection::All).await?;
//!     print!("{report}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`pronunciation`] | Letter → spoken text table |
//! | [`catalog`] | Letter and feedback work lists, output paths |
//! | [`tts`] | Speech endpoint client and the [`tts::Synthesizer`] seam |
//! | [`batch`] | Sequential, throttled execution |
//! | [`config`] | Defaults, YAML file and environment overrides |
//! | [`report`] | Section and final summaries |
//! | [`generator`] | Directory setup and the full run |

pub mod batch;
pub mod catalog;
pub mod config;
pub mod generator;
pub mod pronunciation;
pub mod report;
pub mod tts;

pub use config::GeneratorConfig;
pub use generator::{AudioGenerator, Selection};
pub use report::FinalReport;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
