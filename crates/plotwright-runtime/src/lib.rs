//! Async execution layer for the plotwright engine.
//!
//! This crate owns everything that touches the network or the environment:
//! provider adapters for the Gemini and chat-completions APIs, environment
//! configuration, retry policy, response validation, and the [`StoryEngine`]
//! orchestrator that chains providers over the deterministic synthesizer in
//! `plotwright-core`.
//!
//! ```no_run
//! use plotwright_core::AnalysisRequest;
//! use plotwright_runtime::{EngineConfig, StoryEngine};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = StoryEngine::from_config(EngineConfig::from_env()?)?;
//! let analysis = engine
//!     .analyze(&AnalysisRequest::from_text("The dragon circled the castle."))
//!     .await;
//! assert_eq!(analysis.directions.len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod orchestrator;
pub mod prompts;
pub mod providers;
pub mod resilience;
pub mod validator;

pub use config::{ConfigError, EngineConfig, GeminiConfig, HttpConfig, OpenAiConfig};
pub use orchestrator::StoryEngine;
pub use providers::{GeminiProvider, OpenAiProvider, ProviderError, StoryProvider};
pub use validator::parse_analysis;
