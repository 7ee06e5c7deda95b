//! # plotwright-core
//!
//! Deterministic story-direction synthesis engine.
//!
//! This crate is the terminal fallback of the Plotwright pipeline: when no
//! generative provider is configured or all of them fail, analysis falls
//! through to the keyword-driven template synthesizer defined here.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: same input always produces the same output
//! 2. **No I/O**: classification and synthesis never touch the network
//! 3. **Infallible**: [`TemplateSynthesizer::synthesize`] cannot fail and
//!    always returns exactly three directions
//!
//! ## Example
//!
//! ```rust
//! use plotwright_core::{AnalysisRequest, TemplateSynthesizer};
//!
//! let request = AnalysisRequest::from_text("Dragon-rider Kara faces the ancient curse");
//! let result = TemplateSynthesizer::new().synthesize(&request);
//!
//! assert_eq!(result.genre, "Fantasy");
//! assert_eq!(result.directions.len(), 3);
//! ```

pub mod classifier;
pub mod entities;
pub mod keywords;
pub mod synthesizer;
pub mod templates;
pub mod types;

// Re-export main types at crate root
pub use keywords::{DEFAULT_GENRE, DEFAULT_TONE};
pub use synthesizer::TemplateSynthesizer;
pub use types::{
    AnalysisRequest, AnalysisResult, Direction, ExpansionRequest, ExpansionResult, Source,
    DIRECTION_COUNT, MAX_KEY_ENTITIES, MISSING_FIELD_PLACEHOLDER,
};
