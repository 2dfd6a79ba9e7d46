//! # triage-core
//!
//! Foundation crate for the Triage risk classification engine.
//! Defines the value types, errors, config, and tracing bootstrap.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::LexiconConfig;
pub use errors::{ClassifyError, TriageErrorCode};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::payload::PredictionPayload;
pub use types::risk::{Modality, ModalityStatus, ModalitySummary, RiskLevel};
