//! # triage-analysis
//!
//! Classification engine for the Triage screening tool.
//! Turns raw prediction payloads into deterministic risk reports:
//! normalizer, lexicon matchers, per-modality summaries, report
//! assembly, and the producer-side modality fusion.

pub mod classify;
pub mod fusion;
pub mod report;

pub use classify::lexicon::RiskLexicon;
pub use report::{ModalityReport, RiskClassifier, RiskReport};
