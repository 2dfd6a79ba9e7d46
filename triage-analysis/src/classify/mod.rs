//! Pure classification primitives.

pub mod lexicon;
pub mod matcher;
pub mod modality;
pub mod normalizer;

pub use lexicon::RiskLexicon;
pub use matcher::has_word;
pub use modality::summarize_single;
pub use normalizer::normalize_risk;
