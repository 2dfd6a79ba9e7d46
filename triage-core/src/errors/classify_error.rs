//! Classification boundary errors.
//!
//! Indeterminate *input* is never an error — unrecognized vocabulary and
//! missing fields fold into the conservative defaults (`Unknown`, review).
//! Errors exist only at the boundary: malformed payloads and invalid
//! lexicon extensions.

use super::error_code::TriageErrorCode;

/// Errors that can occur while building a classifier or decoding a payload.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("Malformed prediction payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Lexicon build failed: {message}")]
    LexiconBuild { message: String },
}

impl TriageErrorCode for ClassifyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Payload(_) => "CLASSIFY_PAYLOAD_MALFORMED",
            Self::LexiconBuild { .. } => "CLASSIFY_LEXICON_BUILD",
        }
    }
}
