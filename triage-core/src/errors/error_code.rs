//! Stable error codes for programmatic consumers.

/// Maps every error variant to a stable, machine-readable code string.
/// Codes are part of the public contract and must not change between
/// releases.
pub trait TriageErrorCode {
    fn error_code(&self) -> &'static str;
}
