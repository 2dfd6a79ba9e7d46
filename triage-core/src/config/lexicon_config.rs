//! Lexicon configuration.

use serde::{Deserialize, Serialize};

/// Additive vocabulary extensions for the risk lexicon.
///
/// Deployments can widen the hand-maintained phrase lists without forking.
/// Extensions only ever add matches: the built-in vocabulary and the
/// low → high → moderate priority order are fixed.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LexiconConfig {
    /// Extra substrings that classify a combined sentence as low risk.
    pub extra_low_phrases: Vec<String>,
    /// Extra substrings that classify a combined sentence as high risk.
    pub extra_high_phrases: Vec<String>,
    /// Extra substrings that classify a combined sentence as moderate risk.
    pub extra_moderate_phrases: Vec<String>,
    /// Extra whole-word matches marking a modality sentence as normal.
    pub extra_normal_words: Vec<String>,
    /// Extra exact-match labels treated as a clean finding.
    pub extra_normal_labels: Vec<String>,
    /// Extra exact-match labels treated as a positive finding.
    pub extra_positive_labels: Vec<String>,
}

impl LexiconConfig {
    /// True when no extensions are configured.
    pub fn is_default(&self) -> bool {
        self.extra_low_phrases.is_empty()
            && self.extra_high_phrases.is_empty()
            && self.extra_moderate_phrases.is_empty()
            && self.extra_normal_words.is_empty()
            && self.extra_normal_labels.is_empty()
            && self.extra_positive_labels.is_empty()
    }
}
