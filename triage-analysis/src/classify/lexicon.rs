//! Risk vocabulary and phrase matching.
//!
//! A combined finding sentence is classified by substring membership
//! against three fixed phrase sets, checked in priority order:
//! low → high → moderate, first match wins. The order is part of the
//! contract — changing it changes classification outcomes.

use aho_corasick::AhoCorasick;
use regex::{RegexSet, RegexSetBuilder};

use triage_core::{ClassifyError, FxHashSet, LexiconConfig, RiskLevel};

use super::matcher::word_pattern;

/// Phrases marking a combined sentence as low risk. Checked first.
const LOW_PHRASES: &[&str] = &["low risk", "no pcos", "non-pcos", "negative", "no symptoms"];

/// Phrases marking a combined sentence as high risk. Checked second.
const HIGH_PHRASES: &[&str] = &["high risk", "positive", "detected", "likely"];

/// Phrases marking a combined sentence as moderate risk. Checked last.
const MODERATE_PHRASES: &[&str] = &["moderate", "possible", "may suggest"];

/// Labels a modality model emits for a clean finding (exact match).
const NORMAL_LABELS: &[&str] = &["non_pcos", "non-pcos"];

/// Labels a modality model emits for a positive finding (exact match).
const POSITIVE_LABELS: &[&str] = &["unhealthy", "pcos", "positive", "pcos_positive"];

/// Words that mark a free-text modality sentence as normal (whole-word).
const NORMAL_WORDS: &[&str] = &[
    "normal",
    "healthy",
    "no symptoms",
    "negative",
    "non-pcos",
    "no pcos",
];

/// Compiled risk vocabulary.
///
/// Phrase sets are compiled once into case-insensitive Aho-Corasick
/// automata; the normal-word vocabulary into a single `RegexSet` of
/// word-boundary patterns. A matcher that failed to build degrades to
/// "never matches", which routes everything to the conservative
/// defaults.
pub struct RiskLexicon {
    low: Option<AhoCorasick>,
    high: Option<AhoCorasick>,
    moderate: Option<AhoCorasick>,
    normal_words: Option<RegexSet>,
    normal_labels: FxHashSet<String>,
    positive_labels: FxHashSet<String>,
}

impl RiskLexicon {
    /// Build the lexicon with the built-in vocabulary.
    pub fn new() -> Self {
        Self::with_config(&LexiconConfig::default()).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "built-in lexicon failed to build, phrase matching disabled");
            Self {
                low: None,
                high: None,
                moderate: None,
                normal_words: None,
                normal_labels: collect_labels(NORMAL_LABELS, &[]),
                positive_labels: collect_labels(POSITIVE_LABELS, &[]),
            }
        })
    }

    /// Build the lexicon with additive vocabulary extensions.
    pub fn with_config(config: &LexiconConfig) -> Result<Self, ClassifyError> {
        Ok(Self {
            low: Some(build_phrases(LOW_PHRASES, &config.extra_low_phrases)?),
            high: Some(build_phrases(HIGH_PHRASES, &config.extra_high_phrases)?),
            moderate: Some(build_phrases(
                MODERATE_PHRASES,
                &config.extra_moderate_phrases,
            )?),
            normal_words: Some(build_word_set(NORMAL_WORDS, &config.extra_normal_words)?),
            normal_labels: collect_labels(NORMAL_LABELS, &config.extra_normal_labels),
            positive_labels: collect_labels(POSITIVE_LABELS, &config.extra_positive_labels),
        })
    }

    /// Classify a combined finding sentence into a risk level.
    ///
    /// Priority order is low → high → moderate; a sentence matching more
    /// than one set returns the earliest-checked category. No match, an
    /// empty sentence, or no sentence at all yields `Unknown`. Never
    /// fails.
    pub fn risk_from_combined(&self, sentence: Option<&str>) -> RiskLevel {
        let Some(sentence) = sentence else {
            return RiskLevel::Unknown;
        };
        let text = sentence.trim().to_lowercase();
        if text.is_empty() {
            return RiskLevel::Unknown;
        }
        if hit(&self.low, &text) {
            return RiskLevel::Low;
        }
        if hit(&self.high, &text) {
            return RiskLevel::High;
        }
        if hit(&self.moderate, &text) {
            return RiskLevel::Moderate;
        }
        RiskLevel::Unknown
    }

    /// Exact match against the clean-finding label set.
    /// `token` must already be trimmed and lowercased.
    pub(crate) fn is_normal_label(&self, token: &str) -> bool {
        self.normal_labels.contains(token)
    }

    /// Exact match against the positive-finding label set.
    /// `token` must already be trimmed and lowercased.
    pub(crate) fn is_positive_label(&self, token: &str) -> bool {
        self.positive_labels.contains(token)
    }

    /// Whole-word scan of a free-text sentence for normal vocabulary.
    pub(crate) fn has_normal_word(&self, text: &str) -> bool {
        self.normal_words
            .as_ref()
            .is_some_and(|set| set.is_match(text))
    }
}

impl Default for RiskLexicon {
    fn default() -> Self {
        Self::new()
    }
}

fn hit(automaton: &Option<AhoCorasick>, text: &str) -> bool {
    automaton.as_ref().is_some_and(|ac| ac.is_match(text))
}

fn build_phrases(builtin: &[&str], extra: &[String]) -> Result<AhoCorasick, ClassifyError> {
    let patterns: Vec<&str> = builtin
        .iter()
        .copied()
        .chain(extra.iter().map(String::as_str))
        .collect();
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(&patterns)
        .map_err(|e| ClassifyError::LexiconBuild {
            message: e.to_string(),
        })
}

fn build_word_set(builtin: &[&str], extra: &[String]) -> Result<RegexSet, ClassifyError> {
    let patterns: Vec<String> = builtin
        .iter()
        .copied()
        .chain(extra.iter().map(String::as_str))
        .map(word_pattern)
        .collect();
    RegexSetBuilder::new(&patterns)
        .case_insensitive(true)
        .build()
        .map_err(|e| ClassifyError::LexiconBuild {
            message: e.to_string(),
        })
}

fn collect_labels(builtin: &[&str], extra: &[String]) -> FxHashSet<String> {
    builtin
        .iter()
        .map(|s| s.to_string())
        .chain(extra.iter().map(|s| s.trim().to_lowercase()))
        .collect()
}
