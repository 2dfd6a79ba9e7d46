//! Property-based tests — invariants that must hold for ANY input, not
//! just hand-crafted cases.

use proptest::prelude::*;

use triage_analysis::classify::{has_word, normalize_risk, summarize_single, RiskLexicon};
use triage_analysis::fusion::combine;
use triage_analysis::report::RiskClassifier;
use triage_core::{ModalityStatus, PredictionPayload, RiskLevel};

proptest! {
    /// Normalization is idempotent for arbitrary strings.
    #[test]
    fn normalize_is_idempotent(input in ".{0,64}") {
        let once = normalize_risk(Some(&input));
        prop_assert_eq!(normalize_risk(Some(once.name())), once);
    }

    /// Anything outside the three known levels is Unknown, regardless of
    /// case or surrounding whitespace.
    #[test]
    fn unrecognized_strings_normalize_to_unknown(input in "[a-z]{1,16}") {
        prop_assume!(!matches!(input.as_str(), "low" | "moderate" | "high"));
        prop_assert_eq!(normalize_risk(Some(&input)), RiskLevel::Unknown);
    }

    /// The extractor is total: any sentence yields one of the four levels
    /// and never panics.
    #[test]
    fn extractor_is_total(sentence in ".{0,200}") {
        let lexicon = RiskLexicon::new();
        let level = lexicon.risk_from_combined(Some(&sentence));
        prop_assert!(RiskLevel::all().contains(&level));
    }

    /// The summarizer is total and fail-safe: every input path produces a
    /// summary, and an unrecognized label never lands on Normal unless the
    /// normal vocabulary actually matched.
    #[test]
    fn summarizer_is_total(label in ".{0,80}") {
        let lexicon = RiskLexicon::new();
        let summary = summarize_single(&lexicon, Some(&label), None);
        prop_assert!(!summary.text.is_empty());
    }

    /// An explicit low override wins over any label content.
    #[test]
    fn explicit_low_always_reads_normal(label in ".{0,80}") {
        let lexicon = RiskLexicon::new();
        let summary = summarize_single(&lexicon, Some(&label), Some("low"));
        prop_assert_eq!(summary.status, ModalityStatus::Normal);
    }

    /// A word never matches strictly inside a larger alphanumeric token.
    #[test]
    fn word_match_respects_boundaries(word in "[a-z]{3,10}", prefix in "[a-z]{1,4}") {
        let with_space = format!("{} aside", word);
        let concatenated = format!("{}{}", prefix, word);
        prop_assert!(has_word(&with_space, &word));
        prop_assert!(!has_word(&concatenated, &word));
    }

    /// Every fused sentence classifies back to the fused overall level.
    #[test]
    fn fusion_round_trips(face_pos in any::<bool>(), xray_pos in any::<bool>()) {
        let (overall, combined) = combine(face_pos, xray_pos);
        let payload = PredictionPayload {
            combined: Some(combined.to_string()),
            ..Default::default()
        };
        let report = RiskClassifier::new().classify(&payload);
        prop_assert_eq!(report.overall, overall);
    }
}
