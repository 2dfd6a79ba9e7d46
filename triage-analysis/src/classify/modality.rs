//! Single-modality summaries.

use triage_core::{ModalitySummary, RiskLevel};

use super::lexicon::RiskLexicon;
use super::normalizer::normalize_risk;

/// Summarize one modality's model output.
///
/// Decision order, first hit wins:
/// 1. explicit risk override (`low` → Normal, anything else → Review),
/// 2. no label → "No data",
/// 3. exact label match against the normal / positive sets,
/// 4. whole-word scan of the normal vocabulary,
/// 5. Review.
///
/// The final default is a deliberate fail-safe: unrecognized output is
/// always routed to human review, never silently treated as normal.
pub fn summarize_single(
    lexicon: &RiskLexicon,
    label: Option<&str>,
    explicit_risk: Option<&str>,
) -> ModalitySummary {
    let explicit = normalize_risk(explicit_risk);
    if explicit.is_known() {
        return if explicit == RiskLevel::Low {
            ModalitySummary::normal()
        } else {
            ModalitySummary::review_needed()
        };
    }

    let token = match label {
        Some(l) if !l.trim().is_empty() => l.trim().to_lowercase(),
        _ => return ModalitySummary::no_data(),
    };

    if lexicon.is_normal_label(&token) {
        return ModalitySummary::normal();
    }
    if lexicon.is_positive_label(&token) {
        return ModalitySummary::review_needed();
    }
    if lexicon.has_normal_word(&token) {
        return ModalitySummary::normal();
    }

    tracing::warn!(label = %token, "unrecognized modality label, routing to review");
    ModalitySummary::review_needed()
}
