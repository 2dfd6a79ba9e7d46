//! Modality fusion — the producer-side risk mapping.
//!
//! This is the stage the prediction service applies before emitting a
//! payload: per-modality positivity tests and the combination table that
//! yields the overall risk plus the combined sentence the extractor
//! later reads back.

use serde::Serialize;

use triage_core::RiskLevel;

/// Outcome of fusing both modalities' findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FusionOutcome {
    pub overall: RiskLevel,
    /// Fixed summary sentence for the overall finding.
    pub combined: &'static str,
    /// Explicit risk for the face modality; `Unknown` when unobserved.
    pub face_risk: RiskLevel,
    /// Explicit risk for the X-ray modality; `Unknown` when unobserved.
    pub xray_risk: RiskLevel,
}

/// Labels the face classifier emits for a positive finding.
const POSITIVE_FACE_LABELS: &[&str] = &["unhealthy", "pcos", "positive", "pcos_positive"];

/// Whether a face classifier label counts as positive.
pub fn face_is_positive(label: Option<&str>) -> bool {
    let token = label.unwrap_or("").trim().to_lowercase();
    POSITIVE_FACE_LABELS.contains(&token.as_str())
}

/// Whether the X-ray detector output counts as positive.
///
/// A detection list, when present, is authoritative: positive iff
/// non-empty. Without one, fall back to the label text: it must mention
/// pcos without a negation prefix.
pub fn xray_is_positive(found_labels: Option<&[String]>, label: Option<&str>) -> bool {
    if let Some(found) = found_labels {
        return !found.is_empty();
    }
    let text = label.unwrap_or("").to_lowercase();
    text.contains("pcos") && !text.contains("no ") && !text.contains("non ")
}

/// Combination table: both positive → high, one → moderate, none → low.
pub fn combine(face_pos: bool, xray_pos: bool) -> (RiskLevel, &'static str) {
    if face_pos && xray_pos {
        (
            RiskLevel::High,
            "High risk: Both modalities indicate PCOS symptoms.",
        )
    } else if face_pos || xray_pos {
        (
            RiskLevel::Moderate,
            "Moderate risk: One modality suggests PCOS symptoms.",
        )
    } else {
        (
            RiskLevel::Low,
            "Low risk: No PCOS detected by either modality.",
        )
    }
}

/// Fuse raw modality outputs into the payload-side risk fields.
pub fn fuse(
    face_label: Option<&str>,
    xray_label: Option<&str>,
    found_labels: Option<&[String]>,
) -> FusionOutcome {
    let face_pos = face_is_positive(face_label);
    let xray_pos = xray_is_positive(found_labels, xray_label);
    let (overall, combined) = combine(face_pos, xray_pos);

    FusionOutcome {
        overall,
        combined,
        face_risk: observed_risk(face_label.is_some(), face_pos),
        xray_risk: observed_risk(xray_label.is_some(), xray_pos),
    }
}

fn observed_risk(observed: bool, positive: bool) -> RiskLevel {
    if !observed {
        RiskLevel::Unknown
    } else if positive {
        RiskLevel::High
    } else {
        RiskLevel::Low
    }
}
