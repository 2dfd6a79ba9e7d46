//! Report assembly — the end-to-end classification stage.
//!
//! Chains the normalizer, the lexicon, and the modality summarizer over a
//! raw payload. The governing policy at every tier is the same two-step
//! fallback: an explicit structured risk field wins over free-text
//! inference.

use serde::Serialize;
use smallvec::SmallVec;

use triage_core::{
    ClassifyError, LexiconConfig, Modality, ModalitySummary, PredictionPayload, RiskLevel,
};

use crate::classify::lexicon::RiskLexicon;
use crate::classify::modality::summarize_single;
use crate::classify::normalizer::normalize_risk;

/// Assessment of a single imaging modality.
#[derive(Debug, Clone, Serialize)]
pub struct ModalityReport {
    pub modality: Modality,
    pub risk: RiskLevel,
    pub summary: ModalitySummary,
    /// Model probabilities, passed through unmodified.
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub scores: SmallVec<[f32; 2]>,
    /// Web path of the submitted image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Web path of the detector's visualization overlay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<String>,
}

/// The assembled risk report.
///
/// A modality appears iff the payload carried that modality's prediction
/// label; an absent modality is omitted, not rendered as an error.
#[derive(Debug, Clone, Serialize)]
pub struct RiskReport {
    pub overall: RiskLevel,
    pub explanation: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face: Option<ModalityReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xray: Option<ModalityReport>,
}

/// Classifier facade: owns the compiled lexicon and turns payloads into
/// reports. Classification is pure — identical payload, identical report.
pub struct RiskClassifier {
    lexicon: RiskLexicon,
}

impl RiskClassifier {
    /// Create a classifier with the built-in vocabulary.
    pub fn new() -> Self {
        Self {
            lexicon: RiskLexicon::new(),
        }
    }

    /// Create a classifier with vocabulary extensions.
    pub fn with_config(config: &LexiconConfig) -> Result<Self, ClassifyError> {
        Ok(Self {
            lexicon: RiskLexicon::with_config(config)?,
        })
    }

    /// Assemble a report from a raw payload.
    pub fn classify(&self, payload: &PredictionPayload) -> RiskReport {
        let overall = self.resolve(
            payload.overall_risk.as_deref(),
            payload.combined.as_deref(),
        );

        let face = observed(payload.face_pred.as_deref()).map(|label| ModalityReport {
            modality: Modality::Face,
            risk: self.resolve(payload.face_risk.as_deref(), Some(label)),
            summary: self.summarize(Some(label), payload.face_risk.as_deref()),
            scores: payload.face_scores.clone(),
            image: payload.face_img.clone(),
            overlay: None,
        });

        let xray = observed(payload.xray_pred.as_deref()).map(|label| ModalityReport {
            modality: Modality::Xray,
            risk: self.resolve(payload.xray_risk.as_deref(), Some(label)),
            summary: self.summarize(Some(label), payload.xray_risk.as_deref()),
            scores: SmallVec::new(),
            image: payload.xray_img.clone(),
            overlay: payload.yolo_vis.clone(),
        });

        tracing::debug!(
            overall = %overall,
            face = face.is_some(),
            xray = xray.is_some(),
            "risk report assembled"
        );

        RiskReport {
            overall,
            explanation: overall.explanation(),
            face,
            xray,
        }
    }

    /// Summarize one modality with the classifier's lexicon.
    pub fn summarize(
        &self,
        label: Option<&str>,
        explicit_risk: Option<&str>,
    ) -> ModalitySummary {
        summarize_single(&self.lexicon, label, explicit_risk)
    }

    /// Two-tier resolution: explicit structured field first, free-text
    /// inference second.
    fn resolve(&self, explicit: Option<&str>, text: Option<&str>) -> RiskLevel {
        match normalize_risk(explicit) {
            RiskLevel::Unknown => self.lexicon.risk_from_combined(text),
            level => level,
        }
    }
}

impl Default for RiskClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// A modality counts as observed only when its label has content.
fn observed(label: Option<&str>) -> Option<&str> {
    label.filter(|l| !l.trim().is_empty())
}
