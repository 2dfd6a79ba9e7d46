//! Prediction payload — the wire shape the screening service responds with.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::errors::ClassifyError;

/// Raw response of the prediction service, treated as an untrusted,
/// partially-populated record.
///
/// Every field may be absent; absence means "no data for that modality" and
/// is a valid, expected state, not an error. Confidence scores and image
/// references are carried through unmodified. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionPayload {
    /// Service success flag.
    pub ok: Option<bool>,
    /// Service error text, if any.
    pub message: Option<String>,
    /// Free-text label or sentence from the face classifier.
    pub face_pred: Option<String>,
    /// Face classifier probabilities, in training output order.
    pub face_scores: SmallVec<[f32; 2]>,
    /// Web path of the stored face image.
    pub face_img: Option<String>,
    /// Free-text label or sentence from the X-ray detector.
    pub xray_pred: Option<String>,
    /// Web path of the detector's visualization overlay.
    pub yolo_vis: Option<String>,
    /// Class names the X-ray detector found.
    pub found_labels: Option<Vec<String>>,
    /// Web path of the stored X-ray image.
    pub xray_img: Option<String>,
    /// Explicit per-modality risk strings.
    pub face_risk: Option<String>,
    pub xray_risk: Option<String>,
    /// Explicit overall risk string.
    pub overall_risk: Option<String>,
    /// Free-text sentence summarizing the overall finding.
    pub combined: Option<String>,
}

impl PredictionPayload {
    /// Deserialize a payload from a service response body.
    pub fn from_json(json: &str) -> Result<Self, ClassifyError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_object_fills_defaults() {
        let payload = PredictionPayload::from_json(r#"{"face_pred": "non_pcos"}"#).unwrap();
        assert_eq!(payload.face_pred.as_deref(), Some("non_pcos"));
        assert!(payload.xray_pred.is_none());
        assert!(payload.face_scores.is_empty());
        assert!(payload.overall_risk.is_none());
    }

    #[test]
    fn unknown_fields_ignored() {
        let payload =
            PredictionPayload::from_json(r#"{"combined": "Low risk", "extra": [1, 2]}"#).unwrap();
        assert_eq!(payload.combined.as_deref(), Some("Low risk"));
    }

    #[test]
    fn malformed_json_is_a_payload_error() {
        let err = PredictionPayload::from_json("not json").unwrap_err();
        assert!(matches!(err, ClassifyError::Payload(_)));
    }

    #[test]
    fn scores_pass_through() {
        let payload =
            PredictionPayload::from_json(r#"{"face_scores": [0.91, 0.09]}"#).unwrap();
        assert_eq!(payload.face_scores.as_slice(), &[0.91, 0.09]);
    }
}
