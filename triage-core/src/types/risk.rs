//! Core risk types shared across the workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorical risk assessment — the universal output type.
///
/// The four levels are categorical, not numeric; no ordering is defined
/// between them. `Unknown` is the conservative default for anything the
/// classifier cannot place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    #[default]
    Unknown,
}

impl RiskLevel {
    /// All 4 levels.
    pub fn all() -> &'static [RiskLevel] {
        &[Self::Low, Self::Moderate, Self::High, Self::Unknown]
    }

    /// Level name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Unknown => "unknown",
        }
    }

    /// Parse from string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "moderate" => Some(Self::Moderate),
            "high" => Some(Self::High),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Whether this level carries an actual assessment.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Fixed guidance paragraph for this level.
    pub fn explanation(&self) -> &'static str {
        match self {
            Self::Low => {
                "Low risk: neither modality shows indicators associated with PCOS. \
                 Keep up routine checkups and consult a clinician if symptoms appear."
            }
            Self::Moderate => {
                "Moderate risk: one modality suggests possible PCOS symptoms. \
                 A follow-up consultation with a gynecologist is recommended to \
                 confirm the finding."
            }
            Self::High => {
                "High risk: multiple indicators consistent with PCOS were detected. \
                 Please consult a gynecologist or endocrinologist for a full \
                 clinical evaluation."
            }
            Self::Unknown => {
                "The assessment was inconclusive. Additional testing is needed \
                 before a risk level can be assigned."
            }
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One imaging channel analyzed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Face,
    Xray,
}

impl Modality {
    /// Both modalities.
    pub fn all() -> &'static [Modality] {
        &[Self::Face, Self::Xray]
    }

    /// Modality name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Face => "face",
            Self::Xray => "xray",
        }
    }

    /// Parse from string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "face" => Some(Self::Face),
            "xray" => Some(Self::Xray),
            _ => None,
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a modality's finding can be waved through or needs a human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalityStatus {
    Normal,
    Review,
}

/// Derived per-modality verdict: a status plus its display string.
///
/// Always derivable from a prediction label and an optional explicit risk
/// override; never absent for an observed modality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalitySummary {
    pub status: ModalityStatus,
    pub text: String,
}

impl ModalitySummary {
    /// Clean finding.
    pub fn normal() -> Self {
        Self {
            status: ModalityStatus::Normal,
            text: "Normal".to_string(),
        }
    }

    /// Finding that needs a human in the loop.
    pub fn review_needed() -> Self {
        Self {
            status: ModalityStatus::Review,
            text: "Review Needed".to_string(),
        }
    }

    /// No model output for this modality.
    pub fn no_data() -> Self {
        Self {
            status: ModalityStatus::Review,
            text: "No data".to_string(),
        }
    }
}
