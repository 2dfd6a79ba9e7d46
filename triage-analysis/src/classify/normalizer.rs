//! Risk-string normalization.

use triage_core::RiskLevel;

/// Normalize a raw risk string from the service.
///
/// Trims and lowercases; only the exact values `low`, `moderate`, and
/// `high` survive. Everything else — empty, missing, or unrecognized —
/// is `Unknown`. Total function, and idempotent through
/// [`RiskLevel::name`].
pub fn normalize_risk(raw: Option<&str>) -> RiskLevel {
    let Some(raw) = raw else {
        return RiskLevel::Unknown;
    };
    match raw.trim().to_lowercase().as_str() {
        "low" => RiskLevel::Low,
        "moderate" => RiskLevel::Moderate,
        "high" => RiskLevel::High,
        _ => RiskLevel::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_levels_survive() {
        assert_eq!(normalize_risk(Some("low")), RiskLevel::Low);
        assert_eq!(normalize_risk(Some("moderate")), RiskLevel::Moderate);
        assert_eq!(normalize_risk(Some("high")), RiskLevel::High);
    }

    #[test]
    fn case_and_whitespace_insensitive() {
        assert_eq!(normalize_risk(Some("  HIGH ")), RiskLevel::High);
        assert_eq!(normalize_risk(Some("Low\n")), RiskLevel::Low);
    }

    #[test]
    fn everything_else_is_unknown() {
        assert_eq!(normalize_risk(None), RiskLevel::Unknown);
        assert_eq!(normalize_risk(Some("")), RiskLevel::Unknown);
        assert_eq!(normalize_risk(Some("critical")), RiskLevel::Unknown);
        assert_eq!(normalize_risk(Some("unknown")), RiskLevel::Unknown);
    }

    #[test]
    fn idempotent_through_name() {
        for input in ["low", " Moderate ", "HIGH", "garbage", ""] {
            let once = normalize_risk(Some(input));
            assert_eq!(normalize_risk(Some(once.name())), once);
        }
    }
}
