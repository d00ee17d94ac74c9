use crate::inspection::domain::RiskLevel;

/// Amber
const LOW_RISK_COLOR: &str = "EAB308";
/// Orange
const MEDIUM_RISK_COLOR: &str = "F97316";
/// Red
const HIGH_RISK_COLOR: &str = "EF4444";

/// Display policy for risk levels in reports
pub struct RiskPalette;

impl RiskPalette {
    /// Hex RGB (no `#`) used for the risk cell text
    pub fn color(risk: RiskLevel) -> &'static str {
        match risk {
            RiskLevel::Low => LOW_RISK_COLOR,
            RiskLevel::Medium => MEDIUM_RISK_COLOR,
            RiskLevel::High => HIGH_RISK_COLOR,
        }
    }

    /// Upper-case label shown in the risk cell
    pub fn label(risk: RiskLevel) -> String {
        risk.label().to_uppercase()
    }
}
