//! Dashboard numbers derived from an analysis result

use serde::{Deserialize, Serialize};
use shared_types::{AnalysisResult, Compliance, LegalComplexity, RiskLevel};

/// Gauge value for a risk level, in percent
pub fn risk_percent(risk: RiskLevel) -> u8 {
    match risk {
        RiskLevel::High => 85,
        RiskLevel::Medium => 60,
        RiskLevel::Low => 30,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskOverview {
    pub file_name: String,
    pub contract_type: String,
    pub complexity: LegalComplexity,
    pub overall_risk: RiskLevel,
    pub risk_percent: u8,
    pub total_clauses: usize,
    pub high_risk_clauses: usize,
    pub compliant_clauses: usize,
}

impl RiskOverview {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let high_risk_clauses = result
            .clauses
            .iter()
            .filter(|c| c.risk == RiskLevel::High)
            .count();
        let compliant_clauses = result
            .clauses
            .iter()
            .filter(|c| c.compliance == Compliance::Yes)
            .count();

        Self {
            file_name: result.file_name.clone(),
            contract_type: result.contract_type.clone(),
            complexity: result.legal_complexity,
            overall_risk: result.overall_risk_score,
            risk_percent: risk_percent(result.overall_risk_score),
            total_clauses: result.clauses.len(),
            high_risk_clauses,
            compliant_clauses,
        }
    }
}
