use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Categorical severity attached to a clause and to a whole contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compliance {
    Yes,
    No,
    Partial,
}

impl Compliance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Compliance::Yes => "Yes",
            Compliance::No => "No",
            Compliance::Partial => "Partial",
        }
    }
}

impl std::fmt::Display for Compliance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review effort bucket shown next to the contract type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegalComplexity {
    Standard,
    Moderate,
    Complex,
}

impl LegalComplexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            LegalComplexity::Standard => "Standard",
            LegalComplexity::Moderate => "Moderate",
            LegalComplexity::Complex => "Complex",
        }
    }
}

impl From<RiskLevel> for LegalComplexity {
    fn from(risk: RiskLevel) -> Self {
        match risk {
            RiskLevel::High => LegalComplexity::Complex,
            RiskLevel::Medium => LegalComplexity::Moderate,
            _ => LegalComplexity::Standard,
        }
    }
}

/// Display language for clause explanations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractKind {
    Employment,
    Lease,
    Service,
    Partnership,
}

impl ContractKind {
    /// Label shown to the user, e.g. "Residential Lease"
    pub fn label(&self) -> &'static str {
        match self {
            ContractKind::Employment => "Employment Agreement",
            ContractKind::Lease => "Residential Lease",
            ContractKind::Service => "Service Agreement",
            ContractKind::Partnership => "Partnership Agreement",
        }
    }

    /// Lowercase noun used inside summary sentences
    pub fn noun(&self) -> &'static str {
        match self {
            ContractKind::Employment => "employment",
            ContractKind::Lease => "lease",
            ContractKind::Service => "service",
            ContractKind::Partnership => "partnership",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseFinding {
    pub clause_text: String,
    pub explanation: String,
    pub translation: String, // Hindi rendering of the explanation's subject
    pub risk: RiskLevel,
    pub suggestion: String,
    pub compliance: Compliance,
}

impl ClauseFinding {
    pub fn explanation_in(&self, language: Language) -> &str {
        match language {
            Language::English => &self.explanation,
            Language::Hindi => &self.translation,
        }
    }
}

/// Canned analysis for one contract type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractTemplate {
    pub kind: ContractKind,
    pub keywords: Vec<&'static str>,
    pub clauses: Vec<ClauseFinding>,
    pub risk_score: RiskLevel,
    pub summary: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub clauses: Vec<ClauseFinding>,
    pub overall_risk_score: RiskLevel,
    pub file_name: String,
    pub analysis_timestamp: DateTime<Utc>,
    pub contract_type: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub legal_complexity: LegalComplexity,
    pub estimated_review_minutes: u32,
    pub jurisdiction_note: String,
}
