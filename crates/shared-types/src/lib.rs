pub mod types;

pub use types::{
    AnalysisResult, ClauseFinding, Compliance, ContractKind, ContractTemplate, Language,
    LegalComplexity, RiskLevel,
};
