//! Contract analysis engine
//!
//! Picks a canned contract-type template from a file name and assembles the
//! analysis shown to the user. See [`AnalysisEngine::analyze`].

pub mod assemble;
pub mod overview;
pub mod report;
pub mod selector;
pub mod session;
pub mod templates;

pub use assemble::{assemble_analysis, assemble_analysis_at, FILLER_PHRASES};
pub use overview::RiskOverview;
pub use report::{count_report_clauses, render_report, report_file_name, ReportError};
pub use selector::{matched_keyword, select_template};
pub use session::{DroppedFile, FileFormat, Phase, SessionEvent, SessionState, UploadError};
pub use templates::templates;

use shared_types::{AnalysisResult, ContractTemplate};
use tracing::debug;

/// AnalysisEngine entry point
pub struct AnalysisEngine;

impl AnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    /// Select a template for `file_name` and assemble its analysis
    pub fn analyze(&self, file_name: &str) -> AnalysisResult {
        let template = self.select(file_name);
        assemble_analysis(file_name, template, &mut rand::thread_rng())
    }

    pub fn select(&self, file_name: &str) -> &'static ContractTemplate {
        match matched_keyword(file_name) {
            Some((template, keyword)) => {
                debug!(
                    "Selected {:?} template for '{}' (keyword '{}')",
                    template.kind, file_name, keyword
                );
                template
            }
            None => {
                let template = templates::template_for(templates::DEFAULT_KIND);
                debug!(
                    "No keyword matched '{}', using {:?} template",
                    file_name, template.kind
                );
                template
            }
        }
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{LegalComplexity, RiskLevel};

    #[test]
    fn test_engine_analyzes_employment_contract() {
        let engine = AnalysisEngine::new();
        let result = engine.analyze("employment_contract_2024.pdf");

        assert_eq!(result.contract_type, "Employment Agreement");
        assert_eq!(result.clauses.len(), 4);
        assert_eq!(result.overall_risk_score, RiskLevel::High);
        assert_eq!(result.legal_complexity, LegalComplexity::Complex);
        assert_eq!(result.estimated_review_minutes, 20);
        assert_eq!(result.file_name, "employment_contract_2024.pdf");
    }

    #[test]
    fn test_engine_analyzes_lease() {
        let result = AnalysisEngine::new().analyze("lease_agreement.docx");

        assert_eq!(result.contract_type, "Residential Lease");
        assert_eq!(result.overall_risk_score, RiskLevel::High);
    }

    #[test]
    fn test_engine_defaults_to_service() {
        let result = AnalysisEngine::new().analyze("random_file.txt");

        assert_eq!(result.contract_type, "Service Agreement");
        assert_eq!(result.overall_risk_score, RiskLevel::Medium);
        assert_eq!(result.legal_complexity, LegalComplexity::Moderate);
    }

    #[test]
    fn test_engine_select_agrees_with_selector() {
        let engine = AnalysisEngine::new();
        for name in ["random_file.txt", "", "job_offer.pdf", "rent.txt", "equity.docx"] {
            assert_eq!(engine.select(name).kind, select_template(name).kind, "name: {:?}", name);
        }
        assert_eq!(
            engine.select("document.pdf").kind,
            templates::DEFAULT_KIND
        );
    }

    #[test]
    fn test_engine_handles_empty_name() {
        let result = AnalysisEngine::new().analyze("");
        assert_eq!(result.contract_type, "Service Agreement");
        assert!(!result.clauses.is_empty());
    }

    #[test]
    fn test_summary_carries_one_filler_phrase() {
        let result = AnalysisEngine::new().analyze("partnership.pdf");
        let count = FILLER_PHRASES
            .iter()
            .filter(|p| result.summary.contains(*p))
            .count();
        assert_eq!(count, 1);
        assert!(result.summary.starts_with("Contract analysis complete."));
    }

    #[test]
    fn test_report_round_trip_through_engine() {
        let result = AnalysisEngine::new().analyze("lease.pdf");
        let report = render_report(&result, result.analysis_timestamp.date_naive());
        assert_eq!(count_report_clauses(&report), Ok(result.clauses.len()));
    }
}
