//! Plain-text report download
//!
//! The report is a deterministic rendering of an [`AnalysisResult`]. The only
//! input besides the result is the generation date printed in the header.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::AnalysisResult;
use thiserror::Error;

pub const REPORT_TITLE: &str = "Legal Contract Analysis Report";
pub const CLAUSE_SECTION: &str = "CLAUSE ANALYSIS:";
pub const RECOMMENDATION_SECTION: &str = "RECOMMENDATIONS:";
pub const NO_RECOMMENDATIONS: &str = "No specific recommendations available.";

lazy_static! {
    static ref ENTRY_PATTERN: Regex = Regex::new(r"^\d+\. ").unwrap();
    static ref EXTENSION_PATTERN: Regex = Regex::new(r"\.[^/.]+$").unwrap();
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("Report has no '{0}' section")]
    MissingSection(&'static str),
}

/// Render the downloadable text report
pub fn render_report(result: &AnalysisResult, generated_on: NaiveDate) -> String {
    let mut out = String::new();

    out.push_str(REPORT_TITLE);
    out.push('\n');
    out.push_str(&format!(
        "Generated on: {}\nContract: {}\n\n",
        generated_on.format("%Y-%m-%d"),
        single_line(&result.file_name)
    ));

    out.push_str("EXECUTIVE SUMMARY\n");
    out.push_str(&single_line(&result.summary));
    out.push_str("\n\n");

    out.push_str(&format!(
        "OVERALL RISK SCORE: {}\n\n",
        result.overall_risk_score
    ));

    out.push_str(CLAUSE_SECTION);
    out.push('\n');
    for (index, clause) in result.clauses.iter().enumerate() {
        out.push_str(&format!(
            "{}. {}\n   Risk Level: {}\n   Compliance: {}\n   Explanation: {}\n   Suggestion: {}\n\n",
            index + 1,
            single_line(&clause.clause_text),
            clause.risk,
            clause.compliance,
            single_line(&clause.explanation),
            single_line(&clause.suggestion),
        ));
    }

    out.push_str(RECOMMENDATION_SECTION);
    out.push('\n');
    if result.recommendations.is_empty() {
        out.push_str(NO_RECOMMENDATIONS);
        out.push('\n');
    } else {
        for (index, rec) in result.recommendations.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", index + 1, single_line(rec)));
        }
    }

    out
}

/// Download name for a report, e.g. `contract-analysis-lease.txt`
pub fn report_file_name(file_name: &str) -> String {
    let stem = EXTENSION_PATTERN.replace(file_name, "");
    format!("contract-analysis-{}.txt", stem)
}

/// Count the enumerated entries in the clause section of a rendered report
pub fn count_report_clauses(report: &str) -> Result<usize, ReportError> {
    let mut lines = report.lines();

    if !lines.any(|line| line == CLAUSE_SECTION) {
        return Err(ReportError::MissingSection(CLAUSE_SECTION));
    }

    let count = lines
        .take_while(|line| *line != RECOMMENDATION_SECTION)
        .filter(|line| ENTRY_PATTERN.is_match(line))
        .count();

    Ok(count)
}

// Free text is user- or template-provided; keep each field on one line so the
// section headers stay unambiguous.
fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}
