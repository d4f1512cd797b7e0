//! File-name keyword matching

use shared_types::ContractTemplate;

use crate::templates::{template_for, DEFAULT_KIND, PRIORITY};

/// Pick the template for a file name.
///
/// Templates are tried in [`PRIORITY`] order and the first one with any
/// keyword occurring in the lower-cased name wins. Names that match nothing,
/// including the empty string, get the Service template.
pub fn select_template(file_name: &str) -> &'static ContractTemplate {
    match matched_keyword(file_name) {
        Some((template, _)) => template,
        None => template_for(DEFAULT_KIND),
    }
}

/// Template and keyword that decided the selection, if any keyword matched
pub fn matched_keyword(file_name: &str) -> Option<(&'static ContractTemplate, &'static str)> {
    let name_lower = file_name.to_lowercase();

    PRIORITY.iter().find_map(|kind| {
        let template = template_for(*kind);
        find_keyword(&name_lower, &template.keywords).map(|keyword| (template, keyword))
    })
}

/// First keyword from `keywords` that occurs in already lower-cased text
pub fn find_keyword(text_lower: &str, keywords: &[&'static str]) -> Option<&'static str> {
    keywords
        .iter()
        .copied()
        .find(|keyword| text_lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use shared_types::{ContractKind, RiskLevel};

    #[test]
    fn test_employment_file_name() {
        let template = select_template("employment_contract_2024.pdf");
        assert_eq!(template.kind, ContractKind::Employment);
        assert_eq!(template.kind.label(), "Employment Agreement");
        assert_eq!(template.clauses.len(), 4);
        assert_eq!(template.risk_score, RiskLevel::High);
    }

    #[test]
    fn test_lease_file_name() {
        let template = select_template("lease_agreement.docx");
        assert_eq!(template.kind, ContractKind::Lease);
        assert_eq!(template.kind.label(), "Residential Lease");
        assert_eq!(template.risk_score, RiskLevel::High);
    }

    #[test]
    fn test_unmatched_file_name_falls_back_to_service() {
        for name in ["random_file.txt", "document.pdf", "", "   ", "ß∂ƒ.docx"] {
            let template = select_template(name);
            assert_eq!(template.kind, ContractKind::Service, "name: {:?}", name);
        }
        assert_eq!(select_template("random_file.txt").kind.label(), "Service Agreement");
        assert_eq!(
            select_template("random_file.txt").risk_score,
            RiskLevel::Medium
        );
    }

    #[test]
    fn test_partnership_file_name() {
        let template = select_template("Joint Venture Terms.pdf");
        assert_eq!(template.kind, ContractKind::Partnership);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(select_template("LEASE.PDF").kind, ContractKind::Lease);
        assert_eq!(select_template("Employee_Handbook.txt").kind, ContractKind::Employment);
    }

    #[test]
    fn test_earlier_priority_wins() {
        // "contract" is an employment keyword, "lease" a lease keyword
        assert_eq!(select_template("lease_contract.pdf").kind, ContractKind::Employment);
        // "rent" beats "partner"
        assert_eq!(select_template("partner_rent_split.pdf").kind, ContractKind::Lease);
        // "partner" beats "agreement"
        assert_eq!(
            select_template("partner_agreement.pdf").kind,
            ContractKind::Partnership
        );
    }

    #[test]
    fn test_service_keywords_report_a_match() {
        let (template, keyword) = matched_keyword("client_scope.pdf").unwrap();
        assert_eq!(template.kind, ContractKind::Service);
        assert_eq!(keyword, "client");
        assert!(matched_keyword("random_file.txt").is_none());
    }

    proptest! {
        /// Property: selection never panics and always yields a known kind
        #[test]
        fn selection_is_total(name in ".*") {
            let template = select_template(&name);
            prop_assert!(PRIORITY.contains(&template.kind));
        }

        /// Property: same name, same template
        #[test]
        fn selection_is_idempotent(name in "[a-zA-Z_ .-]{0,40}") {
            prop_assert_eq!(select_template(&name).kind, select_template(&name).kind);
        }

        /// Property: "employment" selects Employment regardless of surroundings
        #[test]
        fn employment_keyword_selects_employment(
            prefix in "[a-z0-9_]{0,12}",
            suffix in "[a-z0-9_]{0,12}",
            upper in any::<bool>(),
        ) {
            let word = if upper { "EMPLOYMENT" } else { "employment" };
            let name = format!("{}{}{}.pdf", prefix, word, suffix);
            prop_assert_eq!(select_template(&name).kind, ContractKind::Employment);
        }

        /// Property: digits-only names match no keyword
        #[test]
        fn digit_names_fall_back(digits in "[0-9]{1,16}") {
            let name = format!("{}.pdf", digits);
            prop_assert_eq!(select_template(&name).kind, ContractKind::Service);
        }
    }
}
