//! Contract-type template registry
//!
//! Each template is a canned analysis for one contract type. The registry is
//! plain data; selection lives in [`crate::selector`].

use lazy_static::lazy_static;
use shared_types::{ClauseFinding, Compliance, ContractKind, ContractTemplate, RiskLevel};

/// Employment contract keywords
pub const EMPLOYMENT_KEYWORDS: &[&str] = &[
    "employment",
    "job",
    "work",
    "employee",
    "salary",
    "contract",
];

/// Residential lease keywords
pub const LEASE_KEYWORDS: &[&str] = &[
    "lease", "rent", "property", "landlord", "tenant", "premises",
];

/// Partnership and joint venture keywords
pub const PARTNERSHIP_KEYWORDS: &[&str] = &[
    "partnership",
    "partner",
    "joint venture",
    "venture",
    "shareholder",
    "equity",
];

/// Service agreement keywords
pub const SERVICE_KEYWORDS: &[&str] = &[
    "service",
    "agreement",
    "provider",
    "client",
    "scope",
    "payment",
];

/// Order in which templates are tried. The last entry is the fallback.
pub const PRIORITY: [ContractKind; 4] = [
    ContractKind::Employment,
    ContractKind::Lease,
    ContractKind::Partnership,
    ContractKind::Service,
];

pub const DEFAULT_KIND: ContractKind = ContractKind::Service;

/// Disclaimer attached to every analysis
pub const JURISDICTION_NOTE: &str = "This analysis is for informational purposes only and is not legal advice. \
Contract law varies by jurisdiction; consult a qualified attorney before signing.";

lazy_static! {
    static ref TEMPLATES: Vec<ContractTemplate> = vec![
        employment_template(),
        lease_template(),
        partnership_template(),
        service_template(),
    ];
}

/// All templates in selection priority order
pub fn templates() -> &'static [ContractTemplate] {
    TEMPLATES.as_slice()
}

pub fn template_for(kind: ContractKind) -> &'static ContractTemplate {
    // PRIORITY lists every kind and TEMPLATES is built in the same order
    let index = PRIORITY.iter().position(|k| *k == kind).unwrap_or(PRIORITY.len() - 1);
    &TEMPLATES[index]
}

fn clause(
    clause_text: &str,
    explanation: &str,
    translation: &str,
    risk: RiskLevel,
    suggestion: &str,
    compliance: Compliance,
) -> ClauseFinding {
    ClauseFinding {
        clause_text: clause_text.to_string(),
        explanation: explanation.to_string(),
        translation: translation.to_string(),
        risk,
        suggestion: suggestion.to_string(),
        compliance,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn employment_template() -> ContractTemplate {
    ContractTemplate {
        kind: ContractKind::Employment,
        keywords: EMPLOYMENT_KEYWORDS.to_vec(),
        clauses: vec![
            clause(
                "Employee agrees to work exclusively for the Company during employment period.",
                "This is a non-compete clause that restricts employee's ability to work elsewhere.",
                "कर्मचारी रोजगार अवधि के दौरान केवल कंपनी के लिए काम करने के लिए सहमत है।",
                RiskLevel::Medium,
                "Consider limiting scope and duration of exclusivity.",
                Compliance::Partial,
            ),
            clause(
                "Company may terminate employment at will with 30 days notice.",
                "At-will termination clause allows company to fire without specific cause.",
                "कंपनी 30 दिन की सूचना के साथ इच्छानुसार रोजगार समाप्त कर सकती है।",
                RiskLevel::High,
                "Negotiate for severance pay and longer notice period.",
                Compliance::No,
            ),
            clause(
                "All intellectual property created during employment, including outside working hours, belongs to the Company.",
                "Broad IP assignment that captures personal projects unrelated to the job.",
                "रोजगार के दौरान बनाई गई सभी बौद्धिक संपदा, काम के घंटों के बाहर बनाई गई संपदा सहित, कंपनी की होगी।",
                RiskLevel::High,
                "Limit the assignment to work performed within the scope of employment.",
                Compliance::Partial,
            ),
            clause(
                "Employee entitled to health insurance and retirement benefits.",
                "Standard benefits clause ensuring employee welfare coverage.",
                "कर्मचारी स्वास्थ्य बीमा और सेवानिवृत्ति लाभ का हकदार है।",
                RiskLevel::Low,
                "Ensure benefits details are clearly specified.",
                Compliance::Yes,
            ),
        ],
        risk_score: RiskLevel::High,
        summary: "The document appears to be an employment agreement with high risk factors requiring attention.".to_string(),
        recommendations: strings(&[
            "Negotiate severance terms before accepting at-will termination",
            "Narrow the intellectual property assignment to job-related work",
            "Verify compliance with local employment laws",
            "Consider adding dispute resolution mechanisms",
        ]),
    }
}

fn lease_template() -> ContractTemplate {
    ContractTemplate {
        kind: ContractKind::Lease,
        keywords: LEASE_KEYWORDS.to_vec(),
        clauses: vec![
            clause(
                "Tenant responsible for all maintenance and repairs exceeding $500.",
                "This shifts significant repair costs to tenant, which is unusual.",
                "किरायेदार $500 से अधिक के सभी रखरखाव और मरम्मत के लिए जिम्मेदार है।",
                RiskLevel::High,
                "Negotiate a higher threshold or shared responsibility.",
                Compliance::No,
            ),
            clause(
                "Lease automatically renews for same term unless 90 days notice given.",
                "Auto-renewal clause with long notice period may lock tenant in.",
                "90 दिन की सूचना न देने पर लीज स्वचालित रूप से उसी अवधि के लिए नवीनीकृत हो जाता है।",
                RiskLevel::Medium,
                "Reduce notice period to 30-60 days maximum.",
                Compliance::Partial,
            ),
            clause(
                "Security deposit equal to two months rent plus cleaning fee.",
                "Standard security deposit with additional cleaning fee is reasonable.",
                "सुरक्षा जमा दो महीने के किराए के बराबर प्लस सफाई शुल्क।",
                RiskLevel::Low,
                "Ensure cleaning fee amount is specified and reasonable.",
                Compliance::Yes,
            ),
        ],
        risk_score: RiskLevel::High,
        summary: "The document appears to be a lease agreement with high risk factors requiring attention.".to_string(),
        recommendations: strings(&[
            "Cap tenant repair obligations or share them with the landlord",
            "Shorten the auto-renewal notice window",
            "Confirm deposit return timelines under local landlord-tenant law",
            "Document the property condition at move-in",
        ]),
    }
}

fn partnership_template() -> ContractTemplate {
    ContractTemplate {
        kind: ContractKind::Partnership,
        keywords: PARTNERSHIP_KEYWORDS.to_vec(),
        clauses: vec![
            clause(
                "Profits and losses shall be shared equally regardless of capital contribution.",
                "An equal split ignores differing capital contributions and may disadvantage the larger investor.",
                "पूंजी योगदान की परवाह किए बिना लाभ और हानि बराबर साझा की जाएगी।",
                RiskLevel::Medium,
                "Tie profit shares to capital and effort, or record why an equal split is intended.",
                Compliance::Partial,
            ),
            clause(
                "Each partner is jointly and severally liable for all partnership debts.",
                "Unlimited personal liability exposes each partner's own assets to partnership obligations.",
                "प्रत्येक साझेदार साझेदारी के सभी ऋणों के लिए संयुक्त रूप से और अलग-अलग उत्तरदायी है।",
                RiskLevel::High,
                "Consider a limited liability structure or indemnification between partners.",
                Compliance::No,
            ),
            clause(
                "A partner may withdraw with 90 days written notice and receive the book value of their share.",
                "Defined exit process with a clear valuation method.",
                "कोई साझेदार 90 दिन की लिखित सूचना देकर अलग हो सकता है और अपने हिस्से का बही मूल्य प्राप्त कर सकता है।",
                RiskLevel::Low,
                "Confirm how book value is calculated and when payment is due.",
                Compliance::Yes,
            ),
        ],
        risk_score: RiskLevel::Medium,
        summary: "The document appears to be a partnership agreement with medium risk factors requiring attention.".to_string(),
        recommendations: strings(&[
            "Align profit sharing with capital contributions",
            "Limit personal liability for partnership debts",
            "Define decision-making and deadlock procedures",
            "Consider adding dispute resolution mechanisms",
        ]),
    }
}

fn service_template() -> ContractTemplate {
    ContractTemplate {
        kind: ContractKind::Service,
        keywords: SERVICE_KEYWORDS.to_vec(),
        clauses: vec![
            clause(
                "Service provider not liable for any consequential damages.",
                "Broad liability exclusion that may be too protective for provider.",
                "सेवा प्रदाता किसी भी परिणामी नुकसान के लिए उत्तरदायी नहीं है।",
                RiskLevel::High,
                "Limit exclusion to reasonable business damages only.",
                Compliance::No,
            ),
            clause(
                "Payment due within 30 days of invoice with 1.5% monthly late fee.",
                "Standard payment terms with reasonable late fee structure.",
                "1.5% मासिक विलंब शुल्क के साथ चालान के 30 दिनों के भीतर भुगतान देय।",
                RiskLevel::Low,
                "Payment terms appear fair and industry-standard.",
                Compliance::Yes,
            ),
            clause(
                "Either party may terminate with 30 days written notice.",
                "Balanced termination clause allowing both parties to exit.",
                "कोई भी पक्ष 30 दिन की लिखित सूचना के साथ समाप्त कर सकता है।",
                RiskLevel::Low,
                "Consider adding provisions for work-in-progress completion.",
                Compliance::Yes,
            ),
        ],
        risk_score: RiskLevel::Medium,
        summary: "The document appears to be a service agreement with medium risk factors requiring attention.".to_string(),
        recommendations: strings(&[
            "Review all liability and indemnification clauses carefully",
            "Ensure termination procedures are clearly defined",
            "Verify compliance with local contract laws",
            "Consider adding dispute resolution mechanisms",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_follows_priority_order() {
        let kinds: Vec<_> = templates().iter().map(|t| t.kind).collect();
        assert_eq!(kinds, PRIORITY.to_vec());
        assert_eq!(*PRIORITY.last().unwrap(), DEFAULT_KIND);
    }

    #[test]
    fn test_every_template_has_clauses() {
        for template in templates() {
            assert!(!template.clauses.is_empty(), "{:?} has no clauses", template.kind);
            assert!(!template.recommendations.is_empty());
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for template in templates() {
            for keyword in &template.keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn test_template_for_returns_matching_kind() {
        for kind in PRIORITY {
            assert_eq!(template_for(kind).kind, kind);
        }
    }

    #[test]
    fn test_summary_mentions_kind_and_risk() {
        for template in templates() {
            assert!(template.summary.contains(template.kind.noun()));
            let risk = template.risk_score.as_str().to_lowercase();
            assert!(template.summary.contains(&risk));
        }
    }
}
