//! `brsr-compliance`: BRSR Compliance Certification.
//!
//! Business Responsibility and Sustainability Reporting compliance for Indian
//! regulatory requirements.
//!
//! **Category:** `esg`.

use crate::model::{Category, Certification, Faq, ItemGroup, Level, ProcessStep, Tier};

/// Returns the `brsr-compliance` certification record.
#[must_use]
pub fn certification() -> Certification {
    Certification {
        slug: "brsr-compliance",
        title: "BRSR Compliance Certification",
        category: Category::Esg,
        icon: "file-text",
        short: "Business Responsibility and Sustainability Reporting compliance for Indian \
                regulatory requirements.",
        applicable: "BRSR Compliance Certification helps organizations prepare for and comply \
                     with SEBI's Business Responsibility and Sustainability Reporting \
                     requirements.",
        suitable_for: &[
            "Top 1000 Listed Companies (by market cap)",
            "Companies preparing for listing",
            "Large Corporates with ESG goals",
            "Companies in SEBI-regulated sectors",
            "Organizations seeking investor transparency",
        ],
        applicable_note: "Any organization required or aspiring to comply with BRSR framework \
                          can apply.",
        criteria: &[
            ItemGroup {
                title: "Environmental Disclosures",
                items: &[
                    "Energy consumption and conservation",
                    "Emissions and waste management",
                    "Water stewardship",
                    "Biodiversity impact",
                ],
            },
            ItemGroup {
                title: "Social Disclosures",
                items: &[
                    "Employee well-being and safety",
                    "Human rights practices",
                    "Community development",
                    "Consumer responsibility",
                ],
            },
            ItemGroup {
                title: "Governance Disclosures",
                items: &[
                    "Ethical conduct and transparency",
                    "Regulatory compliance",
                    "Stakeholder engagement",
                    "Policy implementation",
                ],
            },
        ],
        criteria_note: "Assessment is aligned with SEBI BRSR framework and nine principles of \
                        responsible business conduct.",
        process: &[
            ProcessStep {
                step: "Application",
                desc: "Organization provides business details and existing reporting \
                       practices.",
            },
            ProcessStep {
                step: "Gap Assessment",
                desc: "Experts evaluate current disclosures against BRSR requirements.",
            },
            ProcessStep {
                step: "Data Collection & Review",
                desc: "Structured data gathering across all BRSR parameters.",
            },
            ProcessStep {
                step: "Report Preparation Support",
                desc: "Assistance in preparing BRSR-compliant disclosures.",
            },
            ProcessStep {
                step: "Certification Issuance",
                desc: "Organization receives BRSR Compliance Certificate and verification \
                       report.",
            },
            ProcessStep {
                step: "Annual Review",
                desc: "Periodic review for continued compliance.",
            },
        ],
        benefits: &[
            ItemGroup {
                title: "Regulatory Benefits",
                items: &[
                    "SEBI BRSR compliance readiness",
                    "Structured disclosure framework",
                    "Reduced regulatory risk",
                ],
            },
            ItemGroup {
                title: "Business Benefits",
                items: &[
                    "Investor confidence",
                    "IPO and listing readiness",
                    "Competitive positioning",
                ],
            },
            ItemGroup {
                title: "Brand Benefits",
                items: &[
                    "Demonstrates transparency",
                    "Stakeholder trust",
                    "Market credibility",
                ],
            },
            ItemGroup {
                title: "Operational Benefits",
                items: &[
                    "Improved data management",
                    "ESG integration across operations",
                    "Better governance practices",
                ],
            },
        ],
        levels: [
            Level {
                tier: Tier::Bronze,
                label: "BRSR Aware",
                score: "",
                focus: "Initial gap assessment",
                desc: "Organization has begun assessing BRSR readiness.",
            },
            Level {
                tier: Tier::Silver,
                label: "BRSR Prepared",
                score: "",
                focus: "Structured data collection",
                desc: "Organization has structured BRSR data and reporting systems.",
            },
            Level {
                tier: Tier::Gold,
                label: "BRSR Compliant",
                score: "",
                focus: "Full BRSR compliance",
                desc: "Organization meets BRSR reporting requirements.",
            },
            Level {
                tier: Tier::Platinum,
                label: "BRSR Leader",
                score: "",
                focus: "Beyond compliance - leadership reporting",
                desc: "Organization exceeds BRSR requirements with advanced disclosures.",
            },
        ],
        faq: &[
            Faq {
                q: "What is BRSR?",
                a: "BRSR (Business Responsibility and Sustainability Reporting) is a \
                    SEBI-mandated disclosure framework for listed companies in India.",
            },
            Faq {
                q: "Is BRSR mandatory?",
                a: "Yes, for top 1000 listed companies by market capitalization. It is \
                    voluntary for others but recommended.",
            },
            Faq {
                q: "How does certification help?",
                a: "It validates that your organization's disclosures are comprehensive, \
                    accurate, and aligned with BRSR requirements.",
            },
            Faq {
                q: "How long does the process take?",
                a: "Typically 4-8 weeks depending on data readiness.",
            },
        ],
    }
}
