//! `esg-rating`: ESG Rating & Scorecard.
//!
//! Get a comprehensive ESG performance rating and detailed scorecard for
//! stakeholder reporting.
//!
//! **Category:** `esg`.

use crate::model::{Category, Certification, Faq, ItemGroup, Level, ProcessStep, Tier};

/// Returns the `esg-rating` certification record.
#[must_use]
pub fn certification() -> Certification {
    Certification {
        slug: "esg-rating",
        title: "ESG Rating & Scorecard",
        category: Category::Esg,
        icon: "bar-chart",
        short: "Get a comprehensive ESG performance rating and detailed scorecard for \
                stakeholder reporting.",
        applicable: "ESG Rating & Scorecard service provides organizations with a structured \
                     evaluation of their Environmental, Social, and Governance performance.",
        suitable_for: &[
            "Listed Companies & IPO-bound Firms",
            "Large Corporates",
            "Financial Institutions",
            "Real Estate & Infrastructure Companies",
            "Manufacturing Units",
            "Export Businesses",
        ],
        applicable_note: "Any organization seeking transparent ESG performance measurement \
                          can apply.",
        criteria: &[
            ItemGroup {
                title: "Environmental Score",
                items: &[
                    "Carbon footprint and emissions",
                    "Energy and water efficiency",
                    "Waste management practices",
                    "Environmental compliance",
                ],
            },
            ItemGroup {
                title: "Social Score",
                items: &[
                    "Employee welfare and safety",
                    "Community impact",
                    "Diversity and labour practices",
                    "Stakeholder engagement",
                ],
            },
            ItemGroup {
                title: "Governance Score",
                items: &[
                    "Board oversight and ethics",
                    "Transparency and reporting",
                    "Risk management systems",
                    "Anti-corruption measures",
                ],
            },
        ],
        criteria_note: "Organizations receive a detailed scorecard with ratings across all \
                        ESG dimensions.",
        process: &[
            ProcessStep {
                step: "Application",
                desc: "Organization submits ESG data and operational information.",
            },
            ProcessStep {
                step: "Data Analysis",
                desc: "Experts analyze environmental, social, and governance data points.",
            },
            ProcessStep {
                step: "Assessment & Scoring",
                desc: "Structured scoring across ESG parameters using standardized \
                       methodology.",
            },
            ProcessStep {
                step: "Scorecard Generation",
                desc: "Detailed ESG scorecard with ratings, benchmarks, and recommendations.",
            },
            ProcessStep {
                step: "Report Issuance",
                desc: "Organization receives ESG Rating Report and Digital Badge.",
            },
            ProcessStep {
                step: "Annual Update",
                desc: "Rating can be updated annually to reflect improvements.",
            },
        ],
        benefits: &[
            ItemGroup {
                title: "Transparency Benefits",
                items: &[
                    "Clear ESG performance measurement",
                    "Standardized benchmarking",
                    "Stakeholder-ready reporting",
                ],
            },
            ItemGroup {
                title: "Business Benefits",
                items: &[
                    "Investor confidence and readiness",
                    "Competitive positioning",
                    "Access to ESG-focused capital",
                ],
            },
            ItemGroup {
                title: "Brand Benefits",
                items: &[
                    "Demonstrates ESG commitment",
                    "Market differentiation",
                    "Enhanced credibility",
                ],
            },
            ItemGroup {
                title: "Compliance Benefits",
                items: &[
                    "Supports BRSR and ESG disclosures",
                    "Regulatory preparedness",
                    "Risk identification",
                ],
            },
        ],
        levels: [
            Level {
                tier: Tier::Bronze,
                label: "Basic Rating",
                score: "",
                focus: "Initial ESG measurement",
                desc: "Foundational ESG assessment and baseline scoring.",
            },
            Level {
                tier: Tier::Silver,
                label: "Standard Rating",
                score: "",
                focus: "Structured ESG evaluation",
                desc: "Comprehensive ESG analysis with benchmarking.",
            },
            Level {
                tier: Tier::Gold,
                label: "Advanced Rating",
                score: "",
                focus: "Detailed multi-dimensional scoring",
                desc: "In-depth ESG assessment with sector comparisons.",
            },
            Level {
                tier: Tier::Platinum,
                label: "Premium Rating",
                score: "",
                focus: "Full ESG intelligence report",
                desc: "Complete ESG rating with strategic recommendations and roadmap.",
            },
        ],
        faq: &[
            Faq {
                q: "What is the ESG Rating & Scorecard?",
                a: "It is a structured evaluation that rates an organization's Environmental, \
                    Social, and Governance performance.",
            },
            Faq {
                q: "How is it different from ESG Certification?",
                a: "The rating provides a performance score, while certification validates \
                    compliance with defined standards.",
            },
            Faq {
                q: "Can ratings be improved?",
                a: "Yes. Organizations can improve scores by implementing recommended ESG \
                    initiatives.",
            },
            Faq {
                q: "How often should ratings be updated?",
                a: "Annually, to reflect current ESG performance and improvements.",
            },
        ],
    }
}
