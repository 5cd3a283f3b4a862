//! `esg-compliance`: ESG Compliance Certification.
//!
//! Validate your organization's Environmental, Social, and Governance
//! compliance across all operational areas.
//!
//! **Category:** `esg`.

use crate::model::{Category, Certification, Faq, ItemGroup, Level, ProcessStep, Tier};

/// Returns the `esg-compliance` certification record.
#[must_use]
pub fn certification() -> Certification {
    Certification {
        slug: "esg-compliance",
        title: "ESG Compliance Certification",
        category: Category::Esg,
        icon: "shield-check",
        short: "Validate your organization's Environmental, Social, and Governance compliance \
                across all operational areas.",
        applicable: "ESG Compliance Certification is designed for organizations that want to \
                     validate their adherence to Environmental, Social, and Governance \
                     standards across operations.",
        suitable_for: &[
            "Listed & Pre-IPO Companies",
            "Large Corporates & Conglomerates",
            "Manufacturing & Industrial Units",
            "Financial Institutions & NBFCs",
            "Real Estate Developers",
            "IT & Service Companies",
            "Export-Oriented Businesses",
        ],
        applicable_note: "Any organization seeking structured ESG compliance and investor \
                          readiness can apply.",
        criteria: &[
            ItemGroup {
                title: "Environmental Compliance",
                items: &[
                    "Environmental policy implementation",
                    "Resource efficiency and emissions monitoring",
                    "Waste and pollution management",
                    "Regulatory compliance verification",
                ],
            },
            ItemGroup {
                title: "Social Compliance",
                items: &[
                    "Labour practices and worker welfare",
                    "Health and safety systems",
                    "Community engagement programs",
                    "Diversity and inclusion practices",
                ],
            },
            ItemGroup {
                title: "Governance Compliance",
                items: &[
                    "Board-level ESG oversight",
                    "Ethical business practices",
                    "Anti-corruption policies",
                    "Transparency and disclosure systems",
                ],
            },
        ],
        criteria_note: "Organizations are scored across ESG parameters using a standardized \
                        framework.",
        process: &[
            ProcessStep {
                step: "Application",
                desc: "Organization submits operational details and ESG-related documentation.",
            },
            ProcessStep {
                step: "Documentation Review",
                desc: "Evaluation of policies, compliance records, and governance frameworks.",
            },
            ProcessStep {
                step: "ESG Assessment",
                desc: "Expert assessment of environmental, social, and governance practices.",
            },
            ProcessStep {
                step: "Scoring & Gap Analysis",
                desc: "Organization receives ESG performance scorecard with recommendations.",
            },
            ProcessStep {
                step: "Certification Issuance",
                desc: "Approved organizations receive ESG Compliance Certificate, Digital \
                       Badge, and Registry listing.",
            },
            ProcessStep {
                step: "Annual Review",
                desc: "Periodic monitoring ensures continued ESG compliance.",
            },
        ],
        benefits: &[
            ItemGroup {
                title: "Environmental Benefits",
                items: &[
                    "Structured environmental management",
                    "Improved resource efficiency",
                    "Regulatory compliance assurance",
                ],
            },
            ItemGroup {
                title: "Business Benefits",
                items: &[
                    "Attracts ESG-focused investors",
                    "Improves IPO and funding readiness",
                    "Competitive advantage in global markets",
                ],
            },
            ItemGroup {
                title: "Brand Benefits",
                items: &[
                    "Demonstrates corporate responsibility",
                    "Builds stakeholder confidence",
                    "Enhances market positioning",
                ],
            },
            ItemGroup {
                title: "Compliance Benefits",
                items: &[
                    "Alignment with SEBI, global ESG norms",
                    "Reduced regulatory risk",
                    "Preparedness for mandatory disclosures",
                ],
            },
        ],
        levels: [
            Level {
                tier: Tier::Bronze,
                label: "ESG Aware",
                score: "",
                focus: "Basic compliance and monitoring",
                desc: "Organizations with foundational ESG policies and compliance measures.",
            },
            Level {
                tier: Tier::Silver,
                label: "ESG Managed",
                score: "",
                focus: "Structured ESG systems and reporting",
                desc: "Organizations with integrated ESG management and reporting systems.",
            },
            Level {
                tier: Tier::Gold,
                label: "ESG Leader",
                score: "",
                focus: "Advanced ESG integration across operations",
                desc: "Organizations demonstrating strong ESG leadership and measurable \
                       impact.",
            },
            Level {
                tier: Tier::Platinum,
                label: "ESG Champion",
                score: "",
                focus: "Industry-leading ESG performance",
                desc: "Organizations setting industry benchmarks in ESG performance and \
                       innovation.",
            },
        ],
        faq: &[
            Faq {
                q: "What is ESG Compliance Certification?",
                a: "It validates that an organization meets defined Environmental, Social, \
                    and Governance standards.",
            },
            Faq {
                q: "Is ESG certification mandatory?",
                a: "While not always mandatory, ESG compliance is increasingly expected by \
                    investors, regulators, and stakeholders.",
            },
            Faq {
                q: "How long does certification take?",
                a: "Typically 4-8 weeks depending on organization size and data readiness.",
            },
            Faq {
                q: "How long is certification valid?",
                a: "Usually one year, subject to periodic review.",
            },
        ],
    }
}
