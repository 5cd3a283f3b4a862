//! `green-business`: Green Business Certification.
//!
//! Demonstrate commitment to environmental responsibility, sustainability, and
//! efficient resource management.
//!
//! **Category:** `product`.

use crate::model::{Category, Certification, Faq, ItemGroup, Level, ProcessStep, Tier};

/// Returns the `green-business` certification record.
#[must_use]
pub fn certification() -> Certification {
    Certification {
        slug: "green-business",
        title: "Green Business Certification",
        category: Category::Product,
        icon: "leaf",
        short: "Demonstrate commitment to environmental responsibility, sustainability, and \
                efficient resource management.",
        applicable: "Green Business Certification is applicable to organizations that want to \
                     demonstrate their commitment towards environmental responsibility, \
                     sustainability, and efficient resource management.",
        suitable_for: &[
            "Manufacturing Companies",
            "MSMEs & Industrial Units",
            "Corporate Offices",
            "IT & Service Companies",
            "Export-Oriented Units",
            "Real Estate & Infrastructure Projects",
            "Hospitality & Retail Businesses",
            "Warehouses & Logistics Firms",
            "Startups adopting sustainable practices",
        ],
        applicable_note: "Any business seeking to improve ESG performance, reduce \
                          environmental impact, or enhance brand credibility can apply.",
        criteria: &[
            ItemGroup {
                title: "Environmental Criteria",
                items: &[
                    "Energy consumption & renewable adoption",
                    "Carbon emissions monitoring",
                    "Water conservation practices",
                    "Waste management & recycling systems",
                    "Pollution control measures",
                    "Sustainable sourcing of materials",
                ],
            },
            ItemGroup {
                title: "Social Responsibility Criteria",
                items: &[
                    "Employee health & safety measures",
                    "Fair labour practices",
                    "Community engagement initiatives",
                    "Diversity & inclusion practices",
                ],
            },
            ItemGroup {
                title: "Governance Criteria",
                items: &[
                    "Sustainability policies in place",
                    "Compliance with environmental laws",
                    "ESG reporting & transparency",
                    "Ethical supply chain practices",
                ],
            },
        ],
        criteria_note: "Each parameter is scored using a standardized assessment model, \
                        leading to certification levels such as Bronze, Silver, Gold, or \
                        Platinum.",
        process: &[
            ProcessStep {
                step: "Application",
                desc: "The organization submits an online application along with preliminary \
                       business details.",
            },
            ProcessStep {
                step: "Documentation Review",
                desc: "Submission of environmental policies, compliance records, energy/water \
                       data, and operational information.",
            },
            ProcessStep {
                step: "Sustainability Assessment",
                desc: "Our expert auditors conduct document verification, management \
                       interviews, site inspection (if required), and operational evaluation.",
            },
            ProcessStep {
                step: "Scoring & Gap Analysis",
                desc: "The organization is evaluated against defined sustainability \
                       benchmarks and receives a detailed performance scorecard.",
            },
            ProcessStep {
                step: "Certification Issuance",
                desc: "Upon successful evaluation, the organization is awarded Green Business \
                       Certification along with Certification Seal, Digital Badge, and Public \
                       Listing on certification registry.",
            },
            ProcessStep {
                step: "Renewal & Monitoring",
                desc: "Certification remains valid for a defined period subject to annual \
                       compliance review.",
            },
        ],
        benefits: &[
            ItemGroup {
                title: "Environmental Benefits",
                items: &[
                    "Reduction in energy and resource consumption",
                    "Lower carbon footprint and environmental impact",
                    "Improved waste management and recycling practices",
                    "Adoption of renewable and sustainable technologies",
                ],
            },
            ItemGroup {
                title: "Business & Financial Benefits",
                items: &[
                    "Improved operational efficiency and cost savings",
                    "Better access to ESG-focused investors and funds",
                    "Competitive advantage in tenders and global markets",
                    "Eligibility for sustainability-linked incentives and programs",
                ],
            },
            ItemGroup {
                title: "Brand & Market Benefits",
                items: &[
                    "Enhanced corporate reputation and trust",
                    "Stronger positioning with international buyers and partners",
                    "Differentiation from competitors",
                    "Increased customer confidence",
                ],
            },
            ItemGroup {
                title: "Compliance & Risk Benefits",
                items: &[
                    "Alignment with environmental regulations and ESG norms",
                    "Preparedness for future compliance requirements",
                    "Reduced environmental and regulatory risks",
                ],
            },
        ],
        levels: [
            Level {
                tier: Tier::Bronze,
                label: "Bronze Certification",
                score: "40 - 54",
                focus: "Compliance, basic monitoring, initial improvements",
                desc: "Awarded to organizations that demonstrate foundational sustainability \
                       practices and compliance with basic environmental norms.",
            },
            Level {
                tier: Tier::Silver,
                label: "Silver Certification",
                score: "55 - 69",
                focus: "Efficiency improvements, reporting systems, policy integration",
                desc: "Awarded to organizations implementing structured sustainability \
                       initiatives and measurable improvements in resource efficiency.",
            },
            Level {
                tier: Tier::Gold,
                label: "Gold Certification",
                score: "70 - 84",
                focus: "Renewable adoption, supply chain responsibility, ESG integration",
                desc: "Awarded to organizations demonstrating strong sustainability \
                       leadership and advanced environmental management systems.",
            },
            Level {
                tier: Tier::Platinum,
                label: "Platinum Certification",
                score: "85+",
                focus: "Net-zero initiatives, circular economy practices, innovation \
                        leadership",
                desc: "Awarded to organizations that set industry benchmarks in \
                       sustainability and demonstrate measurable long-term environmental \
                       impact.",
            },
        ],
        faq: &[
            Faq {
                q: "What is Green Business Certification?",
                a: "It is an independent assessment that evaluates an organization's \
                    environmental practices, sustainability initiatives, and ESG performance \
                    against defined benchmarks.",
            },
            Faq {
                q: "Is certification mandatory?",
                a: "No, it is voluntary. However, many companies pursue certification to \
                    enhance credibility, attract investors, and prepare for ESG disclosures.",
            },
            Faq {
                q: "How long does the certification process take?",
                a: "Typically 4-8 weeks depending on the size of the organization, data \
                    availability, and audit requirements.",
            },
            Faq {
                q: "Does the certification require a site visit?",
                a: "In many cases yes, especially for manufacturing or infrastructure \
                    projects. For service organizations, virtual audits may be sufficient.",
            },
            Faq {
                q: "What documents are required?",
                a: "Basic business details, environmental compliance records, energy and \
                    water data, waste management practices, and internal sustainability \
                    policies.",
            },
            Faq {
                q: "How long is the certification valid?",
                a: "Certification is usually valid for one year, subject to periodic review \
                    or surveillance audit.",
            },
            Faq {
                q: "Can a company improve its rating after certification?",
                a: "Yes. Organizations may reapply after implementing improvements to achieve \
                    a higher certification level.",
            },
            Faq {
                q: "Does certification help with ESG reporting or IPO readiness?",
                a: "Yes. Certification supports ESG disclosures, investor confidence, and \
                    sustainability reporting requirements often expected from growth-stage \
                    and public companies.",
            },
        ],
    }
}
