//! `carbon-neutral`: Carbon Neutral Certification.
//!
//! Measure, reduce, and offset greenhouse gas emissions to demonstrate climate
//! responsibility.
//!
//! **Category:** `environmental`.

use crate::model::{Category, Certification, Faq, ItemGroup, Level, ProcessStep, Tier};

/// Returns the `carbon-neutral` certification record.
#[must_use]
pub fn certification() -> Certification {
    Certification {
        slug: "carbon-neutral",
        title: "Carbon Neutral Certification",
        category: Category::Environmental,
        icon: "globe",
        short: "Measure, reduce, and offset greenhouse gas emissions to demonstrate climate \
                responsibility.",
        applicable: "Carbon Neutral Certification is applicable to organizations that wish to \
                     measure, reduce, and offset their greenhouse gas emissions and \
                     demonstrate their commitment to climate responsibility.",
        suitable_for: &[
            "Manufacturing Companies",
            "Export-Oriented Businesses",
            "Corporates with ESG goals",
            "IT & Service Organizations",
            "Real Estate & Infrastructure Projects",
            "Hospitality & Tourism Businesses",
            "Logistics & Transportation Firms",
            "Startups seeking sustainability positioning",
            "Companies preparing for ESG disclosures or public listing",
        ],
        applicable_note: "Any organization seeking to reduce climate impact and enhance \
                          sustainability credibility can apply.",
        criteria: &[
            ItemGroup {
                title: "Carbon Footprint Assessment",
                items: &[
                    "Measurement of Scope 1 emissions (direct fuel usage)",
                    "Measurement of Scope 2 emissions (electricity consumption)",
                    "Assessment of relevant Scope 3 emissions (supply chain, travel, \
                     logistics)",
                ],
            },
            ItemGroup {
                title: "Emission Reduction Initiatives",
                items: &[
                    "Energy efficiency improvements",
                    "Renewable energy adoption",
                    "Sustainable procurement practices",
                    "Process optimization",
                ],
            },
            ItemGroup {
                title: "Carbon Offset Strategy",
                items: &[
                    "Use of verified carbon credits",
                    "Investment in environmental projects",
                    "Tree plantation or carbon removal initiatives",
                ],
            },
            ItemGroup {
                title: "Monitoring & Reporting",
                items: &[
                    "Carbon tracking system",
                    "Reduction targets and timelines",
                    "Sustainability reporting transparency",
                ],
            },
        ],
        criteria_note: "Organizations are evaluated using a standardized scoring methodology \
                        before certification is issued.",
        process: &[
            ProcessStep {
                step: "Application",
                desc: "Organization submits an application with operational and energy usage \
                       details.",
            },
            ProcessStep {
                step: "Carbon Footprint Calculation",
                desc: "Experts assess emissions across energy, operations, logistics, and \
                       supply chain using accepted carbon accounting methods.",
            },
            ProcessStep {
                step: "Reduction Strategy Review",
                desc: "The organization's emission reduction measures are evaluated, and \
                       improvement opportunities are identified.",
            },
            ProcessStep {
                step: "Offset Verification",
                desc: "Unavoidable emissions are neutralized through verified carbon offset \
                       projects.",
            },
            ProcessStep {
                step: "Certification Review",
                desc: "The assessment report is reviewed by the certification committee.",
            },
            ProcessStep {
                step: "Certification Issuance",
                desc: "Upon approval, the organization receives Carbon Neutral Certificate, \
                       Digital Badge, and Public listing in registry.",
            },
            ProcessStep {
                step: "Annual Monitoring",
                desc: "Periodic review ensures continued carbon neutrality compliance.",
            },
        ],
        benefits: &[
            ItemGroup {
                title: "Environmental Benefits",
                items: &[
                    "Clear measurement of carbon impact",
                    "Structured reduction roadmap",
                    "Contribution to global climate goals",
                    "Support for renewable adoption",
                ],
            },
            ItemGroup {
                title: "Business & Financial Benefits",
                items: &[
                    "Attracts ESG-focused investors",
                    "Enhances eligibility for green finance",
                    "Competitive advantage in global markets",
                    "Improves sustainability reporting credibility",
                ],
            },
            ItemGroup {
                title: "Brand Benefits",
                items: &[
                    "Demonstrates climate leadership",
                    "Builds stakeholder trust",
                    "Differentiates brand from competitors",
                    "Supports export and multinational partnerships",
                ],
            },
            ItemGroup {
                title: "Compliance Benefits",
                items: &[
                    "Preparedness for carbon disclosure norms",
                    "Alignment with global sustainability frameworks",
                    "Reduced regulatory and reputational risk",
                ],
            },
        ],
        levels: [
            Level {
                tier: Tier::Bronze,
                label: "Carbon Aware Organization",
                score: "",
                focus: "Baseline assessment and monitoring",
                desc: "Organizations that have measured their emissions and begun tracking \
                       carbon impact.",
            },
            Level {
                tier: Tier::Silver,
                label: "Carbon Managed Organization",
                score: "",
                focus: "Efficiency improvements, reduction targets",
                desc: "Organizations implementing measurable emission reduction initiatives.",
            },
            Level {
                tier: Tier::Gold,
                label: "Carbon Neutral Organization",
                score: "",
                focus: "Emission reduction + offsetting",
                desc: "Organizations that have reduced emissions and offset remaining carbon \
                       footprint through verified projects.",
            },
            Level {
                tier: Tier::Platinum,
                label: "Climate Positive Organization",
                score: "",
                focus: "Net-positive climate contribution and long-term decarbonization \
                        strategy",
                desc: "Organizations that remove or offset more carbon than they emit.",
            },
        ],
        faq: &[
            Faq {
                q: "What is Carbon Neutral Certification?",
                a: "It validates that an organization has measured, reduced, and offset its \
                    carbon emissions to achieve net-zero impact.",
            },
            Faq {
                q: "Is carbon neutrality only for large companies?",
                a: "No. Businesses of all sizes, including MSMEs and startups, can pursue \
                    carbon neutrality.",
            },
            Faq {
                q: "How are emissions calculated?",
                a: "Emissions are calculated using standardized carbon accounting methods \
                    covering fuel use, electricity consumption, logistics, and operations.",
            },
            Faq {
                q: "Do companies need to reduce emissions before offsetting?",
                a: "Yes. Reduction is prioritized, and offsets are used only for unavoidable \
                    emissions.",
            },
            Faq {
                q: "What types of projects qualify for carbon offsets?",
                a: "Examples include renewable energy projects, afforestation initiatives, \
                    methane capture, and other verified environmental projects.",
            },
            Faq {
                q: "How long is the certification valid?",
                a: "Typically one year, subject to periodic review or monitoring.",
            },
            Faq {
                q: "Can certification help with ESG reporting?",
                a: "Yes. Carbon neutrality strengthens ESG disclosures, sustainability \
                    reports, and investor confidence.",
            },
        ],
    }
}
