//! `water-neutral`: Water Neutral Certification.
//!
//! Measure, reduce, and balance water consumption through conservation and
//! replenishment initiatives.
//!
//! **Category:** `environmental`.

use crate::model::{Category, Certification, Faq, ItemGroup, Level, ProcessStep, Tier};

/// Returns the `water-neutral` certification record.
#[must_use]
pub fn certification() -> Certification {
    Certification {
        slug: "water-neutral",
        title: "Water Neutral Certification",
        category: Category::Environmental,
        icon: "droplet",
        short: "Measure, reduce, and balance water consumption through conservation and \
                replenishment initiatives.",
        applicable: "Water Neutral Certification is designed for organizations that want to \
                     measure, reduce, and balance their water consumption through \
                     conservation, efficiency improvements, and replenishment initiatives.",
        suitable_for: &[
            "Manufacturing and Industrial Units",
            "Real Estate & Infrastructure Projects",
            "Hotels & Hospitality Businesses",
            "Food & Beverage Companies",
            "Textile & Processing Industries",
            "Agriculture & Agro-Processing Units",
            "IT Parks & Corporate Campuses",
            "Educational Institutions & Hospitals",
        ],
        applicable_note: "Any organization seeking responsible water stewardship and \
                          sustainable resource management can apply.",
        criteria: &[
            ItemGroup {
                title: "Water Footprint Assessment",
                items: &[
                    "Measurement of water consumption across operations",
                    "Identification of high-usage processes",
                    "Source mapping (groundwater, municipal, recycled water)",
                ],
            },
            ItemGroup {
                title: "Water Efficiency Measures",
                items: &[
                    "Water-saving technologies and processes",
                    "Recycling and reuse systems",
                    "Rainwater harvesting implementation",
                    "Leak detection and control mechanisms",
                ],
            },
            ItemGroup {
                title: "Water Replenishment Initiatives",
                items: &[
                    "Groundwater recharge projects",
                    "Watershed development activities",
                    "Community water restoration programs",
                    "Plantation and ecological restoration efforts",
                ],
            },
            ItemGroup {
                title: "Monitoring & Governance",
                items: &[
                    "Water tracking and reporting systems",
                    "Reduction targets and conservation policies",
                    "Compliance with local water regulations",
                ],
            },
        ],
        criteria_note: "Organizations receive a water sustainability score based on these \
                        parameters.",
        process: &[
            ProcessStep {
                step: "Application",
                desc: "Organization submits water usage details, operational data, and \
                       sustainability practices.",
            },
            ProcessStep {
                step: "Water Footprint Calculation",
                desc: "Experts evaluate water consumption patterns and operational dependence.",
            },
            ProcessStep {
                step: "Efficiency & Conservation Review",
                desc: "Assessment of water-saving measures and reuse systems in place.",
            },
            ProcessStep {
                step: "Replenishment Verification",
                desc: "Validation of water offset initiatives such as recharge or restoration \
                       projects.",
            },
            ProcessStep {
                step: "Certification Review",
                desc: "Findings are evaluated by the certification committee.",
            },
            ProcessStep {
                step: "Certification Issuance",
                desc: "Successful organizations receive Water Neutral Certificate, Digital \
                       Badge, and Listing in public registry.",
            },
            ProcessStep {
                step: "Periodic Monitoring",
                desc: "Annual review ensures continued compliance with water neutrality goals.",
            },
        ],
        benefits: &[
            ItemGroup {
                title: "Environmental Benefits",
                items: &[
                    "Reduces freshwater consumption",
                    "Encourages water recycling and conservation",
                    "Supports groundwater recharge and ecosystem restoration",
                ],
            },
            ItemGroup {
                title: "Business Benefits",
                items: &[
                    "Reduces long-term water costs",
                    "Improves operational sustainability",
                    "Enhances ESG performance metrics",
                    "Strengthens resilience against water scarcity risks",
                ],
            },
            ItemGroup {
                title: "Brand & Market Benefits",
                items: &[
                    "Demonstrates responsible water stewardship",
                    "Improves reputation among investors and stakeholders",
                    "Supports sustainability reporting and disclosures",
                ],
            },
            ItemGroup {
                title: "Compliance Benefits",
                items: &[
                    "Preparedness for water regulations and audits",
                    "Reduced environmental and operational risks",
                ],
            },
        ],
        levels: [
            Level {
                tier: Tier::Bronze,
                label: "Water Aware Organization",
                score: "",
                focus: "Baseline measurement and tracking",
                desc: "Organizations that have measured water usage and begun monitoring \
                       consumption.",
            },
            Level {
                tier: Tier::Silver,
                label: "Water Managed Organization",
                score: "",
                focus: "Recycling systems, reduction initiatives",
                desc: "Organizations implementing efficiency improvements and conservation \
                       measures.",
            },
            Level {
                tier: Tier::Gold,
                label: "Water Neutral Organization",
                score: "",
                focus: "Efficiency + replenishment balance",
                desc: "Organizations balancing water consumption through replenishment or \
                       offset projects.",
            },
            Level {
                tier: Tier::Platinum,
                label: "Water Positive Organization",
                score: "",
                focus: "Net-positive water impact and ecosystem restoration",
                desc: "Organizations replenishing more water than they consume and \
                       demonstrating leadership in water sustainability.",
            },
        ],
        faq: &[
            Faq {
                q: "What is Water Neutral Certification?",
                a: "It validates that an organization has measured, reduced, and balanced its \
                    water consumption through conservation and replenishment initiatives.",
            },
            Faq {
                q: "Is water neutrality relevant for service companies?",
                a: "Yes. Offices, campuses, and IT parks can also measure and offset water \
                    consumption.",
            },
            Faq {
                q: "What counts as water replenishment?",
                a: "Recharge structures, watershed development, restoration projects, and \
                    community water initiatives can contribute to water neutrality.",
            },
            Faq {
                q: "Does certification require a site visit?",
                a: "For industrial or infrastructure projects, site inspection is typically \
                    conducted. Service organizations may undergo remote assessment.",
            },
            Faq {
                q: "How long is the certification valid?",
                a: "Typically one year subject to periodic monitoring.",
            },
            Faq {
                q: "Can certification support ESG reporting?",
                a: "Yes. Water neutrality strengthens environmental disclosures, \
                    sustainability reports, and investor perception.",
            },
        ],
    }
}
