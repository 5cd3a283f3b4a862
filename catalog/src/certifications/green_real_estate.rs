//! `green-real-estate`: Green Real Estate Certification.
//!
//! Construct, operate, or manage buildings in an environmentally responsible
//! and resource-efficient manner.
//!
//! **Category:** `industry`.

use crate::model::{Category, Certification, Faq, ItemGroup, Level, ProcessStep, Tier};

/// Returns the `green-real-estate` certification record.
#[must_use]
pub fn certification() -> Certification {
    Certification {
        slug: "green-real-estate",
        title: "Green Real Estate Certification",
        category: Category::Industry,
        icon: "building",
        short: "Construct, operate, or manage buildings in an environmentally responsible and \
                resource-efficient manner.",
        applicable: "Green Real Estate Certification is designed for developers, builders, \
                     and property owners who aim to construct, operate, or manage buildings \
                     in an environmentally responsible and resource-efficient manner.",
        suitable_for: &[
            "Residential Real Estate Projects",
            "Commercial Buildings & Office Parks",
            "IT Parks & Business Campuses",
            "Shopping Malls & Retail Complexes",
            "Hotels & Hospitality Projects",
            "Industrial Parks & Warehouses",
            "Educational Institutions & Hospitals",
            "Government & Infrastructure Projects",
        ],
        applicable_note: "Any project seeking sustainable design, efficient operations, and \
                          enhanced environmental performance can apply.",
        criteria: &[
            ItemGroup {
                title: "Environmental Design & Planning",
                items: &[
                    "Energy-efficient building design",
                    "Natural lighting and ventilation planning",
                    "Renewable energy integration (solar, etc.)",
                    "Heat island reduction strategies",
                ],
            },
            ItemGroup {
                title: "Water Management",
                items: &[
                    "Rainwater harvesting systems",
                    "Water-efficient fixtures",
                    "Wastewater treatment and reuse",
                    "Landscape water conservation",
                ],
            },
            ItemGroup {
                title: "Resource & Material Sustainability",
                items: &[
                    "Use of eco-friendly construction materials",
                    "Waste reduction during construction",
                    "Recyclable and low-impact materials",
                    "Sustainable procurement practices",
                ],
            },
            ItemGroup {
                title: "Indoor Environmental Quality",
                items: &[
                    "Air quality standards",
                    "Natural ventilation systems",
                    "Low-emission construction materials",
                    "Occupant health and comfort measures",
                ],
            },
            ItemGroup {
                title: "Governance & Compliance",
                items: &[
                    "Environmental approvals and compliance",
                    "Sustainable facility management practices",
                    "Monitoring and reporting systems",
                ],
            },
        ],
        criteria_note: "Projects receive a sustainability score reflecting overall green \
                        performance.",
        process: &[
            ProcessStep {
                step: "Application",
                desc: "Developer submits project details, architectural plans, and \
                       sustainability features.",
            },
            ProcessStep {
                step: "Design Review",
                desc: "Assessment of building plans, energy design, water systems, and \
                       material specifications.",
            },
            ProcessStep {
                step: "Construction/Operational Assessment",
                desc: "Experts evaluate implementation of sustainability measures during \
                       construction or operation.",
            },
            ProcessStep {
                step: "Site Inspection",
                desc: "Physical verification of systems, infrastructure, and environmental \
                       controls.",
            },
            ProcessStep {
                step: "Scoring & Certification Review",
                desc: "Project receives sustainability score and evaluation report.",
            },
            ProcessStep {
                step: "Certification Issuance",
                desc: "Successful projects receive Green Real Estate Certificate, Digital \
                       Badge for marketing, and authorization to use certification mark.",
            },
            ProcessStep {
                step: "Periodic Monitoring",
                desc: "Operational projects may undergo periodic review to maintain \
                       certification validity.",
            },
        ],
        benefits: &[
            ItemGroup {
                title: "Environmental Benefits",
                items: &[
                    "Reduced energy and water consumption",
                    "Lower operational carbon footprint",
                    "Sustainable resource utilization",
                ],
            },
            ItemGroup {
                title: "Business & Financial Benefits",
                items: &[
                    "Increased property valuation and market appeal",
                    "Higher occupancy and tenant preference",
                    "Operational cost savings through efficiency",
                    "Improved eligibility for green financing",
                ],
            },
            ItemGroup {
                title: "Brand & Market Benefits",
                items: &[
                    "Demonstrates commitment to sustainable development",
                    "Strengthens developer reputation",
                    "Enhances attractiveness to global investors and tenants",
                ],
            },
            ItemGroup {
                title: "Compliance Benefits",
                items: &[
                    "Supports environmental approvals and sustainability disclosures",
                    "Reduces regulatory risks",
                    "Preparedness for future green building norms",
                ],
            },
        ],
        levels: [
            Level {
                tier: Tier::Bronze,
                label: "Green Compliant Project",
                score: "",
                focus: "Regulatory compliance and initial sustainability practices",
                desc: "Project meets basic environmental compliance and efficiency measures.",
            },
            Level {
                tier: Tier::Silver,
                label: "Efficient Green Project",
                score: "",
                focus: "Energy, water, and material efficiency",
                desc: "Project demonstrates structured sustainability systems and measurable \
                       efficiency improvements.",
            },
            Level {
                tier: Tier::Gold,
                label: "Sustainable Green Project",
                score: "",
                focus: "Renewable adoption, resource optimization, environmental leadership",
                desc: "Project integrates strong green design and operational sustainability \
                       measures.",
            },
            Level {
                tier: Tier::Platinum,
                label: "Green Landmark Project",
                score: "",
                focus: "Net-zero potential, smart infrastructure, long-term sustainability \
                        strategy",
                desc: "Project demonstrates industry-leading sustainability performance and \
                       innovation.",
            },
        ],
        faq: &[
            Faq {
                q: "What is Green Real Estate Certification?",
                a: "It validates that a building or real estate project is designed, \
                    constructed, and operated using environmentally responsible practices.",
            },
            Faq {
                q: "Can existing buildings apply?",
                a: "Yes. Both new and operational buildings can be assessed and certified.",
            },
            Faq {
                q: "Does certification require site inspection?",
                a: "Yes. Site inspection is typically conducted to verify sustainability \
                    measures.",
            },
            Faq {
                q: "Will certification improve property value?",
                a: "Yes. Certified green buildings often attract higher occupancy, better \
                    tenants, and improved investor interest.",
            },
            Faq {
                q: "How long does certification take?",
                a: "Usually 6-10 weeks depending on project size and documentation readiness.",
            },
        ],
    }
}
