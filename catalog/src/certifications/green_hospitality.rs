//! `green-hospitality`: Green Hospitality Certification.
//!
//! Operate hotels, resorts, and hospitality businesses in an environmentally
//! responsible manner.
//!
//! **Category:** `industry`.

use crate::model::{Category, Certification, Faq, ItemGroup, Level, ProcessStep, Tier};

/// Returns the `green-hospitality` certification record.
#[must_use]
pub fn certification() -> Certification {
    Certification {
        slug: "green-hospitality",
        title: "Green Hospitality Certification",
        category: Category::Industry,
        icon: "hotel",
        short: "Operate hotels, resorts, and hospitality businesses in an environmentally \
                responsible manner.",
        applicable: "Green Hospitality Certification is designed for hotels, resorts, \
                     restaurants, and hospitality businesses that aim to operate in an \
                     environmentally responsible, resource-efficient, and socially \
                     responsible manner.",
        suitable_for: &[
            "Hotels & Resorts",
            "Boutique Hotels & Homestays",
            "Restaurants & Cafes",
            "Banquet & Event Venues",
            "Tourism & Eco-Resorts",
            "Cruise & Travel Hospitality Operators",
            "Corporate Guest Houses",
            "Wellness Retreats & Spas",
        ],
        applicable_note: "Any hospitality business seeking to reduce environmental impact and \
                          enhance sustainability credibility can apply.",
        criteria: &[
            ItemGroup {
                title: "Energy & Environmental Management",
                items: &[
                    "Energy-efficient lighting and equipment",
                    "Renewable energy adoption (solar, etc.)",
                    "Carbon footprint monitoring",
                    "Sustainable building operations",
                ],
            },
            ItemGroup {
                title: "Water Management",
                items: &[
                    "Water-efficient fixtures",
                    "Laundry water optimization",
                    "Rainwater harvesting systems",
                    "Wastewater treatment and reuse",
                ],
            },
            ItemGroup {
                title: "Waste & Resource Management",
                items: &[
                    "Food waste reduction practices",
                    "Recycling and composting systems",
                    "Sustainable procurement policies",
                    "Reduction of single-use plastics",
                ],
            },
            ItemGroup {
                title: "Social Responsibility & Guest Awareness",
                items: &[
                    "Staff sustainability training",
                    "Community sourcing and local employment",
                    "Guest awareness initiatives (towel reuse, etc.)",
                    "Ethical sourcing of food and materials",
                ],
            },
            ItemGroup {
                title: "Governance & Compliance",
                items: &[
                    "Environmental compliance and monitoring",
                    "Sustainability reporting systems",
                    "Health and safety standards",
                ],
            },
        ],
        criteria_note: "Hotels receive a sustainability score reflecting operational and \
                        environmental performance.",
        process: &[
            ProcessStep {
                step: "Application",
                desc: "Hospitality business submits operational details, infrastructure \
                       information, and sustainability practices.",
            },
            ProcessStep {
                step: "Documentation Review",
                desc: "Evaluation of energy use, procurement practices, waste management, and \
                       compliance records.",
            },
            ProcessStep {
                step: "Sustainability Assessment",
                desc: "Experts conduct operational evaluation, infrastructure review, and \
                       guest service sustainability practices assessment.",
            },
            ProcessStep {
                step: "Site Inspection",
                desc: "Physical verification of systems, waste handling, water management, \
                       and energy efficiency measures.",
            },
            ProcessStep {
                step: "Scoring & Certification Review",
                desc: "The establishment receives a sustainability performance score.",
            },
            ProcessStep {
                step: "Certification Issuance",
                desc: "Approved establishments receive Green Hospitality Certificate, Digital \
                       Badge, and authorization to display certification seal.",
            },
            ProcessStep {
                step: "Periodic Monitoring",
                desc: "Annual review ensures continued sustainability compliance.",
            },
        ],
        benefits: &[
            ItemGroup {
                title: "Environmental Benefits",
                items: &[
                    "Reduced energy and water consumption",
                    "Lower waste generation and environmental impact",
                    "Improved sustainable sourcing practices",
                ],
            },
            ItemGroup {
                title: "Business Benefits",
                items: &[
                    "Cost savings from efficient resource use",
                    "Increased appeal to eco-conscious travelers",
                    "Higher corporate and international bookings",
                    "Better eligibility for sustainable tourism programs",
                ],
            },
            ItemGroup {
                title: "Brand Benefits",
                items: &[
                    "Demonstrates responsible tourism practices",
                    "Enhances reputation and trust",
                    "Differentiates property from competitors",
                ],
            },
            ItemGroup {
                title: "Compliance Benefits",
                items: &[
                    "Supports environmental and safety compliance",
                    "Reduces operational risks",
                    "Strengthens ESG reporting credibility",
                ],
            },
        ],
        levels: [
            Level {
                tier: Tier::Bronze,
                label: "Responsible Hospitality Property",
                score: "",
                focus: "Compliance and monitoring",
                desc: "Basic sustainability practices and compliance measures in place.",
            },
            Level {
                tier: Tier::Silver,
                label: "Sustainable Hospitality Property",
                score: "",
                focus: "Resource efficiency, waste reduction, guest engagement",
                desc: "Structured sustainability initiatives implemented with measurable \
                       efficiency improvements.",
            },
            Level {
                tier: Tier::Gold,
                label: "Green Hospitality Leader",
                score: "",
                focus: "Renewable adoption, responsible sourcing, environmental leadership",
                desc: "Strong sustainability integration across operations and infrastructure.",
            },
            Level {
                tier: Tier::Platinum,
                label: "Eco-Leader Hospitality Property",
                score: "",
                focus: "Net-zero potential, circular operations, sustainability innovation",
                desc: "Industry-leading sustainable hospitality practices and measurable \
                       environmental impact reduction.",
            },
        ],
        faq: &[
            Faq {
                q: "What is Green Hospitality Certification?",
                a: "It validates that a hospitality establishment operates using \
                    environmentally responsible, efficient, and sustainable practices.",
            },
            Faq {
                q: "Can small hotels or homestays apply?",
                a: "Yes. Certification is suitable for businesses of all sizes.",
            },
            Faq {
                q: "Does certification require site inspection?",
                a: "Yes. Physical inspection is typically conducted to verify sustainability \
                    measures.",
            },
            Faq {
                q: "Will certification help attract international guests?",
                a: "Yes. Many travelers and corporate clients prefer environmentally \
                    responsible accommodations.",
            },
            Faq {
                q: "How long does certification take?",
                a: "Usually 4-8 weeks depending on property size and documentation readiness.",
            },
        ],
    }
}
