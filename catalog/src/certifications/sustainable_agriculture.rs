//! `sustainable-agriculture`: Sustainable Agriculture Certification.
//!
//! Adopt environmentally responsible, resource-efficient, and socially ethical
//! farming practices.
//!
//! **Category:** `industry`.

use crate::model::{Category, Certification, Faq, ItemGroup, Level, ProcessStep, Tier};

/// Returns the `sustainable-agriculture` certification record.
#[must_use]
pub fn certification() -> Certification {
    Certification {
        slug: "sustainable-agriculture",
        title: "Sustainable Agriculture Certification",
        category: Category::Industry,
        icon: "wheat",
        short: "Adopt environmentally responsible, resource-efficient, and socially ethical \
                farming practices.",
        applicable: "Sustainable Agriculture Compliance Certification is designed for farms, \
                     agribusinesses, and agricultural supply chains that aim to adopt \
                     environmentally responsible, resource-efficient, and socially ethical \
                     farming practices.",
        suitable_for: &[
            "Individual Farmers & Farmer Producer Organizations (FPOs)",
            "Commercial Farms & Plantation Owners",
            "Agri-Exporters & Food Processing Companies",
            "Organic & Natural Farming Units",
            "Dairy, Poultry & Livestock Operations",
            "Agri-Cooperatives & Contract Farming Networks",
            "Seed Producers & Input Companies",
            "Agritech & Sustainable Farming Startups",
        ],
        applicable_note: "Any agricultural entity seeking to improve soil health, resource \
                          efficiency, and market credibility can apply.",
        criteria: &[
            ItemGroup {
                title: "Environmental Sustainability",
                items: &[
                    "Soil health management practices",
                    "Responsible fertilizer and pesticide usage",
                    "Water conservation and irrigation efficiency",
                    "Biodiversity protection and ecosystem care",
                    "Climate-resilient farming practices",
                ],
            },
            ItemGroup {
                title: "Resource Efficiency",
                items: &[
                    "Efficient water usage and irrigation systems",
                    "Renewable energy usage where applicable",
                    "Waste management and composting systems",
                    "Sustainable crop rotation and land use",
                ],
            },
            ItemGroup {
                title: "Social & Ethical Practices",
                items: &[
                    "Fair labour practices and worker welfare",
                    "Safe handling of agro-chemicals",
                    "Community engagement and rural development",
                    "Traceability and ethical sourcing",
                ],
            },
            ItemGroup {
                title: "Compliance & Governance",
                items: &[
                    "Compliance with agricultural and environmental regulations",
                    "Record-keeping and farm monitoring systems",
                    "Traceability and supply chain transparency",
                ],
            },
        ],
        criteria_note: "Farms receive a sustainability score reflecting their environmental \
                        and operational performance.",
        process: &[
            ProcessStep {
                step: "Application",
                desc: "Farm or agribusiness submits operational details, crop information, \
                       and farming practices.",
            },
            ProcessStep {
                step: "Documentation Review",
                desc: "Evaluation of farm records, input usage, irrigation methods, and \
                       compliance documents.",
            },
            ProcessStep {
                step: "Field Assessment",
                desc: "Experts conduct farm visit and land assessment, soil and water \
                       management evaluation, review of chemical usage, and worker safety \
                       assessment.",
            },
            ProcessStep {
                step: "Scoring & Gap Analysis",
                desc: "The farm receives a sustainability performance scorecard with \
                       improvement recommendations.",
            },
            ProcessStep {
                step: "Certification Committee Review",
                desc: "Independent panel validates findings and approves certification.",
            },
            ProcessStep {
                step: "Certification Issuance",
                desc: "Approved farms receive Sustainable Agriculture Certificate, Digital \
                       Badge, and authorization to use certification mark.",
            },
            ProcessStep {
                step: "Periodic Monitoring",
                desc: "Annual review ensures continued compliance with sustainable farming \
                       practices.",
            },
        ],
        benefits: &[
            ItemGroup {
                title: "Environmental Benefits",
                items: &[
                    "Improves soil fertility and long-term farm productivity",
                    "Reduces water consumption and chemical impact",
                    "Protects biodiversity and local ecosystems",
                ],
            },
            ItemGroup {
                title: "Business Benefits",
                items: &[
                    "Enhances export credibility and buyer trust",
                    "Improves access to sustainable and premium markets",
                    "Strengthens eligibility for agri-financing and sustainability programs",
                ],
            },
            ItemGroup {
                title: "Brand & Market Benefits",
                items: &[
                    "Builds trust with consumers and global buyers",
                    "Demonstrates responsible farming practices",
                    "Supports traceability and sustainable sourcing claims",
                ],
            },
            ItemGroup {
                title: "Compliance Benefits",
                items: &[
                    "Strengthens regulatory compliance and documentation",
                    "Reduces environmental and reputational risks",
                    "Supports ESG reporting for agri-supply chains",
                ],
            },
        ],
        levels: [
            Level {
                tier: Tier::Bronze,
                label: "Responsible Farm",
                score: "",
                focus: "Regulatory compliance and record-keeping",
                desc: "Farm meets basic compliance and monitoring standards.",
            },
            Level {
                tier: Tier::Silver,
                label: "Sustainable Farm",
                score: "",
                focus: "Efficiency, reduced chemical impact, conservation",
                desc: "Farm implements structured soil, water, and resource management \
                       practices.",
            },
            Level {
                tier: Tier::Gold,
                label: "Advanced Sustainable Farm",
                score: "",
                focus: "Biodiversity protection, renewable inputs, traceability",
                desc: "Farm integrates strong ecological and resource-efficient farming \
                       practices.",
            },
            Level {
                tier: Tier::Platinum,
                label: "Regenerative Agriculture Leader",
                score: "",
                focus: "Soil restoration, ecosystem enhancement, climate-positive farming",
                desc: "Farm demonstrates industry-leading sustainable and regenerative \
                       practices.",
            },
        ],
        faq: &[
            Faq {
                q: "What is Sustainable Agriculture Compliance Certification?",
                a: "It validates that a farm or agribusiness follows environmentally \
                    responsible, resource-efficient, and ethical farming practices.",
            },
            Faq {
                q: "Is this certification the same as organic certification?",
                a: "No. Organic certification focuses on chemical-free farming, while \
                    sustainable agriculture certification evaluates broader environmental, \
                    social, and operational sustainability.",
            },
            Faq {
                q: "Can small farmers apply?",
                a: "Yes. Individual farmers, cooperatives, and FPOs can all apply.",
            },
            Faq {
                q: "Does certification require farm inspection?",
                a: "Yes. Field visits are usually conducted to verify farming practices and \
                    compliance.",
            },
            Faq {
                q: "Can certification help with exports?",
                a: "Yes. Many international buyers prefer sustainably sourced agricultural \
                    products.",
            },
        ],
    }
}
