//! `green-manufacturing`: Green Manufacturing Certification.
//!
//! Reduce environmental impact, improve resource efficiency, and adopt
//! sustainable manufacturing practices.
//!
//! **Category:** `industry`.

use crate::model::{Category, Certification, Faq, ItemGroup, Level, ProcessStep, Tier};

/// Returns the `green-manufacturing` certification record.
#[must_use]
pub fn certification() -> Certification {
    Certification {
        slug: "green-manufacturing",
        title: "Green Manufacturing Certification",
        category: Category::Industry,
        icon: "factory",
        short: "Reduce environmental impact, improve resource efficiency, and adopt \
                sustainable manufacturing practices.",
        applicable: "Green Manufacturing Certification is designed for industrial units and \
                     production facilities that aim to reduce environmental impact, improve \
                     resource efficiency, and adopt sustainable manufacturing practices.",
        suitable_for: &[
            "Small, Medium, and Large Manufacturing Units",
            "Engineering & Industrial Plants",
            "Textile & Garment Manufacturers",
            "Food Processing Units",
            "Chemical & Pharmaceutical Plants",
            "Automotive & Component Manufacturers",
            "Packaging & Plastic Units",
            "Electronics & Electrical Manufacturers",
        ],
        applicable_note: "Any manufacturing organization seeking efficient, compliant, and \
                          sustainable operations can apply.",
        criteria: &[
            ItemGroup {
                title: "Environmental Performance",
                items: &[
                    "Energy consumption and efficiency",
                    "Renewable energy adoption",
                    "Emission control systems",
                    "Waste generation and disposal practices",
                    "Water consumption and recycling",
                ],
            },
            ItemGroup {
                title: "Production Efficiency",
                items: &[
                    "Resource utilization efficiency",
                    "Process optimization",
                    "Lean manufacturing practices",
                    "Material waste reduction",
                    "Sustainable procurement policies",
                ],
            },
            ItemGroup {
                title: "Pollution & Compliance",
                items: &[
                    "Air, water, and soil pollution control",
                    "Hazardous waste handling systems",
                    "Compliance with environmental regulations",
                    "Environmental monitoring and reporting",
                ],
            },
            ItemGroup {
                title: "Workplace Sustainability",
                items: &[
                    "Worker health and safety systems",
                    "Occupational safety compliance",
                    "Training and awareness programs",
                    "Responsible supply chain practices",
                ],
            },
        ],
        criteria_note: "Facilities receive a sustainability score based on structured \
                        evaluation benchmarks.",
        process: &[
            ProcessStep {
                step: "Application",
                desc: "Submission of plant details, production processes, and environmental \
                       compliance information.",
            },
            ProcessStep {
                step: "Documentation Review",
                desc: "Evaluation of energy data, environmental permits, safety policies, and \
                       waste management practices.",
            },
            ProcessStep {
                step: "Plant Sustainability Audit",
                desc: "Experts conduct site inspection, process evaluation, resource \
                       efficiency assessment, and compliance verification.",
            },
            ProcessStep {
                step: "Scoring & Gap Analysis",
                desc: "The facility receives a sustainability performance report with \
                       improvement recommendations.",
            },
            ProcessStep {
                step: "Certification Review",
                desc: "Independent certification committee validates findings.",
            },
            ProcessStep {
                step: "Certification Issuance",
                desc: "Successful facilities receive Green Manufacturing Certificate, Digital \
                       Badge, and authorization to use certification seal.",
            },
            ProcessStep {
                step: "Periodic Monitoring",
                desc: "Annual review or surveillance audit ensures continued compliance.",
            },
        ],
        benefits: &[
            ItemGroup {
                title: "Environmental Benefits",
                items: &[
                    "Reduced energy, water, and resource consumption",
                    "Lower emissions and environmental impact",
                    "Improved waste recycling and pollution control",
                ],
            },
            ItemGroup {
                title: "Business Benefits",
                items: &[
                    "Cost savings through efficiency improvements",
                    "Better eligibility for global supply chains",
                    "Increased attractiveness to ESG investors",
                    "Improved tender qualification",
                ],
            },
            ItemGroup {
                title: "Brand Benefits",
                items: &[
                    "Demonstrates responsible manufacturing practices",
                    "Builds trust with customers and stakeholders",
                    "Enhances export competitiveness",
                ],
            },
            ItemGroup {
                title: "Compliance Benefits",
                items: &[
                    "Strengthens environmental compliance systems",
                    "Reduces regulatory risks and penalties",
                    "Preparedness for future sustainability regulations",
                ],
            },
        ],
        levels: [
            Level {
                tier: Tier::Bronze,
                label: "Compliant Facility",
                score: "",
                focus: "Regulatory compliance and monitoring",
                desc: "Facility meets basic environmental compliance requirements.",
            },
            Level {
                tier: Tier::Silver,
                label: "Efficient Facility",
                score: "",
                focus: "Efficiency, waste reduction, monitoring systems",
                desc: "Facility demonstrates resource efficiency improvements and structured \
                       sustainability practices.",
            },
            Level {
                tier: Tier::Gold,
                label: "Sustainable Manufacturing Facility",
                score: "",
                focus: "Renewable adoption, optimized processes, environmental leadership",
                desc: "Facility integrates strong sustainability measures across energy, \
                       water, and processes.",
            },
            Level {
                tier: Tier::Platinum,
                label: "Green Leader Facility",
                score: "",
                focus: "Innovation, circular production, long-term sustainability strategy",
                desc: "Facility demonstrates industry-leading sustainable manufacturing \
                       practices and measurable environmental impact reduction.",
            },
        ],
        faq: &[
            Faq {
                q: "What is Green Manufacturing Certification?",
                a: "It validates that a manufacturing facility operates using environmentally \
                    responsible, efficient, and compliant production practices.",
            },
            Faq {
                q: "Does certification require a plant visit?",
                a: "Yes. Site inspection is usually required to assess operational practices \
                    and environmental controls.",
            },
            Faq {
                q: "Can small factories apply?",
                a: "Yes. MSMEs can benefit significantly by improving efficiency and \
                    compliance.",
            },
            Faq {
                q: "Will certification help with exports?",
                a: "Yes. Many international buyers prefer certified sustainable manufacturing \
                    partners.",
            },
            Faq {
                q: "How long does certification take?",
                a: "Typically 4-8 weeks depending on facility size and data availability.",
            },
            Faq {
                q: "How long is certification valid?",
                a: "Usually one year, subject to periodic review.",
            },
        ],
    }
}
