//! `sustainable-packaging`: Sustainable Packaging Certification.
//!
//! Reduce environmental impact through responsible material selection and
//! lifecycle-conscious packaging.
//!
//! **Category:** `product`.

use crate::model::{Category, Certification, Faq, ItemGroup, Level, ProcessStep, Tier};

/// Returns the `sustainable-packaging` certification record.
#[must_use]
pub fn certification() -> Certification {
    Certification {
        slug: "sustainable-packaging",
        title: "Sustainable Packaging Certification",
        category: Category::Product,
        icon: "box",
        short: "Reduce environmental impact through responsible material selection and \
                lifecycle-conscious packaging.",
        applicable: "Sustainable Packaging Certification is designed for manufacturers, \
                     brands, and packaging suppliers that aim to reduce environmental impact \
                     through responsible material selection, efficient design, and \
                     lifecycle-conscious packaging solutions.",
        suitable_for: &[
            "FMCG & Consumer Product Brands",
            "Food & Beverage Manufacturers",
            "E-commerce & Retail Companies",
            "Packaging Manufacturers & Converters",
            "Pharmaceutical & Cosmetic Companies",
            "Export-Oriented Businesses",
            "Logistics & Distribution Companies",
            "Startups launching eco-friendly products",
        ],
        applicable_note: "Any organization seeking to improve packaging sustainability and \
                          reduce waste footprint can apply.",
        criteria: &[
            ItemGroup {
                title: "Material Sustainability",
                items: &[
                    "Use of recyclable or biodegradable materials",
                    "Use of recycled content",
                    "Reduction of virgin plastic usage",
                    "Sustainable sourcing of packaging materials",
                ],
            },
            ItemGroup {
                title: "Design Efficiency",
                items: &[
                    "Lightweight packaging design",
                    "Minimal material usage",
                    "Space-efficient logistics design",
                    "Reusability or refillability options",
                ],
            },
            ItemGroup {
                title: "Waste & Circularity",
                items: &[
                    "Ease of recyclability",
                    "Compostability where applicable",
                    "Reverse logistics or take-back programs",
                    "Compatibility with circular economy practices",
                ],
            },
            ItemGroup {
                title: "Compliance & Labelling",
                items: &[
                    "Environmental labelling accuracy",
                    "Compliance with packaging regulations",
                    "Waste management and disposal guidance",
                    "Traceability of packaging materials",
                ],
            },
        ],
        criteria_note: "Packaging receives a sustainability score based on structured \
                        evaluation benchmarks.",
        process: &[
            ProcessStep {
                step: "Application",
                desc: "Organization submits packaging specifications, material composition, \
                       and supply chain information.",
            },
            ProcessStep {
                step: "Documentation Review",
                desc: "Evaluation of material sourcing, recyclability data, compliance \
                       records, and packaging design details.",
            },
            ProcessStep {
                step: "Packaging Sustainability Assessment",
                desc: "Experts review material lifecycle impact, production footprint, \
                       logistics efficiency, and end-of-life recyclability.",
            },
            ProcessStep {
                step: "Testing & Validation",
                desc: "Independent lab tests or supplier verification may be conducted for \
                       material claims.",
            },
            ProcessStep {
                step: "Scoring & Certification Review",
                desc: "Packaging system receives a sustainability score and evaluation report.",
            },
            ProcessStep {
                step: "Certification Issuance",
                desc: "Approved organizations receive Sustainable Packaging Certificate, Eco \
                       Packaging Label/Badge, and authorization to display certification \
                       mark.",
            },
            ProcessStep {
                step: "Periodic Review",
                desc: "Certification remains valid for a defined period subject to compliance \
                       verification.",
            },
        ],
        benefits: &[
            ItemGroup {
                title: "Environmental Benefits",
                items: &[
                    "Reduces packaging waste and landfill impact",
                    "Encourages recyclable and circular packaging solutions",
                    "Lowers material and transport emissions",
                ],
            },
            ItemGroup {
                title: "Business Benefits",
                items: &[
                    "Improves efficiency in logistics and storage",
                    "Supports compliance with global packaging regulations",
                    "Enhances attractiveness to sustainability-focused retailers",
                    "Strengthens eligibility for export markets",
                ],
            },
            ItemGroup {
                title: "Brand Benefits",
                items: &[
                    "Builds consumer trust and transparency",
                    "Supports eco-friendly product positioning",
                    "Differentiates brand in competitive markets",
                ],
            },
            ItemGroup {
                title: "Compliance Benefits",
                items: &[
                    "Preparedness for extended producer responsibility (EPR) norms",
                    "Reduced regulatory risks",
                    "Supports ESG and sustainability reporting",
                ],
            },
        ],
        levels: [
            Level {
                tier: Tier::Bronze,
                label: "Responsible Packaging",
                score: "",
                focus: "Compliance and initial sustainability measures",
                desc: "Packaging meets basic environmental compliance and recyclability \
                       standards.",
            },
            Level {
                tier: Tier::Silver,
                label: "Sustainable Packaging",
                score: "",
                focus: "Reduced plastic use, recyclable design",
                desc: "Packaging demonstrates improved material efficiency and recyclability.",
            },
            Level {
                tier: Tier::Gold,
                label: "Advanced Sustainable Packaging",
                score: "",
                focus: "Reusable, compostable, or low-carbon materials",
                desc: "Packaging integrates circular economy principles and significant \
                       environmental impact reduction.",
            },
            Level {
                tier: Tier::Platinum,
                label: "Circular Packaging Leader",
                score: "",
                focus: "Closed-loop systems, zero-waste design, material innovation",
                desc: "Packaging demonstrates industry-leading innovation in circular design \
                       and minimal environmental footprint.",
            },
        ],
        faq: &[
            Faq {
                q: "What is Sustainable Packaging Certification?",
                a: "It validates that packaging systems are environmentally responsible, \
                    efficient, and aligned with lifecycle sustainability standards.",
            },
            Faq {
                q: "Can individual products be certified?",
                a: "Yes. Packaging for specific products or product lines can be assessed \
                    separately.",
            },
            Faq {
                q: "Does certification require lab testing?",
                a: "Testing may be required where environmental claims or material properties \
                    need verification.",
            },
            Faq {
                q: "Can certification help with exports?",
                a: "Yes. Many global markets require sustainable packaging compliance.",
            },
            Faq {
                q: "How long does certification take?",
                a: "Typically 3-6 weeks depending on packaging complexity.",
            },
            Faq {
                q: "Can the certification label be used on packaging?",
                a: "Yes. Certified packaging systems can display the certification mark.",
            },
        ],
    }
}
