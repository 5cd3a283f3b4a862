//! `sustainable-product`: Sustainable Product Certification.
//!
//! Demonstrate that products are environmentally responsible, ethically
//! sourced, and resource-efficient.
//!
//! **Category:** `product`.

use crate::model::{Category, Certification, Faq, ItemGroup, Level, ProcessStep, Tier};

/// Returns the `sustainable-product` certification record.
#[must_use]
pub fn certification() -> Certification {
    Certification {
        slug: "sustainable-product",
        title: "Sustainable Product Certification",
        category: Category::Product,
        icon: "package",
        short: "Demonstrate that products are environmentally responsible, ethically sourced, \
                and resource-efficient.",
        applicable: "Sustainable Product Certification is designed for manufacturers, brands, \
                     and exporters who want to demonstrate that their products are \
                     environmentally responsible, ethically sourced, and resource-efficient \
                     throughout their lifecycle.",
        suitable_for: &[
            "Manufacturing Companies",
            "Consumer Goods Brands",
            "Export-Oriented Units",
            "Packaging Manufacturers",
            "Textile & Apparel Companies",
            "FMCG & Retail Brands",
            "Construction Material Producers",
            "Furniture & Home Product Manufacturers",
            "Startups launching eco-friendly products",
        ],
        applicable_note: "Any business that wants to showcase product-level sustainability \
                          and gain market credibility can apply.",
        criteria: &[
            ItemGroup {
                title: "Environmental Impact",
                items: &[
                    "Raw material sourcing practices",
                    "Use of recycled or renewable materials",
                    "Energy efficiency in manufacturing",
                    "Waste generation and recyclability",
                    "Packaging sustainability",
                ],
            },
            ItemGroup {
                title: "Production Practices",
                items: &[
                    "Resource efficiency in production",
                    "Pollution control measures",
                    "Water usage management",
                    "Compliance with environmental norms",
                ],
            },
            ItemGroup {
                title: "Ethical & Social Responsibility",
                items: &[
                    "Ethical sourcing of materials",
                    "Safe working conditions in production",
                    "Compliance with labour regulations",
                    "Responsible supply chain practices",
                ],
            },
            ItemGroup {
                title: "Product Lifecycle & End-of-Life",
                items: &[
                    "Durability and product life",
                    "Recyclability or biodegradability",
                    "Circular economy compatibility",
                    "Disposal impact",
                ],
            },
        ],
        criteria_note: "Products receive a sustainability score based on standardized \
                        evaluation benchmarks.",
        process: &[
            ProcessStep {
                step: "Application",
                desc: "Manufacturer submits product details, materials information, and \
                       production process overview.",
            },
            ProcessStep {
                step: "Documentation Review",
                desc: "Evaluation of sourcing records, production practices, environmental \
                       compliance, and packaging details.",
            },
            ProcessStep {
                step: "Product Sustainability Assessment",
                desc: "Experts review material composition, manufacturing impact, supply \
                       chain practices, and product lifecycle sustainability.",
            },
            ProcessStep {
                step: "Testing & Validation",
                desc: "Independent lab tests or supplier verification may be conducted where \
                       necessary.",
            },
            ProcessStep {
                step: "Scoring & Review",
                desc: "Product receives a sustainability score and evaluation report.",
            },
            ProcessStep {
                step: "Certification Issuance",
                desc: "Approved products receive Sustainable Product Certificate, Eco Product \
                       Label/Badge, and authorization to use certification mark on packaging.",
            },
            ProcessStep {
                step: "Periodic Review",
                desc: "Certification remains valid for a defined period subject to compliance \
                       checks.",
            },
        ],
        benefits: &[
            ItemGroup {
                title: "Environmental Benefits",
                items: &[
                    "Encourages responsible production practices",
                    "Promotes resource-efficient manufacturing",
                    "Reduces environmental footprint of products",
                ],
            },
            ItemGroup {
                title: "Market & Brand Benefits",
                items: &[
                    "Builds consumer trust and transparency",
                    "Differentiates product in competitive markets",
                    "Supports eco-conscious branding and packaging claims",
                    "Enhances export acceptance",
                ],
            },
            ItemGroup {
                title: "Business Benefits",
                items: &[
                    "Improves access to sustainability-focused retailers",
                    "Supports ESG reporting at product level",
                    "Increases attractiveness to global buyers",
                ],
            },
            ItemGroup {
                title: "Compliance Benefits",
                items: &[
                    "Supports environmental labelling requirements",
                    "Preparedness for future product sustainability regulations",
                    "Reduces greenwashing risks through independent validation",
                ],
            },
        ],
        levels: [
            Level {
                tier: Tier::Bronze,
                label: "Responsible Product",
                score: "",
                focus: "Compliance and initial sustainability efforts",
                desc: "Product meets basic environmental and compliance requirements.",
            },
            Level {
                tier: Tier::Silver,
                label: "Sustainable Product",
                score: "",
                focus: "Resource efficiency and responsible sourcing",
                desc: "Product demonstrates measurable improvements in materials, packaging, \
                       or manufacturing efficiency.",
            },
            Level {
                tier: Tier::Gold,
                label: "Advanced Sustainable Product",
                score: "",
                focus: "Circular design, recyclable materials, reduced emissions",
                desc: "Product integrates strong lifecycle sustainability practices and \
                       reduced environmental footprint.",
            },
            Level {
                tier: Tier::Platinum,
                label: "Eco-Leader Product",
                score: "",
                focus: "Innovation-driven sustainability leadership",
                desc: "Product sets industry benchmark in sustainability, circular economy \
                       design, and environmental impact reduction.",
            },
        ],
        faq: &[
            Faq {
                q: "What is Sustainable Product Certification?",
                a: "It validates that a product meets defined environmental, ethical, and \
                    lifecycle sustainability standards.",
            },
            Faq {
                q: "Is certification applicable to all products?",
                a: "Yes, provided sufficient data on materials, manufacturing, and lifecycle \
                    impact is available.",
            },
            Faq {
                q: "Does certification require lab testing?",
                a: "Testing may be required for certain materials, environmental claims, or \
                    compliance verification.",
            },
            Faq {
                q: "Can certification help with exports?",
                a: "Yes. Sustainability certification improves acceptance in international \
                    markets where eco-standards are increasingly required.",
            },
            Faq {
                q: "Can companies certify multiple products?",
                a: "Yes. Each product or product line can be certified separately.",
            },
            Faq {
                q: "Can the certification mark be used on packaging?",
                a: "Yes. Certified products receive permission to display the certification \
                    logo on packaging and marketing materials.",
            },
        ],
    }
}
