//! `sustainable-supply-chain`: Sustainable Supply Chain Certification.
//!
//! Ensure responsible sourcing, ethical procurement, and environmentally
//! conscious logistics.
//!
//! **Category:** `industry`.

use crate::model::{Category, Certification, Faq, ItemGroup, Level, ProcessStep, Tier};

/// Returns the `sustainable-supply-chain` certification record.
#[must_use]
pub fn certification() -> Certification {
    Certification {
        slug: "sustainable-supply-chain",
        title: "Sustainable Supply Chain Certification",
        category: Category::Industry,
        icon: "link",
        short: "Ensure responsible sourcing, ethical procurement, and environmentally \
                conscious logistics.",
        applicable: "Sustainable Supply Chain Certification is designed for organizations \
                     that want to ensure responsible sourcing, ethical procurement, and \
                     environmentally conscious logistics across their supplier network.",
        suitable_for: &[
            "Manufacturing Companies with multi-tier suppliers",
            "Export-Oriented Businesses",
            "Retail Chains & Consumer Brands",
            "Infrastructure & Construction Companies",
            "FMCG & Apparel Companies",
            "E-commerce and Logistics Firms",
            "Automotive & Electronics Supply Networks",
            "Corporates with ESG reporting requirements",
        ],
        applicable_note: "Any organization seeking to improve transparency, reduce risk, and \
                          build resilient supply chains can apply.",
        criteria: &[
            ItemGroup {
                title: "Environmental Responsibility",
                items: &[
                    "Sustainable sourcing policies",
                    "Supplier environmental compliance",
                    "Carbon footprint monitoring across logistics",
                    "Packaging and material sustainability",
                    "Transport efficiency initiatives",
                ],
            },
            ItemGroup {
                title: "Social & Ethical Standards",
                items: &[
                    "Labour compliance across suppliers",
                    "Workplace safety in supply chain operations",
                    "Ethical sourcing and anti-child labour practices",
                    "Fair wage and diversity policies",
                    "Supplier code of conduct implementation",
                ],
            },
            ItemGroup {
                title: "Governance & Risk Controls",
                items: &[
                    "Supplier due diligence processes",
                    "ESG risk screening mechanisms",
                    "Transparency in procurement practices",
                    "Anti-corruption and ethical procurement policies",
                    "Supply chain traceability systems",
                ],
            },
        ],
        criteria_note: "Organizations receive a structured score reflecting supply chain \
                        sustainability maturity.",
        process: &[
            ProcessStep {
                step: "Application",
                desc: "Organization submits procurement structure, supplier network overview, \
                       and sourcing policies.",
            },
            ProcessStep {
                step: "Documentation Review",
                desc: "Evaluation of supplier policies, ESG guidelines, procurement \
                       contracts, and logistics data.",
            },
            ProcessStep {
                step: "Supply Chain Assessment",
                desc: "Experts conduct supplier governance evaluation, procurement policy \
                       review, logistics sustainability analysis, and supplier sampling.",
            },
            ProcessStep {
                step: "Risk & Gap Analysis",
                desc: "The organization receives a supply chain sustainability scorecard with \
                       improvement recommendations.",
            },
            ProcessStep {
                step: "Certification Committee Review",
                desc: "Independent panel validates the findings.",
            },
            ProcessStep {
                step: "Certification Issuance",
                desc: "Approved organizations receive Sustainable Supply Chain Certificate, \
                       Digital Badge, and Listing in public registry.",
            },
            ProcessStep {
                step: "Periodic Monitoring",
                desc: "Annual review ensures continued compliance and supplier governance.",
            },
        ],
        benefits: &[
            ItemGroup {
                title: "Environmental Benefits",
                items: &[
                    "Encourages eco-friendly sourcing",
                    "Reduces logistics-related emissions",
                    "Promotes sustainable material usage",
                ],
            },
            ItemGroup {
                title: "Business Benefits",
                items: &[
                    "Reduces supplier-related operational risks",
                    "Improves supply chain resilience",
                    "Enhances vendor credibility in global markets",
                    "Strengthens eligibility for international contracts",
                ],
            },
            ItemGroup {
                title: "Brand Benefits",
                items: &[
                    "Demonstrates ethical sourcing commitment",
                    "Builds trust with customers and investors",
                    "Supports sustainability reporting",
                ],
            },
            ItemGroup {
                title: "Compliance Benefits",
                items: &[
                    "Alignment with ESG supply chain requirements",
                    "Preparedness for international due diligence norms",
                    "Reduced reputational and legal risks",
                ],
            },
        ],
        levels: [
            Level {
                tier: Tier::Bronze,
                label: "Responsible Supply Chain",
                score: "",
                focus: "Foundational governance and monitoring",
                desc: "Basic supplier policies and compliance checks in place.",
            },
            Level {
                tier: Tier::Silver,
                label: "Managed Supply Chain",
                score: "",
                focus: "Supplier audits, traceability, sustainability reporting",
                desc: "Structured ESG criteria applied to supplier selection and monitoring.",
            },
            Level {
                tier: Tier::Gold,
                label: "Sustainable Supply Chain",
                score: "",
                focus: "Responsible sourcing, carbon tracking, supplier engagement",
                desc: "Strong ESG integration across procurement, sourcing, and logistics.",
            },
            Level {
                tier: Tier::Platinum,
                label: "Supply Chain Leader",
                score: "",
                focus: "End-to-end traceability and strategic ESG integration",
                desc: "Industry-leading transparency, ethical sourcing systems, and \
                       sustainable logistics innovation.",
            },
        ],
        faq: &[
            Faq {
                q: "What is Sustainable Supply Chain Certification?",
                a: "It validates that an organization manages its sourcing, procurement, and \
                    logistics responsibly using ESG-aligned practices.",
            },
            Faq {
                q: "Does certification require supplier audits?",
                a: "In some cases yes. Supplier sampling or documentation verification may be \
                    conducted.",
            },
            Faq {
                q: "Is certification useful for exporters?",
                a: "Yes. Many global buyers expect ethical sourcing and transparent supply \
                    chains.",
            },
            Faq {
                q: "Can small companies apply?",
                a: "Yes. Even MSMEs with limited suppliers can benefit by implementing \
                    structured procurement policies.",
            },
            Faq {
                q: "How long does certification take?",
                a: "Typically 4-8 weeks depending on supply chain complexity.",
            },
        ],
    }
}
