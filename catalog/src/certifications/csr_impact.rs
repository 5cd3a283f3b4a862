//! `csr-impact`: CSR Impact Certification.
//!
//! Validate the effectiveness and impact of your Corporate Social
//! Responsibility initiatives.
//!
//! **Category:** `esg`.

use crate::model::{Category, Certification, Faq, ItemGroup, Level, ProcessStep, Tier};

/// Returns the `csr-impact` certification record.
#[must_use]
pub fn certification() -> Certification {
    Certification {
        slug: "csr-impact",
        title: "CSR Impact Certification",
        category: Category::Esg,
        icon: "heart",
        short: "Validate the effectiveness and impact of your Corporate Social Responsibility \
                initiatives.",
        applicable: "CSR Impact Certification validates the effectiveness, transparency, and \
                     social impact of an organization's Corporate Social Responsibility \
                     programs.",
        suitable_for: &[
            "Companies with mandatory CSR obligations",
            "Corporates running CSR programs",
            "NGOs and implementation partners",
            "CSR foundations and trusts",
            "Companies seeking CSR credibility",
        ],
        applicable_note: "Any organization seeking to validate and enhance the impact of its \
                          CSR programs can apply.",
        criteria: &[
            ItemGroup {
                title: "Program Design & Alignment",
                items: &[
                    "CSR policy and strategy",
                    "Alignment with SDGs and national priorities",
                    "Stakeholder needs assessment",
                    "Program planning and budgeting",
                ],
            },
            ItemGroup {
                title: "Implementation Quality",
                items: &[
                    "Execution effectiveness",
                    "Community engagement",
                    "Partner management",
                    "Resource utilization",
                ],
            },
            ItemGroup {
                title: "Impact Measurement",
                items: &[
                    "Outcome tracking and reporting",
                    "Beneficiary feedback systems",
                    "Social impact metrics",
                    "Long-term sustainability of initiatives",
                ],
            },
            ItemGroup {
                title: "Governance & Transparency",
                items: &[
                    "CSR committee oversight",
                    "Financial transparency",
                    "Compliance with Section 135",
                    "Public reporting and disclosures",
                ],
            },
        ],
        criteria_note: "CSR programs are evaluated for design quality, implementation \
                        effectiveness, and measurable social impact.",
        process: &[
            ProcessStep {
                step: "Application",
                desc: "Organization submits CSR program details and impact data.",
            },
            ProcessStep {
                step: "Documentation Review",
                desc: "Evaluation of CSR policies, budgets, and program documentation.",
            },
            ProcessStep {
                step: "Impact Assessment",
                desc: "Expert evaluation of program outcomes, beneficiary impact, and social \
                       value.",
            },
            ProcessStep {
                step: "Scoring & Review",
                desc: "Program receives impact score and evaluation report.",
            },
            ProcessStep {
                step: "Certification Issuance",
                desc: "Approved organizations receive CSR Impact Certificate and Digital \
                       Badge.",
            },
            ProcessStep {
                step: "Annual Review",
                desc: "Periodic review ensures continued CSR effectiveness.",
            },
        ],
        benefits: &[
            ItemGroup {
                title: "Social Benefits",
                items: &[
                    "Validates community impact",
                    "Encourages effective CSR programs",
                    "Supports sustainable development goals",
                ],
            },
            ItemGroup {
                title: "Business Benefits",
                items: &[
                    "Enhances stakeholder trust",
                    "Improves CSR reporting credibility",
                    "Demonstrates social commitment",
                ],
            },
            ItemGroup {
                title: "Brand Benefits",
                items: &[
                    "Positive public perception",
                    "Differentiates from competitors",
                    "Attracts socially conscious partners",
                ],
            },
            ItemGroup {
                title: "Compliance Benefits",
                items: &[
                    "Section 135 compliance support",
                    "Improved CSR governance",
                    "Transparent impact reporting",
                ],
            },
        ],
        levels: [
            Level {
                tier: Tier::Bronze,
                label: "CSR Compliant",
                score: "",
                focus: "Basic CSR implementation",
                desc: "Organization meets mandatory CSR requirements.",
            },
            Level {
                tier: Tier::Silver,
                label: "CSR Effective",
                score: "",
                focus: "Structured programs with measurable outcomes",
                desc: "Organization demonstrates structured and effective CSR programs.",
            },
            Level {
                tier: Tier::Gold,
                label: "CSR Leader",
                score: "",
                focus: "High-impact sustainable programs",
                desc: "Organization shows strong social impact and community engagement.",
            },
            Level {
                tier: Tier::Platinum,
                label: "CSR Champion",
                score: "",
                focus: "Transformative social impact",
                desc: "Organization sets benchmarks in CSR effectiveness and innovation.",
            },
        ],
        faq: &[
            Faq {
                q: "What is CSR Impact Certification?",
                a: "It validates that an organization's CSR programs are well-designed, \
                    effectively implemented, and create measurable social impact.",
            },
            Faq {
                q: "Is CSR certification mandatory?",
                a: "No, but it enhances credibility and transparency of CSR programs.",
            },
            Faq {
                q: "Can NGOs apply?",
                a: "Yes. NGOs and CSR implementation partners can also seek certification for \
                    their programs.",
            },
            Faq {
                q: "How long does certification take?",
                a: "Typically 4-6 weeks depending on program complexity.",
            },
        ],
    }
}
