//! Category groups for the certifications listing.
//!
//! Groups are a display convenience. A certification's own
//! [`category`](crate::Certification::category) field is authoritative; the
//! groups below reference certifications by slug only.

use crate::model::CategoryGroup;

/// Returns the category groups in display order.
#[must_use]
pub fn groups() -> Vec<CategoryGroup> {
    vec![
        CategoryGroup {
            id: "esg",
            title: "ESG & Compliance Certifications",
            desc: "Environmental, Social, and Governance compliance and reporting \
                   certifications.",
            certs: &[
                "esg-compliance",
                "esg-rating",
                "brsr-compliance",
                "csr-impact",
            ],
        },
        CategoryGroup {
            id: "environmental",
            title: "Environmental Certifications",
            desc: "Certifications focused on carbon, water, and environmental impact \
                   management.",
            certs: &[
                "carbon-neutral",
                "water-neutral",
            ],
        },
        CategoryGroup {
            id: "industry",
            title: "Industry Certifications",
            desc: "Sector-specific sustainability certifications for manufacturing, real \
                   estate, hospitality, agriculture, and supply chains.",
            certs: &[
                "green-manufacturing",
                "sustainable-supply-chain",
                "green-real-estate",
                "green-hospitality",
                "sustainable-agriculture",
            ],
        },
        CategoryGroup {
            id: "product",
            title: "Product & Resource Certifications",
            desc: "Product-level and resource-focused sustainability certifications.",
            certs: &[
                "sustainable-product",
                "sustainable-packaging",
                "green-business",
            ],
        },
    ]
}
