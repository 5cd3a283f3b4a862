//! Industry descriptors.

use crate::model::Industry;

/// Returns the industry descriptors in display order.
#[must_use]
pub fn industries() -> Vec<Industry> {
    vec![
        Industry {
            name: "Manufacturing",
            icon: "factory",
            desc: "Green Manufacturing Certification helps industrial units reduce \
                   environmental impact, improve resource efficiency, and adopt sustainable \
                   production practices.",
        },
        Industry {
            name: "Real Estate",
            icon: "building",
            desc: "Green Real Estate Certification supports developers and property owners in \
                   building and operating environmentally responsible, energy-efficient \
                   structures.",
        },
        Industry {
            name: "Hospitality",
            icon: "hotel",
            desc: "Green Hospitality Certification enables hotels, resorts, and restaurants \
                   to operate sustainably while enhancing guest experience.",
        },
        Industry {
            name: "Agriculture",
            icon: "wheat",
            desc: "Sustainable Agriculture Certification helps farms and agribusinesses adopt \
                   resource-efficient, ethical, and climate-resilient farming practices.",
        },
        Industry {
            name: "Logistics & Supply Chain",
            icon: "truck",
            desc: "Sustainable Supply Chain Certification ensures responsible sourcing, \
                   ethical procurement, and environmentally conscious logistics.",
        },
        Industry {
            name: "Corporates & Services",
            icon: "briefcase",
            desc: "ESG and Green Business Certifications help corporate offices and service \
                   companies demonstrate sustainability commitment and compliance readiness.",
        },
        Industry {
            name: "Export Businesses",
            icon: "globe",
            desc: "Sustainability certifications strengthen export credibility, meet \
                   international buyer expectations, and open access to global green markets.",
        },
    ]
}
