//! GreenCert certification catalog encoded as typed Rust data.
//!
//! The `greencert-catalog` crate provides every sustainability certification
//! the site presents (14 records), the category groups used to list them
//! (4 groups), and the industry descriptors (7 entries) as static Rust data,
//! along with a JSON serializer for the machine-readable export.
//!
//! # Entry Point
//!
//! ```
//! let catalog = greencert_catalog::Catalog::full();
//! assert_eq!(catalog.certifications().len(), 14);
//!
//! let cert = catalog.get_by_slug("carbon-neutral").expect("known slug");
//! assert_eq!(cert.title, "Carbon Neutral Certification");
//! assert!(catalog.get_by_slug("Carbon-Neutral").is_err());
//! ```
//!
//! # Serialization
//!
//! Requires the `serializers` feature (on by default).
//!
//! ```
//! # #[cfg(feature = "serializers")]
//! # {
//! let catalog = greencert_catalog::Catalog::full();
//! let json = greencert_catalog::serializer::json::to_json(catalog);
//! assert!(json["certifications"]["green-business"].is_object());
//! # }
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod categories;
pub mod certifications;
pub mod error;
pub mod industries;
pub mod model;
#[cfg(feature = "serializers")]
pub mod serializer;

pub use error::CatalogError;
pub use model::{
    Catalog, Category, CategoryGroup, Certification, Faq, Industry, ItemGroup, Level,
    ProcessStep, Tier,
};

impl Catalog {
    /// Returns the complete catalog.
    ///
    /// Built on first access and shared read-only for the rest of the
    /// process. Certification order is the order records are presented on
    /// the site:
    /// `green-business → carbon-neutral → water-neutral → esg-compliance →
    ///  esg-rating → brsr-compliance → csr-impact → green-manufacturing →
    ///  sustainable-supply-chain → green-real-estate → green-hospitality →
    ///  sustainable-agriculture → sustainable-product → sustainable-packaging`
    #[must_use]
    pub fn full() -> &'static Catalog {
        static CATALOG: std::sync::OnceLock<Catalog> = std::sync::OnceLock::new();
        CATALOG.get_or_init(|| {
            Catalog::new(
                vec![
                    certifications::green_business::certification(),
                    certifications::carbon_neutral::certification(),
                    certifications::water_neutral::certification(),
                    certifications::esg_compliance::certification(),
                    certifications::esg_rating::certification(),
                    certifications::brsr_compliance::certification(),
                    certifications::csr_impact::certification(),
                    certifications::green_manufacturing::certification(),
                    certifications::sustainable_supply_chain::certification(),
                    certifications::green_real_estate::certification(),
                    certifications::green_hospitality::certification(),
                    certifications::sustainable_agriculture::certification(),
                    certifications::sustainable_product::certification(),
                    certifications::sustainable_packaging::certification(),
                ],
                categories::groups(),
                industries::industries(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certification_count() {
        assert_eq!(Catalog::full().certifications().len(), 14);
    }

    #[test]
    fn category_group_count() {
        assert_eq!(Catalog::full().categories().len(), 4);
    }

    #[test]
    fn industry_count() {
        assert_eq!(Catalog::full().industries().len(), 7);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let slugs: Vec<_> = Catalog::full().slugs().collect();
        assert_eq!(
            slugs,
            vec![
                "green-business",
                "carbon-neutral",
                "water-neutral",
                "esg-compliance",
                "esg-rating",
                "brsr-compliance",
                "csr-impact",
                "green-manufacturing",
                "sustainable-supply-chain",
                "green-real-estate",
                "green-hospitality",
                "sustainable-agriculture",
                "sustainable-product",
                "sustainable-packaging",
            ]
        );
    }

    #[test]
    fn every_slug_resolves_to_itself() {
        let catalog = Catalog::full();
        for slug in catalog.slugs() {
            let cert = catalog.get_by_slug(slug);
            assert!(matches!(cert, Ok(c) if c.slug == slug), "lookup of {slug} failed");
        }
    }

    #[test]
    fn all_slugs_unique() {
        let mut seen = std::collections::HashSet::new();
        for slug in Catalog::full().slugs() {
            assert!(seen.insert(slug), "Duplicate slug: {slug}");
        }
    }

    #[test]
    fn lookup_is_exact() {
        let catalog = Catalog::full();
        for probe in ["Green-Business", " green-business", "green-business/", "green", ""] {
            assert_eq!(
                catalog.get_by_slug(probe),
                Err(CatalogError::NotFound {
                    slug: probe.to_string()
                }),
            );
        }
    }

    #[test]
    fn group_slugs_resolve() {
        let catalog = Catalog::full();
        for group in catalog.categories() {
            let resolved = catalog.resolve_group(group);
            assert!(resolved.is_ok(), "group {} has a dangling slug: {:?}", group.id, resolved);
        }
    }

    #[test]
    fn every_slug_in_exactly_one_group() {
        let catalog = Catalog::full();
        for slug in catalog.slugs() {
            let hits = catalog
                .categories()
                .iter()
                .filter(|g| g.certs.contains(&slug))
                .count();
            assert_eq!(hits, 1, "{slug} appears in {hits} groups");
        }
    }

    #[test]
    fn group_ids_agree_with_record_categories() {
        let catalog = Catalog::full();
        for group in catalog.categories() {
            let Ok(category) = group.id.parse::<Category>() else {
                continue;
            };
            for slug in group.certs {
                if let Ok(cert) = catalog.get_by_slug(slug) {
                    assert_eq!(cert.category, category, "{slug} listed under {}", group.id);
                }
            }
        }
    }

    #[test]
    fn levels_are_the_four_tiers_in_order() {
        for cert in Catalog::full().certifications() {
            let names: Vec<_> = cert.levels.iter().map(Level::name).collect();
            assert_eq!(names, ["Bronze", "Silver", "Gold", "Platinum"], "{}", cert.slug);
        }
    }

    #[test]
    fn category_parses_only_known_names() {
        assert_eq!("esg".parse::<Category>(), Ok(Category::Esg));
        assert_eq!("product".parse::<Category>(), Ok(Category::Product));
        assert!("ESG".parse::<Category>().is_err());
        assert!("retail".parse::<Category>().is_err());
    }

    #[test]
    fn first_slug_wins_on_duplicates() {
        let mut first = certifications::green_business::certification();
        first.title = "first";
        let mut second = certifications::green_business::certification();
        second.title = "second";
        let catalog = Catalog::new(vec![first, second], Vec::new(), Vec::new());
        assert_eq!(catalog.len(), 2);
        assert!(matches!(catalog.get_by_slug("green-business"), Ok(c) if c.title == "first"));
    }

    #[test]
    fn dangling_group_slug_is_reported() {
        let catalog = Catalog::new(
            vec![certifications::green_business::certification()],
            vec![CategoryGroup {
                id: "product",
                title: "Products",
                desc: "",
                certs: &["green-business", "missing-slug"],
            }],
            Vec::new(),
        );
        let err = catalog.resolve_group(&catalog.categories()[0]);
        assert_eq!(
            err,
            Err(CatalogError::NotFound {
                slug: "missing-slug".to_string()
            })
        );
    }
}
