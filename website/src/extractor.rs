//! Builds view models from catalog data.

use greencert_catalog::{CategoryGroup, Certification};

use crate::model::{BreadcrumbItem, CategorySection, CertificationCard};
use crate::router::{CERTIFICATIONS_PATH, HOME_PATH};

/// Resolves category groups to sections of certification cards.
///
/// Group slugs are looked up in `certifications`. A slug with no matching
/// record is skipped and logged; the conformance suite is where dangling
/// references are rejected.
#[must_use]
pub fn category_sections(
    categories: &[CategoryGroup],
    certifications: &[Certification],
) -> Vec<CategorySection> {
    categories
        .iter()
        .map(|group| CategorySection {
            id: group.id,
            title: group.title,
            desc: group.desc,
            cards: group
                .certs
                .iter()
                .filter_map(|slug| {
                    let found = certifications.iter().find(|c| c.slug == *slug);
                    if found.is_none() {
                        tracing::warn!(group = group.id, slug, "category references unknown slug");
                    }
                    found.map(CertificationCard::from)
                })
                .collect(),
        })
        .collect()
}

/// Builds cards for every certification, in catalog order.
#[must_use]
pub fn certification_cards(certifications: &[Certification]) -> Vec<CertificationCard> {
    certifications.iter().map(CertificationCard::from).collect()
}

/// Builds breadcrumbs for the home page.
#[must_use]
pub fn home_breadcrumbs() -> Vec<BreadcrumbItem> {
    vec![crumb("Home", "")]
}

/// Builds breadcrumbs for a top-level page such as the listing or contact.
#[must_use]
pub fn page_breadcrumbs(label: &str) -> Vec<BreadcrumbItem> {
    vec![crumb("Home", HOME_PATH), crumb(label, "")]
}

/// Builds breadcrumbs for a certification detail page.
#[must_use]
pub fn certification_breadcrumbs(title: &str) -> Vec<BreadcrumbItem> {
    vec![
        crumb("Home", HOME_PATH),
        crumb("Certifications", CERTIFICATIONS_PATH),
        crumb(title, ""),
    ]
}

fn crumb(label: &str, url: &str) -> BreadcrumbItem {
    BreadcrumbItem {
        label: label.to_string(),
        url: url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greencert_catalog::Catalog;

    fn catalog_sections(catalog: &Catalog) -> Vec<CategorySection> {
        category_sections(catalog.categories(), catalog.certifications())
    }

    #[test]
    fn sections_follow_group_order() {
        let sections = catalog_sections(Catalog::full());
        let ids: Vec<_> = sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, ["esg", "environmental", "industry", "product"]);
        let product: Vec<_> = sections[3].cards.iter().map(|c| c.slug).collect();
        assert_eq!(
            product,
            ["sustainable-product", "sustainable-packaging", "green-business"]
        );
    }

    #[test]
    fn sections_cover_every_certification() {
        let catalog = Catalog::full();
        let total: usize = catalog_sections(catalog).iter().map(|s| s.cards.len()).sum();
        assert_eq!(total, catalog.len());
    }

    #[test]
    fn dangling_slugs_are_skipped() {
        let group = CategoryGroup {
            id: "product",
            title: "Products",
            desc: "",
            certs: &["green-business", "missing"],
        };
        let sections = category_sections(&[group], Catalog::full().certifications());
        assert_eq!(sections[0].cards.len(), 1);
        assert_eq!(sections[0].cards[0].url, "/certification/green-business");
    }
}
