//! View-model types for the website.

use greencert_catalog::Certification;
use serde::Serialize;

/// A breadcrumb navigation item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    /// Display label.
    pub label: String,
    /// URL (empty for the current page).
    pub url: String,
}

/// A primary navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display label.
    pub label: &'static str,
    /// Root-relative URL.
    pub url: &'static str,
}

/// Card shown wherever a certification is listed rather than detailed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificationCard {
    /// Catalog slug.
    pub slug: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Symbolic icon name.
    pub icon: &'static str,
    /// One-sentence summary.
    pub short: &'static str,
    /// URL of the detail page.
    pub url: String,
}

/// A category group with its slugs resolved to cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySection {
    /// Group identifier, used as the section anchor.
    pub id: &'static str,
    /// Heading.
    pub title: &'static str,
    /// Description.
    pub desc: &'static str,
    /// Member certifications in group order.
    pub cards: Vec<CertificationCard>,
}

impl From<&Certification> for CertificationCard {
    fn from(cert: &Certification) -> Self {
        Self {
            slug: cert.slug,
            title: cert.title,
            icon: cert.icon,
            short: cert.short,
            url: crate::router::certification_path(cert.slug),
        }
    }
}
