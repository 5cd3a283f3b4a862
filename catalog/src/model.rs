//! Core catalog model types.
//!
//! These types represent the certification catalog as typed Rust data. Every
//! text field borrows from `'static` literals; the top-level collections are
//! owned `Vec`s built once by [`Catalog::full()`](crate::Catalog::full).

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::CatalogError;

/// The fixed set of certification categories.
///
/// Each [`Certification`] carries its own category; [`CategoryGroup`]s are a
/// separate display grouping and are not authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// Product-level and resource-focused certifications.
    Product,
    /// Carbon, water, and environmental-impact certifications.
    Environmental,
    /// Environmental, Social, and Governance compliance and reporting.
    Esg,
    /// Sector-specific certifications.
    Industry,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 4] = [
        Category::Product,
        Category::Environmental,
        Category::Esg,
        Category::Industry,
    ];

    /// Returns the lowercase identifier used in data and URLs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Product => "product",
            Category::Environmental => "environmental",
            Category::Esg => "esg",
            Category::Industry => "industry",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// Certification tier, ascending in stringency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Tier {
    /// Entry tier.
    Bronze,
    /// Second tier.
    Silver,
    /// Third tier.
    Gold,
    /// Highest tier.
    Platinum,
}

impl Tier {
    /// All tiers in ascending order.
    pub const ALL: [Tier; 4] = [Tier::Bronze, Tier::Silver, Tier::Gold, Tier::Platinum];

    /// Returns the display name of the tier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A titled list of bullet items. Used for both criteria and benefits.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ItemGroup {
    /// Group heading.
    pub title: &'static str,
    /// Items in display order.
    pub items: &'static [&'static str],
}

/// One step of the certification workflow narrative.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ProcessStep {
    /// Step name.
    pub step: &'static str,
    /// What happens during the step.
    pub desc: &'static str,
}

/// A certification level within a record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Level {
    /// Which of the four tiers this level is.
    #[cfg_attr(feature = "serde", serde(rename = "name"))]
    pub tier: Tier,
    /// Display label (e.g. `"Carbon Neutral Organization"`).
    pub label: &'static str,
    /// Score range as free text; may be empty.
    pub score: &'static str,
    /// Focus areas at this level.
    pub focus: &'static str,
    /// Description.
    pub desc: &'static str,
}

impl Level {
    /// Returns the tier name (`"Bronze"`, `"Silver"`, ...).
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.tier.as_str()
    }
}

/// A question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Faq {
    /// Question.
    pub q: &'static str,
    /// Answer.
    pub a: &'static str,
}

/// A certification offering. Immutable; keyed by [`slug`](Self::slug).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Certification {
    /// Unique URL-safe key.
    pub slug: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Owning category.
    pub category: Category,
    /// Symbolic icon name.
    pub icon: &'static str,
    /// One-sentence summary.
    pub short: &'static str,
    /// Eligibility description.
    pub applicable: &'static str,
    /// Target organization types, in display order.
    pub suitable_for: &'static [&'static str],
    /// Closing eligibility note.
    pub applicable_note: &'static str,
    /// Assessment criteria groups.
    pub criteria: &'static [ItemGroup],
    /// Note on how criteria are scored.
    pub criteria_note: &'static str,
    /// Certification workflow, in order.
    pub process: &'static [ProcessStep],
    /// Benefit groups.
    pub benefits: &'static [ItemGroup],
    /// Bronze, Silver, Gold, Platinum.
    pub levels: [Level; 4],
    /// Frequently asked questions.
    pub faq: &'static [Faq],
}

/// A display grouping of certification slugs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CategoryGroup {
    /// Group identifier (matches a [`Category`] name by convention).
    pub id: &'static str,
    /// Heading.
    pub title: &'static str,
    /// Description.
    pub desc: &'static str,
    /// Member slugs in display order.
    pub certs: &'static [&'static str],
}

/// An industry descriptor. Not linked to any certification.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Industry {
    /// Industry name.
    pub name: &'static str,
    /// Symbolic icon name.
    pub icon: &'static str,
    /// Description.
    pub desc: &'static str,
}

/// The complete catalog: certifications, category groups, and industries.
#[derive(Debug)]
pub struct Catalog {
    pub(crate) certifications: Vec<Certification>,
    pub(crate) index: HashMap<&'static str, usize>,
    pub(crate) categories: Vec<CategoryGroup>,
    pub(crate) industries: Vec<Industry>,
}

impl Catalog {
    /// Builds a catalog from its three collections.
    ///
    /// No cross-collection validation happens here: a group may reference a
    /// slug that is absent, and a slug may belong to zero or several groups.
    /// If two certifications share a slug, lookups return the first one.
    #[must_use]
    pub fn new(
        certifications: Vec<Certification>,
        categories: Vec<CategoryGroup>,
        industries: Vec<Industry>,
    ) -> Self {
        let mut index = HashMap::with_capacity(certifications.len());
        for (pos, cert) in certifications.iter().enumerate() {
            index.entry(cert.slug).or_insert(pos);
        }
        Self {
            certifications,
            index,
            categories,
            industries,
        }
    }

    /// Returns every certification in source insertion order.
    #[must_use]
    pub fn certifications(&self) -> &[Certification] {
        &self.certifications
    }

    /// Looks up a certification by its exact slug.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no certification has this slug.
    /// Matching is byte-exact: no case folding or trimming.
    pub fn get_by_slug(&self, slug: &str) -> Result<&Certification, CatalogError> {
        self.index
            .get(slug)
            .and_then(|&pos| self.certifications.get(pos))
            .ok_or_else(|| CatalogError::NotFound {
                slug: slug.to_string(),
            })
    }

    /// Returns true if a certification with this slug exists.
    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.index.contains_key(slug)
    }

    /// Iterates over all slugs in insertion order.
    pub fn slugs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.certifications.iter().map(|c| c.slug)
    }

    /// Returns the category groups in display order.
    #[must_use]
    pub fn categories(&self) -> &[CategoryGroup] {
        &self.categories
    }

    /// Returns the industry descriptors in display order.
    #[must_use]
    pub fn industries(&self) -> &[Industry] {
        &self.industries
    }

    /// Resolves a group's slugs to certifications, in the group's order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for the first slug that is not in
    /// the catalog.
    pub fn resolve_group(&self, group: &CategoryGroup) -> Result<Vec<&Certification>, CatalogError> {
        group.certs.iter().map(|slug| self.get_by_slug(slug)).collect()
    }

    /// Returns the total number of certifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.certifications.len()
    }

    /// Returns true if the catalog holds no certifications.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.certifications.is_empty()
    }
}
