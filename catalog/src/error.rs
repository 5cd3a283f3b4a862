//! Catalog lookup errors.

use thiserror::Error;

/// Errors returned by catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No certification has the requested slug.
    #[error("no certification with slug `{slug}`")]
    NotFound {
        /// The slug that was requested, verbatim.
        slug: String,
    },
    /// A category name outside `product | environmental | esg | industry`.
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
}
