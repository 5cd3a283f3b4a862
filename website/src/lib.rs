//! GreenCert website.
//!
//! Serves the certification catalog over HTTP and exports it as a directory
//! of static HTML. Both paths share [`router::dispatch`] and
//! [`renderer::render_view`], so an exported page is byte-identical to the
//! body the server returns for the same path.
//!
//! # Entry Points
//!
//! ```no_run
//! use std::path::PathBuf;
//! use greencert_website::{config::ServerConfig, generate, server};
//!
//! # async fn run() -> anyhow::Result<()> {
//! generate(&PathBuf::from("public"), "http://localhost:5000")?;
//! server::serve(ServerConfig::default()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Output Structure
//!
//! ```text
//! public/
//!   index.html
//!   certifications/index.html
//!   certification/<slug>/index.html   (one per certification)
//!   industries/index.html
//!   contact/index.html
//!   404.html
//!   sitemap.xml
//!   catalog.json
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod extractor;
pub mod model;
pub mod nav;
pub mod renderer;
pub mod router;
pub mod server;
pub mod writer;

use std::path::Path;

use anyhow::{Context, Result};
use greencert_catalog::serializer::json::to_json;
use greencert_catalog::Catalog;

use renderer::render_sitemap;
use router::{dispatch, site_paths, Dispatch};

/// File name of the exported not-found page.
pub const NOT_FOUND_FILE: &str = "404.html";
/// File name of the exported catalog data.
pub const CATALOG_FILE: &str = "catalog.json";
/// File name of the exported sitemap.
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// Exports the complete site into `out_dir`, returning the number of pages
/// written.
///
/// `base_url` prefixes the sitemap locations.
///
/// # Errors
///
/// Returns an error if any file cannot be written or the catalog cannot be
/// serialized.
pub fn generate(out_dir: &Path, base_url: &str) -> Result<usize> {
    let catalog = Catalog::full();
    let paths = site_paths(catalog);

    for path in &paths {
        let html = dispatch(catalog, path).render();
        writer::write(&writer::route_file(out_dir, path), &html)?;
    }

    writer::write(&out_dir.join(NOT_FOUND_FILE), &Dispatch::not_found().render())?;

    writer::write(&out_dir.join(SITEMAP_FILE), &render_sitemap(base_url, &paths))?;

    let json = serde_json::to_string_pretty(&to_json(catalog))
        .context("Failed to serialize catalog")?;
    writer::write(&out_dir.join(CATALOG_FILE), &json)?;

    let pages = paths.len() + 1;
    tracing::info!(out = %out_dir.display(), pages, "site exported");
    Ok(pages)
}
