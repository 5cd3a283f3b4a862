//! `greencert-website`: exports the GreenCert website as static files.
//!
//! **Outputs (`public/`):**
//! - `index.html`: home page
//! - `certifications/index.html`: full listing grouped by category
//! - `certification/<slug>/index.html`: one detail page per certification
//! - `industries/index.html` and `contact/index.html`
//! - `404.html`: not-found page
//! - `sitemap.xml`: sitemap for crawlers
//! - `catalog.json`: the catalog data
//!
//! **Usage:**
//! ```
//! greencert-website [--out <path>] [--base-url <url>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use greencert_website::generate;
use tracing_subscriber::EnvFilter;

/// Export the GreenCert static website.
#[derive(Parser)]
#[command(
    name = "greencert-website",
    about = "Export the GreenCert website as static files"
)]
struct Args {
    /// Output directory for the generated website.
    #[arg(long, default_value = "public")]
    out: PathBuf,

    /// Absolute URL the site will be served from, used in the sitemap.
    #[arg(long, default_value = "http://localhost:5000")]
    base_url: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let pages = generate(&args.out, &args.base_url)?;

    println!("Website generated successfully.");
    println!("  Output: {}", args.out.display());
    println!("  Pages:  {pages}");

    Ok(())
}
