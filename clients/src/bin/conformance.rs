//! `greencert-conformance`: validates the catalog and an exported website.
//!
//! Runs the conformance suite across:
//! - Catalog data (inventory, group integrity, level order)
//! - Website artifacts (HTML structure, route coverage, internal links)
//!
//! **Usage:**
//! ```
//! greencert-conformance [--artifacts <path>]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use greencert_conformance::{run_all, ArtifactPaths};

/// Run the GreenCert conformance suite.
#[derive(Parser)]
#[command(
    name = "greencert-conformance",
    about = "Validate the GreenCert catalog and exported website"
)]
struct Args {
    /// Path to the exported website (default: public/).
    #[arg(long, default_value = "public")]
    artifacts: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let report = run_all(&ArtifactPaths {
        artifacts: args.artifacts,
    })?;

    println!("GreenCert Conformance Report");
    println!("============================");
    println!();

    for result in &report.results {
        println!("{result}");
    }

    let summary = report.summary();
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        summary.passed, summary.warned, summary.failed
    );

    if !report.all_passed() {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", summary.failed);
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
