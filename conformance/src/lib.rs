//! GreenCert conformance suite.
//!
//! Validates the in-memory catalog and an exported copy of the website.
//!
//! # Conformance Scope
//!
//! | Component | Checks |
//! |-----------|--------|
//! | Catalog inventory | 14 certifications, 4 groups, 7 industries, slug shape, required fields |
//! | Catalog integrity | group references resolve, each certification in exactly one group |
//! | Certification levels | Bronze, Silver, Gold, Platinum in order |
//! | Website | HTML landmarks, internal links, route coverage, `catalog.json` |
//!
//! # Entry Point
//!
//! ```no_run
//! use greencert_conformance::{run_all, ArtifactPaths};
//! use std::path::PathBuf;
//!
//! let paths = ArtifactPaths {
//!     artifacts: PathBuf::from("public"),
//! };
//! let report = run_all(&paths).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use greencert_catalog::Catalog;

pub use report::{CheckResult, ConformanceReport, Severity, Summary};

/// Paths required by the conformance runner.
pub struct ArtifactPaths {
    /// Directory holding the exported website (index.html, catalog.json, etc.)
    pub artifacts: std::path::PathBuf,
}

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Catalog inventory
/// 2. Catalog integrity
/// 3. Certification levels
/// 4. Website HTML structure, coverage, links
///
/// # Errors
///
/// Returns an error only if a file system operation fails.
pub fn run_all(paths: &ArtifactPaths) -> anyhow::Result<ConformanceReport> {
    let catalog = Catalog::full();
    let mut report = ConformanceReport::new();

    // 1-3. Catalog (no file I/O)
    report.extend(validators::catalog::inventory::validate(catalog));
    report.extend(validators::catalog::integrity::validate(catalog));
    report.extend(validators::catalog::levels::validate(catalog));

    // 4. Website
    report.extend(validators::website::html::validate(&paths.artifacts)?);
    report.extend(validators::website::coverage::validate(&paths.artifacts, catalog)?);
    report.extend(validators::website::links::validate(&paths.artifacts)?);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exported_site_conforms() {
        let dir = tempfile::tempdir().expect("tempdir");
        greencert_website::generate(dir.path(), "http://localhost:5000").expect("generate");
        let report = run_all(&ArtifactPaths {
            artifacts: dir.path().to_path_buf(),
        })
        .expect("run_all");
        let failures: Vec<String> = report
            .results
            .iter()
            .filter(|r| r.is_failure())
            .map(ToString::to_string)
            .collect();
        assert!(failures.is_empty(), "{failures:#?}");
    }

    #[test]
    fn broken_link_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        greencert_website::generate(dir.path(), "http://localhost:5000").expect("generate");
        std::fs::remove_dir_all(dir.path().join("industries")).expect("remove");
        let report = run_all(&ArtifactPaths {
            artifacts: dir.path().to_path_buf(),
        })
        .expect("run_all");
        let links = report
            .results
            .iter()
            .find(|r| r.validator == "website/links")
            .expect("links result");
        assert!(links.is_failure());
        assert!(links.details.iter().any(|d| d.ends_with("→ /industries")));
    }
}
