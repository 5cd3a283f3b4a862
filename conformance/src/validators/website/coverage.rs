//! Website coverage validator.
//!
//! Verifies that the export covers the whole catalog:
//! - every routable path has a page
//! - `404.html` and `sitemap.xml` are present
//! - `catalog.json` lists every certification slug

use std::path::Path;

use anyhow::{Context, Result};
use greencert_catalog::Catalog;
use greencert_website::router::site_paths;
use greencert_website::writer::route_file;
use greencert_website::{CATALOG_FILE, NOT_FOUND_FILE, SITEMAP_FILE};
use serde_json::Value;

use crate::report::{CheckResult, ConformanceReport, Severity};

const VALIDATOR: &str = "website/coverage";

/// Validates that `artifacts` holds a page for every route and the support files.
///
/// # Errors
///
/// Returns an error if `catalog.json` exists but cannot be read or parsed.
pub fn validate(artifacts: &Path, catalog: &Catalog) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let paths = site_paths(catalog);
    let total = paths.len();
    let missing: Vec<String> = paths
        .into_iter()
        .filter(|path| !route_file(artifacts, path).is_file())
        .collect();
    report.push(CheckResult::from_problems(
        VALIDATOR,
        format!("All {total} routes have an exported page"),
        format!("{} route(s) missing from export", missing.len()),
        Severity::Failure,
        missing,
    ));

    for name in [NOT_FOUND_FILE, SITEMAP_FILE] {
        if artifacts.join(name).is_file() {
            report.push(CheckResult::pass(VALIDATOR, format!("{name} present")));
        } else {
            report.push(CheckResult::fail(VALIDATOR, format!("{name} not found")));
        }
    }

    check_catalog_json(artifacts, catalog, &mut report)?;
    Ok(report)
}

fn check_catalog_json(artifacts: &Path, catalog: &Catalog, report: &mut ConformanceReport) -> Result<()> {
    let path = artifacts.join(CATALOG_FILE);
    if !path.is_file() {
        report.push(CheckResult::fail(VALIDATOR, format!("{CATALOG_FILE} not found")));
        return Ok(());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {CATALOG_FILE}"))?;

    let missing: Vec<String> = catalog
        .slugs()
        .filter(|slug| !value["certifications"][*slug].is_object())
        .map(str::to_string)
        .collect();
    report.push(CheckResult::from_problems(
        VALIDATOR,
        format!("All {} certifications present in {CATALOG_FILE}", catalog.len()),
        format!("{} certification(s) missing from {CATALOG_FILE}", missing.len()),
        Severity::Failure,
        missing,
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_site_is_complete() {
        let dir = tempfile::tempdir().expect("tempdir");
        greencert_website::generate(dir.path(), "http://localhost:5000").expect("generate");
        let report = validate(dir.path(), Catalog::full()).expect("validate");
        assert!(report.all_passed(), "{:?}", report.results);
    }

    #[test]
    fn missing_detail_page_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        greencert_website::generate(dir.path(), "http://localhost:5000").expect("generate");
        std::fs::remove_file(dir.path().join("certification/esg-rating/index.html")).expect("remove");
        let report = validate(dir.path(), Catalog::full()).expect("validate");
        let failure = report
            .results
            .iter()
            .find(|r| r.is_failure())
            .expect("a failure");
        assert_eq!(failure.details, vec!["/certification/esg-rating".to_string()]);
    }

    #[test]
    fn empty_directory_reports_every_artifact() {
        let dir = tempfile::tempdir().expect("tempdir");
        let report = validate(dir.path(), Catalog::full()).expect("validate");
        assert_eq!(report.summary().failed, 4);
    }
}
