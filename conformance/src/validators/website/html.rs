//! HTML structure validator for the exported website.
//!
//! Every `.html` file must carry:
//! - a `<title>` element
//! - `<nav>`, `<main>`, and `<footer>` landmarks
//! - a `lang` attribute on `<html>`

use std::path::Path;

use anyhow::{Context, Result};

use super::html_files;
use crate::report::{CheckResult, ConformanceReport, Severity};

const VALIDATOR: &str = "website/html";

/// Validates the structure of every exported page.
///
/// # Errors
///
/// Returns an error if an HTML file cannot be read.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    if !artifacts.exists() {
        report.push(CheckResult::warn(
            VALIDATOR,
            "Artifacts directory not found, skipping HTML validation",
        ));
        return Ok(report);
    }

    let mut issues = Vec::new();
    let pages = html_files(artifacts);
    for (rel_path, path) in &pages {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        issues.extend(check_html_structure(rel_path, &content));
    }

    if pages.is_empty() {
        report.push(CheckResult::warn(VALIDATOR, "No HTML files found in artifacts directory"));
        return Ok(report);
    }

    report.push(CheckResult::from_problems(
        VALIDATOR,
        format!("All {} HTML pages pass structural validation", pages.len()),
        format!("HTML structure issues across {} pages checked", pages.len()),
        Severity::Failure,
        issues,
    ));
    Ok(report)
}

/// Returns one issue per missing structural element in `content`.
#[must_use]
pub fn check_html_structure(path: &str, content: &str) -> Vec<String> {
    let lower = content.to_lowercase();
    [
        ("<title", "missing <title> element"),
        ("<main", "missing <main> element"),
        ("<nav", "missing <nav> element"),
        ("<footer", "missing <footer> element"),
        ("<html lang=", "<html> missing lang attribute"),
    ]
    .iter()
    .filter(|(needle, _)| !lower.contains(needle))
    .map(|(_, issue)| format!("{path}: {issue}"))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_each_missing_landmark() {
        let issues = check_html_structure("x.html", "<html><title>t</title><main></main></html>");
        assert_eq!(
            issues,
            vec![
                "x.html: missing <nav> element",
                "x.html: missing <footer> element",
                "x.html: <html> missing lang attribute",
            ]
        );
    }
}
