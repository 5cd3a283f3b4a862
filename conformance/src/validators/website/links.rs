//! Internal link validator.
//!
//! Checks that every root-relative or relative `href` in the exported pages
//! points at a file in the export. Directory-style links such as
//! `/certification/esg-rating` resolve to `certification/esg-rating/index.html`.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

use super::html_files;
use crate::report::{CheckResult, ConformanceReport, Severity};

const VALIDATOR: &str = "website/links";

/// Validates internal links across all exported HTML files.
///
/// # Errors
///
/// Returns an error if an HTML file cannot be read.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    if !artifacts.exists() {
        report.push(CheckResult::warn(
            VALIDATOR,
            "Artifacts directory not found, skipping link check",
        ));
        return Ok(report);
    }

    let all_files: HashSet<String> = WalkDir::new(artifacts)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(artifacts)
                .unwrap_or(e.path())
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();

    let mut broken = Vec::new();
    for (rel_path, path) in html_files(artifacts) {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        let rel_dir = rel_path.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("");

        for href in extract_hrefs(&content) {
            if is_external(href) {
                continue;
            }
            let resolved = resolve_href(rel_dir, href);
            if !link_target_exists(&all_files, &resolved) {
                broken.push(format!("{rel_path}: broken link → {href}"));
            }
        }
    }

    report.push(CheckResult::from_problems(
        VALIDATOR,
        "No broken internal links in website",
        format!("{} broken internal link(s) in website", broken.len()),
        Severity::Failure,
        broken,
    ));
    Ok(report)
}

fn is_external(href: &str) -> bool {
    href.is_empty()
        || href.starts_with('#')
        || href.starts_with("http://")
        || href.starts_with("https://")
        || href.starts_with("//")
        || href.starts_with("mailto:")
}

/// Extracts all `href="..."` values from HTML, in document order.
#[must_use]
pub fn extract_hrefs(html: &str) -> Vec<&str> {
    let mut hrefs = Vec::new();
    let mut remaining = html;
    while let Some(idx) = remaining.find("href=\"") {
        remaining = &remaining[idx + 6..];
        let Some(end) = remaining.find('"') else {
            break;
        };
        hrefs.push(&remaining[..end]);
        remaining = &remaining[end + 1..];
    }
    hrefs
}

/// Resolves an href to a path relative to the export root, without fragment
/// or query.
#[must_use]
pub fn resolve_href(base_dir: &str, href: &str) -> String {
    let href = href.split(['#', '?']).next().unwrap_or(href);
    if let Some(rooted) = href.strip_prefix('/') {
        rooted.to_string()
    } else if base_dir.is_empty() {
        href.to_string()
    } else {
        format!("{base_dir}/{href}")
    }
}

fn link_target_exists(files: &HashSet<String>, resolved: &str) -> bool {
    if resolved.is_empty() {
        return files.contains("index.html");
    }
    let trimmed = resolved.trim_end_matches('/');
    files.contains(resolved) || files.contains(&format!("{trimmed}/index.html"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_hrefs_in_order() {
        let html = r##"<a href="/">a</a><a href="/certification/x#faq">b</a><a href="#top">c</a>"##;
        assert_eq!(extract_hrefs(html), vec!["/", "/certification/x#faq", "#top"]);
    }

    #[test]
    fn resolves_root_and_relative_links() {
        assert_eq!(resolve_href("certification/x", "/contact"), "contact");
        assert_eq!(resolve_href("certification", "x?ref=1"), "certification/x");
        assert_eq!(resolve_href("", "/"), "");
    }

    #[test]
    fn directory_links_resolve_to_index() {
        let files: HashSet<String> = ["index.html", "contact/index.html"]
            .into_iter()
            .map(String::from)
            .collect();
        assert!(link_target_exists(&files, ""));
        assert!(link_target_exists(&files, "contact"));
        assert!(link_target_exists(&files, "contact/"));
        assert!(!link_target_exists(&files, "industries"));
    }
}
