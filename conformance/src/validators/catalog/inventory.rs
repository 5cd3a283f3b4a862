//! Catalog inventory validator.
//!
//! Verifies:
//! - 14 certifications, 4 category groups, 7 industries
//! - slugs are unique and URL-safe
//! - every record has its required text and lists filled in

use std::collections::HashSet;

use greencert_catalog::{Catalog, Certification};

use crate::report::{CheckResult, ConformanceReport, Severity};

const VALIDATOR: &str = "catalog/inventory";

/// Expected number of certifications.
pub const EXPECTED_CERTIFICATIONS: usize = 14;
/// Expected number of category groups.
pub const EXPECTED_CATEGORIES: usize = 4;
/// Expected number of industries.
pub const EXPECTED_INDUSTRIES: usize = 7;

/// Validates collection sizes, slug shape, and field completeness.
#[must_use]
pub fn validate(catalog: &Catalog) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    check_count(&mut report, "certifications", catalog.len(), EXPECTED_CERTIFICATIONS);
    check_count(&mut report, "category groups", catalog.categories().len(), EXPECTED_CATEGORIES);
    check_count(&mut report, "industries", catalog.industries().len(), EXPECTED_INDUSTRIES);

    let mut seen = HashSet::new();
    let mut slug_problems = Vec::new();
    for slug in catalog.slugs() {
        if !seen.insert(slug) {
            slug_problems.push(format!("{slug}: duplicate slug"));
        }
        if !is_url_safe(slug) {
            slug_problems.push(format!("{slug}: not a lowercase hyphenated slug"));
        }
    }
    report.push(CheckResult::from_problems(
        VALIDATOR,
        "All slugs are unique and URL-safe",
        format!("{} slug problem(s)", slug_problems.len()),
        Severity::Failure,
        slug_problems,
    ));

    let field_problems: Vec<String> = catalog
        .certifications()
        .iter()
        .flat_map(missing_fields)
        .collect();
    report.push(CheckResult::from_problems(
        VALIDATOR,
        "All certification records are complete",
        format!("{} empty required field(s)", field_problems.len()),
        Severity::Failure,
        field_problems,
    ));

    report
}

fn check_count(report: &mut ConformanceReport, what: &str, actual: usize, expected: usize) {
    if actual == expected {
        report.push(CheckResult::pass(VALIDATOR, format!("{actual} {what}")));
    } else {
        report.push(CheckResult::fail(
            VALIDATOR,
            format!("expected {expected} {what}, found {actual}"),
        ));
    }
}

/// Returns true for non-empty runs of `[a-z0-9]` joined by single hyphens.
#[must_use]
pub fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .split('-')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()))
}

fn missing_fields(cert: &Certification) -> Vec<String> {
    let text = [
        ("title", cert.title),
        ("icon", cert.icon),
        ("short", cert.short),
        ("applicable", cert.applicable),
        ("applicable_note", cert.applicable_note),
        ("criteria_note", cert.criteria_note),
    ];
    let lists = [
        ("suitable_for", cert.suitable_for.len()),
        ("criteria", cert.criteria.len()),
        ("process", cert.process.len()),
        ("benefits", cert.benefits.len()),
        ("faq", cert.faq.len()),
    ];

    let mut missing: Vec<String> = text
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| format!("{}: empty {field}", cert.slug))
        .collect();
    missing.extend(
        lists
            .iter()
            .filter(|(_, len)| *len == 0)
            .map(|(field, _)| format!("{}: empty {field}", cert.slug)),
    );
    for level in &cert.levels {
        if level.label.trim().is_empty() || level.focus.trim().is_empty() || level.desc.trim().is_empty() {
            missing.push(format!("{}: {} level is missing text", cert.slug, level.name()));
        }
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use greencert_catalog::certifications::green_business;

    #[test]
    fn full_catalog_passes() {
        assert!(validate(Catalog::full()).all_passed());
    }

    #[test]
    fn slug_shapes() {
        assert!(is_url_safe("esg-rating"));
        assert!(is_url_safe("csr2-impact"));
        assert!(!is_url_safe("ESG-rating"));
        assert!(!is_url_safe("esg--rating"));
        assert!(!is_url_safe("-esg"));
        assert!(!is_url_safe("esg rating"));
        assert!(!is_url_safe(""));
    }

    #[test]
    fn empty_fields_are_reported() {
        let mut cert = green_business::certification();
        cert.short = " ";
        cert.faq = &[];
        let problems = missing_fields(&cert);
        assert_eq!(
            problems,
            vec!["green-business: empty short", "green-business: empty faq"]
        );
    }

    #[test]
    fn duplicate_slugs_fail() {
        let catalog = Catalog::new(
            vec![green_business::certification(), green_business::certification()],
            Vec::new(),
            Vec::new(),
        );
        let report = validate(&catalog);
        assert!(report
            .results
            .iter()
            .any(|r| r.is_failure() && r.details.iter().any(|d| d.contains("duplicate slug"))));
    }
}
