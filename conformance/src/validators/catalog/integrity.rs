//! Catalog/category integrity validator.
//!
//! Category groups reference certifications by slug, and nothing at load time
//! checks those references. This validator does:
//! - every slug listed by a group exists in the catalog (failure)
//! - every catalog slug is listed by exactly one group (failure)
//! - a record's `category` matches the id of the group listing it (warning)

use greencert_catalog::{Catalog, Category};

use crate::report::{CheckResult, ConformanceReport, Severity};

const VALIDATOR: &str = "catalog/integrity";

/// Validates references between category groups and the catalog.
#[must_use]
pub fn validate(catalog: &Catalog) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.push(check_references(catalog));
    report.push(check_coverage(catalog));
    report.push(check_category_agreement(catalog));
    report
}

fn check_references(catalog: &Catalog) -> CheckResult {
    let dangling: Vec<String> = catalog
        .categories()
        .iter()
        .flat_map(|group| {
            group
                .certs
                .iter()
                .filter(move |slug| !catalog.contains(slug))
                .map(move |slug| format!("group `{}` lists unknown slug `{slug}`", group.id))
        })
        .collect();
    CheckResult::from_problems(
        VALIDATOR,
        "Every category slug resolves to a certification",
        format!("{} dangling category reference(s)", dangling.len()),
        Severity::Failure,
        dangling,
    )
}

fn check_coverage(catalog: &Catalog) -> CheckResult {
    let problems: Vec<String> = catalog
        .slugs()
        .filter_map(|slug| {
            let groups: Vec<&str> = catalog
                .categories()
                .iter()
                .filter(|g| g.certs.contains(&slug))
                .map(|g| g.id)
                .collect();
            match groups.len() {
                1 => None,
                0 => Some(format!("`{slug}` is not listed by any category group")),
                _ => Some(format!("`{slug}` is listed by {} groups: {}", groups.len(), groups.join(", "))),
            }
        })
        .collect();
    CheckResult::from_problems(
        VALIDATOR,
        "Every certification is listed by exactly one category group",
        format!("{} certification(s) not listed exactly once", problems.len()),
        Severity::Failure,
        problems,
    )
}

fn check_category_agreement(catalog: &Catalog) -> CheckResult {
    let mut problems = Vec::new();
    for group in catalog.categories() {
        let Ok(category) = group.id.parse::<Category>() else {
            problems.push(format!("group id `{}` is not a certification category", group.id));
            continue;
        };
        for slug in group.certs {
            if let Ok(cert) = catalog.get_by_slug(slug) {
                if cert.category != category {
                    problems.push(format!(
                        "`{slug}` has category `{}` but is listed under `{}`",
                        cert.category, group.id
                    ));
                }
            }
        }
    }
    CheckResult::from_problems(
        VALIDATOR,
        "Certification categories agree with their groups",
        format!("{} category mismatch(es)", problems.len()),
        Severity::Warning,
        problems,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use greencert_catalog::certifications::{carbon_neutral, green_business};
    use greencert_catalog::CategoryGroup;

    fn group(id: &'static str, certs: &'static [&'static str]) -> CategoryGroup {
        CategoryGroup {
            id,
            title: id,
            desc: "",
            certs,
        }
    }

    #[test]
    fn full_catalog_is_clean() {
        let report = validate(Catalog::full());
        assert!(report.all_passed());
        assert_eq!(report.summary().warned, 0);
    }

    #[test]
    fn dangling_and_uncovered_slugs_fail() {
        let catalog = Catalog::new(
            vec![green_business::certification(), carbon_neutral::certification()],
            vec![group("product", &["green-business", "ghost"])],
            Vec::new(),
        );
        let report = validate(&catalog);
        let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].details, vec!["group `product` lists unknown slug `ghost`"]);
        assert_eq!(
            failures[1].details,
            vec!["`carbon-neutral` is not listed by any category group"]
        );
    }

    #[test]
    fn double_listing_fails() {
        let catalog = Catalog::new(
            vec![green_business::certification()],
            vec![
                group("product", &["green-business"]),
                group("esg", &["green-business"]),
            ],
            Vec::new(),
        );
        let report = check_coverage(&catalog);
        assert!(report.is_failure());
        assert_eq!(
            report.details,
            vec!["`green-business` is listed by 2 groups: product, esg"]
        );
    }

    #[test]
    fn category_mismatch_only_warns() {
        let catalog = Catalog::new(
            vec![green_business::certification()],
            vec![group("esg", &["green-business"])],
            Vec::new(),
        );
        let report = validate(&catalog);
        assert!(report.all_passed());
        assert_eq!(report.summary().warned, 1);
    }
}
