//! Certification level validator.
//!
//! Every record must list Bronze, Silver, Gold, Platinum in that order. Empty
//! score ranges are allowed and reported for information.

use greencert_catalog::{Catalog, Tier};

use crate::report::{CheckResult, ConformanceReport};

const VALIDATOR: &str = "catalog/levels";

/// Validates the level ladder of every certification.
#[must_use]
pub fn validate(catalog: &Catalog) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let out_of_order: Vec<String> = catalog
        .certifications()
        .iter()
        .filter(|cert| cert.levels.iter().map(|l| l.tier).ne(Tier::ALL))
        .map(|cert| {
            let names: Vec<&str> = cert.levels.iter().map(|l| l.name()).collect();
            format!("{}: {}", cert.slug, names.join(" → "))
        })
        .collect();
    if out_of_order.is_empty() {
        report.push(CheckResult::pass(
            VALIDATOR,
            format!(
                "All {} certifications list Bronze, Silver, Gold, Platinum in order",
                catalog.len()
            ),
        ));
    } else {
        report.push(
            CheckResult::fail(VALIDATOR, "Level ladder out of order").with_details(out_of_order),
        );
    }

    let unscored: Vec<String> = catalog
        .certifications()
        .iter()
        .filter(|cert| cert.levels.iter().any(|l| l.score.trim().is_empty()))
        .map(|cert| cert.slug.to_string())
        .collect();
    report.push(
        CheckResult::pass(
            VALIDATOR,
            format!("{} certification(s) publish levels without score ranges", unscored.len()),
        )
        .with_details(unscored),
    );

    report
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
    fn swapped_tiers_fail() {
        let mut cert = green_business::certification();
        cert.levels.swap(1, 2);
        let report = validate(&Catalog::new(vec![cert], Vec::new(), Vec::new()));
        assert!(!report.all_passed());
        assert_eq!(
            report.results[0].details,
            vec!["green-business: Bronze → Gold → Silver → Platinum"]
        );
    }

    #[test]
    fn carbon_neutral_has_no_scores() {
        let report = validate(Catalog::full());
        assert!(report.results[1].details.iter().any(|d| d == "carbon-neutral"));
        assert!(!report.results[1].details.iter().any(|d| d == "green-business"));
    }
}
