//! Route-level behavior of the dispatcher: data bundles and statuses.

use std::collections::BTreeSet;

use greencert_catalog::Catalog;
use greencert_website::router::{dispatch, Status, View};
use serde_json::Value;

fn bundle(path: &str) -> Value {
    serde_json::to_value(dispatch(Catalog::full(), path)).expect("dispatch serializes")
}

#[test]
fn home_bundle_holds_everything() {
    let value = bundle("/");
    assert_eq!(value["status"], "Ok");
    assert_eq!(value["view"]["view"], "home");
    assert_eq!(value["view"]["certifications"].as_object().map(|m| m.len()), Some(14));
    assert_eq!(value["view"]["categories"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["view"]["industries"].as_array().map(Vec::len), Some(7));
}

#[test]
fn listing_enumerates_exactly_the_catalog_slugs() {
    let catalog = Catalog::full();
    let value = bundle("/certifications");
    let listed: BTreeSet<String> = value["view"]["certifications"]
        .as_object()
        .expect("certifications object")
        .keys()
        .cloned()
        .collect();
    let expected: BTreeSet<String> = catalog.slugs().map(str::to_string).collect();
    assert_eq!(listed, expected);
    assert!(value["view"].get("industries").is_none());
}

#[test]
fn detail_bundle_is_the_single_record() {
    let outcome = dispatch(Catalog::full(), "/certification/brsr-compliance");
    assert_eq!(outcome.status, Status::Ok);
    match outcome.view {
        View::Certification { slug, cert } => {
            assert_eq!(slug, "brsr-compliance");
            assert_eq!(cert.slug, "brsr-compliance");
            assert_eq!(cert.title, "BRSR Compliance Certification");
        }
        other => panic!("unexpected view: {other:?}"),
    }
}

#[test]
fn every_catalog_slug_has_a_detail_page() {
    let catalog = Catalog::full();
    for slug in catalog.slugs() {
        let outcome = dispatch(catalog, &format!("/certification/{slug}"));
        assert_eq!(outcome.status, Status::Ok, "{slug}");
    }
}

#[test]
fn detail_is_idempotent() {
    let catalog = Catalog::full();
    let first = serde_json::to_vec(&dispatch(catalog, "/certification/green-business")).expect("json");
    for _ in 0..5 {
        let again =
            serde_json::to_vec(&dispatch(catalog, "/certification/green-business")).expect("json");
        assert_eq!(first, again);
    }
    let html = dispatch(catalog, "/certification/green-business").render();
    assert_eq!(html, dispatch(catalog, "/certification/green-business").render());
}

#[test]
fn unknown_slug_is_not_found() {
    let outcome = dispatch(Catalog::full(), "/certification/does-not-exist");
    assert_eq!(outcome.status, Status::NotFound);
    assert_eq!(outcome.status.code(), 404);
    assert!(matches!(outcome.view, View::NotFound));
    assert!(outcome.render().contains("Page Not Found"));
}

#[test]
fn unmatched_paths_are_not_found() {
    for path in ["/about", "/certifications/", "/certification", "/CONTACT", "/index.html"] {
        let outcome = dispatch(Catalog::full(), path);
        assert_eq!(outcome.status, Status::NotFound, "{path}");
    }
}

#[test]
fn industries_bundle_carries_catalog() {
    let value = bundle("/industries");
    assert_eq!(value["view"]["industries"][0]["name"], "Manufacturing");
    assert_eq!(value["view"]["certifications"].as_object().map(|m| m.len()), Some(14));
}

#[test]
fn contact_has_no_data() {
    let value = bundle("/contact");
    assert_eq!(value["status"], "Ok");
    assert_eq!(value["view"], serde_json::json!({ "view": "contact" }));
}

#[test]
fn home_page_links_every_certification() {
    let catalog = Catalog::full();
    let html = dispatch(catalog, "/").render();
    for slug in catalog.slugs() {
        assert!(html.contains(&format!("href=\"/certification/{slug}\"")), "{slug}");
    }
    for industry in catalog.industries() {
        assert!(html.contains(&industry.name.replace('&', "&amp;")), "{}", industry.name);
    }
}
