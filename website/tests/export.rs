//! Static export of the whole site.

use greencert_catalog::Catalog;
use greencert_website::router::{dispatch, site_paths};
use greencert_website::writer::route_file;
use greencert_website::{generate, CATALOG_FILE, NOT_FOUND_FILE, SITEMAP_FILE};
use walkdir::WalkDir;

#[test]
fn exports_every_route_and_support_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let pages = generate(dir.path(), "http://localhost:5000").expect("generate");
    let catalog = Catalog::full();
    assert_eq!(pages, catalog.len() + 5);

    for path in site_paths(catalog) {
        let file = route_file(dir.path(), &path);
        let written = std::fs::read_to_string(&file).expect("page exists");
        assert_eq!(written, dispatch(catalog, &path).render(), "{path}");
    }
    for name in [NOT_FOUND_FILE, SITEMAP_FILE, CATALOG_FILE] {
        assert!(dir.path().join(name).is_file(), "{name}");
    }

    let html_files = WalkDir::new(dir.path())
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|x| x == "html"))
        .count();
    assert_eq!(html_files, pages);
}

#[test]
fn exported_catalog_lists_every_slug() {
    let dir = tempfile::tempdir().expect("tempdir");
    generate(dir.path(), "http://localhost:5000").expect("generate");
    let text = std::fs::read_to_string(dir.path().join(CATALOG_FILE)).expect("catalog.json");
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    for slug in Catalog::full().slugs() {
        assert!(value["certifications"][slug].is_object(), "{slug}");
    }
}
