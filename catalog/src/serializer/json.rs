//! JSON serializer for the certification catalog.
//!
//! Produces a single document with three members: `certifications` (an
//! object keyed by slug, in catalog order), `categories`, and `industries`.
//! Field names match the record fields one to one, with each level's tier
//! under `name`.

use serde_json::{json, Map, Value};

use crate::model::Catalog;

/// Serializes the complete catalog to a JSON `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json(catalog: &Catalog) -> Value {
    let mut certifications = Map::new();
    for cert in catalog.certifications() {
        certifications.insert(cert.slug.to_owned(), json!(cert));
    }
    json!({
        "certifications": Value::Object(certifications),
        "categories": catalog.categories(),
        "industries": catalog.industries(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_follow_catalog_order() {
        let catalog = Catalog::full();
        let value = to_json(catalog);
        let keys: Vec<&str> = value["certifications"]
            .as_object()
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default();
        let slugs: Vec<&str> = catalog.slugs().collect();
        assert_eq!(keys, slugs);
    }

    #[test]
    fn levels_serialize_with_name_field() {
        let value = to_json(Catalog::full());
        let levels = &value["certifications"]["carbon-neutral"]["levels"];
        assert_eq!(levels[0]["name"], "Bronze");
        assert_eq!(levels[2]["label"], "Carbon Neutral Organization");
        assert_eq!(levels[3]["score"], "");
    }

    #[test]
    fn category_serializes_lowercase() {
        let value = to_json(Catalog::full());
        assert_eq!(value["certifications"]["esg-rating"]["category"], "esg");
        assert_eq!(value["categories"][0]["id"], "esg");
        assert_eq!(value["industries"].as_array().map(Vec::len), Some(7));
    }
}
