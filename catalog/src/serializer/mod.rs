//! Serializers for the certification catalog.
//!
//! One format is supported:
//! - **JSON** ([`json`]): the machine-readable export, output to `public/catalog.json`
pub mod json;
