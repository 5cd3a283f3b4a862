//! Conformance validators.
//!
//! Catalog validators take a [`Catalog`](greencert_catalog::Catalog) and do no
//! I/O; website validators read an exported site from disk.

pub mod catalog;
pub mod website;
