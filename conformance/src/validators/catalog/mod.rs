//! Catalog data validators (inventory, cross-collection integrity, levels).

pub mod integrity;
pub mod inventory;
pub mod levels;
