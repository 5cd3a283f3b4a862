//! Certification records.
//!
//! Each sub-module encodes one certification as Rust static data. Modules are
//! listed in catalog order; see [`crate::Catalog::full`] for the assembly
//! sequence.

pub mod green_business;
pub mod carbon_neutral;
pub mod water_neutral;
pub mod esg_compliance;
pub mod esg_rating;
pub mod brsr_compliance;
pub mod csr_impact;
pub mod green_manufacturing;
pub mod sustainable_supply_chain;
pub mod green_real_estate;
pub mod green_hospitality;
pub mod sustainable_agriculture;
pub mod sustainable_product;
pub mod sustainable_packaging;
