#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # drivehire-entities
//!
//! Reusable, agnostic domain entities for the drivehire admin console.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod geo;
pub mod geocoding;
pub mod location;
pub mod zone;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
