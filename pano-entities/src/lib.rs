//#![deny(missing_docs)] // TODO: Complete missing documentation and enable this option
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # pano-entities
//!
//! Reusable, agnostic domain entities for streetpano.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod api_key;
pub mod geo;
pub mod id;
pub mod panorama;
pub mod region;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
