#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregation pipeline over pet-license records.
//!
//! Pure, synchronous, single-pass functions: filter a record set by
//! species, group it by ZIP code, and rank pet names by frequency. The
//! whole pipeline is recomputed from scratch on every filter change
//! (cheap at tens of thousands of records) and borrows the loaded
//! record set rather than cloning it, since its outputs never outlive
//! one render/request cycle.

pub mod aggregate;
pub mod names;

pub use aggregate::{ZipAggregate, filter_by_species, group_by_zip_code, unique_species};
pub use names::{DEFAULT_TOP_NAMES, name_rankings, top_names};
