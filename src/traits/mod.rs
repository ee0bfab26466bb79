//! Trait definitions for Petfinder operations.
//!
//! Each record type implements the traits its endpoints support.

mod get;
mod search;

pub use get::Get;
pub use search::Search;
