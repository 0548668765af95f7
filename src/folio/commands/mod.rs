//! # Query Executors
//!
//! One module per read operation, plus `seed`. Each executor is a plain
//! function over a [`DataStore`](crate::store::DataStore): it builds its own
//! query, makes a single store call and returns typed results. Executors keep
//! no state between calls, so any number may run at once against a shared
//! store.
//!
//! Not-found single lookups return `Ok(None)`. Store failures propagate as-is,
//! with no retry.

pub mod author;
pub mod authors;
pub mod categories;
pub mod post;
pub mod posts;
pub mod relations;
pub mod seed;
pub mod tags;

pub use author::AuthorSelector;
pub use seed::{SeedReport, Tally};
