//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all folio operations, whichever surface is calling: the
//! GraphQL resolvers, the `folio query` command or tests.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate executor in `commands/*.rs`
//! - **Normalizes inputs** (e.g. parsing the opaque author id argument)
//! - **Carries deployment settings** that executors take as arguments, such as
//!   the configured [`SearchMode`]
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Transport concerns**: No HTTP, no GraphQL types, no printing
//!
//! ## Generic Over DataStore
//!
//! `BlogApi<S: DataStore>` is generic over the storage backend:
//! - Production: `BlogApi<FileStore>` or, once shared with the server,
//!   `BlogApi<Box<dyn DataStore>>`
//! - Testing: `BlogApi<InMemoryStore>`
//!
//! Reads take `&self`, so one instance behind an `Arc` serves any number of
//! concurrent requests.

use crate::commands::{self, AuthorSelector, SeedReport};
use crate::error::Result;
use crate::model::{AuthorWithPosts, CategoryWithPosts, Post, RecordId, TagWithPosts};
use crate::query::{PostFilter, SearchMode};
use crate::store::DataStore;

/// The main API facade for folio operations.
pub struct BlogApi<S: DataStore> {
    store: S,
    search: SearchMode,
}

impl<S: DataStore> BlogApi<S> {
    pub fn new(store: S, search: SearchMode) -> Self {
        Self { store, search }
    }

    pub fn search_mode(&self) -> SearchMode {
        self.search
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn posts(&self, filter: Option<&PostFilter>) -> Result<Vec<Post>> {
        commands::posts::run(&self.store, filter, self.search)
    }

    pub fn post(&self, slug: &str) -> Result<Option<Post>> {
        commands::post::run(&self.store, slug)
    }

    /// `id` is the raw GraphQL ID argument; it must parse as an integer.
    pub fn author(&self, id: Option<&str>, email: Option<&str>) -> Result<Option<AuthorWithPosts>> {
        let selector = AuthorSelector::parse(id, email)?;
        commands::author::run(&self.store, &selector)
    }

    pub fn authors(&self) -> Result<Vec<AuthorWithPosts>> {
        commands::authors::run(&self.store)
    }

    pub fn categories(&self) -> Result<Vec<CategoryWithPosts>> {
        commands::categories::run(&self.store)
    }

    pub fn tags(&self) -> Result<Vec<TagWithPosts>> {
        commands::tags::run(&self.store)
    }

    pub fn posts_by_author(&self, author_id: RecordId) -> Result<Vec<Post>> {
        commands::relations::posts_by_author(&self.store, author_id)
    }

    pub fn posts_in_category(&self, category_id: RecordId) -> Result<Vec<Post>> {
        commands::relations::posts_in_category(&self.store, category_id)
    }

    pub fn posts_with_tag(&self, tag_id: RecordId) -> Result<Vec<Post>> {
        commands::relations::posts_with_tag(&self.store, tag_id)
    }

    pub fn seed(&mut self) -> Result<SeedReport> {
        commands::seed::run(&mut self.store)
    }
}
