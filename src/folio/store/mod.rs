//! # Storage Layer
//!
//! The [`DataStore`] trait is the record-store contract the executors rely on:
//! predicate queries over posts, unique-key lookups, full listings with their
//! posts attached, and unique-key upserts for seeding.
//!
//! ## Layout
//!
//! - [`backend::StorageBackend`]: raw load/save of the [`Tables`] snapshot
//!   (the "how": memory or filesystem).
//! - [`record_store::RecordStore`]: query semantics on top of any backend
//!   (the "what": matching, hydration, ordering, windows, upserts).
//! - [`memory::InMemoryStore`] = `RecordStore<MemBackend>`, used by tests.
//! - [`fs::FileStore`] = `RecordStore<FsBackend>`, used in production.
//!
//! ## Ordering
//!
//! Every list comes back in ascending id order. Ids are allocated per table as
//! `max + 1`, so id order is creation order and pagination is stable.
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! └── folio.json   # { authors: [...], categories: [...], tags: [...], posts: [...] }
//! ```

use crate::error::Result;
use crate::model::{
    Author, AuthorWithPosts, Category, CategoryWithPosts, NewAuthor, NewCategory, NewPost, NewTag,
    Post, PostRecord, Tag, TagWithPosts, Upserted,
};
use crate::query::{AuthorKey, PostKey, PostQuery};
use serde::{Deserialize, Serialize};

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod record_store;

/// Everything the store persists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tables {
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub posts: Vec<PostRecord>,
}

/// Abstract interface for the record store.
///
/// Reads take `&self` and may run concurrently. Upserts take `&mut self`; they
/// are only used for seeding, before the store is shared.
pub trait DataStore: Send + Sync {
    /// Posts matching the query's predicate, ascending id, window applied.
    fn find_posts(&self, query: &PostQuery) -> Result<Vec<Post>>;

    /// A single post by unique key.
    fn find_post(&self, key: &PostKey) -> Result<Option<Post>>;

    /// A single author by unique key, with their posts.
    fn find_author(&self, key: &AuthorKey) -> Result<Option<AuthorWithPosts>>;

    fn list_authors(&self) -> Result<Vec<AuthorWithPosts>>;

    fn list_categories(&self) -> Result<Vec<CategoryWithPosts>>;

    fn list_tags(&self) -> Result<Vec<TagWithPosts>>;

    /// Create the author unless one with the same email exists.
    fn upsert_author(&mut self, input: NewAuthor) -> Result<Upserted<Author>>;

    /// Create the category unless one with the same slug exists.
    fn upsert_category(&mut self, input: NewCategory) -> Result<Upserted<Category>>;

    /// Create the tag unless one with the same slug exists.
    fn upsert_tag(&mut self, input: NewTag) -> Result<Upserted<Tag>>;

    /// Create the post unless one with the same slug exists.
    fn upsert_post(&mut self, input: NewPost) -> Result<Upserted<PostRecord>>;
}

impl<T: DataStore + ?Sized> DataStore for Box<T> {
    fn find_posts(&self, query: &PostQuery) -> Result<Vec<Post>> {
        (**self).find_posts(query)
    }

    fn find_post(&self, key: &PostKey) -> Result<Option<Post>> {
        (**self).find_post(key)
    }

    fn find_author(&self, key: &AuthorKey) -> Result<Option<AuthorWithPosts>> {
        (**self).find_author(key)
    }

    fn list_authors(&self) -> Result<Vec<AuthorWithPosts>> {
        (**self).list_authors()
    }

    fn list_categories(&self) -> Result<Vec<CategoryWithPosts>> {
        (**self).list_categories()
    }

    fn list_tags(&self) -> Result<Vec<TagWithPosts>> {
        (**self).list_tags()
    }

    fn upsert_author(&mut self, input: NewAuthor) -> Result<Upserted<Author>> {
        (**self).upsert_author(input)
    }

    fn upsert_category(&mut self, input: NewCategory) -> Result<Upserted<Category>> {
        (**self).upsert_category(input)
    }

    fn upsert_tag(&mut self, input: NewTag) -> Result<Upserted<Tag>> {
        (**self).upsert_tag(input)
    }

    fn upsert_post(&mut self, input: NewPost) -> Result<Upserted<PostRecord>> {
        (**self).upsert_post(input)
    }
}
