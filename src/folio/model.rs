//! Core data types.
//!
//! Stored records (`Author`, `Category`, `Tag`, `PostRecord`) are what the
//! backends persist. Read shapes (`Post`, `AuthorWithPosts`, ...) are what the
//! store hands back with their relations already attached. Seed inputs
//! (`NewAuthor`, ...) carry the fields of a record before the store assigns ids
//! and timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub type RecordId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: RecordId,
    pub email: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: RecordId,
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: RecordId,
    pub slug: String,
    pub name: String,
}

/// A post as stored: relations are held as ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: RecordId,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub published: bool,
    #[serde(default)]
    pub featured: bool,
    pub cover_image_url: Option<String>,
    pub author_id: RecordId,
    #[serde(default)]
    pub category_ids: BTreeSet<RecordId>,
    #[serde(default)]
    pub tag_ids: BTreeSet<RecordId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A post with its author, categories and tags loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub record: PostRecord,
    pub author: Author,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
}

impl Post {
    pub fn id(&self) -> RecordId {
        self.record.id
    }

    pub fn slug(&self) -> &str {
        &self.record.slug
    }

    pub fn title(&self) -> &str {
        &self.record.title
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorWithPosts {
    pub author: Author,
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryWithPosts {
    pub category: Category,
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagWithPosts {
    pub tag: Tag,
    pub posts: Vec<Post>,
}

// --- Upsert inputs ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub email: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub slug: String,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub featured: bool,
    pub cover_image_url: Option<String>,
    pub author_id: RecordId,
    pub category_ids: BTreeSet<RecordId>,
    pub tag_ids: BTreeSet<RecordId>,
}

impl NewPost {
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: RecordId,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            content: content.into(),
            published: false,
            featured: false,
            cover_image_url: None,
            author_id,
            category_ids: BTreeSet::new(),
            tag_ids: BTreeSet::new(),
        }
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn with_categories(mut self, ids: impl IntoIterator<Item = RecordId>) -> Self {
        self.category_ids.extend(ids);
        self
    }

    pub fn with_tags(mut self, ids: impl IntoIterator<Item = RecordId>) -> Self {
        self.tag_ids.extend(ids);
        self
    }
}

/// Result of an upsert: the stored record and whether this call created it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upserted<T> {
    pub record: T,
    pub created: bool,
}

impl<T> Upserted<T> {
    pub fn created(record: T) -> Self {
        Self {
            record,
            created: true,
        }
    }

    pub fn existing(record: T) -> Self {
        Self {
            record,
            created: false,
        }
    }
}
