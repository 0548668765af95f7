//! Filter translation.
//!
//! Turns a caller-supplied [`PostFilter`] into a [`PostQuery`]. Every field is
//! optional and contributes at most one condition; an absent field imposes no
//! constraint. `limit` and `offset` never become conditions, they travel in the
//! query's [`Window`].

use super::predicate::{Condition, PostPredicate, SearchMode};
use super::{PostQuery, Window};
use crate::error::{FolioError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub search: Option<String>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
    pub author_email: Option<String>,
    pub category_slugs: Option<Vec<String>>,
    pub tag_slugs: Option<Vec<String>>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PostFilter {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Default::default()
        }
    }

    pub fn page(limit: i64, offset: i64) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
            ..Default::default()
        }
    }
}

/// Translate an optional filter into a query. `None` selects every post.
pub fn translate(filter: Option<&PostFilter>, mode: SearchMode) -> Result<PostQuery> {
    let Some(filter) = filter else {
        return Ok(PostQuery::all().with_mode(mode));
    };

    let window = Window {
        limit: non_negative("limit", filter.limit)?,
        offset: non_negative("offset", filter.offset)?.unwrap_or(0),
    };

    let mut predicate = PostPredicate::all().with_mode(mode);

    if let Some(term) = filter.search.as_deref().map(str::trim) {
        if !term.is_empty() {
            predicate.push(Condition::Search(term.to_string()));
        }
    }
    if let Some(published) = filter.published {
        predicate.push(Condition::Published(published));
    }
    if let Some(featured) = filter.featured {
        predicate.push(Condition::Featured(featured));
    }
    if let Some(email) = &filter.author_email {
        predicate.push(Condition::AuthorEmail(email.clone()));
    }
    if let Some(slugs) = non_empty(&filter.category_slugs) {
        predicate.push(Condition::CategorySlugIn(slugs.to_vec()));
    }
    if let Some(slugs) = non_empty(&filter.tag_slugs) {
        predicate.push(Condition::TagSlugIn(slugs.to_vec()));
    }

    Ok(PostQuery { predicate, window })
}

fn non_negative(field: &str, value: Option<i64>) -> Result<Option<usize>> {
    match value {
        None => Ok(None),
        Some(v) => usize::try_from(v)
            .map(Some)
            .map_err(|_| FolioError::InvalidInput(format!("{} must not be negative, got {}", field, v))),
    }
}

fn non_empty(slugs: &Option<Vec<String>>) -> Option<&[String]> {
    slugs.as_deref().filter(|s| !s.is_empty())
}
