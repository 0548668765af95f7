//! # Query Layer
//!
//! Builds the requests the store understands:
//!
//! - [`PostQuery`]: a [`PostPredicate`] plus a result [`Window`], produced from a
//!   caller's [`PostFilter`] by [`filter::translate`].
//! - [`PostKey`] / [`AuthorKey`]: unique-key lookups.
//!
//! Nothing here touches storage. The store evaluates predicates, applies the
//! default order (ascending id) and only then cuts the window.

pub mod filter;
pub mod predicate;

pub use filter::{translate, PostFilter};
pub use predicate::{Condition, PostPredicate, SearchMode};

use crate::model::RecordId;

/// Result window, applied after predicate matching and ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Window {
    pub limit: Option<usize>,
    pub offset: usize,
}

impl Window {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let iter = items.into_iter().skip(self.offset);
        match self.limit {
            Some(limit) => iter.take(limit).collect(),
            None => iter.collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    pub predicate: PostPredicate,
    pub window: Window,
}

impl PostQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn matching(condition: Condition) -> Self {
        Self {
            predicate: PostPredicate::all().and(condition),
            window: Window::unbounded(),
        }
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.predicate = self.predicate.with_mode(mode);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostKey {
    Id(RecordId),
    Slug(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorKey {
    Id(RecordId),
    Email(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_skips_then_takes() {
        let window = Window {
            limit: Some(2),
            offset: 1,
        };
        assert_eq!(window.apply(vec![1, 2, 3, 4]), vec![2, 3]);
    }

    #[test]
    fn unbounded_window_keeps_everything() {
        assert_eq!(Window::unbounded().apply(vec![1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn offset_past_end_is_empty() {
        let window = Window {
            limit: None,
            offset: 10,
        };
        assert!(window.apply(vec![1, 2, 3]).is_empty());
    }

    #[test]
    fn zero_limit_is_empty() {
        let window = Window {
            limit: Some(0),
            offset: 0,
        };
        assert!(window.apply(vec![1]).is_empty());
    }
}
