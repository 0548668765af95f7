//! Post predicates.
//!
//! A [`PostPredicate`] is a conjunction of independent [`Condition`]s. An empty
//! predicate matches every post. Conditions are evaluated against a hydrated
//! [`Post`], so relation conditions (author email, category/tag slugs) see the
//! same data the caller gets back.

use crate::model::{Post, RecordId};

/// How `Search` conditions compare text. Fixed per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Insensitive,
    Sensitive,
}

impl SearchMode {
    pub fn from_case_sensitive(case_sensitive: bool) -> Self {
        if case_sensitive {
            SearchMode::Sensitive
        } else {
            SearchMode::Insensitive
        }
    }

    fn contains(self, haystack: &str, needle: &str) -> bool {
        match self {
            SearchMode::Sensitive => haystack.contains(needle),
            SearchMode::Insensitive => haystack.to_lowercase().contains(&needle.to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Title or content contains the term.
    Search(String),
    Published(bool),
    Featured(bool),
    AuthorEmail(String),
    /// At least one category slug is in the set.
    CategorySlugIn(Vec<String>),
    /// At least one tag slug is in the set.
    TagSlugIn(Vec<String>),
    AuthorId(RecordId),
    CategoryId(RecordId),
    TagId(RecordId),
}

impl Condition {
    pub fn matches(&self, post: &Post, mode: SearchMode) -> bool {
        let record = &post.record;
        match self {
            Condition::Search(term) => {
                mode.contains(&record.title, term) || mode.contains(&record.content, term)
            }
            Condition::Published(value) => record.published == *value,
            Condition::Featured(value) => record.featured == *value,
            Condition::AuthorEmail(email) => post.author.email == *email,
            Condition::CategorySlugIn(slugs) => post
                .categories
                .iter()
                .any(|category| slugs.contains(&category.slug)),
            Condition::TagSlugIn(slugs) => post.tags.iter().any(|tag| slugs.contains(&tag.slug)),
            Condition::AuthorId(id) => record.author_id == *id,
            Condition::CategoryId(id) => record.category_ids.contains(id),
            Condition::TagId(id) => record.tag_ids.contains(id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPredicate {
    conditions: Vec<Condition>,
    mode: SearchMode,
}

impl PostPredicate {
    /// The predicate that matches every post.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn and(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn is_match_all(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn matches(&self, post: &Post) -> bool {
        self.conditions
            .iter()
            .all(|condition| condition.matches(post, self.mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Author, Category, PostRecord, Tag};
    use chrono::Utc;
    use std::collections::BTreeSet;

    fn sample_post() -> Post {
        let now = Utc::now();
        Post {
            record: PostRecord {
                id: 1,
                slug: "intro-to-graphql".into(),
                title: "Intro to GraphQL".into(),
                content: "Schemas, resolvers and Queries".into(),
                published: true,
                featured: false,
                cover_image_url: None,
                author_id: 7,
                category_ids: BTreeSet::from([3]),
                tag_ids: BTreeSet::from([4, 5]),
                created_at: now,
                updated_at: now,
            },
            author: Author {
                id: 7,
                email: "bob@example.com".into(),
                name: "Bob".into(),
                bio: None,
                avatar_url: None,
            },
            categories: vec![Category {
                id: 3,
                slug: "web-dev".into(),
                name: "Web Dev".into(),
            }],
            tags: vec![
                Tag {
                    id: 4,
                    slug: "graphql".into(),
                    name: "GraphQL".into(),
                },
                Tag {
                    id: 5,
                    slug: "api".into(),
                    name: "API".into(),
                },
            ],
        }
    }

    #[test]
    fn empty_predicate_matches_everything() {
        let predicate = PostPredicate::all();
        assert!(predicate.is_match_all());
        assert!(predicate.matches(&sample_post()));
    }

    #[test]
    fn search_checks_title_or_content() {
        let post = sample_post();
        assert!(Condition::Search("GraphQL".into()).matches(&post, SearchMode::Sensitive));
        assert!(Condition::Search("resolvers".into()).matches(&post, SearchMode::Sensitive));
        assert!(!Condition::Search("rust".into()).matches(&post, SearchMode::Insensitive));
    }

    #[test]
    fn search_mode_controls_case() {
        let post = sample_post();
        let term = Condition::Search("graphql".into());
        assert!(term.matches(&post, SearchMode::Insensitive));
        assert!(!term.matches(&post, SearchMode::Sensitive));
    }

    #[test]
    fn flags_match_exactly() {
        let post = sample_post();
        assert!(Condition::Published(true).matches(&post, SearchMode::default()));
        assert!(!Condition::Published(false).matches(&post, SearchMode::default()));
        assert!(Condition::Featured(false).matches(&post, SearchMode::default()));
    }

    #[test]
    fn author_email_is_exact() {
        let post = sample_post();
        assert!(Condition::AuthorEmail("bob@example.com".into()).matches(&post, SearchMode::default()));
        assert!(!Condition::AuthorEmail("BOB@example.com".into()).matches(&post, SearchMode::default()));
    }

    #[test]
    fn slug_sets_need_one_hit() {
        let post = sample_post();
        let mode = SearchMode::default();
        assert!(Condition::TagSlugIn(vec!["rust".into(), "api".into()]).matches(&post, mode));
        assert!(!Condition::TagSlugIn(vec!["rust".into()]).matches(&post, mode));
        assert!(Condition::CategorySlugIn(vec!["web-dev".into()]).matches(&post, mode));
        assert!(!Condition::CategorySlugIn(vec!["design".into()]).matches(&post, mode));
    }

    #[test]
    fn relation_ids() {
        let post = sample_post();
        let mode = SearchMode::default();
        assert!(Condition::AuthorId(7).matches(&post, mode));
        assert!(Condition::CategoryId(3).matches(&post, mode));
        assert!(Condition::TagId(5).matches(&post, mode));
        assert!(!Condition::TagId(3).matches(&post, mode));
    }

    #[test]
    fn conditions_combine_with_and() {
        let post = sample_post();
        let both = PostPredicate::all()
            .and(Condition::Published(true))
            .and(Condition::TagSlugIn(vec!["graphql".into()]));
        assert!(both.matches(&post));

        let one_fails = both.and(Condition::Featured(true));
        assert!(!one_fails.matches(&post));
    }
}
