use super::mem_backend::MemBackend;
use super::record_store::RecordStore;

pub type InMemoryStore = RecordStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        RecordStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{NewAuthor, NewCategory, NewPost, NewTag};
    use crate::store::backend::StorageBackend;
    use crate::store::DataStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// The full sample data set used by `folio seed`.
        pub fn seeded() -> Self {
            let mut fixture = Self::new();
            crate::commands::seed::run(&mut fixture.store).unwrap();
            fixture
        }

        pub fn with_author(mut self, email: &str, name: &str) -> Self {
            self.store
                .upsert_author(NewAuthor {
                    email: email.to_string(),
                    name: name.to_string(),
                    bio: None,
                    avatar_url: None,
                })
                .unwrap();
            self
        }

        pub fn with_category(mut self, slug: &str, name: &str) -> Self {
            self.store
                .upsert_category(NewCategory {
                    slug: slug.to_string(),
                    name: name.to_string(),
                })
                .unwrap();
            self
        }

        pub fn with_tag(mut self, slug: &str, name: &str) -> Self {
            self.store
                .upsert_tag(NewTag {
                    slug: slug.to_string(),
                    name: name.to_string(),
                })
                .unwrap();
            self
        }

        /// A published post; author, categories and tags are looked up by natural key.
        pub fn with_post(
            self,
            slug: &str,
            title: &str,
            author_email: &str,
            categories: &[&str],
            tags: &[&str],
        ) -> Self {
            let post = self.new_post(slug, title, author_email, categories, tags);
            self.with_new_post(post.published(true))
        }

        pub fn with_draft(self, slug: &str, title: &str, author_email: &str) -> Self {
            let post = self.new_post(slug, title, author_email, &[], &[]);
            self.with_new_post(post)
        }

        pub fn with_featured(self, slug: &str, title: &str, author_email: &str) -> Self {
            let post = self.new_post(slug, title, author_email, &[], &[]);
            self.with_new_post(post.published(true).featured(true))
        }

        pub fn with_new_post(mut self, post: NewPost) -> Self {
            self.store.upsert_post(post).unwrap();
            self
        }

        fn new_post(
            &self,
            slug: &str,
            title: &str,
            author_email: &str,
            categories: &[&str],
            tags: &[&str],
        ) -> NewPost {
            let tables = self.store.backend().load().unwrap();
            let author_id = tables
                .authors
                .iter()
                .find(|a| a.email == author_email)
                .map(|a| a.id)
                .unwrap();
            let category_ids = categories.iter().map(|slug| {
                tables
                    .categories
                    .iter()
                    .find(|c| c.slug == *slug)
                    .map(|c| c.id)
                    .unwrap()
            });
            let tag_ids = tags.iter().map(|slug| {
                tables
                    .tags
                    .iter()
                    .find(|t| t.slug == *slug)
                    .map(|t| t.id)
                    .unwrap()
            });

            NewPost::new(slug, title, format!("Content for {}", title), author_id)
                .with_categories(category_ids.collect::<Vec<_>>())
                .with_tags(tag_ids.collect::<Vec<_>>())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use crate::query::PostQuery;
    use crate::store::DataStore;

    #[test]
    fn test_fixtures_coverage() {
        let fixture = StoreFixture::default()
            .with_author("alice@example.com", "Alice")
            .with_category("design", "Design")
            .with_tag("css", "CSS")
            .with_post("a", "A", "alice@example.com", &["design"], &["css"])
            .with_draft("b", "B", "alice@example.com")
            .with_featured("c", "C", "alice@example.com");

        let posts = fixture.store.find_posts(&PostQuery::all()).unwrap();
        assert_eq!(posts.len(), 3);

        assert!(posts[0].record.published);
        assert_eq!(posts[0].categories[0].slug, "design");
        assert_eq!(posts[0].record.content, "Content for A");

        assert!(!posts[1].record.published);
        assert!(posts[2].record.featured);
    }

    #[test]
    fn seeded_fixture_has_sample_data() {
        let fixture = StoreFixture::seeded();
        assert_eq!(fixture.store.list_authors().unwrap().len(), 3);
        assert_eq!(fixture.store.find_posts(&PostQuery::all()).unwrap().len(), 15);
    }
}
