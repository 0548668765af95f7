use super::backend::StorageBackend;
use super::{DataStore, Tables};
use crate::error::{FolioError, Result};
use crate::model::{
    Author, AuthorWithPosts, Category, CategoryWithPosts, NewAuthor, NewCategory, NewPost, NewTag,
    Post, PostRecord, RecordId, Tag, TagWithPosts, Upserted,
};
use crate::query::{AuthorKey, Condition, PostKey, PostPredicate, PostQuery};
use chrono::Utc;
use std::collections::HashMap;

pub struct RecordStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn location(&self) -> String {
        self.backend.location()
    }
}

/// Attaches relations to stored post records.
struct Hydrator<'a> {
    tables: &'a Tables,
    authors: HashMap<RecordId, &'a Author>,
    categories: HashMap<RecordId, &'a Category>,
    tags: HashMap<RecordId, &'a Tag>,
}

impl<'a> Hydrator<'a> {
    fn new(tables: &'a Tables) -> Self {
        Self {
            tables,
            authors: tables.authors.iter().map(|a| (a.id, a)).collect(),
            categories: tables.categories.iter().map(|c| (c.id, c)).collect(),
            tags: tables.tags.iter().map(|t| (t.id, t)).collect(),
        }
    }

    fn post(&self, record: &PostRecord) -> Result<Post> {
        let author = self.authors.get(&record.author_id).ok_or_else(|| {
            FolioError::Store(format!(
                "Post '{}' references missing author {}",
                record.slug, record.author_id
            ))
        })?;

        let categories = record
            .category_ids
            .iter()
            .map(|id| {
                self.categories.get(id).map(|c| (*c).clone()).ok_or_else(|| {
                    FolioError::Store(format!(
                        "Post '{}' references missing category {}",
                        record.slug, id
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let tags = record
            .tag_ids
            .iter()
            .map(|id| {
                self.tags.get(id).map(|t| (*t).clone()).ok_or_else(|| {
                    FolioError::Store(format!(
                        "Post '{}' references missing tag {}",
                        record.slug, id
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Post {
            record: record.clone(),
            author: (*author).clone(),
            categories,
            tags,
        })
    }

    /// All posts matching the predicate, in ascending id order.
    fn posts_where(&self, predicate: &PostPredicate) -> Result<Vec<Post>> {
        let mut records: Vec<&PostRecord> = self.tables.posts.iter().collect();
        records.sort_by_key(|r| r.id);

        let mut matched = Vec::new();
        for record in records {
            let post = self.post(record)?;
            if predicate.matches(&post) {
                matched.push(post);
            }
        }
        Ok(matched)
    }

    fn posts_for(&self, condition: Condition) -> Result<Vec<Post>> {
        self.posts_where(&PostPredicate::all().and(condition))
    }

    fn author_with_posts(&self, author: &Author) -> Result<AuthorWithPosts> {
        Ok(AuthorWithPosts {
            author: author.clone(),
            posts: self.posts_for(Condition::AuthorId(author.id))?,
        })
    }
}

fn next_id<T>(rows: &[T], id: impl Fn(&T) -> RecordId) -> RecordId {
    rows.iter().map(id).max().unwrap_or(0) + 1
}

fn sorted_by_id<T: Clone>(rows: &[T], id: impl Fn(&T) -> RecordId) -> Vec<T> {
    let mut rows = rows.to_vec();
    rows.sort_by_key(|row| id(row));
    rows
}

impl<B: StorageBackend> DataStore for RecordStore<B> {
    fn find_posts(&self, query: &PostQuery) -> Result<Vec<Post>> {
        let tables = self.backend.load()?;
        let matched = Hydrator::new(&tables).posts_where(&query.predicate)?;
        tracing::debug!(
            conditions = query.predicate.conditions().len(),
            matched = matched.len(),
            "find_posts"
        );
        Ok(query.window.apply(matched))
    }

    fn find_post(&self, key: &PostKey) -> Result<Option<Post>> {
        let tables = self.backend.load()?;
        let record = tables.posts.iter().find(|p| match key {
            PostKey::Id(id) => p.id == *id,
            PostKey::Slug(slug) => p.slug == *slug,
        });
        match record {
            Some(record) => Hydrator::new(&tables).post(record).map(Some),
            None => Ok(None),
        }
    }

    fn find_author(&self, key: &AuthorKey) -> Result<Option<AuthorWithPosts>> {
        let tables = self.backend.load()?;
        let author = tables.authors.iter().find(|a| match key {
            AuthorKey::Id(id) => a.id == *id,
            AuthorKey::Email(email) => a.email == *email,
        });
        match author {
            Some(author) => Hydrator::new(&tables).author_with_posts(author).map(Some),
            None => Ok(None),
        }
    }

    fn list_authors(&self) -> Result<Vec<AuthorWithPosts>> {
        let tables = self.backend.load()?;
        let hydrator = Hydrator::new(&tables);
        sorted_by_id(&tables.authors, |a| a.id)
            .iter()
            .map(|author| hydrator.author_with_posts(author))
            .collect()
    }

    fn list_categories(&self) -> Result<Vec<CategoryWithPosts>> {
        let tables = self.backend.load()?;
        let hydrator = Hydrator::new(&tables);
        sorted_by_id(&tables.categories, |c| c.id)
            .into_iter()
            .map(|category| {
                let posts = hydrator.posts_for(Condition::CategoryId(category.id))?;
                Ok(CategoryWithPosts { category, posts })
            })
            .collect()
    }

    fn list_tags(&self) -> Result<Vec<TagWithPosts>> {
        let tables = self.backend.load()?;
        let hydrator = Hydrator::new(&tables);
        sorted_by_id(&tables.tags, |t| t.id)
            .into_iter()
            .map(|tag| {
                let posts = hydrator.posts_for(Condition::TagId(tag.id))?;
                Ok(TagWithPosts { tag, posts })
            })
            .collect()
    }

    fn upsert_author(&mut self, input: NewAuthor) -> Result<Upserted<Author>> {
        let mut tables = self.backend.load()?;
        if let Some(existing) = tables.authors.iter().find(|a| a.email == input.email) {
            return Ok(Upserted::existing(existing.clone()));
        }

        let author = Author {
            id: next_id(&tables.authors, |a| a.id),
            email: input.email,
            name: input.name,
            bio: input.bio,
            avatar_url: input.avatar_url,
        };
        tables.authors.push(author.clone());
        self.backend.save(&tables)?;
        Ok(Upserted::created(author))
    }

    fn upsert_category(&mut self, input: NewCategory) -> Result<Upserted<Category>> {
        let mut tables = self.backend.load()?;
        if let Some(existing) = tables.categories.iter().find(|c| c.slug == input.slug) {
            return Ok(Upserted::existing(existing.clone()));
        }

        let category = Category {
            id: next_id(&tables.categories, |c| c.id),
            slug: input.slug,
            name: input.name,
        };
        tables.categories.push(category.clone());
        self.backend.save(&tables)?;
        Ok(Upserted::created(category))
    }

    fn upsert_tag(&mut self, input: NewTag) -> Result<Upserted<Tag>> {
        let mut tables = self.backend.load()?;
        if let Some(existing) = tables.tags.iter().find(|t| t.slug == input.slug) {
            return Ok(Upserted::existing(existing.clone()));
        }

        let tag = Tag {
            id: next_id(&tables.tags, |t| t.id),
            slug: input.slug,
            name: input.name,
        };
        tables.tags.push(tag.clone());
        self.backend.save(&tables)?;
        Ok(Upserted::created(tag))
    }

    fn upsert_post(&mut self, input: NewPost) -> Result<Upserted<PostRecord>> {
        let mut tables = self.backend.load()?;
        if let Some(existing) = tables.posts.iter().find(|p| p.slug == input.slug) {
            return Ok(Upserted::existing(existing.clone()));
        }

        if !tables.authors.iter().any(|a| a.id == input.author_id) {
            return Err(FolioError::NotFound(format!("author {}", input.author_id)));
        }
        if let Some(missing) = input
            .category_ids
            .iter()
            .find(|id| !tables.categories.iter().any(|c| c.id == **id))
        {
            return Err(FolioError::NotFound(format!("category {}", missing)));
        }
        if let Some(missing) = input
            .tag_ids
            .iter()
            .find(|id| !tables.tags.iter().any(|t| t.id == **id))
        {
            return Err(FolioError::NotFound(format!("tag {}", missing)));
        }

        let now = Utc::now();
        let record = PostRecord {
            id: next_id(&tables.posts, |p| p.id),
            slug: input.slug,
            title: input.title,
            content: input.content,
            published: input.published,
            featured: input.featured,
            cover_image_url: input.cover_image_url,
            author_id: input.author_id,
            category_ids: input.category_ids,
            tag_ids: input.tag_ids,
            created_at: now,
            updated_at: now,
        };
        tables.posts.push(record.clone());
        self.backend.save(&tables)?;
        Ok(Upserted::created(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{PostFilter, SearchMode, Window};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn blog() -> InMemoryStore {
        StoreFixture::new()
            .with_author("alice@example.com", "Alice")
            .with_author("bob@example.com", "Bob")
            .with_category("design", "Design")
            .with_category("devops", "DevOps")
            .with_tag("css", "CSS")
            .with_tag("aws", "AWS")
            .with_post("tailwind", "Tailwind", "alice@example.com", &["design"], &["css"])
            .with_post("amplify", "Amplify", "bob@example.com", &["devops"], &["aws"])
            .with_post("dark-mode", "Dark Mode", "alice@example.com", &["design"], &["css", "aws"])
            .store
    }

    #[test]
    fn ids_follow_creation_order() {
        let store = blog();
        let posts = store.find_posts(&PostQuery::all()).unwrap();
        let ids: Vec<_> = posts.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn find_posts_hydrates_relations() {
        let store = blog();
        let posts = store.find_posts(&PostQuery::all()).unwrap();
        let dark = &posts[2];
        assert_eq!(dark.author.email, "alice@example.com");
        assert_eq!(dark.categories.len(), 1);
        assert_eq!(
            dark.tags.iter().map(|t| t.slug.as_str()).collect::<Vec<_>>(),
            vec!["css", "aws"]
        );
    }

    #[test]
    fn find_posts_applies_window_after_matching() {
        let store = blog();
        let mut query =
            crate::query::translate(Some(&PostFilter::search("a")), SearchMode::Insensitive)
                .unwrap();
        query.window = Window {
            limit: Some(1),
            offset: 1,
        };
        let posts = store.find_posts(&query).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug(), "amplify");
    }

    #[test]
    fn find_post_by_key() {
        let store = blog();
        let post = store
            .find_post(&PostKey::Slug("amplify".into()))
            .unwrap()
            .unwrap();
        assert_eq!(post.author.name, "Bob");
        assert_eq!(store.find_post(&PostKey::Id(2)).unwrap(), Some(post));
        assert!(store
            .find_post(&PostKey::Slug("missing".into()))
            .unwrap()
            .is_none());
    }

    #[test]
    fn find_author_includes_posts() {
        let store = blog();
        let alice = store
            .find_author(&AuthorKey::Email("alice@example.com".into()))
            .unwrap()
            .unwrap();
        assert_eq!(alice.author.id, 1);
        assert_eq!(
            alice.posts.iter().map(|p| p.slug()).collect::<Vec<_>>(),
            vec!["tailwind", "dark-mode"]
        );
        assert!(store.find_author(&AuthorKey::Id(99)).unwrap().is_none());
    }

    #[test]
    fn listings_attach_posts() {
        let store = blog();

        let authors = store.list_authors().unwrap();
        assert_eq!(authors.len(), 2);
        assert_eq!(authors[1].posts.len(), 1);

        let categories = store.list_categories().unwrap();
        assert_eq!(categories[0].category.slug, "design");
        assert_eq!(categories[0].posts.len(), 2);

        let tags = store.list_tags().unwrap();
        let aws = tags.iter().find(|t| t.tag.slug == "aws").unwrap();
        assert_eq!(
            aws.posts.iter().map(|p| p.slug()).collect::<Vec<_>>(),
            vec!["amplify", "dark-mode"]
        );
    }

    #[test]
    fn upsert_is_keyed_by_natural_key() {
        let mut store = InMemoryStore::new();
        let first = store
            .upsert_tag(NewTag {
                slug: "rust".into(),
                name: "Rust".into(),
            })
            .unwrap();
        assert!(first.created);

        let second = store
            .upsert_tag(NewTag {
                slug: "rust".into(),
                name: "Renamed".into(),
            })
            .unwrap();
        assert!(!second.created);
        assert_eq!(second.record, first.record);
        assert_eq!(store.list_tags().unwrap().len(), 1);
    }

    #[test]
    fn upsert_post_requires_existing_author() {
        let mut store = InMemoryStore::new();
        let err = store
            .upsert_post(NewPost::new("orphan", "Orphan", "", 42))
            .unwrap_err();
        assert!(matches!(err, FolioError::NotFound(msg) if msg == "author 42"));
    }

    #[test]
    fn upsert_post_requires_existing_links() {
        let mut store = StoreFixture::new()
            .with_author("alice@example.com", "Alice")
            .store;
        let err = store
            .upsert_post(NewPost::new("p", "P", "", 1).with_tags([5]))
            .unwrap_err();
        assert!(matches!(err, FolioError::NotFound(msg) if msg == "tag 5"));
    }

    #[test]
    fn read_errors_propagate() {
        let store = blog();
        store.backend().set_simulate_read_error(true);
        assert!(matches!(
            store.find_posts(&PostQuery::all()),
            Err(FolioError::Store(_))
        ));
        assert!(store.list_tags().is_err());
    }

    #[test]
    fn write_errors_propagate() {
        let mut store = InMemoryStore::new();
        store.backend().set_simulate_write_error(true);
        let result = store.upsert_category(NewCategory {
            slug: "career".into(),
            name: "Career".into(),
        });
        assert!(matches!(result, Err(FolioError::Store(_))));
    }

    #[test]
    fn dangling_relation_is_a_store_error() {
        let store = InMemoryStore::new();
        let now = Utc::now();
        let tables = Tables {
            posts: vec![PostRecord {
                id: 1,
                slug: "lost".into(),
                title: "Lost".into(),
                content: String::new(),
                published: true,
                featured: false,
                cover_image_url: None,
                author_id: 9,
                category_ids: Default::default(),
                tag_ids: Default::default(),
                created_at: now,
                updated_at: now,
            }],
            ..Default::default()
        };
        store.backend().save(&tables).unwrap();
        assert!(matches!(
            store.find_posts(&PostQuery::all()),
            Err(FolioError::Store(msg)) if msg.contains("missing author 9")
        ));
    }
}
