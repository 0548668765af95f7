use crate::error::Result;
use crate::model::Post;
use crate::query::{translate, PostFilter, SearchMode};
use crate::store::DataStore;

pub fn run<S: DataStore + ?Sized>(
    store: &S,
    filter: Option<&PostFilter>,
    mode: SearchMode,
) -> Result<Vec<Post>> {
    let query = translate(filter, mode)?;
    tracing::debug!(?query, "posts");
    store.find_posts(&query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn blog() -> InMemoryStore {
        StoreFixture::new()
            .with_author("alice@example.com", "Alice")
            .with_author("bob@example.com", "Bob")
            .with_category("design", "Design")
            .with_category("devops", "DevOps")
            .with_category("career", "Career")
            .with_tag("css", "CSS")
            .with_tag("aws", "AWS")
            .with_post("tailwind", "Mastering Tailwind", "alice@example.com", &["design"], &["css"])
            .with_post("amplify", "Deploying with Amplify", "bob@example.com", &["devops"], &["aws"])
            .with_post("dark-mode", "Dark Mode", "alice@example.com", &["design", "devops"], &["css"])
            .with_draft("mutations", "Draft: GraphQL Mutations", "bob@example.com")
            .with_featured("future", "The Future of Frontend", "alice@example.com")
            .store
    }

    fn slugs(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.slug()).collect()
    }

    #[test]
    fn no_filter_returns_every_post_in_id_order() {
        let store = blog();
        let posts = run(&store, None, SearchMode::default()).unwrap();
        assert_eq!(
            slugs(&posts),
            vec!["tailwind", "amplify", "dark-mode", "mutations", "future"]
        );

        let empty = run(&store, Some(&PostFilter::default()), SearchMode::default()).unwrap();
        assert_eq!(empty, posts);
    }

    #[test]
    fn blank_search_equals_no_search() {
        let store = blog();
        let all = run(&store, None, SearchMode::default()).unwrap();
        let blank = run(&store, Some(&PostFilter::search("  ")), SearchMode::default()).unwrap();
        assert_eq!(blank, all);
    }

    #[test]
    fn search_matches_title_or_content() {
        let store = blog();
        let posts = run(&store, Some(&PostFilter::search("tailwind")), SearchMode::Insensitive).unwrap();
        assert_eq!(slugs(&posts), vec!["tailwind"]);

        // Content is "Content for <title>"
        let posts = run(&store, Some(&PostFilter::search("content for dark")), SearchMode::Insensitive).unwrap();
        assert_eq!(slugs(&posts), vec!["dark-mode"]);
    }

    #[test]
    fn sensitive_search_respects_case() {
        let store = blog();
        let posts = run(&store, Some(&PostFilter::search("tailwind")), SearchMode::Sensitive).unwrap();
        assert!(posts.is_empty());
        let posts = run(&store, Some(&PostFilter::search("Tailwind")), SearchMode::Sensitive).unwrap();
        assert_eq!(slugs(&posts), vec!["tailwind"]);
    }

    #[test]
    fn category_filter_keeps_only_members() {
        let store = blog();
        let filter = PostFilter {
            category_slugs: Some(vec!["devops".into(), "nope".into()]),
            ..Default::default()
        };
        let posts = run(&store, Some(&filter), SearchMode::default()).unwrap();
        assert_eq!(slugs(&posts), vec!["amplify", "dark-mode"]);
        for post in &posts {
            assert!(post.categories.iter().any(|c| c.slug == "devops"));
        }
    }

    #[test]
    fn category_without_posts_matches_nothing() {
        let store = blog();
        let filter = PostFilter {
            category_slugs: Some(vec!["career".into()]),
            ..Default::default()
        };
        assert!(run(&store, Some(&filter), SearchMode::default()).unwrap().is_empty());
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let store = blog();
        let filter = PostFilter {
            category_slugs: Some(vec!["no-such-category".into()]),
            ..Default::default()
        };
        assert!(run(&store, Some(&filter), SearchMode::default()).unwrap().is_empty());
    }

    #[test]
    fn unknown_tag_matches_nothing() {
        let store = blog();
        let filter = PostFilter {
            tag_slugs: Some(vec!["no-such-tag".into(), "also-missing".into()]),
            ..Default::default()
        };
        assert!(run(&store, Some(&filter), SearchMode::default()).unwrap().is_empty());
    }

    #[test]
    fn flags_author_and_tags_combine() {
        let store = blog();
        let filter = PostFilter {
            published: Some(true),
            author_email: Some("alice@example.com".into()),
            tag_slugs: Some(vec!["css".into()]),
            ..Default::default()
        };
        let posts = run(&store, Some(&filter), SearchMode::default()).unwrap();
        assert_eq!(slugs(&posts), vec!["tailwind", "dark-mode"]);

        let drafts = PostFilter {
            published: Some(false),
            ..Default::default()
        };
        let posts = run(&store, Some(&drafts), SearchMode::default()).unwrap();
        assert_eq!(slugs(&posts), vec!["mutations"]);

        let featured = PostFilter {
            featured: Some(true),
            ..Default::default()
        };
        let posts = run(&store, Some(&featured), SearchMode::default()).unwrap();
        assert_eq!(slugs(&posts), vec!["future"]);
    }

    #[test]
    fn pagination_returns_second_and_third() {
        let store = blog();
        let posts = run(&store, Some(&PostFilter::page(2, 1)), SearchMode::default()).unwrap();
        assert_eq!(slugs(&posts), vec!["amplify", "dark-mode"]);
    }

    #[test]
    fn invalid_window_never_reaches_the_store() {
        let store = blog();
        store.backend().set_simulate_read_error(true);
        let err = run(&store, Some(&PostFilter::page(-2, 0)), SearchMode::default()).unwrap_err();
        assert!(matches!(err, FolioError::InvalidInput(_)));
    }
}
