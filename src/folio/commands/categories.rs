use crate::error::Result;
use crate::model::CategoryWithPosts;
use crate::store::DataStore;

pub fn run<S: DataStore + ?Sized>(store: &S) -> Result<Vec<CategoryWithPosts>> {
    store.list_categories()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_categories_with_posts() {
        let store = StoreFixture::new()
            .with_author("alice@example.com", "Alice")
            .with_category("design", "Design")
            .with_category("career", "Career")
            .with_post("a11y", "Accessible UIs", "alice@example.com", &["design"], &[])
            .store;

        let categories = run(&store).unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].category.name, "Design");
        assert_eq!(categories[0].posts[0].slug(), "a11y");
        assert!(categories[1].posts.is_empty());
    }
}
