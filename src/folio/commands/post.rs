use crate::error::Result;
use crate::model::Post;
use crate::query::PostKey;
use crate::store::DataStore;

/// Look a post up by slug. Unknown slugs are `None`, not an error.
pub fn run<S: DataStore + ?Sized>(store: &S, slug: &str) -> Result<Option<Post>> {
    store.find_post(&PostKey::Slug(slug.to_string()))
}
