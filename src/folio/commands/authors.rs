use crate::error::Result;
use crate::model::AuthorWithPosts;
use crate::store::DataStore;

pub fn run<S: DataStore + ?Sized>(store: &S) -> Result<Vec<AuthorWithPosts>> {
    store.list_authors()
}
