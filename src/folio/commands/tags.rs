use crate::error::Result;
use crate::model::TagWithPosts;
use crate::store::DataStore;

pub fn run<S: DataStore + ?Sized>(store: &S) -> Result<Vec<TagWithPosts>> {
    store.list_tags()
}
