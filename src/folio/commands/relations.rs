//! Relation loaders for nested fields that were not loaded with their parent,
//! e.g. the posts of a post's author.

use crate::error::Result;
use crate::model::{Post, RecordId};
use crate::query::{Condition, PostQuery};
use crate::store::DataStore;

pub fn posts_by_author<S: DataStore + ?Sized>(store: &S, author_id: RecordId) -> Result<Vec<Post>> {
    store.find_posts(&PostQuery::matching(Condition::AuthorId(author_id)))
}

pub fn posts_in_category<S: DataStore + ?Sized>(
    store: &S,
    category_id: RecordId,
) -> Result<Vec<Post>> {
    store.find_posts(&PostQuery::matching(Condition::CategoryId(category_id)))
}

pub fn posts_with_tag<S: DataStore + ?Sized>(store: &S, tag_id: RecordId) -> Result<Vec<Post>> {
    store.find_posts(&PostQuery::matching(Condition::TagId(tag_id)))
}
