//! # GraphQL Schema
//!
//! The resolver map: binds the query fields to the [`BlogApi`] and converts
//! results into the object types in [`types`]. Read-only, so the schema uses
//! `EmptyMutation` and `EmptySubscription`.
//!
//! Every field resolves on its own. A failing field becomes an entry in the
//! response's `errors` with an extension `code` (`BAD_USER_INPUT` or
//! `INTERNAL_SERVER_ERROR`) while the other fields still resolve.
//!
//! Executors do blocking store I/O, so resolvers hand them to the blocking
//! pool via [`run_blocking`].

pub mod types;

use crate::api::BlogApi;
use crate::error::FolioError;
use crate::query::PostFilter;
use crate::store::DataStore;
use async_graphql::extensions::Tracing;
use async_graphql::{
    Context, EmptyMutation, EmptySubscription, ErrorExtensions, InputObject, Object, Result,
    Schema, ID,
};
use std::sync::Arc;
use types::{AuthorObject, CategoryObject, PostObject, TagObject};

/// The API as shared between concurrent requests.
pub type SharedApi = Arc<BlogApi<Box<dyn DataStore>>>;

pub type FolioSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(api: SharedApi) -> FolioSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(api)
        .extension(Tracing)
        .finish()
}

impl ErrorExtensions for FolioError {
    fn extend(&self) -> async_graphql::Error {
        let code = if self.is_user_error() {
            "BAD_USER_INPUT"
        } else {
            "INTERNAL_SERVER_ERROR"
        };
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

/// Run an API call on the blocking pool.
pub(crate) async fn run_blocking<T, F>(ctx: &Context<'_>, f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&BlogApi<Box<dyn DataStore>>) -> crate::error::Result<T> + Send + 'static,
{
    let api = ctx.data::<SharedApi>()?.clone();
    tokio::task::spawn_blocking(move || f(&*api))
        .await
        .map_err(|e| FolioError::Api(format!("resolver task failed: {}", e)).extend())?
        .map_err(|e| {
            if !e.is_user_error() {
                tracing::error!(error = %e, "resolver failed");
            }
            e.extend()
        })
}

/// Filter arguments for `posts`. Every field is optional.
#[derive(InputObject, Debug, Clone, Default)]
pub struct PostFilterInput {
    /// Substring matched against title or content.
    pub search: Option<String>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
    pub author_email: Option<String>,
    /// Posts in any of these categories. Null items are skipped.
    pub category_slugs: Option<Vec<Option<String>>>,
    /// Posts with any of these tags. Null items are skipped.
    pub tag_slugs: Option<Vec<Option<String>>>,
    pub limit: Option<i32>,
    pub offset: Option<i32>,
}

impl From<PostFilterInput> for PostFilter {
    fn from(input: PostFilterInput) -> Self {
        Self {
            search: input.search,
            published: input.published,
            featured: input.featured,
            author_email: input.author_email,
            category_slugs: input.category_slugs.map(present),
            tag_slugs: input.tag_slugs.map(present),
            limit: input.limit.map(i64::from),
            offset: input.offset.map(i64::from),
        }
    }
}

fn present(slugs: Vec<Option<String>>) -> Vec<String> {
    slugs.into_iter().flatten().collect()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Posts matching the filter, oldest first.
    async fn posts(
        &self,
        ctx: &Context<'_>,
        filter: Option<PostFilterInput>,
    ) -> Result<Vec<PostObject>> {
        let filter = filter.map(PostFilter::from);
        let posts = run_blocking(ctx, move |api| api.posts(filter.as_ref())).await?;
        Ok(posts.into_iter().map(PostObject::from).collect())
    }

    /// A single post by slug.
    async fn post(&self, ctx: &Context<'_>, slug: String) -> Result<Option<PostObject>> {
        let post = run_blocking(ctx, move |api| api.post(&slug)).await?;
        Ok(post.map(PostObject::from))
    }

    /// A single author by id or email. The id wins when both are given.
    async fn author(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
        email: Option<String>,
    ) -> Result<Option<AuthorObject>> {
        let author = run_blocking(ctx, move |api| {
            api.author(id.as_ref().map(|id| id.as_str()), email.as_deref())
        })
        .await?;
        Ok(author.map(AuthorObject::from))
    }

    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<AuthorObject>> {
        let authors = run_blocking(ctx, |api| api.authors()).await?;
        Ok(authors.into_iter().map(AuthorObject::from).collect())
    }

    async fn categories(&self, ctx: &Context<'_>) -> Result<Vec<CategoryObject>> {
        let categories = run_blocking(ctx, |api| api.categories()).await?;
        Ok(categories.into_iter().map(CategoryObject::from).collect())
    }

    async fn tags(&self, ctx: &Context<'_>) -> Result<Vec<TagObject>> {
        let tags = run_blocking(ctx, |api| api.tags()).await?;
        Ok(tags.into_iter().map(TagObject::from).collect())
    }
}
