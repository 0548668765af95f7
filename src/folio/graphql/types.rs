//! GraphQL object types.
//!
//! Posts always arrive with author, categories and tags attached. Authors,
//! categories and tags carry their posts when they came from a listing or an
//! author lookup; otherwise (a post's author, say) the posts are loaded on
//! demand through the API's relation loaders.

use super::run_blocking;
use crate::model::{Author, AuthorWithPosts, Category, CategoryWithPosts, Post, Tag, TagWithPosts};
use async_graphql::{Context, Object, Result, ID};
use chrono::{DateTime, Utc};

fn post_objects(posts: Vec<Post>) -> Vec<PostObject> {
    posts.into_iter().map(PostObject::from).collect()
}

pub struct PostObject(Post);

impl From<Post> for PostObject {
    fn from(post: Post) -> Self {
        Self(post)
    }
}

#[Object(name = "Post")]
impl PostObject {
    async fn id(&self) -> ID {
        ID(self.0.id().to_string())
    }

    async fn slug(&self) -> &str {
        self.0.slug()
    }

    async fn title(&self) -> &str {
        self.0.title()
    }

    async fn content(&self) -> &str {
        &self.0.record.content
    }

    async fn published(&self) -> bool {
        self.0.record.published
    }

    async fn featured(&self) -> bool {
        self.0.record.featured
    }

    async fn cover_image_url(&self) -> Option<&str> {
        self.0.record.cover_image_url.as_deref()
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.0.record.created_at
    }

    async fn updated_at(&self) -> DateTime<Utc> {
        self.0.record.updated_at
    }

    async fn author(&self) -> AuthorObject {
        AuthorObject::lazy(self.0.author.clone())
    }

    async fn categories(&self) -> Vec<CategoryObject> {
        self.0
            .categories
            .iter()
            .cloned()
            .map(CategoryObject::lazy)
            .collect()
    }

    async fn tags(&self) -> Vec<TagObject> {
        self.0.tags.iter().cloned().map(TagObject::lazy).collect()
    }
}

pub struct AuthorObject {
    author: Author,
    posts: Option<Vec<Post>>,
}

impl AuthorObject {
    fn lazy(author: Author) -> Self {
        Self {
            author,
            posts: None,
        }
    }
}

impl From<AuthorWithPosts> for AuthorObject {
    fn from(loaded: AuthorWithPosts) -> Self {
        Self {
            author: loaded.author,
            posts: Some(loaded.posts),
        }
    }
}

#[Object(name = "Author")]
impl AuthorObject {
    async fn id(&self) -> ID {
        ID(self.author.id.to_string())
    }

    async fn email(&self) -> &str {
        &self.author.email
    }

    async fn name(&self) -> &str {
        &self.author.name
    }

    async fn bio(&self) -> Option<&str> {
        self.author.bio.as_deref()
    }

    async fn avatar_url(&self) -> Option<&str> {
        self.author.avatar_url.as_deref()
    }

    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<PostObject>> {
        let posts = match &self.posts {
            Some(posts) => posts.clone(),
            None => {
                let id = self.author.id;
                run_blocking(ctx, move |api| api.posts_by_author(id)).await?
            }
        };
        Ok(post_objects(posts))
    }
}

pub struct CategoryObject {
    category: Category,
    posts: Option<Vec<Post>>,
}

impl CategoryObject {
    fn lazy(category: Category) -> Self {
        Self {
            category,
            posts: None,
        }
    }
}

impl From<CategoryWithPosts> for CategoryObject {
    fn from(loaded: CategoryWithPosts) -> Self {
        Self {
            category: loaded.category,
            posts: Some(loaded.posts),
        }
    }
}

#[Object(name = "Category")]
impl CategoryObject {
    async fn id(&self) -> ID {
        ID(self.category.id.to_string())
    }

    async fn slug(&self) -> &str {
        &self.category.slug
    }

    async fn name(&self) -> &str {
        &self.category.name
    }

    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<PostObject>> {
        let posts = match &self.posts {
            Some(posts) => posts.clone(),
            None => {
                let id = self.category.id;
                run_blocking(ctx, move |api| api.posts_in_category(id)).await?
            }
        };
        Ok(post_objects(posts))
    }
}

pub struct TagObject {
    tag: Tag,
    posts: Option<Vec<Post>>,
}

impl TagObject {
    fn lazy(tag: Tag) -> Self {
        Self { tag, posts: None }
    }
}

impl From<TagWithPosts> for TagObject {
    fn from(loaded: TagWithPosts) -> Self {
        Self {
            tag: loaded.tag,
            posts: Some(loaded.posts),
        }
    }
}

#[Object(name = "Tag")]
impl TagObject {
    async fn id(&self) -> ID {
        ID(self.tag.id.to_string())
    }

    async fn slug(&self) -> &str {
        &self.tag.slug
    }

    async fn name(&self) -> &str {
        &self.tag.name
    }

    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<PostObject>> {
        let posts = match &self.posts {
            Some(posts) => posts.clone(),
            None => {
                let id = self.tag.id;
                run_blocking(ctx, move |api| api.posts_with_tag(id)).await?
            }
        };
        Ok(post_objects(posts))
    }
}
