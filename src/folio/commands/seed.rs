//! Sample data set.
//!
//! Every record is upserted by its natural key (email or slug), so running the
//! seed against a populated store creates nothing new and changes nothing.

use crate::error::{FolioError, Result};
use crate::model::{NewAuthor, NewCategory, NewPost, NewTag, RecordId};
use crate::store::DataStore;
use std::collections::HashMap;

struct AuthorSeed {
    email: &'static str,
    name: &'static str,
    bio: &'static str,
    avatar: u32,
}

struct PostSeed {
    title: &'static str,
    slug: &'static str,
    content: &'static str,
    author: &'static str,
    published: bool,
    featured: bool,
    cover: &'static str,
    categories: &'static [&'static str],
    tags: &'static [&'static str],
}

const AUTHORS: &[AuthorSeed] = &[
    AuthorSeed {
        email: "alice@example.com",
        name: "Alice Johnson",
        bio: "Frontend Developer specializing in Nuxt.js and Vue.js.",
        avatar: 15,
    },
    AuthorSeed {
        email: "bob@example.com",
        name: "Bob Smith",
        bio: "Backend engineer focused on Node.js, GraphQL, and Prisma.",
        avatar: 22,
    },
    AuthorSeed {
        email: "carol@example.com",
        name: "Carol Nguyen",
        bio: "Full-stack engineer passionate about TypeScript and design systems.",
        avatar: 33,
    },
];

const CATEGORIES: &[(&str, &str)] = &[
    ("Web Dev", "web-dev"),
    ("JavaScript", "javascript"),
    ("Design", "design"),
    ("DevOps", "devops"),
    ("Career", "career"),
];

const TAGS: &[(&str, &str)] = &[
    ("Nuxt", "nuxt"),
    ("Vue", "vue"),
    ("TypeScript", "typescript"),
    ("Tailwind", "tailwind"),
    ("GraphQL", "graphql"),
    ("Design", "design"),
    ("Prisma", "prisma"),
    ("Database", "database"),
    ("React", "react"),
    ("CSS", "css"),
    ("Serverless", "serverless"),
    ("AWS", "aws"),
];

const POSTS: &[PostSeed] = &[
    PostSeed {
        title: "Getting Started with Nuxt 3 and Apollo Server",
        slug: "getting-started-nuxt3-apollo",
        content: "Set up Nuxt 3 with GraphQL (Apollo Server) and Prisma for a complete full-stack blog app.",
        author: "bob@example.com",
        published: true,
        featured: true,
        cover: "nuxt 3",
        categories: &["web-dev", "javascript"],
        tags: &["nuxt", "graphql", "typescript"],
    },
    PostSeed {
        title: "A Deep Dive into Prisma's Data Modeling",
        slug: "prisma-data-modeling-deep-dive",
        content: "Learn how to design complex data models and relationships using Prisma's schema language.",
        author: "bob@example.com",
        published: true,
        featured: true,
        cover: "prisma database",
        categories: &["web-dev", "devops"],
        tags: &["prisma", "database", "typescript"],
    },
    PostSeed {
        title: "Designing Accessible User Interfaces",
        slug: "designing-accessible-uis",
        content: "Practical tips for accessible design systems that comply with WCAG standards.",
        author: "alice@example.com",
        published: true,
        featured: true,
        cover: "accessible design",
        categories: &["design", "web-dev"],
        tags: &["css", "design", "vue"],
    },
    PostSeed {
        title: "Mastering Tailwind CSS Utility Classes",
        slug: "mastering-tailwind-css",
        content: "Use Tailwind CSS utilities to build fast, scalable, and responsive UIs.",
        author: "alice@example.com",
        published: true,
        featured: false,
        cover: "tailwind css",
        categories: &["design", "web-dev"],
        tags: &["tailwind", "css", "vue"],
    },
    PostSeed {
        title: "Understanding TypeScript Generics in Vue 3",
        slug: "typescript-generics-vue3",
        content: "Implement TypeScript generics in Vue 3 Composition API for reusable components.",
        author: "alice@example.com",
        published: true,
        featured: false,
        cover: "typescript vue3",
        categories: &["javascript", "web-dev"],
        tags: &["vue", "typescript"],
    },
    PostSeed {
        title: "Building Serverless Functions with Nuxt 3 Nitro",
        slug: "nuxt3-nitro-serverless",
        content: "Deploy serverless APIs with Nuxt 3's Nitro engine and scale automatically.",
        author: "bob@example.com",
        published: true,
        featured: false,
        cover: "serverless",
        categories: &["devops", "web-dev"],
        tags: &["nuxt", "serverless", "aws"],
    },
    PostSeed {
        title: "GraphQL vs REST: A Modern Comparison",
        slug: "graphql-vs-rest-comparison",
        content: "When to use GraphQL vs REST and what trade-offs matter most for modern teams.",
        author: "bob@example.com",
        published: true,
        featured: false,
        cover: "graphql api",
        categories: &["web-dev", "devops"],
        tags: &["graphql", "database"],
    },
    PostSeed {
        title: "React Developer's Guide to Vue 3",
        slug: "react-guide-to-vue3",
        content: "An easy guide for React developers transitioning to Vue 3 and Composition API.",
        author: "alice@example.com",
        published: true,
        featured: false,
        cover: "react vue3",
        categories: &["web-dev", "career"],
        tags: &["react", "vue", "typescript"],
    },
    PostSeed {
        title: "Optimizing SQLite Performance for Local Apps",
        slug: "optimizing-sqlite-performance",
        content: "How to optimize SQLite for fast local development environments.",
        author: "bob@example.com",
        published: true,
        featured: false,
        cover: "sqlite database",
        categories: &["devops"],
        tags: &["database", "prisma"],
    },
    PostSeed {
        title: "The Future of Frontend Development in 2025",
        slug: "future-of-frontend-2025",
        content: "Predictions on where frontend development is heading in 2025: AI, edge computing, and more.",
        author: "carol@example.com",
        published: true,
        featured: false,
        cover: "frontend developer",
        categories: &["career", "web-dev"],
        tags: &["nuxt", "react", "vue"],
    },
    PostSeed {
        title: "Draft Post: Working with GraphQL Mutations",
        slug: "draft-graphql-mutations",
        content: "A draft on implementing GraphQL mutations with Apollo Server and Prisma.",
        author: "bob@example.com",
        published: false,
        featured: false,
        cover: "graphql mutation",
        categories: &["web-dev"],
        tags: &["graphql", "prisma"],
    },
    PostSeed {
        title: "Implementing Dark Mode with Tailwind CSS",
        slug: "implementing-dark-mode-tailwind",
        content: "Add dark mode support to your Tailwind project with zero custom CSS.",
        author: "alice@example.com",
        published: true,
        featured: false,
        cover: "dark mode ui",
        categories: &["design"],
        tags: &["tailwind", "css"],
    },
    PostSeed {
        title: "Why TypeScript is Essential for Large Codebases",
        slug: "why-typescript-essential",
        content: "Why teams at scale rely on TypeScript for maintainability and reliability.",
        author: "bob@example.com",
        published: true,
        featured: false,
        cover: "typescript code",
        categories: &["javascript", "career"],
        tags: &["typescript"],
    },
    PostSeed {
        title: "A Designer's Guide to the Nuxt 3 Ecosystem",
        slug: "designers-guide-nuxt3",
        content: "How designers can use Nuxt 3 tools to work better with developers.",
        author: "alice@example.com",
        published: true,
        featured: false,
        cover: "nuxt design",
        categories: &["design", "web-dev"],
        tags: &["nuxt", "vue", "tailwind"],
    },
    PostSeed {
        title: "Deploying Nuxt Apps with AWS Amplify",
        slug: "deploying-nuxt-aws-amplify",
        content: "Use AWS Amplify for continuous deployment and hosting of Nuxt apps.",
        author: "bob@example.com",
        published: true,
        featured: false,
        cover: "aws amplify nuxt",
        categories: &["devops"],
        tags: &["aws", "serverless", "nuxt"],
    },
];

fn cover_url(query: &str) -> String {
    format!(
        "https://source.unsplash.com/1600x900/?{}",
        urlencoding::encode(query)
    )
}

fn avatar_url(id: u32) -> String {
    format!("https://i.pravatar.cc/256?img={}", id)
}

/// Created vs already-present counts for one table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub created: usize,
    pub existing: usize,
}

impl Tally {
    fn record(&mut self, created: bool) {
        if created {
            self.created += 1;
        } else {
            self.existing += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.created + self.existing
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub authors: Tally,
    pub categories: Tally,
    pub tags: Tally,
    pub posts: Tally,
}

impl SeedReport {
    pub fn created(&self) -> usize {
        self.authors.created + self.categories.created + self.tags.created + self.posts.created
    }
}

fn lookup(ids: &HashMap<&str, RecordId>, kind: &str, key: &str) -> Result<RecordId> {
    ids.get(key)
        .copied()
        .ok_or_else(|| FolioError::NotFound(format!("{} '{}'", kind, key)))
}

pub fn run<S: DataStore + ?Sized>(store: &mut S) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    let mut authors = HashMap::new();
    for seed in AUTHORS {
        let upserted = store.upsert_author(NewAuthor {
            email: seed.email.to_string(),
            name: seed.name.to_string(),
            bio: Some(seed.bio.to_string()),
            avatar_url: Some(avatar_url(seed.avatar)),
        })?;
        report.authors.record(upserted.created);
        authors.insert(seed.email, upserted.record.id);
    }

    let mut categories = HashMap::new();
    for (name, slug) in CATEGORIES {
        let upserted = store.upsert_category(NewCategory {
            slug: slug.to_string(),
            name: name.to_string(),
        })?;
        report.categories.record(upserted.created);
        categories.insert(*slug, upserted.record.id);
    }

    let mut tags = HashMap::new();
    for (name, slug) in TAGS {
        let upserted = store.upsert_tag(NewTag {
            slug: slug.to_string(),
            name: name.to_string(),
        })?;
        report.tags.record(upserted.created);
        tags.insert(*slug, upserted.record.id);
    }

    for seed in POSTS {
        let category_ids = seed
            .categories
            .iter()
            .map(|slug| lookup(&categories, "category", slug))
            .collect::<Result<Vec<_>>>()?;
        let tag_ids = seed
            .tags
            .iter()
            .map(|slug| lookup(&tags, "tag", slug))
            .collect::<Result<Vec<_>>>()?;

        let mut post = NewPost::new(
            seed.slug,
            seed.title,
            seed.content,
            lookup(&authors, "author", seed.author)?,
        )
        .published(seed.published)
        .featured(seed.featured)
        .with_categories(category_ids)
        .with_tags(tag_ids);
        post.cover_image_url = Some(cover_url(seed.cover));

        let upserted = store.upsert_post(post)?;
        report.posts.record(upserted.created);
    }

    tracing::info!(
        created = report.created(),
        posts = report.posts.total(),
        "seed complete"
    );
    Ok(report)
}
