//! # Folio Architecture
//!
//! Folio is a **read-only blog content service**: authors, posts, categories and
//! tags kept in a record store and queried over GraphQL. The query core is a
//! plain library; the GraphQL schema, the HTTP server and the CLI are clients
//! of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Surfaces (graphql/, server.rs, main.rs)                    │
//! │  - GraphQL resolvers, HTTP endpoint, CLI                    │
//! │  - The ONLY place that knows about async, HTTP or stdout    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over the executors                           │
//! │  - Normalizes inputs (raw author ids → selectors)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Executors (commands/*.rs) + Filter Translator (query/)     │
//! │  - One function per read operation, plus seeding            │
//! │  - Filters become predicates; no I/O assumptions            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<T>`, never prints and never exits. Lookups that find nothing return
//! `Ok(None)`; errors are reserved for bad input and store failures.
//!
//! ## Testing Strategy
//!
//! 1. **Executors and translator**: thorough unit tests against
//!    `InMemoryStore` fixtures. Most tests live here.
//! 2. **Store**: backend behavior, hydration, upserts, file round trips.
//! 3. **API**: dispatch only.
//! 4. **GraphQL**: schema execution on the seeded data set.
//! 5. **CLI**: `tests/` drives the binary with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Query executors and seeding
//! - [`query`]: Filter translation, predicates and windows
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Records, hydrated read shapes and seed inputs
//! - [`graphql`]: Schema, resolvers and object types
//! - [`server`]: actix-web endpoint
//! - [`config`]: Configuration management
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod graphql;
pub mod logging;
pub mod model;
pub mod query;
pub mod server;
pub mod store;

#[cfg(test)]
mod test_utils;
