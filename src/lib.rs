//! # profile-graphql
//!
//! GraphQL building blocks for the profile lookup service.
//!
//! ## Features
//!
//! - **Profile Queries** - root query fields fetching a profile by user id or profile id
//! - **Repository Seam** - narrow async trait over the profile store, with an in-memory double
//! - **TTL Caching** - read-through decorator reusing lookups for a 60 second window
//! - **Axum Handler** - drop-in POST handler for serving the schema
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use profile_graphql::{build_schema, InMemoryProfileRepository};
//!
//! let repo = Arc::new(InMemoryProfileRepository::new());
//! let schema = build_schema(repo);
//! ```

pub mod cache;
pub mod handler;
pub mod query;
pub mod repository;
pub mod types;

pub use cache::{CachedProfileRepository, TtlCache, DEFAULT_TTL};
pub use handler::graphql_handler;
pub use query::{build_schema, ProfileQuery, ProfileSchema};
pub use repository::{InMemoryProfileRepository, ProfileRepository};
pub use types::{DateTime, Profile};

use thiserror::Error;

/// Data-layer errors surfaced by profile lookups
///
/// Failures from the underlying store are opaque here: no retry, no
/// interpretation, the message travels to the caller as-is.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("profile store error: {0}")]
    Storage(String),
}

/// Result type for repository operations
pub type Result<T> = std::result::Result<T, RepositoryError>;
