//! Axum glue for serving the profile schema

use async_graphql::{Request, Response};
use axum::{extract::Extension, Json};

use crate::query::ProfileSchema;

/// GraphQL POST handler
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use axum::{routing::post, Extension, Router};
/// use profile_graphql::{build_schema, graphql_handler, InMemoryProfileRepository};
///
/// # fn example() {
/// let schema = build_schema(Arc::new(InMemoryProfileRepository::new()));
/// let app: Router = Router::new()
///     .route("/graphql", post(graphql_handler))
///     .layer(Extension(schema));
/// # }
/// ```
pub async fn graphql_handler(
    Extension(schema): Extension<ProfileSchema>,
    req: Json<Request>,
) -> Json<Response> {
    Json(schema.execute(req.0).await)
}
