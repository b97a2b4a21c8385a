//! Common GraphQL types

use async_graphql::{Scalar, ScalarType, SimpleObject, Value};
use chrono::{DateTime as ChronoDateTime, Utc};
use serde::{Deserialize, Serialize};

/// DateTime scalar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateTime(pub ChronoDateTime<Utc>);

#[Scalar]
impl ScalarType for DateTime {
    fn parse(value: Value) -> async_graphql::InputValueResult<Self> {
        if let Value::String(s) = value {
            Ok(DateTime(
                ChronoDateTime::parse_from_rfc3339(&s)
                    .map_err(|e| format!("Invalid DateTime: {}", e))?
                    .with_timezone(&Utc),
            ))
        } else {
            Err("Expected string for DateTime".into())
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.to_rfc3339())
    }
}

/// A per-user profile record, looked up by its own id or its owning user's id.
///
/// Identifiers are opaque strings; this crate never parses or validates them.
/// The store is expected to hold at most one profile per user, which nothing
/// here enforces.
#[derive(SimpleObject, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// The profile's own identifier
    #[graphql(name = "profileID")]
    pub profile_id: String,
    /// Identifier of the owning user
    #[graphql(name = "userID")]
    pub user_id: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
