//! Root query fields for profile lookup
//!
//! Each field is a single delegation to the [`ProfileRepository`] installed
//! in schema data. Not-found resolves to `null`; store failures surface as
//! GraphQL errors with the data layer's message untouched.

use std::sync::Arc;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Result, Schema, ID};

use crate::repository::ProfileRepository;
use crate::types::Profile;

/// Root query type exposing the profile lookup fields
#[derive(Default)]
pub struct ProfileQuery;

#[Object]
impl ProfileQuery {
    /// Fetch the profile owned by a user
    #[graphql(cache_control(max_age = 60))]
    async fn get_profile_by_user(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "userID")] user_id: ID,
    ) -> Result<Option<Profile>> {
        let repo = ctx.data::<Arc<dyn ProfileRepository>>()?;
        Ok(repo.find_first_by_user_id(user_id.as_str()).await?)
    }

    /// Fetch a profile by its own identifier
    #[graphql(cache_control(max_age = 60))]
    async fn get_user_profile_by_id(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "profileID")] profile_id: ID,
    ) -> Result<Option<Profile>> {
        let repo = ctx.data::<Arc<dyn ProfileRepository>>()?;
        Ok(repo.find_first_by_profile_id(profile_id.as_str()).await?)
    }
}

/// Schema served by the profile service
pub type ProfileSchema = Schema<ProfileQuery, EmptyMutation, EmptySubscription>;

/// Build the schema with its backing repository installed
pub fn build_schema(repo: Arc<dyn ProfileRepository>) -> ProfileSchema {
    Schema::build(ProfileQuery, EmptyMutation, EmptySubscription)
        .data(repo)
        .finish()
}
