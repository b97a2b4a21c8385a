//! Profile store access
//!
//! Defines the narrow repository interface the query resolvers delegate to,
//! plus an in-memory implementation usable as a test double or for local
//! wiring.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::types::Profile;
use crate::Result;

/// Read-only access to the profile store
///
/// Both lookups return the first matching record. At most one match per key
/// is expected; if the store holds several, which one comes back is
/// unspecified. Not-found is `Ok(None)`, never an error.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Fetch the profile owned by the given user, if any
    async fn find_first_by_user_id(&self, user_id: &str) -> Result<Option<Profile>>;

    /// Fetch a profile by its own identifier, if any
    async fn find_first_by_profile_id(&self, profile_id: &str) -> Result<Option<Profile>>;
}

/// In-memory profile store
///
/// Scans in insertion order, so with duplicate keys the first inserted
/// record wins. Callers get no ordering promise from the trait.
#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: Mutex<Vec<Profile>>,
}

impl InMemoryProfileRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a profile to the store
    pub async fn insert(&self, profile: Profile) {
        self.profiles.lock().await.push(profile);
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_first_by_user_id(&self, user_id: &str) -> Result<Option<Profile>> {
        let profiles = self.profiles.lock().await;
        Ok(profiles.iter().find(|p| p.user_id == user_id).cloned())
    }

    async fn find_first_by_profile_id(&self, profile_id: &str) -> Result<Option<Profile>> {
        let profiles = self.profiles.lock().await;
        Ok(profiles.iter().find(|p| p.profile_id == profile_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DateTime;
    use chrono::Utc;

    fn sample(profile_id: &str, user_id: &str) -> Profile {
        let now = DateTime(Utc::now());
        Profile {
            profile_id: profile_id.to_string(),
            user_id: user_id.to_string(),
            display_name: "Sample User".to_string(),
            bio: None,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn _assert_object_safe(_: &dyn ProfileRepository) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ProfileRepository>();
    }

    #[tokio::test]
    async fn finds_by_user_id() {
        let repo = InMemoryProfileRepository::new();
        repo.insert(sample("p-1", "u-1")).await;

        let found = repo.find_first_by_user_id("u-1").await.unwrap();
        assert_eq!(found.map(|p| p.profile_id), Some("p-1".to_string()));
    }

    #[tokio::test]
    async fn finds_by_profile_id() {
        let repo = InMemoryProfileRepository::new();
        repo.insert(sample("p-1", "u-1")).await;

        let found = repo.find_first_by_profile_id("p-1").await.unwrap();
        assert_eq!(found.map(|p| p.user_id), Some("u-1".to_string()));
    }

    #[tokio::test]
    async fn missing_key_is_none_not_error() {
        let repo = InMemoryProfileRepository::new();

        assert_eq!(repo.find_first_by_user_id("nobody").await.unwrap(), None);
        assert_eq!(repo.find_first_by_profile_id("nothing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn duplicate_user_key_returns_first_inserted() {
        let repo = InMemoryProfileRepository::new();
        repo.insert(sample("p-1", "u-1")).await;
        repo.insert(sample("p-2", "u-1")).await;

        let found = repo.find_first_by_user_id("u-1").await.unwrap();
        assert_eq!(found.map(|p| p.profile_id), Some("p-1".to_string()));
    }
}
