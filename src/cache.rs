//! TTL caching for profile lookups
//!
//! The resolvers themselves never cache; they call a repository that may be
//! wrapped in [`CachedProfileRepository`], which reuses results for a bounded
//! window instead of re-querying the store on every request.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::repository::ProfileRepository;
use crate::types::Profile;
use crate::Result;

/// How long cached lookups stay fresh
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

struct Entry<V> {
    value: V,
    stored_at: Instant,
}

/// Keyed cache with a fixed time-to-live
///
/// Entries older than the TTL read as absent and are overwritten by the next
/// insert for their key.
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: Arc<Mutex<HashMap<K, Entry<V>>>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Create an empty cache whose entries expire after `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Look up a key, treating expired entries as absent
    pub async fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let entries = self.entries.lock().await;
        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => Some(entry.value.clone()),
            _ => None,
        }
    }

    /// Store a value, restarting its key's window
    pub async fn insert(&self, key: K, value: V) {
        let mut entries = self.entries.lock().await;
        entries.insert(
            key,
            Entry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    /// Drop every entry
    pub async fn clear(&self) {
        let mut entries = self.entries.lock().await;
        entries.clear();
    }
}

impl<K, V> Clone for TtlCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            ttl: self.ttl,
            entries: self.entries.clone(),
        }
    }
}

/// Read-through TTL cache over any [`ProfileRepository`]
///
/// Each lookup key gets its own cache. Absent results are cached for the
/// window as well, so repeated misses stay off the store. Store errors are
/// returned as-is and never cached.
pub struct CachedProfileRepository<R> {
    inner: Arc<R>,
    by_user: TtlCache<String, Option<Profile>>,
    by_profile: TtlCache<String, Option<Profile>>,
}

impl<R: ProfileRepository> CachedProfileRepository<R> {
    /// Wrap a repository with the default 60 second window
    pub fn new(inner: R) -> Self {
        Self::with_ttl(inner, DEFAULT_TTL)
    }

    /// Wrap a repository with a custom window
    pub fn with_ttl(inner: R, ttl: Duration) -> Self {
        Self {
            inner: Arc::new(inner),
            by_user: TtlCache::new(ttl),
            by_profile: TtlCache::new(ttl),
        }
    }

    /// Seed both key caches with a profile already in hand
    pub async fn prime(&self, profile: Profile) {
        self.by_user
            .insert(profile.user_id.clone(), Some(profile.clone()))
            .await;
        self.by_profile
            .insert(profile.profile_id.clone(), Some(profile))
            .await;
    }

    /// Drop all cached lookups
    pub async fn clear(&self) {
        self.by_user.clear().await;
        self.by_profile.clear().await;
    }
}

impl<R> Clone for CachedProfileRepository<R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            by_user: self.by_user.clone(),
            by_profile: self.by_profile.clone(),
        }
    }
}

#[async_trait]
impl<R: ProfileRepository> ProfileRepository for CachedProfileRepository<R> {
    async fn find_first_by_user_id(&self, user_id: &str) -> Result<Option<Profile>> {
        if let Some(cached) = self.by_user.get(user_id).await {
            tracing::debug!(user_id = %user_id, "profile_cache_hit");
            return Ok(cached);
        }
        let fetched = self.inner.find_first_by_user_id(user_id).await?;
        tracing::debug!(user_id = %user_id, found = fetched.is_some(), "profile_cache_miss");
        self.by_user.insert(user_id.to_string(), fetched.clone()).await;
        Ok(fetched)
    }

    async fn find_first_by_profile_id(&self, profile_id: &str) -> Result<Option<Profile>> {
        if let Some(cached) = self.by_profile.get(profile_id).await {
            tracing::debug!(profile_id = %profile_id, "profile_cache_hit");
            return Ok(cached);
        }
        let fetched = self.inner.find_first_by_profile_id(profile_id).await?;
        tracing::debug!(profile_id = %profile_id, found = fetched.is_some(), "profile_cache_miss");
        self.by_profile
            .insert(profile_id.to_string(), fetched.clone())
            .await;
        Ok(fetched)
    }
}
