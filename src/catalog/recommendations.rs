//! Personalised recommendation cache.

use std::future::Future;
use std::time::Duration;

use crate::cache::SharedCache;
use crate::error::{CacheError, Result};
use crate::models::{Recommendation, RecommendationPreferences};

/// Key prefix; the full prefix for one shopper is `recommendations:<user_id>:`
pub const RECOMMENDATION_NAMESPACE: &str = "recommendations:";

pub const DEFAULT_RECOMMENDATION_TTL: Duration = Duration::from_secs(30 * 60);

/// Memoizes recommendations per shopper and preference set.
#[derive(Debug, Clone)]
pub struct RecommendationCache {
    cache: SharedCache<Vec<Recommendation>>,
}

impl RecommendationCache {
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            cache: SharedCache::new(max_entries, ttl),
        }
    }

    /// Cache key, e.g. `recommendations:u42:{"occasion":"wedding"}`.
    ///
    /// `user_id` must be non-empty and free of `*` and `:`.
    pub fn key_for(user_id: &str, preferences: &RecommendationPreferences) -> Result<String> {
        check_user_id(user_id)?;
        let encoded = serde_json::to_string(preferences)
            .map_err(|e| CacheError::Internal(format!("Failed to encode preferences: {}", e)))?;
        Ok(format!("{}{}:{}", RECOMMENDATION_NAMESPACE, user_id, encoded))
    }

    pub async fn get_recommendations<F, Fut, E>(
        &self,
        user_id: &str,
        preferences: &RecommendationPreferences,
        fetch: F,
    ) -> std::result::Result<Vec<Recommendation>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<Vec<Recommendation>, E>>,
        E: From<CacheError>,
    {
        let key = Self::key_for(user_id, preferences)?;
        self.cache.get_or_set(&key, fetch, None).await
    }

    /// Drops every cached result for one shopper, whatever the preferences.
    pub async fn invalidate_user(&self, user_id: &str) -> Result<usize> {
        check_user_id(user_id)?;
        self.cache
            .invalidate(&format!("{}{}:*", RECOMMENDATION_NAMESPACE, user_id))
            .await
    }

    pub async fn invalidate_all(&self) -> Result<usize> {
        self.cache
            .invalidate(&format!("{}*", RECOMMENDATION_NAMESPACE))
            .await
    }

    pub fn cache(&self) -> &SharedCache<Vec<Recommendation>> {
        &self.cache
    }
}

/// `*` is a wildcard and `:` ends the user segment, so either would let one
/// shopper's invalidation pattern reach another shopper's keys.
fn check_user_id(user_id: &str) -> Result<()> {
    if user_id.is_empty() || user_id.contains(&['*', ':'][..]) {
        return Err(CacheError::InvalidRequest(format!(
            "Invalid user id for recommendation key: {:?}",
            user_id
        )));
    }
    Ok(())
}
