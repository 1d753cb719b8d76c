//! Clothing catalog cache.

use std::future::Future;
use std::time::Duration;

use crate::cache::SharedCache;
use crate::error::{CacheError, Result};
use crate::models::{ClothingFilters, ClothingItem};

/// Key prefix for catalog listings
pub const CLOTHING_NAMESPACE: &str = "clothing:";

/// Catalog data changes rarely, so it outlives the general-purpose default
pub const DEFAULT_CLOTHING_TTL: Duration = Duration::from_secs(10 * 60);

/// Memoizes catalog listings keyed by their filters.
#[derive(Debug, Clone)]
pub struct ClothingItemCache {
    cache: SharedCache<Vec<ClothingItem>>,
}

impl ClothingItemCache {
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            cache: SharedCache::new(max_entries, ttl),
        }
    }

    /// Cache key for a listing query, e.g. `clothing:{"category":"dress"}`.
    pub fn key_for(filters: &ClothingFilters) -> Result<String> {
        let encoded = serde_json::to_string(filters)
            .map_err(|e| CacheError::Internal(format!("Failed to encode filters: {}", e)))?;
        Ok(format!("{}{}", CLOTHING_NAMESPACE, encoded))
    }

    /// Returns the cached listing for `filters`, running `fetch` on a miss.
    pub async fn get_items<F, Fut, E>(
        &self,
        filters: &ClothingFilters,
        fetch: F,
    ) -> std::result::Result<Vec<ClothingItem>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<Vec<ClothingItem>, E>>,
        E: From<CacheError>,
    {
        let key = Self::key_for(filters)?;
        self.cache.get_or_set(&key, fetch, None).await
    }

    /// Drops every cached listing. Call after any catalog write.
    pub async fn invalidate_all(&self) -> Result<usize> {
        self.cache
            .invalidate(&format!("{}*", CLOTHING_NAMESPACE))
            .await
    }

    /// Underlying cache, for diagnostics and periodic cleanup.
    pub fn cache(&self) -> &SharedCache<Vec<ClothingItem>> {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn item(id: &str) -> ClothingItem {
        ClothingItem {
            id: id.to_string(),
            brand_id: "brand-1".to_string(),
            name: format!("Item {}", id),
            category: "dress".to_string(),
            price: 49.0,
            colors: vec!["red".to_string()],
            sizes: vec!["M".to_string()],
            image_url: None,
        }
    }

    #[test]
    fn test_key_is_namespaced_and_deterministic() {
        let a = ClothingFilters::new().with_category("dress").with_size("M");
        let b = ClothingFilters::new().with_size("M").with_category("dress");

        let key = ClothingItemCache::key_for(&a).unwrap();
        assert!(key.starts_with("clothing:"));
        assert_eq!(key, ClothingItemCache::key_for(&b).unwrap());
        assert_ne!(
            key,
            ClothingItemCache::key_for(&ClothingFilters::new()).unwrap()
        );
    }

    #[tokio::test]
    async fn test_get_items_memoizes_per_filter() {
        let cache = ClothingItemCache::new(100, DEFAULT_CLOTHING_TTL);
        let calls = &AtomicUsize::new(0);
        let dresses = ClothingFilters::new().with_category("dress");
        let fetch = || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, CacheError>(vec![item("1"), item("2")])
        };

        let first = cache.get_items(&dresses, fetch).await.unwrap();
        let second = cache.get_items(&dresses, fetch).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // A different filter is a different key
        cache
            .get_items(&ClothingFilters::new().with_brand("brand-1"), fetch)
            .await
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_fetch_error_propagates() {
        let cache = ClothingItemCache::new(100, DEFAULT_CLOTHING_TTL);
        let result: anyhow::Result<Vec<ClothingItem>> = cache
            .get_items(&ClothingFilters::new(), || async move {
                Err(anyhow::anyhow!("connection refused"))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(cache.cache().len().await, 0);
    }

    #[tokio::test]
    async fn test_invalidate_all() {
        let cache = ClothingItemCache::new(100, DEFAULT_CLOTHING_TTL);
        for category in ["dress", "tops", "shoes"] {
            cache
                .get_items(&ClothingFilters::new().with_category(category), || async move {
                    Ok::<_, CacheError>(vec![item(category)])
                })
                .await
                .unwrap();
        }

        assert_eq!(cache.invalidate_all().await.unwrap(), 3);
        assert_eq!(cache.cache().len().await, 0);
    }
}
