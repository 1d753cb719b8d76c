//! Cache Context
//!
//! Owns every cache instance of the process. Build one at startup and pass
//! clones to whatever needs a cache; clones share the same entries.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::cache::{CacheStats, SharedCache};
use crate::catalog::{ClothingItemCache, RecommendationCache};
use crate::config::Config;
use crate::error::CacheError;

// == Namespace ==
/// Names the caches held by a [`CacheContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Global,
    Clothing,
    Recommendations,
}

impl Namespace {
    pub const ALL: [Namespace; 3] = [
        Namespace::Global,
        Namespace::Clothing,
        Namespace::Recommendations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Global => "global",
            Namespace::Clothing => "clothing",
            Namespace::Recommendations => "recommendations",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Namespace {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "global" => Ok(Namespace::Global),
            "clothing" => Ok(Namespace::Clothing),
            "recommendations" => Ok(Namespace::Recommendations),
            other => Err(CacheError::NotFound(format!("Unknown namespace '{}'", other))),
        }
    }
}

// == Cache Context ==
/// The general-purpose cache plus the two catalog caches.
#[derive(Debug, Clone)]
pub struct CacheContext {
    /// General-purpose cache holding arbitrary JSON
    pub global: SharedCache<Value>,
    pub clothing: ClothingItemCache,
    pub recommendations: RecommendationCache,
}

impl CacheContext {
    pub fn from_config(config: &Config) -> Self {
        Self {
            global: SharedCache::new(config.max_entries, config.default_ttl()),
            clothing: ClothingItemCache::new(config.max_entries, config.clothing_ttl()),
            recommendations: RecommendationCache::new(
                config.max_entries,
                config.recommendation_ttl(),
            ),
        }
    }

    /// Looks up `key` in one namespace and returns the value as JSON.
    pub async fn lookup(&self, namespace: Namespace, key: &str) -> Option<Value> {
        match namespace {
            Namespace::Global => self.global.get(key).await,
            Namespace::Clothing => to_json(self.clothing.cache().get(key).await),
            Namespace::Recommendations => to_json(self.recommendations.cache().get(key).await),
        }
    }

    pub async fn delete(&self, namespace: Namespace, key: &str) -> bool {
        match namespace {
            Namespace::Global => self.global.delete(key).await,
            Namespace::Clothing => self.clothing.cache().delete(key).await,
            Namespace::Recommendations => self.recommendations.cache().delete(key).await,
        }
    }

    pub async fn invalidate(
        &self,
        namespace: Namespace,
        pattern: &str,
    ) -> Result<usize, CacheError> {
        match namespace {
            Namespace::Global => self.global.invalidate(pattern).await,
            Namespace::Clothing => self.clothing.cache().invalidate(pattern).await,
            Namespace::Recommendations => self.recommendations.cache().invalidate(pattern).await,
        }
    }

    pub async fn stats(&self, namespace: Namespace) -> CacheStats {
        match namespace {
            Namespace::Global => self.global.stats().await,
            Namespace::Clothing => self.clothing.cache().stats().await,
            Namespace::Recommendations => self.recommendations.cache().stats().await,
        }
    }

    pub async fn cleanup(&self, namespace: Namespace) -> usize {
        match namespace {
            Namespace::Global => self.global.cleanup().await,
            Namespace::Clothing => self.clothing.cache().cleanup().await,
            Namespace::Recommendations => self.recommendations.cache().cleanup().await,
        }
    }

    /// Sweeps expired entries from every cache.
    pub async fn cleanup_all(&self) -> BTreeMap<Namespace, usize> {
        let mut removed = BTreeMap::new();
        for namespace in Namespace::ALL {
            removed.insert(namespace, self.cleanup(namespace).await);
        }
        removed
    }

    pub async fn stats_all(&self) -> BTreeMap<Namespace, CacheStats> {
        let mut stats = BTreeMap::new();
        for namespace in Namespace::ALL {
            stats.insert(namespace, self.stats(namespace).await);
        }
        stats
    }
}

impl Default for CacheContext {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

fn to_json<T: Serialize>(value: Option<T>) -> Option<Value> {
    value.and_then(|v| serde_json::to_value(v).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClothingFilters, ClothingItem};
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn test_namespace_round_trip() {
        for namespace in Namespace::ALL {
            assert_eq!(namespace.as_str().parse::<Namespace>().unwrap(), namespace);
        }
        assert!(matches!(
            "sessions".parse::<Namespace>(),
            Err(CacheError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_caches_use_configured_ttls() {
        let ctx = CacheContext::default();
        assert_eq!(ctx.global.default_ttl().await, Duration::from_secs(300));
        assert_eq!(ctx.clothing.cache().default_ttl().await, Duration::from_secs(600));
        assert_eq!(
            ctx.recommendations.cache().default_ttl().await,
            Duration::from_secs(1800)
        );
    }

    #[tokio::test]
    async fn test_namespaces_are_independent() {
        let ctx = CacheContext::default();
        ctx.global.set("clothing:x", json!(1), None).await.unwrap();

        let filters = ClothingFilters::new();
        ctx.clothing
            .get_items(&filters, || async {
                Ok::<_, CacheError>(Vec::<ClothingItem>::new())
            })
            .await
            .unwrap();

        assert_eq!(ctx.invalidate(Namespace::Global, "clothing:*").await.unwrap(), 1);
        let key = ClothingItemCache::key_for(&filters).unwrap();
        assert_eq!(ctx.lookup(Namespace::Clothing, &key).await, Some(json!([])));
    }

    #[tokio::test]
    async fn test_stats_and_cleanup_cover_every_namespace() {
        let ctx = CacheContext::default();
        ctx.global
            .set("short", json!(1), Some(Duration::from_millis(20)))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        let stats = ctx.stats_all().await;
        assert_eq!(stats.len(), 3);
        assert_eq!(stats[&Namespace::Global].expired, 1);

        let removed = ctx.cleanup_all().await;
        assert_eq!(removed[&Namespace::Global], 1);
        assert_eq!(removed[&Namespace::Clothing], 0);
        assert!(!ctx.delete(Namespace::Global, "short").await);
    }
}
