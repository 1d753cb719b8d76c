//! Catalog data types memoized by the specialised caches
//!
//! Filter and preference structs double as cache key material, so their
//! serialized form must be deterministic: fields serialize in declaration
//! order, unset options are skipped, and free-form maps use `BTreeMap`.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A garment offered by a brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: String,
    pub brand_id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    pub image_url: Option<String>,
}

/// Catalog listing query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClothingFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl ClothingFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_brand(mut self, brand_id: impl Into<String>) -> Self {
        self.brand_id = Some(brand_id.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.min_price = Some(min);
        self.max_price = Some(max);
        self
    }

    pub fn with_page(mut self, limit: u32, offset: u32) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }
}

/// A scored suggestion for one shopper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub item_id: String,
    pub score: f64,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Shopper preferences that shape recommendations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationPreferences {
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub styles: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub colors: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_shape: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    /// Anything else the client sends along
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_serialize_to_empty_object() {
        let json = serde_json::to_string(&ClothingFilters::new()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_filters_serialize_in_declaration_order() {
        let a = ClothingFilters::new().with_size("M").with_category("dress");
        let b = ClothingFilters::new().with_category("dress").with_size("M");

        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, serde_json::to_string(&b).unwrap());
        assert_eq!(json, r#"{"category":"dress","size":"M"}"#);
    }

    #[test]
    fn test_preferences_sets_are_order_independent() {
        let mut a = RecommendationPreferences::default();
        a.styles.insert("casual".into());
        a.styles.insert("boho".into());

        let mut b = RecommendationPreferences::default();
        b.styles.insert("boho".into());
        b.styles.insert("casual".into());

        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_clothing_item_deserialize_defaults() {
        let json = r#"{"id":"i1","brand_id":"b1","name":"Tee","category":"tops","price":19.5,"image_url":null}"#;
        let item: ClothingItem = serde_json::from_str(json).unwrap();
        assert!(item.colors.is_empty());
        assert!(item.sizes.is_empty());
        assert_eq!(item.price, 19.5);
    }
}
