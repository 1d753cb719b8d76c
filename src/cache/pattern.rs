//! Glob patterns for key invalidation.
//!
//! Only `*` is special; it matches any (possibly empty) substring. Every other
//! character matches itself, so callers can never smuggle in a raw regex.

use regex::Regex;

use crate::error::{CacheError, Result};

/// A compiled `*`-glob, anchored at both ends.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    source: String,
    regex: Regex,
}

impl GlobPattern {
    /// Compiles `pattern`, escaping all regex metacharacters except `*`.
    pub fn new(pattern: &str) -> Result<Self> {
        let body = pattern
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");

        let regex = Regex::new(&format!("^{}$", body))
            .map_err(|e| CacheError::InvalidPattern(format!("{}: {}", pattern, e)))?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    pub fn is_match(&self, key: &str) -> bool {
        self.regex.is_match(key)
    }

    /// The glob as originally written.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_glob() {
        let pattern = GlobPattern::new("clothing:*").unwrap();
        assert!(pattern.is_match("clothing:a"));
        assert!(pattern.is_match("clothing:"));
        assert!(!pattern.is_match("other:c"));
        assert!(!pattern.is_match("xclothing:a"));
    }

    #[test]
    fn test_infix_glob() {
        let pattern = GlobPattern::new("recommendations:*:summer").unwrap();
        assert!(pattern.is_match("recommendations:u1:summer"));
        assert!(!pattern.is_match("recommendations:u1:winter"));
    }

    #[test]
    fn test_literal_without_star_is_exact() {
        let pattern = GlobPattern::new("user:1").unwrap();
        assert!(pattern.is_match("user:1"));
        assert!(!pattern.is_match("user:10"));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let pattern = GlobPattern::new("price:(10.5)+*").unwrap();
        assert!(pattern.is_match("price:(10.5)+eur"));
        assert!(!pattern.is_match("price:10x5eur"));

        let braces = GlobPattern::new(r#"clothing:{"size":"M"}"#).unwrap();
        assert!(braces.is_match(r#"clothing:{"size":"M"}"#));
    }

    #[test]
    fn test_lone_star_matches_everything() {
        let pattern = GlobPattern::new("*").unwrap();
        assert!(pattern.is_match(""));
        assert!(pattern.is_match("anything:at:all"));
        assert_eq!(pattern.as_str(), "*");
    }
}
