//! Composite configuration key decomposition.
//!
//! Stored keys have the shape `<path>-<scope>-<scopeId>`, e.g.
//! `general/locale/timezone-stores-7`. The path itself may contain dashes;
//! only the trailing `-<scope>-<digits>` suffix is significant.

use crate::errors::SnapshotError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pattern every composite key must match.
pub const COMPOSITE_KEY_PATTERN: &str = r"^(.+)-(default|websites|stores)-(\d+)$";

/// Configuration visibility tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Default,
    Websites,
    Stores,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Default => "default",
            Scope::Websites => "websites",
            Scope::Stores => "stores",
        }
    }

    fn from_matched(s: &str) -> Option<Self> {
        match s {
            "default" => Some(Scope::Default),
            "websites" => Some(Scope::Websites),
            "stores" => Some(Scope::Stores),
            _ => None,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parts of a composite key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecomposedKey {
    pub path: String,
    pub scope: Scope,
    pub scope_id: i64,
}

/// Splits composite keys into (path, scope, scope id).
///
/// Holds the compiled pattern; build one per operation (or share one) and
/// pass it by reference into the diff.
#[derive(Debug, Clone)]
pub struct KeyDecomposer {
    pattern: Regex,
}

impl Default for KeyDecomposer {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyDecomposer {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(COMPOSITE_KEY_PATTERN).expect("composite key pattern is valid"),
        }
    }

    /// Decompose `key` into its parts.
    ///
    /// A scope id too large for `i64` is rejected rather than saturated.
    ///
    /// # Errors
    ///
    /// `SnapshotError::MalformedKey` when the key lacks a `-<scope>-<digits>`
    /// suffix, has an empty path, or the scope id overflows.
    pub fn decompose(&self, key: &str) -> Result<DecomposedKey, SnapshotError> {
        let malformed = || SnapshotError::MalformedKey {
            key: key.to_string(),
        };

        let caps = self.pattern.captures(key).ok_or_else(malformed)?;
        let path = caps.get(1).ok_or_else(malformed)?.as_str();
        let scope = caps
            .get(2)
            .and_then(|m| Scope::from_matched(m.as_str()))
            .ok_or_else(malformed)?;
        let scope_id = caps
            .get(3)
            .and_then(|m| m.as_str().parse::<i64>().ok())
            .ok_or_else(malformed)?;

        Ok(DecomposedKey {
            path: path.to_string(),
            scope,
            scope_id,
        })
    }
}

/// Build the composite key for a (path, scope, scope id) triple.
pub fn compose(path: &str, scope: &str, scope_id: &str) -> String {
    format!("{path}-{scope}-{scope_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_store_scoped_key() {
        let parts = KeyDecomposer::new()
            .decompose("general/locale/timezone-stores-7")
            .unwrap();
        assert_eq!(parts.path, "general/locale/timezone");
        assert_eq!(parts.scope, Scope::Stores);
        assert_eq!(parts.scope_id, 7);
    }

    #[test]
    fn test_path_may_contain_dashes() {
        let parts = KeyDecomposer::new()
            .decompose("carriers/dhl-intl/active-websites-12")
            .unwrap();
        assert_eq!(parts.path, "carriers/dhl-intl/active");
        assert_eq!(parts.scope, Scope::Websites);
        assert_eq!(parts.scope_id, 12);
    }

    #[test]
    fn test_only_trailing_suffix_counts() {
        let parts = KeyDecomposer::new()
            .decompose("a-default-0-stores-1")
            .unwrap();
        assert_eq!(parts.path, "a-default-0");
        assert_eq!(parts.scope, Scope::Stores);
        assert_eq!(parts.scope_id, 1);
    }

    #[test]
    fn test_missing_suffix_is_malformed() {
        let err = KeyDecomposer::new()
            .decompose("web/secure/base_url")
            .unwrap_err();
        assert_eq!(
            err,
            SnapshotError::MalformedKey {
                key: "web/secure/base_url".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_scope_is_malformed() {
        assert!(KeyDecomposer::new().decompose("a-global-0").is_err());
    }

    #[test]
    fn test_empty_path_is_malformed() {
        assert!(KeyDecomposer::new().decompose("-default-0").is_err());
    }

    #[test]
    fn test_negative_scope_id_is_malformed() {
        assert!(KeyDecomposer::new().decompose("a-stores--1").is_err());
    }

    #[test]
    fn test_overflowing_scope_id_is_malformed() {
        let key = "a-stores-99999999999999999999";
        assert_eq!(
            KeyDecomposer::new().decompose(key).unwrap_err(),
            SnapshotError::MalformedKey {
                key: key.to_string()
            }
        );
    }

    #[test]
    fn test_compose_round_trips() {
        let key = compose("design/theme/locale", "websites", "3");
        let parts = KeyDecomposer::new().decompose(&key).unwrap();
        assert_eq!(parts.path, "design/theme/locale");
        assert_eq!(parts.scope.to_string(), "websites");
        assert_eq!(parts.scope_id, 3);
    }
}
