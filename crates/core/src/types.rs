//! Domain types that cross the host boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pass-through metadata forwarded verbatim to the backing jar.
///
/// The cache core never interprets these fields; they exist so hosts can
/// carry expiry, scoping, and security flags through `write` calls down to
/// whatever store they wired in. Field aliases accept the camelCase
/// spellings host environments commonly hand over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JarMetadata {
    /// Expiry timestamp for the persisted value
    #[serde(alias = "expiresAt")]
    pub expires: Option<DateTime<Utc>>,
    /// Path scope for the persisted value
    pub path: Option<String>,
    /// Domain scope for the persisted value
    pub domain: Option<String>,
    /// Restrict the value to secure transport
    pub secure: bool,
    /// Hide the value from client-side scripts
    #[serde(alias = "httpOnly")]
    pub http_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_unset() {
        let meta = JarMetadata::default();
        assert_eq!(meta.expires, None);
        assert_eq!(meta.path, None);
        assert_eq!(meta.domain, None);
        assert!(!meta.secure);
        assert!(!meta.http_only);
    }

    #[test]
    fn accepts_camel_case_aliases() {
        let meta: JarMetadata = serde_json::from_value(serde_json::json!({
            "path": "/app",
            "httpOnly": true,
        }))
        .unwrap();
        assert_eq!(meta.path.as_deref(), Some("/app"));
        assert!(meta.http_only);
        assert!(!meta.secure);
    }

    #[test]
    fn accepts_snake_case_names() {
        let meta: JarMetadata = serde_json::from_value(serde_json::json!({
            "domain": "example.com",
            "secure": true,
            "http_only": true,
        }))
        .unwrap();
        assert_eq!(meta.domain.as_deref(), Some("example.com"));
        assert!(meta.secure);
        assert!(meta.http_only);
    }
}
