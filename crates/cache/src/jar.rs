//! The external store contract and an in-process implementation.

use parking_lot::Mutex;
use sessionjar_core::{Error, JarMetadata, Result};
use std::collections::HashMap;

/// Host-provided persisted store this cache fronts.
///
/// Implementations must keep one equality contract: the text a `get`
/// returns for a key is exactly what the preceding `set` reported as
/// persisted. The cache's staleness detection compares those two
/// byte-for-byte and is meaningless without it.
pub trait CookieJar: Send + Sync {
    /// Current persisted text for `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Persist `value` under `key`, forwarding `meta` verbatim. Returns
    /// the text actually persisted, which may differ from `value` if the
    /// store rewraps it.
    fn set(&self, key: &str, value: &str, meta: &JarMetadata) -> Result<String>;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<()>;
}

#[derive(Debug, Clone)]
struct StoredValue {
    text: String,
    meta: JarMetadata,
}

/// In-process jar backed by a guarded map.
///
/// Stands in for the host store in tests and embedded use. It enforces a
/// per-value size limit the way client-side stores do: an oversized `set`
/// fails with a `StoreIo` error and leaves the previous value in place.
#[derive(Debug)]
pub struct MemoryJar {
    values: Mutex<HashMap<String, StoredValue>>,
    max_value_bytes: usize,
}

impl MemoryJar {
    /// Default per-value limit, sized like a browser cookie.
    pub const DEFAULT_MAX_VALUE_BYTES: usize = 4096;

    pub fn new() -> Self {
        Self::with_limit(Self::DEFAULT_MAX_VALUE_BYTES)
    }

    pub fn with_limit(max_value_bytes: usize) -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            max_value_bytes,
        }
    }

    /// Raw persisted text for `key`, bypassing any cache in front.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).map(|v| v.text.clone())
    }

    /// Overwrite the persisted text for `key` directly, as external code
    /// mutating the store behind the cache's back would.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.values.lock().insert(
            key.to_string(),
            StoredValue {
                text: value.to_string(),
                meta: JarMetadata::default(),
            },
        );
    }

    /// Metadata recorded for `key` by the last `set`.
    pub fn metadata(&self, key: &str) -> Option<JarMetadata> {
        self.values.lock().get(key).map(|v| v.meta.clone())
    }

    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }
}

impl Default for MemoryJar {
    fn default() -> Self {
        Self::new()
    }
}

impl CookieJar for MemoryJar {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().get(key).map(|v| v.text.clone()))
    }

    fn set(&self, key: &str, value: &str, meta: &JarMetadata) -> Result<String> {
        if value.len() > self.max_value_bytes {
            return Err(Error::store_io(
                "set",
                key,
                format!(
                    "value of {} bytes exceeds jar limit of {} bytes",
                    value.len(),
                    self.max_value_bytes
                ),
            ));
        }
        self.values.lock().insert(
            key.to_string(),
            StoredValue {
                text: value.to_string(),
                meta: meta.clone(),
            },
        );
        Ok(value.to_string())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.values.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_reports_what_get_returns() {
        let jar = MemoryJar::new();
        let persisted = jar.set("k", "payload", &JarMetadata::default()).unwrap();
        assert_eq!(jar.get("k").unwrap().as_deref(), Some(persisted.as_str()));
    }

    #[test]
    fn oversized_value_is_rejected_and_previous_value_kept() {
        let jar = MemoryJar::with_limit(8);
        jar.set("k", "small", &JarMetadata::default()).unwrap();

        let err = jar
            .set("k", "way too large for the jar", &JarMetadata::default())
            .unwrap_err();
        assert!(matches!(err, Error::StoreIo { .. }));
        assert_eq!(jar.get("k").unwrap().as_deref(), Some("small"));
    }

    #[test]
    fn delete_of_absent_key_is_not_an_error() {
        let jar = MemoryJar::new();
        jar.delete("missing").unwrap();
        assert_eq!(jar.get("missing").unwrap(), None);
    }

    #[test]
    fn metadata_is_recorded_verbatim() {
        let jar = MemoryJar::new();
        let meta = JarMetadata {
            path: Some("/app".into()),
            secure: true,
            ..JarMetadata::default()
        };
        jar.set("k", "v", &meta).unwrap();
        assert_eq!(jar.metadata("k"), Some(meta));
    }

    #[test]
    fn empty_value_is_distinct_from_absent() {
        let jar = MemoryJar::new();
        jar.set("k", "", &JarMetadata::default()).unwrap();
        assert_eq!(jar.get("k").unwrap().as_deref(), Some(""));
        jar.delete("k").unwrap();
        assert_eq!(jar.get("k").unwrap(), None);
    }
}
