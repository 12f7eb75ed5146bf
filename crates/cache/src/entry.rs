//! Per-key cache entries.

use serde_json::Value;

/// Last-known persisted text and its decoded form for one key.
///
/// `encoded` must equal the exact text most recently written to or read
/// from the jar for this key; `decoded` is the value that decodes from it.
/// An entry holding `None` in both fields remembers that the key was
/// absent the last time the jar was consulted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JarEntry {
    pub encoded: Option<String>,
    pub decoded: Option<Value>,
}

impl JarEntry {
    pub fn new(encoded: Option<String>, decoded: Option<Value>) -> Self {
        Self { encoded, decoded }
    }

    /// Bytewise identity against the jar's current raw text. Absent
    /// matches absent; anything else must be byte-for-byte equal.
    pub fn synced(&self, raw: Option<&str>) -> bool {
        self.encoded.as_deref() == raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_snapshot_matches_absent_raw() {
        let entry = JarEntry::default();
        assert!(entry.synced(None));
        assert!(!entry.synced(Some("")));
    }

    #[test]
    fn present_snapshot_requires_exact_bytes() {
        let entry = JarEntry::new(Some("abc".into()), Some(json!("value")));
        assert!(entry.synced(Some("abc")));
        assert!(!entry.synced(Some("abd")));
        assert!(!entry.synced(Some("abc ")));
        assert!(!entry.synced(None));
    }

    #[test]
    fn empty_snapshot_is_distinct_from_absent() {
        let entry = JarEntry::new(Some(String::new()), Some(Value::Null));
        assert!(entry.synced(Some("")));
        assert!(!entry.synced(None));
    }
}
