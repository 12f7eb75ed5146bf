//! Key canonicalization for jar operations.

/// Collapse a caller-supplied key to its canonical string form.
///
/// An absent key and an empty-string key name the same slot, so both map
/// to the empty string. Everything else passes through verbatim:
/// case-sensitive, no length limit (the backing jar may impose one).
///
/// Every public operation calls this exactly once before touching locks or
/// the jar, so the rest of the crate only ever sees canonical keys.
pub fn canonical_key(key: Option<&str>) -> String {
    key.unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_empty_collapse_to_same_key() {
        assert_eq!(canonical_key(None), canonical_key(Some("")));
        assert_eq!(canonical_key(None), "");
    }

    #[test]
    fn named_keys_pass_through_verbatim() {
        assert_eq!(canonical_key(Some("session")), "session");
        assert_eq!(canonical_key(Some("Session")), "Session");
        assert_eq!(canonical_key(Some("  padded  ")), "  padded  ");
    }
}
