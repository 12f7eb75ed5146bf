//! Per-key lock registry.
//!
//! Keys are not declared up front, so lock handles are created lazily on
//! first touch and shared by every caller that names the same key. The
//! registry mutex guards only the lookup-or-insert on the map; it is never
//! held across the per-key critical section that follows, so unrelated
//! keys never contend on it beyond a map probe.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Shared exclusive lock for a single key.
pub type LockHandle = Arc<Mutex<()>>;

/// Lazily-populated mapping from key to its exclusive lock.
///
/// Handles are never removed for the lifetime of the owning cache
/// instance, bounding the map by the distinct keys seen, which is fine
/// for the per-session key sets this crate serves.
#[derive(Debug, Default)]
pub struct LockRegistry {
    locks: Mutex<HashMap<String, LockHandle>>,
}

impl LockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the single shared lock handle for `key`, creating it on
    /// first use. Concurrent first-touches of the same new key all receive
    /// the one handle the winner inserted.
    pub fn acquire(&self, key: &str) -> LockHandle {
        let mut locks = self.locks.lock();
        if let Some(handle) = locks.get(key) {
            return Arc::clone(handle);
        }
        let handle = Arc::new(Mutex::new(()));
        locks.insert(key.to_string(), Arc::clone(&handle));
        handle
    }

    /// Number of distinct keys that have been locked so far.
    pub fn len(&self) -> usize {
        self.locks.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.lock().is_empty()
    }
}
