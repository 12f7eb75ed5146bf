//! The cache façade: read, write, delete.
//!
//! Every operation canonicalizes its key, takes that key's exclusive lock
//! for the whole body, and compares the cache's remembered persisted text
//! against what the jar currently holds before acting. The jar is the
//! source of truth; the cache only remembers what it last saw there.

use crate::codec::{Codec, GzJsonCodec};
use crate::entry::JarEntry;
use crate::jar::CookieJar;
use crate::keys::canonical_key;
use crate::locks::LockRegistry;
use crate::metrics::{JarStats, StatsSnapshot};
use crate::options::{ReadOptions, WriteOptions};
use parking_lot::Mutex;
use serde_json::Value;
use sessionjar_core::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Keyed cache in front of a host cookie jar.
///
/// One instance per session context. The entry map and lock table are
/// private to the instance, so sharing a jar between two `SessionJar`s
/// gives each its own (self-healing) view of it.
pub struct SessionJar {
    jar: Arc<dyn CookieJar>,
    codec: Arc<dyn Codec>,
    entries: Mutex<HashMap<String, JarEntry>>,
    locks: LockRegistry,
    stats: JarStats,
}

impl SessionJar {
    /// Front `jar` with the default JSON → gzip → base64 codec.
    pub fn new(jar: Arc<dyn CookieJar>) -> Self {
        Self::with_codec(jar, Arc::new(GzJsonCodec::new()))
    }

    pub fn with_codec(jar: Arc<dyn CookieJar>, codec: Arc<dyn Codec>) -> Self {
        Self {
            jar,
            codec,
            entries: Mutex::new(HashMap::new()),
            locks: LockRegistry::new(),
            stats: JarStats::new(),
        }
    }

    /// Read the value for `key`, resynchronizing from the jar if the
    /// cache's snapshot no longer matches it.
    ///
    /// An unknown key returns `Ok(None)`. With `bypass_decode` the jar's
    /// raw text is returned as a string value instead of running the
    /// codec; on a sync hit the remembered decoded value is returned
    /// as-is either way.
    pub fn read<'k>(
        &self,
        key: impl Into<Option<&'k str>>,
        options: ReadOptions,
    ) -> Result<Option<Value>> {
        let key = canonical_key(key.into());
        let lock = self.locks.acquire(&key);
        let _guard = lock.lock();

        let raw = self.jar.get(&key)?;
        self.resolve(&key, raw, options.bypass_decode)
    }

    /// Write `value` under `key` and return the persisted byte length.
    ///
    /// The encoded form goes through the codec unless `bypass_encode` is
    /// set, in which case the value's raw text form is persisted (null
    /// persists as the empty string). Whatever text the jar reports as
    /// persisted becomes the new snapshot, so a store that rewraps values
    /// stays in sync. The decoded side of the entry keeps the original
    /// `value`, making an immediately following read a free hit.
    pub fn write<'k>(
        &self,
        key: impl Into<Option<&'k str>>,
        value: Value,
        options: WriteOptions,
    ) -> Result<usize> {
        let key = canonical_key(key.into());
        let encoded = if options.bypass_encode {
            raw_text(&value)
        } else {
            self.codec.encode(&value)?
        };

        let lock = self.locks.acquire(&key);
        let _guard = lock.lock();

        let persisted = self.jar.set(&key, &encoded, &options.metadata)?;
        let length = persisted.len();
        self.entries
            .lock()
            .insert(key.clone(), JarEntry::new(Some(persisted), Some(value)));
        self.stats.record_write();
        debug!(key = %key, bytes = length, "wrote value to jar");
        Ok(length)
    }

    /// Delete `key` from the jar and the cache, returning the value that
    /// was present immediately before deletion.
    ///
    /// The prior value resolves through the same sync check a read does,
    /// so an externally updated value is what gets reported. Deleting an
    /// absent key returns `Ok(None)`.
    pub fn delete<'k>(
        &self,
        key: impl Into<Option<&'k str>>,
        options: ReadOptions,
    ) -> Result<Option<Value>> {
        let key = canonical_key(key.into());
        let lock = self.locks.acquire(&key);
        let _guard = lock.lock();

        let raw = self.jar.get(&key)?;
        let prior = self.resolve(&key, raw, options.bypass_decode)?;

        self.jar.delete(&key)?;
        self.entries.lock().remove(&key);
        self.stats.record_removal();
        debug!(key = %key, existed = prior.is_some(), "deleted key from jar");
        Ok(prior)
    }

    /// Point-in-time operation counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Number of keys the cache currently holds an entry for.
    pub fn tracked_keys(&self) -> usize {
        self.entries.lock().len()
    }

    /// Sync check and resolution, shared by read and delete. Caller must
    /// hold the per-key lock for `key`.
    fn resolve(&self, key: &str, raw: Option<String>, bypass_decode: bool) -> Result<Option<Value>> {
        let stale = {
            let entries = self.entries.lock();
            match entries.get(key) {
                Some(entry) if entry.synced(raw.as_deref()) => {
                    self.stats.record_hit();
                    trace!(key, "cache in sync with jar");
                    return Ok(entry.decoded.clone());
                }
                Some(_) => true,
                None => false,
            }
        };

        // Decode before touching the entry so a failure is never cached.
        let decoded = match raw.as_deref() {
            None => None,
            Some(text) if bypass_decode => Some(Value::String(text.to_string())),
            Some(text) => Some(self.codec.decode(text)?),
        };

        if stale {
            self.stats.record_resync();
            debug!(key, "jar changed externally, resynchronized");
        } else {
            self.stats.record_miss();
        }
        self.entries
            .lock()
            .insert(key.to_string(), JarEntry::new(raw, decoded.clone()));
        Ok(decoded)
    }
}

/// Raw text form of a value for bypass-encode writes: strings persist
/// verbatim, null persists as the empty string, anything else as its
/// compact JSON text.
fn raw_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
