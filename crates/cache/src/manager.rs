//! Per-session handout of cache instances.
//!
//! The in-memory cache and lock table only work if every access within a
//! session context goes through the same `SessionJar` instance, so the
//! manager memoizes one per context id: repeated lookups return the
//! identical `Arc`, not merely an equal instance.

use crate::store::SessionJar;
use dashmap::DashMap;
use std::sync::Arc;

/// Hands out one memoized [`SessionJar`] per session context id.
#[derive(Default)]
pub struct JarManager {
    sessions: DashMap<String, Arc<SessionJar>>,
}

impl JarManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cache instance for `id`, constructing it with `init` on first
    /// touch. Concurrent first touches of the same id construct once.
    pub fn for_session(&self, id: &str, init: impl FnOnce() -> SessionJar) -> Arc<SessionJar> {
        self.sessions
            .entry(id.to_string())
            .or_insert_with(|| Arc::new(init()))
            .clone()
    }

    /// Drop the instance for a finished context, if one exists.
    pub fn remove(&self, id: &str) -> Option<Arc<SessionJar>> {
        self.sessions.remove(id).map(|(_, jar)| jar)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
