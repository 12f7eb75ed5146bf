//! Self-synchronizing keyed cache over a host cookie jar.
//!
//! A [`SessionJar`] fronts a slow, externally mutable key-value store (the
//! [`CookieJar`] trait) with an in-process cache. Each key is serialized
//! under its own lazily-created lock, every operation compares the cache's
//! remembered persisted text against what the jar currently holds, and
//! values cross the jar boundary through a reversible [`Codec`]
//! (serialize, gzip, base64 by default).
//!
//! One `SessionJar` instance belongs to one session context; hosts hand
//! them out through [`JarManager`] so repeated accesses within a context
//! share the same cache and lock table.

pub mod codec;
pub mod entry;
pub mod jar;
pub mod keys;
pub mod locks;
pub mod manager;
pub mod metrics;
pub mod options;
pub mod signed;
pub mod store;

pub use codec::{Codec, GzJsonCodec};
pub use jar::{CookieJar, MemoryJar};
pub use manager::JarManager;
pub use metrics::StatsSnapshot;
pub use options::{ReadOptions, WriteOptions};
pub use signed::SignedJar;
pub use store::SessionJar;

pub use sessionjar_core::{Error, JarMetadata, Result};
