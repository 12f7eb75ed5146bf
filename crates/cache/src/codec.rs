//! Reversible value transform applied at the jar boundary.
//!
//! The default pipeline serializes to JSON, compresses with gzip, and
//! base64-encodes the result so values survive text-only stores. Encoding
//! must be deterministic: the cache detects staleness by comparing the
//! remembered persisted text byte-for-byte against what the jar currently
//! holds, so two encodes of equal values have to produce identical text.
//! `serde_json` serializes maps in sorted key order and the gzip header
//! carries no timestamp, which keeps that property.

use base64::{engine::general_purpose::STANDARD, Engine};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde_json::Value;
use sessionjar_core::{Error, Result};
use std::io::{Read, Write};

/// Reversible transform between decoded values and jar-ready text.
///
/// Implementations must satisfy `decode(encode(v)) == v` for every value
/// they accept, and `encode` must be a pure function of the value.
pub trait Codec: Send + Sync {
    /// Encode a value into the text form persisted in the jar.
    fn encode(&self, value: &Value) -> Result<String>;

    /// Reverse [`Codec::encode`]. Fails with [`Error::Decode`] on text
    /// that did not come out of `encode`.
    fn decode(&self, raw: &str) -> Result<Value>;
}

/// Default codec: JSON → gzip → base64.
#[derive(Debug, Clone, Copy)]
pub struct GzJsonCodec {
    level: Compression,
}

impl GzJsonCodec {
    pub fn new() -> Self {
        Self {
            level: Compression::default(),
        }
    }

    /// Use a specific gzip level. The level is part of the instance so
    /// encoding stays deterministic per cache.
    pub fn with_level(level: u32) -> Self {
        Self {
            level: Compression::new(level),
        }
    }
}

impl Default for GzJsonCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec for GzJsonCodec {
    fn encode(&self, value: &Value) -> Result<String> {
        let json = serde_json::to_vec(value)?;

        let mut encoder = GzEncoder::new(Vec::new(), self.level);
        encoder
            .write_all(&json)
            .map_err(|e| Error::encode_with("gzip compression failed", e))?;
        let compressed = encoder
            .finish()
            .map_err(|e| Error::encode_with("gzip compression failed", e))?;

        Ok(STANDARD.encode(compressed))
    }

    fn decode(&self, raw: &str) -> Result<Value> {
        let compressed = STANDARD
            .decode(raw)
            .map_err(|e| Error::decode_with("jar text is not valid base64", e))?;

        let mut decoder = GzDecoder::new(&compressed[..]);
        let mut json = Vec::new();
        decoder
            .read_to_end(&mut json)
            .map_err(|e| Error::decode_with("jar text is not a valid gzip stream", e))?;

        serde_json::from_slice(&json)
            .map_err(|e| Error::decode_with("decompressed jar text is not valid JSON", e))
    }
}
