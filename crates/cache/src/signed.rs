//! Tamper-evident jar decorator.
//!
//! Wraps any [`CookieJar`] so persisted values carry an HMAC-SHA256
//! signature (`payload.<hex>`). Verification happens on `get`; a value
//! that fails it is reported as absent, never surfaced as raw or garbage
//! data. The wrap is a pure function of the payload, so the decorator can
//! report the payload itself as the persisted text and the get/set
//! equality contract keeps holding for the cache above it.

use crate::jar::CookieJar;
use sessionjar_core::{JarMetadata, Result};
use sha2::{Digest, Sha256};
use tracing::warn;

/// Jar decorator that signs values on `set` and verifies on `get`.
pub struct SignedJar<J> {
    inner: J,
    signing_key: Vec<u8>,
}

impl<J: CookieJar> SignedJar<J> {
    pub fn new(inner: J, secret: &[u8]) -> Self {
        Self {
            inner,
            signing_key: secret.to_vec(),
        }
    }

    /// The wrapped jar, for direct host access.
    pub fn inner(&self) -> &J {
        &self.inner
    }

    fn signature(&self, payload: &str) -> String {
        hex::encode(self.hmac_sha256(payload.as_bytes()))
    }

    /// Calculate HMAC-SHA256
    fn hmac_sha256(&self, data: &[u8]) -> Vec<u8> {
        const BLOCK_SIZE: usize = 64;
        const IPAD: u8 = 0x36;
        const OPAD: u8 = 0x5C;

        // Prepare key (hash if longer than one block)
        let key = if self.signing_key.len() > BLOCK_SIZE {
            let mut hasher = Sha256::new();
            hasher.update(&self.signing_key);
            hasher.finalize().to_vec()
        } else {
            self.signing_key.clone()
        };

        let mut key_padded = [0u8; BLOCK_SIZE];
        key_padded[..key.len()].copy_from_slice(&key);

        let mut ipad_key = [0u8; BLOCK_SIZE];
        let mut opad_key = [0u8; BLOCK_SIZE];
        for i in 0..BLOCK_SIZE {
            ipad_key[i] = key_padded[i] ^ IPAD;
            opad_key[i] = key_padded[i] ^ OPAD;
        }

        // Inner hash: H(K XOR ipad, data)
        let mut inner_hasher = Sha256::new();
        inner_hasher.update(ipad_key);
        inner_hasher.update(data);
        let inner_hash = inner_hasher.finalize();

        // Outer hash: H(K XOR opad, inner_hash)
        let mut outer_hasher = Sha256::new();
        outer_hasher.update(opad_key);
        outer_hasher.update(inner_hash);
        outer_hasher.finalize().to_vec()
    }

    /// Constant-time string comparison to prevent timing attacks
    fn constant_time_compare(a: &str, b: &str) -> bool {
        if a.len() != b.len() {
            return false;
        }

        let mut result = 0u8;
        for (x, y) in a.bytes().zip(b.bytes()) {
            result |= x ^ y;
        }
        result == 0
    }
}

impl<J: CookieJar> CookieJar for SignedJar<J> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let Some(wrapped) = self.inner.get(key)? else {
            return Ok(None);
        };

        let Some((payload, signature)) = wrapped.rsplit_once('.') else {
            warn!(key, "jar value carries no signature, treating as absent");
            return Ok(None);
        };

        if !Self::constant_time_compare(&self.signature(payload), signature) {
            warn!(key, "jar value failed signature verification, treating as absent");
            return Ok(None);
        }

        Ok(Some(payload.to_string()))
    }

    fn set(&self, key: &str, value: &str, meta: &JarMetadata) -> Result<String> {
        let wrapped = format!("{value}.{}", self.signature(value));
        self.inner.set(key, &wrapped, meta)?;
        // The wrap is symmetric: get strips it again, so the payload is
        // what this layer reports as persisted.
        Ok(value.to_string())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.inner.delete(key)
    }
}
