//! Typed per-call options.
//!
//! The host environment hands options over as a loosely-typed bag; these
//! structs enumerate the exact recognized names and are parsed once at the
//! boundary. Field aliases accept both snake_case and the camelCase
//! spellings hosts commonly use. Option names are matched exactly, never
//! case-folded.

use serde::Deserialize;
use serde_json::Value;
use sessionjar_core::{Error, JarMetadata, Result};

/// Options for `read` and `delete`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    /// Return the jar's raw text as-is instead of decoding it.
    #[serde(alias = "bypassDecode")]
    pub bypass_decode: bool,
}

impl ReadOptions {
    /// Shorthand for `bypass_decode: true`.
    pub fn bypass() -> Self {
        Self {
            bypass_decode: true,
        }
    }

    /// Parse a loosely-typed option bag from the host.
    pub fn from_value(input: Value) -> Result<Self> {
        serde_json::from_value(input)
            .map_err(|e| Error::configuration(format!("invalid read options: {e}")))
    }
}

/// Options for `write`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WriteOptions {
    /// Persist the value's raw text form without running the codec.
    #[serde(alias = "bypassEncode")]
    pub bypass_encode: bool,
    /// Store metadata forwarded verbatim to the jar.
    #[serde(flatten)]
    pub metadata: JarMetadata,
}

impl WriteOptions {
    /// Shorthand for `bypass_encode: true` with no metadata.
    pub fn bypass() -> Self {
        Self {
            bypass_encode: true,
            metadata: JarMetadata::default(),
        }
    }

    pub fn with_metadata(metadata: JarMetadata) -> Self {
        Self {
            bypass_encode: false,
            metadata,
        }
    }

    /// Parse a loosely-typed option bag from the host. Metadata fields
    /// live in the same bag as the bypass flag, matching the host calling
    /// convention.
    pub fn from_value(input: Value) -> Result<Self> {
        serde_json::from_value(input)
            .map_err(|e| Error::configuration(format!("invalid write options: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_leave_codec_enabled() {
        assert!(!ReadOptions::default().bypass_decode);
        assert!(!WriteOptions::default().bypass_encode);
    }

    #[test]
    fn read_options_accept_both_spellings() {
        let camel = ReadOptions::from_value(json!({"bypassDecode": true})).unwrap();
        let snake = ReadOptions::from_value(json!({"bypass_decode": true})).unwrap();
        assert!(camel.bypass_decode);
        assert!(snake.bypass_decode);
    }

    #[test]
    fn write_options_parse_flag_and_metadata_from_one_bag() {
        let opts = WriteOptions::from_value(json!({
            "bypassEncode": true,
            "path": "/app",
            "httpOnly": true,
        }))
        .unwrap();
        assert!(opts.bypass_encode);
        assert_eq!(opts.metadata.path.as_deref(), Some("/app"));
        assert!(opts.metadata.http_only);
    }

    #[test]
    fn malformed_bag_is_a_configuration_error() {
        let err = ReadOptions::from_value(json!({"bypassDecode": "yes"})).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }
}
