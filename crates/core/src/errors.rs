/// Result type alias for sessionjar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for sessionjar operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Persisted jar text could not be reversed through the codec
    #[error("failed to decode jar value: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A value could not be transformed into jar text
    #[error("failed to encode value for the jar: {message}")]
    Encode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// The backing jar rejected or failed a get/set/delete call
    #[error("jar {operation} operation failed for key '{key}': {message}")]
    StoreIo {
        operation: String,
        key: String,
        message: String,
    },

    /// Invalid boundary input, such as an unparseable option bag
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

// Conversion implementations
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json {
            message: error.to_string(),
            source: error,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(error: anyhow::Error) -> Self {
        Error::Configuration {
            message: format!("An internal error occurred: {error}"),
        }
    }
}

// Helper methods for creating errors with context
impl Error {
    /// Create a decode error without an underlying source
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Error::Decode {
            message: message.into(),
            source: None,
        }
    }

    /// Create a decode error wrapping the failure that caused it
    #[must_use]
    pub fn decode_with(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Error::Decode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an encode error wrapping the failure that caused it
    #[must_use]
    pub fn encode_with(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Error::Encode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a store I/O error with operation and key context
    #[must_use]
    pub fn store_io(
        operation: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Error::StoreIo {
            operation: operation.into(),
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }
}
