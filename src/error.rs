//! Error types for the Tableau extractor
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Nothing in the crate retries: every error is wrapped with context as it
//! crosses a component boundary and propagated to the caller.

use thiserror::Error;

/// The main error type for the extractor
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Deadline of {timeout_ms}ms exceeded")]
    Timeout { timeout_ms: u64 },

    // ============================================================================
    // Assembly Errors
    // ============================================================================
    #[error("Failed parsing {field} '{value}': {source}")]
    TimestampParse {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    // ============================================================================
    // Registry / Sink Errors
    // ============================================================================
    #[error("Extractor '{name}' is already registered")]
    ExtractorExists { name: String },

    #[error("Extractor '{name}' not found")]
    ExtractorNotFound { name: String },

    #[error("Failed to emit record: {message}")]
    Emit { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

/// Coarse classification of an [`Error`], ignoring any context wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or invalid configuration, reported before any network call
    Config,
    /// Sign-in request, rejection or decode failure
    Auth,
    /// Transport, status or decode failure on a data request
    Fetch,
    /// Timestamp parsing failure during assembly
    Parse,
    /// The downstream sink rejected a record
    Emit,
    /// Unknown or duplicate extractor name
    Registry,
    /// Anything else
    Other,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an emit error
    pub fn emit(message: impl Into<String>) -> Self {
        Self::Emit {
            message: message.into(),
        }
    }

    /// Wrap this error with context
    pub fn wrap(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping every context layer
    pub fn root(&self) -> &Error {
        let mut current = self;
        while let Error::Context { source, .. } = current {
            current = source;
        }
        current
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self.root() {
            Error::Config { .. }
            | Error::MissingConfigField { .. }
            | Error::InvalidConfigValue { .. }
            | Error::YamlParse(_)
            | Error::InvalidUrl(_) => ErrorKind::Config,
            Error::Auth { .. } => ErrorKind::Auth,
            Error::Http(_)
            | Error::HttpStatus { .. }
            | Error::Decode { .. }
            | Error::Timeout { .. } => ErrorKind::Fetch,
            Error::TimestampParse { .. } => ErrorKind::Parse,
            Error::Emit { .. } => ErrorKind::Emit,
            Error::ExtractorExists { .. } | Error::ExtractorNotFound { .. } => {
                ErrorKind::Registry
            }
            Error::Io(_) | Error::Context { .. } => ErrorKind::Other,
        }
    }
}

/// Result type alias for the extractor
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().wrap(message))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| e.into().wrap(f()))
    }
}
