//! Error types for `CpdrKit`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `CpdrKit` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source file does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The destination file could not be created or written.
    #[error("could not write to {}: {source}", path.display())]
    WriteFailed {
        /// The destination path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    // ==================== Parsing Errors ====================
    /// XML parsing error.
    #[error("XML parse error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// XML attribute error.
    #[error("XML attribute error: {0}")]
    XmlAttrError(String),

    /// The XML is well-formed token by token but not as a document
    /// (unclosed elements, no root element).
    #[error("malformed XML at byte {position}: {message}")]
    MalformedXml {
        /// Byte offset in the source where the problem was detected.
        position: usize,
        /// Description of the problem.
        message: String,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ==================== Extraction Errors ====================
    /// No item survived the post type / status filter.
    ///
    /// This is a warning, not a failure: nothing is written.
    #[error("no items with post type '{post_type}' and status '{status}' were found")]
    NoMatchingItems {
        /// The post type that was required.
        post_type: String,
        /// The status that was required.
        status: String,
    },

    /// CSV serialization error.
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ==================== Configuration Errors ====================
    /// The configuration file could not be parsed.
    #[error("invalid config {}: {message}", path.display())]
    ConfigError {
        /// The configuration file path.
        path: PathBuf,
        /// The parser's message.
        message: String,
    },

    /// A path was neither given on the command line nor configured.
    #[error("no {what} path given (pass it as an argument or set it under [paths] in the config)")]
    MissingPath {
        /// Which path was missing (e.g. "source").
        what: &'static str,
    },

    /// The embed variable name is not a JavaScript identifier.
    #[error("invalid JavaScript identifier: '{0}'")]
    InvalidIdentifier(String),
}

impl Error {
    /// Whether this error should be reported as a warning rather than a failure.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, Error::NoMatchingItems { .. })
    }

    /// Whether this error means a source file was missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::FileNotFound { .. } => true,
            Error::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Map an IO error from reading `path`, turning `NotFound` into [`Error::FileNotFound`].
    pub(crate) fn from_read(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound { path: path.into() }
        } else {
            Error::Io(err)
        }
    }
}

// Add conversion from quick_xml::events::attributes::AttrError
impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlAttrError(err.to_string())
    }
}

/// A specialized Result type for `CpdrKit` operations.
pub type Result<T> = std::result::Result<T, Error>;
