//! Error types for paper-helper-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during document analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The document body is empty.
    #[error("document is empty")]
    EmptyInput,

    /// The input format needs an extractor this build does not have.
    #[error("unsupported document format: {format} (extract it to plain text first)")]
    UnsupportedFormat {
        /// Name of the detected format.
        format: String,
    },

    /// A configured term cannot be matched.
    #[error("invalid term in {list} list: {reason}")]
    InvalidTerm {
        /// Term list the entry belongs to.
        list: &'static str,
        /// What is wrong with the entry.
        reason: String,
    },

    /// A citation pattern failed to compile.
    #[error("invalid citation pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The pattern source.
        pattern: String,
        /// Underlying regex error.
        source: regex::Error,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
