//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConformanceError {
    /// A version identifier (or cutoff) that is not a dotted integer sequence
    #[error("PARSE/{0}")]
    ParseError(String),

    /// A support cell whose shape no longer matches what the scorer expects
    #[error("FORMAT/{0}")]
    FormatError(String),

    #[error("TIMELINE/{0}")]
    TimelineError(String),

    #[error("CONFIG/{0}")]
    ConfigError(String),
}
