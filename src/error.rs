//! Error types for the index processor.
//!
//! Per-record problems (malformed entries, dangling page ranges) are
//! recoverable and reported through the log sink; only configuration and I/O
//! failures surface as fatal errors.

/// Result type alias for index processing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building an index.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed index entry record (recoverable; the offending line is skipped)
    #[error("syntax error in index entry at line {line}")]
    Syntax {
        /// Line number of the malformed record
        line: usize,
    },

    /// Unknown collation strategy name (fatal, checked before any processing)
    #[error("unknown sort method '{0}' (expected reading/pinyin, stroke/bihua or radical/bushou)")]
    UnknownSortMethod(String),

    /// Malformed style file
    #[error("style file error: {0}")]
    Style(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
