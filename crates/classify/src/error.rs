//! Error types for the calendari-classify crate.

use std::path::PathBuf;

/// Error type for loading annotation tables.
///
/// Looking a date up in a table never fails; only reading and parsing a
/// tables file can.
#[derive(Debug, thiserror::Error)]
pub enum TablesError {
    /// Returned when a tables file cannot be read.
    #[error("failed to read tables file {}: {reason}", path.display())]
    Read {
        /// Path that could not be read.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when tables text is not valid TOML or holds a bad `"MM-DD"` key.
    #[error("invalid tables: {reason}")]
    Parse {
        /// Description of the parse failure.
        reason: String,
    },
}
