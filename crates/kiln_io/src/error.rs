//! Error types for file reading and writing.

use kiln_netlist::IngestError;

/// Errors raised while reading or writing kiln text files.
///
/// Syntax and ingestion errors carry the 1-based line number of the record
/// that caused them.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// An underlying I/O operation failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A line did not match any recognized record shape.
    #[error("line {line}: {message}")]
    Syntax {
        /// 1-based line number of the offending record.
        line: usize,
        /// Description of what was expected.
        message: String,
    },

    /// A well-formed record referred to something the netlist rejects.
    #[error("line {line}: {source}")]
    Ingest {
        /// 1-based line number of the offending record.
        line: usize,
        /// The underlying netlist construction error.
        source: IngestError,
    },

    /// A file ended before a required record appeared.
    #[error("missing `{0}` record")]
    MissingRecord(&'static str),
}

impl FileError {
    /// Builds a syntax error for `line` with the given message.
    pub(crate) fn syntax(line: usize, message: impl Into<String>) -> Self {
        FileError::Syntax {
            line,
            message: message.into(),
        }
    }
}
