//! Error kinds raised while decoding a table.

use thiserror::Error;

use super::schema::DataType;

/// Result alias used throughout the table decoder
pub type Result<T> = std::result::Result<T, TableError>;

/// Any of these aborts the table decode in progress; no partial table is returned.
#[derive(Debug, Error)]
pub enum TableError {
    /// Fewer bytes were available than a primitive or pstring declared
    #[error("stream ended early while reading {what}")]
    Stream {
        what: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Magic mismatch or a structurally invalid header
    #[error("invalid table format: {0}")]
    Format(String),

    /// A token could not be parsed as its column's declared type
    #[error("cannot convert {column}={value:?} to {data_type:?}: {reason}")]
    Conversion {
        column: String,
        value: String,
        data_type: DataType,
        reason: String,
    },
}

impl TableError {
    pub(crate) fn stream(what: &'static str, source: std::io::Error) -> Self {
        Self::Stream { what, source }
    }

    pub(crate) fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    pub(crate) fn conversion(
        column: &str,
        value: &str,
        data_type: DataType,
        reason: impl ToString,
    ) -> Self {
        Self::Conversion {
            column: column.to_string(),
            value: value.to_string(),
            data_type,
            reason: reason.to_string(),
        }
    }
}
