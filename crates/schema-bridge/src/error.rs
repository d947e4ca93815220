//! Error types for schema translation and data transfer.

use thiserror::Error;

/// Main error type for bridge operations.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Statement execution failed on a target connection.
    #[error("Connection error: {message}\n  Context: {context}")]
    Connection { message: String, context: String },

    /// Export failed for a specific table.
    #[error("Export failed for table {table}: {message}")]
    Export { table: String, message: String },

    /// Metadata is inconsistent (e.g. a foreign key referencing an unknown table).
    #[error("Metadata error: {0}")]
    Metadata(String),

    /// The row source closed before the protocol sequence completed.
    #[error("Row source ended unexpectedly: {0}")]
    SourceClosed(String),

    /// IO error (file-backed sinks, script files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BridgeError {
    /// Create a Connection error with context about where it occurred.
    pub fn connection(message: impl Into<String>, context: impl Into<String>) -> Self {
        BridgeError::Connection {
            message: message.into(),
            context: context.into(),
        }
    }

    /// Create an Export error.
    pub fn export(table: impl Into<String>, message: impl Into<String>) -> Self {
        BridgeError::Export {
            table: table.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;
