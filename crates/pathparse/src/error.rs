//! Error types for table rendering

use std::io;

/// Errors produced while writing a route table
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The underlying writer failed
    #[error("failed to write route table: {0}")]
    Io(#[from] io::Error),
}

/// Result alias for table operations
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message() {
        let err = TableError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.to_string(), "failed to write route table: pipe closed");
    }
}
