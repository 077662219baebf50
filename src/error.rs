//! Error types for Icepool
//!
//! This module defines all custom error types used throughout the crate.

use std::io;
use thiserror::Error;

/// Convenience result alias for Icepool operations
pub type Result<T> = std::result::Result<T, IcePoolError>;

/// Main error type for Icepool operations
#[derive(Error, Debug)]
pub enum IcePoolError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session collaborator error
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors raised by session implementations
#[derive(Error, Debug)]
pub enum SessionError {
    /// The session could not be constructed
    #[error("Failed to create session: {0}")]
    Create(String),

    /// The session could not acquire a resource it needs
    #[error("Resource exhausted: {0}")]
    Resource(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icepool_error_display() {
        let err = IcePoolError::Config("invalid config".to_string());
        assert_eq!(format!("{}", err), "Configuration error: invalid config");

        let err = IcePoolError::Serialization("bad toml".to_string());
        assert_eq!(format!("{}", err), "Serialization error: bad toml");
    }

    #[test]
    fn test_icepool_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::Other, "io error");
        let err: IcePoolError = io_err.into();
        assert!(matches!(err, IcePoolError::Io(_)));
    }

    #[test]
    fn test_icepool_error_from_session() {
        let err: IcePoolError = SessionError::Create("no sockets".to_string()).into();
        assert!(matches!(err, IcePoolError::Session(SessionError::Create(_))));
        assert_eq!(
            format!("{}", err),
            "Session error: Failed to create session: no sockets"
        );
    }

    #[test]
    fn test_session_error_display() {
        let err = SessionError::Resource("ports".to_string());
        assert_eq!(format!("{}", err), "Resource exhausted: ports");
    }
}
