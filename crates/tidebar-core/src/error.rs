//! Error types for Tidebar core systems.

/// A specialized Result type for Tidebar core operations.
pub type Result<T> = std::result::Result<T, SignalError>;

/// Signal-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    #[error("invalid or already disconnected connection ID")]
    InvalidConnection,
}
