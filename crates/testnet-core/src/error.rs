//! Error types for the Testnet Portal

use thiserror::Error;

/// Main error type for portal operations
#[derive(Error, Debug)]
pub enum PortalError {
    /// Address is not `0x` followed by 40 hex digits
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Unknown network name
    #[error("Invalid network: {0}")]
    InvalidNetwork(String),

    /// Persisted snapshot could not be parsed or validated
    #[error("Malformed snapshot: {0}")]
    MalformedSnapshot(String),

    /// Operation requires a connected wallet
    #[error("Wallet not connected")]
    NotConnected,

    /// A connect call is already in flight
    #[error("Wallet connection already in progress")]
    ConnectInProgress,

    /// The backend refused or failed the connection
    #[error("Connection failed: {0}")]
    ConnectFailed(String),

    /// A newer request replaced this one before it resolved
    #[error("Request superseded by a newer operation")]
    Superseded,

    /// A simulated workflow is already running on this page
    #[error("{0} already in progress")]
    WorkflowBusy(&'static str),

    /// Mint draft is missing a required field
    #[error("Mint draft incomplete: {0}")]
    IncompleteDraft(&'static str),

    /// Error reported by the wallet backend
    #[error("Backend error: {0}")]
    Backend(String),

    /// Error during key-value storage operations
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Image could not be decoded or encoded
    #[error("Image error: {0}")]
    Image(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using PortalError
pub type PortalResult<T> = Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortalError::InvalidAddress("0x12".to_string());
        assert_eq!(format!("{}", err), "Invalid address: 0x12");

        let err = PortalError::WorkflowBusy("Faucet request");
        assert_eq!(err.to_string(), "Faucet request already in progress");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let portal_err: PortalError = io_err.into();
        assert!(matches!(portal_err, PortalError::Io(_)));
    }
}
