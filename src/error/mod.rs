//! Error types and handling module.
//!
//! Defines all application-specific error types and conversions. Nothing is
//! caught or retried inside this crate; every error bubbles to the caller.

use thiserror::Error;

use crate::ethereum::registry::Network;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Contract name absent from the registry for the selected network.
    #[error("Contract not found: {name} on {network}")]
    ContractNotFound { network: Network, name: String },

    /// ABI file missing, unreadable, or malformed.
    #[error("ABI error: {0}")]
    Abi(String),

    /// Method name absent from a contract's ABI.
    #[error("Method not found in ABI: {0}")]
    MethodNotFound(String),

    /// Invalid Ethereum address.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Ethereum RPC errors.
    #[error("Ethereum RPC error: {0}")]
    Rpc(String),

    /// Transport errors.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Wallet-related errors.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Pending transaction error while waiting for confirmation.
    #[error("Pending transaction error: {0}")]
    PendingTransaction(String),
}

impl From<alloy::transports::TransportError> for AppError {
    fn from(err: alloy::transports::TransportError) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl From<alloy::signers::local::LocalSignerError> for AppError {
    fn from(err: alloy::signers::local::LocalSignerError) -> Self {
        AppError::Wallet(err.to_string())
    }
}

impl From<alloy::hex::FromHexError> for AppError {
    fn from(err: alloy::hex::FromHexError) -> Self {
        AppError::InvalidAddress(err.to_string())
    }
}

impl From<alloy::dyn_abi::Error> for AppError {
    fn from(err: alloy::dyn_abi::Error) -> Self {
        AppError::Abi(err.to_string())
    }
}

impl From<alloy::providers::PendingTransactionError> for AppError {
    fn from(err: alloy::providers::PendingTransactionError) -> Self {
        AppError::PendingTransaction(err.to_string())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_config_display() {
        let err = AppError::Config("ETHEREUM_NODE_URL not set".to_string());
        assert_eq!(err.to_string(), "Configuration error: ETHEREUM_NODE_URL not set");
    }

    #[test]
    fn test_app_error_contract_not_found_display() {
        let err = AppError::ContractNotFound {
            network: Network::Ropsten,
            name: "ens_registry".to_string(),
        };
        assert_eq!(err.to_string(), "Contract not found: ens_registry on ropsten");
    }

    #[test]
    fn test_app_error_abi_display() {
        let err = AppError::Abi("unexpected end of file".to_string());
        assert_eq!(err.to_string(), "ABI error: unexpected end of file");
    }

    #[test]
    fn test_app_error_method_not_found_display() {
        let err = AppError::MethodNotFound("setOwner".to_string());
        assert_eq!(err.to_string(), "Method not found in ABI: setOwner");
    }

    #[test]
    fn test_app_error_invalid_address_display() {
        let err = AppError::InvalidAddress("0xinvalid".to_string());
        assert_eq!(err.to_string(), "Invalid address: 0xinvalid");
    }

    #[test]
    fn test_app_error_transport_display() {
        let err = AppError::Transport("Network unreachable".to_string());
        assert_eq!(err.to_string(), "Transport error: Network unreachable");
    }

    #[test]
    fn test_app_error_wallet_display() {
        let err = AppError::Wallet("Invalid private key".to_string());
        assert_eq!(err.to_string(), "Wallet error: Invalid private key");
    }

    #[test]
    fn test_app_error_pending_transaction_display() {
        let err = AppError::PendingTransaction("Tx stuck".to_string());
        assert_eq!(err.to_string(), "Pending transaction error: Tx stuck");
    }

    #[test]
    fn test_from_hex_error() {
        let parse_result = "0xZZ".parse::<alloy::primitives::Address>();
        let app_err: AppError = parse_result.unwrap_err().into();

        match app_err {
            AppError::InvalidAddress(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected InvalidAddress error"),
        }
    }

    #[test]
    fn test_app_error_debug_trait() {
        let err = AppError::Config("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Config"));
    }
}
