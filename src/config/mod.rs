//! Configuration management module.
//!
//! Handles loading configuration from environment variables.

use std::env;

use alloy::primitives::Address;

use crate::error::AppError;
use crate::ethereum::registry::Network;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Selected network (determines registry entries and chain ID).
    pub network: Network,
    /// Ethereum node JSON-RPC endpoint URL.
    pub node_url: String,
    /// Default sending account, bound to the node connection.
    pub account: Address,
    /// Private key for the signing identity (hex string, 0x prefix optional).
    pub private_key: String,
    /// Logging level (default: info).
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `ETHEREUM_NODE_URL`: Ethereum JSON-RPC endpoint
    /// - `ETHEREUM_ACCOUNT_ADDRESS`: default sending account (hex)
    /// - `ETHEREUM_PRIVATE_KEY`: private key for the signing identity (hex)
    ///
    /// Optional environment variables:
    /// - `ETHEREUM_NETWORK`: `mainnet` or `ropsten` (default: mainnet)
    /// - `LOG_LEVEL`: Logging level (default: info)
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let network = match env::var("ETHEREUM_NETWORK") {
            Ok(raw) => raw.parse()?,
            Err(_) => Network::Mainnet,
        };

        let node_url = env::var("ETHEREUM_NODE_URL").map_err(|_| {
            AppError::Config("ETHEREUM_NODE_URL environment variable not set".into())
        })?;

        let account = env::var("ETHEREUM_ACCOUNT_ADDRESS")
            .map_err(|_| {
                AppError::Config("ETHEREUM_ACCOUNT_ADDRESS environment variable not set".into())
            })?
            .parse::<Address>()
            .map_err(|e| AppError::InvalidAddress(e.to_string()))?;

        let private_key = env::var("ETHEREUM_PRIVATE_KEY").map_err(|_| {
            AppError::Config("ETHEREUM_PRIVATE_KEY environment variable not set".into())
        })?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self { network, node_url, account, private_key, log_level })
    }
}
