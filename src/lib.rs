//! ENS Contract Client
//!
//! A thin library for interacting with the well-known ENS contracts: it
//! connects to an Ethereum node, resolves contract addresses from an injected
//! registry, loads contract ABIs from bundled JSON files, and exposes
//! `transact`/`call` over the resulting handles. Transaction construction,
//! signing, submission, and receipt polling are delegated to `alloy`.
//!
//! # Example
//!
//! ```rust,ignore
//! use ens_contract_client::{
//!     AbiStore, Config, ContractHandle, ContractRegistry, NodeConnection, WalletManager,
//! };
//! use alloy::dyn_abi::DynSolValue;
//! use alloy::primitives::B256;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let connection = NodeConnection::new(config.network, &config.node_url, config.account)?;
//!     let wallet = WalletManager::from_private_key(&config.private_key)?;
//!
//!     let registry = ContractHandle::build(
//!         "ens_registry",
//!         &ContractRegistry::ens(),
//!         &AbiStore::bundled(),
//!         connection,
//!         wallet,
//!     )?;
//!
//!     let node = B256::ZERO; // namehash of the root node
//!     let owner = registry.call("owner", &[DynSolValue::FixedBytes(node, 32)]).await?;
//!     println!("root owner: {owner:?}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod ethereum;

pub use config::Config;
pub use error::{AppError, Result};
pub use ethereum::constants::*;
pub use ethereum::{AbiStore, ContractHandle, ContractRegistry, Network, NodeConnection, WalletManager};
