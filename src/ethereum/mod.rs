//! Ethereum interaction module.
//!
//! Contains the node connection, wallet management, the contract registry,
//! ABI loading, and contract handles.

pub mod abi;
pub mod client;
pub mod constants;
pub mod contract;
pub mod registry;
pub mod wallet;

pub use abi::AbiStore;
pub use client::{HttpProvider, NodeConnection};
pub use contract::ContractHandle;
pub use registry::{ContractRegistry, Network};
pub use wallet::WalletManager;
