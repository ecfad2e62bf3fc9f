//! Network selection and the contract address registry.
//!
//! The registry is an explicit configuration value injected at startup rather
//! than a module-level global, so tests and multi-environment processes can
//! each carry their own.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use alloy::primitives::Address;

use crate::error::{AppError, Result};
use crate::ethereum::constants::{
    ENS_REGISTRY_MAINNET, ENS_REGISTRY_ROPSTEN, ENS_RESOLVER_MAINNET, ENS_RESOLVER_ROPSTEN,
    ETHEREUM_MAINNET_CHAIN_ID, ROPSTEN_CHAIN_ID,
};

/// Supported Ethereum networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// Ethereum Mainnet.
    Mainnet,
    /// Ropsten testnet.
    Ropsten,
}

impl Network {
    /// Chain ID used when building transactions for this network.
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Mainnet => ETHEREUM_MAINNET_CHAIN_ID,
            Network::Ropsten => ROPSTEN_CHAIN_ID,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Ropsten => write!(f, "ropsten"),
        }
    }
}

impl FromStr for Network {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "ethereum_mainnet" => Ok(Network::Mainnet),
            "ropsten" | "ethereum_ropsten" => Ok(Network::Ropsten),
            other => Err(AppError::Config(format!("Unknown network: {}", other))),
        }
    }
}

/// Mapping from (network, contract name) to contract address.
#[derive(Debug, Clone, Default)]
pub struct ContractRegistry {
    entries: HashMap<Network, HashMap<String, Address>>,
}

impl ContractRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the well-known ENS contracts on every
    /// supported network.
    pub fn ens() -> Self {
        let mut registry = Self::new();
        registry.insert_address(Network::Mainnet, "ens_registry", ENS_REGISTRY_MAINNET);
        registry.insert_address(Network::Mainnet, "ens_resolver", ENS_RESOLVER_MAINNET);
        registry.insert_address(Network::Ropsten, "ens_registry", ENS_REGISTRY_ROPSTEN);
        registry.insert_address(Network::Ropsten, "ens_resolver", ENS_RESOLVER_ROPSTEN);
        registry
    }

    /// Add an entry from a hex address string, validating its format.
    ///
    /// A malformed address (wrong length, non-hex characters, trailing
    /// garbage) is a configuration error and is rejected here rather than
    /// surfacing later at transaction time.
    pub fn insert(&mut self, network: Network, name: &str, address: &str) -> Result<()> {
        let address = address
            .parse::<Address>()
            .map_err(|_| AppError::InvalidAddress(address.to_string()))?;
        self.insert_address(network, name, address);
        Ok(())
    }

    /// Add an entry from an already-parsed address.
    pub fn insert_address(&mut self, network: Network, name: &str, address: Address) {
        self.entries.entry(network).or_default().insert(name.to_string(), address);
    }

    /// Look up the address for a contract name on a network.
    pub fn resolve(&self, network: Network, name: &str) -> Result<Address> {
        self.entries
            .get(&network)
            .and_then(|contracts| contracts.get(name))
            .copied()
            .ok_or_else(|| AppError::ContractNotFound { network, name: name.to_string() })
    }

    /// Whether an entry exists for the pair.
    pub fn contains(&self, network: Network, name: &str) -> bool {
        self.entries.get(&network).is_some_and(|contracts| contracts.contains_key(name))
    }
}
