//! Ethereum network constants.
//!
//! Contains chain IDs, the well-known ENS contract addresses, and the
//! placeholder gas estimate.

use alloy::primitives::{address, Address};

// ============================================================================
// Chain IDs
// ============================================================================

/// Ethereum Mainnet chain ID.
pub const ETHEREUM_MAINNET_CHAIN_ID: u64 = 1;

/// Ropsten testnet chain ID.
pub const ROPSTEN_CHAIN_ID: u64 = 3;

// ============================================================================
// ENS Contract Addresses
// ============================================================================

/// ENS registry address on Ethereum Mainnet.
pub const ENS_REGISTRY_MAINNET: Address = address!("314159265dd8dbb310642f98f50c066173c1259b");

/// ENS public resolver address on Ethereum Mainnet.
pub const ENS_RESOLVER_MAINNET: Address = address!("226159d592e2b063810a10ebf6dcbada94ed68b8");

/// ENS registry address on Ropsten.
pub const ENS_REGISTRY_ROPSTEN: Address = address!("112234455c3a32fd11230c42e7bccd4a84e02010");

/// ENS public resolver address on Ropsten.
pub const ENS_RESOLVER_ROPSTEN: Address = address!("42d63ae25990889e35f215bc95884039ba354115");

// ============================================================================
// Gas
// ============================================================================

/// Placeholder gas estimate applied to every transaction.
///
/// Real gas estimation is intentionally disabled; transactions carry a gas
/// limit of exactly twice this value. Callers needing a tighter limit should
/// use `ContractHandle::transact_with_gas`.
pub const FALLBACK_GAS_ESTIMATE: u64 = 4_000_000;
