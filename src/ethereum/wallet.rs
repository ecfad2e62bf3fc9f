//! Signing identity.

use alloy::{
    consensus::TxEnvelope,
    network::{EthereumWallet, TransactionBuilder},
    primitives::Address,
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
};

use crate::error::{AppError, Result};

/// Wallet manager holding the signing key for transactions.
#[derive(Clone)]
pub struct WalletManager {
    /// The local signer.
    signer: PrivateKeySigner,
    /// Wallet address.
    address: Address,
}

impl WalletManager {
    /// Create a wallet manager from a private key string.
    pub fn from_private_key(private_key: &str) -> Result<Self> {
        // Remove 0x prefix if present
        let key = private_key.strip_prefix("0x").unwrap_or(private_key);

        let signer: PrivateKeySigner =
            key.parse().map_err(|e: alloy::signers::local::LocalSignerError| {
                AppError::Wallet(e.to_string())
            })?;

        let address = signer.address();

        tracing::info!(address = %address, "Wallet initialized");

        Ok(Self { signer, address })
    }

    /// Get the wallet address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Get the signer for transaction signing.
    pub fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }

    /// Sign a fully-populated transaction request into a sendable envelope.
    ///
    /// The request must already carry nonce, gas limit, gas price, and chain
    /// ID; an incomplete request is a wallet error, not silently filled.
    pub async fn sign_request(&self, tx: TransactionRequest) -> Result<TxEnvelope> {
        let wallet = EthereumWallet::from(self.signer.clone());
        let envelope = tx.build(&wallet).await.map_err(|e| AppError::Wallet(e.to_string()))?;
        Ok(envelope)
    }
}

impl std::fmt::Debug for WalletManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletManager").field("address", &self.address).finish()
    }
}
