//! Ethereum node connection.

use alloy::{
    consensus::TxEnvelope,
    network::Ethereum,
    primitives::{Address, Bytes},
    providers::{Provider, ProviderBuilder, RootProvider},
    rpc::types::{TransactionReceipt, TransactionRequest},
};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::ethereum::registry::Network;

/// Type alias for the HTTP provider.
pub type HttpProvider = RootProvider<Ethereum>;

/// Connection to a remote Ethereum node, bound to a default sending account.
///
/// One connection per instantiation. No retries, no timeout configuration,
/// no pooling; transport failures surface as-is from the provider.
#[derive(Clone)]
pub struct NodeConnection {
    /// The underlying provider.
    provider: Arc<HttpProvider>,
    /// Selected network.
    network: Network,
    /// Node URL for logging.
    node_url: String,
    /// Default sending account.
    default_account: Address,
}

impl NodeConnection {
    /// Create a new node connection.
    ///
    /// Note: This does NOT make any network calls. The connection is
    /// established lazily when the first operation is performed.
    pub fn new(network: Network, node_url: &str, default_account: Address) -> Result<Self> {
        let url = node_url
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid node URL: {}", node_url)))?;

        #[allow(deprecated)]
        let provider = ProviderBuilder::new().connect_http(url).root().clone();

        tracing::info!(
            network = %network,
            node_url = %node_url,
            account = %default_account,
            "Node connection created (lazy initialization)"
        );

        Ok(Self {
            provider: Arc::new(provider),
            network,
            node_url: node_url.to_string(),
            default_account,
        })
    }

    /// Get the underlying provider.
    pub fn provider(&self) -> &HttpProvider {
        &self.provider
    }

    /// Selected network.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Node URL this connection targets.
    pub fn node_url(&self) -> &str {
        &self.node_url
    }

    /// Default sending account bound at construction.
    pub fn default_account(&self) -> Address {
        self.default_account
    }

    /// Chain ID for the selected network.
    pub fn chain_id(&self) -> u64 {
        self.network.chain_id()
    }

    /// Pending transaction count for an account, used as the next nonce.
    ///
    /// Fetched fresh per transaction; concurrent senders sharing one account
    /// can observe the same count and collide on the nonce.
    pub async fn pending_transaction_count(&self, address: Address) -> Result<u64> {
        let count = self.provider.get_transaction_count(address).pending().await?;
        Ok(count)
    }

    /// Current gas price reported by the node.
    pub async fn gas_price(&self) -> Result<u128> {
        let gas_price = self.provider.get_gas_price().await?;
        Ok(gas_price)
    }

    /// Execute a read-only call against current chain state.
    pub async fn call(&self, tx: &TransactionRequest) -> Result<Bytes> {
        let result = self.provider.call(tx.clone()).await?;
        Ok(result)
    }

    /// Submit a signed transaction and block until the node reports it mined.
    ///
    /// No timeout is configured; a stalled node keeps this pending
    /// indefinitely.
    pub async fn submit_and_wait(&self, envelope: TxEnvelope) -> Result<TransactionReceipt> {
        let pending = self.provider.send_tx_envelope(envelope).await?;
        let receipt = pending.get_receipt().await?;
        Ok(receipt)
    }
}

impl std::fmt::Debug for NodeConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeConnection")
            .field("network", &self.network)
            .field("node_url", &self.node_url)
            .field("default_account", &self.default_account)
            .finish()
    }
}
