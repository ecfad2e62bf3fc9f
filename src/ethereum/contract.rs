//! Contract handles: address resolution, ABI binding, and the
//! `transact`/`call` convenience layer.

use alloy::{
    dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt},
    json_abi::{Function, JsonAbi},
    network::TransactionBuilder,
    primitives::{Address, Bytes},
    rpc::types::{TransactionReceipt, TransactionRequest},
};

use crate::error::{AppError, Result};
use crate::ethereum::abi::AbiStore;
use crate::ethereum::client::NodeConnection;
use crate::ethereum::constants::FALLBACK_GAS_ESTIMATE;
use crate::ethereum::registry::ContractRegistry;
use crate::ethereum::wallet::WalletManager;

/// A callable handle scoped to one contract on one network.
///
/// Building a handle resolves the address for the connection's network and
/// reads the ABI file; both happen on every build, so callers should build
/// once per contract and keep the handle around.
#[derive(Debug, Clone)]
pub struct ContractHandle {
    /// Symbolic contract name, as keyed in the registry and ABI store.
    name: String,
    /// Resolved on-chain address.
    address: Address,
    /// Parsed interface definition.
    abi: JsonAbi,
    /// Shared node connection.
    connection: NodeConnection,
    /// Signing identity for state-mutating calls.
    wallet: WalletManager,
}

impl ContractHandle {
    /// Resolve the address and load the ABI for a contract name, composing a
    /// callable handle.
    ///
    /// Fails on a missing registry entry or a missing/malformed ABI file
    /// before any node interaction occurs.
    pub fn build(
        name: &str,
        registry: &ContractRegistry,
        abis: &AbiStore,
        connection: NodeConnection,
        wallet: WalletManager,
    ) -> Result<Self> {
        let address = registry.resolve(connection.network(), name)?;
        let abi = abis.load(name)?;

        tracing::debug!(
            contract = name,
            address = %address.to_checksum(None),
            network = %connection.network(),
            "Contract handle built"
        );

        Ok(Self { name: name.to_string(), address, abi, connection, wallet })
    }

    /// Symbolic contract name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved contract address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Parsed interface definition.
    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    fn function(&self, method: &str) -> Result<&Function> {
        self.abi
            .function(method)
            .and_then(|overloads| overloads.first())
            .ok_or_else(|| AppError::MethodNotFound(method.to_string()))
    }

    /// ABI-encode the calldata for a method invocation.
    pub fn encode_input(&self, method: &str, args: &[DynSolValue]) -> Result<Bytes> {
        let encoded = self.function(method)?.abi_encode_input(args)?;
        Ok(encoded.into())
    }

    /// Build the unsigned transaction request for a method invocation.
    ///
    /// The nonce is passed through unchanged and the gas limit is exactly
    /// twice [`FALLBACK_GAS_ESTIMATE`]; per-call gas estimation is disabled.
    pub fn transaction_request(
        &self,
        method: &str,
        args: &[DynSolValue],
        nonce: u64,
        gas_price: u128,
    ) -> Result<TransactionRequest> {
        let input = self.encode_input(method, args)?;

        Ok(TransactionRequest::default()
            .with_from(self.wallet.address())
            .with_to(self.address)
            .with_input(input)
            .with_nonce(nonce)
            .with_gas_limit(FALLBACK_GAS_ESTIMATE * 2)
            .with_gas_price(gas_price)
            .with_chain_id(self.connection.chain_id()))
    }

    /// Invoke a state-mutating method and block until the node reports the
    /// transaction mined.
    ///
    /// Fetches the sending account's pending transaction count as the nonce
    /// and the node's current gas price, signs via the wallet, submits, and
    /// awaits the receipt. Irreversible on-chain side effect. Errors from
    /// the node, the signer, or the confirmation wait are surfaced as-is;
    /// nothing is retried.
    pub async fn transact(
        &self,
        method: &str,
        args: &[DynSolValue],
    ) -> Result<TransactionReceipt> {
        let tx = self.prepared_request(method, args).await?;
        self.sign_and_submit(tx, method).await
    }

    /// Same as [`transact`](Self::transact) with an explicit gas limit, for
    /// callers that estimate gas themselves.
    pub async fn transact_with_gas(
        &self,
        method: &str,
        args: &[DynSolValue],
        gas_limit: u64,
    ) -> Result<TransactionReceipt> {
        let tx = self.prepared_request(method, args).await?.with_gas_limit(gas_limit);
        self.sign_and_submit(tx, method).await
    }

    /// Invoke a read-only method against current chain state and decode the
    /// result per the interface definition. No signing, no gas, no
    /// confirmation wait.
    pub async fn call(&self, method: &str, args: &[DynSolValue]) -> Result<Vec<DynSolValue>> {
        let input = self.encode_input(method, args)?;
        let tx = TransactionRequest::default().with_to(self.address).with_input(input);

        let output = self.connection.call(&tx).await?;

        let decoded = self.function(method)?.abi_decode_output(&output)?;
        Ok(decoded)
    }

    async fn prepared_request(
        &self,
        method: &str,
        args: &[DynSolValue],
    ) -> Result<TransactionRequest> {
        // Fetched fresh per attempt. Two concurrent senders sharing this
        // account can read the same count and collide on the nonce.
        let nonce = self.connection.pending_transaction_count(self.wallet.address()).await?;
        let gas_price = self.connection.gas_price().await?;

        self.transaction_request(method, args, nonce, gas_price)
    }

    async fn sign_and_submit(
        &self,
        tx: TransactionRequest,
        method: &str,
    ) -> Result<TransactionReceipt> {
        tracing::info!(contract = %self.name, method = method, "Transaction pending...");

        let envelope = self.wallet.sign_request(tx).await?;
        let receipt = self.connection.submit_and_wait(envelope).await?;

        tracing::info!(
            contract = %self.name,
            method = method,
            tx_hash = %receipt.transaction_hash,
            gas_used = receipt.gas_used,
            "Executed transaction"
        );

        Ok(receipt)
    }
}
