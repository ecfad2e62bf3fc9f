//! Common utilities for integration tests.

use ens_contract_client::{
    AbiStore, Config, ContractHandle, ContractRegistry, NodeConnection, WalletManager,
};

/// Helper to build a contract handle from environment variables.
pub fn create_test_handle(contract_name: &str) -> Option<ContractHandle> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let _ = tracing_subscriber::fmt().with_env_filter("warn").try_init();

    let config = Config::from_env().ok()?;

    let connection = NodeConnection::new(config.network, &config.node_url, config.account).ok()?;
    let wallet = WalletManager::from_private_key(&config.private_key).ok()?;

    ContractHandle::build(
        contract_name,
        &ContractRegistry::ens(),
        &AbiStore::bundled(),
        connection,
        wallet,
    )
    .ok()
}

/// Skip test if a handle cannot be built (missing env vars).
#[macro_export]
macro_rules! skip_if_no_node {
    ($contract_name:expr) => {
        match common::create_test_handle($contract_name) {
            Some(handle) => handle,
            None => {
                eprintln!("Skipping test: Ethereum environment variables not set");
                return;
            }
        }
    };
}
