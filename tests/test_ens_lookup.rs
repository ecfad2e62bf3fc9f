//! Integration tests for read-only ENS lookups.
//!
//! Run with: `cargo test --test test_ens_lookup -- --ignored`

mod common;

use alloy::dyn_abi::DynSolValue;
use alloy::primitives::B256;

/// Query the owner of the ENS root node on the configured network.
#[tokio::test]
#[ignore = "Requires network access and environment variables"]
async fn test_call_root_owner() {
    let registry = skip_if_no_node!("ens_registry");

    // The root node is the zero hash; it always has an owner.
    let root = B256::ZERO;
    let result = registry.call("owner", &[DynSolValue::FixedBytes(root, 32)]).await;

    assert!(result.is_ok(), "owner call should succeed: {:?}", result.err());

    let values = result.unwrap();
    assert_eq!(values.len(), 1);
    assert!(matches!(values[0], DynSolValue::Address(_)));
}

/// Query the resolver of the ENS root node.
#[tokio::test]
#[ignore = "Requires network access and environment variables"]
async fn test_call_root_resolver() {
    let registry = skip_if_no_node!("ens_registry");

    let root = B256::ZERO;
    let result = registry.call("resolver", &[DynSolValue::FixedBytes(root, 32)]).await;

    assert!(result.is_ok(), "resolver call should succeed: {:?}", result.err());
}

/// Unknown methods fail locally, before any RPC is issued.
#[tokio::test]
#[ignore = "Requires network access and environment variables"]
async fn test_call_unknown_method_fails_locally() {
    let registry = skip_if_no_node!("ens_registry");

    let result = registry.call("definitelyNotAMethod", &[]).await;
    assert!(result.is_err());
}
