//! Shared test helpers for integration tests.
//!
//! Provides a ledger factory and shorthand for running one contract
//! operation per committed transaction.

#![allow(dead_code)]

use kvchain_contract::{ContractResult, KeyValueContract};
use kvchain_shim::{MemLedger, StubConfig};

/// Channel every test ledger runs on.
pub const CHANNEL: &str = "mychannel";

/// The asset used throughout the scenarios.
pub const ASSET_KEY: &str = "100";
pub const ASSET_VALUE: &str = "Black";

/// Fresh empty ledger with default limits.
pub fn ledger() -> MemLedger {
    MemLedger::new(CHANNEL)
}

/// Fresh empty ledger with custom limits.
pub fn ledger_with_config(config: StubConfig) -> MemLedger {
    MemLedger::with_config(CHANNEL, config)
}

// ── One operation per transaction ──

pub fn put(ledger: &mut MemLedger, key: &str, value: &str) -> ContractResult<()> {
    ledger.submit(|ctx| KeyValueContract.put(ctx, key, value))
}

pub fn get(ledger: &mut MemLedger, key: &str) -> ContractResult<String> {
    ledger.evaluate(|ctx| KeyValueContract.get(ctx, key))
}

pub fn delete(ledger: &mut MemLedger, key: &str) -> ContractResult<()> {
    ledger.submit(|ctx| KeyValueContract.delete(ctx, key))
}
