//! `kvchain-shim` — the runtime side of a KVChain contract invocation.
//!
//! This crate defines what a contract sees of the ledger and provides an
//! in-memory ledger that can run contracts end to end:
//!
//! - `ChaincodeStub` trait — the per-transaction state accessor capability
//! - `Context` — the transaction context handed to each contract call
//! - `Chaincode` trait — the string-argument entry point a runtime invokes
//! - `Response` — status, message, and payload of an invocation
//! - `StateStore` trait — read access to committed state
//! - `MemStore` — in-memory `StateStore` with a deterministic digest
//! - `TxStub` — `ChaincodeStub` buffering writes over a `StateStore`
//! - `MemLedger` — runs transactions, commits on success, discards on failure
//! - `StubConfig` — key, value, and write-budget limits

pub mod config;
pub mod stub;
pub mod context;
pub mod response;
pub mod state_store;
pub mod mem_store;
pub mod tx_stub;
pub mod ledger;

// Re-export commonly used types at the crate root.
pub use config::StubConfig;
pub use stub::ChaincodeStub;
pub use context::{Chaincode, Context};
pub use response::Response;
pub use state_store::StateStore;
pub use mem_store::MemStore;
pub use tx_stub::TxStub;
pub use ledger::MemLedger;
pub use kvchain_primitives::{StoreError, StoreResult};
