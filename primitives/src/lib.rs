//! `kvchain-primitives` — foundational types for the KVChain ledger contract.
//!
//! This crate provides the canonical limits, state access errors, hashing helpers,
//! and the transactional write set shared by the chaincode shim and the
//! key-value contract.

pub mod types;
pub mod error;
pub mod crypto;
pub mod write_set;

// Re-export commonly used types at the crate root for convenience.
pub use types::{Digest, MAX_KEY_LEN, MAX_VALUE_LEN, MAX_WRITE_BYTES, ZERO_DIGEST};
pub use error::{StoreError, StoreResult};
pub use write_set::{Lookup, WriteOp, WriteSet};
