//! `kvchain-contract` — a key-value smart contract over ledger state.
//!
//! The contract exposes three transaction functions:
//!
//! - `put(key, value)` — store `value` under `key`, overwriting
//! - `get(key)` — read the value, failing with `NotFound` if there is none
//! - `delete(key)` — remove `key`; removing a missing key succeeds
//!
//! It holds no state of its own. Every call reaches the ledger through the
//! [`Context`](kvchain_shim::Context) the runtime passes in.
//!
//! ## Architecture
//!
//! - [`contract::KeyValueContract`] — the three operations
//! - [`error::ContractError`] — `NotFound`, store failures, dispatch errors
//! - [`dispatch`] — routing by function name for the runtime's `invoke`

pub mod error;
pub mod contract;
pub mod dispatch;

pub use contract::KeyValueContract;
pub use dispatch::dispatch;
pub use error::{ContractError, ContractResult};
