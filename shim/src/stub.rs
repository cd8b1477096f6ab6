//! The state accessor capability handed to contracts.
//!
//! A contract never owns or locates the ledger. The runtime passes a
//! `ChaincodeStub` for the current transaction inside the [`Context`],
//! and every read and write goes through it.
//!
//! [`Context`]: crate::Context

use kvchain_primitives::StoreResult;

/// Transactional key-value access for one transaction.
///
/// Implementations decide durability and isolation. The contract relies
/// only on read-your-writes within the transaction.
pub trait ChaincodeStub {
    /// Write `value` under `key`, replacing any existing value.
    fn put_state(&mut self, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Read the value under `key`.
    ///
    /// A missing key is `Ok(None)`, not an error.
    fn get_state(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Remove `key`. Removing a missing key succeeds and changes nothing.
    fn delete_state(&mut self, key: &str) -> StoreResult<()>;

    /// Id of the transaction this stub belongs to.
    fn tx_id(&self) -> &str;

    /// Channel the transaction runs on.
    fn channel_id(&self) -> &str;
}
