//! World state as of the last commit.
//!
//! A chaincode never sees this trait directly. Each transaction gets a
//! [`TxStub`](crate::TxStub) that answers `get_state` from its own buffered
//! puts and deletes, and asks the `StateStore` only for keys the
//! transaction has not touched. Nothing written through a stub reaches the
//! store until [`MemLedger`](crate::MemLedger) commits it.

use kvchain_primitives::StoreResult;

/// Committed world state, shared read-only between transaction stubs.
///
/// A read of the same key must give the same answer for as long as no
/// commit lands in between.
pub trait StateStore: Send + Sync {
    /// Committed value of `key`, or `None` if no commit ever wrote it (or
    /// the last one deleted it).
    fn get(&self, key: &[u8]) -> StoreResult<Option<Vec<u8>>>;
}
