//! In-memory committed state.
//!
//! `MemStore` keeps committed entries in a `BTreeMap`, so iteration and the
//! state digest are independent of insertion order.

use std::collections::BTreeMap;

use kvchain_primitives::{crypto::state_digest, Digest, StoreResult, WriteOp, WriteSet};

use crate::state_store::StateStore;

/// In-memory committed state backed by `BTreeMap`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemStore {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with data.
    pub fn with_data(data: BTreeMap<Vec<u8>, Vec<u8>>) -> Self {
        Self { data }
    }

    pub fn insert(&mut self, key: Vec<u8>, value: Vec<u8>) {
        self.data.insert(key, value);
    }

    pub fn remove(&mut self, key: &[u8]) {
        self.data.remove(key);
    }

    /// Apply a transaction's write set: puts insert, deletes remove.
    pub fn apply(&mut self, writes: WriteSet) {
        for (key, op) in writes.into_ops() {
            match op {
                WriteOp::Put(value) => {
                    self.data.insert(key, value);
                }
                WriteOp::Delete => {
                    self.data.remove(&key);
                }
            }
        }
    }

    /// Digest of every committed entry in key order.
    pub fn digest(&self) -> Digest {
        state_digest(self.data.iter().map(|(k, v)| (k.as_slice(), v.as_slice())))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl StateStore for MemStore {
    fn get(&self, key: &[u8]) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.data.get(key).cloned())
    }
}
