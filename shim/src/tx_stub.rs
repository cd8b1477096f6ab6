//! Per-transaction state accessor over committed state.
//!
//! `TxStub` holds the write set of one transaction on top of a shared
//! [`StateStore`]. Reads see the transaction's own writes first and fall
//! through to committed state otherwise. Nothing reaches committed state
//! until the runtime applies [`TxStub::into_write_set`].

use std::sync::Arc;

use kvchain_primitives::{Lookup, StoreError, StoreResult, WriteSet};

use crate::config::StubConfig;
use crate::state_store::StateStore;
use crate::stub::ChaincodeStub;

/// `ChaincodeStub` for one transaction, buffering writes in a `WriteSet`.
pub struct TxStub {
    store: Arc<dyn StateStore>,
    writes: WriteSet,
    config: StubConfig,
    tx_id: String,
    channel_id: String,
}

impl TxStub {
    pub fn new(
        store: Arc<dyn StateStore>,
        tx_id: impl Into<String>,
        channel_id: impl Into<String>,
        config: StubConfig,
    ) -> Self {
        Self {
            store,
            writes: WriteSet::new(),
            config,
            tx_id: tx_id.into(),
            channel_id: channel_id.into(),
        }
    }

    /// Writes buffered so far.
    pub fn write_set(&self) -> &WriteSet {
        &self.writes
    }

    /// Finish the transaction, releasing the store and yielding its writes.
    pub fn into_write_set(self) -> WriteSet {
        self.writes
    }

}

impl ChaincodeStub for TxStub {
    fn put_state(&mut self, key: &str, value: &[u8]) -> StoreResult<()> {
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        if key.len() > self.config.max_key_len {
            return Err(StoreError::KeyTooLarge {
                len: key.len(),
                max: self.config.max_key_len,
            });
        }
        if value.len() > self.config.max_value_len {
            return Err(StoreError::ValueTooLarge {
                len: value.len(),
                max: self.config.max_value_len,
            });
        }
        // Checked before buffering so a rejected write leaves the set intact.
        if self.writes.bytes_after_put(key.as_bytes(), value.len()) > self.config.max_write_bytes {
            return Err(StoreError::WriteLimit {
                limit: self.config.max_write_bytes,
            });
        }
        self.writes.put(key.as_bytes().to_vec(), value.to_vec());
        Ok(())
    }

    // Key limits bound what can be written. A key too long to have been
    // written reads as missing and deletes as a no-op.
    fn get_state(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        match self.writes.lookup(key.as_bytes()) {
            Lookup::Written(value) => Ok(Some(value)),
            Lookup::Deleted => Ok(None),
            Lookup::Untouched => self.store.get(key.as_bytes()),
        }
    }

    fn delete_state(&mut self, key: &str) -> StoreResult<()> {
        if self.writes.bytes_after_delete(key.as_bytes()) > self.config.max_write_bytes {
            return Err(StoreError::WriteLimit {
                limit: self.config.max_write_bytes,
            });
        }
        self.writes.delete(key.as_bytes().to_vec());
        Ok(())
    }

    fn tx_id(&self) -> &str {
        &self.tx_id
    }

    fn channel_id(&self) -> &str {
        &self.channel_id
    }
}
