//! In-memory ledger runtime.
//!
//! `MemLedger` plays the part of a peer for one channel: it hands each
//! transaction a fresh [`TxStub`] over committed state and decides what
//! happens to the buffered writes afterwards.
//!
//! **Atomicity:** a transaction's writes are applied together when it
//! succeeds and dropped together when it fails. Evaluations (queries)
//! never apply writes.

use std::sync::Arc;

use kvchain_primitives::{crypto::derive_tx_id, Digest};
use tracing::{debug, info, warn};

use crate::config::StubConfig;
use crate::context::{Chaincode, Context};
use crate::mem_store::MemStore;
use crate::response::Response;
use crate::state_store::StateStore;
use crate::stub::ChaincodeStub;
use crate::tx_stub::TxStub;

/// Single-channel in-memory ledger.
///
/// Transactions run one at a time (`&mut self`), so committed state only
/// changes between transactions.
pub struct MemLedger {
    channel_id: String,
    store: Arc<MemStore>,
    config: StubConfig,
    /// Sequence number of the next transaction (submitted or evaluated).
    next_seq: u64,
    /// Number of committed transactions.
    height: u64,
}

impl MemLedger {
    /// Create an empty ledger with default limits.
    pub fn new(channel_id: impl Into<String>) -> Self {
        Self::with_config(channel_id, StubConfig::default())
    }

    /// Create an empty ledger with custom limits.
    pub fn with_config(channel_id: impl Into<String>, config: StubConfig) -> Self {
        Self::with_store(channel_id, MemStore::new(), config)
    }

    /// Create a ledger starting from existing committed state.
    pub fn with_store(channel_id: impl Into<String>, store: MemStore, config: StubConfig) -> Self {
        Self {
            channel_id: channel_id.into(),
            store: Arc::new(store),
            config,
            next_seq: 0,
            height: 0,
        }
    }

    /// Run `f` as a transaction; commit its writes if it returns `Ok`.
    pub fn submit<T, E, F>(&mut self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Context<'_>) -> Result<T, E>,
    {
        let mut stub = self.begin();
        let result = f(&mut Context::new(&mut stub));
        match result {
            Ok(_) => self.commit(stub),
            Err(_) => self.discard(stub),
        }
        result
    }

    /// Run `f` as a query. Writes are visible to `f` but never committed.
    pub fn evaluate<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut Context<'_>) -> T,
    {
        let mut stub = self.begin();
        let out = f(&mut Context::new(&mut stub));
        debug!(
            tx_id = stub.tx_id(),
            writes = stub.write_set().len(),
            "evaluated transaction"
        );
        out
    }

    /// Invoke `function` on `chaincode` as a transaction.
    ///
    /// Writes are committed only if the response is OK.
    pub fn invoke(&mut self, chaincode: &dyn Chaincode, function: &str, args: &[&str]) -> Response {
        let mut stub = self.begin();
        let response = chaincode.invoke(&mut Context::new(&mut stub), function, args);
        if response.is_ok() {
            self.commit(stub);
        } else {
            self.discard(stub);
        }
        response
    }

    /// Invoke `function` on `chaincode` as a query; nothing is committed.
    pub fn query(&mut self, chaincode: &dyn Chaincode, function: &str, args: &[&str]) -> Response {
        self.evaluate(|ctx| chaincode.invoke(ctx, function, args))
    }

    fn begin(&mut self) -> TxStub {
        let seq = self.next_seq;
        self.next_seq += 1;
        let tx_id = derive_tx_id(&self.channel_id, seq);
        let store: Arc<dyn StateStore> = self.store.clone();
        TxStub::new(store, tx_id, self.channel_id.clone(), self.config.clone())
    }

    fn commit(&mut self, stub: TxStub) {
        let tx_id = stub.tx_id().to_owned();
        let writes = stub.into_write_set();
        let count = writes.len();
        let bytes = writes.write_bytes();
        // The stub's handle is gone, so this does not clone.
        Arc::make_mut(&mut self.store).apply(writes);
        self.height += 1;
        info!(
            tx_id = %tx_id,
            writes = count,
            bytes,
            height = self.height,
            "committed transaction"
        );
    }

    fn discard(&self, stub: TxStub) {
        warn!(
            tx_id = stub.tx_id(),
            writes = stub.write_set().len(),
            "discarded failed transaction"
        );
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    /// Committed state.
    pub fn store(&self) -> &MemStore {
        &self.store
    }

    /// Digest of committed state.
    pub fn state_digest(&self) -> Digest {
        self.store.digest()
    }

    /// Number of committed transactions.
    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn config(&self) -> &StubConfig {
        &self.config
    }
}
