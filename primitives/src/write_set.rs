//! Transactional write set for ledger state.
//!
//! A `WriteSet` buffers the puts and deletes of one transaction and makes
//! them visible to later reads in the same transaction. On success the
//! runtime applies it to committed state in one step; on failure it is
//! dropped and committed state is untouched.

use std::collections::BTreeMap;

/// A buffered mutation of a single key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOp {
    /// Set the key to this value.
    Put(Vec<u8>),
    /// Remove the key.
    Delete,
}

impl WriteOp {
    fn value_len(&self) -> u64 {
        match self {
            Self::Put(v) => v.len() as u64,
            Self::Delete => 0,
        }
    }
}

/// Result of looking up a key in the write set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The transaction wrote this value.
    Written(Vec<u8>),
    /// The transaction deleted the key.
    Deleted,
    /// The transaction has not touched the key; committed state decides.
    Untouched,
}

/// Buffered mutations of one transaction, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteSet {
    ops: BTreeMap<Vec<u8>, WriteOp>,
    /// Key bytes plus value bytes of every buffered op.
    write_bytes: u64,
}

impl WriteSet {
    /// Create an empty write set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte total the write set would have after `put(key, value)`.
    ///
    /// Lets callers enforce a budget before mutating anything.
    pub fn bytes_after_put(&self, key: &[u8], value_len: usize) -> u64 {
        self.bytes_without(key) + key.len() as u64 + value_len as u64
    }

    /// Byte total the write set would have after `delete(key)`.
    pub fn bytes_after_delete(&self, key: &[u8]) -> u64 {
        self.bytes_without(key) + key.len() as u64
    }

    fn bytes_without(&self, key: &[u8]) -> u64 {
        match self.ops.get(key) {
            Some(prev) => self
                .write_bytes
                .saturating_sub(key.len() as u64 + prev.value_len()),
            None => self.write_bytes,
        }
    }

    /// Buffer a put, replacing any earlier op on the same key.
    pub fn put(&mut self, key: Vec<u8>, value: Vec<u8>) {
        self.write_bytes = self.bytes_after_put(&key, value.len());
        self.ops.insert(key, WriteOp::Put(value));
    }

    /// Buffer a delete, replacing any earlier op on the same key.
    ///
    /// Deletes count their key bytes toward the write budget.
    pub fn delete(&mut self, key: Vec<u8>) {
        self.write_bytes = self.bytes_after_delete(&key);
        self.ops.insert(key, WriteOp::Delete);
    }

    /// Look up a key in the write set.
    pub fn lookup(&self, key: &[u8]) -> Lookup {
        match self.ops.get(key) {
            Some(WriteOp::Put(value)) => Lookup::Written(value.clone()),
            Some(WriteOp::Delete) => Lookup::Deleted,
            None => Lookup::Untouched,
        }
    }

    /// Consume the write set, yielding its ops in key order.
    pub fn into_ops(self) -> BTreeMap<Vec<u8>, WriteOp> {
        self.ops
    }

    /// Number of keys touched.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns true if nothing has been buffered.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Total buffered bytes (keys + values).
    pub fn write_bytes(&self) -> u64 {
        self.write_bytes
    }
}
