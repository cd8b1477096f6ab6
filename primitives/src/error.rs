//! Error types for ledger state access.
//!
//! `StoreError` is what a state accessor returns when a read, write, or
//! delete cannot be carried out. Contracts pass it through unchanged.

/// Failure raised by a state accessor or committed store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Keys must be non-empty.
    #[error("key must not be an empty string")]
    EmptyKey,

    /// Key exceeds the configured maximum length.
    #[error("key length {len} exceeds maximum of {max} bytes")]
    KeyTooLarge { len: usize, max: usize },

    /// Value exceeds the configured maximum length.
    #[error("value length {len} exceeds maximum of {max} bytes")]
    ValueTooLarge { len: usize, max: usize },

    /// The transaction would buffer more bytes than allowed.
    #[error("transaction write set exceeds {limit} bytes")]
    WriteLimit { limit: u64 },

    /// The backing store failed.
    #[error("state backend error: {0}")]
    Backend(String),
}

/// Convenience result type for state access.
pub type StoreResult<T> = Result<T, StoreError>;
