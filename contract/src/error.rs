//! Contract error types.

use kvchain_primitives::StoreError;

/// Errors surfaced by the key-value contract.
///
/// None of these are retried locally. The runtime fails the transaction and
/// drops its writes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    /// `get` found no value, or a zero-length value, under `key`.
    #[error("The asset {key} does not exist")]
    NotFound { key: String },

    /// The state accessor failed; passed through unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The runtime asked for a function the contract does not have.
    #[error("You've asked to invoke a function that does not exist: {0}")]
    UnknownFunction(String),

    /// Wrong number of arguments for the requested function.
    #[error("Expected {expected} parameters, but {got} have been supplied")]
    ArgumentCount { expected: usize, got: usize },
}

impl ContractError {
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }
}

/// Convenience result type for contract operations.
pub type ContractResult<T> = Result<T, ContractError>;
