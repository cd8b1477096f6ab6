//! Limits enforced on every transaction's state access.

use kvchain_primitives::{MAX_KEY_LEN, MAX_VALUE_LEN, MAX_WRITE_BYTES};
use serde::{Deserialize, Serialize};

/// Per-transaction state access limits.
///
/// Every field is optional when deserializing; missing fields take the
/// default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StubConfig {
    /// Maximum length of a state key in bytes.
    pub max_key_len: usize,
    /// Maximum length of a state value in bytes.
    pub max_value_len: usize,
    /// Maximum total bytes (keys + values) one transaction may buffer.
    pub max_write_bytes: u64,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            max_key_len: MAX_KEY_LEN,
            max_value_len: MAX_VALUE_LEN,
            max_write_bytes: MAX_WRITE_BYTES,
        }
    }
}
