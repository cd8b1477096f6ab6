//! Core type aliases and limits for the KVChain ledger state.

/// 32-byte digest used for state digests and transaction ids.
pub type Digest = [u8; 32];

/// Default maximum key length in the ledger state, in bytes.
pub const MAX_KEY_LEN: usize = 256;

/// Default maximum value length in the ledger state, in bytes.
pub const MAX_VALUE_LEN: usize = 65_536; // 64 KiB

/// Default maximum bytes a single transaction may buffer (keys + values).
pub const MAX_WRITE_BYTES: u64 = 4 * 1024 * 1024; // 4 MiB

/// Digest of an empty state (32 zero bytes).
pub const ZERO_DIGEST: Digest = [0u8; 32];

/// Render bytes as lowercase hex without a prefix.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        use std::fmt::Write;
        let _ = write!(s, "{:02x}", byte);
    }
    s
}

/// Length-prefix a byte slice with its `u32` little-endian length.
///
/// Lengths above `u32::MAX` are not representable in ledger state, since
/// keys and values are bounded far below that.
pub fn length_prefixed(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 + bytes.len());
    out.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
    out.extend_from_slice(bytes);
    out
}
