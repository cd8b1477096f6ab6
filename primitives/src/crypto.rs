//! Hashing helpers for the KVChain ledger runtime.
//!
//! - SHA-256 for transaction ids
//! - BLAKE3 for committed state digests
//!
//! Both are deterministic: the same inputs always produce the same output
//! on every machine.

use crate::types::{length_prefixed, to_hex, Digest, ZERO_DIGEST};

/// Compute SHA-256 hash of the input data.
pub fn hash_sha256(data: &[u8]) -> Digest {
    use sha2::Digest as _;
    let result = sha2::Sha256::digest(data);
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Derive the transaction id for the `seq`-th transaction on a channel.
///
/// Format: lowercase hex of `SHA-256(channel_id || seq as u64 LE)`.
pub fn derive_tx_id(channel_id: &str, seq: u64) -> String {
    let mut preimage = Vec::with_capacity(channel_id.len() + 8);
    preimage.extend_from_slice(channel_id.as_bytes());
    preimage.extend_from_slice(&seq.to_le_bytes());
    to_hex(&hash_sha256(&preimage))
}

/// Digest a sequence of committed entries.
///
/// Entries must be supplied in ascending key order. Each entry is encoded
/// as `len(key) || key || len(value) || value` with `u32` LE lengths.
/// An empty sequence digests to [`ZERO_DIGEST`].
pub fn state_digest<'a, I>(entries: I) -> Digest
where
    I: IntoIterator<Item = (&'a [u8], &'a [u8])>,
{
    let mut hasher = blake3::Hasher::new();
    let mut any = false;
    for (key, value) in entries {
        hasher.update(&length_prefixed(key));
        hasher.update(&length_prefixed(value));
        any = true;
    }
    if !any {
        return ZERO_DIGEST;
    }
    *hasher.finalize().as_bytes()
}
