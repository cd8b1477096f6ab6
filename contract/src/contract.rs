//! The key-value contract.
//!
//! Each operation is a thin pass-through to the transaction's state
//! accessor. The only policy here is the existence check in `get`.

use kvchain_shim::Context;
use tracing::debug;

use crate::error::{ContractError, ContractResult};

/// Stateless key-value contract over ledger state.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyValueContract;

impl KeyValueContract {
    /// Name the runtime uses to address this contract.
    pub const NAME: &'static str = "KeyValueContract";

    /// Transaction functions the contract exposes.
    pub const FUNCTIONS: [&'static str; 3] = ["put", "get", "delete"];

    pub fn new() -> Self {
        Self
    }

    /// Store `value` under `key` as UTF-8 bytes, replacing any prior value.
    pub fn put(&self, ctx: &mut Context<'_>, key: &str, value: &str) -> ContractResult<()> {
        debug!(tx_id = ctx.tx_id(), key, value_len = value.len(), "put");
        ctx.stub_mut().put_state(key, value.as_bytes())?;
        Ok(())
    }

    /// Read the value under `key` as text.
    ///
    /// A missing value and a zero-length value both fail with
    /// [`ContractError::NotFound`], so an empty string cannot be read back.
    /// Bytes that are not valid UTF-8 are decoded lossily.
    pub fn get(&self, ctx: &Context<'_>, key: &str) -> ContractResult<String> {
        debug!(tx_id = ctx.tx_id(), key, "get");
        match ctx.stub().get_state(key)? {
            Some(bytes) if !bytes.is_empty() => Ok(decode_value(bytes)),
            _ => Err(ContractError::not_found(key)),
        }
    }

    /// Remove `key`. No existence check: deleting a missing key succeeds.
    pub fn delete(&self, ctx: &mut Context<'_>, key: &str) -> ContractResult<()> {
        debug!(tx_id = ctx.tx_id(), key, "delete");
        ctx.stub_mut().delete_state(key)?;
        Ok(())
    }
}

/// Ledger bytes as text. Invalid UTF-8 becomes U+FFFD instead of failing
/// the read.
fn decode_value(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kvchain_primitives::{StoreError, StoreResult};
    use kvchain_shim::ChaincodeStub;
    use std::collections::HashMap;

    /// Bare map-backed stub that records every call it receives.
    #[derive(Default)]
    struct RecordingStub {
        states: HashMap<String, Vec<u8>>,
        calls: Vec<String>,
    }

    impl ChaincodeStub for RecordingStub {
        fn put_state(&mut self, key: &str, value: &[u8]) -> StoreResult<()> {
            self.calls.push(format!("put_state {key}"));
            self.states.insert(key.to_owned(), value.to_vec());
            Ok(())
        }

        fn get_state(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
            Ok(self.states.get(key).cloned())
        }

        fn delete_state(&mut self, key: &str) -> StoreResult<()> {
            self.calls.push(format!("delete_state {key}"));
            self.states.remove(key);
            Ok(())
        }

        fn tx_id(&self) -> &str {
            "tx-test"
        }

        fn channel_id(&self) -> &str {
            "mychannel"
        }
    }

    /// Stub whose every operation fails as a broken backend would.
    struct FailingStub;

    impl ChaincodeStub for FailingStub {
        fn put_state(&mut self, _key: &str, _value: &[u8]) -> StoreResult<()> {
            Err(StoreError::Backend("peer unavailable".into()))
        }

        fn get_state(&self, _key: &str) -> StoreResult<Option<Vec<u8>>> {
            Err(StoreError::Backend("peer unavailable".into()))
        }

        fn delete_state(&mut self, _key: &str) -> StoreResult<()> {
            Err(StoreError::Backend("peer unavailable".into()))
        }

        fn tx_id(&self) -> &str {
            "tx-test"
        }

        fn channel_id(&self) -> &str {
            "mychannel"
        }
    }

    #[test]
    fn test_put_writes_raw_bytes() {
        let mut stub = RecordingStub::default();
        KeyValueContract
            .put(&mut Context::new(&mut stub), "100", "Black")
            .unwrap();

        assert_eq!(stub.states.get("100"), Some(&b"Black".to_vec()));
        assert_eq!(stub.calls, vec!["put_state 100"]);
    }

    #[test]
    fn test_get_returns_stored_value() {
        let mut stub = RecordingStub::default();
        let mut ctx = Context::new(&mut stub);
        let contract = KeyValueContract::new();
        contract.put(&mut ctx, "100", "Black").unwrap();
        assert_eq!(contract.get(&ctx, "100").unwrap(), "Black");
    }

    #[test]
    fn test_get_missing_key_fails() {
        let mut stub = RecordingStub::default();
        let mut ctx = Context::new(&mut stub);
        let contract = KeyValueContract::new();
        contract.put(&mut ctx, "100", "Black").unwrap();

        let err = contract.get(&ctx, "101").unwrap_err();
        assert_eq!(err, ContractError::not_found("101"));
        assert_eq!(err.to_string(), "The asset 101 does not exist");
    }

    #[test]
    fn test_get_zero_length_value_is_not_found() {
        let mut stub = RecordingStub::default();
        stub.states.insert("100".into(), Vec::new());
        let ctx = Context::new(&mut stub);

        let err = KeyValueContract.get(&ctx, "100").unwrap_err();
        assert_eq!(err.to_string(), "The asset 100 does not exist");
    }

    #[test]
    fn test_get_invalid_utf8_is_lossy() {
        let mut stub = RecordingStub::default();
        stub.states.insert("100".into(), vec![b'B', 0xff, b'k']);
        let ctx = Context::new(&mut stub);

        assert_eq!(KeyValueContract.get(&ctx, "100").unwrap(), "B\u{fffd}k");
    }

    #[test]
    fn test_decode_value_keeps_valid_utf8_buffer() {
        let bytes = "Schwarz \u{00e4}".as_bytes().to_vec();
        let ptr = bytes.as_ptr();
        let text = decode_value(bytes);
        assert_eq!(text, "Schwarz \u{00e4}");
        assert_eq!(text.as_ptr(), ptr);
        assert_eq!(decode_value(vec![0xc3]), "\u{fffd}");
    }

    #[test]
    fn test_delete_removes_value() {
        let mut stub = RecordingStub::default();
        let mut ctx = Context::new(&mut stub);
        let contract = KeyValueContract::new();
        contract.put(&mut ctx, "100", "Black").unwrap();
        contract.delete(&mut ctx, "100").unwrap();

        let err = contract.get(&ctx, "100").unwrap_err();
        assert_eq!(err.to_string(), "The asset 100 does not exist");
        assert_eq!(stub.calls, vec!["put_state 100", "delete_state 100"]);
    }

    #[test]
    fn test_delete_missing_key_succeeds() {
        let mut stub = RecordingStub::default();
        KeyValueContract
            .delete(&mut Context::new(&mut stub), "101")
            .unwrap();
        // No existence check: the stub is still asked to delete.
        assert_eq!(stub.calls, vec!["delete_state 101"]);
    }

    #[test]
    fn test_store_failures_propagate_unchanged() {
        let mut stub = FailingStub;
        let mut ctx = Context::new(&mut stub);
        let contract = KeyValueContract::new();
        let expected = ContractError::Store(StoreError::Backend("peer unavailable".into()));

        assert_eq!(contract.put(&mut ctx, "100", "Black").unwrap_err(), expected);
        assert_eq!(contract.get(&ctx, "100").unwrap_err(), expected);
        assert_eq!(contract.delete(&mut ctx, "100").unwrap_err(), expected);
    }
}
