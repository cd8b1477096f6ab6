//! Transaction context and the runtime-facing chaincode trait.

use crate::response::Response;
use crate::stub::ChaincodeStub;

/// Per-invocation handle through which a contract reaches the ledger.
pub struct Context<'a> {
    stub: &'a mut dyn ChaincodeStub,
}

impl<'a> Context<'a> {
    /// Wrap the stub of the current transaction.
    pub fn new(stub: &'a mut dyn ChaincodeStub) -> Self {
        Self { stub }
    }

    /// Read access to the state accessor.
    pub fn stub(&self) -> &dyn ChaincodeStub {
        &*self.stub
    }

    /// Write access to the state accessor.
    pub fn stub_mut(&mut self) -> &mut dyn ChaincodeStub {
        &mut *self.stub
    }

    pub fn tx_id(&self) -> &str {
        self.stub.tx_id()
    }

    pub fn channel_id(&self) -> &str {
        self.stub.channel_id()
    }
}

/// Entry point a ledger runtime invokes by function name.
///
/// Arguments arrive as strings. The outcome is always a [`Response`]; a
/// runtime commits the transaction's writes only if the response is OK.
pub trait Chaincode {
    /// Name used to address this chaincode's functions (`<name>:<fn>`).
    fn name(&self) -> &str;

    /// Invoke `function` with `args` inside the given transaction.
    fn invoke(&self, ctx: &mut Context<'_>, function: &str, args: &[&str]) -> Response;
}
