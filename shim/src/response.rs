//! Result of a chaincode invocation as seen by the runtime.

use std::borrow::Cow;

/// Outcome of one chaincode invocation.
///
/// Status codes follow HTTP conventions: `200` OK, anything at or above
/// `400` is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status code.
    pub status: i32,
    /// Error message; empty on success.
    pub message: String,
    /// Returned bytes; empty on error.
    pub payload: Vec<u8>,
}

impl Response {
    pub const OK: i32 = 200;
    pub const ERROR_THRESHOLD: i32 = 400;
    pub const ERROR: i32 = 500;

    /// A successful response carrying `payload`.
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: Self::OK,
            message: String::new(),
            payload,
        }
    }

    /// A failed response carrying `message`.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Self::ERROR,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    /// Returns true if the status is below the error threshold.
    pub fn is_ok(&self) -> bool {
        self.status < Self::ERROR_THRESHOLD
    }

    /// Payload decoded as UTF-8, replacing invalid sequences.
    pub fn payload_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }
}
