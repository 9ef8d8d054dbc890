use alloc::vec::Vec;

use alloy_primitives::Address;

/// Errors while decoding an inbound envelope.
#[derive(Debug, PartialEq, Eq)]
pub enum EnvelopeError {
    Malformed,
    UnsupportedVersion(u8),
}

/// Errors while executing the calls of a delivery.
#[derive(Debug, PartialEq, Eq)]
pub enum ExecutionError {
    NoCalls,
    /// First failing call; everything after it was skipped.
    CallFailed {
        index: usize,
        target: Address,
        return_data: Vec<u8>,
    },
}
