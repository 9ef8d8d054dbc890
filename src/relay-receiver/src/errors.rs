use stylus_sdk::{alloy_primitives::U256, stylus_proc::SolidityError};

use relay_envelope::{EnvelopeError, ExecutionError};

pub use relay_envelope::abi::{
    AlreadyInitialized, CallExecutionFailed, LengthMismatch, MalformedEnvelope,
    MessageAlreadyExecuted, NoMessagesSent, SourceChainMismatch, Unauthorized,
    UnauthorizedAdapter, UnauthorizedTransportCaller, UnsupportedEnvelopeVersion, ZeroAddress,
};

/// Revert reasons of the receiver adapter (ABI-encoded as Solidity custom errors).
#[derive(SolidityError, Debug)]
pub enum ReceiverError {
    ZeroAddress(ZeroAddress),
    AlreadyInitialized(AlreadyInitialized),
    Unauthorized(Unauthorized),
    LengthMismatch(LengthMismatch),
    UnauthorizedTransportCaller(UnauthorizedTransportCaller),
    UnauthorizedAdapter(UnauthorizedAdapter),
    MalformedEnvelope(MalformedEnvelope),
    UnsupportedEnvelopeVersion(UnsupportedEnvelopeVersion),
    SourceChainMismatch(SourceChainMismatch),
    NoMessagesSent(NoMessagesSent),
    MessageAlreadyExecuted(MessageAlreadyExecuted),
    CallExecutionFailed(CallExecutionFailed),
}

impl From<EnvelopeError> for ReceiverError {
    fn from(err: EnvelopeError) -> Self {
        match err {
            EnvelopeError::Malformed => ReceiverError::MalformedEnvelope(MalformedEnvelope {}),
            EnvelopeError::UnsupportedVersion(version) => {
                ReceiverError::UnsupportedEnvelopeVersion(UnsupportedEnvelopeVersion { version })
            }
        }
    }
}

impl ReceiverError {
    /// Maps a library execution failure; `source_chain_id` is only needed for empty batches.
    pub fn from_execution(err: ExecutionError, source_chain_id: u64) -> Self {
        match err {
            ExecutionError::NoCalls => ReceiverError::NoMessagesSent(NoMessagesSent {
                sourceChainId: source_chain_id,
            }),
            ExecutionError::CallFailed {
                index,
                target,
                return_data,
            } => ReceiverError::CallExecutionFailed(CallExecutionFailed {
                index: U256::from(index),
                target,
                returnData: return_data.into(),
            }),
        }
    }
}
