use stylus_sdk::stylus_proc::SolidityError;

pub use relay_envelope::abi::{
    AlreadyInitialized, EmptyBatch, ExecutorAlreadySet, ExecutorNotSet, GasLimitTooHigh,
    TransportSendFailed, Unauthorized, ZeroAddress,
};

/// Revert reasons of the sender adapter (ABI-encoded as Solidity custom errors).
#[derive(SolidityError, Debug)]
pub enum SenderError {
    ZeroAddress(ZeroAddress),
    AlreadyInitialized(AlreadyInitialized),
    Unauthorized(Unauthorized),
    ExecutorAlreadySet(ExecutorAlreadySet),
    ExecutorNotSet(ExecutorNotSet),
    GasLimitTooHigh(GasLimitTooHigh),
    EmptyBatch(EmptyBatch),
    TransportSendFailed(TransportSendFailed),
}
