//! Origin-chain half of the relay: accepts call batches, assigns nonces and hands envelopes to
//! the bridge transport addressed to the destination executor.

#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]

extern crate alloc;

pub mod errors;
pub mod sender;
pub mod storage;
pub mod transport;

pub use sender::RelaySender;
