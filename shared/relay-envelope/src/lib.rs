//! Shared types for the cross-chain relay: ABI surface, envelope codec, caller forwarding and
//! call execution.
//!
//! Everything here is pure and deterministic so it can be linked into the Stylus adapters and
//! into off-chain tooling alike.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod abi;
pub mod envelope;
pub mod errors;
pub mod execution;
pub mod forwarding;
pub mod transport;

pub use abi::{Call, Envelope};
pub use envelope::{decode_envelope, encode_envelope, message_id, ENVELOPE_VERSION};
pub use errors::{EnvelopeError, ExecutionError};
pub use execution::{execute_batch, execute_one, CallDispatcher, DeliveryContext, DeliveryExecuted};
pub use forwarding::{forwarded_calldata, split_forwarded_calldata};
pub use transport::{decode_receipt, send_message_calldata, BridgeTransport};
