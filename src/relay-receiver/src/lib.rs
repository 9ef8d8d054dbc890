//! Destination-chain half of the relay: authenticates deliveries from the mailbox, enforces
//! at-most-once execution per message id and executes the enclosed calls.

#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]

extern crate alloc;

pub mod dispatch;
pub mod errors;
pub mod receiver;

pub use receiver::RelayReceiver;
