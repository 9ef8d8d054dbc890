//! Envelope codec and message-id derivation.
//!
//! Wire format: `abi.encode(Envelope)` where
//! `Envelope = (uint8 version, uint256 nonce, bytes32 messageId, uint64 sourceChainId,
//! address sourceSender, (address target, bytes data, uint256 gasLimit)[] calls)`.

use alloc::vec::Vec;

use alloy_primitives::{keccak256, Address, B256, U256};
use alloy_sol_types::SolValue;

use crate::{
    abi::{Call, Envelope},
    errors::EnvelopeError,
};

pub const ENVELOPE_VERSION: u8 = 1;

/// `keccak256(uint256 nonce || uint64 chainId || address relayer)`, tightly packed.
///
/// `relayer` is the sender adapter, so ids are unique across adapters, chains and nonces.
pub fn message_id(nonce: U256, chain_id: u64, relayer: Address) -> B256 {
    let mut buf = [0u8; 32 + 8 + 20];
    buf[..32].copy_from_slice(&nonce.to_be_bytes::<32>());
    buf[32..40].copy_from_slice(&chain_id.to_be_bytes());
    buf[40..].copy_from_slice(relayer.as_slice());
    keccak256(buf)
}

impl Envelope {
    pub fn new(
        nonce: U256,
        source_chain_id: u64,
        source_sender: Address,
        relayer: Address,
        calls: Vec<Call>,
    ) -> Self {
        Self {
            version: ENVELOPE_VERSION,
            nonce,
            messageId: message_id(nonce, source_chain_id, relayer),
            sourceChainId: source_chain_id,
            sourceSender: source_sender,
            calls,
        }
    }
}

pub fn encode_envelope(envelope: &Envelope) -> Vec<u8> {
    envelope.abi_encode()
}

pub fn decode_envelope(data: &[u8]) -> Result<Envelope, EnvelopeError> {
    let envelope = Envelope::abi_decode(data, true).map_err(|_| EnvelopeError::Malformed)?;
    if envelope.version != ENVELOPE_VERSION {
        return Err(EnvelopeError::UnsupportedVersion(envelope.version));
    }
    Ok(envelope)
}
