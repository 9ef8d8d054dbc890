use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::SolCall;
use anyhow::{Context, Result};

use relay_envelope::{
    abi::{IMessageRecipient, IRelaySender},
    decode_envelope, encode_envelope, message_id, Call, Envelope,
};

use crate::types::{BatchSpec, EnvelopeJson};

/// Calldata for `RelaySender.relay(calls, gasLimit)`.
pub fn relay_calldata(batch: &BatchSpec) -> Vec<u8> {
    IRelaySender::relayCall {
        calls: batch.calls.iter().map(Call::from).collect(),
        gasLimit: batch.gas_limit,
    }
    .abi_encode()
}

/// The envelope the sender adapter at `relayer` would emit for `batch` at `nonce`.
pub fn build_envelope(
    batch: &BatchSpec,
    nonce: U256,
    source_chain_id: u64,
    source_sender: Address,
    relayer: Address,
) -> Envelope {
    Envelope::new(
        nonce,
        source_chain_id,
        source_sender,
        relayer,
        batch.calls.iter().map(Call::from).collect(),
    )
}

/// Calldata for `RelayReceiver.handle(origin, sender, message)` as the mailbox would send it.
///
/// `origin` is the envelope's source chain; `sender` is `relayer` left-padded to a word.
pub fn handle_calldata(envelope: &Envelope, relayer: Address) -> Result<Vec<u8>> {
    let origin = u32::try_from(envelope.sourceChainId)
        .with_context(|| format!("source chain id {} does not fit a mailbox domain", envelope.sourceChainId))?;
    Ok(IMessageRecipient::handleCall {
        origin,
        sender: relayer.into_word(),
        message: encode_envelope(envelope).into(),
    }
    .abi_encode())
}

pub fn derive_message_id(nonce: U256, chain_id: u64, relayer: Address) -> B256 {
    message_id(nonce, chain_id, relayer)
}

/// Decode a hex envelope (as found in `handle` calldata or transport logs).
pub fn decode_envelope_hex(input: &str) -> Result<EnvelopeJson> {
    let bytes = parse_hex(input)?;
    let envelope = decode_envelope(&bytes).map_err(|e| anyhow::anyhow!("invalid envelope: {e:?}"))?;
    Ok(EnvelopeJson::from(&envelope))
}

/// Decode `handle(...)` calldata back into its envelope.
pub fn decode_handle_calldata(input: &str) -> Result<(u32, B256, EnvelopeJson)> {
    let bytes = parse_hex(input)?;
    let call = IMessageRecipient::handleCall::abi_decode(&bytes, true).context("not handle() calldata")?;
    let envelope = decode_envelope(&call.message).map_err(|e| anyhow::anyhow!("invalid envelope: {e:?}"))?;
    Ok((call.origin, call.sender, EnvelopeJson::from(&envelope)))
}

pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    hex::decode(digits).context("invalid hex input")
}

pub fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
