use alloc::vec::Vec;

use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_sol_types::SolCall;

use crate::abi::IBridgeTransport;

/// Origin-side bridge transport: `send(destination, payload, gasLimit) -> receipt`.
///
/// `Err` carries the transport's revert data.
pub trait BridgeTransport {
    fn send(&mut self, destination: Address, payload: &[u8], gas_limit: U256) -> Result<B256, Vec<u8>>;
}

/// Calldata for `IBridgeTransport.sendMessage(destination, payload, gasLimit)`.
pub fn send_message_calldata(destination: Address, payload: &[u8], gas_limit: U256) -> Vec<u8> {
    IBridgeTransport::sendMessageCall {
        destination,
        payload: Bytes::copy_from_slice(payload),
        gasLimit: gas_limit,
    }
    .abi_encode()
}

/// Decode the `bytes32 receipt` returned by `sendMessage`.
pub fn decode_receipt(return_data: &[u8]) -> Option<B256> {
    IBridgeTransport::sendMessageCall::abi_decode_returns(return_data, true)
        .ok()
        .map(|r| r.receipt)
}
