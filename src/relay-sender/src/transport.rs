use alloc::vec::Vec;

use stylus_sdk::{
    alloy_primitives::{Address, B256, U256},
    call::RawCall,
};

use relay_envelope::{decode_receipt, send_message_calldata, BridgeTransport};

/// Bridge transport reached through a raw `call`, forwarding `fee` as call value.
pub struct OnchainTransport {
    pub address: Address,
    pub fee: U256,
}

impl OnchainTransport {
    pub fn new(address: Address, fee: U256) -> Self {
        Self { address, fee }
    }
}

impl BridgeTransport for OnchainTransport {
    fn send(&mut self, destination: Address, payload: &[u8], gas_limit: U256) -> Result<B256, Vec<u8>> {
        let data = send_message_calldata(destination, payload, gas_limit);

        // bytes-in, bytes-out call; revert data is surfaced to the caller.
        let out = unsafe { RawCall::new_with_value(self.fee).call(self.address, &data) }?;
        decode_receipt(&out).ok_or(out)
    }
}
