use alloc::vec::Vec;

use stylus_sdk::{alloy_primitives::Address, call::RawCall};

use relay_envelope::CallDispatcher;

/// Dispatches calls with a raw `call`; a zero gas limit forwards all remaining gas.
pub struct OnchainDispatcher;

impl CallDispatcher for OnchainDispatcher {
    fn dispatch(&mut self, target: Address, calldata: &[u8], gas_limit: u64) -> Result<Vec<u8>, Vec<u8>> {
        let call = RawCall::new();
        let call = if gas_limit == 0 { call } else { call.gas(gas_limit) };
        unsafe { call.call(target, calldata) }
    }
}
