//! Dry-run execution of an envelope off-chain.

use alloy_primitives::Address;

use relay_envelope::{
    execute_batch, execute_one, CallDispatcher, DeliveryContext, DeliveryExecuted, Envelope,
    ExecutionError,
};

/// Dispatcher that records every forwarded call and optionally fails one target.
#[derive(Default)]
pub struct DryRunDispatcher {
    pub calls: Vec<(Address, Vec<u8>, u64)>,
    pub fail_target: Option<Address>,
}

impl CallDispatcher for DryRunDispatcher {
    fn dispatch(&mut self, target: Address, calldata: &[u8], gas_limit: u64) -> Result<Vec<u8>, Vec<u8>> {
        self.calls.push((target, calldata.to_vec(), gas_limit));
        if self.fail_target == Some(target) {
            return Err(Vec::new());
        }
        Ok(Vec::new())
    }
}

/// Run `envelope` through the same single/batch split the receiver uses.
pub fn simulate_delivery(
    envelope: &Envelope,
    dispatcher: &mut DryRunDispatcher,
) -> Result<DeliveryExecuted, ExecutionError> {
    let ctx = DeliveryContext::from_envelope(envelope, false);
    match envelope.calls.as_slice() {
        [call] => execute_one(dispatcher, call, &ctx),
        calls => execute_batch(dispatcher, calls, &ctx),
    }
}
