//! Deterministic execution of a delivered batch.
//!
//! The library never talks to the chain directly: outgoing calls go through a
//! [`CallDispatcher`], so the receiver adapter plugs in `call` with a gas cap and tests plug in
//! an in-memory recorder. Replay gating is the caller's job; `already_executed` is only
//! reported back in [`DeliveryExecuted`].

use alloc::vec::Vec;

use alloy_primitives::{Address, B256};

use crate::{
    abi::{Call, Envelope},
    errors::ExecutionError,
    forwarding::forwarded_calldata,
};

/// Capability to invoke an arbitrary target.
///
/// `gas_limit == 0` means "forward all remaining gas". `Err` carries the revert data.
pub trait CallDispatcher {
    fn dispatch(&mut self, target: Address, calldata: &[u8], gas_limit: u64) -> Result<Vec<u8>, Vec<u8>>;
}

/// Per-delivery context shared by every call of a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeliveryContext {
    pub message_id: B256,
    pub source_chain_id: u64,
    pub source_sender: Address,
    pub already_executed: bool,
}

impl DeliveryContext {
    pub fn from_envelope(envelope: &Envelope, already_executed: bool) -> Self {
        Self {
            message_id: envelope.messageId,
            source_chain_id: envelope.sourceChainId,
            source_sender: envelope.sourceSender,
            already_executed,
        }
    }
}

/// Notification produced by a completed delivery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeliveryExecuted {
    pub source_chain_id: u64,
    pub message_id: B256,
    pub already_executed: bool,
}

impl From<&DeliveryContext> for DeliveryExecuted {
    fn from(ctx: &DeliveryContext) -> Self {
        Self {
            source_chain_id: ctx.source_chain_id,
            message_id: ctx.message_id,
            already_executed: ctx.already_executed,
        }
    }
}

/// Execute a single call, forwarding `data || source_sender`.
pub fn execute_one<D: CallDispatcher>(
    dispatcher: &mut D,
    call: &Call,
    ctx: &DeliveryContext,
) -> Result<DeliveryExecuted, ExecutionError> {
    dispatch_call(dispatcher, 0, call, ctx.source_sender)?;
    Ok(DeliveryExecuted::from(ctx))
}

/// Execute `calls` in order. The first failure aborts the remaining calls.
pub fn execute_batch<D: CallDispatcher>(
    dispatcher: &mut D,
    calls: &[Call],
    ctx: &DeliveryContext,
) -> Result<DeliveryExecuted, ExecutionError> {
    if calls.is_empty() {
        return Err(ExecutionError::NoCalls);
    }
    for (index, call) in calls.iter().enumerate() {
        dispatch_call(dispatcher, index, call, ctx.source_sender)?;
    }
    Ok(DeliveryExecuted::from(ctx))
}

fn dispatch_call<D: CallDispatcher>(
    dispatcher: &mut D,
    index: usize,
    call: &Call,
    source_sender: Address,
) -> Result<(), ExecutionError> {
    let calldata = forwarded_calldata(&call.data, source_sender);
    // Budgets above u64 cannot be honoured by the VM anyway.
    let gas_limit = call.gasLimit.saturating_to::<u64>();
    dispatcher
        .dispatch(call.target, &calldata, gas_limit)
        .map(|_| ())
        .map_err(|return_data| ExecutionError::CallFailed {
            index,
            target: call.target,
            return_data,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, Bytes, U256};

    const SENDER: Address = address!("00000000000000000000000000000000000000aa");

    #[derive(Default)]
    struct RecordingDispatcher {
        calls: Vec<(Address, Vec<u8>, u64)>,
        revert_on: Option<Address>,
    }

    impl CallDispatcher for RecordingDispatcher {
        fn dispatch(&mut self, target: Address, calldata: &[u8], gas_limit: u64) -> Result<Vec<u8>, Vec<u8>> {
            self.calls.push((target, calldata.to_vec(), gas_limit));
            if self.revert_on == Some(target) {
                return Err(vec![0x08, 0xc3, 0x79, 0xa0]);
            }
            Ok(Vec::new())
        }
    }

    fn call(target: Address, data: &[u8], gas: u64) -> Call {
        Call {
            target,
            data: Bytes::copy_from_slice(data),
            gasLimit: U256::from(gas),
        }
    }

    fn ctx() -> DeliveryContext {
        DeliveryContext {
            message_id: B256::repeat_byte(0x11),
            source_chain_id: 10,
            source_sender: SENDER,
            already_executed: false,
        }
    }

    #[test]
    fn single_call_forwards_sender_suffix() {
        let target = address!("000000000000000000000000000000000000c0de");
        let mut d = RecordingDispatcher::default();

        let out = execute_one(&mut d, &call(target, &[0xab, 0xcd], 50_000), &ctx()).unwrap();

        assert_eq!(d.calls.len(), 1);
        let (to, data, gas) = &d.calls[0];
        assert_eq!(*to, target);
        assert_eq!(&data[..2], &[0xab, 0xcd]);
        assert_eq!(&data[2..], SENDER.as_slice());
        assert_eq!(*gas, 50_000);
        assert_eq!(
            out,
            DeliveryExecuted {
                source_chain_id: 10,
                message_id: B256::repeat_byte(0x11),
                already_executed: false,
            }
        );
    }

    #[test]
    fn batch_stops_at_first_failure() {
        let a = address!("000000000000000000000000000000000000000a");
        let b = address!("000000000000000000000000000000000000000b");
        let c = address!("000000000000000000000000000000000000000c");
        let mut d = RecordingDispatcher {
            revert_on: Some(b),
            ..Default::default()
        };

        let err = execute_batch(&mut d, &[call(a, &[1], 0), call(b, &[2], 0), call(c, &[3], 0)], &ctx())
            .unwrap_err();

        assert_eq!(
            err,
            ExecutionError::CallFailed {
                index: 1,
                target: b,
                return_data: vec![0x08, 0xc3, 0x79, 0xa0],
            }
        );
        // `c` was never dispatched.
        assert_eq!(d.calls.len(), 2);
        assert_eq!(d.calls[1].0, b);
    }

    #[test]
    fn batch_runs_calls_in_order() {
        let a = address!("000000000000000000000000000000000000000a");
        let b = address!("000000000000000000000000000000000000000b");
        let mut d = RecordingDispatcher::default();

        execute_batch(&mut d, &[call(a, &[1], 1), call(b, &[2], 2)], &ctx()).unwrap();

        let targets: Vec<Address> = d.calls.iter().map(|(t, _, _)| *t).collect();
        assert_eq!(targets, vec![a, b]);
        assert_eq!(d.calls[1].2, 2);
    }

    #[test]
    fn empty_batch_is_rejected() {
        let mut d = RecordingDispatcher::default();
        assert_eq!(execute_batch(&mut d, &[], &ctx()), Err(ExecutionError::NoCalls));
        assert!(d.calls.is_empty());
    }

    #[test]
    fn oversized_gas_limit_saturates() {
        let target = address!("000000000000000000000000000000000000c0de");
        let mut d = RecordingDispatcher::default();
        let huge = Call {
            target,
            data: Bytes::new(),
            gasLimit: U256::MAX,
        };

        execute_one(&mut d, &huge, &ctx()).unwrap();
        assert_eq!(d.calls[0].2, u64::MAX);
    }

    #[test]
    fn already_executed_flag_is_reported_verbatim() {
        let target = address!("000000000000000000000000000000000000c0de");
        let mut d = RecordingDispatcher::default();
        let mut c = ctx();
        c.already_executed = true;

        let out = execute_one(&mut d, &call(target, &[], 0), &c).unwrap();
        assert!(out.already_executed);
    }
}
