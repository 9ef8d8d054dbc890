//! Stylus sender adapter.
//!
//! `relay(calls, gasLimit)` is the only entrypoint for users: it bumps the nonce, wraps the
//! batch into an [`Envelope`] stamped with the caller, this chain's id and a derived message id,
//! and submits it to the bridge transport addressed to the single registered executor.
//!
//! Calls are taken as `(target, data, gasLimit)` tuples; Stylus' `#[public]` glue handles
//! tuples via `AbiType`, and a Solidity `Call` struct is ABI-equivalent.

use alloc::vec::Vec;

use stylus_sdk::{
    abi::Bytes,
    alloy_primitives::{Address, U256},
    prelude::*,
    stylus_core::log,
};

use relay_envelope::{
    abi::{Call, Envelope, ExecutorSet, MaxGasLimitUpdated, OwnershipTransferred, Relayed},
    encode_envelope, BridgeTransport,
};

use crate::{
    errors::{
        AlreadyInitialized, EmptyBatch, ExecutorAlreadySet, ExecutorNotSet, GasLimitTooHigh,
        SenderError, TransportSendFailed, Unauthorized, ZeroAddress,
    },
    storage::WriteOnceAddress,
    transport::OnchainTransport,
};

sol_storage! {
    #[entrypoint]
    pub struct RelaySender {
        address owner;

        /// Origin-side bridge entrypoint (`IBridgeTransport`).
        address transport;

        /// Ceiling for the per-relay transport gas budget.
        uint256 max_gas_limit;

        /// Last assigned nonce; the first relay uses 1.
        uint256 nonce;

        /// Destination receiver adapter. Set once by the owner.
        WriteOnceAddress executor;
    }
}

#[public]
impl RelaySender {
    /// One-time configuration. The caller becomes the owner.
    pub fn initialize(&mut self, transport: Address, max_gas_limit: U256) -> Result<(), SenderError> {
        if self.owner.get() != Address::ZERO {
            return Err(SenderError::AlreadyInitialized(AlreadyInitialized {}));
        }
        if transport == Address::ZERO {
            return Err(SenderError::ZeroAddress(ZeroAddress {}));
        }
        let owner = self.vm().msg_sender();
        self.owner.set(owner);
        self.transport.set(transport);
        self.max_gas_limit.set(max_gas_limit);

        log(
            self.vm(),
            OwnershipTransferred {
                previousOwner: Address::ZERO,
                newOwner: owner,
            },
        );
        Ok(())
    }

    /// Relay a batch of calls to the executor on the destination chain.
    ///
    /// `msg.value` is forwarded to the transport as its delivery fee. Returns the nonce assigned
    /// to this batch.
    #[payable]
    pub fn relay(&mut self, calls: Vec<(Address, Bytes, U256)>, gas_limit: U256) -> Result<U256, SenderError> {
        let calls = calls
            .into_iter()
            .map(|(target, data, call_gas)| Call {
                target,
                data: data.0.into(),
                gasLimit: call_gas,
            })
            .collect();
        let mut transport = OnchainTransport::new(self.transport.get(), self.vm().msg_value());
        self.relay_with(&mut transport, calls, gas_limit)
    }

    /// Register the destination executor. Owner only, at most once.
    pub fn set_executor(&mut self, executor: Address) -> Result<(), SenderError> {
        self.only_owner()?;
        if executor == Address::ZERO {
            return Err(SenderError::ZeroAddress(ZeroAddress {}));
        }
        self.executor
            .set_once(executor)
            .map_err(|existing| SenderError::ExecutorAlreadySet(ExecutorAlreadySet { executor: existing }))?;

        log(self.vm(), ExecutorSet { executor });
        Ok(())
    }

    pub fn set_max_gas_limit(&mut self, max_gas_limit: U256) -> Result<(), SenderError> {
        self.only_owner()?;
        let previous = self.max_gas_limit.get();
        self.max_gas_limit.set(max_gas_limit);

        log(
            self.vm(),
            MaxGasLimitUpdated {
                previous,
                current: max_gas_limit,
            },
        );
        Ok(())
    }

    pub fn transfer_ownership(&mut self, new_owner: Address) -> Result<(), SenderError> {
        let previous = self.only_owner()?;
        if new_owner == Address::ZERO {
            return Err(SenderError::ZeroAddress(ZeroAddress {}));
        }
        self.owner.set(new_owner);

        log(
            self.vm(),
            OwnershipTransferred {
                previousOwner: previous,
                newOwner: new_owner,
            },
        );
        Ok(())
    }

    pub fn nonce(&self) -> U256 {
        self.nonce.get()
    }

    pub fn executor(&self) -> Address {
        self.executor.get()
    }

    pub fn transport(&self) -> Address {
        self.transport.get()
    }

    pub fn max_gas_limit(&self) -> U256 {
        self.max_gas_limit.get()
    }

    pub fn owner(&self) -> Address {
        self.owner.get()
    }
}

impl RelaySender {
    fn only_owner(&self) -> Result<Address, SenderError> {
        let caller = self.vm().msg_sender();
        let owner = self.owner.get();
        if owner == Address::ZERO || caller != owner {
            return Err(SenderError::Unauthorized(Unauthorized { caller }));
        }
        Ok(owner)
    }

    /// Core of `relay`, generic over the transport so tests can capture outgoing envelopes.
    fn relay_with<T: BridgeTransport>(
        &mut self,
        transport: &mut T,
        calls: Vec<Call>,
        gas_limit: U256,
    ) -> Result<U256, SenderError> {
        if !self.executor.is_set() {
            return Err(SenderError::ExecutorNotSet(ExecutorNotSet {}));
        }
        if calls.is_empty() {
            return Err(SenderError::EmptyBatch(EmptyBatch {}));
        }
        let max_gas_limit = self.max_gas_limit.get();
        if gas_limit > max_gas_limit {
            return Err(SenderError::GasLimitTooHigh(GasLimitTooHigh {
                gasLimit: gas_limit,
                maxGasLimit: max_gas_limit,
            }));
        }

        // Effects before the transport call.
        let nonce = self.nonce.get() + U256::from(1u64);
        self.nonce.set(nonce);

        let caller = self.vm().msg_sender();
        let executor = self.executor.get();
        let envelope = Envelope::new(
            nonce,
            self.vm().chain_id(),
            caller,
            self.vm().contract_address(),
            calls,
        );

        let receipt = transport
            .send(executor, &encode_envelope(&envelope), gas_limit)
            .map_err(|return_data| {
                SenderError::TransportSendFailed(TransportSendFailed {
                    returnData: return_data.into(),
                })
            })?;

        log(
            self.vm(),
            Relayed {
                nonce,
                caller,
                executor,
                messageId: envelope.messageId,
                calls: envelope.calls,
                gasLimit: gas_limit,
                receipt,
            },
        );
        Ok(nonce)
    }
}
