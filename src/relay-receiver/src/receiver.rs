//! Stylus receiver adapter (executor).
//!
//! Exposes the mailbox recipient hook `handle(uint32 origin, bytes32 sender, bytes message)`.
//!
//! Per delivery, in order:
//! - the caller must be the configured mailbox (checked before touching the payload);
//! - the payload must decode as a version-1 envelope whose `sourceChainId` matches `origin`;
//! - the mailbox-reported `sender` must equal the registered sender adapter for that chain;
//! - the message id must not have been executed; it is marked before any call runs, so a
//!   reentrant re-delivery is rejected while a reverted delivery stays retryable;
//! - the calls run in order, the first failure reverts everything.

use alloc::vec::Vec;

use stylus_sdk::{
    abi::Bytes,
    alloy_primitives::{Address, FixedBytes, U256},
    prelude::*,
    stylus_core::log,
};

use relay_envelope::{
    abi::{DeliveryExecuted, InterchainSecurityModuleUpdated, OwnershipTransferred, SenderAdapterUpdated},
    decode_envelope, execute_batch, execute_one, CallDispatcher, DeliveryContext,
};

use crate::{
    dispatch::OnchainDispatcher,
    errors::{
        AlreadyInitialized, LengthMismatch, MessageAlreadyExecuted, NoMessagesSent, ReceiverError,
        SourceChainMismatch, Unauthorized, UnauthorizedAdapter, UnauthorizedTransportCaller,
        ZeroAddress,
    },
};

sol_storage! {
    #[entrypoint]
    pub struct RelayReceiver {
        address owner;

        /// Trusted transport; the only caller allowed into `handle`.
        address mailbox;

        /// Reported to the mailbox through `interchainSecurityModule()`. Zero selects the
        /// mailbox default.
        address ism;

        /// Authorization registry: source chain id => trusted sender adapter.
        mapping(uint256 => address) sender_adapters;

        /// Replay table. Entries are never cleared.
        mapping(bytes32 => bool) executed_messages;
    }
}

#[public]
impl RelayReceiver {
    /// One-time configuration. The caller becomes the owner.
    pub fn initialize(&mut self, mailbox: Address, ism: Address) -> Result<(), ReceiverError> {
        if self.owner.get() != Address::ZERO {
            return Err(ReceiverError::AlreadyInitialized(AlreadyInitialized {}));
        }
        if mailbox == Address::ZERO {
            return Err(ReceiverError::ZeroAddress(ZeroAddress {}));
        }
        let owner = self.vm().msg_sender();
        self.owner.set(owner);
        self.mailbox.set(mailbox);
        self.ism.set(ism);

        log(
            self.vm(),
            OwnershipTransferred {
                previousOwner: Address::ZERO,
                newOwner: owner,
            },
        );
        Ok(())
    }

    /// Mailbox delivery hook.
    #[payable]
    pub fn handle(&mut self, origin: u32, sender: FixedBytes<32>, message: Bytes) -> Result<(), ReceiverError> {
        let mut dispatcher = OnchainDispatcher;
        self.handle_with(&mut dispatcher, origin, sender, &message.0)
    }

    pub fn set_ism(&mut self, module: Address) -> Result<(), ReceiverError> {
        self.only_owner()?;
        let previous = self.ism.get();
        self.ism.set(module);

        log(
            self.vm(),
            InterchainSecurityModuleUpdated {
                previous,
                current: module,
            },
        );
        Ok(())
    }

    /// Batch update of the authorization registry. A zero adapter revokes the chain.
    pub fn update_sender_adapter(
        &mut self,
        source_chain_ids: Vec<u64>,
        sender_adapters: Vec<Address>,
    ) -> Result<(), ReceiverError> {
        self.only_owner()?;
        if source_chain_ids.len() != sender_adapters.len() {
            return Err(ReceiverError::LengthMismatch(LengthMismatch {
                sourceChainIds: U256::from(source_chain_ids.len()),
                senderAdapters: U256::from(sender_adapters.len()),
            }));
        }

        for (chain_id, adapter) in source_chain_ids.into_iter().zip(sender_adapters) {
            let key = U256::from(chain_id);
            let previous = self.sender_adapters.get(key);
            self.sender_adapters.insert(key, adapter);

            log(
                self.vm(),
                SenderAdapterUpdated {
                    sourceChainId: chain_id,
                    previous,
                    current: adapter,
                },
            );
        }
        Ok(())
    }

    pub fn transfer_ownership(&mut self, new_owner: Address) -> Result<(), ReceiverError> {
        let previous = self.only_owner()?;
        if new_owner == Address::ZERO {
            return Err(ReceiverError::ZeroAddress(ZeroAddress {}));
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

    pub fn sender_adapters(&self, source_chain_id: u64) -> Address {
        self.sender_adapters.get(U256::from(source_chain_id))
    }

    pub fn executed_messages(&self, message_id: FixedBytes<32>) -> bool {
        self.executed_messages.get(message_id)
    }

    pub fn interchain_security_module(&self) -> Address {
        self.ism.get()
    }

    pub fn mailbox(&self) -> Address {
        self.mailbox.get()
    }

    pub fn owner(&self) -> Address {
        self.owner.get()
    }
}

impl RelayReceiver {
    fn only_owner(&self) -> Result<Address, ReceiverError> {
        let caller = self.vm().msg_sender();
        let owner = self.owner.get();
        if owner == Address::ZERO || caller != owner {
            return Err(ReceiverError::Unauthorized(Unauthorized { caller }));
        }
        Ok(owner)
    }

    /// Core of `handle`, generic over the dispatcher so tests can observe outgoing calls.
    fn handle_with<D: CallDispatcher>(
        &mut self,
        dispatcher: &mut D,
        origin: u32,
        sender: FixedBytes<32>,
        message: &[u8],
    ) -> Result<(), ReceiverError> {
        let caller = self.vm().msg_sender();
        let mailbox = self.mailbox.get();
        if mailbox == Address::ZERO || caller != mailbox {
            return Err(ReceiverError::UnauthorizedTransportCaller(
                UnauthorizedTransportCaller { caller },
            ));
        }

        let envelope = decode_envelope(message)?;
        let source_chain_id = envelope.sourceChainId;
        if u64::from(origin) != source_chain_id {
            return Err(ReceiverError::SourceChainMismatch(SourceChainMismatch {
                origin: u64::from(origin),
                claimed: source_chain_id,
            }));
        }

        // Full-word comparison: dirty upper bytes never match a left-padded address.
        let registered = self.sender_adapters.get(U256::from(source_chain_id));
        if registered == Address::ZERO || registered.into_word() != sender {
            return Err(ReceiverError::UnauthorizedAdapter(UnauthorizedAdapter {
                sourceChainId: source_chain_id,
                sender,
            }));
        }

        let message_id = envelope.messageId;
        if self.executed_messages.get(message_id) {
            return Err(ReceiverError::MessageAlreadyExecuted(MessageAlreadyExecuted {
                messageId: message_id,
            }));
        }
        if envelope.calls.is_empty() {
            return Err(ReceiverError::NoMessagesSent(NoMessagesSent {
                sourceChainId: source_chain_id,
            }));
        }

        self.executed_messages.insert(message_id, true);

        let ctx = DeliveryContext::from_envelope(&envelope, false);
        let executed = match envelope.calls.as_slice() {
            [call] => execute_one(dispatcher, call, &ctx),
            calls => execute_batch(dispatcher, calls, &ctx),
        }
        .map_err(|err| ReceiverError::from_execution(err, source_chain_id))?;

        log(
            self.vm(),
            DeliveryExecuted {
                sourceChainId: executed.source_chain_id,
                messageId: executed.message_id,
                alreadyExecuted: executed.already_executed,
            },
        );
        Ok(())
    }
}
