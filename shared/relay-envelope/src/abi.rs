//! Solidity-facing surface shared by both adapters and the off-chain tooling.
//!
//! Structs are the envelope wire format, events are the only on-chain log output, and the
//! interfaces describe the bridge transport and the adapters as seen by callers.

use alloy_sol_types::sol;

sol! {
    #![sol(all_derives)]

    /// One unit of work executed on the destination chain.
    ///
    /// `gasLimit == 0` forwards all remaining gas to the target.
    struct Call {
        address target;
        bytes data;
        uint256 gasLimit;
    }

    /// Payload carried by the bridge from the sender adapter to the receiver adapter.
    struct Envelope {
        uint8 version;
        uint256 nonce;
        bytes32 messageId;
        uint64 sourceChainId;
        address sourceSender;
        Call[] calls;
    }

    event Relayed(
        uint256 indexed nonce,
        address indexed caller,
        address indexed executor,
        bytes32 messageId,
        Call[] calls,
        uint256 gasLimit,
        bytes32 receipt
    );
    event ExecutorSet(address indexed executor);
    event MaxGasLimitUpdated(uint256 previous, uint256 current);

    event DeliveryExecuted(uint64 indexed sourceChainId, bytes32 indexed messageId, bool alreadyExecuted);
    event SenderAdapterUpdated(uint64 indexed sourceChainId, address previous, address current);
    event InterchainSecurityModuleUpdated(address previous, address current);

    event OwnershipTransferred(address indexed previousOwner, address indexed newOwner);

    // Configuration
    error ZeroAddress();
    error AlreadyInitialized();
    error ExecutorAlreadySet(address executor);
    error ExecutorNotSet();
    error LengthMismatch(uint256 sourceChainIds, uint256 senderAdapters);

    // Authorization
    error Unauthorized(address caller);
    error UnauthorizedTransportCaller(address caller);
    error UnauthorizedAdapter(uint64 sourceChainId, bytes32 sender);
    error GasLimitTooHigh(uint256 gasLimit, uint256 maxGasLimit);

    // Protocol
    error EmptyBatch();
    error NoMessagesSent(uint64 sourceChainId);
    error MalformedEnvelope();
    error UnsupportedEnvelopeVersion(uint8 version);
    error SourceChainMismatch(uint64 origin, uint64 claimed);

    // Replay
    error MessageAlreadyExecuted(bytes32 messageId);

    // Execution
    error CallExecutionFailed(uint256 index, address target, bytes returnData);
    error TransportSendFailed(bytes returnData);

    /// Origin-side bridge entrypoint (cross-domain messenger / mailbox dispatch).
    interface IBridgeTransport {
        function sendMessage(address destination, bytes payload, uint256 gasLimit)
            external
            payable
            returns (bytes32 receipt);
    }

    /// Destination-side delivery hook invoked by the mailbox.
    interface IMessageRecipient {
        function handle(uint32 origin, bytes32 sender, bytes message) external payable;
    }

    interface IRelaySender {
        function relay(Call[] calls, uint256 gasLimit) external payable returns (uint256 nonce);
    }
}
