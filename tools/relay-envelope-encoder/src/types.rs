use alloy_primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

use relay_envelope::{Call, Envelope};

/// One call as written in a batch file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallSpec {
    pub target: Address,
    #[serde(default)]
    pub data: Bytes,
    /// Per-call gas budget on the destination chain; 0 forwards all gas.
    #[serde(default)]
    pub gas_limit: U256,
}

/// Batch file accepted by the CLI (`relay-calldata`, `handle-calldata`).
///
/// ```json
/// { "gasLimit": "200000", "calls": [{ "target": "0x..", "data": "0x..", "gasLimit": "0" }] }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSpec {
    /// Transport gas budget, checked against the sender's ceiling.
    pub gas_limit: U256,
    pub calls: Vec<CallSpec>,
}

/// Human-readable view of a decoded envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeJson {
    pub version: u8,
    pub nonce: U256,
    pub message_id: B256,
    pub source_chain_id: u64,
    pub source_sender: Address,
    pub calls: Vec<CallSpec>,
}

impl From<&CallSpec> for Call {
    fn from(spec: &CallSpec) -> Self {
        Call {
            target: spec.target,
            data: spec.data.clone(),
            gasLimit: spec.gas_limit,
        }
    }
}

impl From<&Call> for CallSpec {
    fn from(call: &Call) -> Self {
        CallSpec {
            target: call.target,
            data: call.data.clone(),
            gas_limit: call.gasLimit,
        }
    }
}

impl From<&Envelope> for EnvelopeJson {
    fn from(env: &Envelope) -> Self {
        EnvelopeJson {
            version: env.version,
            nonce: env.nonce,
            message_id: env.messageId,
            source_chain_id: env.sourceChainId,
            source_sender: env.sourceSender,
            calls: env.calls.iter().map(CallSpec::from).collect(),
        }
    }
}
