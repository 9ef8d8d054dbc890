#[cfg(test)]
mod tests {
    use crate::encoder::{
        build_envelope, decode_envelope_hex, decode_handle_calldata, derive_message_id,
        handle_calldata, parse_hex, relay_calldata, to_hex,
    };
    use crate::simulate::{simulate_delivery, DryRunDispatcher};
    use crate::types::BatchSpec;
    use alloy_primitives::{address, Address, U256};
    use alloy_sol_types::SolCall;
    use relay_envelope::{
        abi::IRelaySender, encode_envelope, split_forwarded_calldata, ExecutionError,
    };

    const USER: Address = address!("00000000000000000000000000000000000000aa");
    const RELAYER: Address = address!("00000000000000000000000000000000000000bb");

    fn batch() -> BatchSpec {
        serde_json::from_str(
            r#"{
                "gasLimit": "200000",
                "calls": [
                    { "target": "0x000000000000000000000000000000000000c0de", "data": "0xdeadbeef", "gasLimit": "50000" },
                    { "target": "0x000000000000000000000000000000000000beef" }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_batch_json_defaults() {
        let batch = batch();
        assert_eq!(batch.gas_limit, U256::from(200_000u64));
        assert_eq!(batch.calls.len(), 2);
        assert_eq!(batch.calls[0].data.as_ref(), &[0xde, 0xad, 0xbe, 0xef]);
        assert!(batch.calls[1].data.is_empty());
        assert_eq!(batch.calls[1].gas_limit, U256::ZERO);
    }

    #[test]
    fn test_relay_calldata() {
        let encoded = relay_calldata(&batch());
        assert_eq!(&encoded[..4], &IRelaySender::relayCall::SELECTOR);

        let decoded = IRelaySender::relayCall::abi_decode(&encoded, true).unwrap();
        assert_eq!(decoded.gasLimit, U256::from(200_000u64));
        assert_eq!(decoded.calls.len(), 2);
        assert_eq!(decoded.calls[0].gasLimit, U256::from(50_000u64));
    }

    #[test]
    fn test_handle_calldata_carries_envelope() {
        let env = build_envelope(&batch(), U256::from(3u64), 10, USER, RELAYER);
        let calldata = to_hex(&handle_calldata(&env, RELAYER).unwrap());

        let (origin, sender, json) = decode_handle_calldata(&calldata).unwrap();
        assert_eq!(origin, 10);
        assert_eq!(sender, RELAYER.into_word());
        assert_eq!(json.nonce, U256::from(3u64));
        assert_eq!(json.source_sender, USER);
        assert_eq!(json.message_id, derive_message_id(U256::from(3u64), 10, RELAYER));
        assert_eq!(json.calls, batch().calls);
    }

    #[test]
    fn test_handle_calldata_rejects_wide_chain_id() {
        let env = build_envelope(&batch(), U256::from(1u64), u64::from(u32::MAX) + 1, USER, RELAYER);
        assert!(handle_calldata(&env, RELAYER).is_err());
    }

    #[test]
    fn test_decode_envelope_hex() {
        let env = build_envelope(&batch(), U256::from(1u64), 10, USER, RELAYER);
        let json = decode_envelope_hex(&to_hex(&encode_envelope(&env))).unwrap();
        assert_eq!(json.version, 1);
        assert_eq!(json.source_chain_id, 10);

        assert!(decode_envelope_hex("0x1234").is_err());
        assert!(decode_envelope_hex("not hex").is_err());
    }

    #[test]
    fn test_parse_hex_accepts_optional_prefix() {
        assert_eq!(parse_hex("0x0a0b").unwrap(), vec![0x0a, 0x0b]);
        assert_eq!(parse_hex(" 0a0b\n").unwrap(), vec![0x0a, 0x0b]);
    }

    #[test]
    fn test_simulate_delivery_forwards_sender() {
        let env = build_envelope(&batch(), U256::from(1u64), 10, USER, RELAYER);
        let mut dispatcher = DryRunDispatcher::default();

        let executed = simulate_delivery(&env, &mut dispatcher).unwrap();
        assert_eq!(executed.message_id, env.messageId);
        assert_eq!(dispatcher.calls.len(), 2);

        let (data, sender) = split_forwarded_calldata(&dispatcher.calls[0].1).unwrap();
        assert_eq!(data, &[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(sender, USER);
        assert_eq!(dispatcher.calls[0].2, 50_000);
    }

    #[test]
    fn test_simulate_delivery_reports_failing_index() {
        let env = build_envelope(&batch(), U256::from(1u64), 10, USER, RELAYER);
        let mut dispatcher = DryRunDispatcher {
            fail_target: Some(address!("000000000000000000000000000000000000c0de")),
            ..Default::default()
        };

        match simulate_delivery(&env, &mut dispatcher) {
            Err(ExecutionError::CallFailed { index, .. }) => assert_eq!(index, 0),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(dispatcher.calls.len(), 1);
    }
}
