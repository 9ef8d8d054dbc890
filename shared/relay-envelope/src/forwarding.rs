//! Caller-identity forwarding.
//!
//! Every call executed on behalf of a relayed batch receives `data || sourceSender`, the
//! original origin-chain caller appended as a raw 20-byte suffix (ERC-2771 style). Targets
//! that care about the origin caller read the last 20 bytes of their calldata; targets that
//! don't can ignore the trailing bytes since ABI decoding tolerates them.

use alloc::vec::Vec;

use alloy_primitives::Address;

pub const SENDER_SUFFIX_LEN: usize = 20;

pub fn forwarded_calldata(data: &[u8], source_sender: Address) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() + SENDER_SUFFIX_LEN);
    out.extend_from_slice(data);
    out.extend_from_slice(source_sender.as_slice());
    out
}

/// Inverse of [`forwarded_calldata`]: `(original data, source sender)`.
///
/// Returns `None` when the calldata is too short to carry a sender suffix.
pub fn split_forwarded_calldata(calldata: &[u8]) -> Option<(&[u8], Address)> {
    if calldata.len() < SENDER_SUFFIX_LEN {
        return None;
    }
    let (data, sender) = calldata.split_at(calldata.len() - SENDER_SUFFIX_LEN);
    Some((data, Address::from_slice(sender)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn appends_sender_after_payload() {
        let sender = address!("00000000000000000000000000000000000000aa");
        let out = forwarded_calldata(&[0xde, 0xad, 0xbe, 0xef], sender);

        assert_eq!(out.len(), 4 + 20);
        assert_eq!(&out[..4], &[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(&out[4..], sender.as_slice());
    }

    #[test]
    fn split_recovers_sender_from_empty_payload() {
        let sender = address!("1111111111111111111111111111111111111111");
        let out = forwarded_calldata(&[], sender);

        let (data, recovered) = split_forwarded_calldata(&out).unwrap();
        assert!(data.is_empty());
        assert_eq!(recovered, sender);
    }

    #[test]
    fn split_rejects_short_calldata() {
        assert!(split_forwarded_calldata(&[0u8; 19]).is_none());
    }
}
