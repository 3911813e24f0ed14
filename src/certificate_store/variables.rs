/*
    Copyright © 2024, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Byte-prefixes that specify where each kind of finality certificate is stored in the
//! user-provided key-value store.
//!
//! |Variable|Key|Value|
//! |---|---|---|
//! |Epoch certificates|`"SrSign_"` ++ big-endian [`Cycle`]|Bytes of the [`FinalityCertificate`](crate::finality::certificate::FinalityCertificate) for that cycle's validator list.|
//! |Block certificates|`"BlockSign_"` ++ big-endian [`BlockNumber`]|Bytes of the [`FinalityCertificate`](crate::finality::certificate::FinalityCertificate) for that block.|
//!
//! Neither prefix is a prefix of the other, so the two namespaces are disjoint.

use crate::types::data_types::{BlockNumber, Cycle};

pub const EPOCH_CERTIFICATES: &[u8] = b"SrSign_";
pub const BLOCK_CERTIFICATES: &[u8] = b"BlockSign_";

/// Key of the certificate for the validator list of `cycle`.
pub fn epoch_certificate_key(cycle: Cycle) -> Vec<u8> {
    concat(EPOCH_CERTIFICATES, &cycle.to_be_bytes())
}

/// Key of the certificate for block `block_num`.
pub fn block_certificate_key(block_num: BlockNumber) -> Vec<u8> {
    concat(BLOCK_CERTIFICATES, &block_num.to_be_bytes())
}

/// Takes references to two byteslices and returns a vector containing the bytes of the first one, and
/// then the bytes of the second one.
pub fn concat(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut res = Vec::with_capacity(a.len() + b.len());
    res.extend_from_slice(a);
    res.extend_from_slice(b);
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_prefix_then_big_endian_index() {
        assert_eq!(
            epoch_certificate_key(Cycle::new(7)),
            b"SrSign_\x00\x00\x00\x00\x00\x00\x00\x07".to_vec()
        );
        assert_eq!(
            block_certificate_key(BlockNumber::new(0x0102)),
            b"BlockSign_\x00\x00\x00\x00\x00\x00\x01\x02".to_vec()
        );
    }
}
