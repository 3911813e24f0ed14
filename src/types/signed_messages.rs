/*
    Copyright © 2024, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Signed messages.

use super::{
    crypto_primitives::{hash, recover_address, CryptoInputError},
    data_types::{Address, SignatureBytes},
};

/// Data types that contain: 1. A message, and 2. A recoverable signature over the hash of said
/// message whose signer can be recovered and compared against a claimed [`Address`].
pub trait SignedMessage {
    /// Get the bytes that are hashed and passed into the signing function to form the signature of
    /// the `SignedMessage`.
    fn message_bytes(&self) -> Vec<u8>;

    /// Get the signature of the `SignedMessage`.
    fn signature_bytes(&self) -> &SignatureBytes;

    /// Recover the address of whoever signed `message_bytes`.
    ///
    /// `Ok(None)` means the signature has the right shape but no signer could be recovered from it.
    fn signer(&self) -> Result<Option<Address>, CryptoInputError> {
        recover_address(&hash(&self.message_bytes()), self.signature_bytes())
    }

    /// Check whether `signature_bytes` is a signature created by `address` over `message_bytes`.
    fn is_signed_by(&self, address: &Address) -> Result<bool, CryptoInputError> {
        Ok(self.signer()? == Some(*address))
    }
}
