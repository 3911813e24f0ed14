/*
    Copyright © 2024, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Cryptographic primitives.
//!
//! The definitions and re-exports in this module provide three categories of cryptographic primitives:
//! 1. **Cryptographic Hashes**: SHA-256, provided by the [`sha2`] crate.
//! 2. **Digital Signatures**: recoverable secp256k1 ECDSA, provided by the [`k256`] crate.
//! 3. **Addresses**: the last 20 bytes of the Keccak-256 hash of an uncompressed public key, using
//!    the [`sha3`] crate.
//!
//! Signatures are 65 bytes: `r (32) || s (32) || v (1)`, where `v = 27 + recovery_id`. Recovery also
//! accepts the raw recovery ids `0` and `1`.

use k256::ecdsa::signature::hazmat::RandomizedPrehashSigner;
use rand_core::OsRng;
use sha3::Keccak256;
use thiserror::Error;

use super::data_types::{Address, CryptoHash, SignatureBytes};

// re-exports below.
pub use sha2::Digest;
pub use sha2::Sha256 as CryptoHasher;

pub use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};

/// Length in bytes of a well-formed recoverable signature.
pub const SIGNATURE_LENGTH: usize = 65;

/// Offset added to the recovery id when it is written into a signature's `v` byte.
const RECOVERY_ID_OFFSET: u8 = 27;

/// Hash `bytes` with the [`CryptoHasher`].
pub fn hash(bytes: &[u8]) -> CryptoHash {
    let mut hasher = CryptoHasher::new();
    hasher.update(bytes);
    CryptoHash::new(hasher.finalize().into())
}

/// Derive the [`Address`] of `verifying_key`.
pub fn address_of(verifying_key: &VerifyingKey) -> Address {
    let encoded_point = verifying_key.to_encoded_point(false);

    // Skip the 0x04 (uncompressed) tag.
    let mut hasher = Keccak256::new();
    hasher.update(&encoded_point.as_bytes()[1..]);
    let digest: [u8; 32] = hasher.finalize().into();

    let mut address = [0u8; 20];
    address.copy_from_slice(&digest[12..]);
    Address::new(address)
}

/// Recover the address of the signer of `signature` over the prehashed message `hash`.
///
/// # Return value
///
/// - `Ok(Some(address))` if recovery succeeded. This does **not** imply `address` is who the
///   caller expects; compare it against the claimed signer.
/// - `Ok(None)` if `signature` has the right shape but cannot be recovered from: unknown
///   recovery id, out-of-range scalars, or no matching curve point.
///
/// # Errors
///
/// [`CryptoInputError`] if `signature` is not [`SIGNATURE_LENGTH`] bytes long.
pub fn recover_address(
    hash: &CryptoHash,
    signature: &SignatureBytes,
) -> Result<Option<Address>, CryptoInputError> {
    let bytes = signature.bytes();
    if bytes.len() != SIGNATURE_LENGTH {
        return Err(CryptoInputError::SignatureLength {
            expected: SIGNATURE_LENGTH,
            actual: bytes.len(),
        });
    }

    let Some(recovery_id) = parse_recovery_id(bytes[SIGNATURE_LENGTH - 1]) else {
        return Ok(None);
    };
    let Ok(signature) = Signature::from_slice(&bytes[..SIGNATURE_LENGTH - 1]) else {
        return Ok(None);
    };

    Ok(
        VerifyingKey::recover_from_prehash(&hash.bytes(), &signature, recovery_id)
            .ok()
            .map(|verifying_key| address_of(&verifying_key)),
    )
}

fn parse_recovery_id(v: u8) -> Option<RecoveryId> {
    match v {
        0 | 27 => RecoveryId::from_byte(0),
        1 | 28 => RecoveryId::from_byte(1),
        _ => None,
    }
}

/// A facade around [`SigningKey`] that implements a method for [`sign`](Self::sign)-ing message
/// hashes as well as a getter for the [`address`](Self::address) of the signing key.
#[derive(Clone)]
pub struct Keypair(SigningKey);

impl Keypair {
    /// Create a `Keypair` that wraps over `signing_key`.
    pub fn new(signing_key: SigningKey) -> Keypair {
        Keypair(signing_key)
    }

    /// Create a `Keypair` from a freshly generated random signing key.
    pub fn generate() -> Keypair {
        Keypair(SigningKey::random(&mut OsRng))
    }

    /// Sign the prehashed message `hash`, producing a 65-byte recoverable signature.
    ///
    /// Nonces are derived with RFC6979 mixed with fresh random data, so signing the same `hash`
    /// twice gives two different (equally valid) signatures.
    pub fn sign(&self, hash: &CryptoHash) -> Result<SignatureBytes, SigningError> {
        let prehash = hash.bytes();
        let signature: Signature = self
            .0
            .sign_prehash_with_rng(&mut OsRng, &prehash)
            .map_err(|err| SigningError(err.to_string()))?;
        let recovery_id =
            RecoveryId::trial_recovery_from_prehash(self.0.verifying_key(), &prehash, &signature)
                .map_err(|err| SigningError(err.to_string()))?;

        let mut bytes = Vec::with_capacity(SIGNATURE_LENGTH);
        bytes.extend_from_slice(&signature.to_bytes());
        bytes.push(RECOVERY_ID_OFFSET + recovery_id.to_byte());
        Ok(SignatureBytes::new(bytes))
    }

    /// Get the `Address` of this `Keypair`.
    pub fn address(&self) -> Address {
        address_of(self.0.verifying_key())
    }
}

/// A signature or hash handed to the recovery primitive has the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoInputError {
    #[error("signature must be {expected} bytes long, got {actual}")]
    SignatureLength { expected: usize, actual: usize },
}

/// The local signing primitive failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to sign: {0}")]
pub struct SigningError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovery_id_accepts_raw_and_offset_forms() {
        assert_eq!(parse_recovery_id(0), RecoveryId::from_byte(0));
        assert_eq!(parse_recovery_id(27), RecoveryId::from_byte(0));
        assert_eq!(parse_recovery_id(1), RecoveryId::from_byte(1));
        assert_eq!(parse_recovery_id(28), RecoveryId::from_byte(1));
        assert_eq!(parse_recovery_id(2), None);
        assert_eq!(parse_recovery_id(29), None);
    }

    #[test]
    fn sign_then_recover_yields_signer_address() {
        let keypair = Keypair::generate();
        let digest = hash(b"finality");
        let signature = keypair.sign(&digest).unwrap();

        assert_eq!(signature.len(), SIGNATURE_LENGTH);
        assert_eq!(
            recover_address(&digest, &signature).unwrap(),
            Some(keypair.address())
        );
    }

    #[test]
    fn signing_twice_gives_different_signatures() {
        let keypair = Keypair::generate();
        let digest = hash(b"finality");

        assert_ne!(keypair.sign(&digest).unwrap(), keypair.sign(&digest).unwrap());
    }

    #[test]
    fn short_signature_is_an_input_error() {
        let digest = hash(b"finality");
        let result = recover_address(&digest, &SignatureBytes::new(vec![0u8; 64]));

        assert_eq!(
            result,
            Err(CryptoInputError::SignatureLength {
                expected: 65,
                actual: 64
            })
        );
    }

    #[test]
    fn zero_scalars_are_not_recoverable() {
        let digest = hash(b"finality");
        let mut bytes = vec![0u8; SIGNATURE_LENGTH];
        bytes[SIGNATURE_LENGTH - 1] = 27;

        assert_eq!(recover_address(&digest, &SignatureBytes::new(bytes)), Ok(None));
    }
}
