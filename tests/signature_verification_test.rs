use pbft_finality::{
    finality::{
        factory::MessageFactory,
        messages::{FinalityMessage, RawVote},
        verifier::{recover_signers, validate},
    },
    types::{
        crypto_primitives::{hash, CryptoInputError, Keypair, SIGNATURE_LENGTH},
        data_types::{BlockNumber, SignatureBytes},
        signed_messages::SignedMessage,
    },
};

mod common;

use crate::common::validators::{cluster, keypairs};

fn signed_prepare() -> (FinalityMessage, Keypair) {
    let keypairs = keypairs(1);
    let contexts = cluster(&keypairs);
    let prepare = MessageFactory::new(&contexts[0])
        .create_prepare(&RawVote::block_proposal(
            BlockNumber::new(5),
            b"some block".to_vec(),
        ))
        .unwrap();
    (prepare, keypairs[0].clone())
}

fn flip_byte(signature: &SignatureBytes, index: usize) -> SignatureBytes {
    let mut bytes = signature.bytes().to_vec();
    bytes[index] ^= 0x01;
    SignatureBytes::new(bytes)
}

#[test]
fn well_formed_vote_validates_test() {
    let (prepare, keypair) = signed_prepare();

    assert_eq!(validate(&prepare), Ok(true));

    assert_eq!(prepare.is_signed_by(&keypair.address()), Ok(true));
    assert_eq!(prepare.raw().is_signed_by(&keypair.address()), Ok(true));

    let signers = recover_signers(&prepare).unwrap();
    assert_eq!(signers.vote_signer, Some(keypair.address()));
    assert_eq!(signers.data_signer, Some(keypair.address()));
}

#[test]
fn tampered_data_fails_validation_test() {
    let (prepare, _) = signed_prepare();

    let mut raw = prepare.raw().clone();
    raw.data[0] ^= 0x01;
    let tampered = FinalityMessage::from_parts(raw, prepare.signature().clone());

    assert_eq!(validate(&tampered), Ok(false));
}

#[test]
fn tampered_signatures_fail_validation_test() {
    let (prepare, _) = signed_prepare();

    // Data signature, inside the signed raw vote.
    for index in [0, 40, SIGNATURE_LENGTH - 1] {
        let mut raw = prepare.raw().clone();
        raw.data_signature = flip_byte(&raw.data_signature, index);
        let tampered = FinalityMessage::from_parts(raw, prepare.signature().clone());
        assert_eq!(validate(&tampered), Ok(false));
    }

    // Outer signature.
    for index in [0, 40, SIGNATURE_LENGTH - 1] {
        let tampered = FinalityMessage::from_parts(
            prepare.raw().clone(),
            flip_byte(prepare.signature(), index),
        );
        assert_eq!(validate(&tampered), Ok(false));
    }

    // Unknown recovery id.
    let mut bytes = prepare.signature().bytes().to_vec();
    bytes[SIGNATURE_LENGTH - 1] = 5;
    let unknown_v = FinalityMessage::from_parts(prepare.raw().clone(), SignatureBytes::new(bytes));
    assert_eq!(validate(&unknown_v), Ok(false));
}

#[test]
fn wrongly_sized_signature_is_an_input_error_test() {
    let (prepare, _) = signed_prepare();

    let short_outer = FinalityMessage::from_parts(
        prepare.raw().clone(),
        SignatureBytes::new(prepare.signature().bytes()[..64].to_vec()),
    );
    assert_eq!(
        validate(&short_outer),
        Err(CryptoInputError::SignatureLength {
            expected: 65,
            actual: 64
        })
    );

    let mut raw = prepare.raw().clone();
    raw.data_signature = SignatureBytes::new(vec![0; 70]);
    let long_data = FinalityMessage::from_parts(raw, prepare.signature().clone());
    assert_eq!(
        validate(&long_data),
        Err(CryptoInputError::SignatureLength {
            expected: 65,
            actual: 70
        })
    );
}

#[test]
fn vote_claiming_someone_else_fails_validation_test() {
    let (prepare, _) = signed_prepare();
    let impostor = keypairs(1).remove(0);

    // Claim another validator's address while keeping the signatures it came with.
    assert_eq!(prepare.is_signed_by(&impostor.address()), Ok(false));
    assert_eq!(prepare.raw().is_signed_by(&impostor.address()), Ok(false));

    let mut raw = prepare.raw().clone();
    raw.public_key = impostor.address();
    assert_eq!(
        validate(&FinalityMessage::from_parts(raw, prepare.signature().clone())),
        Ok(false)
    );

    // Sign everything with one key while claiming the address of another.
    let (victim_vote, victim) = signed_prepare();
    let mut raw = victim_vote.raw().clone();
    raw.public_key = victim.address();
    raw.data_signature = impostor.sign(&hash(&raw.data)).unwrap();
    let signature = impostor.sign(&hash(&raw.canonical_encode())).unwrap();
    assert_eq!(
        validate(&FinalityMessage::from_parts(raw, signature)),
        Ok(false)
    );
}
