/*
    Copyright © 2024, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Signature checks for received [`FinalityMessage`]s.

use crate::types::{
    crypto_primitives::CryptoInputError, data_types::Address, signed_messages::SignedMessage,
};

use super::messages::FinalityMessage;

/// The addresses recovered from the two signatures of a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecoveredSigners {
    /// Signer of the outer signature, over the canonical encoding of the raw vote.
    pub vote_signer: Option<Address>,

    /// Signer of the data signature, over the raw vote's data.
    pub data_signer: Option<Address>,
}

/// Recover the signers of both of `msg`'s signatures.
///
/// Both signatures are always examined, so a wrongly shaped signature is reported even if the other
/// one already fails to recover.
pub fn recover_signers(msg: &FinalityMessage) -> Result<RecoveredSigners, CryptoInputError> {
    let vote_signer = msg.signer();
    let data_signer = msg.raw().signer();
    Ok(RecoveredSigners {
        vote_signer: vote_signer?,
        data_signer: data_signer?,
    })
}

/// Check that both of `msg`'s signatures were created by the address in its `public_key` field.
///
/// Returns `Ok(false)` if either signature recovers to a different address or cannot be recovered
/// from at all, and `Err` if either signature has the wrong shape.
pub fn validate(msg: &FinalityMessage) -> Result<bool, CryptoInputError> {
    let claimed = msg.public_key();
    let vote_signed = msg.is_signed_by(&claimed)?;
    let data_signed = msg.raw().is_signed_by(&claimed)?;
    Ok(vote_signed && data_signed)
}

