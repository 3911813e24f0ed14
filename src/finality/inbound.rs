/*
    Copyright © 2024, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! The validation boundary for votes arriving from the network.
//!
//! Every way in which inbound bytes can be unacceptable is turned into a [`RejectReason`] here, so
//! that malformed or adversarial votes are dropped without affecting the rest of the node.
//! [`receive`] only reads shared state and may be called from many threads at once.

use std::time::SystemTime;

use thiserror::Error;

use crate::{
    context::FinalityContext,
    events::{ReceiveVoteEvent, RejectVoteEvent},
    logging::log_event,
    types::{crypto_primitives::CryptoInputError, data_types::Address},
};

use super::{
    messages::{DecodeError, FinalityMessage},
    verifier::validate,
};

/// Why an inbound vote was dropped.
#[derive(Debug, Error)]
pub enum RejectReason {
    #[error("undecodable vote: {0}")]
    Decode(#[from] DecodeError),

    #[error("vote from {address}, who is not in the applicable validator set")]
    NotAValidator { address: Address },

    #[error("vote from {address} has a malformed signature: {source}")]
    CryptoInput {
        address: Address,
        #[source]
        source: CryptoInputError,
    },

    #[error("vote claims to be from {address}, but is not signed by it")]
    SignatureMismatch { address: Address },
}

/// Decode and check a vote received from a peer.
///
/// `switch` is the local node's view of whether the vote was cast during a validator set transition
/// window; it is stored in the returned message and selects the validator set the voter must belong
/// to (see [`FinalityContext::validators_for`]).
///
/// Rejections are logged at `warn` level if the context has logging enabled.
pub fn receive(
    context: &FinalityContext,
    bytes: &[u8],
    switch: bool,
) -> Result<FinalityMessage, RejectReason> {
    let result = check(context, bytes, switch);

    if context.log_events() {
        match &result {
            Ok(vote) => log_event(&ReceiveVoteEvent {
                timestamp: SystemTime::now(),
                vote: vote.clone(),
            }),
            Err(reason) => log_event(&RejectVoteEvent {
                timestamp: SystemTime::now(),
                reason: reason.to_string(),
            }),
        }
    }

    result
}

fn check(
    context: &FinalityContext,
    bytes: &[u8],
    switch: bool,
) -> Result<FinalityMessage, RejectReason> {
    let vote = FinalityMessage::decode(bytes)?.with_switch(switch);
    let address = vote.public_key();

    if !context.is_validator(&address, switch) {
        return Err(RejectReason::NotAValidator { address });
    }

    match validate(&vote) {
        Ok(true) => Ok(vote),
        Ok(false) => Err(RejectReason::SignatureMismatch { address }),
        Err(source) => Err(RejectReason::CryptoInput { address, source }),
    }
}
