/*
    Copyright © 2024, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Construction of signed Prepare and Commit votes.

use std::time::SystemTime;

use crate::{
    context::FinalityContext,
    events::CreateVoteEvent,
    logging::log_event,
    types::{
        crypto_primitives::{hash, SigningError},
        data_types::{BlockNumber, Timestamp},
    },
};

use super::messages::{DataKind, FinalityMessage, MsgType, RawVote};

/// Builds votes signed by the local validator of a [`FinalityContext`].
#[derive(Clone, Copy)]
pub struct MessageFactory<'a> {
    context: &'a FinalityContext,
}

impl<'a> MessageFactory<'a> {
    pub fn new(context: &'a FinalityContext) -> MessageFactory<'a> {
        MessageFactory { context }
    }

    /// Create a Prepare vote for the block number, data kind and data of `proposal`.
    ///
    /// All other fields of `proposal` are ignored: the vote is timestamped now, and its public key and
    /// both signatures are the local validator's.
    pub fn create_prepare(&self, proposal: &RawVote) -> Result<FinalityMessage, SigningError> {
        self.build(
            MsgType::Prepare,
            proposal.block_num,
            proposal.kind,
            &proposal.data,
        )
    }

    /// Create the Commit vote that follows `prepare` once a quorum of matching prepares was seen.
    ///
    /// The commit is always freshly timestamped and signed by the local validator. Nothing is copied
    /// from `prepare` except its block number, data kind and data, so a signature from one validator
    /// can never end up in another validator's commit.
    pub fn derive_commit(&self, prepare: &FinalityMessage) -> Result<FinalityMessage, SigningError> {
        self.build(
            MsgType::Commit,
            prepare.block_num(),
            prepare.kind(),
            prepare.data(),
        )
    }

    fn build(
        &self,
        msg_type: MsgType,
        block_num: BlockNumber,
        kind: DataKind,
        data: &[u8],
    ) -> Result<FinalityMessage, SigningError> {
        let me = self.context.me();
        let data_signature = me.sign(&hash(data))?;
        let raw = RawVote {
            block_num,
            msg_type,
            kind,
            timestamp: Timestamp::now(),
            public_key: me.address(),
            data: data.to_vec(),
            data_signature,
        };
        let signature = me.sign(&hash(&raw.canonical_encode()))?;
        let vote = FinalityMessage::from_parts(raw, signature);

        if self.context.log_events() {
            log_event(&CreateVoteEvent {
                timestamp: SystemTime::now(),
                vote: vote.clone(),
            })
        }

        Ok(vote)
    }
}
