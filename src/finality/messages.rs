/*
    Copyright © 2024, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Definitions for the structured votes that validators exchange, and their wire encoding.
//!
//! ## Wire format
//!
//! Votes are encoded with [Borsh](borsh), which is deterministic: encoding the same [`RawVote`]
//! always yields the same bytes, on every peer. A [`RawVote`] is encoded as its fields in declaration
//! order. A [`FinalityMessage`] is encoded as its raw vote followed by its outer signature. The
//! [switch flag](FinalityMessage::is_switch) is local and never sent.

use borsh::{BorshDeserialize, BorshSerialize};
use thiserror::Error;

use crate::types::{
    data_types::{Address, BlockNumber, Cycle, SignatureBytes, Timestamp},
    signed_messages::SignedMessage,
};

/// Serialization below only writes into `Vec<u8>`s, which does not fail.
pub(crate) const VEC_WRITE_INFALLIBLE: &str = "writing into a Vec<u8> cannot fail";

/// The voting phase a vote belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, BorshSerialize, BorshDeserialize)]
pub enum MsgType {
    Prepare,
    Commit,
}

/// What a vote is about. Decides how [`RawVote::data`] is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, BorshSerialize, BorshDeserialize)]
pub enum DataKind {
    /// `data` is opaque block content (typically a block hash).
    Block,

    /// `data` is a Borsh-encoded [`EpochList`], and `block_num` holds its cycle number.
    EpochList,
}

/// The signed content of a vote.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct RawVote {
    pub block_num: BlockNumber,
    pub msg_type: MsgType,
    pub kind: DataKind,
    pub timestamp: Timestamp,
    pub public_key: Address,
    pub data: Vec<u8>,
    pub data_signature: SignatureBytes,
}

impl RawVote {
    /// An unsigned proposal for block data, as handed to the validator by its proposer.
    pub fn block_proposal(block_num: BlockNumber, data: Vec<u8>) -> RawVote {
        Self::proposal(block_num, DataKind::Block, data)
    }

    /// An unsigned proposal for the validator list of `cycle`.
    pub fn epoch_list_proposal(cycle: Cycle, epoch_list: &EpochList) -> RawVote {
        Self::proposal(
            BlockNumber::new(cycle.int()),
            DataKind::EpochList,
            epoch_list.encode(),
        )
    }

    fn proposal(block_num: BlockNumber, kind: DataKind, data: Vec<u8>) -> RawVote {
        RawVote {
            block_num,
            msg_type: MsgType::Prepare,
            kind,
            timestamp: Timestamp::new(0),
            public_key: Address::default(),
            data,
            data_signature: SignatureBytes::default(),
        }
    }

    /// The canonical byte form of this raw vote. This is what the outer signature of a
    /// [`FinalityMessage`] is computed over, both when signing and when verifying.
    pub fn canonical_encode(&self) -> Vec<u8> {
        self.try_to_vec().expect(VEC_WRITE_INFALLIBLE)
    }

    /// Decode a raw vote from exactly `bytes`.
    pub fn decode(bytes: &[u8]) -> Result<RawVote, DecodeError> {
        RawVote::try_from_slice(bytes).map_err(|source| DecodeError::Malformed {
            what: "raw vote",
            source,
        })
    }
}

/// The data signature of a raw vote is over the raw vote's `data`.
impl SignedMessage for RawVote {
    fn message_bytes(&self) -> Vec<u8> {
        self.data.clone()
    }

    fn signature_bytes(&self) -> &SignatureBytes {
        &self.data_signature
    }
}

/// A vote as it is sent between validators: a [`RawVote`] plus the outer signature over its
/// [canonical encoding](RawVote::canonical_encode).
///
/// Instances are immutable once built; use [`MessageFactory`](super::factory::MessageFactory) to
/// create signed ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalityMessage {
    raw: RawVote,
    signature: SignatureBytes,
    switch: bool,
}

impl FinalityMessage {
    /// Assemble a message from a raw vote and an outer signature, without checking either.
    pub fn from_parts(raw: RawVote, signature: SignatureBytes) -> FinalityMessage {
        FinalityMessage {
            raw,
            signature,
            switch: false,
        }
    }

    /// Return this message with its switch flag set to `switch`.
    pub fn with_switch(mut self, switch: bool) -> FinalityMessage {
        self.switch = switch;
        self
    }

    pub fn raw(&self) -> &RawVote {
        &self.raw
    }

    pub fn signature(&self) -> &SignatureBytes {
        &self.signature
    }

    /// Whether this vote was cast during a validator set transition window, in which case membership
    /// is checked against the previous validator set.
    pub fn is_switch(&self) -> bool {
        self.switch
    }

    pub fn block_num(&self) -> BlockNumber {
        self.raw.block_num
    }

    pub fn msg_type(&self) -> MsgType {
        self.raw.msg_type
    }

    pub fn kind(&self) -> DataKind {
        self.raw.kind
    }

    /// The address this vote claims to be signed by.
    pub fn public_key(&self) -> Address {
        self.raw.public_key
    }

    pub fn data(&self) -> &[u8] {
        &self.raw.data
    }

    /// Parse the vote's data according to its [`DataKind`].
    pub fn content(&self) -> Result<VoteContent<'_>, DecodeError> {
        match self.raw.kind {
            DataKind::Block => Ok(VoteContent::Block(&self.raw.data)),
            DataKind::EpochList => EpochList::decode(&self.raw.data).map(VoteContent::EpochList),
        }
    }

    /// Encode this message into its wire form.
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = self.raw.canonical_encode();
        self.signature
            .serialize(&mut bytes)
            .expect(VEC_WRITE_INFALLIBLE);
        bytes
    }

    /// Decode a message from exactly `bytes`. Trailing bytes and unknown enum tags are rejected.
    pub fn decode(bytes: &[u8]) -> Result<FinalityMessage, DecodeError> {
        let (raw, signature) = <(RawVote, SignatureBytes)>::try_from_slice(bytes).map_err(
            |source| DecodeError::Malformed {
                what: "finality message",
                source,
            },
        )?;
        Ok(FinalityMessage::from_parts(raw, signature))
    }
}

/// The outer signature of a message is over the canonical encoding of its raw vote.
impl SignedMessage for FinalityMessage {
    fn message_bytes(&self) -> Vec<u8> {
        self.raw.canonical_encode()
    }

    fn signature_bytes(&self) -> &SignatureBytes {
        &self.signature
    }
}

/// The parsed data of a vote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VoteContent<'a> {
    Block(&'a [u8]),
    EpochList(EpochList),
}

/// The validator list of a cycle, as voted on by [`DataKind::EpochList`] votes.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct EpochList {
    pub epoch: u64,
    pub members: Vec<Address>,
}

impl EpochList {
    pub fn new(epoch: u64, members: Vec<Address>) -> EpochList {
        EpochList { epoch, members }
    }

    pub fn encode(&self) -> Vec<u8> {
        self.try_to_vec().expect(VEC_WRITE_INFALLIBLE)
    }

    pub fn decode(bytes: &[u8]) -> Result<EpochList, DecodeError> {
        EpochList::try_from_slice(bytes).map_err(|source| DecodeError::Malformed {
            what: "epoch list",
            source,
        })
    }
}

/// Bytes that should hold an encoded value could not be decoded into it.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed {what}: {source}")]
    Malformed {
        what: &'static str,
        #[source]
        source: std::io::Error,
    },
}
