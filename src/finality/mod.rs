/*
    Copyright © 2024, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! The finality message protocol.
//!
//! # Two-phase voting
//!
//! A validator that is handed candidate data by its proposer (a block, or the validator list of an
//! upcoming cycle) [creates](factory::MessageFactory::create_prepare) a **Prepare** vote for it and
//! broadcasts it. Every validator [receives](inbound::receive) its peers' prepares, and an external
//! tally counts them under their [`VoterKey`](keys::VoterKey) and [`DataKey`](keys::DataKey). Once a
//! validator has seen a quorum of prepares for one `DataKey` it
//! [derives](factory::MessageFactory::derive_commit) a **Commit** vote for the same data. Once a
//! quorum of commits has been seen, the commits are aggregated into a
//! [`FinalityCertificate`](certificate::FinalityCertificate) and persisted in the
//! [certificate store](crate::certificate_store).
//!
//! # What a vote proves
//!
//! Each [`FinalityMessage`](messages::FinalityMessage) carries two signatures by the same validator:
//! 1. The **outer** signature over the canonical encoding of the whole raw vote ("I cast this vote").
//! 2. The **data** signature over the voted-on data alone ("I attest to this data").
//!
//! [`validate`](verifier::validate) only accepts a vote if both signatures recover to the address
//! the vote claims, so a relay cannot detach data from its attestation. Data signatures of commits
//! are what a certificate is made of.

pub mod certificate;

pub mod factory;

pub mod inbound;

pub mod keys;

pub mod messages;

pub mod render;

pub mod verifier;
