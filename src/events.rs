/*
    Copyright © 2024, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Definitions of the events emitted by the finality layer, for logging.
//!
//! Note: an event for a given action indicates that the action has been completed.

use std::time::SystemTime;

use crate::{certificate_store::Key, finality::messages::FinalityMessage};

/// The local validator signed a new vote.
pub struct CreateVoteEvent {
    pub timestamp: SystemTime,
    pub vote: FinalityMessage,
}

/// A vote from a peer passed decoding, membership and signature checks.
pub struct ReceiveVoteEvent {
    pub timestamp: SystemTime,
    pub vote: FinalityMessage,
}

/// Inbound bytes were dropped at the validation boundary.
pub struct RejectVoteEvent {
    pub timestamp: SystemTime,
    pub reason: String,
}

/// A finality certificate was written to the certificate store.
pub struct PutCertificateEvent {
    pub timestamp: SystemTime,
    pub key: Key,
    pub len: usize,
}

/// A finality certificate was deleted from the certificate store.
pub struct DeleteCertificateEvent {
    pub timestamp: SystemTime,
    pub key: Key,
}
