/*
    Copyright © 2024, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Functions that log out events.
//!
//! The logs defined in this module are printed if the user enabled them via the validator's
//! [context](crate::context::FinalityContext).
//!
//! The finality layer logs using the [log](https://docs.rs/log/latest/log/) crate. To get these
//! messages printed onto a terminal or to a file, set up a
//! [logging implementation](https://docs.rs/log/latest/log/#available-logging-implementations).
//!
//! ## Log message format
//!
//! Log messages are CSVs (Comma Separated Values) with at least two values. The first two values are
//! always:
//! 1. The name of the [event](crate::events) in PascalCase (defined in this module as constants).
//! 2. The time the event was emitted (as number of seconds since the Unix Epoch).
//!
//! The rest of the values differ depending on the kind of event. For example, the following snippet
//! is how a [ReceiveVote](crate::events::ReceiveVoteEvent) is printed:
//!
//! ```text
//! ReceiveVote, 1701329264, Id5u7f6, Prepare, Block, 42, fNGCJyk
//! ```
//!
//! In the snippet:
//! - The third value is the first seven characters of the Base64 encoding of the address of the
//!   voter.
//! - The fourth and fifth values are the vote's phase and data kind.
//! - The sixth value is the block number (or cycle number, for epoch lists).
//! - The seventh value is the first seven characters of the Base64 encoding of the voted-on data.

use std::time::SystemTime;

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};

use crate::events::*;

// Names of each event in PascalCase for printing:
pub const CREATE_VOTE: &str = "CreateVote";
pub const RECEIVE_VOTE: &str = "ReceiveVote";
pub const REJECT_VOTE: &str = "RejectVote";
pub const PUT_CERTIFICATE: &str = "PutCertificate";
pub const DELETE_CERTIFICATE: &str = "DeleteCertificate";

/// Implemented by event types. Used to get a closure that logs the event.
pub(crate) trait Logger {
    /// Returns a pointer to the default logging handler for a given event type.
    fn get_logger() -> Box<dyn Fn(&Self) + Send>;
}

/// Log `event` with the default logging handler of its type.
pub(crate) fn log_event<E: Logger>(event: &E) {
    (E::get_logger())(event)
}

impl Logger for CreateVoteEvent {
    fn get_logger() -> Box<dyn Fn(&Self) + Send> {
        let logger = |create_vote_event: &CreateVoteEvent| {
            log::info!(
                "{}, {}, {:?}, {:?}, {}, {}",
                CREATE_VOTE,
                secs_since_unix_epoch(create_vote_event.timestamp),
                create_vote_event.vote.msg_type(),
                create_vote_event.vote.kind(),
                create_vote_event.vote.block_num(),
                first_seven_base64_chars(create_vote_event.vote.data())
            )
        };
        Box::new(logger)
    }
}

impl Logger for ReceiveVoteEvent {
    fn get_logger() -> Box<dyn Fn(&Self) + Send> {
        let logger = |receive_vote_event: &ReceiveVoteEvent| {
            log::info!(
                "{}, {}, {}, {:?}, {:?}, {}, {}",
                RECEIVE_VOTE,
                secs_since_unix_epoch(receive_vote_event.timestamp),
                first_seven_base64_chars(&receive_vote_event.vote.public_key().bytes()),
                receive_vote_event.vote.msg_type(),
                receive_vote_event.vote.kind(),
                receive_vote_event.vote.block_num(),
                first_seven_base64_chars(receive_vote_event.vote.data())
            )
        };
        Box::new(logger)
    }
}

impl Logger for RejectVoteEvent {
    fn get_logger() -> Box<dyn Fn(&Self) + Send> {
        let logger = |reject_vote_event: &RejectVoteEvent| {
            log::warn!(
                "{}, {}, {}",
                REJECT_VOTE,
                secs_since_unix_epoch(reject_vote_event.timestamp),
                reject_vote_event.reason
            )
        };
        Box::new(logger)
    }
}

impl Logger for PutCertificateEvent {
    fn get_logger() -> Box<dyn Fn(&Self) + Send> {
        let logger = |put_certificate_event: &PutCertificateEvent| {
            log::info!(
                "{}, {}, {}, {}",
                PUT_CERTIFICATE,
                secs_since_unix_epoch(put_certificate_event.timestamp),
                put_certificate_event.key,
                put_certificate_event.len
            )
        };
        Box::new(logger)
    }
}

impl Logger for DeleteCertificateEvent {
    fn get_logger() -> Box<dyn Fn(&Self) + Send> {
        let logger = |delete_certificate_event: &DeleteCertificateEvent| {
            log::info!(
                "{}, {}, {}",
                DELETE_CERTIFICATE,
                secs_since_unix_epoch(delete_certificate_event.timestamp),
                delete_certificate_event.key
            )
        };
        Box::new(logger)
    }
}

// Get a more readable representation of a bytesequence by base64-encoding it and taking the first 7
// characters.
pub(crate) fn first_seven_base64_chars(bytes: &[u8]) -> String {
    let encoded = STANDARD_NO_PAD.encode(bytes);
    if encoded.len() > 7 {
        encoded[0..7].to_string()
    } else {
        encoded
    }
}

// Clocks set before the Unix Epoch print as 0.
pub(crate) fn secs_since_unix_epoch(timestamp: SystemTime) -> u64 {
    timestamp
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        certificate_store::Key,
        finality::messages::{FinalityMessage, RawVote},
        types::data_types::{BlockNumber, Cycle, SignatureBytes},
    };

    #[test]
    fn every_event_has_a_logger() {
        let vote = FinalityMessage::from_parts(
            RawVote::block_proposal(BlockNumber::new(1), vec![1, 2, 3]),
            SignatureBytes::default(),
        );
        let timestamp = SystemTime::now();

        log_event(&CreateVoteEvent {
            timestamp,
            vote: vote.clone(),
        });
        log_event(&ReceiveVoteEvent { timestamp, vote });
        log_event(&RejectVoteEvent {
            timestamp,
            reason: String::from("not a validator"),
        });
        log_event(&PutCertificateEvent {
            timestamp,
            key: Key::EpochCertificate {
                cycle: Cycle::new(1),
            },
            len: 0,
        });
        log_event(&DeleteCertificateEvent {
            timestamp,
            key: Key::Raw(vec![0xff]),
        });

        let logger = RejectVoteEvent::get_logger();
        logger(&RejectVoteEvent {
            timestamp: SystemTime::UNIX_EPOCH,
            reason: String::new(),
        });
    }

    #[test]
    fn clocks_before_the_epoch_print_as_zero() {
        assert_eq!(secs_since_unix_epoch(SystemTime::UNIX_EPOCH), 0);
    }

    #[test]
    fn short_byte_strings_are_not_truncated() {
        assert_eq!(first_seven_base64_chars(&[]), "");
        assert_eq!(first_seven_base64_chars(&[0xff]), "/w");
        assert_eq!(first_seven_base64_chars(&[0u8; 32]).len(), 7);
    }
}
