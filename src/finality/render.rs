/*
    Copyright © 2024, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Human-readable rendering of votes, for diagnostics only.
//!
//! Nothing here feeds back into validation: a vote whose data cannot be rendered may still be a
//! perfectly valid vote.

use std::fmt::{self, Display, Formatter};

use super::messages::{FinalityMessage, VoteContent};

/// What [`render`] prints when a vote's data does not parse as its data kind.
pub const DECODE_ERROR: &str = "decode error";

/// Render the data of `msg`.
///
/// - Block votes render as the hex encoding of their data (empty for empty data).
/// - Epoch list votes render as `epoch = <n>, members = [<hex address>, ...]`, or as
///   [`DECODE_ERROR`] if their data is not an epoch list.
pub fn render(msg: &FinalityMessage) -> String {
    match msg.content() {
        Ok(VoteContent::Block(data)) => hex::encode(data),
        Ok(VoteContent::EpochList(epoch_list)) => {
            let members: Vec<String> = epoch_list
                .members
                .iter()
                .map(|member| member.to_hex())
                .collect();
            format!(
                "epoch = {}, members = [{}]",
                epoch_list.epoch,
                members.join(", ")
            )
        }
        Err(_) => DECODE_ERROR.to_string(),
    }
}

impl Display for FinalityMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "msg type: {:?}, data kind: {:?}, node address: {}, block num: {}, data: {}",
            self.msg_type(),
            self.kind(),
            self.public_key(),
            self.block_num(),
            render(self)
        )
    }
}
