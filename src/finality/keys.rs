/*
    Copyright © 2024, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Keys that an external vote tally uses to deduplicate and group [`FinalityMessage`]s.
//!
//! Both keys have the form `"<block number>_<hex>"`. The `_` cannot occur in the decimal block
//! number, so keys for different block numbers never collide.
//!
//! Keys are pure functions of their inputs. Serializing the increment of a tally entry across
//! concurrently delivered votes is the tally's job.

use std::fmt::{self, Display, Formatter};

use crate::types::data_types::{Address, BlockNumber};

use super::messages::FinalityMessage;

/// Identifies one validator's vote on one block: at most one vote per `VoterKey` should be counted.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VoterKey(String);

impl VoterKey {
    pub fn new(block_num: BlockNumber, voter: &Address) -> VoterKey {
        VoterKey(format!("{}_{}", block_num, voter.to_hex()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for VoterKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Groups votes on one block that agree on identical data. Partitioned validators may have been
/// handed different proposals for the same block, and only votes for the same data add up.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DataKey(String);

impl DataKey {
    pub fn new(block_num: BlockNumber, data: &[u8]) -> DataKey {
        DataKey(format!("{}_{}", block_num, hex::encode(data)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DataKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FinalityMessage {
    /// Get the [`VoterKey`] of this vote.
    pub fn voter_key(&self) -> VoterKey {
        VoterKey::new(self.block_num(), &self.public_key())
    }

    /// Get the [`DataKey`] of this vote.
    pub fn data_key(&self) -> DataKey {
        DataKey::new(self.block_num(), self.data())
    }
}
