/*
    Copyright © 2024, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Types that store information about validator sets.

use std::slice;

use borsh::{BorshDeserialize, BorshSerialize};

use super::data_types::Address;

/// Stores the addresses of the validators ("witnesses") entitled to vote on finality.
///
/// ## Ordering of validators
///
/// `ValidatorSet` internally maintains the list of validators in ascending order of their
/// `Address`es, with duplicates removed, and [`members`](ValidatorSet::members) walks through them in
/// this order.
///
/// ## Voting power
///
/// Every validator has exactly one vote. The [`quorum`](ValidatorSet::quorum) is therefore a count
/// of distinct validators, not a sum of powers.
#[derive(Clone, Debug, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ValidatorSet {
    // The addresses of validators are included here in ascending order.
    validators: Vec<Address>,
}

impl ValidatorSet {
    /// Create a validator set containing `validators`.
    pub fn new(validators: impl IntoIterator<Item = Address>) -> ValidatorSet {
        let mut validators: Vec<Address> = validators.into_iter().collect();
        validators.sort();
        validators.dedup();
        Self { validators }
    }

    /// Check whether the validator set contains `validator`.
    pub fn contains(&self, validator: &Address) -> bool {
        self.validators.binary_search(validator).is_ok()
    }

    /// Get an iterator through validators' addresses which walks through them in ascending order.
    pub fn members(&self) -> slice::Iter<'_, Address> {
        self.validators.iter()
    }

    /// Get the number of validators in the validator set.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Check whether the validator set has no validators.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Compute the minimum number of distinct validators whose matching votes make a quorum.
    ///
    /// "Minimum" here is understood in the inclusive sense: a set of votes is a quorum if it contains
    /// **at least** this many distinct validators. With `n = 3f + 1` validators this is `2f + 1`.
    pub fn quorum(&self) -> usize {
        self.validators.len() * 2 / 3 + 1
    }
}

impl FromIterator<Address> for ValidatorSet {
    fn from_iter<T: IntoIterator<Item = Address>>(iter: T) -> Self {
        ValidatorSet::new(iter)
    }
}
