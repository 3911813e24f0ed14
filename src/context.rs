/*
    Copyright © 2024, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! The local validator's view of who it is and who it votes with.
//!
//! A [`FinalityContext`] is constructed once at startup and passed explicitly into every call that
//! builds or checks a vote. It is built using the builder pattern, for example:
//!
//! ```ignore
//! let context =
//!     FinalityContext::builder()
//!     .me(keypair)
//!     .validator_set(validator_set)
//!     .previous_validator_set(previous_validator_set)
//!     .log_events(true)
//!     .build();
//! ```
//!
//! ## Validator set transitions
//!
//! While the validator set is being switched at a cycle boundary, votes may still come from members
//! of the outgoing set. Such votes are marked with the [switch flag](crate::finality::messages::FinalityMessage::is_switch)
//! and checked with [`validators_for(true)`](FinalityContext::validators_for), which selects the
//! previous validator set if one is configured.

use typed_builder::TypedBuilder;

use crate::types::{
    crypto_primitives::Keypair, data_types::Address, validator_set::ValidatorSet,
};

/// Stores the user-defined parameters of the local validator, that is:
/// 1. The validator's [keypair](Keypair), used to sign votes.
/// 2. The current validator set.
/// 3. The previous validator set, only during a validator set transition window.
/// 4. The "Log Events" flag. If set to `true`, events are logged through the
///    [log](https://docs.rs/log/latest/log/) crate.
#[derive(Clone, TypedBuilder)]
#[builder(builder_method(doc = "
    Create a builder for building a [FinalityContext]. On the builder call the following methods to construct a valid [FinalityContext].

    Required:
    - `.me(...)`
    - `.validator_set(...)`

    Optional:
    - `.previous_validator_set(...)`
    - `.log_events(...)`
"))]
pub struct FinalityContext {
    #[builder(setter(doc = "Set the local validator's keypair, used to sign votes. Required."))]
    me: Keypair,
    #[builder(setter(doc = "Set the current validator set. Required."))]
    validator_set: ValidatorSet,
    #[builder(
        default,
        setter(
            strip_option,
            doc = "Set the validator set in force before the latest transition. Optional."
        )
    )]
    previous_validator_set: Option<ValidatorSet>,
    #[builder(default = true, setter(doc = "Enable logging? Optional (defaults to `true`)."))]
    log_events: bool,
}

impl FinalityContext {
    /// Get the keypair of the local validator.
    pub fn me(&self) -> &Keypair {
        &self.me
    }

    /// Get the address of the local validator.
    pub fn address(&self) -> Address {
        self.me.address()
    }

    pub fn validator_set(&self) -> &ValidatorSet {
        &self.validator_set
    }

    pub fn previous_validator_set(&self) -> Option<&ValidatorSet> {
        self.previous_validator_set.as_ref()
    }

    /// Get the validator set that a vote with the given `switch` flag should be checked against.
    ///
    /// Falls back to the current validator set if `switch` is set but no transition is in progress.
    pub fn validators_for(&self, switch: bool) -> &ValidatorSet {
        match (self.previous_validator_set(), switch) {
            (Some(previous_validator_set), true) => previous_validator_set,
            _ => &self.validator_set,
        }
    }

    /// Check whether `address` may vote, given the vote's `switch` flag.
    pub fn is_validator(&self, address: &Address, switch: bool) -> bool {
        self.validators_for(switch).contains(address)
    }

    pub fn log_events(&self) -> bool {
        self.log_events
    }
}
