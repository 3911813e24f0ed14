/*
    Copyright © 2024, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! PBFT-style finality voting for a delegated proof-of-stake chain.
//!
//! Validators vote in two phases, prepare and commit, on either a block or the validator list of the
//! next epoch. A vote travels as a [finality message](finality::messages::FinalityMessage): a raw vote
//! signed twice by its author, once over the voted-on data and once over the whole raw vote. Once a
//! quorum of commits agree on the same data, their data signatures are bundled into a
//! [finality certificate](finality::certificate::FinalityCertificate) and persisted in a
//! [certificate store](certificate_store::FinalityCertificateStore).
//!
//! The crate is organized as follows:
//! - [`types`]: addresses, hashes, signatures, and validator sets.
//! - [`context`]: the validator's keypair and the validator sets it votes with.
//! - [`finality`]: building, decoding, validating, and rendering finality messages.
//! - [`certificate_store`]: the persistent certificate store and the key-value store it runs on.
//! - [`events`]: things that happen, which are printed by the logging module if enabled.

pub mod certificate_store;

pub mod context;

pub mod events;

pub mod finality;

pub(crate) mod logging;

pub mod types;
