/*
    Copyright © 2024, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Types and traits that are used across multiple components of the finality layer.
//!
//! Types specific to one component, e.g., the wire form of a finality vote, live in that
//! component's module, e.g., [`crate::finality::messages`].

pub mod crypto_primitives;

pub mod data_types;

pub mod signed_messages;

pub mod validator_set;
