/*
    Copyright © 2024, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Traits for pluggable certificate store persistence.
//!
//! The finality layer does not come with its own storage engine. Instead it requires that whatever
//! the user provides as a persistence mechanism implements the abstract functionality of a
//! key-value store with batched writes, as specified by [`KVStore`]. Unlike an in-memory map, a real
//! engine can fail, so every operation returns a [`KVStoreError`] on failure.

use thiserror::Error;

pub trait KVStore: KVGet + Clone + Send + 'static {
    type WriteBatch: WriteBatch;

    /// Apply all of `wb`'s sets and deletes.
    fn write(&mut self, wb: Self::WriteBatch) -> Result<(), KVStoreError>;
}

pub trait KVGet {
    /// Get the value stored at `key`, or `None` if nothing is stored at `key`. A stored zero-length
    /// value is returned as `Some` of an empty vector.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError>;
}

pub trait WriteBatch {
    fn new() -> Self;
    fn set(&mut self, key: &[u8], value: &[u8]);
    fn delete(&mut self, key: &[u8]);
}

/// The underlying storage engine failed.
#[derive(Debug, Error)]
#[error("key-value store failure: {0}")]
pub struct KVStoreError(Box<dyn std::error::Error + Send + Sync>);

impl KVStoreError {
    /// Wrap around the engine-specific error `source`.
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> KVStoreError {
        KVStoreError(source.into())
    }
}
