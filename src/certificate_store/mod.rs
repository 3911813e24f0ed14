/*
    Copyright © 2024, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Persistent storage of finality certificates.
//!
//! # Namespaces
//!
//! Certificates live in two disjoint namespaces of one user-provided [key-value store](pluggables),
//! one for the validator lists of cycles and one for blocks. The layout is documented in
//! [`variables`].
//!
//! # Stored values
//!
//! Certificate bytes are written and read as they are, without re-encoding. A certificate with zero
//! bytes is "present but empty": [`get`](FinalityCertificateStore::get) returns it and
//! [`has`](FinalityCertificateStore::has) returns `true`. Only a key that was never written (or was
//! deleted) is absent.
//!
//! # Writes
//!
//! Writing a certificate for an index that already has one replaces it (last write wins). Store
//! handles are cheap to clone if the underlying [`KVStore`] is, so several threads may each hold a
//! handle.

pub mod pluggables;

pub mod variables;

use std::{
    fmt::{self, Display, Formatter},
    time::SystemTime,
};

use thiserror::Error;

use crate::{
    events::{DeleteCertificateEvent, PutCertificateEvent},
    finality::certificate::FinalityCertificate,
    logging::log_event,
    types::data_types::{BlockNumber, Cycle},
};

use self::pluggables::{KVStore, KVStoreError, WriteBatch};

/// Stores [`FinalityCertificate`]s in a [`KVStore`].
#[derive(Clone)]
pub struct FinalityCertificateStore<K: KVStore> {
    kv_store: K,
    log_events: bool,
}

impl<K: KVStore> FinalityCertificateStore<K> {
    pub fn new(kv_store: K, log_events: bool) -> Self {
        Self {
            kv_store,
            log_events,
        }
    }

    /* ↓↓↓ Epoch certificates ↓↓↓ */

    pub fn put_epoch_certificate(
        &mut self,
        cycle: Cycle,
        certificate: &FinalityCertificate,
    ) -> Result<(), StoreIOError> {
        self.put_at(Key::EpochCertificate { cycle }, certificate)
    }

    pub fn get_epoch_certificate(
        &self,
        cycle: Cycle,
    ) -> Result<Option<FinalityCertificate>, StoreIOError> {
        self.get_at(Key::EpochCertificate { cycle })
    }

    /* ↓↓↓ Block certificates ↓↓↓ */

    pub fn put_block_certificate(
        &mut self,
        block_num: BlockNumber,
        certificate: &FinalityCertificate,
    ) -> Result<(), StoreIOError> {
        self.put_at(Key::BlockCertificate { block_num }, certificate)
    }

    pub fn get_block_certificate(
        &self,
        block_num: BlockNumber,
    ) -> Result<Option<FinalityCertificate>, StoreIOError> {
        self.get_at(Key::BlockCertificate { block_num })
    }

    /* ↓↓↓ Raw keys ↓↓↓ */

    /// Write `certificate` at the raw `key`.
    pub fn put(&mut self, key: &[u8], certificate: &FinalityCertificate) -> Result<(), StoreIOError> {
        self.put_at(Key::Raw(key.to_vec()), certificate)
    }

    /// Read the certificate at the raw `key`.
    pub fn get(&self, key: &[u8]) -> Result<Option<FinalityCertificate>, StoreIOError> {
        self.get_at(Key::Raw(key.to_vec()))
    }

    /// Delete whatever is stored at the raw `key`. Deleting an absent key is not an error.
    pub fn delete(&mut self, key: &[u8]) -> Result<(), StoreIOError> {
        let key = Key::Raw(key.to_vec());
        let mut wb = K::WriteBatch::new();
        wb.delete(&key.bytes());
        self.kv_store
            .write(wb)
            .map_err(|source| StoreIOError::Write {
                key: key.clone(),
                source,
            })?;

        if self.log_events {
            log_event(&DeleteCertificateEvent {
                timestamp: SystemTime::now(),
                key,
            })
        }
        Ok(())
    }

    /// Check whether a value is retrievable at the raw `key`.
    pub fn has(&self, key: &[u8]) -> Result<bool, StoreIOError> {
        Ok(self.get(key)?.is_some())
    }

    fn put_at(&mut self, key: Key, certificate: &FinalityCertificate) -> Result<(), StoreIOError> {
        let mut wb = K::WriteBatch::new();
        wb.set(&key.bytes(), certificate.bytes());
        self.kv_store
            .write(wb)
            .map_err(|source| StoreIOError::Write {
                key: key.clone(),
                source,
            })?;

        if self.log_events {
            log_event(&PutCertificateEvent {
                timestamp: SystemTime::now(),
                key,
                len: certificate.bytes().len(),
            })
        }
        Ok(())
    }

    fn get_at(&self, key: Key) -> Result<Option<FinalityCertificate>, StoreIOError> {
        match self.kv_store.get(&key.bytes()) {
            Ok(value) => Ok(value.map(FinalityCertificate::from_bytes)),
            Err(source) => Err(StoreIOError::Read { key, source }),
        }
    }
}

/// A location in the certificate store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    EpochCertificate { cycle: Cycle },
    BlockCertificate { block_num: BlockNumber },
    Raw(Vec<u8>),
}

impl Key {
    /// Get the bytes of the key in the underlying key-value store.
    pub fn bytes(&self) -> Vec<u8> {
        match self {
            Key::EpochCertificate { cycle } => variables::epoch_certificate_key(*cycle),
            Key::BlockCertificate { block_num } => variables::block_certificate_key(*block_num),
            Key::Raw(bytes) => bytes.clone(),
        }
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Key::EpochCertificate { cycle } => write!(f, "Epoch certificate for cycle {}", cycle),
            Key::BlockCertificate { block_num } => {
                write!(f, "Block certificate for block {}", block_num)
            }
            Key::Raw(bytes) => write!(f, "Raw key {}", hex::encode(bytes)),
        }
    }
}

/// The key-value store failed while reading or writing a certificate. Retrying is up to the caller.
#[derive(Debug, Error)]
pub enum StoreIOError {
    #[error("failed to read {key}: {source}")]
    Read {
        key: Key,
        #[source]
        source: KVStoreError,
    },

    #[error("failed to write {key}: {source}")]
    Write {
        key: Key,
        #[source]
        source: KVStoreError,
    },
}
