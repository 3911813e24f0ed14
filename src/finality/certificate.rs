/*
    Copyright © 2024, ParallelChain Lab
    Licensed under the Apache License, Version 2.0: http://www.apache.org/licenses/LICENSE-2.0
*/

//! Finality certificates: persisted evidence that a quorum of validators committed to some data.
//!
//! A certificate is made of the data signatures of matching Commit votes. Anyone holding the
//! validator set that voted can check it with [`FinalityCertificate::is_correct`], without access
//! to the votes themselves.

use std::collections::HashSet;

use borsh::{BorshDeserialize, BorshSerialize};
use thiserror::Error;

use crate::types::{
    crypto_primitives::{hash, recover_address},
    data_types::{Address, SignatureBytes},
    validator_set::ValidatorSet,
};

use super::{
    keys::DataKey,
    messages::{DecodeError, FinalityMessage, MsgType, VEC_WRITE_INFALLIBLE},
};

/// The decoded content of a [`FinalityCertificate`].
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct CertificateContents {
    /// The data that was finalized.
    pub data: Vec<u8>,

    /// Data signatures of the committing validators, one per validator.
    pub signatures: Vec<SignatureBytes>,
}

/// A finality certificate, kept as the exact bytes it was created with or read from storage as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalityCertificate {
    bytes: Vec<u8>,
}

impl FinalityCertificate {
    /// Aggregate `commits` into a certificate.
    ///
    /// All of `commits` must be Commit votes with the same [`DataKey`]. If a validator appears more
    /// than once, only its first commit is used. The caller is responsible for having
    /// [validated](super::verifier::validate) the commits and for there being a quorum of them.
    pub fn from_commits(commits: &[FinalityMessage]) -> Result<FinalityCertificate, CertificateError> {
        let first = commits.first().ok_or(CertificateError::NoCommits)?;
        let data_key = first.data_key();

        let mut voters = HashSet::new();
        let mut signatures = Vec::with_capacity(commits.len());
        for commit in commits {
            if commit.msg_type() != MsgType::Commit {
                return Err(CertificateError::NotACommit {
                    voter: commit.public_key(),
                });
            }
            if commit.data_key() != data_key {
                return Err(CertificateError::DataMismatch {
                    voter: commit.public_key(),
                    expected: data_key,
                });
            }
            if voters.insert(commit.public_key()) {
                signatures.push(commit.raw().data_signature.clone());
            }
        }

        let contents = CertificateContents {
            data: first.data().to_vec(),
            signatures,
        };
        Ok(FinalityCertificate::from_contents(&contents))
    }

    /// Encode `contents` into a certificate.
    pub fn from_contents(contents: &CertificateContents) -> FinalityCertificate {
        FinalityCertificate {
            bytes: contents.try_to_vec().expect(VEC_WRITE_INFALLIBLE),
        }
    }

    /// Wrap around `bytes` as they are. They are only decoded on [`contents`](Self::contents).
    pub fn from_bytes(bytes: Vec<u8>) -> FinalityCertificate {
        FinalityCertificate { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn contents(&self) -> Result<CertificateContents, DecodeError> {
        CertificateContents::try_from_slice(&self.bytes).map_err(|source| DecodeError::Malformed {
            what: "finality certificate",
            source,
        })
    }

    /// Get the distinct members of `validator_set` whose signatures over the certified data are in
    /// this certificate. Signatures that are malformed or from non-members are skipped.
    pub fn signers(&self, validator_set: &ValidatorSet) -> Result<Vec<Address>, DecodeError> {
        let contents = self.contents()?;
        let data_hash = hash(&contents.data);

        let mut signers = Vec::new();
        for signature in &contents.signatures {
            if let Ok(Some(signer)) = recover_address(&data_hash, signature) {
                if validator_set.contains(&signer) && !signers.contains(&signer) {
                    signers.push(signer);
                }
            }
        }
        Ok(signers)
    }

    /// Check whether at least a [quorum](ValidatorSet::quorum) of `validator_set` signed the
    /// certified data.
    pub fn is_correct(&self, validator_set: &ValidatorSet) -> Result<bool, DecodeError> {
        Ok(self.signers(validator_set)?.len() >= validator_set.quorum())
    }
}

/// Commits could not be aggregated into a certificate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CertificateError {
    #[error("no commits to aggregate")]
    NoCommits,

    #[error("vote from {voter} is not a commit")]
    NotACommit { voter: Address },

    #[error("commit from {voter} does not match data key {expected}")]
    DataMismatch { voter: Address, expected: DataKey },
}
