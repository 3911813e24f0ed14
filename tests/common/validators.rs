//! A cluster of local validators sharing one validator set, for driving votes through the crate.

use pbft_finality::{
    context::FinalityContext,
    types::{
        crypto_primitives::{Keypair, SigningKey},
        validator_set::ValidatorSet,
    },
};
use rand::rngs::OsRng;

/// Generate `n` random keypairs.
pub(crate) fn keypairs(n: usize) -> Vec<Keypair> {
    (0..n)
        .map(|_| Keypair::new(SigningKey::random(&mut OsRng)))
        .collect()
}

/// Collect the addresses of `keypairs` into a validator set.
pub(crate) fn validator_set_of(keypairs: &[Keypair]) -> ValidatorSet {
    keypairs.iter().map(Keypair::address).collect()
}

/// Create one context per keypair, all with the same current validator set made of every keypair.
pub(crate) fn cluster(keypairs: &[Keypair]) -> Vec<FinalityContext> {
    let validator_set = validator_set_of(keypairs);
    keypairs
        .iter()
        .map(|keypair| {
            FinalityContext::builder()
                .me(keypair.clone())
                .validator_set(validator_set.clone())
                .build()
        })
        .collect()
}

/// A context for `keypair` whose validator set does not include `keypair` itself, i.e. an observer.
pub(crate) fn observer(keypair: Keypair, validator_set: ValidatorSet) -> FinalityContext {
    FinalityContext::builder()
        .me(keypair)
        .validator_set(validator_set)
        .log_events(false)
        .build()
}
