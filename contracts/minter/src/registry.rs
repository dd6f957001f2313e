//! Per-digest claim lifecycle state.

use soroban_sdk::{contracttype, BytesN, Env};

use crate::errors::MinterError;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClaimState {
    Unset,
    Performed,
    Canceled,
}

#[contracttype]
pub enum ClaimKey {
    State(BytesN<32>),
}

pub fn state(e: &Env, digest: &BytesN<32>) -> ClaimState {
    e.storage()
        .persistent()
        .get(&ClaimKey::State(digest.clone()))
        .unwrap_or(ClaimState::Unset)
}

pub fn mark_performed(e: &Env, digest: &BytesN<32>) -> Result<(), MinterError> {
    transition(e, digest, ClaimState::Performed)
}

pub fn mark_canceled(e: &Env, digest: &BytesN<32>) -> Result<(), MinterError> {
    transition(e, digest, ClaimState::Canceled)
}

// One-shot transition out of Unset. State is re-checked here at mutation
// time, not only by the orchestrator's earlier lookup.
fn transition(e: &Env, digest: &BytesN<32>, next: ClaimState) -> Result<(), MinterError> {
    let key = ClaimKey::State(digest.clone());
    if e.storage().persistent().get::<ClaimKey, ClaimState>(&key).is_some() {
        return Err(MinterError::AlreadySettled);
    }
    e.storage().persistent().set(&key, &next);
    Ok(())
}
