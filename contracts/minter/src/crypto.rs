//! Ethereum-style secp256k1 signature recovery.

use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use soroban_sdk::{Bytes, BytesN, Env};

use crate::claim::ClaimSignature;

const PERSONAL_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// The hash wallets actually sign: the digest wrapped as a personal message.
pub fn personal_message_hash(e: &Env, digest: &BytesN<32>) -> BytesN<32> {
    let mut msg = Bytes::from_slice(e, PERSONAL_MESSAGE_PREFIX);
    msg.append(&Bytes::from_array(e, &digest.to_array()));
    e.crypto().keccak256(&msg).into()
}

/// Check whether `sig` over `digest` recovers to the 20-byte `signer`.
///
/// This is a boolean query, not a validating parser: unknown recovery ids,
/// zero or out-of-range scalars, non-canonical high-s values and points that
/// do not exist on the curve all yield `false`.
pub fn is_valid(e: &Env, signer: &BytesN<20>, digest: &BytesN<32>, sig: &ClaimSignature) -> bool {
    let recovery = match sig.v {
        0 | 27 => 0u8,
        1 | 28 => 1u8,
        _ => return false,
    };
    let recovery_id = match RecoveryId::from_byte(recovery) {
        Some(id) => id,
        None => return false,
    };
    let parsed = match Signature::from_scalars(sig.r.to_array(), sig.s.to_array()) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };
    if parsed.normalize_s().is_some() {
        // Canonical low-s form only.
        return false;
    }
    let prehash = personal_message_hash(e, digest).to_array();
    let key = match VerifyingKey::recover_from_prehash(&prehash, &parsed, recovery_id) {
        Ok(key) => key,
        Err(_) => return false,
    };
    evm_address(e, &key) == *signer
}

/// 20-byte address of a public key: keccak256 of the uncompressed point
/// without its tag byte, last 20 bytes.
pub fn evm_address(e: &Env, key: &VerifyingKey) -> BytesN<20> {
    let point = key.to_encoded_point(false);
    let uncompressed = Bytes::from_slice(e, &point.as_bytes()[1..]);
    let hash: BytesN<32> = e.crypto().keccak256(&uncompressed).into();
    let mut out = [0u8; 20];
    out.copy_from_slice(&hash.to_array()[12..]);
    BytesN::from_array(e, &out)
}
