//! Mint claim values and their digest.

use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{contracttype, Address, Bytes, BytesN, Env, String, Vec, U256};

/// An off-chain-signed authorization to mint an asset and pay fees.
///
/// The fee list is carried as three parallel sequences; entry `i` of each
/// forms one `(recipient, amount, token)` fee. Order is significant: it is
/// part of the digest and of the settlement order.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintClaim {
    pub to: Address,
    pub fee_recipients: Vec<Address>,
    pub fee_amounts: Vec<i128>,
    pub fee_tokens: Vec<Address>,
    /// Nonce distinguishing otherwise-identical claims.
    pub seed: U256,
    /// Unix timestamp; the claim is not performable at or after this time.
    pub expiration: u64,
}

/// The asset data bound into a signed claim and passed through to the mint.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetClaim {
    pub asset: Address,
    pub asset_id: U256,
    pub proof: BytesN<32>,
    pub uri: String,
    pub config: Vec<BytesN<32>>,
    pub data: Vec<BytesN<32>>,
}

/// A secp256k1 signature over a claim digest.
///
/// `v` is the recovery id, either 0/1 or the Ethereum-conventional 27/28.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimSignature {
    pub r: BytesN<32>,
    pub s: BytesN<32>,
    pub v: u32,
}

/// Digest identifying one claim on this contract instance.
///
/// Binds the settling contract's own address (no replay across deployments)
/// and every claim and asset field in canonical order, then keccak256.
pub fn claim_digest(e: &Env, claim: &MintClaim, asset: &AssetClaim) -> BytesN<32> {
    let mut buf = Bytes::new(e);
    buf.append(&e.current_contract_address().to_xdr(e));
    buf.append(&claim.to.clone().to_xdr(e));
    buf.append(&asset.asset.clone().to_xdr(e));
    buf.append(&asset.asset_id.clone().to_xdr(e));
    buf.append(&asset.proof.clone().to_xdr(e));
    buf.append(&asset.uri.clone().to_xdr(e));
    buf.append(&asset.config.clone().to_xdr(e));
    buf.append(&asset.data.clone().to_xdr(e));
    buf.append(&claim.fee_recipients.clone().to_xdr(e));
    buf.append(&claim.fee_amounts.clone().to_xdr(e));
    buf.append(&claim.fee_tokens.clone().to_xdr(e));
    buf.append(&claim.seed.clone().to_xdr(e));
    buf.append(&claim.expiration.to_xdr(e));
    e.crypto().keccak256(&buf).into()
}
