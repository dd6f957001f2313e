#![no_std]

use soroban_sdk::{contract, contractmeta, Address, BytesN, Env};

use crate::claim::{AssetClaim, ClaimSignature, MintClaim};
use crate::errors::MinterError;
use crate::registry::ClaimState;

contractmeta!(key = "Description", val = "Signed mint claim settlement");

pub mod claim;
mod contract;
pub mod crypto;
pub mod errors;
pub mod events;
pub mod interfaces;
pub mod registry;
mod settle;


#[contract]
pub struct Minter;

pub trait MinterContract {

    fn __constructor(
        e: &Env,
        owner: Address,
        owner_key: BytesN<20>,
        token_transfer_proxy: Address,
        asset_mint_proxy: Address,
    );

    /// Perform a mint claim signed off-chain by the owner.
    ///
    /// Verifies that `sig` was produced by the owner's key over the claim
    /// digest, settles the claimed fees from the recipient through the token
    /// transfer proxy, mints the asset through the mint proxy and records the
    /// claim as performed. The whole operation is atomic: any failure leaves
    /// no fee transfer and no registry change behind.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `caller` - The authenticated submitter. Must equal `claim.to`.
    /// * `claim` - The mint claim (recipient, fees, seed, expiration).
    /// * `asset` - The asset data bound into the signed claim.
    /// * `sig` - The owner's secp256k1 signature over the claim digest.
    ///
    /// # Events
    ///
    /// * `PerformMint { claim, to, asset_id }` on success.
    fn perform_mint(
        e: &Env,
        caller: Address,
        claim: MintClaim,
        asset: AssetClaim,
        sig: ClaimSignature,
    ) -> Result<(), MinterError>;

    /// Cancel a not-yet-performed claim so its signature can never be used.
    ///
    /// Only the owner may cancel. A performed or already canceled claim
    /// cannot be canceled again.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `caller` - The authenticated caller. Must equal the owner.
    /// * `claim` - The mint claim to cancel.
    /// * `asset` - The asset data bound into the signed claim.
    ///
    /// # Events
    ///
    /// * `CancelMint { claim }` on success.
    fn cancel_mint(
        e: &Env,
        caller: Address,
        claim: MintClaim,
        asset: AssetClaim,
    ) -> Result<(), MinterError>;

    /// Compute the digest the owner has to sign to authorize this claim.
    ///
    /// The digest binds this contract instance's address and every claim and
    /// asset field, including the fee list as an ordered sequence, so a
    /// signature is valid for exactly one claim on exactly one deployment.
    fn get_mint_data_claim(e: &Env, claim: MintClaim, asset: AssetClaim) -> BytesN<32>;

    /// Check whether `sig` over `digest` recovers to `signer`.
    ///
    /// `digest` is prefixed as an Ethereum personal message before recovery.
    /// Malformed signatures yield `false`, never an error.
    fn is_valid_signature(
        e: &Env,
        signer: BytesN<20>,
        digest: BytesN<32>,
        sig: ClaimSignature,
    ) -> bool;

    /// Returns the lifecycle state recorded for a claim digest.
    fn get_claim_state(e: &Env, digest: BytesN<32>) -> ClaimState;

    /// Returns the owner account that signs and may cancel claims.
    fn get_owner(e: &Env) -> Address;

    /// Returns the 20-byte address of the owner's secp256k1 signing key.
    fn get_owner_key(e: &Env) -> BytesN<20>;

    /// Returns the address of the token transfer proxy fees settle through.
    fn get_token_transfer_proxy_address(e: &Env) -> Address;

    /// Returns the address of the mint proxy assets are minted through.
    fn get_asset_mint_proxy_address(e: &Env) -> Address;
}
