#![no_std]

use soroban_sdk::{contract, contractmeta, Address, BytesN, Env, String, Vec, U256};

use crate::errors::ProxyError;

contractmeta!(key = "Description", val = "Asset mint authorization gateway");

mod contract;
pub mod errors;
pub mod events;

#[cfg(test)]
mod test;

#[contract]
pub struct AssetMintProxy;

pub trait MintProxyContract {

    fn __constructor(e: &Env, admin: Address);

    /// Grant `target` the right to mint through the proxy.
    ///
    /// Only the admin may call this. Fails if `target` is already
    /// authorized.
    ///
    /// # Events
    ///
    /// * `AuthorizedAddressAdded { target }`
    fn add_authorized_address(e: &Env, target: Address) -> Result<(), ProxyError>;

    /// Revoke `target`'s right to mint through the proxy.
    ///
    /// Only the admin may call this. Fails if `target` is not authorized.
    ///
    /// # Events
    ///
    /// * `AuthorizedAddressRemoved { target }`
    fn remove_authorized_address(e: &Env, target: Address) -> Result<(), ProxyError>;

    /// Returns whether `target` may mint through the proxy.
    fn is_authorized(e: &Env, target: Address) -> bool;

    /// Mint `asset_id` on the `asset` contract to `to` on behalf of `caller`.
    ///
    /// `caller` must be an authorized address and the asset contract must
    /// accept this proxy as a minting identity.
    fn mint(
        e: &Env,
        caller: Address,
        asset: Address,
        to: Address,
        asset_id: U256,
        proof: BytesN<32>,
        uri: String,
        config: Vec<BytesN<32>>,
        data: Vec<BytesN<32>>,
    ) -> Result<(), ProxyError>;
}
