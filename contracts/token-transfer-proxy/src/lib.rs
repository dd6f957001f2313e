#![no_std]

use soroban_sdk::{contract, contractmeta, Address, Env};

use crate::errors::ProxyError;

contractmeta!(key = "Description", val = "Token transfer authorization gateway");

mod contract;
pub mod errors;
pub mod events;


#[contract]
pub struct TokenTransferProxy;

pub trait TransferProxyContract {

    fn __constructor(e: &Env, admin: Address);

    /// Grant `target` the right to route transfers through the proxy.
    ///
    /// Only the admin may call this. Fails if `target` is already
    /// authorized.
    ///
    /// # Events
    ///
    /// * `AuthorizedAddressAdded { target }`
    fn add_authorized_address(e: &Env, target: Address) -> Result<(), ProxyError>;

    /// Revoke `target`'s right to route transfers through the proxy.
    ///
    /// Only the admin may call this. Fails if `target` is not authorized.
    ///
    /// # Events
    ///
    /// * `AuthorizedAddressRemoved { target }`
    fn remove_authorized_address(e: &Env, target: Address) -> Result<(), ProxyError>;

    /// Returns whether `target` may route transfers through the proxy.
    fn is_authorized(e: &Env, target: Address) -> bool;

    /// Move `amount` of `token` from `from` to `to` on behalf of `caller`.
    ///
    /// `caller` must be an authorized address and `from` must have approved
    /// this proxy for at least `amount` on the token contract.
    fn transfer_from(
        e: &Env,
        caller: Address,
        token: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ProxyError>;
}
