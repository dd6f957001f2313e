//! Clients for the authorization gateways the minter settles through.
//!
//! The orchestrator only depends on these narrow capabilities, so tests can
//! substitute any contract exporting the same functions.

use soroban_sdk::{contractclient, Address, BytesN, Env, String, Vec, U256};

#[contractclient(name = "TransferProxyClient")]
pub trait TransferProxy {
    /// Move `amount` of `token` from `from` to `to` on behalf of `caller`.
    fn transfer_from(env: Env, caller: Address, token: Address, from: Address, to: Address, amount: i128);
}

#[contractclient(name = "MintProxyClient")]
pub trait MintProxy {
    /// Mint `asset_id` on `asset` to `to` on behalf of `caller`.
    fn mint(
        env: Env,
        caller: Address,
        asset: Address,
        to: Address,
        asset_id: U256,
        proof: BytesN<32>,
        uri: String,
        config: Vec<BytesN<32>>,
        data: Vec<BytesN<32>>,
    );
}
