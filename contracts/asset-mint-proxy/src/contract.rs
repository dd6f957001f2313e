//! Mint proxy - mints on asset contracts for authorized callers

use soroban_sdk::{contractclient, contractimpl, contracttype, Address, BytesN, Env, String, Vec, U256};

use crate::errors::ProxyError;
use crate::{events, AssetMintProxy, AssetMintProxyArgs, AssetMintProxyClient, MintProxyContract};

#[contracttype]
pub enum DataKey {
    Admin,
    Authorized(Address),
}

/// The mint capability expected from asset contracts.
#[contractclient(name = "AssetClient")]
pub trait Asset {
    fn mint(
        env: Env,
        minter: Address,
        to: Address,
        asset_id: U256,
        proof: BytesN<32>,
        uri: String,
        config: Vec<BytesN<32>>,
        data: Vec<BytesN<32>>,
    );
}

#[contractimpl]
impl MintProxyContract for AssetMintProxy {

    fn __constructor(e: &Env, admin: Address) {
        e.storage().instance().set(&DataKey::Admin, &admin);
    }

    fn add_authorized_address(e: &Env, target: Address) -> Result<(), ProxyError> {
        require_admin(e);
        if authorized(e, &target) {
            return Err(ProxyError::TargetAlreadyAuthorized);
        }
        e.storage()
            .persistent()
            .set(&DataKey::Authorized(target.clone()), &true);
        events::AuthorizedAddressAdded { target }.publish(e);
        Ok(())
    }

    fn remove_authorized_address(e: &Env, target: Address) -> Result<(), ProxyError> {
        require_admin(e);
        if !authorized(e, &target) {
            return Err(ProxyError::TargetNotAuthorized);
        }
        e.storage()
            .persistent()
            .remove(&DataKey::Authorized(target.clone()));
        events::AuthorizedAddressRemoved { target }.publish(e);
        Ok(())
    }

    fn is_authorized(e: &Env, target: Address) -> bool {
        authorized(e, &target)
    }

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
    ) -> Result<(), ProxyError> {
        caller.require_auth();
        if !authorized(e, &caller) {
            return Err(ProxyError::NotAuthorized);
        }
        AssetClient::new(e, &asset).mint(
            &e.current_contract_address(),
            &to,
            &asset_id,
            &proof,
            &uri,
            &config,
            &data,
        );
        Ok(())
    }
}

fn require_admin(e: &Env) {
    let admin: Address = e.storage().instance().get(&DataKey::Admin).unwrap();
    admin.require_auth();
}

fn authorized(e: &Env, target: &Address) -> bool {
    e.storage()
        .persistent()
        .get(&DataKey::Authorized(target.clone()))
        .unwrap_or(false)
}
