//! Transfer proxy - acts on token allowances for authorized callers

use soroban_sdk::{contractimpl, contracttype, token, Address, Env};

use crate::errors::ProxyError;
use crate::{events, TokenTransferProxy, TokenTransferProxyArgs, TokenTransferProxyClient, TransferProxyContract};

#[contracttype]
pub enum DataKey {
    Admin,
    Authorized(Address),
}

#[contractimpl]
impl TransferProxyContract for TokenTransferProxy {

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

    fn transfer_from(
        e: &Env,
        caller: Address,
        token: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ProxyError> {
        caller.require_auth();
        if !authorized(e, &caller) {
            return Err(ProxyError::NotAuthorized);
        }
        token::TokenClient::new(e, &token).transfer_from(
            &e.current_contract_address(),
            &from,
            &to,
            &amount,
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
