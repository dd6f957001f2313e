//! Minter - signed mint claim settlement

use soroban_sdk::{contractimpl, contracttype, Address, BytesN, Env};

use crate::claim::{claim_digest, AssetClaim, ClaimSignature, MintClaim};
use crate::errors::MinterError;
use crate::interfaces::MintProxyClient;
use crate::registry::{self, ClaimState};
use crate::{crypto, events, settle, Minter, MinterArgs, MinterClient, MinterContract};

#[contracttype]
pub enum DataKey {
    Owner,
    OwnerKey,
    TokenTransferProxy,
    AssetMintProxy,
}

#[contractimpl]
impl MinterContract for Minter {

    fn __constructor(
        e: &Env,
        owner: Address,
        owner_key: BytesN<20>,
        token_transfer_proxy: Address,
        asset_mint_proxy: Address,
    ) {
        e.storage().instance().set(&DataKey::Owner, &owner);
        e.storage().instance().set(&DataKey::OwnerKey, &owner_key);
        e.storage()
            .instance()
            .set(&DataKey::TokenTransferProxy, &token_transfer_proxy);
        e.storage()
            .instance()
            .set(&DataKey::AssetMintProxy, &asset_mint_proxy);
    }

    fn perform_mint(
        e: &Env,
        caller: Address,
        claim: MintClaim,
        asset: AssetClaim,
        sig: ClaimSignature,
    ) -> Result<(), MinterError> {
        caller.require_auth();

        let digest = claim_digest(e, &claim, &asset);

        if e.ledger().timestamp() >= claim.expiration {
            return Err(MinterError::ClaimExpired);
        }
        if claim.to == read_owner(e) {
            return Err(MinterError::SelfMint);
        }
        if caller != claim.to {
            return Err(MinterError::Forbidden);
        }
        if !crypto::is_valid(e, &read_owner_key(e), &digest, &sig) {
            return Err(MinterError::InvalidSignature);
        }
        if registry::state(e, &digest) != ClaimState::Unset {
            return Err(MinterError::AlreadySettled);
        }
        if claim.fee_recipients.len() != claim.fee_amounts.len()
            || claim.fee_recipients.len() != claim.fee_tokens.len()
        {
            return Err(MinterError::FeeCountMismatch);
        }

        settle::settle(e, &claim.to, &claim, &read_transfer_proxy(e))?;

        let _ = MintProxyClient::new(e, &read_mint_proxy(e))
            .try_mint(
                &e.current_contract_address(),
                &asset.asset,
                &claim.to,
                &asset.asset_id,
                &asset.proof,
                &asset.uri,
                &asset.config,
                &asset.data,
            )
            .map_err(|_| MinterError::MintCapabilityDenied)?;

        registry::mark_performed(e, &digest)?;

        events::PerformMint {
            claim: digest,
            to: claim.to,
            asset_id: asset.asset_id,
        }
        .publish(e);
        Ok(())
    }

    fn cancel_mint(
        e: &Env,
        caller: Address,
        claim: MintClaim,
        asset: AssetClaim,
    ) -> Result<(), MinterError> {
        caller.require_auth();

        if caller != read_owner(e) {
            return Err(MinterError::Forbidden);
        }
        let digest = claim_digest(e, &claim, &asset);
        if registry::state(e, &digest) != ClaimState::Unset {
            return Err(MinterError::AlreadySettled);
        }
        registry::mark_canceled(e, &digest)?;

        events::CancelMint { claim: digest }.publish(e);
        Ok(())
    }

    fn get_mint_data_claim(e: &Env, claim: MintClaim, asset: AssetClaim) -> BytesN<32> {
        claim_digest(e, &claim, &asset)
    }

    fn is_valid_signature(
        e: &Env,
        signer: BytesN<20>,
        digest: BytesN<32>,
        sig: ClaimSignature,
    ) -> bool {
        crypto::is_valid(e, &signer, &digest, &sig)
    }

    fn get_claim_state(e: &Env, digest: BytesN<32>) -> ClaimState {
        registry::state(e, &digest)
    }

    fn get_owner(e: &Env) -> Address {
        read_owner(e)
    }

    fn get_owner_key(e: &Env) -> BytesN<20> {
        read_owner_key(e)
    }

    fn get_token_transfer_proxy_address(e: &Env) -> Address {
        read_transfer_proxy(e)
    }

    fn get_asset_mint_proxy_address(e: &Env) -> Address {
        read_mint_proxy(e)
    }
}

// Instance configuration, all set once by the constructor.

fn read_owner(e: &Env) -> Address {
    e.storage().instance().get(&DataKey::Owner).unwrap()
}

fn read_owner_key(e: &Env) -> BytesN<20> {
    e.storage().instance().get(&DataKey::OwnerKey).unwrap()
}

fn read_transfer_proxy(e: &Env) -> Address {
    e.storage().instance().get(&DataKey::TokenTransferProxy).unwrap()
}

fn read_mint_proxy(e: &Env) -> Address {
    e.storage().instance().get(&DataKey::AssetMintProxy).unwrap()
}
