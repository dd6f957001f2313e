extern crate std;

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error,
    testutils::Address as _, Address, BytesN, Env, String, Vec, U256,
};

use crate::errors::ProxyError;
use crate::{AssetMintProxy, AssetMintProxyClient};

// Minimal asset contract accepting a configurable set of minting identities.

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum MockAssetError {
    MinterNotAccepted = 1,
    AlreadyMinted = 2,
    NonExistentAsset = 3,
}

#[contracttype]
pub enum MockAssetKey {
    Admin,
    Minter(Address),
    Owner(U256),
}

#[contract]
pub struct MockAsset;

#[contractimpl]
impl MockAsset {
    pub fn __constructor(e: &Env, admin: Address) {
        e.storage().instance().set(&MockAssetKey::Admin, &admin);
    }

    pub fn set_minter(e: &Env, minter: Address, accepted: bool) {
        let admin: Address = e.storage().instance().get(&MockAssetKey::Admin).unwrap();
        admin.require_auth();
        if accepted {
            e.storage().persistent().set(&MockAssetKey::Minter(minter), &true);
        } else {
            e.storage().persistent().remove(&MockAssetKey::Minter(minter));
        }
    }

    pub fn mint(
        e: &Env,
        minter: Address,
        to: Address,
        asset_id: U256,
        _proof: BytesN<32>,
        _uri: String,
        _config: Vec<BytesN<32>>,
        _data: Vec<BytesN<32>>,
    ) {
        minter.require_auth();
        let accepted: bool = e
            .storage()
            .persistent()
            .get(&MockAssetKey::Minter(minter))
            .unwrap_or(false);
        if !accepted {
            panic_with_error!(e, MockAssetError::MinterNotAccepted);
        }
        let key = MockAssetKey::Owner(asset_id);
        if e.storage().persistent().has(&key) {
            panic_with_error!(e, MockAssetError::AlreadyMinted);
        }
        e.storage().persistent().set(&key, &to);
    }

    pub fn owner_of(e: &Env, asset_id: U256) -> Address {
        e.storage()
            .persistent()
            .get(&MockAssetKey::Owner(asset_id))
            .unwrap_or_else(|| panic_with_error!(e, MockAssetError::NonExistentAsset))
    }
}

struct Setup<'a> {
    proxy: AssetMintProxyClient<'a>,
    asset: MockAssetClient<'a>,
}

fn setup(e: &Env) -> Setup<'_> {
    let admin = Address::generate(e);
    let proxy_address = e.register(AssetMintProxy, (&admin,));
    let asset_address = e.register(MockAsset, (&admin,));
    Setup {
        proxy: AssetMintProxyClient::new(e, &proxy_address),
        asset: MockAssetClient::new(e, &asset_address),
    }
}

fn mint_args(e: &Env) -> (U256, BytesN<32>, String, Vec<BytesN<32>>, Vec<BytesN<32>>) {
    (
        U256::from_u32(e, 7),
        BytesN::from_array(e, &[0x1e; 32]),
        String::from_str(e, "www.test.com"),
        Vec::new(e),
        Vec::new(e),
    )
}

#[test]
fn mints_for_authorized_caller() {
    let e = Env::default();
    e.mock_all_auths();

    let s = setup(&e);
    let operator = Address::generate(&e);
    let to = Address::generate(&e);
    let (asset_id, proof, uri, config, data) = mint_args(&e);

    s.proxy.add_authorized_address(&operator);
    s.asset.set_minter(&s.proxy.address, &true);

    s.proxy.mint(&operator, &s.asset.address, &to, &asset_id, &proof, &uri, &config, &data);

    assert_eq!(s.asset.owner_of(&asset_id), to);
}

#[test]
fn rejects_unauthorized_caller() {
    let e = Env::default();
    e.mock_all_auths();

    let s = setup(&e);
    let outsider = Address::generate(&e);
    let to = Address::generate(&e);
    let (asset_id, proof, uri, config, data) = mint_args(&e);

    s.asset.set_minter(&s.proxy.address, &true);

    assert_eq!(
        s.proxy
            .try_mint(&outsider, &s.asset.address, &to, &asset_id, &proof, &uri, &config, &data),
        Err(Ok(ProxyError::NotAuthorized))
    );
}

#[test]
fn fails_when_asset_does_not_accept_proxy() {
    let e = Env::default();
    e.mock_all_auths();

    let s = setup(&e);
    let operator = Address::generate(&e);
    let to = Address::generate(&e);
    let (asset_id, proof, uri, config, data) = mint_args(&e);

    s.proxy.add_authorized_address(&operator);

    assert!(s
        .proxy
        .try_mint(&operator, &s.asset.address, &to, &asset_id, &proof, &uri, &config, &data)
        .is_err());
}

#[test]
fn manages_authorized_addresses() {
    let e = Env::default();
    e.mock_all_auths();

    let s = setup(&e);
    let operator = Address::generate(&e);

    assert!(!s.proxy.is_authorized(&operator));
    s.proxy.add_authorized_address(&operator);
    assert!(s.proxy.is_authorized(&operator));
    assert_eq!(
        s.proxy.try_add_authorized_address(&operator),
        Err(Ok(ProxyError::TargetAlreadyAuthorized))
    );
    s.proxy.remove_authorized_address(&operator);
    assert!(!s.proxy.is_authorized(&operator));
}
