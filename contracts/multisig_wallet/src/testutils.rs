#![cfg(test)]

use soroban_sdk::{
    contract, contractimpl, contracttype, testutils::Address as _, token, vec, Address, Env, Vec,
};

use crate::{MultiSigWallet, MultiSigWalletClient};

#[contracttype]
#[derive(Clone)]
enum NftKey {
    Owner(u32),
    Approved(u32),
    Operator(Address, Address),
}

/// Minimal non-fungible token with the approval model the wallet expects.
#[contract]
pub struct MockNft;

#[contractimpl]
impl MockNft {
    pub fn mint(env: Env, to: Address, token_id: u32) {
        if env.storage().persistent().has(&NftKey::Owner(token_id)) {
            panic!("token already minted");
        }
        env.storage().persistent().set(&NftKey::Owner(token_id), &to);
    }

    pub fn owner_of(env: Env, token_id: u32) -> Address {
        env.storage()
            .persistent()
            .get(&NftKey::Owner(token_id))
            .expect("nonexistent token")
    }

    pub fn get_approved(env: Env, token_id: u32) -> Option<Address> {
        env.storage().persistent().get(&NftKey::Approved(token_id))
    }

    pub fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        env.storage()
            .persistent()
            .get(&NftKey::Operator(owner, operator))
            .unwrap_or(false)
    }

    pub fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();
        env.storage()
            .persistent()
            .set(&NftKey::Operator(owner, operator), &approved);
    }

    pub fn approve(env: Env, approver: Address, approved: Address, token_id: u32) {
        approver.require_auth();
        let owner = Self::owner_of(env.clone(), token_id);
        if approver != owner && !Self::is_approved_for_all(env.clone(), owner, approver) {
            panic!("approver is not owner nor operator");
        }
        env.storage()
            .persistent()
            .set(&NftKey::Approved(token_id), &approved);
    }

    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u32) {
        spender.require_auth();
        let owner = Self::owner_of(env.clone(), token_id);
        if owner != from {
            panic!("from is not the owner");
        }
        let allowed = spender == owner
            || Self::get_approved(env.clone(), token_id) == Some(spender.clone())
            || Self::is_approved_for_all(env.clone(), owner, spender);
        if !allowed {
            panic!("spender is not approved");
        }
        env.storage().persistent().remove(&NftKey::Approved(token_id));
        env.storage().persistent().set(&NftKey::Owner(token_id), &to);
    }
}

pub struct WalletTest<'a> {
    pub env: Env,
    pub wallet: MultiSigWalletClient<'a>,
    pub owners: Vec<Address>,
    pub outsider: Address,
    pub native: token::TokenClient<'a>,
    pub native_admin: token::StellarAssetClient<'a>,
}

impl<'a> WalletTest<'a> {
    /// Three owners, two approvals required, outsider is the usual recipient.
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let owners = vec![
            &env,
            Address::generate(&env),
            Address::generate(&env),
            Address::generate(&env),
        ];
        let outsider = Address::generate(&env);

        let (native, native_admin) = create_token(&env);
        let wallet = create_wallet(&env, &owners, 2, &native.address);

        WalletTest {
            env,
            wallet,
            owners,
            outsider,
            native,
            native_admin,
        }
    }

    pub fn owner(&self, i: u32) -> Address {
        self.owners.get_unchecked(i)
    }

    pub fn approve_by(&self, class: crate::AssetClass, index: u32, count: u32) {
        for i in 0..count {
            self.wallet.approve(&self.owner(i), &class, &index);
        }
    }
}

pub fn create_wallet<'a>(
    env: &Env,
    owners: &Vec<Address>,
    required_approvals: u32,
    native_asset: &Address,
) -> MultiSigWalletClient<'a> {
    let contract_id = env.register(MultiSigWallet, ());
    let client = MultiSigWalletClient::new(env, &contract_id);
    client.initialize(owners, &required_approvals, native_asset);
    client
}

pub fn create_token<'a>(env: &Env) -> (token::TokenClient<'a>, token::StellarAssetClient<'a>) {
    let admin = Address::generate(env);
    let sac = env.register_stellar_asset_contract_v2(admin);
    (
        token::TokenClient::new(env, &sac.address()),
        token::StellarAssetClient::new(env, &sac.address()),
    )
}

pub fn create_nft<'a>(env: &Env) -> MockNftClient<'a> {
    let contract_id = env.register(MockNft, ());
    MockNftClient::new(env, &contract_id)
}
