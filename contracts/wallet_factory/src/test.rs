#![cfg(test)]
extern crate std;

use super::*;
use soroban_sdk::{
    contractclient, testutils::Address as _, testutils::Events as _, vec, Address, Bytes, BytesN,
    Env, IntoVal, Symbol, Vec,
};

const WALLET_WASM_PATHS: [&str; 2] = [
    concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../target/wasm32v1-none/release/multisig_wallet.wasm"
    ),
    concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../target/wasm32-unknown-unknown/release/multisig_wallet.wasm"
    ),
];

/// Read-side of a deployed wallet.
#[contractclient(name = "DeployedWalletClient")]
pub trait DeployedWallet {
    fn owner_count(env: Env) -> u32;
    fn required_approvals(env: Env) -> u32;
    fn is_owner(env: Env, id: Address) -> bool;
    fn native_asset(env: Env) -> Address;
}

fn create_factory<'a>(env: &Env) -> WalletFactoryClient<'a> {
    let contract_id = env.register(WalletFactory, ());
    WalletFactoryClient::new(env, &contract_id)
}

fn dummy_hash(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &[7u8; 32])
}

// Uploads the wallet built by `make build`.
fn upload_wallet_wasm(env: &Env) -> BytesN<32> {
    let wasm = WALLET_WASM_PATHS
        .iter()
        .find_map(|path| std::fs::read(path).ok())
        .unwrap_or_else(|| {
            panic!("multisig_wallet.wasm not found; run `make build` before testing the factory")
        });
    env.deployer()
        .upload_contract_wasm(Bytes::from_slice(env, &wasm))
}

fn create_deploying_factory<'a>(env: &Env) -> WalletFactoryClient<'a> {
    let factory = create_factory(env);
    factory.initialize(&upload_wallet_wasm(env));
    factory
}

fn create_owners(env: &Env, count: u32) -> Vec<Address> {
    let mut owners = Vec::new(env);
    for _ in 0..count {
        owners.push_back(Address::generate(env));
    }
    owners
}

#[test]
fn test_initialize() {
    let env = Env::default();
    let factory = create_factory(&env);

    factory.initialize(&dummy_hash(&env));

    assert_eq!(factory.wallet_wasm_hash(), dummy_hash(&env));
    assert_eq!(factory.total_wallets_deployed(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn test_initialize_twice() {
    let env = Env::default();
    let factory = create_factory(&env);

    factory.initialize(&dummy_hash(&env));
    factory.initialize(&dummy_hash(&env));
}

#[test]
fn test_no_wallet_for_unknown_owner() {
    let env = Env::default();
    let factory = create_factory(&env);
    factory.initialize(&dummy_hash(&env));

    assert_eq!(factory.get_wallet_address(&Address::generate(&env)), None);
}

#[test]
fn test_deploy_before_initialize() {
    let env = Env::default();
    env.mock_all_auths();
    let factory = create_factory(&env);
    let owner = Address::generate(&env);

    assert_eq!(
        factory.try_deploy_wallet(&owner, &vec![&env, owner.clone()], &1, &Address::generate(&env)),
        Err(Ok(FactoryError::NotInitialized))
    );
    assert_eq!(
        factory.try_wallet_wasm_hash(),
        Err(Ok(FactoryError::NotInitialized))
    );
}

#[test]
fn test_deploy_with_no_owners() {
    let env = Env::default();
    env.mock_all_auths();
    let factory = create_factory(&env);
    factory.initialize(&dummy_hash(&env));
    let deployer = Address::generate(&env);

    assert_eq!(
        factory.try_deploy_wallet(&deployer, &Vec::new(&env), &1, &Address::generate(&env)),
        Err(Ok(FactoryError::EmptyOwners))
    );
    assert_eq!(factory.total_wallets_deployed(), 0);
}

#[test]
#[should_panic]
fn test_deploy_requires_deployer_auth() {
    let env = Env::default();
    let factory = create_factory(&env);
    factory.initialize(&dummy_hash(&env));
    let owner = Address::generate(&env);

    factory.deploy_wallet(&owner, &vec![&env, owner.clone()], &1, &Address::generate(&env));
}

#[test]
fn test_deploy_wallet() {
    let env = Env::default();
    env.mock_all_auths();
    let factory = create_deploying_factory(&env);
    let deployer = Address::generate(&env);
    let native = Address::generate(&env);
    let owners = create_owners(&env, 3);

    let wallet = factory.deploy_wallet(&deployer, &owners, &2, &native);

    assert_eq!(factory.total_wallets_deployed(), 1);
    for owner in owners.iter() {
        assert_eq!(factory.get_wallet_address(&owner), Some(wallet.clone()));
    }
    assert_eq!(factory.get_wallet_address(&deployer), None);

    let deployed = DeployedWalletClient::new(&env, &wallet);
    assert_eq!(deployed.owner_count(), 3);
    assert_eq!(deployed.required_approvals(), 2);
    assert_eq!(deployed.native_asset(), native);
    assert!(deployed.is_owner(&owners.get_unchecked(1)));
    assert!(!deployed.is_owner(&deployer));
}

#[test]
fn test_deploy_wallet_emits_event() {
    let env = Env::default();
    env.mock_all_auths();
    let factory = create_deploying_factory(&env);
    let deployer = Address::generate(&env);

    let wallet = factory.deploy_wallet(
        &deployer,
        &create_owners(&env, 2),
        &1,
        &Address::generate(&env),
    );

    let mut factory_events = Vec::new(&env);
    for event in env.events().all().iter() {
        if event.0 == factory.address {
            factory_events.push_back(event);
        }
    }
    assert_eq!(
        factory_events,
        vec![
            &env,
            (
                factory.address.clone(),
                (Symbol::new(&env, "deployed"),).into_val(&env),
                (wallet, deployer).into_val(&env),
            ),
        ]
    );
}

#[test]
fn test_each_deployment_gets_its_own_address() {
    let env = Env::default();
    env.mock_all_auths();
    let factory = create_deploying_factory(&env);
    let deployer = Address::generate(&env);
    let native = Address::generate(&env);
    let shared = Address::generate(&env);
    let first_only = Address::generate(&env);

    let first = factory.deploy_wallet(
        &deployer,
        &vec![&env, shared.clone(), first_only.clone()],
        &2,
        &native,
    );
    let second = factory.deploy_wallet(&deployer, &vec![&env, shared.clone()], &1, &native);

    assert_ne!(first, second);
    assert_eq!(factory.total_wallets_deployed(), 2);
    // The index follows the latest deployment.
    assert_eq!(factory.get_wallet_address(&shared), Some(second.clone()));
    assert_eq!(factory.get_wallet_address(&first_only), Some(first.clone()));

    assert_eq!(DeployedWalletClient::new(&env, &first).required_approvals(), 2);
    assert_eq!(DeployedWalletClient::new(&env, &second).required_approvals(), 1);
}

#[test]
fn test_rejected_wallet_config_reverts_deployment() {
    let env = Env::default();
    env.mock_all_auths();
    let factory = create_deploying_factory(&env);
    let deployer = Address::generate(&env);
    let owners = create_owners(&env, 2);

    // Threshold above the owner count is rejected by the wallet itself.
    assert!(factory
        .try_deploy_wallet(&deployer, &owners, &5, &Address::generate(&env))
        .is_err());
    assert!(factory
        .try_deploy_wallet(&deployer, &owners, &0, &Address::generate(&env))
        .is_err());

    assert_eq!(factory.total_wallets_deployed(), 0);
    for owner in owners.iter() {
        assert_eq!(factory.get_wallet_address(&owner), None);
    }

    // The failed attempts leave the first salt free.
    let wallet = factory.deploy_wallet(&deployer, &owners, &2, &Address::generate(&env));
    assert_eq!(factory.total_wallets_deployed(), 1);
    assert_eq!(factory.get_wallet_address(&owners.get_unchecked(0)), Some(wallet));
}
