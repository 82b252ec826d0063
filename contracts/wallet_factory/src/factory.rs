use soroban_sdk::{contract, contractclient, contractimpl, log, Address, BytesN, Env, Vec};

use crate::errors::FactoryError;
use crate::events::Deployed;
use crate::types::DataKey;

const DAY_IN_LEDGERS: u32 = 17280;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INDEX_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;
const INDEX_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// The part of the wallet contract the factory calls while deploying.
#[contractclient(name = "WalletClient")]
pub trait WalletInit {
    fn initialize(env: Env, owners: Vec<Address>, required_approvals: u32, native_asset: Address);
}

#[contract]
pub struct WalletFactory;

#[contractimpl]
impl WalletFactory {
    /// Records the hash of the uploaded wallet wasm every deployment uses.
    pub fn initialize(env: Env, wallet_wasm_hash: BytesN<32>) -> Result<(), FactoryError> {
        if env.storage().instance().has(&DataKey::WalletWasmHash) {
            return Err(FactoryError::AlreadyInitialized);
        }

        env.storage()
            .instance()
            .set(&DataKey::WalletWasmHash, &wallet_wasm_hash);
        env.storage().instance().set(&DataKey::WalletCount, &0u32);
        Self::extend_instance(&env);
        Ok(())
    }

    /// Deploys and initializes a new wallet, then points every owner at it.
    ///
    /// The wallet validates its own configuration; any rejection there
    /// reverts the whole deployment.
    pub fn deploy_wallet(
        env: Env,
        deployer: Address,
        owners: Vec<Address>,
        required_approvals: u32,
        native_asset: Address,
    ) -> Result<Address, FactoryError> {
        deployer.require_auth();
        let wasm_hash = Self::wallet_wasm_hash(env.clone())?;

        if owners.is_empty() {
            return Err(FactoryError::EmptyOwners);
        }

        let count = Self::total_wallets_deployed(env.clone());
        let wallet = env
            .deployer()
            .with_current_contract(Self::salt(&env, count))
            .deploy_v2(wasm_hash, ());

        WalletClient::new(&env, &wallet).initialize(&owners, &required_approvals, &native_asset);

        for owner in owners.iter() {
            let key = DataKey::WalletOf(owner);
            env.storage().persistent().set(&key, &wallet);
            env.storage()
                .persistent()
                .extend_ttl(&key, INDEX_LIFETIME_THRESHOLD, INDEX_BUMP_AMOUNT);
        }

        env.storage()
            .instance()
            .set(&DataKey::WalletCount, &(count + 1));
        Self::extend_instance(&env);

        log!(&env, "wallet deployed", wallet, count);
        Deployed {
            wallet: wallet.clone(),
            deployer,
        }
        .publish(&env);

        Ok(wallet)
    }

    /// Latest wallet deployed with `owner` among its owners.
    pub fn get_wallet_address(env: Env, owner: Address) -> Option<Address> {
        env.storage().persistent().get(&DataKey::WalletOf(owner))
    }

    pub fn total_wallets_deployed(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::WalletCount)
            .unwrap_or(0)
    }

    pub fn wallet_wasm_hash(env: Env) -> Result<BytesN<32>, FactoryError> {
        env.storage()
            .instance()
            .get(&DataKey::WalletWasmHash)
            .ok_or(FactoryError::NotInitialized)
    }

    fn extend_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    // One salt per deployment, so addresses never collide.
    fn salt(env: &Env, count: u32) -> BytesN<32> {
        let mut salt = [0u8; 32];
        salt[28..].copy_from_slice(&count.to_be_bytes());
        BytesN::from_array(env, &salt)
    }
}
