//! Append-only, per-class storage of transaction requests.
//!
//! Counts live in instance storage next to the rest of the wallet aggregate;
//! the records themselves go to persistent storage so the instance entry stays
//! small no matter how many requests a wallet accumulates. Every write bumps
//! the TTL of what it touched.

use soroban_sdk::{Address, Env};

use crate::errors::WalletError;
use crate::types::{AssetClass, DataKey, TxnAction, TxnRequest};

const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const TXN_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;
pub const TXN_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn count(env: &Env, class: AssetClass) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::TxnCount(class))
        .unwrap_or(0)
}

/// Stores a fresh pending request and returns its index within its class.
pub fn append(env: &Env, action: TxnAction, issuer: Address) -> u32 {
    let class = action.class();
    let index = count(env, class);

    let request = TxnRequest {
        action,
        issuer,
        approvals: 0,
        approval_count: 0,
        executed: false,
    };
    put(env, class, index, &request);

    env.storage()
        .instance()
        .set(&DataKey::TxnCount(class), &(index + 1));

    index
}

pub fn get(env: &Env, class: AssetClass, index: u32) -> Result<TxnRequest, WalletError> {
    if index >= count(env, class) {
        return Err(WalletError::InvalidIndex);
    }

    let key = DataKey::Txn(class, index);
    let request = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(WalletError::InvalidIndex)?;
    env.storage()
        .persistent()
        .extend_ttl(&key, TXN_LIFETIME_THRESHOLD, TXN_BUMP_AMOUNT);

    Ok(request)
}

/// Overwrites an existing record. Callers own the transition rules.
pub fn put(env: &Env, class: AssetClass, index: u32, request: &TxnRequest) {
    let key = DataKey::Txn(class, index);
    env.storage().persistent().set(&key, request);
    env.storage()
        .persistent()
        .extend_ttl(&key, TXN_LIFETIME_THRESHOLD, TXN_BUMP_AMOUNT);
}
