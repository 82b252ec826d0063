//! Owner set and approval threshold, written once by `initialize`.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::WalletError;
use crate::types::DataKey;

/// Width of the per-request approval bitmap.
pub const MAX_OWNERS: u32 = 64;

pub fn init(env: &Env, owners: &Vec<Address>, required_approvals: u32) -> Result<(), WalletError> {
    if owners.is_empty() {
        return Err(WalletError::EmptyOwners);
    }

    if owners.len() > MAX_OWNERS {
        return Err(WalletError::TooManyOwners);
    }

    if required_approvals == 0 {
        return Err(WalletError::InvalidThreshold);
    }

    if required_approvals > owners.len() {
        return Err(WalletError::ThresholdExceedsOwners);
    }

    let wallet = env.current_contract_address();
    for i in 0..owners.len() {
        let owner = owners.get_unchecked(i);
        if owner == wallet {
            return Err(WalletError::InvalidOwner);
        }
        for j in (i + 1)..owners.len() {
            if owner == owners.get_unchecked(j) {
                return Err(WalletError::DuplicateOwner);
            }
        }
    }

    let storage = env.storage().instance();
    storage.set(&DataKey::Owners, owners);
    storage.set(&DataKey::RequiredApprovals, &required_approvals);
    for (i, owner) in owners.iter().enumerate() {
        storage.set(&DataKey::OwnerIndex(owner), &(i as u32));
    }

    Ok(())
}

pub fn is_owner(env: &Env, id: &Address) -> bool {
    env.storage().instance().has(&DataKey::OwnerIndex(id.clone()))
}

/// Position of `id` in the owner list, which is also its bit in approval bitmaps.
pub fn index_of(env: &Env, id: &Address) -> Option<u32> {
    env.storage().instance().get(&DataKey::OwnerIndex(id.clone()))
}

pub fn owners(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Owners)
        .unwrap_or(Vec::new(env))
}

pub fn owner_count(env: &Env) -> u32 {
    owners(env).len()
}

pub fn owner_at(env: &Env, index: u32) -> Result<Address, WalletError> {
    owners(env)
        .get(index)
        .ok_or(WalletError::OwnerIndexOutOfRange)
}

pub fn required_approvals(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::RequiredApprovals)
        .unwrap_or(0)
}

/// Fails `Unauthorized` unless `id` is one of the owners.
pub fn require_owner(env: &Env, id: &Address) -> Result<u32, WalletError> {
    index_of(env, id).ok_or(WalletError::Unauthorized)
}
