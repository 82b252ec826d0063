//! Per-request approval bookkeeping.

use soroban_sdk::{log, Address, Env};

use crate::errors::WalletError;
use crate::types::{AssetClass, TxnRequest};
use crate::{events, ledger, owners};

fn bit(owner_index: u32) -> u64 {
    1u64 << owner_index
}

/// Records `approver`'s approval and returns the new approval count.
///
/// A second approval by the same owner is an error, never a no-op.
pub fn approve(
    env: &Env,
    class: AssetClass,
    index: u32,
    approver: &Address,
) -> Result<u32, WalletError> {
    let owner_index = owners::require_owner(env, approver)?;
    let mut request = ledger::get(env, class, index)?;

    if request.executed {
        return Err(WalletError::AlreadyExecuted);
    }

    let mask = bit(owner_index);
    if request.approvals & mask != 0 {
        return Err(WalletError::AlreadyApproved);
    }

    request.approvals |= mask;
    request.approval_count += 1;
    debug_assert_eq!(request.approval_count, request.approvals.count_ones());

    ledger::put(env, class, index, &request);
    events::approved(env, class, index, approver);
    log!(env, "txn approved", class, index, request.approval_count);

    Ok(request.approval_count)
}

pub fn has_approved(
    env: &Env,
    class: AssetClass,
    index: u32,
    owner: &Address,
) -> Result<bool, WalletError> {
    let request = ledger::get(env, class, index)?;
    Ok(match owners::index_of(env, owner) {
        Some(owner_index) => request.approvals & bit(owner_index) != 0,
        None => false,
    })
}

pub fn quorum_reached(env: &Env, request: &TxnRequest) -> bool {
    request.approval_count >= owners::required_approvals(env)
}
