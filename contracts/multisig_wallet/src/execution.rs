//! Guarded, one-time application of approved requests.
//!
//! Preconditions are checked in a fixed order: caller, existence, status,
//! quorum, then asset availability. Only after all of them pass is the
//! request marked executed and the asset moved. The whole invocation reverts
//! if the asset contract fails the movement itself.

use soroban_sdk::{log, token, Address, Env};

use crate::errors::WalletError;
use crate::nft::NftClient;
use crate::types::{AssetClass, DataKey, TxnAction};
use crate::{approvals, events, ledger, owners};

pub fn execute(
    env: &Env,
    class: AssetClass,
    index: u32,
    executor: &Address,
) -> Result<(), WalletError> {
    owners::require_owner(env, executor)?;
    let mut request = ledger::get(env, class, index)?;

    if request.executed {
        return Err(WalletError::AlreadyExecuted);
    }

    if !approvals::quorum_reached(env, &request) {
        return Err(WalletError::NotEnoughApprovals);
    }

    let wallet = env.current_contract_address();
    check_available(env, &wallet, &request.action)?;

    request.executed = true;
    ledger::put(env, class, index, &request);

    apply(env, &wallet, &request.action)?;

    events::executed(env, class, index, executor);
    log!(env, "txn executed", class, index);

    Ok(())
}

fn native_asset(env: &Env) -> Result<Address, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::NativeAsset)
        .ok_or(WalletError::NotInitialized)
}

fn nft_owned_by(nft: &NftClient, token_id: u32, holder: &Address) -> bool {
    matches!(nft.try_owner_of(&token_id), Ok(Ok(owner)) if owner == *holder)
}

fn check_available(env: &Env, wallet: &Address, action: &TxnAction) -> Result<(), WalletError> {
    match action {
        TxnAction::NativeTransfer(t) => {
            let native = token::TokenClient::new(env, &native_asset(env)?);
            if native.balance(wallet) < t.amount {
                return Err(WalletError::NotEnoughNative);
            }
        }
        TxnAction::TokenTransfer(t) => {
            let token = token::TokenClient::new(env, &t.token);
            if token.balance(wallet) < t.amount {
                return Err(WalletError::NotEnoughTokens);
            }
        }
        TxnAction::TokenTransferFrom(t) => {
            let token = token::TokenClient::new(env, &t.token);
            if token.allowance(&t.from, wallet) < t.amount {
                return Err(WalletError::NotEnoughAllowance);
            }
        }
        TxnAction::TokenApproval(a) => {
            let token = token::TokenClient::new(env, &a.token);
            if token.balance(wallet) < a.amount {
                return Err(WalletError::NotEnoughTokens);
            }
        }
        TxnAction::NftTransfer(t) => {
            let nft = NftClient::new(env, &t.nft);
            if !nft_owned_by(&nft, t.token_id, wallet) {
                return Err(WalletError::TokenIdNotOwned);
            }
        }
        TxnAction::NftTransferFrom(t) => {
            let nft = NftClient::new(env, &t.nft);
            // `from` must still hold the token.
            if !nft_owned_by(&nft, t.token_id, &t.from) {
                return Err(WalletError::NftNotApproved);
            }
            let approved = matches!(
                nft.try_get_approved(&t.token_id),
                Ok(Ok(Some(spender))) if spender == *wallet
            );
            if !approved && !nft.is_approved_for_all(&t.from, wallet) {
                return Err(WalletError::NftNotApproved);
            }
        }
        TxnAction::NftApproval(a) => {
            let nft = NftClient::new(env, &a.nft);
            if !nft_owned_by(&nft, a.token_id, wallet) {
                return Err(WalletError::NotOwnerOfNft);
            }
        }
    }

    Ok(())
}

fn apply(env: &Env, wallet: &Address, action: &TxnAction) -> Result<(), WalletError> {
    match action {
        TxnAction::NativeTransfer(t) => {
            token::TokenClient::new(env, &native_asset(env)?).transfer(wallet, &t.to, &t.amount);
        }
        TxnAction::TokenTransfer(t) => {
            token::TokenClient::new(env, &t.token).transfer(wallet, &t.to, &t.amount);
        }
        TxnAction::TokenTransferFrom(t) => {
            token::TokenClient::new(env, &t.token).transfer_from(wallet, &t.from, &t.to, &t.amount);
        }
        TxnAction::TokenApproval(a) => {
            token::TokenClient::new(env, &a.token).approve(
                wallet,
                &a.spender,
                &a.amount,
                &a.expiration_ledger,
            );
        }
        TxnAction::NftTransfer(t) => {
            NftClient::new(env, &t.nft).transfer_from(wallet, wallet, &t.to, &t.token_id);
        }
        TxnAction::NftTransferFrom(t) => {
            NftClient::new(env, &t.nft).transfer_from(wallet, &t.from, &t.to, &t.token_id);
        }
        TxnAction::NftApproval(a) => {
            NftClient::new(env, &a.nft).approve(wallet, &a.spender, &a.token_id);
        }
    }

    Ok(())
}
