use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

use crate::errors::WalletError;
use crate::types::{
    AssetClass, DataKey, NativeTransfer, NftApproval, NftTransfer, NftTransferFrom, TokenApproval,
    TokenTransfer, TokenTransferFrom, TxnAction, TxnDetails,
};
use crate::{approvals, events, execution, ledger, owners};

#[contract]
pub struct MultiSigWallet;

#[contractimpl]
impl MultiSigWallet {
    /// Sets the owners, the number of approvals a request needs and the
    /// Stellar Asset Contract used for native transfers. Callable once.
    pub fn initialize(
        env: Env,
        owners: Vec<Address>,
        required_approvals: u32,
        native_asset: Address,
    ) -> Result<(), WalletError> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(WalletError::AlreadyInitialized);
        }

        owners::init(&env, &owners, required_approvals)?;

        env.storage().instance().set(&DataKey::NativeAsset, &native_asset);
        env.storage().instance().set(&DataKey::Initialized, &true);
        ledger::extend_instance(&env);

        log!(&env, "wallet initialized", owners.len(), required_approvals);
        Ok(())
    }

    pub fn issue_native_transfer(
        env: Env,
        caller: Address,
        to: Address,
        amount: i128,
    ) -> Result<u32, WalletError> {
        Self::issue(&env, caller, TxnAction::NativeTransfer(NativeTransfer { to, amount }))
    }

    pub fn issue_token_transfer(
        env: Env,
        caller: Address,
        token: Address,
        to: Address,
        amount: i128,
    ) -> Result<u32, WalletError> {
        Self::issue(
            &env,
            caller,
            TxnAction::TokenTransfer(TokenTransfer { token, to, amount }),
        )
    }

    /// Moves `amount` from `from` to `to`, spending the allowance `from`
    /// granted to the wallet.
    pub fn issue_token_transfer_from(
        env: Env,
        caller: Address,
        token: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<u32, WalletError> {
        Self::issue(
            &env,
            caller,
            TxnAction::TokenTransferFrom(TokenTransferFrom {
                token,
                from,
                to,
                amount,
            }),
        )
    }

    /// Grants `spender` an allowance over the wallet's tokens, live until
    /// `expiration_ledger`.
    pub fn issue_token_approval(
        env: Env,
        caller: Address,
        token: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<u32, WalletError> {
        Self::issue(
            &env,
            caller,
            TxnAction::TokenApproval(TokenApproval {
                token,
                spender,
                amount,
                expiration_ledger,
            }),
        )
    }

    pub fn issue_nft_transfer(
        env: Env,
        caller: Address,
        nft: Address,
        to: Address,
        token_id: u32,
    ) -> Result<u32, WalletError> {
        Self::issue(
            &env,
            caller,
            TxnAction::NftTransfer(NftTransfer { nft, to, token_id }),
        )
    }

    pub fn issue_nft_transfer_from(
        env: Env,
        caller: Address,
        nft: Address,
        from: Address,
        to: Address,
        token_id: u32,
    ) -> Result<u32, WalletError> {
        Self::issue(
            &env,
            caller,
            TxnAction::NftTransferFrom(NftTransferFrom {
                nft,
                from,
                to,
                token_id,
            }),
        )
    }

    pub fn issue_nft_approval(
        env: Env,
        caller: Address,
        nft: Address,
        spender: Address,
        token_id: u32,
    ) -> Result<u32, WalletError> {
        Self::issue(
            &env,
            caller,
            TxnAction::NftApproval(NftApproval {
                nft,
                spender,
                token_id,
            }),
        )
    }

    /// Adds the caller's approval to request `index` of `class` and returns
    /// the request's approval count.
    pub fn approve(
        env: Env,
        caller: Address,
        class: AssetClass,
        index: u32,
    ) -> Result<u32, WalletError> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        let count = approvals::approve(&env, class, index, &caller)?;
        ledger::extend_instance(&env);
        Ok(count)
    }

    pub fn execute(
        env: Env,
        caller: Address,
        class: AssetClass,
        index: u32,
    ) -> Result<(), WalletError> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        execution::execute(&env, class, index, &caller)?;
        ledger::extend_instance(&env);
        Ok(())
    }

    pub fn owner_count(env: Env) -> Result<u32, WalletError> {
        Self::require_initialized(&env)?;
        Ok(owners::owner_count(&env))
    }

    pub fn get_owner(env: Env, index: u32) -> Result<Address, WalletError> {
        Self::require_initialized(&env)?;
        owners::owner_at(&env, index)
    }

    pub fn get_owners(env: Env) -> Result<Vec<Address>, WalletError> {
        Self::require_initialized(&env)?;
        Ok(owners::owners(&env))
    }

    pub fn is_owner(env: Env, id: Address) -> Result<bool, WalletError> {
        Self::require_initialized(&env)?;
        Ok(owners::is_owner(&env, &id))
    }

    pub fn required_approvals(env: Env) -> Result<u32, WalletError> {
        Self::require_initialized(&env)?;
        Ok(owners::required_approvals(&env))
    }

    pub fn native_asset(env: Env) -> Result<Address, WalletError> {
        Self::require_initialized(&env)?;
        env.storage()
            .instance()
            .get(&DataKey::NativeAsset)
            .ok_or(WalletError::NotInitialized)
    }

    pub fn get_txn_count(env: Env, class: AssetClass) -> Result<u32, WalletError> {
        Self::require_initialized(&env)?;
        Ok(ledger::count(&env, class))
    }

    pub fn get_txn(env: Env, class: AssetClass, index: u32) -> Result<TxnDetails, WalletError> {
        Self::require_initialized(&env)?;
        let request = ledger::get(&env, class, index)?;
        Ok(TxnDetails::from_request(
            &request,
            &env.current_contract_address(),
        ))
    }

    pub fn has_approved(
        env: Env,
        class: AssetClass,
        index: u32,
        owner: Address,
    ) -> Result<bool, WalletError> {
        Self::require_initialized(&env)?;
        approvals::has_approved(&env, class, index, &owner)
    }

    fn require_initialized(env: &Env) -> Result<(), WalletError> {
        if !env.storage().instance().has(&DataKey::Initialized) {
            return Err(WalletError::NotInitialized);
        }
        Ok(())
    }

    fn validate(action: &TxnAction) -> Result<(), WalletError> {
        let amount = match action {
            TxnAction::NativeTransfer(t) => t.amount,
            TxnAction::TokenTransfer(t) => t.amount,
            TxnAction::TokenTransferFrom(t) => t.amount,
            TxnAction::TokenApproval(a) => a.amount,
            TxnAction::NftTransfer(_) | TxnAction::NftTransferFrom(_) | TxnAction::NftApproval(_) => {
                return Ok(())
            }
        };
        if amount <= 0 {
            return Err(WalletError::InvalidAmount);
        }
        Ok(())
    }

    fn issue(env: &Env, caller: Address, action: TxnAction) -> Result<u32, WalletError> {
        Self::require_initialized(env)?;
        caller.require_auth();
        owners::require_owner(env, &caller)?;
        Self::validate(&action)?;

        let class = action.class();
        let index = ledger::append(env, action, caller.clone());
        ledger::extend_instance(env);

        events::issued(env, class, index, &caller);
        log!(env, "txn issued", class, index);
        Ok(index)
    }
}
