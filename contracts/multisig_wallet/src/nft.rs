use soroban_sdk::{contractclient, Address, Env};

/// Subset of a non-fungible token contract the wallet drives.
///
/// `spender` and `approver` are the accounts that must authorize the call; the
/// wallet always passes its own address.
#[contractclient(name = "NftClient")]
pub trait NonFungibleToken {
    fn owner_of(env: Env, token_id: u32) -> Address;

    fn get_approved(env: Env, token_id: u32) -> Option<Address>;

    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool;

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u32);

    fn approve(env: Env, approver: Address, approved: Address, token_id: u32);
}
