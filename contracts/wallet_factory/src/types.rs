use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    WalletWasmHash,
    WalletCount,
    WalletOf(Address),
}
