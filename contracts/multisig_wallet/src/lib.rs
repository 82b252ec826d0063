#![no_std]

//! M-of-N multi-owner wallet holding native, fungible and non-fungible assets.
//!
//! Owners issue requests, one class at a time (`AssetClass::Native`,
//! `AssetClass::Token`, `AssetClass::Nft`). Each request collects owner
//! approvals and, once `required_approvals` is reached, can be executed
//! exactly once by any owner.

mod approvals;
mod errors;
mod events;
mod execution;
mod ledger;
mod multisig;
mod nft;
mod owners;
mod types;

mod test_events;
mod test_nft;
mod test_token;
mod testutils;

pub use errors::WalletError;
pub use multisig::{MultiSigWallet, MultiSigWalletClient};
pub use nft::{NftClient, NonFungibleToken};
pub use owners::MAX_OWNERS;
pub use types::*;
