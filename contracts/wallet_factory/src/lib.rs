#![no_std]

//! Deploys multisig wallets and indexes them by owner.

mod errors;
mod events;
mod factory;
mod types;

mod test;

pub use errors::FactoryError;
pub use factory::{WalletFactory, WalletFactoryClient};
