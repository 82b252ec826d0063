#![cfg(test)]

use super::*;
use crate::testutils::{create_nft, WalletTest};

#[test]
fn test_issue_nft_transfer() {
    let t = WalletTest::new();
    let nft = create_nft(&t.env);

    let index = t
        .wallet
        .issue_nft_transfer(&t.owner(0), &nft.address, &t.outsider, &1);
    assert_eq!(index, 0);
    assert_eq!(t.wallet.get_txn_count(&AssetClass::Nft), 1);

    let txn = t.wallet.get_txn(&AssetClass::Nft, &0);
    assert_eq!(txn.class, AssetClass::Nft);
    assert_eq!(txn.kind, ActionKind::Transfer);
    assert_eq!(txn.recipient, t.outsider);
    assert_eq!(txn.amount_or_token_id, 1);
    assert_eq!(txn.source_holder, t.wallet.address);
    assert_eq!(txn.asset, Some(nft.address.clone()));
    assert_eq!(txn.approvals, 0);
    assert!(!txn.executed);
}

#[test]
fn test_issue_nft_transfer_from_snapshots_token_id() {
    let t = WalletTest::new();
    let nft = create_nft(&t.env);

    t.wallet
        .issue_nft_transfer_from(&t.owner(0), &nft.address, &t.owner(0), &t.outsider, &7);

    let txn = t.wallet.get_txn(&AssetClass::Nft, &0);
    assert_eq!(txn.kind, ActionKind::TransferFrom);
    assert_eq!(txn.source_holder, t.owner(0));
    assert_eq!(txn.amount_or_token_id, 7);
}

#[test]
fn test_only_owners_issue_nft_requests() {
    let t = WalletTest::new();
    let nft = create_nft(&t.env);

    assert_eq!(
        t.wallet
            .try_issue_nft_transfer(&t.outsider, &nft.address, &t.outsider, &1),
        Err(Ok(WalletError::Unauthorized))
    );
    assert_eq!(
        t.wallet
            .try_issue_nft_approval(&t.outsider, &nft.address, &t.outsider, &1),
        Err(Ok(WalletError::Unauthorized))
    );
    assert_eq!(t.wallet.get_txn_count(&AssetClass::Nft), 0);
}

#[test]
fn test_execute_nft_transfer() {
    let t = WalletTest::new();
    let nft = create_nft(&t.env);
    nft.mint(&t.wallet.address, &1);

    t.wallet
        .issue_nft_transfer(&t.owner(0), &nft.address, &t.outsider, &1);
    t.approve_by(AssetClass::Nft, 0, 2);
    t.wallet.execute(&t.owner(0), &AssetClass::Nft, &0);

    assert_eq!(nft.owner_of(&1), t.outsider);
    assert!(t.wallet.get_txn(&AssetClass::Nft, &0).executed);
}

#[test]
fn test_execute_nft_transfer_not_owned() {
    let t = WalletTest::new();
    let nft = create_nft(&t.env);

    t.wallet
        .issue_nft_transfer(&t.owner(0), &nft.address, &t.outsider, &1);
    t.approve_by(AssetClass::Nft, 0, 2);

    // Token not minted yet.
    assert_eq!(
        t.wallet.try_execute(&t.owner(0), &AssetClass::Nft, &0),
        Err(Ok(WalletError::TokenIdNotOwned))
    );

    // Minted to someone else.
    nft.mint(&t.owner(1), &1);
    assert_eq!(
        t.wallet.try_execute(&t.owner(0), &AssetClass::Nft, &0),
        Err(Ok(WalletError::TokenIdNotOwned))
    );
    assert!(!t.wallet.get_txn(&AssetClass::Nft, &0).executed);
    assert_eq!(nft.owner_of(&1), t.owner(1));
}

#[test]
fn test_execute_nft_transfer_from() {
    let t = WalletTest::new();
    let nft = create_nft(&t.env);
    nft.mint(&t.owner(0), &1);

    t.wallet
        .issue_nft_transfer_from(&t.owner(0), &nft.address, &t.owner(0), &t.outsider, &1);
    t.approve_by(AssetClass::Nft, 0, 2);

    assert_eq!(
        t.wallet.try_execute(&t.owner(0), &AssetClass::Nft, &0),
        Err(Ok(WalletError::NftNotApproved))
    );

    nft.approve(&t.owner(0), &t.wallet.address, &1);
    t.wallet.execute(&t.owner(0), &AssetClass::Nft, &0);

    assert_eq!(nft.owner_of(&1), t.outsider);
    assert_eq!(nft.get_approved(&1), None);
}

#[test]
fn test_execute_nft_transfer_from_with_operator_approval() {
    let t = WalletTest::new();
    let nft = create_nft(&t.env);
    nft.mint(&t.owner(1), &3);
    nft.set_approval_for_all(&t.owner(1), &t.wallet.address, &true);

    t.wallet
        .issue_nft_transfer_from(&t.owner(0), &nft.address, &t.owner(1), &t.outsider, &3);
    t.approve_by(AssetClass::Nft, 0, 2);
    t.wallet.execute(&t.owner(2), &AssetClass::Nft, &0);

    assert_eq!(nft.owner_of(&3), t.outsider);
}

#[test]
fn test_execute_nft_transfer_from_source_not_holder() {
    let t = WalletTest::new();
    let nft = create_nft(&t.env);
    nft.mint(&t.owner(1), &1);
    // The wallet is an operator for owner(0), who does not hold token 1.
    nft.set_approval_for_all(&t.owner(0), &t.wallet.address, &true);

    t.wallet
        .issue_nft_transfer_from(&t.owner(0), &nft.address, &t.owner(0), &t.outsider, &1);
    t.approve_by(AssetClass::Nft, 0, 2);

    assert_eq!(
        t.wallet.try_execute(&t.owner(0), &AssetClass::Nft, &0),
        Err(Ok(WalletError::NftNotApproved))
    );
    assert_eq!(nft.owner_of(&1), t.owner(1));
    assert!(!t.wallet.get_txn(&AssetClass::Nft, &0).executed);

    // Same outcome for a token that was never minted.
    t.wallet
        .issue_nft_transfer_from(&t.owner(0), &nft.address, &t.owner(0), &t.outsider, &9);
    t.approve_by(AssetClass::Nft, 1, 2);
    assert_eq!(
        t.wallet.try_execute(&t.owner(0), &AssetClass::Nft, &1),
        Err(Ok(WalletError::NftNotApproved))
    );
}

#[test]
fn test_execute_nft_approval() {
    let t = WalletTest::new();
    let nft = create_nft(&t.env);
    nft.mint(&t.owner(0), &1);

    t.wallet
        .issue_nft_approval(&t.owner(0), &nft.address, &t.outsider, &1);
    t.approve_by(AssetClass::Nft, 0, 2);

    assert_eq!(
        t.wallet.try_execute(&t.owner(0), &AssetClass::Nft, &0),
        Err(Ok(WalletError::NotOwnerOfNft))
    );
    let txn = t.wallet.get_txn(&AssetClass::Nft, &0);
    assert!(!txn.executed);
    assert_eq!(txn.approval_count, 2);

    nft.transfer_from(&t.owner(0), &t.owner(0), &t.wallet.address, &1);
    t.wallet.execute(&t.owner(0), &AssetClass::Nft, &0);

    assert_eq!(nft.get_approved(&1), Some(t.outsider.clone()));
    assert_eq!(nft.owner_of(&1), t.wallet.address);
    assert!(t.wallet.get_txn(&AssetClass::Nft, &0).executed);
}

#[test]
#[should_panic(expected = "Error(Contract, #16)")]
fn test_nft_not_enough_approvals() {
    let t = WalletTest::new();
    let nft = create_nft(&t.env);
    nft.mint(&t.wallet.address, &1);

    t.wallet
        .issue_nft_transfer(&t.owner(0), &nft.address, &t.outsider, &1);
    t.wallet.approve(&t.owner(0), &AssetClass::Nft, &0);
    t.wallet.execute(&t.owner(0), &AssetClass::Nft, &0);
}

#[test]
fn test_nft_execute_by_non_owner() {
    let t = WalletTest::new();
    let nft = create_nft(&t.env);
    nft.mint(&t.wallet.address, &1);

    t.wallet
        .issue_nft_transfer(&t.owner(0), &nft.address, &t.outsider, &1);
    t.approve_by(AssetClass::Nft, 0, 2);

    assert_eq!(
        t.wallet.try_execute(&t.outsider, &AssetClass::Nft, &0),
        Err(Ok(WalletError::Unauthorized))
    );
    assert_eq!(nft.owner_of(&1), t.wallet.address);
}

#[test]
#[should_panic(expected = "Error(Contract, #15)")]
fn test_nft_execute_twice() {
    let t = WalletTest::new();
    let nft = create_nft(&t.env);
    nft.mint(&t.wallet.address, &1);

    t.wallet
        .issue_nft_transfer(&t.owner(0), &nft.address, &t.outsider, &1);
    t.approve_by(AssetClass::Nft, 0, 2);
    t.wallet.execute(&t.owner(0), &AssetClass::Nft, &0);
    t.wallet.execute(&t.owner(0), &AssetClass::Nft, &0);
}

#[test]
fn test_nft_approve_after_execution() {
    let t = WalletTest::new();
    let nft = create_nft(&t.env);
    nft.mint(&t.wallet.address, &1);

    t.wallet
        .issue_nft_transfer(&t.owner(0), &nft.address, &t.outsider, &1);
    t.approve_by(AssetClass::Nft, 0, 2);
    t.wallet.execute(&t.owner(0), &AssetClass::Nft, &0);

    assert_eq!(
        t.wallet.try_approve(&t.owner(2), &AssetClass::Nft, &0),
        Err(Ok(WalletError::AlreadyExecuted))
    );
}

#[test]
fn test_nft_request_approved_twice() {
    let t = WalletTest::new();
    let nft = create_nft(&t.env);

    t.wallet
        .issue_nft_approval(&t.owner(0), &nft.address, &t.outsider, &1);
    t.wallet.approve(&t.owner(1), &AssetClass::Nft, &0);

    assert_eq!(
        t.wallet.try_approve(&t.owner(1), &AssetClass::Nft, &0),
        Err(Ok(WalletError::AlreadyApproved))
    );
    let txn = t.wallet.get_txn(&AssetClass::Nft, &0);
    assert_eq!(txn.approval_count, 1);
    assert_eq!(txn.approvals, 0b010);
}
