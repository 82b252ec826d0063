#![cfg(test)]

use super::*;
use crate::testutils::{create_token, WalletTest};

const EXPIRATION_LEDGER: u32 = 1000;

#[test]
fn test_issue_token_transfer() {
    let t = WalletTest::new();
    let (token, _) = create_token(&t.env);

    let index = t
        .wallet
        .issue_token_transfer(&t.owner(0), &token.address, &t.outsider, &1000);
    assert_eq!(index, 0);
    assert_eq!(t.wallet.get_txn_count(&AssetClass::Token), 1);

    let txn = t.wallet.get_txn(&AssetClass::Token, &0);
    assert_eq!(txn.class, AssetClass::Token);
    assert_eq!(txn.kind, ActionKind::Transfer);
    assert_eq!(txn.recipient, t.outsider);
    assert_eq!(txn.amount_or_token_id, 1000);
    assert_eq!(txn.source_holder, t.wallet.address);
    assert_eq!(txn.asset, Some(token.address.clone()));
    assert_eq!(txn.approval_count, 0);
    assert!(!txn.executed);
}

#[test]
fn test_issue_token_transfer_from() {
    let t = WalletTest::new();
    let (token, _) = create_token(&t.env);

    t.wallet.issue_token_transfer_from(
        &t.owner(0),
        &token.address,
        &t.owner(0),
        &t.outsider,
        &1000,
    );

    let txn = t.wallet.get_txn(&AssetClass::Token, &0);
    assert_eq!(txn.kind, ActionKind::TransferFrom);
    assert_eq!(txn.recipient, t.outsider);
    assert_eq!(txn.amount_or_token_id, 1000);
    assert_eq!(txn.source_holder, t.owner(0));
    assert_eq!(txn.asset, Some(token.address.clone()));
}

#[test]
fn test_issue_token_approval() {
    let t = WalletTest::new();
    let (token, _) = create_token(&t.env);

    t.wallet.issue_token_approval(
        &t.owner(0),
        &token.address,
        &t.outsider,
        &1000,
        &EXPIRATION_LEDGER,
    );

    let txn = t.wallet.get_txn(&AssetClass::Token, &0);
    assert_eq!(txn.kind, ActionKind::Approve);
    assert_eq!(txn.recipient, t.outsider);
    assert_eq!(txn.amount_or_token_id, 1000);
    assert_eq!(txn.source_holder, t.wallet.address);
}

#[test]
fn test_token_requests_share_one_sequence() {
    let t = WalletTest::new();
    let (token, _) = create_token(&t.env);

    let a = t
        .wallet
        .issue_token_transfer(&t.owner(0), &token.address, &t.outsider, &1);
    let b = t.wallet.issue_token_transfer_from(
        &t.owner(0),
        &token.address,
        &t.owner(1),
        &t.outsider,
        &1,
    );
    let c = t.wallet.issue_token_approval(
        &t.owner(0),
        &token.address,
        &t.outsider,
        &1,
        &EXPIRATION_LEDGER,
    );

    assert_eq!((a, b, c), (0, 1, 2));
    assert_eq!(t.wallet.get_txn_count(&AssetClass::Token), 3);
}

#[test]
fn test_only_owners_issue_token_requests() {
    let t = WalletTest::new();
    let (token, _) = create_token(&t.env);

    assert_eq!(
        t.wallet
            .try_issue_token_transfer(&t.outsider, &token.address, &t.outsider, &1),
        Err(Ok(WalletError::Unauthorized))
    );
    assert_eq!(
        t.wallet.try_issue_token_transfer_from(
            &t.outsider,
            &token.address,
            &t.owner(0),
            &t.outsider,
            &1
        ),
        Err(Ok(WalletError::Unauthorized))
    );
    assert_eq!(
        t.wallet.try_issue_token_approval(
            &t.outsider,
            &token.address,
            &t.outsider,
            &1,
            &EXPIRATION_LEDGER
        ),
        Err(Ok(WalletError::Unauthorized))
    );
    assert_eq!(t.wallet.get_txn_count(&AssetClass::Token), 0);
}

#[test]
fn test_token_requests_reject_non_positive_amount() {
    let t = WalletTest::new();
    let (token, _) = create_token(&t.env);

    assert_eq!(
        t.wallet
            .try_issue_token_transfer(&t.owner(0), &token.address, &t.outsider, &-5),
        Err(Ok(WalletError::InvalidAmount))
    );
    assert_eq!(
        t.wallet.try_issue_token_approval(
            &t.owner(0),
            &token.address,
            &t.outsider,
            &0,
            &EXPIRATION_LEDGER
        ),
        Err(Ok(WalletError::InvalidAmount))
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #14)")]
fn test_token_request_approved_twice() {
    let t = WalletTest::new();
    let (token, _) = create_token(&t.env);
    t.wallet
        .issue_token_transfer(&t.owner(0), &token.address, &t.outsider, &1);

    t.wallet.approve(&t.owner(0), &AssetClass::Token, &0);
    t.wallet.approve(&t.owner(0), &AssetClass::Token, &0);
}

#[test]
#[should_panic(expected = "Error(Contract, #16)")]
fn test_token_transfer_not_enough_approvals() {
    let t = WalletTest::new();
    let (token, token_admin) = create_token(&t.env);
    token_admin.mint(&t.wallet.address, &1000);
    t.wallet
        .issue_token_transfer(&t.owner(0), &token.address, &t.outsider, &1000);

    t.wallet.execute(&t.owner(0), &AssetClass::Token, &0);
}

#[test]
fn test_execute_token_transfer() {
    let t = WalletTest::new();
    let (token, token_admin) = create_token(&t.env);
    t.wallet
        .issue_token_transfer(&t.owner(0), &token.address, &t.outsider, &1000);
    t.approve_by(AssetClass::Token, 0, 2);

    assert_eq!(
        t.wallet.try_execute(&t.owner(0), &AssetClass::Token, &0),
        Err(Ok(WalletError::NotEnoughTokens))
    );
    assert!(!t.wallet.get_txn(&AssetClass::Token, &0).executed);

    token_admin.mint(&t.wallet.address, &1000);
    t.wallet.execute(&t.owner(0), &AssetClass::Token, &0);

    assert_eq!(token.balance(&t.outsider), 1000);
    assert_eq!(token.balance(&t.wallet.address), 0);
    assert!(t.wallet.get_txn(&AssetClass::Token, &0).executed);

    assert_eq!(
        t.wallet.try_execute(&t.owner(0), &AssetClass::Token, &0),
        Err(Ok(WalletError::AlreadyExecuted))
    );
}

#[test]
fn test_execute_token_transfer_from() {
    let t = WalletTest::new();
    let (token, token_admin) = create_token(&t.env);
    let source = t.owner(0);
    token_admin.mint(&source, &1500);
    token_admin.mint(&t.wallet.address, &5000);

    t.wallet
        .issue_token_transfer_from(&source, &token.address, &source, &t.outsider, &1000);
    t.approve_by(AssetClass::Token, 0, 2);

    assert_eq!(
        t.wallet.try_execute(&t.owner(0), &AssetClass::Token, &0),
        Err(Ok(WalletError::NotEnoughAllowance))
    );

    token.approve(&source, &t.wallet.address, &999, &EXPIRATION_LEDGER);
    assert_eq!(
        t.wallet.try_execute(&t.owner(0), &AssetClass::Token, &0),
        Err(Ok(WalletError::NotEnoughAllowance))
    );

    token.approve(&source, &t.wallet.address, &1000, &EXPIRATION_LEDGER);
    t.wallet.execute(&t.owner(1), &AssetClass::Token, &0);

    assert_eq!(token.balance(&t.outsider), 1000);
    assert_eq!(token.balance(&source), 500);
    // The wallet's own holdings are untouched.
    assert_eq!(token.balance(&t.wallet.address), 5000);
    assert_eq!(token.allowance(&source, &t.wallet.address), 0);
}

#[test]
fn test_execute_token_approval() {
    let t = WalletTest::new();
    let (token, token_admin) = create_token(&t.env);
    t.wallet.issue_token_approval(
        &t.owner(0),
        &token.address,
        &t.outsider,
        &1000,
        &EXPIRATION_LEDGER,
    );
    t.approve_by(AssetClass::Token, 0, 2);

    assert_eq!(
        t.wallet.try_execute(&t.owner(0), &AssetClass::Token, &0),
        Err(Ok(WalletError::NotEnoughTokens))
    );
    assert_eq!(token.allowance(&t.wallet.address, &t.outsider), 0);

    token_admin.mint(&t.wallet.address, &1000);
    t.wallet.execute(&t.owner(0), &AssetClass::Token, &0);

    assert_eq!(token.allowance(&t.wallet.address, &t.outsider), 1000);
    assert_eq!(token.balance(&t.wallet.address), 1000);

    // The granted allowance is spendable by the spender.
    token.transfer_from(&t.outsider, &t.wallet.address, &t.outsider, &400);
    assert_eq!(token.balance(&t.outsider), 400);
}

#[test]
fn test_token_execution_does_not_touch_native() {
    let t = WalletTest::new();
    let (token, token_admin) = create_token(&t.env);
    t.native_admin.mint(&t.wallet.address, &50);
    token_admin.mint(&t.wallet.address, &10);

    t.wallet
        .issue_token_transfer(&t.owner(2), &token.address, &t.outsider, &10);
    t.approve_by(AssetClass::Token, 0, 3);
    t.wallet.execute(&t.owner(2), &AssetClass::Token, &0);

    assert_eq!(t.native.balance(&t.wallet.address), 50);
    assert_eq!(t.native.balance(&t.outsider), 0);
    assert_eq!(token.balance(&t.outsider), 10);
}
