#![cfg(test)]

use super::*;
use crate::testutils::{create_nft, WalletTest};
use soroban_sdk::{symbol_short, testutils::Events as _, vec, Address, IntoVal, Symbol, Val, Vec};

type ContractEvent = (Address, Vec<Val>, Val);

fn expected(
    t: &WalletTest,
    name: Symbol,
    class: AssetClass,
    index: u32,
    by: &Address,
) -> ContractEvent {
    (
        t.wallet.address.clone(),
        (name, class).into_val(&t.env),
        (index, by.clone()).into_val(&t.env),
    )
}

// Events the wallet itself published during the last invocation.
fn wallet_events(t: &WalletTest) -> Vec<ContractEvent> {
    let mut events = Vec::new(&t.env);
    for event in t.env.events().all().iter() {
        if event.0 == t.wallet.address {
            events.push_back(event);
        }
    }
    events
}

#[test]
fn test_issue_emits_event() {
    let t = WalletTest::new();

    t.wallet.issue_native_transfer(&t.owner(1), &t.outsider, &100);

    assert_eq!(
        t.env.events().all(),
        vec![
            &t.env,
            expected(&t, symbol_short!("issued"), AssetClass::Native, 0, &t.owner(1)),
        ]
    );
}

#[test]
fn test_issue_event_carries_class_and_index() {
    let t = WalletTest::new();
    let nft = create_nft(&t.env);

    t.wallet
        .issue_nft_transfer(&t.owner(0), &nft.address, &t.outsider, &1);
    t.wallet
        .issue_nft_approval(&t.owner(2), &nft.address, &t.outsider, &1);

    assert_eq!(
        wallet_events(&t),
        vec![
            &t.env,
            expected(&t, symbol_short!("issued"), AssetClass::Nft, 1, &t.owner(2)),
        ]
    );
}

#[test]
fn test_approve_emits_event() {
    let t = WalletTest::new();
    t.wallet.issue_native_transfer(&t.owner(0), &t.outsider, &100);

    t.wallet.approve(&t.owner(2), &AssetClass::Native, &0);

    assert_eq!(
        t.env.events().all(),
        vec![
            &t.env,
            expected(&t, symbol_short!("approved"), AssetClass::Native, 0, &t.owner(2)),
        ]
    );
}

#[test]
fn test_execute_emits_event() {
    let t = WalletTest::new();
    t.native_admin.mint(&t.wallet.address, &100);
    t.wallet.issue_native_transfer(&t.owner(0), &t.outsider, &100);
    t.approve_by(AssetClass::Native, 0, 2);

    t.wallet.execute(&t.owner(1), &AssetClass::Native, &0);

    // The native asset contract publishes its own transfer event as well.
    assert_eq!(
        wallet_events(&t),
        vec![
            &t.env,
            expected(&t, symbol_short!("executed"), AssetClass::Native, 0, &t.owner(1)),
        ]
    );
}

#[test]
fn test_rejected_calls_emit_nothing() {
    let t = WalletTest::new();
    t.wallet.issue_native_transfer(&t.owner(0), &t.outsider, &100);
    assert_eq!(t.env.events().all().len(), 1);

    assert_eq!(
        t.wallet.try_issue_native_transfer(&t.outsider, &t.outsider, &100),
        Err(Ok(WalletError::Unauthorized))
    );
    assert_eq!(t.env.events().all().len(), 0);

    assert_eq!(
        t.wallet.try_approve(&t.outsider, &AssetClass::Native, &0),
        Err(Ok(WalletError::Unauthorized))
    );
    assert_eq!(t.env.events().all().len(), 0);

    t.approve_by(AssetClass::Native, 0, 2);
    assert_eq!(
        t.wallet.try_approve(&t.owner(0), &AssetClass::Native, &0),
        Err(Ok(WalletError::AlreadyApproved))
    );
    assert_eq!(t.env.events().all().len(), 0);

    // Approved but unfunded.
    assert_eq!(
        t.wallet.try_execute(&t.owner(0), &AssetClass::Native, &0),
        Err(Ok(WalletError::NotEnoughNative))
    );
    assert_eq!(t.env.events().all().len(), 0);
}
