use std::sync::atomic::Ordering;

use item_ledger::{ContractError, InMemoryContext, Item, ItemContract, StateError, WorldState};

use crate::support::FaultyContext;

#[test]
fn create_then_exists() {
    let contract = ItemContract::default();
    let ctx = InMemoryContext::new();

    assert!(!contract.item_exists(&ctx, "X1").unwrap());
    contract.create_item(&ctx, "X1", "Alice", "Lamp").unwrap();
    assert!(contract.item_exists(&ctx, "X1").unwrap());
}

#[test]
fn create_existing_fails_and_keeps_stored_value() {
    let contract = ItemContract::default();
    let ctx = InMemoryContext::new();

    contract.create_item(&ctx, "X1", "Alice", "Lamp").unwrap();
    let before = ctx.state().get_state("X1").unwrap();

    let err = contract.create_item(&ctx, "X1", "Mallory", "Nothing").unwrap_err();
    assert!(matches!(err, ContractError::AlreadyExists { ref id } if id == "X1"));
    assert_eq!(err.to_string(), "the item X1 already exists");
    assert_eq!(ctx.state().get_state("X1").unwrap(), before);
}

#[test]
fn create_then_read_returns_same_fields() {
    let contract = ItemContract::default();
    let ctx = InMemoryContext::new();

    contract
        .create_item(&ctx, "item-ß", "Zoë", "a \"quoted\" value\nwith newline")
        .unwrap();

    let item = contract.read_item(&ctx, "item-ß").unwrap();
    assert_eq!(
        item,
        Item::new("item-ß", "Zoë", "a \"quoted\" value\nwith newline")
    );
}

#[test]
fn read_missing_is_not_found() {
    let contract = ItemContract::default();
    let ctx = InMemoryContext::new();

    let err = contract.read_item(&ctx, "nope").unwrap_err();
    assert!(matches!(err, ContractError::NotFound { ref id } if id == "nope"));
    assert_eq!(err.status_code(), 404);
}

#[test]
fn read_undecodable_value_is_serialization_error() {
    let contract = ItemContract::default();
    let ctx = InMemoryContext::new();
    ctx.state().put_state("bad", b"{not json".to_vec()).unwrap();

    let err = contract.read_item(&ctx, "bad").unwrap_err();
    assert!(matches!(err, ContractError::Serialization(_)));
}

#[test]
fn update_missing_fails_without_writing() {
    let contract = ItemContract::default();
    let ctx = FaultyContext::new();

    let err = contract.update_item(&ctx, "ghost", "Alice", "Lamp").unwrap_err();
    assert!(matches!(err, ContractError::NotFound { .. }));
    assert_eq!(ctx.state.writes(), 0);
    assert!(!contract.item_exists(&ctx, "ghost").unwrap());
}

#[test]
fn update_replaces_every_field() {
    let contract = ItemContract::default();
    let ctx = InMemoryContext::new();

    contract.create_item(&ctx, "X1", "Alice", "Lamp").unwrap();
    contract.update_item(&ctx, "X1", "Alice", "").unwrap();

    assert_eq!(contract.read_item(&ctx, "X1").unwrap(), Item::new("X1", "Alice", ""));
}

#[test]
fn delete_missing_is_not_found() {
    let contract = ItemContract::default();
    let ctx = FaultyContext::new();

    let err = contract.delete_item(&ctx, "ghost").unwrap_err();
    assert!(matches!(err, ContractError::NotFound { .. }));
    assert_eq!(ctx.state.writes(), 0);
}

#[test]
fn delete_removes_record() {
    let contract = ItemContract::default();
    let ctx = InMemoryContext::new();

    contract.create_item(&ctx, "X1", "Alice", "Lamp").unwrap();
    contract.delete_item(&ctx, "X1").unwrap();

    assert!(!contract.item_exists(&ctx, "X1").unwrap());
    assert!(matches!(
        contract.delete_item(&ctx, "X1"),
        Err(ContractError::NotFound { .. })
    ));
}

#[test]
fn transfer_returns_previous_owner_and_keeps_value() {
    let contract = ItemContract::default();
    let ctx = InMemoryContext::new();

    contract.create_item(&ctx, "X1", "Alice", "Lamp").unwrap();
    let previous = contract.transfer_item(&ctx, "X1", "Bob").unwrap();

    assert_eq!(previous, "Alice");
    assert_eq!(contract.read_item(&ctx, "X1").unwrap(), Item::new("X1", "Bob", "Lamp"));
}

#[test]
fn transfer_missing_is_not_found() {
    let contract = ItemContract::default();
    let ctx = FaultyContext::new();

    let err = contract.transfer_item(&ctx, "ghost", "Bob").unwrap_err();
    assert!(matches!(err, ContractError::NotFound { .. }));
    assert_eq!(ctx.state.writes(), 0);
}

#[test]
fn lamp_changes_hands_then_disappears() {
    let contract = ItemContract::default();
    let ctx = InMemoryContext::new();

    contract.create_item(&ctx, "X1", "Alice", "Lamp").unwrap();
    assert_eq!(contract.read_item(&ctx, "X1").unwrap(), Item::new("X1", "Alice", "Lamp"));

    assert_eq!(contract.transfer_item(&ctx, "X1", "Bob").unwrap(), "Alice");
    assert_eq!(contract.read_item(&ctx, "X1").unwrap(), Item::new("X1", "Bob", "Lamp"));

    contract.delete_item(&ctx, "X1").unwrap();
    assert!(matches!(
        contract.read_item(&ctx, "X1"),
        Err(ContractError::NotFound { .. })
    ));
}

#[test]
fn empty_id_rejected_before_store_access() {
    let contract = ItemContract::default();
    let ctx = FaultyContext::new();
    ctx.state.fail_get.store(true, Ordering::SeqCst);

    for result in [
        contract.item_exists(&ctx, "").map(|_| ()),
        contract.create_item(&ctx, "", "Alice", "Lamp"),
        contract.read_item(&ctx, "").map(|_| ()),
        contract.update_item(&ctx, "", "Alice", "Lamp"),
        contract.delete_item(&ctx, ""),
        contract.transfer_item(&ctx, "", "Bob").map(|_| ()),
    ] {
        assert!(matches!(result, Err(ContractError::InvalidArgument(_))));
    }
    assert_eq!(ctx.state.writes(), 0);
}

#[test]
fn read_failure_propagates_as_store_error() {
    let contract = ItemContract::default();
    let ctx = FaultyContext::new();
    ctx.state.fail_get.store(true, Ordering::SeqCst);

    let err = contract.create_item(&ctx, "X1", "Alice", "Lamp").unwrap_err();
    assert!(matches!(err, ContractError::Store(StateError::Storage(_))));
    assert_eq!(ctx.state.writes(), 0);
}

#[test]
fn write_failure_propagates_as_store_error() {
    let contract = ItemContract::default();
    let ctx = FaultyContext::new();
    contract.create_item(&ctx, "X1", "Alice", "Lamp").unwrap();
    ctx.state.fail_put.store(true, Ordering::SeqCst);

    let err = contract.transfer_item(&ctx, "X1", "Bob").unwrap_err();
    assert!(matches!(err, ContractError::Store(_)));
    assert_eq!(err.status_code(), 500);
    assert_eq!(contract.read_item(&ctx, "X1").unwrap().owner, "Alice");
}

#[test]
fn delete_failure_propagates_as_store_error() {
    let contract = ItemContract::default();
    let ctx = FaultyContext::new();
    contract.create_item(&ctx, "X1", "Alice", "Lamp").unwrap();
    ctx.state.fail_del.store(true, Ordering::SeqCst);

    assert!(matches!(
        contract.delete_item(&ctx, "X1"),
        Err(ContractError::Store(_))
    ));
    assert!(contract.item_exists(&ctx, "X1").unwrap());
}
