//! Integration tests for list-bearing operator semantics.

use std::sync::Arc;

use fabula_engine::call;
use fabula_foundation::{ErrorKind, ListItem, ListOrigin, StoryList, Value};

fn colors() -> Arc<ListOrigin> {
    Arc::new(
        ListOrigin::new("Colors")
            .with_item("Red", 1)
            .with_item("Green", 2)
            .with_item("Blue", 3),
    )
}

fn color_list(names: &[&str]) -> StoryList {
    let colors = colors();
    let mut list = StoryList::from_origin(colors.clone());
    for name in names {
        let value = colors.value_of(name).unwrap();
        list.add(ListItem::new("Colors", name), value);
    }
    list
}

fn as_list(value: Value) -> StoryList {
    match value {
        Value::List(list) => list,
        other => panic!("expected a list, got {other:?}"),
    }
}

// =============================================================================
// Set Algebra
// =============================================================================

#[test]
fn list_union_difference_intersection() {
    let a = Value::List(color_list(&["Red", "Green"]));
    let b = Value::List(color_list(&["Green", "Blue"]));

    assert_eq!(
        call("+", &[a.clone(), b.clone()]).unwrap(),
        Value::List(color_list(&["Red", "Green", "Blue"]))
    );
    assert_eq!(
        call("-", &[a.clone(), b.clone()]).unwrap(),
        Value::List(color_list(&["Red"]))
    );
    assert_eq!(
        call("^", &[a, b]).unwrap(),
        Value::List(color_list(&["Green"]))
    );
}

#[test]
fn list_containment() {
    let full = Value::List(color_list(&["Red", "Green"]));
    let sub = Value::List(color_list(&["Green"]));

    assert_eq!(
        call("?", &[full.clone(), sub.clone()]).unwrap(),
        Value::Int(1)
    );
    assert_eq!(call("!?", &[full.clone(), sub.clone()]).unwrap(), Value::Int(0));
    assert_eq!(call("?", &[sub, full]).unwrap(), Value::Int(0));
}

#[test]
fn list_comparisons() {
    let low = Value::List(color_list(&["Red"]));
    let high = Value::List(color_list(&["Blue"]));

    assert_eq!(call("==", &[low.clone(), low.clone()]).unwrap(), Value::Int(1));
    assert_eq!(call("!=", &[low.clone(), high.clone()]).unwrap(), Value::Int(1));
    assert_eq!(call(">", &[high.clone(), low.clone()]).unwrap(), Value::Int(1));
    assert_eq!(call("<", &[low.clone(), high.clone()]).unwrap(), Value::Int(1));
    assert_eq!(call(">=", &[high.clone(), low.clone()]).unwrap(), Value::Int(1));
    assert_eq!(call("<=", &[low, high]).unwrap(), Value::Int(1));
}

// =============================================================================
// Unary List Operators
// =============================================================================

#[test]
fn list_unary_operators() {
    let list = Value::List(color_list(&["Red", "Blue"]));

    assert_eq!(call("LIST_COUNT", &[list.clone()]).unwrap(), Value::Int(2));
    assert_eq!(call("LIST_VALUE", &[list.clone()]).unwrap(), Value::Int(3));
    assert_eq!(
        call("LIST_MIN", &[list.clone()]).unwrap(),
        Value::List(color_list(&["Red"]))
    );
    assert_eq!(
        call("LIST_MAX", &[list.clone()]).unwrap(),
        Value::List(color_list(&["Blue"]))
    );
    assert_eq!(
        call("LIST_INVERT", &[list.clone()]).unwrap(),
        Value::List(color_list(&["Green"]))
    );
    assert_eq!(
        call("LIST_ALL", &[list]).unwrap(),
        Value::List(color_list(&["Red", "Green", "Blue"]))
    );
}

#[test]
fn list_not_tests_emptiness() {
    let empty = Value::List(StoryList::from_origin(colors()));
    let full = Value::List(color_list(&["Red"]));
    assert_eq!(call("!", &[empty]).unwrap(), Value::Int(1));
    assert_eq!(call("!", &[full]).unwrap(), Value::Int(0));
}

// =============================================================================
// Increment / Decrement
// =============================================================================

#[test]
fn list_increment_steps_through_the_origin() {
    let result = call("+", &[Value::List(color_list(&["Red"])), Value::Int(1)]).unwrap();
    assert_eq!(result, Value::List(color_list(&["Green"])));

    let result = call("+", &[Value::List(color_list(&["Red"])), Value::Int(2)]).unwrap();
    assert_eq!(result, Value::List(color_list(&["Blue"])));
}

#[test]
fn list_decrement_steps_backward() {
    let result = call("-", &[Value::List(color_list(&["Blue"])), Value::Int(1)]).unwrap();
    assert_eq!(result, Value::List(color_list(&["Green"])));
}

#[test]
fn increment_shifts_every_entry() {
    let result = call(
        "+",
        &[Value::List(color_list(&["Red", "Green"])), Value::Int(1)],
    )
    .unwrap();
    assert_eq!(result, Value::List(color_list(&["Green", "Blue"])));
}

#[test]
fn increment_silently_drops_out_of_range_targets() {
    let result = call("+", &[Value::List(color_list(&["Blue"])), Value::Int(1)]).unwrap();
    assert!(as_list(result).is_empty());

    // Mixed in-range/out-of-range keeps only the in-range target
    let result = call(
        "+",
        &[Value::List(color_list(&["Green", "Blue"])), Value::Int(1)],
    )
    .unwrap();
    assert_eq!(result, Value::List(color_list(&["Blue"])));
}

#[test]
fn increment_result_keeps_origin_provenance() {
    let result = as_list(call("+", &[Value::List(color_list(&["Red"])), Value::Int(1)]).unwrap());
    let inverted = call("LIST_INVERT", &[Value::List(result)]).unwrap();
    assert_eq!(inverted, Value::List(color_list(&["Red", "Blue"])));
}

#[test]
fn increment_never_mutates_the_source_list() {
    let source = color_list(&["Red"]);
    let snapshot = source.clone();
    let _ = call("+", &[Value::List(source.clone()), Value::Int(1)]).unwrap();
    assert_eq!(source, snapshot);
}

// =============================================================================
// Coercion and Mixing
// =============================================================================

#[test]
fn logical_operators_mix_lists_with_other_types() {
    let empty = Value::List(StoryList::from_origin(colors()));
    let red = Value::List(color_list(&["Red"]));

    assert_eq!(
        call("&&", &[empty.clone(), Value::from("nonempty")]).unwrap(),
        Value::Int(0)
    );
    assert_eq!(
        call("&&", &[red.clone(), Value::from("nonempty")]).unwrap(),
        Value::Int(1)
    );
    assert_eq!(call("||", &[empty, Value::Int(0)]).unwrap(), Value::Int(0));
    assert_eq!(call("||", &[red, Value::Float(0.0)]).unwrap(), Value::Int(1));
}

#[test]
fn undefined_list_pairings_are_type_errors() {
    let red = Value::List(color_list(&["Red"]));

    let err = call("*", &[red.clone(), Value::Int(2)]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidListPair { .. }));

    let err = call("+", &[red.clone(), Value::from("Green")]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidListPair { .. }));

    let err = call("==", &[red, Value::Float(1.0)]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidListPair { .. }));
}

#[test]
fn empty_list_operand_of_increment_yields_empty() {
    let empty = Value::List(StoryList::from_origin(colors()));
    let result = call("+", &[empty, Value::Int(1)]).unwrap();
    assert!(as_list(result).is_empty());
}
