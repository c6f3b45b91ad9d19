//! Unit tests for response envelope classification.

use sellerstats_sdk::envelope::{Envelope, ENVELOPE_KEYS};
use serde_json::json;

// ---------------------------------------------------------------------------
// Priority order
// ---------------------------------------------------------------------------

#[test]
fn envelope_key_priority_is_pinned() {
    // This order is a contract: `data` is the generic wrapper and wins over
    // the endpoint-named fallbacks.
    assert_eq!(ENVELOPE_KEYS, ["data", "incomes", "stocks", "orders", "sales"]);
}

#[test]
fn data_key_beats_endpoint_named_keys() {
    let env = Envelope::decode(json!({"data": [1, 2], "incomes": [3]}));
    assert_eq!(env.key(), Some("data"));
    assert_eq!(env.into_records(), vec![json!(1), json!(2)]);
}

#[test]
fn present_non_array_key_falls_through_to_next() {
    let env = Envelope::decode(json!({"data": 5, "orders": [1]}));
    assert_eq!(env.key(), Some("orders"));
    assert_eq!(env.into_records(), vec![json!(1)]);
}

// ---------------------------------------------------------------------------
// Shapes
// ---------------------------------------------------------------------------

#[test]
fn bare_array_passes_through_in_order() {
    let env = Envelope::decode(json!([1, 2, 3]));
    assert!(matches!(env, Envelope::Bare(_)));
    assert_eq!(env.into_records(), vec![json!(1), json!(2), json!(3)]);
}

#[test]
fn data_wrapper_unwraps() {
    let records = Envelope::decode(json!({"data": [1, 2]})).into_records();
    assert_eq!(records, vec![json!(1), json!(2)]);
}

#[test]
fn incomes_wrapper_unwraps() {
    let records = Envelope::decode(json!({"incomes": [{"a": 1}]})).into_records();
    assert_eq!(records, vec![json!({"a": 1})]);
}

#[test]
fn stocks_wrapper_unwraps() {
    let env = Envelope::decode(json!({"stocks": [{"nmId": 7}]}));
    assert_eq!(env.key(), Some("stocks"));
}

#[test]
fn orders_wrapper_unwraps() {
    let env = Envelope::decode(json!({"orders": []}));
    assert_eq!(env.key(), Some("orders"));
    assert!(env.into_records().is_empty());
}

#[test]
fn sales_wrapper_unwraps() {
    let env = Envelope::decode(json!({"sales": [{"saleID": "S1"}]}));
    assert_eq!(env.key(), Some("sales"));
}

// ---------------------------------------------------------------------------
// Unrecognized shapes
// ---------------------------------------------------------------------------

#[test]
fn unknown_object_is_unrecognized_and_empty() {
    let env = Envelope::decode(json!({"foo": 1}));
    assert!(matches!(env, Envelope::Unrecognized(_)));
    assert!(env.into_records().is_empty());
}

#[test]
fn scalar_body_is_unrecognized() {
    let env = Envelope::decode(json!(42));
    assert!(matches!(env, Envelope::Unrecognized(_)));
    assert!(env.into_records().is_empty());
}

#[test]
fn huge_unrecognized_body_still_degrades_to_empty() {
    // The warning for this path previews the body instead of logging all of
    // it; the decode result stays success-shaped empty regardless of size.
    let blob = "x".repeat(1 << 20);
    let env = Envelope::decode(json!({"payload": blob}));
    assert!(matches!(env, Envelope::Unrecognized(_)));
    assert!(env.into_records().is_empty());
}

#[test]
fn bare_and_keyed_have_no_key_vs_key() {
    assert_eq!(Envelope::decode(json!([])).key(), None);
    assert_eq!(Envelope::decode(json!({"data": []})).key(), Some("data"));
}
