//! Unit tests for filter rendering into query pairs.

use chrono::{NaiveDate, TimeZone, Utc};
use sellerstats_sdk::{FilterValue, Filters};

fn march_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

// ---------------------------------------------------------------------------
// Absent values
// ---------------------------------------------------------------------------

#[test]
fn empty_string_values_are_omitted() {
    let pairs = Filters::new().set("brand", "").render();
    assert!(pairs.is_empty());
}

#[test]
fn null_values_are_omitted() {
    let pairs = Filters::new().set("warehouse", FilterValue::Null).render();
    assert!(pairs.is_empty());
}

#[test]
fn none_option_values_are_omitted() {
    let pairs = Filters::new()
        .set("warehouse", Option::<String>::None)
        .render();
    assert!(pairs.is_empty());
}

#[test]
fn some_option_values_are_rendered() {
    let pairs = Filters::new().set("warehouse", Some("Koledino")).render();
    assert_eq!(pairs, vec![("warehouse".to_string(), "Koledino".to_string())]);
}

#[test]
fn absent_values_do_not_count_as_present() {
    let filters = Filters::new().set("page", "");
    assert!(!filters.has("page"));
    assert!(!filters.has("limit"));
}

// ---------------------------------------------------------------------------
// Scalar rendering
// ---------------------------------------------------------------------------

#[test]
fn scalars_render_via_to_string() {
    let pairs = Filters::new()
        .set("nmId", 1234567_i64)
        .set("isCancel", false)
        .set("discount", 12.5)
        .render();
    assert_eq!(
        pairs,
        vec![
            ("nmId".to_string(), "1234567".to_string()),
            ("isCancel".to_string(), "false".to_string()),
            ("discount".to_string(), "12.5".to_string()),
        ]
    );
}

#[test]
fn insertion_order_is_preserved() {
    let pairs = Filters::new()
        .set("b", 2)
        .set("a", 1)
        .set("c", 3)
        .render();
    let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
}

#[test]
fn set_replaces_existing_key_in_place() {
    let pairs = Filters::new()
        .set("page", 1)
        .set("limit", 10)
        .set("page", 7)
        .render();
    assert_eq!(
        pairs,
        vec![
            ("page".to_string(), "7".to_string()),
            ("limit".to_string(), "10".to_string()),
        ]
    );
}

// ---------------------------------------------------------------------------
// Date rendering
// ---------------------------------------------------------------------------

#[test]
fn naive_date_renders_as_calendar_date() {
    let pairs = Filters::new().date_from(march_first()).render();
    assert_eq!(pairs, vec![("dateFrom".to_string(), "2024-03-01".to_string())]);
}

#[test]
fn iso_timestamp_string_is_truncated_to_date() {
    let pairs = Filters::new()
        .set("dateFrom", "2024-03-01T12:30:45.000Z")
        .render();
    assert_eq!(pairs, vec![("dateFrom".to_string(), "2024-03-01".to_string())]);
}

#[test]
fn date_and_iso_string_render_identically() {
    let from_date = Filters::new().date_from(march_first()).render();
    let from_string = Filters::new().date_from("2024-03-01T00:00:00Z").render();
    assert_eq!(from_date, from_string);
}

#[test]
fn utc_datetime_renders_as_its_date_part() {
    let dt = Utc.with_ymd_and_hms(2024, 3, 1, 23, 59, 59).unwrap();
    let pairs = Filters::new().date_to(dt).render();
    assert_eq!(pairs, vec![("dateTo".to_string(), "2024-03-01".to_string())]);
}

// ---------------------------------------------------------------------------
// Date-range stripping
// ---------------------------------------------------------------------------

#[test]
fn without_date_range_removes_only_date_bounds() {
    let stripped = Filters::new()
        .date_from(march_first())
        .set("warehouse", "Koledino")
        .date_to(march_first())
        .page(3)
        .without_date_range();

    let keys: Vec<String> = stripped.render().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["warehouse".to_string(), "page".to_string()]);
}

#[test]
fn without_date_range_on_empty_filters_is_empty() {
    assert!(Filters::new().without_date_range().render().is_empty());
}
