use serde_json::{Value, json};

use crate::group::OneofGroup;
use crate::shape::is_oneof_group;
use crate::unknown::UnknownOneofGroup;

#[test]
fn new_group_has_no_selection() {
	let group: UnknownOneofGroup<Value> = UnknownOneofGroup::new();
	assert!(group.is_empty());
	assert_eq!(group.kind(), None);
	assert_eq!(group.value(), None);
}

#[test]
fn set_replaces_previous_field() {
	let mut group = UnknownOneofGroup::selected("a", json!("x"));
	group.set("b", json!(1));

	assert_eq!(group.kind(), Some("b"));
	assert_eq!(group.get("b"), Some(&json!(1)));
	assert_eq!(group.get("a"), None);
}

#[test]
fn get_requires_matching_kind() {
	let group = UnknownOneofGroup::selected("a", json!("x"));

	assert_eq!(group.get("a"), Some(&json!("x")));
	assert_eq!(group.get("b"), None);
	assert_eq!(group.value(), Some(&json!("x")));
}

#[test]
fn clear_is_idempotent() {
	let mut group = UnknownOneofGroup::selected("a", json!("x"));
	group.clear();
	let once = group.clone();
	group.clear();

	assert!(group.is_empty());
	assert_eq!(group, once);
	assert_eq!(group, UnknownOneofGroup::new());
}

#[test]
fn take_returns_active_entry_and_clears() {
	let mut group = UnknownOneofGroup::selected("a", json!("x"));

	assert_eq!(group.take(), Some(("a".into(), json!("x"))));
	assert!(group.is_empty());
	assert_eq!(group.take(), None);
}

#[test]
fn trait_protocol_matches_inherent_accessors() {
	let mut group = UnknownOneofGroup::selected("a", json!("x"));

	assert_eq!(group.oneof_kind(), Some("a"));
	assert_eq!(group.selected_value(), Some(json!("x")));
	assert_eq!(group.get_oneof_value("a"), Some(json!("x")));
	assert_eq!(group.get_oneof_value("b"), None);

	group.set_oneof_value("b", json!(1)).expect("dynamic set never fails");
	assert_eq!(group.oneof_kind(), Some("b"));
	assert_eq!(group.get_oneof_value("a"), None);

	group.clear_oneof_value();
	assert!(group.is_empty());
}

#[test]
fn serializes_none_state_to_null_discriminator() {
	let group: UnknownOneofGroup<Value> = UnknownOneofGroup::new();
	let encoded = serde_json::to_value(&group).expect("none state serializes");

	assert_eq!(encoded, json!({ "kind": null }));
	assert!(is_oneof_group(&encoded));
}

#[test]
fn serializes_active_state_to_structural_form() {
	let group = UnknownOneofGroup::selected("a", json!("x"));
	let encoded = serde_json::to_value(&group).expect("active state serializes");

	assert_eq!(encoded, json!({ "kind": "a", "a": "x" }));
	assert!(is_oneof_group(&encoded));
}

#[test]
fn round_trips_through_structural_form() {
	let groups = [
		UnknownOneofGroup::new(),
		UnknownOneofGroup::selected("a", json!("x")),
		UnknownOneofGroup::selected("b", json!({ "nested": [1, 2, 3] })),
	];

	for group in groups {
		let encoded = serde_json::to_value(&group).expect("group serializes");
		let decoded: UnknownOneofGroup<Value> = serde_json::from_value(encoded).expect("group deserializes");
		assert_eq!(decoded, group);
	}
}

#[test]
fn malformed_structural_forms_are_rejected() {
	let candidates = [
		json!({}),
		json!({ "foo": 123 }),
		json!({ "kind": true, "true": 123 }),
		json!({ "kind": "a" }),
		json!({ "kind": "a", "b": 1 }),
		json!({ "kind": null, "a": 1 }),
		json!({ "kind": "a", "a": 1, "b": 2 }),
		json!(42),
	];

	for candidate in candidates {
		let decoded = serde_json::from_value::<UnknownOneofGroup<Value>>(candidate.clone());
		assert!(decoded.is_err(), "accepted malformed group {candidate}");
	}
}
