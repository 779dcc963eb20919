use serde_json::json;

use crate::data::{DataError, ImmutableInputData, InputData, MutableInputData, Transform, Value};

fn v(json: serde_json::Value) -> Value {
	Value::from(json)
}

#[test]
fn read_only_rejects_direct_writes() {
	let data = InputData::new(json!([1, 2, 3]));

	let err = data.assign("0", 4).expect_err("read-only assign fails");
	assert!(matches!(err, DataError::Mutation { operation: "set property" }));
	assert_eq!(err.to_string(), "cannot set property of non mutable input data");

	let err = data.remove("0").expect_err("read-only remove fails");
	assert!(matches!(err, DataError::Mutation { operation: "unset property" }));
	assert_eq!(data.get_data(), &v(json!([1, 2, 3])));
}

#[test]
fn read_only_transforms_return_new_wrappers() {
	let data = InputData::new(json!([1, 2, 3, 4]));
	let even = data.filter(|value, _| value.int("", 0) % 2 == 0);
	let doubled = data.map(|value, _| value.int("", 0) * 2);

	assert_eq!(data.get_data(), &v(json!([1, 2, 3, 4])));
	assert_eq!(even.count(), 2);
	assert_eq!(even.int("3", 0), 4);
	assert_eq!(doubled.get_data(), &v(json!([2, 4, 6, 8])));
}

#[test]
fn read_only_set_is_a_transform() {
	let data = InputData::new(json!({"a": 1}));
	let updated = data.set("b.c", "x");
	assert_eq!(data.get_data(), &v(json!({"a": 1})));
	assert_eq!(updated.string("b.c", ""), "x");
}

#[test]
fn copy_on_write_leaves_original_intact() {
	let data = ImmutableInputData::new(json!({"customer": {"id": "123"}}));
	let extended = data.extend([json!({"customer": {"name": "test"}})]);
	assert_eq!(data.get_data(), &v(json!({"customer": {"id": "123"}})));
	assert_eq!(extended.get_data(), &v(json!({"customer": {"id": "123", "name": "test"}})));

	let data = ImmutableInputData::new(json!(["a", "b", "c"]));
	let merged = data.merge(json!(["d", "e", "f"]));
	assert_eq!(data.get_data(), &v(json!(["a", "b", "c"])));
	assert_eq!(merged.get_data(), &v(json!(["a", "b", "c", "d", "e", "f"])));

	let data = ImmutableInputData::new(json!([1, [2, 3]]));
	let doubled = data.map_recursive(|value, _| value.int("", 0) * 2);
	assert_eq!(data.get_data(), &v(json!([1, [2, 3]])));
	assert_eq!(doubled.get_data(), &v(json!([2, [4, 6]])));

	let data = ImmutableInputData::new(json!([0, 1, "a", null, ""]));
	let filtered = data.filter_truthy();
	assert_eq!(data.count(), 5);
	assert_eq!(filtered.count(), 2);
	assert_eq!(filtered.string("2", ""), "a");
}

#[test]
fn copy_on_write_direct_writes_return_new_wrappers() {
	let data = ImmutableInputData::new(json!({"str": "foo"}));
	let written = data.assign("str", "bar").expect("copy-on-write assign succeeds");
	let removed = data.remove("str").expect("copy-on-write remove succeeds");

	assert_eq!(data.string("str", ""), "foo");
	assert_eq!(written.string("str", ""), "bar");
	assert!(!removed.exists("str"));
}

#[test]
fn in_place_mutates_receiver() {
	let mut data = MutableInputData::new(json!({"str": "foo"}));
	data.set("str", "1");
	assert_eq!(data.string("str", ""), "1");

	data.assign("str", "2").expect("in-place assign succeeds");
	assert_eq!(data.string("str", ""), "2");

	data.remove("str").expect("in-place remove succeeds");
	assert_eq!(data.raw("str", Value::Null), Value::Null);

	let mut data = MutableInputData::new(Value::Null);
	data.set("str", InputData::new("5"));
	assert_eq!(data.string("str", ""), "5");

	let mut data = MutableInputData::new(json!({"str": {"foo": "bar"}}));
	data.set("str.foo", "baz");
	assert_eq!(data.raw("str.foo", Value::Null), Value::from("baz"));
	data.unset("str.foo");
	assert!(!data.exists("str.foo"));
}

#[test]
fn in_place_transforms_chain() {
	let mut data = MutableInputData::new(json!([1, 2, 3, 4]));
	data.filter(|value, _| value.int("", 0) % 2 == 0).map(|value, _| value.int("", 0) * 10).values();
	assert_eq!(data.get_data(), &v(json!([20, 40])));

	let mut data = MutableInputData::new(json!({"a": {"even": 2, "odd": 3}}));
	data.filter_recursive(|value, _| value.int("", 0) % 2 == 0);
	assert_eq!(data.get_data(), &v(json!({"a": {"even": 2}})));

	let mut data = MutableInputData::new(json!({"a": {"keep": 1, "drop": 0}, "b": ""}));
	data.filter_recursive_truthy();
	assert_eq!(data.get_data(), &v(json!({"a": {"keep": 1}})));

	let mut data = MutableInputData::new("test");
	data.extend([json!({"customer": {"name": "test"}})]);
	assert_eq!(data.get_data(), &v(json!({"customer": {"name": "test"}})));
}

#[test]
fn child_views_are_independent() {
	let mut parent = MutableInputData::new(json!({"a": {"b": 1}}));
	let mut child = parent.get("a");
	child.set("b", 2);
	assert_eq!(parent.int("a.b", 0), 1);
	assert_eq!(child.int("b", 0), 2);

	parent.set("a.b", 3);
	assert_eq!(child.int("b", 0), 2);
}
