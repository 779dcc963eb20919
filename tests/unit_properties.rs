#![allow(missing_docs)]

use inputdata::data::{Foreign, ImmutableInputData, InputData, MutableInputData, Opaque, Transform, Value, decode, encode};
use serde_json::json;

#[derive(Debug)]
struct Socket;

impl Foreign for Socket {}

fn shapes() -> Vec<Value> {
	vec![
		Value::Null,
		Value::from(true),
		Value::from(12),
		Value::from(1.5),
		Value::from("text"),
		Value::from(json!([1, [2, 3], {"k": "v"}])),
		Value::from(json!({"a": {"b": 1}, "list": ["x"]})),
		Value::Opaque(Opaque::new(Socket)),
	]
}

#[test]
fn missing_paths_always_yield_defaults() {
	for raw in shapes() {
		let data = InputData::new(raw.clone());
		for path in ["missing", "a.missing", "a.b.c.d.e", "list.9", "0.0.0"] {
			assert!(data.bool(path, true), "bool {path} on {raw:?}");
			assert!(!data.bool(path, false), "bool {path} on {raw:?}");
			assert_eq!(data.int(path, 456), 456, "int {path} on {raw:?}");
			assert_eq!(data.decimal(path, 4.5), 4.5, "decimal {path} on {raw:?}");
			assert_eq!(data.string(path, "default"), "default", "string {path} on {raw:?}");
			assert_eq!(data.raw(path, "default"), Value::from("default"), "raw {path} on {raw:?}");
			assert_eq!(data.arr_or(path, vec![7]).get_data(), &Value::array([7]), "arr {path} on {raw:?}");
			assert_eq!(data.object_or(path, "d").get_data(), &Value::from("d"), "object {path} on {raw:?}");
			assert_eq!(data.json_or(path, vec![8]).get_data(), &Value::array([8]), "json {path} on {raw:?}");
			assert_eq!(data.date_time(path, None, None), None, "date_time {path} on {raw:?}");
			assert!(data.get(path).get_data().is_null(), "get {path} on {raw:?}");
			assert!(!data.exists(path), "exists {path} on {raw:?}");
		}
	}
}

#[test]
fn containers_have_no_scalar_form() {
	for raw in [Value::from(json!([1])), Value::from(json!({"a": 1})), Value::Opaque(Opaque::new(Socket))] {
		let data = InputData::new(raw);
		assert_eq!(data.string("", "d"), "d");
		assert_eq!(data.int("", 3), 3);
		assert_eq!(data.decimal("", 3.5), 3.5);
		assert!(data.bool("", true));
	}
}

#[test]
fn rewrapping_never_nests() {
	for raw in shapes() {
		let mut data = InputData::new(raw.clone());
		for _ in 0..5 {
			data = InputData::new(data);
		}
		let mutable = MutableInputData::new(ImmutableInputData::new(data.clone()));
		assert_eq!(data.get_data(), &raw);
		assert_eq!(mutable.get_data(), &raw);
	}
}

#[test]
fn dotted_paths_match_chained_gets() {
	let data = InputData::new(json!({"a": {"b": {"c": [{"d": "deep"}]}}, "l": [[1, [2, 3]]]}));
	assert_eq!(data.get("a").get("b").get("c"), data.get("a.b.c"));
	assert_eq!(data.get("a").get("b").get("c").get("0").get("d"), data.get("a.b.c.0.d"));
	assert_eq!(data.get("l").get("0").get("1").get("1"), data.get("l.0.1.1"));
	assert_eq!(data.get("l.0.1.1").int("", 0), 3);
}

#[test]
fn detached_transforms_leave_source_untouched() {
	let source = json!({"customer": {"id": "123"}});
	let data = InputData::new(source.clone());
	let extended = data.extend([json!({"customer": {"name": "test"}})]);
	let _ = data.map(|_, _| 0);
	let _ = data.filter(|_, _| false);
	let _ = data.set("customer.id", "456");
	let _ = data.unset("customer");
	assert_eq!(data.get_data(), &Value::from(source.clone()));
	assert_eq!(extended.get_data(), &Value::from(json!({"customer": {"id": "123", "name": "test"}})));

	let data = ImmutableInputData::new(source.clone());
	let _ = data.extend([json!({"customer": {"name": "test"}})]);
	let _ = data.merge(json!([1]));
	let _ = data.values();
	let _ = data.assign("customer.id", "456").expect("copy-on-write assign succeeds");
	let _ = data.remove("customer").expect("copy-on-write remove succeeds");
	assert_eq!(data.get_data(), &Value::from(source));
}

#[test]
fn in_place_changes_are_visible_on_the_receiver() {
	let mut data = MutableInputData::new(json!({"customer": {"id": "123"}}));
	data.extend([json!({"customer": {"name": "test"}})]);
	assert_eq!(data.get_data(), &Value::from(json!({"customer": {"id": "123", "name": "test"}})));

	data.map_recursive(|value, _| value.string("", "").to_uppercase());
	assert_eq!(data.string("customer.name", ""), "TEST");

	data.unset("customer.id");
	assert!(!data.exists("customer.id"));
}

#[test]
fn encoded_text_decodes_to_the_same_value() {
	let inputs = [
		"null",
		r#"[1,2.5,"x",true,null]"#,
		r#"{"a":{"b":[{"c":"d"}]},"e":[]}"#,
		r#"{"0":"zero","1":"one"}"#,
		r#"{"unicode":"ü ✓","escaped":"line\nbreak"}"#,
	];
	for text in inputs {
		let data: InputData = decode(text).expect("fixture decodes");
		let again: InputData = decode(&encode(&data).expect("encodes")).expect("re-decodes");
		assert_eq!(again.get_data(), data.get_data(), "round trip of {text}");
	}
}

#[test]
fn lookup_defaults_and_keyed_filter() {
	let data = InputData::new(json!({"foo": "bar"}));
	assert_eq!(data.string("foo", ""), "bar");
	assert_eq!(data.string("missing", "default"), "default");

	let data = InputData::new(json!({"a": {"b": {"c": 123}}}));
	assert_eq!(data.int("a.b.c", 0), 123);
	assert_eq!(data.int("a.b.c.d.e", 456), 456);

	let even = InputData::new(json!([1, 2, 3, 4])).filter(|value, _| value.int("", 0) % 2 == 0);
	let pairs: Vec<(i64, i64)> = even.iter().map(|(key, value)| (key.int("", -1), value.int("", -1))).collect();
	assert_eq!(pairs, vec![(1, 2), (3, 4)]);
}
