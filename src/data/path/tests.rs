use serde_json::json;

use super::{DataPath, get_value, lookup, resolve};
use crate::data::{Key, Value};

fn sample() -> Value {
	Value::from(json!({
		"a": {"b": {"c": 123}},
		"list": [10, 20, {"x": "y"}],
		"nothing": null,
		"scalar": "text",
	}))
}

#[test]
fn empty_path_is_whole_value() {
	let path = DataPath::parse("");
	assert!(path.is_whole());
	assert!(path.split_last().is_none());

	let value = sample();
	assert_eq!(lookup(&value, ""), Some(&value));
}

#[test]
fn segments_are_split_on_dots() {
	let path = DataPath::parse("a.0.b");
	assert_eq!(path.segments, vec![Key::parse("a"), Key::Index(0), Key::parse("b")]);

	let trailing = DataPath::parse("a.");
	assert_eq!(trailing.segments, vec![Key::parse("a"), Key::Name(String::new())]);
}

#[test]
fn resolves_nested_records_and_lists() {
	let value = sample();
	assert_eq!(lookup(&value, "a.b.c"), Some(&Value::Int(123)));
	assert_eq!(lookup(&value, "list.1"), Some(&Value::Int(20)));
	assert_eq!(lookup(&value, "list.2.x"), Some(&Value::from("y")));
}

#[test]
fn missing_intermediates_are_absorbed() {
	let value = sample();
	let path = DataPath::parse("a.b.c.d.e");
	let resolved = resolve(&value, &path);
	assert!(resolved.container.is_none());
	assert_eq!(resolved.name, Some(&Key::parse("e")));
	assert_eq!(get_value(resolved), None);

	assert_eq!(lookup(&value, "scalar.inner"), None);
	assert_eq!(lookup(&value, "nothing.inner"), None);
	assert_eq!(lookup(&value, "missing.deeper.still"), None);
}

#[test]
fn present_null_counts_as_present() {
	let value = sample();
	assert_eq!(lookup(&value, "nothing"), Some(&Value::Null));
	assert_eq!(lookup(&value, "absent"), None);
}

#[test]
fn lookup_on_scalar_root() {
	let value = Value::from("plain");
	assert_eq!(lookup(&value, ""), Some(&value));
	assert_eq!(lookup(&value, "any"), None);
}
