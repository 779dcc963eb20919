#![allow(missing_docs)]

use inputdata::data::{Data, ImmutableInputData, InputData, Mode, MutableInputData, Transform, Value};
use serde_json::json;

/// Extra accessor layered on any wrapper.
trait MatchesTest {
	fn test(&self, path: &str, default: bool) -> bool;
}

impl<M: Mode> MatchesTest for Data<M> {
	fn test(&self, path: &str, default: bool) -> bool {
		match self.lookup(path) {
			Some(value) if value.is_castable() => value == &Value::from("test"),
			_ => default,
		}
	}
}

/// Extra write built on the shared transform engine.
trait SetHex: Transform {
	fn set_hex(self, path: &str, text: &str) -> Self::Output {
		let hex: String = text.bytes().map(|byte| format!("{byte:02x}")).collect();
		self.set(path, hex)
	}
}

impl<T: Transform> SetHex for T {}

#[test]
fn extended_accessor() {
	let data = InputData::new(json!({"key1": "test", "key2": "not test", "key3": []}));
	assert!(data.test("key1", false));
	assert!(!data.test("key2", true));
	assert!(data.test("key3", true));
}

#[test]
fn extended_write_in_place() {
	let mut data = MutableInputData::new(json!({"key1": "test"}));
	data.set_hex("key1", "foo");
	assert_eq!(data.string("key1", ""), "666f6f");
}

#[test]
fn extended_write_copy_on_write() {
	let data = ImmutableInputData::new(json!({"key1": "test"}));
	let updated = data.set_hex("key1", "foo");
	assert_eq!(data.string("key1", ""), "test");
	assert_eq!(updated.string("key1", ""), "666f6f");
}
