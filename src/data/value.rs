use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::data::coerce;

/// Raw data held by a wrapper.
///
/// Every operation matches on this tag exhaustively; there is no variant able
/// to hold a wrapper, so wrappers never nest.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
	/// Absent or explicit null.
	#[default]
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Integer scalar.
	Int(i64),
	/// Floating point scalar.
	Float(f64),
	/// String scalar.
	String(String),
	/// Ordered keyed container.
	Keyed(Keyed),
	/// Foreign value carried through unchanged.
	Opaque(Opaque),
}

impl Value {
	/// List-like container with sequential index keys.
	pub fn array<I, V>(items: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<Value>,
	{
		let mut keyed = Keyed::new(Shape::Array);
		for item in items {
			keyed.push(item.into());
		}
		Value::Keyed(keyed)
	}

	/// Record-like container from key/value pairs.
	pub fn record<I, K, V>(entries: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<Key>,
		V: Into<Value>,
	{
		Value::Keyed(Keyed::from_entries(Shape::Object, entries.into_iter().map(|(key, value)| (key.into(), value.into()))))
	}

	/// Empty list-like container.
	pub fn empty_array() -> Self {
		Value::Keyed(Keyed::new(Shape::Array))
	}

	/// Empty record-like container.
	pub fn empty_record() -> Self {
		Value::Keyed(Keyed::new(Shape::Object))
	}

	/// Convert a parsed JSON tree.
	///
	/// JSON objects become record-like containers unless `objects_as_arrays`
	/// is set, in which case they become list-like containers with named keys.
	pub fn from_json(json: serde_json::Value, objects_as_arrays: bool) -> Self {
		match json {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(v) => Value::Bool(v),
			serde_json::Value::Number(number) => match number.as_i64() {
				Some(v) => Value::Int(v),
				None => Value::Float(number.as_f64().unwrap_or(0.0)),
			},
			serde_json::Value::String(v) => Value::String(v),
			serde_json::Value::Array(items) => {
				let mut keyed = Keyed::new(Shape::Array);
				for item in items {
					keyed.push(Value::from_json(item, objects_as_arrays));
				}
				Value::Keyed(keyed)
			}
			serde_json::Value::Object(map) => {
				let shape = if objects_as_arrays { Shape::Array } else { Shape::Object };
				Value::Keyed(Keyed::from_entries(
					shape,
					map.into_iter().map(|(key, value)| (Key::parse(&key), Value::from_json(value, objects_as_arrays))),
				))
			}
		}
	}

	/// True for `Null`.
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Scalars, and opaque values exposing a string form.
	pub fn is_castable(&self) -> bool {
		coerce::is_castable(self)
	}

	/// Borrow the container, if this is one.
	pub fn as_keyed(&self) -> Option<&Keyed> {
		match self {
			Value::Keyed(keyed) => Some(keyed),
			_ => None,
		}
	}

	/// Mutably borrow the container, if this is one.
	pub fn as_keyed_mut(&mut self) -> Option<&mut Keyed> {
		match self {
			Value::Keyed(keyed) => Some(keyed),
			_ => None,
		}
	}

	/// Short name of the variant, used in diagnostics.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Value::Null => "null",
			Value::Bool(_) => "bool",
			Value::Int(_) => "int",
			Value::Float(_) => "float",
			Value::String(_) => "string",
			Value::Keyed(keyed) => match keyed.shape() {
				Shape::Array => "array",
				Shape::Object => "object",
			},
			Value::Opaque(_) => "opaque",
		}
	}
}

/// String form of castable values; empty for null, containers, and opaque values without text.
impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&coerce::to_text(self).unwrap_or_default())
	}
}

/// Origin of a keyed container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Shape {
	/// List-like, produced from array-style input.
	#[default]
	Array,
	/// Record-like, produced from object-style input.
	Object,
}

/// Key of a keyed container entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
	/// Non-negative integer key.
	Index(u64),
	/// String key.
	Name(String),
}

impl Key {
	/// Normalize a path segment or object key.
	///
	/// Canonical decimal integers (`"0"`, `"12"`, but not `"012"` or `"+1"`)
	/// become index keys so `"0"` and `0` address the same entry. Integers
	/// beyond `i64::MAX` stay names.
	pub fn parse(segment: &str) -> Self {
		let bytes = segment.as_bytes();
		let canonical = !bytes.is_empty() && bytes.iter().all(u8::is_ascii_digit) && (bytes.len() == 1 || bytes[0] != b'0');
		if canonical && let Ok(index) = segment.parse::<i64>() {
			return Key::Index(index.unsigned_abs());
		}
		Key::Name(segment.to_owned())
	}

	/// Index value, if this is an index key.
	pub fn as_index(&self) -> Option<u64> {
		match self {
			Key::Index(index) => Some(*index),
			Key::Name(_) => None,
		}
	}

	/// Key as a raw value: `Int` for index keys, `String` for names and for
	/// indexes outside the `i64` range.
	pub fn to_value(&self) -> Value {
		match self {
			Key::Index(index) => i64::try_from(*index).map_or_else(|_| Value::String(index.to_string()), Value::Int),
			Key::Name(name) => Value::String(name.clone()),
		}
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Key::Index(index) => write!(f, "{index}"),
			Key::Name(name) => f.write_str(name),
		}
	}
}

impl From<&str> for Key {
	fn from(value: &str) -> Self {
		Key::parse(value)
	}
}

impl From<String> for Key {
	fn from(value: String) -> Self {
		Key::parse(&value)
	}
}

impl From<u64> for Key {
	fn from(value: u64) -> Self {
		Key::Index(value)
	}
}

impl From<usize> for Key {
	fn from(value: usize) -> Self {
		Key::Index(value as u64)
	}
}

/// Ordered keyed container with a list-like or record-like shape.
#[derive(Debug, Clone, Default)]
pub struct Keyed {
	shape: Shape,
	entries: IndexMap<Key, Value>,
	next_index: u64,
}

impl Keyed {
	/// Empty container of the given shape.
	pub fn new(shape: Shape) -> Self {
		Self {
			shape,
			entries: IndexMap::new(),
			next_index: 0,
		}
	}

	/// Container built from ordered entries; later duplicates overwrite earlier ones in place.
	pub fn from_entries(shape: Shape, entries: impl IntoIterator<Item = (Key, Value)>) -> Self {
		let mut keyed = Self::new(shape);
		for (key, value) in entries {
			keyed.insert(key, value);
		}
		keyed
	}

	/// Container shape.
	pub fn shape(&self) -> Shape {
		self.shape
	}

	/// Same entries under a different shape.
	pub fn with_shape(mut self, shape: Shape) -> Self {
		self.shape = shape;
		self
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True when there are no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Entry value by key.
	pub fn get(&self, key: &Key) -> Option<&Value> {
		self.entries.get(key)
	}

	/// Mutable entry value by key.
	pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
		self.entries.get_mut(key)
	}

	/// True when `key` is present, even if its value is null.
	pub fn contains_key(&self, key: &Key) -> bool {
		self.entries.contains_key(key)
	}

	/// Insert or replace an entry; replaced entries keep their position.
	pub fn insert(&mut self, key: Key, value: Value) -> Option<Value> {
		self.claim(&key);
		self.entries.insert(key, value)
	}

	/// Entry for `key`, inserting `Null` when absent.
	pub(crate) fn slot(&mut self, key: Key) -> &mut Value {
		self.claim(&key);
		self.entries.entry(key).or_insert(Value::Null)
	}

	fn claim(&mut self, key: &Key) {
		if let Key::Index(index) = key
			&& *index >= self.next_index
		{
			self.next_index = index.saturating_add(1);
		}
	}

	/// Remove an entry, preserving the order of the rest.
	pub fn remove(&mut self, key: &Key) -> Option<Value> {
		self.entries.shift_remove(key)
	}

	/// Append under the next free index: one past the largest index key ever
	/// inserted, or zero. Removing entries does not lower it.
	pub fn push(&mut self, value: Value) {
		let index = self.next_index;
		self.insert(Key::Index(index), value);
	}

	/// Entries in insertion order.
	pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
		self.entries.iter()
	}

	/// Keys in insertion order.
	pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
		self.entries.keys()
	}

	/// Values in insertion order.
	pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
		self.entries.values()
	}

	/// True for a list-like container whose keys are exactly `0..len` in order.
	pub fn is_list(&self) -> bool {
		self.shape == Shape::Array && self.entries.keys().enumerate().all(|(position, key)| key.as_index() == Some(position as u64))
	}
}

impl PartialEq for Keyed {
	fn eq(&self, other: &Self) -> bool {
		self.shape == other.shape && self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
	}
}

impl IntoIterator for Keyed {
	type Item = (Key, Value);
	type IntoIter = indexmap::map::IntoIter<Key, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl<'a> IntoIterator for &'a Keyed {
	type Item = (&'a Key, &'a Value);
	type IntoIter = indexmap::map::Iter<'a, Key, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

/// Capabilities a foreign value may expose.
pub trait Foreign: fmt::Debug + Send + Sync {
	/// String conversion; values returning `Some` are castable.
	fn to_text(&self) -> Option<String> {
		None
	}

	/// Element count reported by `count()`.
	fn count(&self) -> Option<usize> {
		None
	}
}

/// Shared handle to a foreign value.
#[derive(Debug, Clone)]
pub struct Opaque(Arc<dyn Foreign>);

impl Opaque {
	/// Wrap a foreign value.
	pub fn new(value: impl Foreign + 'static) -> Self {
		Self(Arc::new(value))
	}

	/// String form, if the value exposes one.
	pub fn to_text(&self) -> Option<String> {
		self.0.to_text()
	}

	/// Element count, if the value exposes one.
	pub fn count(&self) -> Option<usize> {
		self.0.count()
	}
}

impl PartialEq for Opaque {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
	}
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Value::Null => serializer.serialize_unit(),
			Value::Bool(v) => serializer.serialize_bool(*v),
			Value::Int(v) => serializer.serialize_i64(*v),
			Value::Float(v) if v.is_finite() => serializer.serialize_f64(*v),
			Value::Float(_) => serializer.serialize_unit(),
			Value::String(v) => serializer.serialize_str(v),
			Value::Keyed(keyed) if keyed.is_list() => {
				let mut seq = serializer.serialize_seq(Some(keyed.len()))?;
				for item in keyed.values() {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Value::Keyed(keyed) => {
				let mut map = serializer.serialize_map(Some(keyed.len()))?;
				for (key, item) in keyed {
					map.serialize_entry(&key.to_string(), item)?;
				}
				map.end()
			}
			Value::Opaque(opaque) => match opaque.to_text() {
				Some(text) => serializer.serialize_str(&text),
				None => serializer.serialize_unit(),
			},
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::Int(i64::from(value))
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int(value)
	}
}

impl From<u32> for Value {
	fn from(value: u32) -> Self {
		Value::Int(i64::from(value))
	}
}

impl From<u64> for Value {
	fn from(value: u64) -> Self {
		match i64::try_from(value) {
			Ok(v) => Value::Int(v),
			Err(_) => Value::Float(value as f64),
		}
	}
}

impl From<usize> for Value {
	fn from(value: usize) -> Self {
		Value::from(value as u64)
	}
}

impl From<f32> for Value {
	fn from(value: f32) -> Self {
		Value::Float(f64::from(value))
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Float(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::String(value)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Value::Null, Into::into)
	}
}

impl<T: Into<Value>> From<Vec<T>> for Value {
	fn from(value: Vec<T>) -> Self {
		Value::array(value)
	}
}

impl From<Keyed> for Value {
	fn from(value: Keyed) -> Self {
		Value::Keyed(value)
	}
}

impl From<Opaque> for Value {
	fn from(value: Opaque) -> Self {
		Value::Opaque(value)
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		Value::from_json(value, false)
	}
}
