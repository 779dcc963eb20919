use std::fmt;
use std::marker::PhantomData;

use chrono::{DateTime, FixedOffset};
use serde::{Serialize, Serializer};

use crate::data::coerce::{self, Numeric};
use crate::data::datetime::{parse_timestamp, parse_timezone};
use crate::data::path::{self, DataPath};
use crate::data::{Key, Mode, ReadOnly, Shape, Value};

/// Wrapper around one raw value with coercing, path-aware accessors.
///
/// Paths are dot-delimited (`"customer.address.0"`); `""` addresses the whole
/// held value. Accessors never fail: missing, null, or ill-typed data yields
/// the supplied default. `M` selects the mutation discipline, see [`Mode`].
#[derive(Clone, Debug, PartialEq)]
pub struct Data<M: Mode = ReadOnly> {
	value: Value,
	mode: PhantomData<M>,
}

impl<M: Mode> Data<M> {
	/// Wrap `value`. Wrapping another wrapper takes over its held value.
	pub fn new(value: impl Into<Value>) -> Self {
		Self {
			value: value.into(),
			mode: PhantomData,
		}
	}

	pub(crate) fn replace(&mut self, value: Value) {
		self.value = value;
	}

	/// Borrow the held raw value.
	pub fn get_data(&self) -> &Value {
		&self.value
	}

	/// Take the held raw value.
	pub fn into_data(self) -> Value {
		self.value
	}

	/// Move the held value into a wrapper of another variant.
	pub fn into_mode<N: Mode>(self) -> Data<N> {
		Data::new(self.value)
	}

	/// Raw value at `path`, if present. Present-but-null counts as present.
	pub fn lookup(&self, path: &str) -> Option<&Value> {
		path::lookup(&self.value, path)
	}

	/// Boolean at `path`, or `default` when absent or not castable.
	///
	/// `""`, `"0"`, zero and `false` are false; every other castable value is true.
	pub fn bool(&self, path: &str, default: bool) -> bool {
		self.bool_opt(path).unwrap_or(default)
	}

	/// Boolean at `path`, `None` when absent or not castable.
	pub fn bool_opt(&self, path: &str) -> Option<bool> {
		self.lookup(path).and_then(coerce::to_bool)
	}

	/// Integer at `path`, truncating numeric strings and floats toward zero.
	pub fn int(&self, path: &str, default: i64) -> i64 {
		self.int_opt(path).unwrap_or(default)
	}

	/// Integer at `path`, `None` when absent or not numeric.
	pub fn int_opt(&self, path: &str) -> Option<i64> {
		self.lookup(path).and_then(coerce::to_numeric).map(Numeric::to_int)
	}

	/// Float at `path`.
	pub fn decimal(&self, path: &str, default: f64) -> f64 {
		self.decimal_opt(path).unwrap_or(default)
	}

	/// Float at `path`, `None` when absent or not numeric.
	pub fn decimal_opt(&self, path: &str) -> Option<f64> {
		self.lookup(path).and_then(coerce::to_numeric).map(Numeric::to_float)
	}

	/// String form of the value at `path`.
	pub fn string(&self, path: &str, default: &str) -> String {
		self.string_opt(path).unwrap_or_else(|| default.to_owned())
	}

	/// String form of the value at `path`, `None` when absent or not castable.
	pub fn string_opt(&self, path: &str) -> Option<String> {
		self.lookup(path).and_then(coerce::to_text)
	}

	/// Timestamp at `path`.
	///
	/// Zone-less input is read in `timezone` (an IANA name; unknown names mean
	/// UTC). Empty input falls back to `default`, and so does unparseable
	/// input. Without a default, empty input yields `None` without parsing.
	pub fn date_time(&self, path: &str, timezone: Option<&str>, default: Option<&str>) -> Option<DateTime<FixedOffset>> {
		let text = self.string(path, "");
		let input = match (text.is_empty(), default) {
			(true, None) => return None,
			(true, Some(default)) => default,
			(false, _) => text.as_str(),
		};

		let zone = timezone.and_then(|name| {
			let zone = parse_timezone(name);
			if zone.is_none() {
				tracing::debug!(timezone = name, "unknown timezone, using UTC");
			}
			zone
		});

		parse_timestamp(input, zone).or_else(|| {
			let default = default?;
			tracing::debug!(path, input, default, "unparseable timestamp, using default");
			parse_timestamp(default, zone)
		})
	}

	/// Container at `path` as a list-like wrapper; keys are kept.
	pub fn arr(&self, path: &str) -> Self {
		self.arr_or(path, Value::empty_array())
	}

	/// Container at `path` as a list-like wrapper, or `default`.
	pub fn arr_or(&self, path: &str, default: impl Into<Value>) -> Self {
		match self.lookup(path) {
			Some(Value::Keyed(keyed)) => Self::new(keyed.clone().with_shape(Shape::Array)),
			_ => Self::new(default),
		}
	}

	/// Container at `path` as a record-like wrapper, or a wrapped null.
	pub fn object(&self, path: &str) -> Self {
		self.object_or(path, Value::Null)
	}

	/// Container at `path` as a record-like wrapper, or `default`.
	pub fn object_or(&self, path: &str, default: impl Into<Value>) -> Self {
		match self.lookup(path) {
			Some(Value::Keyed(keyed)) => Self::new(keyed.clone().with_shape(Shape::Object)),
			_ => Self::new(default),
		}
	}

	/// Decode the JSON text at `path`, or an empty array. Objects decode to
	/// list-like containers, as with [`DecodeOptions::associative`](crate::data::DecodeOptions::associative).
	pub fn json(&self, path: &str) -> Self {
		self.json_or(path, Value::empty_array())
	}

	/// Decode the JSON text at `path`; empty or invalid text yields `default`.
	pub fn json_or(&self, path: &str, default: impl Into<Value>) -> Self {
		let text = self.string(path, "");
		if text.is_empty() {
			return Self::new(default);
		}
		match serde_json::from_str::<serde_json::Value>(&text) {
			Ok(json) => Self::new(Value::from_json(json, true)),
			Err(err) => {
				tracing::debug!(path, error = %err, "invalid JSON text, using default");
				Self::new(default)
			}
		}
	}

	/// Unwrapped value at `path`, or `default`.
	pub fn raw(&self, path: &str, default: impl Into<Value>) -> Value {
		match self.lookup(path) {
			Some(value) => value.clone(),
			None => default.into(),
		}
	}

	/// True when the final segment of `path` is a key of its parent, even if
	/// the value there is null. The empty path exists unless the held value is null.
	pub fn exists(&self, path: &str) -> bool {
		let path = DataPath::parse(path);
		let resolved = path::resolve(&self.value, &path);
		match (resolved.container, resolved.name) {
			(Some(container), None) => !container.is_null(),
			(Some(container), Some(name)) => container.as_keyed().is_some_and(|keyed| keyed.contains_key(name)),
			(None, _) => false,
		}
	}

	/// True when the value at `path` is present and not null.
	pub fn has(&self, path: &str) -> bool {
		self.lookup(path).is_some_and(|value| !value.is_null())
	}

	/// Child wrapper at `path`; absent values become a wrapped null.
	pub fn get(&self, path: &str) -> Self {
		Self::new(self.lookup(path).cloned().unwrap_or_default())
	}

	/// Null, `false`, zero, `""`, `"0"`, or an empty container.
	pub fn is_empty(&self) -> bool {
		coerce::is_empty(&self.value)
	}

	/// True for a list-like container.
	pub fn is_array(&self) -> bool {
		matches!(&self.value, Value::Keyed(keyed) if keyed.shape() == Shape::Array)
	}

	/// Entry count of a container, the reported count of an opaque value, otherwise zero.
	pub fn count(&self) -> usize {
		match &self.value {
			Value::Keyed(keyed) => keyed.len(),
			Value::Opaque(opaque) => opaque.count().unwrap_or(0),
			Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::String(_) => 0,
		}
	}

	/// Wrapped `(key, value)` pairs in insertion order. Non-containers yield nothing.
	pub fn iter(&self) -> Iter<'_, M> {
		Iter {
			entries: self.value.as_keyed().map(|keyed| keyed.iter()),
			mode: PhantomData,
		}
	}

	/// First value where `predicate(value, key)` holds, or a wrapped null.
	pub fn find<F>(&self, mut predicate: F) -> Self
	where
		F: FnMut(&Self, &Self) -> bool,
	{
		self.iter()
			.find(|(key, value)| predicate(value, key))
			.map(|(_, value)| value)
			.unwrap_or_else(|| Self::new(Value::Null))
	}
}

impl<M: Mode> Default for Data<M> {
	fn default() -> Self {
		Self::new(Value::empty_array())
	}
}

impl<M: Mode> From<Data<M>> for Value {
	fn from(data: Data<M>) -> Self {
		data.value
	}
}

impl<M: Mode> From<&Data<M>> for Value {
	fn from(data: &Data<M>) -> Self {
		data.value.clone()
	}
}

impl<M: Mode> From<Value> for Data<M> {
	fn from(value: Value) -> Self {
		Self::new(value)
	}
}

impl<M: Mode> fmt::Display for Data<M> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.string("", ""))
	}
}

impl<M: Mode> Serialize for Data<M> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.value.serialize(serializer)
	}
}

/// Iterator over wrapped `(key, value)` pairs of a wrapper.
///
/// Index keys come out as wrapped integers, named keys as wrapped strings.
#[derive(Debug, Clone)]
pub struct Iter<'a, M: Mode> {
	entries: Option<indexmap::map::Iter<'a, Key, Value>>,
	mode: PhantomData<M>,
}

impl<M: Mode> Iterator for Iter<'_, M> {
	type Item = (Data<M>, Data<M>);

	fn next(&mut self) -> Option<Self::Item> {
		let (key, value) = self.entries.as_mut()?.next()?;
		Some((Data::new(key.to_value()), Data::new(value.clone())))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.entries.as_ref().map_or((0, Some(0)), Iterator::size_hint)
	}
}

impl<'a, M: Mode> IntoIterator for &'a Data<M> {
	type Item = (Data<M>, Data<M>);
	type IntoIter = Iter<'a, M>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
