//! Transform engine: pure rebuilds of a raw value, committed by the caller's variant.

use crate::data::coerce::is_loosely_null;
use crate::data::{Data, DataPath, Key, Keyed, Mode, Shape, Value};

/// Default filter predicate.
pub(crate) fn truthy<M: Mode>(value: &Data<M>, _key: &Data<M>) -> bool {
	!is_loosely_null(value.get_data())
}

pub(crate) fn extend(current: &Value, sources: impl Iterator<Item = Value>) -> Value {
	let mut result = match current {
		Value::Keyed(keyed) => keyed.clone(),
		_ => Keyed::new(Shape::Object),
	};
	for source in sources {
		if let Value::Keyed(source) = source {
			replace_recursive(&mut result, source);
		}
	}
	Value::Keyed(result)
}

fn replace_recursive(target: &mut Keyed, source: Keyed) {
	for (key, incoming) in source {
		match (target.get_mut(&key), incoming) {
			(Some(Value::Keyed(existing)), Value::Keyed(incoming)) => replace_recursive(existing, incoming),
			(_, incoming) => {
				target.insert(key, incoming);
			}
		}
	}
}

pub(crate) fn filter<M, F>(current: &Value, predicate: &mut F) -> Value
where
	M: Mode,
	F: FnMut(&Data<M>, &Data<M>) -> bool,
{
	let Value::Keyed(keyed) = current else {
		return Value::empty_array();
	};

	let mut result = Keyed::new(keyed.shape());
	for (key, value) in keyed {
		let (value_view, key_view) = views::<M>(key, value);
		if predicate(&value_view, &key_view) {
			result.insert(key.clone(), value_view.into_data());
		}
	}
	Value::Keyed(result)
}

pub(crate) fn filter_recursive<M, F>(current: &Value, predicate: &mut F) -> Value
where
	M: Mode,
	F: FnMut(&Data<M>, &Data<M>) -> bool,
{
	let Value::Keyed(keyed) = current else {
		return Value::empty_array();
	};

	let mut result = Keyed::new(keyed.shape());
	for (key, value) in keyed {
		if value.as_keyed().is_some() {
			result.insert(key.clone(), filter_recursive::<M, F>(value, predicate));
			continue;
		}
		let (value_view, key_view) = views::<M>(key, value);
		if predicate(&value_view, &key_view) {
			result.insert(key.clone(), value_view.into_data());
		}
	}
	Value::Keyed(result)
}

pub(crate) fn map<M, F, R>(current: &Value, callback: &mut F) -> Value
where
	M: Mode,
	F: FnMut(&Data<M>, &Data<M>) -> R,
	R: Into<Value>,
{
	let Value::Keyed(keyed) = current else {
		return Value::empty_array();
	};

	let mut result = Keyed::new(keyed.shape());
	for (key, value) in keyed {
		let (value_view, key_view) = views::<M>(key, value);
		result.insert(key.clone(), callback(&value_view, &key_view).into());
	}
	Value::Keyed(result)
}

pub(crate) fn map_recursive<M, F, R>(current: &Value, callback: &mut F) -> Value
where
	M: Mode,
	F: FnMut(&Data<M>, &Data<M>) -> R,
	R: Into<Value>,
{
	let Value::Keyed(keyed) = current else {
		return Value::empty_array();
	};

	let mut result = Keyed::new(keyed.shape());
	for (key, value) in keyed {
		let mapped = if value.as_keyed().is_some() {
			map_recursive::<M, F, R>(value, callback)
		} else {
			let (value_view, key_view) = views::<M>(key, value);
			callback(&value_view, &key_view).into()
		};
		result.insert(key.clone(), mapped);
	}
	Value::Keyed(result)
}

/// Concatenate two values viewed as lists: index keys are renumbered, named
/// keys are inserted or overwritten in place.
pub(crate) fn merge(current: &Value, other: &Value) -> Value {
	let mut result = Keyed::new(Shape::Array);
	let mut next = 0_u64;
	for source in [current, other] {
		let Value::Keyed(keyed) = source else {
			continue;
		};
		for (key, value) in keyed {
			match key {
				Key::Index(_) => {
					result.insert(Key::Index(next), value.clone());
					next += 1;
				}
				Key::Name(_) => {
					result.insert(key.clone(), value.clone());
				}
			}
		}
	}
	Value::Keyed(result)
}

pub(crate) fn values(current: &Value) -> Value {
	match current {
		Value::Keyed(keyed) => Value::array(keyed.values().cloned()),
		_ => Value::empty_array(),
	}
}

/// Assign at `path`. A non-container root becomes an empty record; missing or
/// non-container intermediates become empty containers shaped like their parent.
pub(crate) fn set(current: &Value, path: &DataPath, value: Value) -> Value {
	let Some((last, parents)) = path.split_last() else {
		return value;
	};

	set_at(current.clone(), Shape::Object, parents, last, value)
}

fn set_at(node: Value, shape: Shape, parents: &[Key], last: &Key, value: Value) -> Value {
	let mut keyed = match node {
		Value::Keyed(keyed) => keyed,
		_ => Keyed::new(shape),
	};
	match parents.split_first() {
		None => {
			keyed.insert(last.clone(), value);
		}
		Some((segment, rest)) => {
			let shape = keyed.shape();
			let slot = keyed.slot(segment.clone());
			*slot = set_at(std::mem::replace(slot, Value::Null), shape, rest, last, value);
		}
	}
	Value::Keyed(keyed)
}

/// Remove the entry at `path`. Any absent, null, or non-container
/// intermediate leaves the value unchanged.
pub(crate) fn unset(current: &Value, path: &DataPath) -> Value {
	let mut root = current.clone();
	if let Some((last, parents)) = path.split_last() {
		remove_at(&mut root, parents, last);
	}
	root
}

fn remove_at(node: &mut Value, parents: &[Key], last: &Key) {
	let Some(keyed) = node.as_keyed_mut() else {
		return;
	};
	match parents.split_first() {
		None => {
			keyed.remove(last);
		}
		Some((segment, rest)) => {
			if let Some(child) = keyed.get_mut(segment) {
				remove_at(child, rest, last);
			}
		}
	}
}

fn views<M: Mode>(key: &Key, value: &Value) -> (Data<M>, Data<M>) {
	(Data::new(value.clone()), Data::new(key.to_value()))
}
