use crate::data::{Key, Value};

/// Parsed dot-delimited path.
///
/// An empty path addresses the whole current value; it never means a single
/// empty-string segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPath {
	/// Ordered descent steps.
	pub segments: Vec<Key>,
}

impl DataPath {
	/// Split `input` on `.` and normalize each segment.
	pub fn parse(input: &str) -> Self {
		if input.is_empty() {
			return Self { segments: Vec::new() };
		}
		Self {
			segments: input.split('.').map(Key::parse).collect(),
		}
	}

	/// True when the path addresses the whole value.
	pub fn is_whole(&self) -> bool {
		self.segments.is_empty()
	}

	/// Intermediate segments and the final one.
	pub fn split_last(&self) -> Option<(&Key, &[Key])> {
		self.segments.split_last()
	}
}

impl From<&str> for DataPath {
	fn from(value: &str) -> Self {
		DataPath::parse(value)
	}
}

/// Container one level above the final segment, plus that segment.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Resolved<'a, 'p> {
	/// `None` when a missing or scalar intermediate was absorbed into an empty record.
	pub container: Option<&'a Value>,
	/// `None` when the path addresses the whole value.
	pub name: Option<&'p Key>,
}

/// Descend all but the last segment of `path`.
pub(crate) fn resolve<'a, 'p>(value: &'a Value, path: &'p DataPath) -> Resolved<'a, 'p> {
	let Some((last, parents)) = path.split_last() else {
		return Resolved {
			container: Some(value),
			name: None,
		};
	};

	let mut current = Some(value);
	for segment in parents {
		current = current.and_then(Value::as_keyed).and_then(|keyed| keyed.get(segment));
	}

	Resolved {
		container: current,
		name: Some(last),
	}
}

/// Value at the resolved position, if present. Present-but-null counts as present.
pub(crate) fn get_value<'a>(resolved: Resolved<'a, '_>) -> Option<&'a Value> {
	let container = resolved.container?;
	match resolved.name {
		None => Some(container),
		Some(name) => container.as_keyed()?.get(name),
	}
}

/// Lookup `path` in `value`.
pub(crate) fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
	let path = DataPath::parse(path);
	get_value(resolve(value, &path))
}

#[cfg(test)]
mod tests;
