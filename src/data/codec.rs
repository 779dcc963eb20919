use std::path::Path;

use crate::data::{Data, DataError, Mode, Result, Value};

/// Controls how JSON text becomes raw values.
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
	/// Decode JSON objects into list-like containers with named keys instead of records.
	pub objects_as_arrays: bool,
}

impl DecodeOptions {
	/// Preset decoding every JSON object as a list-like container.
	pub fn associative() -> Self {
		Self { objects_as_arrays: true }
	}
}

/// Strictly decode JSON text into a wrapper.
pub fn decode<M: Mode>(text: &str) -> Result<Data<M>> {
	decode_with(text, &DecodeOptions::default())
}

/// Strictly decode JSON text with explicit options.
pub fn decode_with<M: Mode>(text: &str, opt: &DecodeOptions) -> Result<Data<M>> {
	let json = serde_json::from_str::<serde_json::Value>(text).map_err(|err| DataError::from_parse(&err))?;
	Ok(Data::new(Value::from_json(json, opt.objects_as_arrays)))
}

/// Decode JSON text, yielding a wrapped null on failure.
pub fn try_decode<M: Mode>(text: &str) -> Data<M> {
	decode(text).unwrap_or_else(|err| {
		tracing::debug!(error = %err, "lenient decode swallowed error");
		Data::new(Value::Null)
	})
}

/// Read and strictly decode a JSON file.
pub fn decode_file<M: Mode>(path: impl AsRef<Path>) -> Result<Data<M>> {
	decode_file_with(path, &DecodeOptions::default())
}

/// Read and strictly decode a JSON file with explicit options.
pub fn decode_file_with<M: Mode>(path: impl AsRef<Path>, opt: &DecodeOptions) -> Result<Data<M>> {
	let path = path.as_ref();
	let text = std::fs::read_to_string(path).map_err(|source| DataError::FileRead {
		path: path.to_path_buf(),
		source,
	})?;
	decode_with(&text, opt)
}

/// Read and decode a JSON file, yielding a wrapped null on read or parse failure.
pub fn try_decode_file<M: Mode>(path: impl AsRef<Path>) -> Data<M> {
	let path = path.as_ref();
	decode_file(path).unwrap_or_else(|err| {
		tracing::debug!(path = %path.display(), error = %err, "lenient file decode swallowed error");
		Data::new(Value::Null)
	})
}

/// Encode the unwrapped value as compact JSON text.
pub fn encode<M: Mode>(data: &Data<M>) -> Result<String> {
	Ok(serde_json::to_string(data)?)
}

/// Encode the unwrapped value as indented JSON text.
pub fn encode_pretty<M: Mode>(data: &Data<M>) -> Result<String> {
	Ok(serde_json::to_string_pretty(data)?)
}

impl<M: Mode> Data<M> {
	/// See [`decode`].
	pub fn decode(text: &str) -> Result<Self> {
		decode(text)
	}

	/// See [`try_decode`].
	pub fn try_decode(text: &str) -> Self {
		try_decode(text)
	}

	/// See [`decode_file`].
	pub fn decode_file(path: impl AsRef<Path>) -> Result<Self> {
		decode_file(path)
	}

	/// See [`try_decode_file`].
	pub fn try_decode_file(path: impl AsRef<Path>) -> Self {
		try_decode_file(path)
	}

	/// See [`encode`].
	pub fn encode(&self) -> Result<String> {
		encode(self)
	}
}
