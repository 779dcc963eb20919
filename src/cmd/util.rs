use std::path::PathBuf;

use inputdata::data::{Data, DecodeOptions, Mode, Result, Value, decode_file_with};
use serde::Serialize;

/// Input file flags shared by every command.
#[derive(clap::Args)]
pub struct Source {
	/// JSON document to read.
	pub file: PathBuf,
	/// Treat unreadable or malformed input as null instead of failing.
	#[arg(long)]
	pub lenient: bool,
	/// Decode JSON objects as list-like containers.
	#[arg(long)]
	pub associative: bool,
}

/// Decode the source file into a wrapper of the requested variant.
pub(crate) fn load<M: Mode>(source: &Source) -> Result<Data<M>> {
	let opt = DecodeOptions {
		objects_as_arrays: source.associative,
	};
	match decode_file_with(&source.file, &opt) {
		Ok(data) => Ok(data),
		Err(err) if source.lenient => {
			tracing::warn!(file = %source.file.display(), error = %err, "continuing with null input");
			Ok(Data::new(Value::Null))
		}
		Err(err) => Err(err),
	}
}

/// Parse a command-line value as JSON, keeping it as a plain string otherwise.
pub(crate) fn parse_value(text: &str) -> Value {
	match serde_json::from_str::<serde_json::Value>(text) {
		Ok(json) => Value::from(json),
		Err(_) => Value::from(text),
	}
}

/// Print a serializable payload as indented JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}
