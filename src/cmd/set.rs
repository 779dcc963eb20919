use inputdata::data::{MutableInputData, Result, Transform};

use crate::cmd::util::{Source, emit_json, load, parse_value};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub source: Source,
	pub path: String,
	/// JSON text, or a plain string when it does not parse.
	pub value: String,
}

/// Assign a value at a path and print the updated document.
pub fn run(args: Args) -> Result<()> {
	let Args { source, path, value } = args;

	let mut data: MutableInputData = load(&source)?;
	data.set(&path, parse_value(&value));
	emit_json(&data)
}
