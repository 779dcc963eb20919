use inputdata::data::{InputData, Result, Value};

use crate::cmd::util::{Source, emit_json, load};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub source: Source,
	#[arg(default_value = "")]
	pub path: String,
}

/// Print the keys of the container at a path, in order.
pub fn run(args: Args) -> Result<()> {
	let Args { source, path } = args;

	let data: InputData = load(&source)?;
	let keys = Value::array(data.get(&path).iter().map(|(key, _)| key.into_data()));
	emit_json(&keys)
}
