use inputdata::data::{InputData, Result, Transform};

use crate::cmd::util::{Source, emit_json, load};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub source: Source,
	#[arg(default_value = "")]
	pub path: String,
}

/// Print the values below a path as a list, dropping keys.
pub fn run(args: Args) -> Result<()> {
	let Args { source, path } = args;

	let data: InputData = load(&source)?;
	emit_json(&data.get(&path).values())
}
