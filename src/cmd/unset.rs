use inputdata::data::{MutableInputData, Result, Transform};

use crate::cmd::util::{Source, emit_json, load};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub source: Source,
	pub path: String,
}

/// Remove the entry at a path and print the updated document.
pub fn run(args: Args) -> Result<()> {
	let Args { source, path } = args;

	let mut data: MutableInputData = load(&source)?;
	data.unset(&path);
	emit_json(&data)
}
