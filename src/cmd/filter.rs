use inputdata::data::{InputData, Result, Transform};

use crate::cmd::util::{Source, emit_json, load};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub source: Source,
	#[arg(default_value = "")]
	pub path: String,
	/// Filter nested containers too.
	#[arg(long)]
	pub recursive: bool,
}

/// Drop null, false, zero, and empty entries below a path, keeping keys.
pub fn run(args: Args) -> Result<()> {
	let Args { source, path, recursive } = args;

	let data: InputData = load(&source)?;
	let scoped = data.get(&path);
	let filtered = if recursive { scoped.filter_recursive_truthy() } else { scoped.filter_truthy() };
	emit_json(&filtered)
}
