#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing::Level;

mod cmd;

#[derive(Parser)]
#[command(name = "inputdata", about = "Query and reshape loosely structured JSON input")]
struct Cli {
	/// Log decode fallbacks to stderr.
	#[arg(long, short, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Read one value through a coercing accessor.
	Get(cmd::get::Args),
	/// List container keys.
	Keys(cmd::keys::Args),
	/// Assign a value at a path.
	Set(cmd::set::Args),
	/// Remove the entry at a path.
	Unset(cmd::unset::Args),
	/// Drop empty entries.
	Filter(cmd::filter::Args),
	/// Reindex values as a list.
	Values(cmd::values::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> inputdata::data::Result<()> {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match cli.command {
		Commands::Get(args) => cmd::get::run(args),
		Commands::Keys(args) => cmd::keys::run(args),
		Commands::Set(args) => cmd::set::run(args),
		Commands::Unset(args) => cmd::unset::run(args),
		Commands::Filter(args) => cmd::filter::run(args),
		Commands::Values(args) => cmd::values::run(args),
	}
}

fn init_tracing(verbose: bool) {
	let level = if verbose { Level::DEBUG } else { Level::WARN };
	tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).with_target(false).init();
}
