use inputdata::data::{InputData, Result, Value};

use crate::cmd::util::{Source, emit_json, load, parse_value};

/// Accessor used to read the value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Kind {
	/// Unconverted value.
	#[default]
	Raw,
	String,
	Int,
	Decimal,
	Bool,
	/// Timestamp rendered as RFC 3339.
	Date,
	/// Embedded JSON text, decoded.
	Json,
	/// Container as a list-like value.
	Arr,
	/// Container as a record-like value.
	Object,
}

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub source: Source,
	#[arg(default_value = "")]
	pub path: String,
	#[arg(long = "as", value_enum, default_value_t = Kind::Raw)]
	pub kind: Kind,
	/// Fallback when the value is missing or cannot be converted.
	#[arg(long)]
	pub default: Option<String>,
	/// IANA timezone for zone-less timestamps.
	#[arg(long = "tz")]
	pub timezone: Option<String>,
}

/// Read one value through a coercing accessor and print it as JSON.
pub fn run(args: Args) -> Result<()> {
	let data: InputData = load(&args.source)?;
	let value = extract(&data, &args.path, args.kind, args.default.as_deref(), args.timezone.as_deref());
	emit_json(&value)
}

/// Apply the accessor for `kind`. Defaults go through the same coercion as the data.
pub(crate) fn extract(data: &InputData, path: &str, kind: Kind, default: Option<&str>, timezone: Option<&str>) -> Value {
	let fallback = InputData::new(default.map_or(Value::Null, parse_value));
	match kind {
		Kind::Raw => data.raw(path, fallback),
		Kind::String => data.string_opt(path).or_else(|| default.map(str::to_owned)).into(),
		Kind::Int => data.int_opt(path).or_else(|| fallback.int_opt("")).into(),
		Kind::Decimal => data.decimal_opt(path).or_else(|| fallback.decimal_opt("")).into(),
		Kind::Bool => data.bool_opt(path).or_else(|| fallback.bool_opt("")).into(),
		Kind::Date => data.date_time(path, timezone, default).map(|parsed| parsed.to_rfc3339()).into(),
		Kind::Json => data.json_or(path, fallback.arr("")).into_data(),
		Kind::Arr => data.arr_or(path, fallback.arr("")).into_data(),
		Kind::Object => data.object_or(path, fallback).into_data(),
	}
}
