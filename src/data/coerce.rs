//! Scalar coercion rules shared by the accessors and the transform engine.

use crate::data::Value;

/// Number recognized in a scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Numeric {
	Int(i64),
	Float(f64),
}

impl Numeric {
	/// Truncate toward zero; out-of-range floats saturate and NaN becomes zero.
	pub fn to_int(self) -> i64 {
		match self {
			Numeric::Int(v) => v,
			Numeric::Float(v) => v as i64,
		}
	}

	pub fn to_float(self) -> f64 {
		match self {
			Numeric::Int(v) => v as f64,
			Numeric::Float(v) => v,
		}
	}
}

/// Scalars, plus opaque values that expose a string form.
pub(crate) fn is_castable(value: &Value) -> bool {
	match value {
		Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::String(_) => true,
		Value::Opaque(opaque) => opaque.to_text().is_some(),
		Value::Null | Value::Keyed(_) => false,
	}
}

/// String form of a castable value.
pub(crate) fn to_text(value: &Value) -> Option<String> {
	match value {
		Value::Bool(true) => Some("1".to_owned()),
		Value::Bool(false) => Some(String::new()),
		Value::Int(v) => Some(v.to_string()),
		Value::Float(v) => Some(format_float(*v)),
		Value::String(v) => Some(v.clone()),
		Value::Opaque(opaque) => opaque.to_text(),
		Value::Null | Value::Keyed(_) => None,
	}
}

/// Truthiness of a castable value.
///
/// `""`, `"0"`, zero and `false` are false; every other castable value is true.
pub(crate) fn to_bool(value: &Value) -> Option<bool> {
	match value {
		Value::Bool(v) => Some(*v),
		Value::Int(v) => Some(*v != 0),
		Value::Float(v) => Some(*v != 0.0),
		Value::String(v) => Some(!(v.is_empty() || v == "0")),
		Value::Opaque(opaque) => opaque.to_text().map(|_| true),
		Value::Null | Value::Keyed(_) => None,
	}
}

/// Numeric reading of a castable value. Booleans are castable but not numeric.
pub(crate) fn to_numeric(value: &Value) -> Option<Numeric> {
	match value {
		Value::Int(v) => Some(Numeric::Int(*v)),
		Value::Float(v) => Some(Numeric::Float(*v)),
		Value::String(v) => parse_numeric(v),
		Value::Opaque(opaque) => opaque.to_text().and_then(|text| parse_numeric(&text)),
		Value::Bool(_) | Value::Null | Value::Keyed(_) => None,
	}
}

/// True for values the default filter predicate drops: null, false, zero, `""`, and empty containers.
pub(crate) fn is_loosely_null(value: &Value) -> bool {
	match value {
		Value::Null => true,
		Value::Bool(v) => !v,
		Value::Int(v) => *v == 0,
		Value::Float(v) => *v == 0.0,
		Value::String(v) => v.is_empty(),
		Value::Keyed(keyed) => keyed.is_empty(),
		Value::Opaque(_) => false,
	}
}

/// Emptiness as reported by `is_empty()`: loosely null, or the string `"0"`.
pub(crate) fn is_empty(value: &Value) -> bool {
	match value {
		Value::String(v) => v.is_empty() || v == "0",
		other => is_loosely_null(other),
	}
}

const SPACE: &[char] = &[' ', '\t', '\n', '\r', '\u{0b}', '\u{0c}'];

/// Parse a numeric-looking string.
///
/// Accepts surrounding whitespace, an optional sign, digits with an optional
/// fraction, and an optional exponent. Hex, octal prefixes, `inf` and `nan`
/// are rejected.
pub(crate) fn parse_numeric(text: &str) -> Option<Numeric> {
	let trimmed = text.trim_matches(SPACE);
	let bytes = trimmed.as_bytes();
	let mut idx = 0_usize;

	if idx < bytes.len() && (bytes[idx] == b'+' || bytes[idx] == b'-') {
		idx += 1;
	}

	let int_start = idx;
	while idx < bytes.len() && bytes[idx].is_ascii_digit() {
		idx += 1;
	}
	let int_digits = idx - int_start;

	let mut frac_digits = 0_usize;
	let mut is_float = false;
	if idx < bytes.len() && bytes[idx] == b'.' {
		is_float = true;
		idx += 1;
		let frac_start = idx;
		while idx < bytes.len() && bytes[idx].is_ascii_digit() {
			idx += 1;
		}
		frac_digits = idx - frac_start;
	}

	if int_digits == 0 && frac_digits == 0 {
		return None;
	}

	if idx < bytes.len() && (bytes[idx] == b'e' || bytes[idx] == b'E') {
		is_float = true;
		idx += 1;
		if idx < bytes.len() && (bytes[idx] == b'+' || bytes[idx] == b'-') {
			idx += 1;
		}
		let exp_start = idx;
		while idx < bytes.len() && bytes[idx].is_ascii_digit() {
			idx += 1;
		}
		if idx == exp_start {
			return None;
		}
	}

	if idx != bytes.len() {
		return None;
	}

	if !is_float && let Ok(v) = trimmed.parse::<i64>() {
		return Some(Numeric::Int(v));
	}
	trimmed.parse::<f64>().ok().map(Numeric::Float)
}

/// Render a float the way loosely typed input expects: integral values
/// without a fraction, very large or small magnitudes in `1.0E+25` form.
pub(crate) fn format_float(value: f64) -> String {
	if value.is_nan() {
		return "NAN".to_owned();
	}
	if value.is_infinite() {
		return if value > 0.0 { "INF".to_owned() } else { "-INF".to_owned() };
	}

	let magnitude = value.abs();
	if magnitude != 0.0 && !(1e-4..1e15).contains(&magnitude) {
		let rendered = format!("{value:E}");
		let (mantissa, exponent) = rendered.split_once('E').unwrap_or((rendered.as_str(), "0"));
		let mantissa = if mantissa.contains('.') { mantissa.to_owned() } else { format!("{mantissa}.0") };
		let exponent = if exponent.starts_with('-') { exponent.to_owned() } else { format!("+{exponent}") };
		return format!("{mantissa}E{exponent}");
	}

	if value.fract() == 0.0 {
		return format!("{}", value as i64);
	}
	format!("{value}")
}
