use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors produced by structural decode and write operations.
///
/// Accessors never return these; only decoding, encoding, and direct writes
/// against a read-only wrapper can fail.
#[derive(Debug, Error)]
pub enum DataError {
	/// JSON text could not be parsed.
	#[error("error decoding JSON ({kind}): {message}")]
	Parse {
		/// Parser failure category.
		kind: ParseErrorKind,
		/// Parser message.
		message: String,
		/// One-based line of the failure.
		line: usize,
		/// One-based column of the failure.
		column: usize,
	},
	/// File could not be read.
	#[error("failed to read {}: {source}", path.display())]
	FileRead {
		/// File that was requested.
		path: PathBuf,
		/// Underlying IO failure.
		#[source]
		source: std::io::Error,
	},
	/// Direct write attempted against a read-only wrapper.
	#[error("cannot {operation} of non mutable input data")]
	Mutation {
		/// Rejected write operation.
		operation: &'static str,
	},
	/// Value could not be encoded as JSON text.
	#[error("error encoding JSON: {0}")]
	Encode(#[from] serde_json::Error),
}

/// Category of a JSON parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
	/// Malformed or truncated JSON text.
	Syntax,
	/// Well-formed JSON that could not be represented.
	Data,
	/// Reader failure surfaced by the parser.
	Io,
}

impl fmt::Display for ParseErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ParseErrorKind::Syntax => f.write_str("syntax error"),
			ParseErrorKind::Data => f.write_str("unsupported value"),
			ParseErrorKind::Io => f.write_str("read error"),
		}
	}
}

impl DataError {
	pub(crate) fn from_parse(err: &serde_json::Error) -> Self {
		use serde_json::error::Category;

		let kind = match err.classify() {
			Category::Syntax | Category::Eof => ParseErrorKind::Syntax,
			Category::Data => ParseErrorKind::Data,
			Category::Io => ParseErrorKind::Io,
		};

		DataError::Parse {
			kind,
			message: err.to_string(),
			line: err.line(),
			column: err.column(),
		}
	}
}
