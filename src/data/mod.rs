mod codec;
mod coerce;
mod datetime;
mod error;
mod mode;
mod node;
mod path;
mod transform;
mod value;

/// JSON decode and encode entry points and options.
pub use codec::{DecodeOptions, decode, decode_file, decode_file_with, decode_with, encode, encode_pretty, try_decode, try_decode_file};
/// Timestamp and timezone parsing used by `date_time`.
pub use datetime::{parse_timestamp, parse_timezone};
/// Error and result aliases.
pub use error::{DataError, ParseErrorKind, Result};
/// Mutation disciplines, variant aliases, and the shared transform engine.
pub use mode::{CopyOnWrite, ImmutableInputData, InPlace, InputData, Mode, MutableInputData, ReadOnly, Transform};
/// Wrapper type and its iterator.
pub use node::{Data, Iter};
/// Dot-delimited path parser.
pub use path::DataPath;
/// Raw value model.
pub use value::{Foreign, Key, Keyed, Opaque, Shape, Value};
