/// Coercing single-value lookup command.
pub mod get;
/// Container key listing command.
pub mod keys;
/// Truthy filter command.
pub mod filter;
/// Path assignment command.
pub mod set;
/// Path removal command.
pub mod unset;
/// Reindexing command.
pub mod values;

pub(crate) mod util;
