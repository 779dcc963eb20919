use std::fmt;

use crate::data::{Data, DataError, DataPath, Result, Value, transform};

mod sealed {
	pub trait Sealed {}
}

/// Mutation discipline of a wrapper, selected at the type level.
pub trait Mode: sealed::Sealed + Copy + Default + fmt::Debug + PartialEq + Eq + Send + Sync + 'static {
	/// Whether direct writes (`assign`/`remove`) are accepted.
	const WRITABLE: bool;
}

/// Read-only wrappers: transforms return new wrappers, direct writes fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOnly;

/// Copy-on-write wrappers: transforms and direct writes return new wrappers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyOnWrite;

/// In-place wrappers: transforms and direct writes mutate the receiver.
///
/// Every mutation needs `&mut`, so sharing one across threads requires
/// external synchronization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InPlace;

impl sealed::Sealed for ReadOnly {}
impl sealed::Sealed for CopyOnWrite {}
impl sealed::Sealed for InPlace {}

impl Mode for ReadOnly {
	const WRITABLE: bool = false;
}

impl Mode for CopyOnWrite {
	const WRITABLE: bool = true;
}

impl Mode for InPlace {
	const WRITABLE: bool = true;
}

/// Read-only wrapper.
pub type InputData = Data<ReadOnly>;
/// Copy-on-write wrapper.
pub type ImmutableInputData = Data<CopyOnWrite>;
/// In-place wrapper.
pub type MutableInputData = Data<InPlace>;

/// Shared transform engine with a per-variant commit hook.
///
/// Implemented for `&InputData` and `&ImmutableInputData`, which commit into a
/// new wrapper, and for `&mut MutableInputData`, which commits into the
/// receiver and hands it back for chaining.
pub trait Transform: Sized {
	/// Variant of the wrapper being transformed.
	type Mode: Mode;
	/// Result of a commit.
	type Output;

	/// Wrapper whose value feeds the engine.
	fn source(&self) -> &Data<Self::Mode>;

	/// Store a rebuilt value according to the variant.
	fn commit(self, value: Value) -> Self::Output;

	/// Recursively merge `sources` into the current value, left to right.
	fn extend<I, V>(self, sources: I) -> Self::Output
	where
		I: IntoIterator<Item = V>,
		V: Into<Value>,
	{
		let value = transform::extend(self.source().get_data(), sources.into_iter().map(Into::into));
		self.commit(value)
	}

	/// Keep entries where `predicate(value, key)` holds; keys are preserved.
	fn filter<F>(self, mut predicate: F) -> Self::Output
	where
		F: FnMut(&Data<Self::Mode>, &Data<Self::Mode>) -> bool,
	{
		let value = transform::filter::<Self::Mode, F>(self.source().get_data(), &mut predicate);
		self.commit(value)
	}

	/// Keep truthy entries.
	fn filter_truthy(self) -> Self::Output {
		self.filter(transform::truthy::<Self::Mode>)
	}

	/// Like `filter`, but nested containers are filtered instead of tested.
	fn filter_recursive<F>(self, mut predicate: F) -> Self::Output
	where
		F: FnMut(&Data<Self::Mode>, &Data<Self::Mode>) -> bool,
	{
		let value = transform::filter_recursive::<Self::Mode, F>(self.source().get_data(), &mut predicate);
		self.commit(value)
	}

	/// Keep truthy leaves at every depth.
	fn filter_recursive_truthy(self) -> Self::Output {
		self.filter_recursive(transform::truthy::<Self::Mode>)
	}

	/// Replace each value with `callback(value, key)`.
	fn map<F, R>(self, mut callback: F) -> Self::Output
	where
		F: FnMut(&Data<Self::Mode>, &Data<Self::Mode>) -> R,
		R: Into<Value>,
	{
		let value = transform::map::<Self::Mode, F, R>(self.source().get_data(), &mut callback);
		self.commit(value)
	}

	/// Replace each leaf with `callback(value, key)`, descending into containers.
	fn map_recursive<F, R>(self, mut callback: F) -> Self::Output
	where
		F: FnMut(&Data<Self::Mode>, &Data<Self::Mode>) -> R,
		R: Into<Value>,
	{
		let value = transform::map_recursive::<Self::Mode, F, R>(self.source().get_data(), &mut callback);
		self.commit(value)
	}

	/// Append `other` as a list, renumbering index keys.
	fn merge(self, other: impl Into<Value>) -> Self::Output {
		let value = transform::merge(self.source().get_data(), &other.into());
		self.commit(value)
	}

	/// Drop keys and renumber from zero.
	fn values(self) -> Self::Output {
		let value = transform::values(self.source().get_data());
		self.commit(value)
	}

	/// Assign `value` at `path`, creating records for missing intermediates.
	fn set(self, path: &str, value: impl Into<Value>) -> Self::Output {
		let value = transform::set(self.source().get_data(), &DataPath::parse(path), value.into());
		self.commit(value)
	}

	/// Remove the entry at `path`; absent paths leave the value unchanged.
	fn unset(self, path: &str) -> Self::Output {
		let value = transform::unset(self.source().get_data(), &DataPath::parse(path));
		self.commit(value)
	}

	/// Direct single-field write.
	fn assign(self, path: &str, value: impl Into<Value>) -> Result<Self::Output> {
		if !<Self::Mode as Mode>::WRITABLE {
			return Err(DataError::Mutation { operation: "set property" });
		}
		Ok(self.set(path, value))
	}

	/// Direct single-field delete.
	fn remove(self, path: &str) -> Result<Self::Output> {
		if !<Self::Mode as Mode>::WRITABLE {
			return Err(DataError::Mutation { operation: "unset property" });
		}
		Ok(self.unset(path))
	}
}

impl Transform for &Data<ReadOnly> {
	type Mode = ReadOnly;
	type Output = Data<ReadOnly>;

	fn source(&self) -> &Data<ReadOnly> {
		self
	}

	fn commit(self, value: Value) -> Self::Output {
		tracing::trace!(target: "inputdata::commit", mode = "read-only", kind = value.kind_name(), "commit to new wrapper");
		Data::new(value)
	}
}

impl Transform for &Data<CopyOnWrite> {
	type Mode = CopyOnWrite;
	type Output = Data<CopyOnWrite>;

	fn source(&self) -> &Data<CopyOnWrite> {
		self
	}

	fn commit(self, value: Value) -> Self::Output {
		tracing::trace!(target: "inputdata::commit", mode = "copy-on-write", kind = value.kind_name(), "commit to new wrapper");
		Data::new(value)
	}
}

impl<'a> Transform for &'a mut Data<InPlace> {
	type Mode = InPlace;
	type Output = &'a mut Data<InPlace>;

	fn source(&self) -> &Data<InPlace> {
		self
	}

	fn commit(self, value: Value) -> Self::Output {
		tracing::trace!(target: "inputdata::commit", mode = "in-place", kind = value.kind_name(), "commit into receiver");
		self.replace(value);
		self
	}
}

#[cfg(test)]
mod tests;
