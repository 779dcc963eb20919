//! Type-coercing, path-aware accessors over loosely structured input data.

/// Raw value model, wrappers, transforms, and JSON codec helpers.
pub mod data;
