//! Errors for the few [`PathMap`](`crate::PathMap`) calls that can be misused.
//!
//! A key path that simply doesn't resolve is never an error.

use alloc::vec::Vec;
use thiserror::Error;

/// An operation that addresses a single slot was given an empty key path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a key path needs at least one key")]
pub struct ArgumentError;

/// [`PathMap::set`](`crate::PathMap::set`) had to descend through a slot that holds a leaf value.
///
/// The map is left as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot create a nested level at segment {depth} of a {len}-key path: a leaf value occupies it", len = .path.len())]
pub struct ConflictError<K> {
	path: Vec<K>,
	depth: usize,
}

impl<K> ConflictError<K> {
	pub(crate) fn new(path: Vec<K>, depth: usize) -> Self {
		debug_assert!(depth < path.len());
		Self { path, depth }
	}

	/// The key that maps to a leaf where a nested level was required.
	#[must_use]
	pub fn key(&self) -> &K {
		&self.path[self.depth]
	}

	/// The full key path that was written to, including the final key.
	#[must_use]
	pub fn path(&self) -> &[K] {
		&self.path
	}

	/// Index of [`.key()`](`ConflictError::key`) within [`.path()`](`ConflictError::path`).
	#[must_use]
	pub fn depth(&self) -> usize {
		self.depth
	}

	/// Recovers the attempted key path.
	#[must_use]
	pub fn into_path(self) -> Vec<K> {
		self.path
	}
}

/// Failure of [`PathMap::set`](`crate::PathMap::set`) or [`PathMap::insert`](`crate::PathMap::insert`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError<K> {
	/// The key path was empty.
	#[error(transparent)]
	Argument(#[from] ArgumentError),
	/// A leaf value blocked the creation of a nested level.
	#[error(transparent)]
	Conflict(#[from] ConflictError<K>),
}

impl<K> SetError<K> {
	/// Returns the conflict details, iff this is a [`SetError::Conflict`].
	#[must_use]
	pub fn as_conflict(&self) -> Option<&ConflictError<K>> {
		match self {
			SetError::Argument(_) => None,
			SetError::Conflict(conflict) => Some(conflict),
		}
	}
}
