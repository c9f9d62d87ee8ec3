use crate::Level;

/// The value stored under one key of a [`Level`]: either a deeper level or a leaf.
///
/// Whether a slot can be descended into is decided by its variant alone.
#[derive(Debug, PartialEq, Eq)]
pub enum Slot<K, V> {
	/// A nested level, addressable by extending the key path.
	Level(Level<K, V>),
	/// Any stored value that isn't a nested level.
	Leaf(V),
}

impl<K, V> Slot<K, V> {
	/// Whether this slot holds a nested [`Level`].
	#[must_use]
	pub fn is_level(&self) -> bool {
		matches!(self, Slot::Level(_))
	}

	/// Whether this slot holds a leaf value.
	#[must_use]
	pub fn is_leaf(&self) -> bool {
		matches!(self, Slot::Leaf(_))
	}

	#[must_use]
	#[allow(missing_docs)]
	pub fn as_level(&self) -> Option<&Level<K, V>> {
		match self {
			Slot::Level(level) => Some(level),
			Slot::Leaf(_) => None,
		}
	}

	#[must_use]
	#[allow(missing_docs)]
	pub fn as_level_mut(&mut self) -> Option<&mut Level<K, V>> {
		match self {
			Slot::Level(level) => Some(level),
			Slot::Leaf(_) => None,
		}
	}

	#[must_use]
	#[allow(missing_docs)]
	pub fn as_leaf(&self) -> Option<&V> {
		match self {
			Slot::Level(_) => None,
			Slot::Leaf(value) => Some(value),
		}
	}

	#[must_use]
	#[allow(missing_docs)]
	pub fn as_leaf_mut(&mut self) -> Option<&mut V> {
		match self {
			Slot::Level(_) => None,
			Slot::Leaf(value) => Some(value),
		}
	}

	/// Unwraps the nested [`Level`], handing the slot back otherwise.
	///
	/// # Errors
	///
	/// Iff this is a [`Slot::Leaf`].
	pub fn into_level(self) -> Result<Level<K, V>, Self> {
		match self {
			Slot::Level(level) => Ok(level),
			leaf @ Slot::Leaf(_) => Err(leaf),
		}
	}

	/// Unwraps the leaf value, handing the slot back otherwise.
	///
	/// # Errors
	///
	/// Iff this is a [`Slot::Level`].
	pub fn into_leaf(self) -> Result<V, Self> {
		match self {
			level @ Slot::Level(_) => Err(level),
			Slot::Leaf(value) => Ok(value),
		}
	}
}

impl<K, V> From<Level<K, V>> for Slot<K, V> {
	fn from(level: Level<K, V>) -> Self {
		Slot::Level(level)
	}
}
