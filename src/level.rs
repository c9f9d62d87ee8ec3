use crate::{
	iter::{Entries, Keys, Values},
	Slot,
};
use alloc::{borrow::ToOwned, vec::Vec};
use core::borrow::Borrow;

/// One insertion-ordered level of a [`PathMap`](`crate::PathMap`).
///
/// Keys only need to be [`Eq`]. Lookups are linear, which is fine for the small fan-out typical of nested configuration-like data.
#[derive(Debug, PartialEq, Eq)]
pub struct Level<K, V> {
	entries: Vec<(K, Slot<K, V>)>,
}

impl<K, V> Default for Level<K, V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<K, V> Level<K, V> {
	/// Creates a new empty [`Level`].
	#[must_use]
	pub const fn new() -> Self {
		Self {
			entries: Vec::new(),
		}
	}

	/// The number of entries directly in this level.
	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	#[allow(missing_docs)]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Removes all entries, dropping any nested levels with them.
	pub fn clear(&mut self) {
		self.entries.clear()
	}

	/// Iterates over this level's keys in insertion order.
	pub fn keys(&self) -> Keys<'_, K, V> {
		Keys::new(&self.entries)
	}

	/// Iterates over this level's slots in insertion order.
	pub fn values(&self) -> Values<'_, K, V> {
		Values::new(&self.entries)
	}

	/// Iterates over this level's entries in insertion order.
	pub fn iter(&self) -> Entries<'_, K, V> {
		Entries::new(&self.entries)
	}

	pub(crate) fn position<Q>(&self, key: &Q) -> Option<usize>
	where
		K: Borrow<Q>,
		Q: ?Sized + Eq,
	{
		self.entries.iter().position(|(k, _)| key == k.borrow())
	}

	/// Retrieves a reference to the slot associated with `key`, iff available.
	pub fn get<Q>(&self, key: &Q) -> Option<&Slot<K, V>>
	where
		K: Borrow<Q>,
		Q: ?Sized + Eq,
	{
		self.entries
			.iter()
			.find_map(|(k, slot)| (key == k.borrow()).then_some(slot))
	}

	/// Retrieves a mutable reference to the slot associated with `key`, iff available.
	pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut Slot<K, V>>
	where
		K: Borrow<Q>,
		Q: ?Sized + Eq,
	{
		self.position(key).map(|index| &mut self.entries[index].1)
	}

	#[must_use]
	#[allow(missing_docs)]
	pub fn contains_key<Q>(&self, key: &Q) -> bool
	where
		K: Borrow<Q>,
		Q: ?Sized + Eq,
	{
		self.position(key).is_some()
	}

	/// Stores `slot` under `key`, returning the slot it replaced.
	///
	/// A new key is appended. Replacing keeps the key's original position.
	pub fn insert(&mut self, key: K, slot: Slot<K, V>) -> Option<Slot<K, V>>
	where
		K: Eq,
	{
		if let Some(index) = self.position(&key) {
			Some(core::mem::replace(&mut self.entries[index].1, slot))
		} else {
			self.entries.push((key, slot));
			None
		}
	}

	/// Removes the entry for `key`, returning its slot iff it was present.
	///
	/// The remaining entries keep their relative order.
	pub fn remove<Q>(&mut self, key: &Q) -> Option<Slot<K, V>>
	where
		K: Borrow<Q>,
		Q: ?Sized + Eq,
	{
		self.position(key).map(|index| self.entries.remove(index).1)
	}

	/// Like [`.insert(…)`](`Level::insert`), but only converts `key` to an owned key iff it's absent.
	pub(crate) fn replace_or_push<Q>(&mut self, key: &Q, slot: Slot<K, V>) -> Option<Slot<K, V>>
	where
		K: Borrow<Q>,
		Q: ?Sized + Eq + ToOwned<Owned = K>,
	{
		if let Some(index) = self.position(key) {
			Some(core::mem::replace(&mut self.entries[index].1, slot))
		} else {
			self.entries.push((key.to_owned(), slot));
			None
		}
	}

	/// Returns the nested level under `key`, creating it iff `key` is absent.
	///
	/// # Errors
	///
	/// Iff `key` maps to a leaf value. Nothing is modified in that case.
	pub(crate) fn child_or_insert_with<Q>(&mut self, key: &Q) -> Result<&mut Self, ()>
	where
		K: Borrow<Q>,
		Q: ?Sized + Eq + ToOwned<Owned = K>,
	{
		let index = self.position(key).unwrap_or_else(|| {
			self.entries.push((key.to_owned(), Slot::Level(Self::new())));
			self.entries.len() - 1
		});
		self.entries[index].1.as_level_mut().ok_or(())
	}
}

impl<'a, K, V> IntoIterator for &'a Level<K, V> {
	type Item = (&'a K, &'a Slot<K, V>);
	type IntoIter = Entries<'a, K, V>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn insert_keeps_position_on_replace() {
		let mut level = Level::new();
		assert!(level.insert("a", Slot::Leaf(1)).is_none());
		assert!(level.insert("b", Slot::Leaf(2)).is_none());
		assert_eq!(level.insert("a", Slot::Leaf(3)), Some(Slot::Leaf(1)));

		assert!(level.keys().copied().eq(["a", "b"]));
		assert_eq!(level.get("a").and_then(Slot::as_leaf), Some(&3));
	}

	#[test]
	fn remove_preserves_order() {
		let mut level = Level::new();
		for (i, key) in ["a", "b", "c", "d"].into_iter().enumerate() {
			level.insert(key, Slot::Leaf(i));
		}

		assert_eq!(level.remove("b"), Some(Slot::Leaf(1)));
		assert_eq!(level.remove("b"), None);
		assert!(level.keys().copied().eq(["a", "c", "d"]));
		assert_eq!(level.len(), 3);
	}

	#[test]
	fn child_or_insert_with() {
		let mut level = Level::<&str, i32>::new();
		level.insert("leaf", Slot::Leaf(1));

		level
			.child_or_insert_with(&"nested")
			.expect("absent key")
			.insert("inner", Slot::Leaf(2));
		assert!(level.get("nested").is_some_and(Slot::is_level));
		assert_eq!(
			level
				.child_or_insert_with(&"nested")
				.expect("existing level")
				.len(),
			1
		);

		assert!(level.child_or_insert_with(&"leaf").is_err());
		assert_eq!(level.get("leaf"), Some(&Slot::Leaf(1)));
		assert_eq!(level.len(), 2);
	}

	#[test]
	fn non_string_keys() {
		let mut level = Level::new();
		level.insert((1, 'x'), Slot::Leaf("tuple"));
		level.insert((2, 'y'), Slot::Level(Level::new()));

		assert!(level.contains_key(&(1, 'x')));
		assert!(!level.contains_key(&(1, 'y')));
		assert!(level.get(&(2, 'y')).is_some_and(Slot::is_level));
	}
}
