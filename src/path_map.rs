use crate::{
	error::{ArgumentError, ConflictError, SetError},
	iter::{Entries, Keys, Values},
	Level, Slot,
};
use alloc::{borrow::ToOwned, vec::Vec};
use core::borrow::Borrow;
use tap::Pipe;

/// A tree of insertion-ordered [`Level`]s, addressed through key paths.
///
/// Writes through [`.set(…)`](`PathMap::set`) create missing intermediate levels,
/// but never replace a leaf value that's in the way.
/// Reads never fail on a path that doesn't resolve.
///
/// The root level is owned for the whole lifetime of the map and is only ever mutated in place.
///
/// # Key paths
///
/// Paths are slices of keys, starting at the root level.
/// Operations addressing a single slot need at least one key and return [`ArgumentError`] otherwise.
/// Operations addressing a *level* treat the empty path as the root level.
///
/// # Generics Glossary
///
/// - `K`: Stored **K**ey.
/// - `V`: Stored leaf **V**alue.
/// - `Q`: **Q**uery key, borrowed from `K`.
#[derive(Debug, PartialEq, Eq)]
pub struct PathMap<K, V> {
	root: Level<K, V>,
}

impl<K, V> Default for PathMap<K, V> {
	fn default() -> Self {
		Self::new()
	}
}

/// Lookup-mode resolution: follows `path` through existing nested levels only.
fn resolve<'a, K, V, Q>(level: &'a Level<K, V>, path: &[Q]) -> Option<&'a Level<K, V>>
where
	K: Borrow<Q>,
	Q: Eq,
{
	path.iter()
		.try_fold(level, |level, key| level.get(key)?.as_level())
}

fn resolve_mut<'a, K, V, Q>(level: &'a mut Level<K, V>, path: &[Q]) -> Option<&'a mut Level<K, V>>
where
	K: Borrow<Q>,
	Q: Eq,
{
	path.iter()
		.try_fold(level, |level, key| level.get_mut(key)?.as_level_mut())
}

/// Create-mode resolution: like [`resolve_mut`], but absent keys get a new empty level.
///
/// `full_path` is only used to report a conflict and must start with `path`.
fn resolve_or_create<'a, K, V, Q>(
	mut level: &'a mut Level<K, V>,
	path: &[Q],
	full_path: &[Q],
) -> Result<&'a mut Level<K, V>, ConflictError<K>>
where
	K: Borrow<Q>,
	Q: Eq + ToOwned<Owned = K>,
{
	for (depth, key) in path.iter().enumerate() {
		let created = !level.contains_key(key);
		level = match level.child_or_insert_with(key) {
			Ok(child) => child,
			Err(()) => {
				tracing::debug!(depth, len = full_path.len(), "key path collides with a leaf value");
				return full_path
					.iter()
					.map(ToOwned::to_owned)
					.collect::<Vec<_>>()
					.pipe(|path| ConflictError::new(path, depth))
					.pipe(Err);
			}
		};
		if created {
			tracing::trace!(depth, "created nested level");
		}
	}
	Ok(level)
}

/// Splits a slot path into the path of its level and the final key.
fn split_last<Q>(path: &[Q]) -> Result<(&Q, &[Q]), ArgumentError> {
	path.split_last().ok_or(ArgumentError)
}

impl<K, V> PathMap<K, V> {
	/// Creates a new empty [`PathMap`].
	#[must_use]
	pub const fn new() -> Self {
		Self { root: Level::new() }
	}

	/// The root level.
	#[must_use]
	pub fn root(&self) -> &Level<K, V> {
		&self.root
	}

	/// Empties the whole map.
	pub fn clear(&mut self) {
		self.root.clear()
	}

	/// The number of root-level entries.
	#[must_use]
	pub fn size(&self) -> usize {
		self.root.len()
	}

	/// Whether the root level is empty.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.root.is_empty()
	}

	/// Iterates over the root level's keys in insertion order.
	pub fn keys(&self) -> Keys<'_, K, V> {
		self.root.keys()
	}

	/// Iterates over the root level's slots in insertion order.
	pub fn values(&self) -> Values<'_, K, V> {
		self.root.values()
	}

	/// Iterates over the root level's entries in insertion order.
	pub fn entries(&self) -> Entries<'_, K, V> {
		self.root.iter()
	}

	/// Retrieves the level at `path`, iff every key along it maps to a nested level.
	///
	/// The empty path yields the root level.
	pub fn level<Q>(&self, path: &[Q]) -> Option<&Level<K, V>>
	where
		K: Borrow<Q>,
		Q: Eq,
	{
		resolve(&self.root, path)
	}

	/// Retrieves the level at `path` mutably, iff every key along it maps to a nested level.
	pub fn level_mut<Q>(&mut self, path: &[Q]) -> Option<&mut Level<K, V>>
	where
		K: Borrow<Q>,
		Q: Eq,
	{
		resolve_mut(&mut self.root, path)
	}

	/// Empties the level at `path` in place.
	///
	/// The level itself stays where it is. Does nothing iff `path` doesn't resolve to a level.
	pub fn clear_at<Q>(&mut self, path: &[Q])
	where
		K: Borrow<Q>,
		Q: Eq,
	{
		if let Some(level) = self.level_mut(path) {
			tracing::trace!(len = level.len(), "clearing level");
			level.clear();
		}
	}

	/// Whether `path` resolves to a nested level. The empty path always does.
	#[must_use]
	pub fn is_map<Q>(&self, path: &[Q]) -> bool
	where
		K: Borrow<Q>,
		Q: Eq,
	{
		self.level(path).is_some()
	}

	/// The number of entries in the level at `path`, or `0` iff it doesn't resolve.
	#[must_use]
	pub fn size_at<Q>(&self, path: &[Q]) -> usize
	where
		K: Borrow<Q>,
		Q: Eq,
	{
		self.level(path).map_or(0, Level::len)
	}

	/// Iterates over the keys of the level at `path`.
	///
	/// The iterator is empty iff `path` doesn't resolve.
	pub fn keys_at<Q>(&self, path: &[Q]) -> Keys<'_, K, V>
	where
		K: Borrow<Q>,
		Q: Eq,
	{
		self.level(path).map_or_else(Keys::empty, Level::keys)
	}

	/// Iterates over the slots of the level at `path`.
	///
	/// The iterator is empty iff `path` doesn't resolve.
	pub fn values_at<Q>(&self, path: &[Q]) -> Values<'_, K, V>
	where
		K: Borrow<Q>,
		Q: Eq,
	{
		self.level(path).map_or_else(Values::empty, Level::values)
	}

	/// Iterates over the entries of the level at `path`.
	///
	/// The iterator is empty iff `path` doesn't resolve.
	pub fn entries_at<Q>(&self, path: &[Q]) -> Entries<'_, K, V>
	where
		K: Borrow<Q>,
		Q: Eq,
	{
		self.level(path).map_or_else(Entries::empty, Level::iter)
	}

	/// Retrieves the slot at `path`, iff available.
	///
	/// # Errors
	///
	/// Iff `path` is empty.
	pub fn get<Q>(&self, path: &[Q]) -> Result<Option<&Slot<K, V>>, ArgumentError>
	where
		K: Borrow<Q>,
		Q: Eq,
	{
		let (key, parents) = split_last(path)?;
		self.level(parents).and_then(|level| level.get(key)).pipe(Ok)
	}

	/// Retrieves the slot at `path` mutably, iff available.
	///
	/// # Errors
	///
	/// Iff `path` is empty.
	pub fn get_mut<Q>(&mut self, path: &[Q]) -> Result<Option<&mut Slot<K, V>>, ArgumentError>
	where
		K: Borrow<Q>,
		Q: Eq,
	{
		let (key, parents) = split_last(path)?;
		self.level_mut(parents)
			.and_then(|level| level.get_mut(key))
			.pipe(Ok)
	}

	/// Whether there is a slot at `path`.
	///
	/// # Errors
	///
	/// Iff `path` is empty.
	pub fn has<Q>(&self, path: &[Q]) -> Result<bool, ArgumentError>
	where
		K: Borrow<Q>,
		Q: Eq,
	{
		self.get(path).map(|slot| slot.is_some())
	}

	/// Removes the slot at `path` and returns it, iff present.
	///
	/// Levels along the path are kept, even if this leaves them empty.
	///
	/// # Errors
	///
	/// Iff `path` is empty.
	pub fn remove<Q>(&mut self, path: &[Q]) -> Result<Option<Slot<K, V>>, ArgumentError>
	where
		K: Borrow<Q>,
		Q: Eq,
	{
		let (key, parents) = split_last(path)?;
		self.level_mut(parents)
			.and_then(|level| level.remove(key))
			.pipe(Ok)
	}

	/// Removes the slot at `path`, returning whether it was present.
	///
	/// Levels along the path are kept, even if this leaves them empty.
	///
	/// # Errors
	///
	/// Iff `path` is empty.
	pub fn delete<Q>(&mut self, path: &[Q]) -> Result<bool, ArgumentError>
	where
		K: Borrow<Q>,
		Q: Eq,
	{
		self.remove(path).map(|slot| slot.is_some())
	}

	/// Stores `value` as leaf at `path`, creating missing intermediate levels.
	///
	/// Whatever was stored at `path` before is replaced, keeping its position.
	///
	/// Returns the level that received the write.
	///
	/// # Errors
	///
	/// - [`SetError::Argument`] iff `path` is empty.
	/// - [`SetError::Conflict`] iff a key before the last one maps to a leaf value.
	///   Such a key can only precede any newly created level, so the map is left as it was.
	pub fn set<Q>(&mut self, path: &[Q], value: V) -> Result<&mut Level<K, V>, SetError<K>>
	where
		K: Borrow<Q>,
		Q: Eq + ToOwned<Owned = K>,
	{
		self.insert(path, Slot::Leaf(value))
	}

	/// Stores an arbitrary `slot` at `path`, creating missing intermediate levels.
	///
	/// This is [`.set(…)`](`PathMap::set`) for slots, e.g. to graft in a prepared [`Level`].
	///
	/// # Errors
	///
	/// See [`.set(…)`](`PathMap::set`).
	pub fn insert<Q>(&mut self, path: &[Q], slot: Slot<K, V>) -> Result<&mut Level<K, V>, SetError<K>>
	where
		K: Borrow<Q>,
		Q: Eq + ToOwned<Owned = K>,
	{
		let (key, parents) = split_last(path)?;
		let level = resolve_or_create(&mut self.root, parents, path)?;
		level.replace_or_push(key, slot);
		Ok(level)
	}
}

impl<'a, K, V> IntoIterator for &'a PathMap<K, V> {
	type Item = (&'a K, &'a Slot<K, V>);
	type IntoIter = Entries<'a, K, V>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Level<&'static str, i32> {
		let mut root = Level::new();
		let mut nested = Level::new();
		nested.insert("leaf", Slot::Leaf(1));
		root.insert("nested", Slot::Level(nested));
		root.insert("top", Slot::Leaf(2));
		root
	}

	#[test]
	fn resolve_lookup() {
		let root = sample();

		assert!(resolve::<_, _, &str>(&root, &[]).is_some_and(|level| level.len() == 2));
		assert!(resolve(&root, &["nested"]).is_some_and(|level| level.len() == 1));
		assert!(resolve(&root, &["top"]).is_none());
		assert!(resolve(&root, &["nested", "leaf"]).is_none());
		assert!(resolve(&root, &["missing", "leaf"]).is_none());
	}

	#[test]
	fn resolve_create() {
		let mut root = sample();

		let path = ["nested", "a", "b"];
		resolve_or_create(&mut root, &path, &path)
			.expect("no leaf in the way")
			.insert("c", Slot::Leaf(3));
		assert!(resolve(&root, &["nested", "a", "b"]).is_some_and(|level| level.len() == 1));
		assert_eq!(resolve(&root, &["nested"]).map(Level::len), Some(2));

		let path = ["nested", "leaf", "y", "z"];
		let conflict = resolve_or_create(&mut root, &path[..3], &path).expect_err("leaf in the way");
		assert_eq!(conflict.depth(), 1);
		assert_eq!(conflict.key(), &"leaf");
		assert_eq!(conflict.path(), &path);
		assert_eq!(resolve(&root, &["nested"]).map(Level::len), Some(2));
	}

	#[test]
	fn resolve_create_empty_path() {
		let mut root = sample();

		let level = resolve_or_create::<_, _, &str>(&mut root, &[], &["top"]).expect("root level");
		assert_eq!(level.len(), 2);
	}
}
