//! Borrowing iterators over a single [`Level`](`crate::Level`).
//!
//! All of them visit entries in insertion order.
//! An unresolved key path produces the same types, just empty.

use crate::Slot;
use core::{iter::FusedIterator, slice};

macro_rules! level_iter {
	($(#[$attr:meta])* $Name:ident => $Item:ty, |$entry:ident| $project:expr) => {
		$(#[$attr])*
		#[must_use = "iterators are lazy and do nothing unless consumed"]
		pub struct $Name<'a, K, V> {
			iter: slice::Iter<'a, (K, Slot<K, V>)>,
		}

		impl<'a, K, V> $Name<'a, K, V> {
			pub(crate) fn new(entries: &'a [(K, Slot<K, V>)]) -> Self {
				Self {
					iter: entries.iter(),
				}
			}

			pub(crate) fn empty() -> Self {
				Self::new(&[])
			}
		}

		impl<K, V> Clone for $Name<'_, K, V> {
			fn clone(&self) -> Self {
				Self {
					iter: self.iter.clone(),
				}
			}
		}

		impl<'a, K, V> Iterator for $Name<'a, K, V> {
			type Item = $Item;

			fn next(&mut self) -> Option<Self::Item> {
				self.iter.next().map(|$entry| $project)
			}

			fn size_hint(&self) -> (usize, Option<usize>) {
				self.iter.size_hint()
			}
		}

		impl<K, V> DoubleEndedIterator for $Name<'_, K, V> {
			fn next_back(&mut self) -> Option<Self::Item> {
				self.iter.next_back().map(|$entry| $project)
			}
		}

		impl<K, V> ExactSizeIterator for $Name<'_, K, V> {}

		impl<K, V> FusedIterator for $Name<'_, K, V> {}
	};
}

level_iter!(
	/// Keys of one level. See [`Level::keys`](`crate::Level::keys`) and [`PathMap::keys_at`](`crate::PathMap::keys_at`).
	Keys => &'a K, |entry| &entry.0
);

level_iter!(
	/// Slots of one level. See [`Level::values`](`crate::Level::values`) and [`PathMap::values_at`](`crate::PathMap::values_at`).
	Values => &'a Slot<K, V>, |entry| &entry.1
);

level_iter!(
	/// Key-slot pairs of one level. See [`Level::iter`](`crate::Level::iter`) and [`PathMap::entries_at`](`crate::PathMap::entries_at`).
	Entries => (&'a K, &'a Slot<K, V>), |entry| (&entry.0, &entry.1)
);
