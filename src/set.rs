//! Sets as membership indices.
//!
//! [`Set`] abstracts over the set types that the sequence helpers in [`slice`][`crate::slice`]
//! use to test membership. [`to_set`] builds a [`HashSet`][`std::collections::HashSet`] and
//! [`collect_set`] builds any [`Set`], such as a [`BTreeSet`][`alloc::collections::BTreeSet`] when
//! the `std` feature is disabled.

/// Sets that can be built empty, filled by insertion, and queried for membership.
pub trait Set: Default + FromIterator<Self::Item> {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, item: &Self::Item) -> bool;

    /// Inserts an item into the set, returning `true` if the item was not already present.
    fn insert(&mut self, item: Self::Item) -> bool;
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
mod btree_set {
    use alloc::collections::btree_set::BTreeSet;

    use crate::set::Set;

    impl<T> Set for BTreeSet<T>
    where
        T: Ord,
    {
        type Item = T;

        fn len(&self) -> usize {
            BTreeSet::len(self)
        }

        fn contains(&self, item: &T) -> bool {
            BTreeSet::contains(self, item)
        }

        fn insert(&mut self, item: T) -> bool {
            BTreeSet::insert(self, item)
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod hash_set {
    use core::hash::{BuildHasher, Hash};
    use std::collections::hash_set::HashSet;

    use crate::set::Set;

    impl<T, S> Set for HashSet<T, S>
    where
        T: Eq + Hash,
        S: BuildHasher + Default,
    {
        type Item = T;

        fn len(&self) -> usize {
            HashSet::len(self)
        }

        fn contains(&self, item: &T) -> bool {
            HashSet::contains(self, item)
        }

        fn insert(&mut self, item: T) -> bool {
            HashSet::insert(self, item)
        }
    }
}

#[cfg(feature = "indexmap")]
#[cfg_attr(docsrs, doc(cfg(feature = "indexmap")))]
mod index_set {
    use core::hash::{BuildHasher, Hash};
    use indexmap::set::IndexSet;

    use crate::set::Set;

    impl<T, S> Set for IndexSet<T, S>
    where
        T: Eq + Hash,
        S: BuildHasher + Default,
    {
        type Item = T;

        fn len(&self) -> usize {
            IndexSet::len(self)
        }

        fn contains(&self, item: &T) -> bool {
            IndexSet::contains(self, item)
        }

        fn insert(&mut self, item: T) -> bool {
            IndexSet::insert(self, item)
        }
    }
}

/// Collects the distinct items of a slice into a [`HashSet`][`std::collections::HashSet`].
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn to_set<T>(items: &[T]) -> std::collections::HashSet<T>
where
    T: Clone + Eq + core::hash::Hash,
{
    self::collect_set(items)
}

/// Collects the distinct items of a slice into a [`Set`].
pub fn collect_set<S>(items: &[S::Item]) -> S
where
    S: Set,
    S::Item: Clone,
{
    items.iter().cloned().collect()
}
