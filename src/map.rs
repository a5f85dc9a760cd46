//! Helpers over key-value maps.
//!
//! The functions in this module are generic over [`Mapping`], which is implemented for
//! [`HashMap`][`std::collections::HashMap`], [`BTreeMap`][`alloc::collections::BTreeMap`], and
//! (with the `indexmap` feature) [`IndexMap`][`indexmap::IndexMap`]. Functions that accept two
//! maps only require that the key types agree, so a `HashMap` can be compared against a `BTreeMap`
//! and so on.
//!
//! Order of keys and values in returned [`Vec`]s is the iteration order of the map. For hashed
//! maps this is unspecified.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Key-value maps with unique keys.
///
/// Lookups take keys by reference to the key type itself rather than a borrowed form, so that the
/// same functions apply to ordered and hashed maps alike.
pub trait Mapping: Extend<(Self::Key, Self::Value)> + FromIterator<(Self::Key, Self::Value)> {
    type Key;
    type Value;
    type Iter<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }

    fn iter(&self) -> Self::Iter<'_>;
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
mod btree_map {
    use alloc::collections::btree_map::{self, BTreeMap};

    use crate::map::Mapping;

    impl<K, V> Mapping for BTreeMap<K, V>
    where
        K: Ord,
    {
        type Key = K;
        type Value = V;
        type Iter<'a>
            = btree_map::Iter<'a, K, V>
        where
            Self: 'a;

        fn len(&self) -> usize {
            BTreeMap::len(self)
        }

        fn get(&self, key: &K) -> Option<&V> {
            BTreeMap::get(self, key)
        }

        fn contains_key(&self, key: &K) -> bool {
            BTreeMap::contains_key(self, key)
        }

        fn iter(&self) -> Self::Iter<'_> {
            BTreeMap::iter(self)
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod hash_map {
    use core::hash::{BuildHasher, Hash};
    use std::collections::hash_map::{self, HashMap};

    use crate::map::Mapping;

    impl<K, V, S> Mapping for HashMap<K, V, S>
    where
        K: Eq + Hash,
        S: BuildHasher + Default,
    {
        type Key = K;
        type Value = V;
        type Iter<'a>
            = hash_map::Iter<'a, K, V>
        where
            Self: 'a;

        fn len(&self) -> usize {
            HashMap::len(self)
        }

        fn get(&self, key: &K) -> Option<&V> {
            HashMap::get(self, key)
        }

        fn contains_key(&self, key: &K) -> bool {
            HashMap::contains_key(self, key)
        }

        fn iter(&self) -> Self::Iter<'_> {
            HashMap::iter(self)
        }
    }
}

#[cfg(feature = "indexmap")]
#[cfg_attr(docsrs, doc(cfg(feature = "indexmap")))]
mod index_map {
    use core::hash::{BuildHasher, Hash};
    use indexmap::map::{self, IndexMap};

    use crate::map::Mapping;

    impl<K, V, S> Mapping for IndexMap<K, V, S>
    where
        K: Eq + Hash,
        S: BuildHasher + Default,
    {
        type Key = K;
        type Value = V;
        type Iter<'a>
            = map::Iter<'a, K, V>
        where
            Self: 'a;

        fn len(&self) -> usize {
            IndexMap::len(self)
        }

        fn get(&self, key: &K) -> Option<&V> {
            IndexMap::get(self, key)
        }

        fn contains_key(&self, key: &K) -> bool {
            IndexMap::contains_key(self, key)
        }

        fn iter(&self) -> Self::Iter<'_> {
            IndexMap::iter(self)
        }
    }
}

/// Gets the keys of a map.
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn keys<M>(items: &M) -> Vec<M::Key>
where
    M: Mapping,
    M::Key: Clone,
{
    items.iter().map(|(key, _)| key.clone()).collect()
}

/// Gets the values of a map.
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn values<M>(items: &M) -> Vec<M::Value>
where
    M: Mapping,
    M::Value: Clone,
{
    items.iter().map(|(_, value)| value.clone()).collect()
}

/// Gets the keys in `items` that are not in `other`.
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn missing_keys<M, N>(items: &M, other: &N) -> Vec<M::Key>
where
    M: Mapping,
    M::Key: Clone,
    N: Mapping<Key = M::Key>,
{
    items
        .iter()
        .filter(|(key, _)| !other.contains_key(key))
        .map(|(key, _)| key.clone())
        .collect()
}

/// Gets the keys that are only in `items` and the keys that are only in `other`, in that order.
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn compare_keys<M, N>(items: &M, other: &N) -> (Vec<M::Key>, Vec<M::Key>)
where
    M: Mapping,
    M::Key: Clone,
    N: Mapping<Key = M::Key>,
{
    (self::missing_keys(items, other), self::missing_keys(other, items))
}

/// Returns `true` if both maps have exactly the same keys, regardless of their values.
pub fn equal_keys<M, N>(items: &M, other: &N) -> bool
where
    M: Mapping,
    N: Mapping<Key = M::Key>,
{
    // With equal lengths, every key of `items` being in `other` is enough: `other` cannot have
    // any extra keys.
    items.len() == other.len() && items.iter().all(|(key, _)| other.contains_key(key))
}

/// Copies a map.
///
/// An absent map copies to `None` and an empty map copies to an empty map.
pub fn copy_map<M>(items: Option<&M>) -> Option<M>
where
    M: Clone + Mapping,
{
    items.cloned()
}

/// Copies the entries of a map whose keys are in `keys`.
///
/// Keys that are not in the map are ignored. An absent map copies to `None`.
pub fn copy_map_subset<M>(items: Option<&M>, keys: &[M::Key]) -> Option<M>
where
    M: Mapping,
    M::Key: Clone,
    M::Value: Clone,
{
    items.map(|items| {
        keys.iter()
            .filter_map(|key| items.get(key).map(|value| (key.clone(), value.clone())))
            .collect()
    })
}

/// Inserts the entries of `other` into `items`, overwriting common keys, and returns `items`.
pub fn merge_into<'a, M>(items: &'a mut M, other: &M) -> &'a mut M
where
    M: Mapping,
    M::Key: Clone,
    M::Value: Clone,
{
    items.extend(
        other
            .iter()
            .map(|(key, value)| (key.clone(), value.clone())),
    );
    items
}

/// Merges `other` into `items` and returns the merged map.
///
/// If `items` is `Some`, then the entries of `other` are inserted into that map (overwriting
/// common keys) and the returned reference is to that same map. If `items` is `None`, then a copy
/// of `other` is stored in `items` and returned. `other` is never modified.
pub fn merge<'a, M>(items: &'a mut Option<M>, other: &M) -> &'a mut M
where
    M: Clone + Mapping,
    M::Key: Clone,
    M::Value: Clone,
{
    let is_present = items.is_some();
    let merged = items.get_or_insert_with(|| other.clone());
    if is_present {
        self::merge_into(merged, other)
    }
    else {
        merged
    }
}

/// Returns `true` if `f` returns `true` for every key. This is vacuously `true` for empty maps.
pub fn all_keys<M, F>(items: &M, mut f: F) -> bool
where
    M: Mapping,
    F: FnMut(&M::Key) -> bool,
{
    items.iter().all(|(key, _)| f(key))
}

/// Returns `true` if `f` returns `true` for any key. This is `false` for empty maps.
pub fn any_key<M, F>(items: &M, mut f: F) -> bool
where
    M: Mapping,
    F: FnMut(&M::Key) -> bool,
{
    items.iter().any(|(key, _)| f(key))
}

/// Returns `true` if `f` returns `true` for every value. This is vacuously `true` for empty maps.
pub fn all_values<M, F>(items: &M, mut f: F) -> bool
where
    M: Mapping,
    F: FnMut(&M::Value) -> bool,
{
    items.iter().all(|(_, value)| f(value))
}

/// Returns `true` if `f` returns `true` for any value. This is `false` for empty maps.
pub fn any_value<M, F>(items: &M, mut f: F) -> bool
where
    M: Mapping,
    F: FnMut(&M::Value) -> bool,
{
    items.iter().any(|(_, value)| f(value))
}


#[cfg(all(test, feature = "std"))]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::vec;
    use alloc::vec::Vec;
    use rstest::rstest;
    use std::collections::HashMap;

    use crate::map;
    use crate::map::harness::{self, empty, sorted, xs, ys, StrMap};

    #[rstest]
    #[case::empty(harness::empty())]
    #[case::many(harness::xs())]
    fn keys_and_values_of_map_then_len_eq_map_len(#[case] xs: StrMap) {
        assert_eq!(map::keys(&xs).len(), xs.len());
        assert_eq!(map::values(&xs).len(), xs.len());
    }

    #[rstest]
    fn keys_and_values_of_map_then_contents_eq(xs: StrMap) {
        assert_eq!(sorted(map::keys(&xs)), vec!["a", "b", "c"]);
        assert_eq!(sorted(map::values(&xs)), vec![1, 2, 3]);
    }

    #[rstest]
    fn rebuild_map_from_keys_and_copy_then_eq(xs: StrMap) {
        let copy = map::copy_map(Some(&xs)).unwrap();
        let rebuilt: StrMap = map::keys(&xs)
            .into_iter()
            .map(|key| (key, copy[key]))
            .collect();
        assert_eq!(rebuilt, xs);
    }

    #[rstest]
    fn keys_of_btree_map_then_ordered_eq() {
        let xs = BTreeMap::from([(3u8, 'c'), (1, 'a'), (2, 'b')]);
        assert_eq!(map::keys(&xs), vec![1, 2, 3]);
        assert_eq!(map::values(&xs), vec!['a', 'b', 'c']);
    }

    #[rstest]
    #[case::disjoint_key(harness::xs(), harness::ys(), vec!["a"])]
    #[case::subset(
        HashMap::from([("b", 2)]),
        harness::ys(),
        vec![],
    )]
    #[case::empty_items(harness::empty(), harness::ys(), vec![])]
    #[case::empty_other(harness::xs(), harness::empty(), vec!["a", "b", "c"])]
    fn missing_keys_of_maps_then_keys_eq(
        #[case] xs: StrMap,
        #[case] ys: StrMap,
        #[case] expected: Vec<&'static str>,
    ) {
        assert_eq!(sorted(map::missing_keys(&xs, &ys)), expected);
    }

    #[rstest]
    fn missing_keys_of_hash_map_and_btree_map_then_keys_eq(xs: StrMap) {
        let ys = BTreeMap::from([("a", 'x'), ("z", 'y')]);
        assert_eq!(sorted(map::missing_keys(&xs, &ys)), vec!["b", "c"]);
        assert_eq!(map::missing_keys(&ys, &xs), vec!["z"]);
    }

    #[rstest]
    fn compare_keys_of_maps_then_each_side_eq(xs: StrMap, ys: StrMap) {
        let (only_xs, only_ys) = map::compare_keys(&xs, &ys);
        assert_eq!(only_xs, vec!["a"]);
        assert_eq!(only_ys, vec!["d"]);
        assert_eq!(
            (only_xs, only_ys),
            (map::missing_keys(&xs, &ys), map::missing_keys(&ys, &xs)),
        );
    }

    #[rstest]
    fn compare_keys_of_maps_with_same_keys_then_empty(xs: StrMap) {
        let ys: StrMap = xs.iter().map(|(key, value)| (*key, value * 10)).collect();
        let (only_xs, only_ys) = map::compare_keys(&xs, &ys);
        assert!(only_xs.is_empty());
        assert!(only_ys.is_empty());
    }

    #[rstest]
    #[case::same_keys_other_values(
        harness::xs(),
        HashMap::from([("a", 10), ("b", 20), ("c", 30)]),
        true,
    )]
    #[case::different_keys(harness::xs(), HashMap::from([("a", 1), ("b", 2), ("d", 3)]), false)]
    #[case::different_len(harness::xs(), HashMap::from([("a", 1), ("b", 2)]), false)]
    #[case::empty(harness::empty(), harness::empty(), true)]
    fn equal_keys_of_maps_then_eq(#[case] xs: StrMap, #[case] ys: StrMap, #[case] expected: bool) {
        assert_eq!(map::equal_keys(&xs, &ys), expected);
        assert_eq!(
            map::equal_keys(&xs, &ys),
            map::missing_keys(&xs, &ys).is_empty() && map::missing_keys(&ys, &xs).is_empty(),
        );
    }

    #[rstest]
    fn copy_map_then_eq_and_independent(xs: StrMap) {
        let mut copy = map::copy_map(Some(&xs)).unwrap();
        assert_eq!(copy, xs);
        copy.insert("z", 26);
        assert!(!xs.contains_key("z"));
        assert_eq!(map::copy_map(Some(&copy)), Some(copy.clone()));
    }

    #[rstest]
    fn copy_absent_map_then_none() {
        assert_eq!(map::copy_map::<StrMap>(None), None);
    }

    #[rstest]
    fn copy_empty_map_then_some_empty(empty: StrMap) {
        assert_eq!(map::copy_map(Some(&empty)), Some(StrMap::new()));
    }

    #[rstest]
    #[case::some_keys(vec!["a", "c"], HashMap::from([("a", 1), ("c", 3)]))]
    #[case::absent_keys(vec!["a", "x", "y"], HashMap::from([("a", 1)]))]
    #[case::no_keys(vec![], HashMap::new())]
    fn copy_map_subset_then_eq(
        xs: StrMap,
        #[case] keys: Vec<&'static str>,
        #[case] expected: StrMap,
    ) {
        assert_eq!(map::copy_map_subset(Some(&xs), &keys), Some(expected));
    }

    #[rstest]
    fn copy_map_subset_of_absent_or_empty_map_then_none_or_empty(empty: StrMap) {
        assert_eq!(map::copy_map_subset::<StrMap>(None, &["a"]), None);
        assert_eq!(map::copy_map_subset(Some(&empty), &["a"]), Some(StrMap::new()));
    }

    #[rstest]
    fn merge_into_present_map_then_overwritten_and_same_map() {
        let mut xs: Option<StrMap> = Some(HashMap::from([("a", 1), ("b", 2)]));
        let ys: StrMap = HashMap::from([("b", 20), ("c", 30)]);
        let address = xs.as_ref().map(|xs| xs as *const StrMap);
        let merged = map::merge(&mut xs, &ys);
        assert_eq!(*merged, HashMap::from([("a", 1), ("b", 20), ("c", 30)]));
        assert_eq!(Some(merged as *const StrMap), address);
        assert_eq!(ys, HashMap::from([("b", 20), ("c", 30)]));
    }

    #[rstest]
    fn merge_into_absent_map_then_copy_of_other(ys: StrMap) {
        let mut xs = None;
        let merged = map::merge(&mut xs, &ys);
        assert_eq!(*merged, ys);
        merged.insert("z", 26);
        assert!(!ys.contains_key("z"));
        assert_eq!(xs.as_ref().map(StrMap::len), Some(4));
    }

    #[rstest]
    fn merge_into_btree_map_then_overwritten() {
        let mut xs = BTreeMap::from([(1u8, 'a'), (2, 'b')]);
        let ys = BTreeMap::from([(2u8, 'x'), (3, 'y')]);
        map::merge_into(&mut xs, &ys);
        assert_eq!(xs, BTreeMap::from([(1, 'a'), (2, 'x'), (3, 'y')]));
    }

    #[rstest]
    #[case::all(|key: &&str| key.len() == 1, true, true)]
    #[case::some(|key: &&str| *key == "b", false, true)]
    #[case::none(|key: &&str| key.is_empty(), false, false)]
    fn all_and_any_key_of_map_then_eq<F>(
        xs: StrMap,
        #[case] f: F,
        #[case] all: bool,
        #[case] any: bool,
    ) where
        F: Fn(&&'static str) -> bool,
    {
        assert_eq!(map::all_keys(&xs, &f), all);
        assert_eq!(map::any_key(&xs, &f), any);
    }

    #[rstest]
    #[case::all(|value: &u32| *value > 0, true, true)]
    #[case::some(|value: &u32| *value % 2 == 0, false, true)]
    #[case::none(|value: &u32| *value > 100, false, false)]
    fn all_and_any_value_of_map_then_eq<F>(
        xs: StrMap,
        #[case] f: F,
        #[case] all: bool,
        #[case] any: bool,
    ) where
        F: Fn(&u32) -> bool,
    {
        assert_eq!(map::all_values(&xs, &f), all);
        assert_eq!(map::any_value(&xs, &f), any);
    }

    #[rstest]
    fn all_and_any_of_empty_map_then_vacuous(empty: StrMap) {
        assert!(map::all_keys(&empty, |_| false));
        assert!(map::all_values(&empty, |_| false));
        assert!(!map::any_key(&empty, |_| true));
        assert!(!map::any_value(&empty, |_| true));
    }

    #[cfg(feature = "indexmap")]
    #[rstest]
    fn keys_of_index_map_then_insertion_ordered_eq() {
        use indexmap::IndexMap;

        let mut xs = IndexMap::from([("c", 3u32), ("a", 1), ("b", 2)]);
        assert_eq!(map::keys(&xs), vec!["c", "a", "b"]);
        map::merge_into(&mut xs, &IndexMap::from([("d", 4), ("a", 10)]));
        assert_eq!(map::keys(&xs), vec!["c", "a", "b", "d"]);
        assert_eq!(xs.get("a"), Some(&10));

        let ys: StrMap = xs.iter().map(|(key, value)| (*key, *value)).collect();
        assert!(map::equal_keys(&xs, &ys));
    }
}
