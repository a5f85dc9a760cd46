//! Helpers over slices.
//!
//! Functions that return a [`Cow`] may return one of their inputs rather than a copy. Such a
//! [`Cow::Borrowed`] shares storage with that input and this is part of the contract of each
//! function: [`combine_slices`] and [`prepend`] borrow when there is nothing to concatenate and
//! [`remove_duplicates`] borrows when there cannot be any duplicates. Use [`combine_slices_copy`]
//! or [`Cow::into_owned`] when a copy is required.

#[cfg(target_has_atomic = "ptr")]
#[cfg(feature = "alloc")]
use alloc::sync::Arc;
#[cfg(feature = "alloc")]
use alloc::{
    borrow::{Cow, ToOwned},
    boxed::Box,
    rc::Rc,
    string::String,
    vec::Vec,
};
use core::error::Error;
use core::fmt::{self, Display, Formatter};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
#[cfg(feature = "std")]
use {core::hash::Hash, std::collections::HashSet};

#[cfg(feature = "alloc")]
use crate::set::{self, Set};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OutOfBoundsError {
    index: usize,
    bound: usize,
}

impl OutOfBoundsError {
    pub(crate) const fn from_index_and_bound(index: usize, bound: usize) -> Self {
        OutOfBoundsError { index, bound }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Gets the length of the slice that the index was out of bounds for.
    pub fn bound(&self) -> usize {
        self.bound
    }
}

impl Display for OutOfBoundsError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "index {} out of bounds for slice of length {}",
            self.index, self.bound,
        )
    }
}

impl Error for OutOfBoundsError {}

/// Textual types that can be converted into one another.
///
/// See [`cast_stringy_slice`].
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub trait Stringy {
    fn to_text(&self) -> Cow<'_, str>;

    fn from_text(text: &str) -> Self;
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl Stringy for String {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }

    fn from_text(text: &str) -> Self {
        text.to_owned()
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl Stringy for Box<str> {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }

    fn from_text(text: &str) -> Self {
        Box::from(text)
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl Stringy for Rc<str> {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }

    fn from_text(text: &str) -> Self {
        Rc::from(text)
    }
}

#[cfg(target_has_atomic = "ptr")]
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl Stringy for Arc<str> {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }

    fn from_text(text: &str) -> Self {
        Arc::from(text)
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl Stringy for Cow<'_, str> {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }

    fn from_text(text: &str) -> Self {
        Cow::Owned(text.to_owned())
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl Stringy for Vec<char> {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.iter().collect())
    }

    fn from_text(text: &str) -> Self {
        text.chars().collect()
    }
}

/// Copies a slice into a new [`Vec`].
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn copy_slice<T>(items: &[T]) -> Vec<T>
where
    T: Clone,
{
    items.to_vec()
}

/// Copies the items for which `f` returns `true`.
///
/// Returns `None` if no items match, including when `items` is empty.
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn filter_slice<T, F>(items: &[T], mut f: F) -> Option<Vec<T>>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let filtered: Vec<T> = items.iter().filter(|&item| f(item)).cloned().collect();
    Some(filtered).filter(|filtered| !filtered.is_empty())
}

/// Converts each item of a slice from one textual type into another.
///
/// ```rust
/// use assort::slice;
///
/// let words = [String::from("one"), String::from("two")];
/// let chars: Vec<Vec<char>> = slice::cast_stringy_slice(&words);
/// assert_eq!(chars[1], ['t', 'w', 'o']);
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn cast_stringy_slice<U, T>(items: &[T]) -> Vec<U>
where
    T: Stringy,
    U: Stringy,
{
    items
        .iter()
        .map(|item| U::from_text(&item.to_text()))
        .collect()
}

/// Maps each item of a slice through `f`, in order.
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn transform_slice<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    items.iter().map(f).collect()
}

/// Returns `true` if `f` returns `true` for any item. This is `false` for empty slices.
pub fn slice_contains<T, F>(items: &[T], f: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    items.iter().any(f)
}

/// Returns `true` if `f` returns `true` for every item. This is vacuously `true` for empty
/// slices.
pub fn all_elements<T, F>(items: &[T], f: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    items.iter().all(f)
}

/// Returns `true` if any item is equal to `item`.
pub fn slice_contains_element<T>(items: &[T], item: &T) -> bool
where
    T: PartialEq,
{
    self::slice_contains(items, |other| other == item)
}

/// Counts the items for which `f` returns `true`.
pub fn count_matching_elements<T, F>(items: &[T], mut f: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    items.iter().filter(|&item| f(item)).count()
}

/// Gets the index of the first item for which `f` returns `true`, or `None` if there is no such
/// item.
pub fn first_match_index<T, F>(items: &[T], f: F) -> Option<usize>
where
    F: FnMut(&T) -> bool,
{
    items.iter().position(f)
}

/// Copies a slice and replaces the first item for which `f` returns `true` with `item`, or
/// appends `item` if there is no such item.
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn replace_or_append<T, F>(items: &[T], item: T, f: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut replaced = Vec::with_capacity(items.len() + 1);
    replaced.extend_from_slice(items);
    match self::first_match_index(items, f) {
        Some(index) => {
            replaced[index] = item;
        },
        _ => {
            replaced.push(item);
        },
    }
    replaced
}

#[cfg(feature = "alloc")]
fn combine<'a, T>(items: &[&'a [T]]) -> Cow<'a, [T]>
where
    T: Clone,
{
    let mut non_empty = items.iter().copied().filter(|items| !items.is_empty());
    match (non_empty.next(), non_empty.next()) {
        (Some(_), Some(_)) => Cow::Owned(items.concat()),
        (Some(only), None) => Cow::Borrowed(only),
        (None, _) => Cow::Borrowed(items.first().copied().unwrap_or(&[])),
    }
}

/// Concatenates slices, copying only if more than one slice is non-empty.
///
/// Returns `None` if there are no slices. Otherwise, if at most one of the slices is non-empty,
/// then that slice (or the first slice when all are empty) is returned as a [`Cow::Borrowed`].
/// In particular, a single slice is always returned as is.
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn combine_slices<'a, T>(items: &[&'a [T]]) -> Option<Cow<'a, [T]>>
where
    T: Clone,
{
    match items {
        [] => None,
        _ => Some(self::combine(items)),
    }
}

/// Concatenates slices into a new [`Vec`]. The output never shares storage with the inputs.
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn combine_slices_copy<T>(items: &[&[T]]) -> Vec<T>
where
    T: Clone,
{
    items.concat()
}

/// Concatenates `head` and `items`, in that order, with the borrowing behavior of
/// [`combine_slices`].
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn prepend<'a, T>(items: &'a [T], head: &'a [T]) -> Cow<'a, [T]>
where
    T: Clone,
{
    self::combine(&[head, items])
}

/// Removes all but the first occurrence of each item, preserving order.
///
/// Slices with fewer than two items are returned as a [`Cow::Borrowed`].
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn remove_duplicates<T>(items: &[T]) -> Cow<'_, [T]>
where
    T: Clone + Eq + Hash,
{
    self::remove_duplicates_with::<HashSet<T>>(items)
}

/// Removes all but the first occurrence of each item, using `S` to track occurrences.
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn remove_duplicates_with<S>(items: &[S::Item]) -> Cow<'_, [S::Item]>
where
    S: Set,
    S::Item: Clone,
{
    if items.len() <= 1 {
        return Cow::Borrowed(items);
    }
    let mut occurrences = S::default();
    let mut distinct = Vec::with_capacity(items.len());
    for item in items {
        if occurrences.insert(item.clone()) {
            distinct.push(item.clone());
        }
    }
    Cow::Owned(distinct)
}

/// Removes the item at `index` in constant time, returning the shortened slice.
///
/// The last item is moved into `index` and the removed item is moved to the end of `items`, just
/// beyond the returned slice. The order of `items` is not preserved.
///
/// # Panics
///
/// Panics if `index` is out of bounds. See [`try_delete_from_slice`].
pub fn delete_from_slice<T>(items: &mut [T], index: usize) -> &mut [T] {
    match self::try_delete_from_slice(items, index) {
        Ok(items) => items,
        Err(error) => panic!("{}", error),
    }
}

/// Removes the item at `index` in constant time, returning the shortened slice.
///
/// # Errors
///
/// Returns an error if `index` is out of bounds, in which case `items` is unchanged.
pub fn try_delete_from_slice<T>(
    items: &mut [T],
    index: usize,
) -> Result<&mut [T], OutOfBoundsError> {
    let n = items.len();
    if index >= n {
        return Err(OutOfBoundsError::from_index_and_bound(index, n));
    }
    items.swap(index, n - 1);
    Ok(&mut items[..n - 1])
}

/// Gets the items of `other` that are also in `items`, in the order (and with the duplicates) of
/// `other`.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn intersect_slices<T>(items: &[T], other: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    self::intersect_slices_with::<HashSet<T>>(items, other)
}

/// Gets the items of `other` that are also in `items`, using `S` to index `items`.
///
/// See [`intersect_slices`].
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn intersect_slices_with<S>(items: &[S::Item], other: &[S::Item]) -> Vec<S::Item>
where
    S: Set,
    S::Item: Clone,
{
    let items: S = set::collect_set(items);
    other
        .iter()
        .filter(|&item| items.contains(item))
        .cloned()
        .collect()
}

#[cfg(feature = "rayon")]
#[cfg_attr(docsrs, doc(cfg(feature = "rayon")))]
pub fn par_transform_slice<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Send + Sync,
{
    items.par_iter().map(f).collect()
}

#[cfg(feature = "rayon")]
#[cfg_attr(docsrs, doc(cfg(feature = "rayon")))]
pub fn par_filter_slice<T, F>(items: &[T], f: F) -> Option<Vec<T>>
where
    T: Clone + Send + Sync,
    F: Fn(&T) -> bool + Send + Sync,
{
    let filtered: Vec<T> = items.par_iter().filter(|&item| f(item)).cloned().collect();
    Some(filtered).filter(|filtered| !filtered.is_empty())
}

#[cfg(feature = "rayon")]
#[cfg_attr(docsrs, doc(cfg(feature = "rayon")))]
pub fn par_slice_contains<T, F>(items: &[T], f: F) -> bool
where
    T: Sync,
    F: Fn(&T) -> bool + Send + Sync,
{
    items.par_iter().any(f)
}

#[cfg(feature = "rayon")]
#[cfg_attr(docsrs, doc(cfg(feature = "rayon")))]
pub fn par_all_elements<T, F>(items: &[T], f: F) -> bool
where
    T: Sync,
    F: Fn(&T) -> bool + Send + Sync,
{
    items.par_iter().all(f)
}

#[cfg(feature = "rayon")]
#[cfg_attr(docsrs, doc(cfg(feature = "rayon")))]
pub fn par_count_matching_elements<T, F>(items: &[T], f: F) -> usize
where
    T: Sync,
    F: Fn(&T) -> bool + Send + Sync,
{
    items.par_iter().filter(|&item| f(item)).count()
}

#[cfg(feature = "rayon")]
#[cfg_attr(docsrs, doc(cfg(feature = "rayon")))]
pub fn par_first_match_index<T, F>(items: &[T], f: F) -> Option<usize>
where
    T: Sync,
    F: Fn(&T) -> bool + Send + Sync,
{
    items.par_iter().position_first(f)
}
