//! Generic sorting and searching for slices.
//!
//! Two sort engines are provided:
//!
//! * An unstable, in-place, non-allocating pattern-defeating quicksort (`sort*`), *O*(*n* \*
//!   log(*n*)) worst-case, linear on ascending and descending inputs and resistant to the inputs
//!   that make median-of-three quicksort quadratic.
//! * A stable, in-place, non-allocating insertion-sort plus rotation-merge sort (`sort_stable*`),
//!   *O*(*n* \* log(*n*)^2) worst-case.
//!
//! Plus bisection search (`search`, `binary_search*`) that reports the leftmost match or insertion
//! point.
//!
//! Every operation comes in flavors for the three ways of describing an order: the element type's
//! own `PartialOrd` (no suffix), a less-than predicate (`_func`), and a key extractor (`_key`). The
//! `_with` variants accept any [`Comparator`], the `try_` variants accept comparators that can fail
//! and hand the first error back unchanged.
//!
//! Comparators must be strict weak orderings. That is not checked, a comparator violating it makes
//! the result order unspecified. Regardless of the comparator, including comparators that panic or
//! fail, a slice passed to a sort always ends up holding a permutation of its original elements,
//! and nothing outside of it is ever touched.
//!
//! Sorting takes `&mut [T]`, so the borrow checker rules out concurrent access to the slice for
//! the duration of the call. No state is kept between calls.

use core::cmp::Ordering;
use core::convert::Infallible;

mod heapsort;
mod ordering;
mod partition;
mod pivot;
mod quicksort;
mod search;
mod smallsort;
mod stable;

pub use crate::ordering::{CmpFunc, Comparator, Key, LessFunc, Natural, TryCmpFunc, TryLessFunc};
pub use crate::search::{search, try_search};

use crate::ordering::into_ok;

// --- Unstable sort ---

/// Sorts the slice in ascending order, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n* \* log(*n*)) worst-case.
///
/// Sorting may fail to order floating-point values correctly when NaN is present. Use
/// [`sort_func`] with a NaN-aware predicate such as `|a, b| a < b || (a.is_nan() && !b.is_nan())`
/// in that case.
///
/// # Current implementation
///
/// The current algorithm is based on [pattern-defeating quicksort][pdqsort] by Orson Peters,
/// which combines the fast average case of randomized quicksort with the fast worst case of
/// heapsort, while achieving linear time on slices with certain patterns. Patterns are broken up
/// with a deterministic generator, sorting the same input twice always performs the same steps.
///
/// ```ignore
/// let mut v = [-5, 4, 1, -3, 2];
///
/// slices::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
///
/// [pdqsort]: https://github.com/orlp/pdqsort
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: PartialOrd,
{
    sort_with(v, Natural);
}

/// Sorts the slice in ascending order as determined by the `less` predicate, but might not
/// preserve the order of equal elements.
///
/// `less` must be a strict weak ordering, see the crate documentation.
///
/// ```ignore
/// let mut v = [3, 1, 2];
/// slices::sort_func(&mut v, |a, b| a > b);
/// assert_eq!(v, [3, 2, 1]);
/// ```
#[inline]
pub fn sort_func<T, F>(v: &mut [T], less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    sort_with(v, LessFunc(less));
}

/// Sorts the slice in ascending order of the keys extracted by `key`, but might not preserve the
/// order of elements with equal keys.
///
/// The key function is called for every comparison, it is not cached.
#[inline]
pub fn sort_key<T, K, F>(v: &mut [T], key: F)
where
    F: FnMut(&T) -> K,
    K: PartialOrd,
{
    sort_with(v, Key(key));
}

/// Sorts the slice with the given comparator, but might not preserve the order of equal
/// elements.
#[inline]
pub fn sort_with<T, C>(v: &mut [T], mut cmp: C)
where
    C: Comparator<T, Error = Infallible>,
{
    into_ok(quicksort::quicksort(v, &mut cmp));
}

/// Like [`sort_func`], but `less` can fail.
///
/// The first error stops the sort and is returned. `v` is then left in an unspecified order, but
/// still holds all of its original elements.
#[inline]
pub fn try_sort_func<T, E, F>(v: &mut [T], less: F) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    try_sort_with(v, TryLessFunc(less))
}

/// Like [`sort_with`], for comparators that can fail.
#[inline]
pub fn try_sort_with<T, C>(v: &mut [T], mut cmp: C) -> Result<(), C::Error>
where
    C: Comparator<T>,
{
    quicksort::quicksort(v, &mut cmp)
}

/// Returns a sorted copy of `v`, which is left untouched.
#[must_use]
pub fn sorted<T>(v: &[T]) -> Vec<T>
where
    T: PartialOrd + Clone,
{
    let mut copy = v.to_vec();
    sort(&mut copy);
    copy
}

/// Returns a copy of `v` sorted by the `less` predicate, `v` is left untouched.
#[must_use]
pub fn sorted_func<T, F>(v: &[T], less: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut copy = v.to_vec();
    sort_func(&mut copy, less);
    copy
}

/// Returns a copy of `v` sorted by the keys extracted by `key`, `v` is left untouched.
#[must_use]
pub fn sorted_key<T, K, F>(v: &[T], key: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> K,
    K: PartialOrd,
{
    let mut copy = v.to_vec();
    sort_key(&mut copy, key);
    copy
}

// --- Stable sort ---

/// Sorts the slice in ascending order, preserving the order of equal elements.
///
/// In-place, does not allocate, *O*(*n* \* log(*n*)^2) worst-case.
#[inline]
pub fn sort_stable<T>(v: &mut [T])
where
    T: PartialOrd,
{
    sort_stable_with(v, Natural);
}

/// Sorts the slice in ascending order as determined by `less`, preserving the order of elements
/// that are equivalent under `less`.
///
/// ```ignore
/// let mut v = [(1, 'a'), (1, 'b'), (0, 'c')];
/// slices::sort_stable_func(&mut v, |x, y| x.0 < y.0);
/// assert_eq!(v, [(0, 'c'), (1, 'a'), (1, 'b')]);
/// ```
#[inline]
pub fn sort_stable_func<T, F>(v: &mut [T], less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    sort_stable_with(v, LessFunc(less));
}

/// Sorts the slice by the keys extracted by `key`, preserving the order of elements with equal
/// keys.
#[inline]
pub fn sort_stable_key<T, K, F>(v: &mut [T], key: F)
where
    F: FnMut(&T) -> K,
    K: PartialOrd,
{
    sort_stable_with(v, Key(key));
}

/// Stable sort with the given comparator.
#[inline]
pub fn sort_stable_with<T, C>(v: &mut [T], mut cmp: C)
where
    C: Comparator<T, Error = Infallible>,
{
    into_ok(stable::stable_sort(v, &mut cmp));
}

/// Like [`sort_stable_func`], but `less` can fail. See [`try_sort_func`].
#[inline]
pub fn try_sort_stable_func<T, E, F>(v: &mut [T], less: F) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    try_sort_stable_with(v, TryLessFunc(less))
}

/// Like [`sort_stable_with`], for comparators that can fail.
#[inline]
pub fn try_sort_stable_with<T, C>(v: &mut [T], mut cmp: C) -> Result<(), C::Error>
where
    C: Comparator<T>,
{
    stable::stable_sort(v, &mut cmp)
}

/// Returns a copy of `v` stably sorted by `less`, `v` is left untouched.
#[must_use]
pub fn sorted_stable_func<T, F>(v: &[T], less: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut copy = v.to_vec();
    sort_stable_func(&mut copy, less);
    copy
}

/// Returns a copy of `v` stably sorted by the keys extracted by `key`, `v` is left untouched.
#[must_use]
pub fn sorted_stable_key<T, K, F>(v: &[T], key: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> K,
    K: PartialOrd,
{
    let mut copy = v.to_vec();
    sort_stable_key(&mut copy, key);
    copy
}

// --- Sortedness ---

/// Reports whether `v` is sorted in ascending order.
#[must_use]
pub fn is_sorted<T>(v: &[T]) -> bool
where
    T: PartialOrd,
{
    is_sorted_with(v, Natural)
}

/// Reports whether `v` is sorted in ascending order as determined by `less`.
#[must_use]
pub fn is_sorted_func<T, F>(v: &[T], less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    is_sorted_with(v, LessFunc(less))
}

/// Reports whether the keys extracted from `v` by `key` are in ascending order.
#[must_use]
pub fn is_sorted_key<T, K, F>(v: &[T], key: F) -> bool
where
    F: FnMut(&T) -> K,
    K: PartialOrd,
{
    is_sorted_with(v, Key(key))
}

/// Reports whether `v` is sorted in ascending order under `cmp`.
#[must_use]
pub fn is_sorted_with<T, C>(v: &[T], mut cmp: C) -> bool
where
    C: Comparator<T, Error = Infallible>,
{
    into_ok(partition::is_sorted_by(v, &mut cmp))
}

/// Like [`is_sorted_func`], but `less` can fail.
pub fn try_is_sorted_func<T, E, F>(v: &[T], less: F) -> Result<bool, E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    partition::is_sorted_by(v, &mut TryLessFunc(less))
}

// --- Binary search ---

/// Searches for `target` in `v`, which must be sorted in ascending order.
///
/// Returns the position where `target` is found, or the position where it would appear in the
/// sort order, and whether it was really found. If `v` holds several elements equal to `target`
/// the position of the first one is returned. Nothing checks that `v` is sorted, for unsorted
/// input the result is unspecified.
///
/// ```ignore
/// assert_eq!(slices::binary_search(&[1, 2, 2, 3], &2), (1, true));
/// assert_eq!(slices::binary_search(&[1, 2, 2, 3], &5), (4, false));
/// ```
#[must_use]
pub fn binary_search<T>(v: &[T], target: &T) -> (usize, bool)
where
    T: PartialOrd,
{
    binary_search_with(v, target, Natural)
}

/// Like [`binary_search`], but with a three-way comparison function. `v` must be sorted in
/// ascending order as defined by `cmp`.
#[must_use]
pub fn binary_search_func<T, F>(v: &[T], target: &T, cmp: F) -> (usize, bool)
where
    F: FnMut(&T, &T) -> Ordering,
{
    binary_search_with(v, target, CmpFunc(cmp))
}

/// Like [`binary_search`], comparing the keys extracted by `key`. `v` must be sorted by the same
/// key. Found means an element with a key equal to the key of `target`.
#[must_use]
pub fn binary_search_key<T, K, F>(v: &[T], target: &T, key: F) -> (usize, bool)
where
    F: FnMut(&T) -> K,
    K: PartialOrd,
{
    binary_search_with(v, target, Key(key))
}

/// Like [`binary_search`], with the given comparator.
#[must_use]
pub fn binary_search_with<T, C>(v: &[T], target: &T, mut cmp: C) -> (usize, bool)
where
    C: Comparator<T, Error = Infallible>,
{
    into_ok(search::binary_search_by(v, target, &mut cmp))
}

/// Like [`binary_search_func`], but `cmp` can fail.
pub fn try_binary_search_func<T, E, F>(v: &[T], target: &T, cmp: F) -> Result<(usize, bool), E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    search::binary_search_by(v, target, &mut TryCmpFunc(cmp))
}
