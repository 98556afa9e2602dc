//! Bisection over monotonic predicates, and the binary search built on top of it.

use crate::ordering::Comparator;

/// Returns the smallest index `i` in `0..n` for which `pred(i)` is true, or `n` if there is none.
///
/// `pred` has to be monotonic: false for every index below some threshold and true from there
/// on. For other predicates the returned index is unspecified but always in `0..=n`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn search<P>(n: usize, mut pred: P) -> usize
where
    P: FnMut(usize) -> bool,
{
    match try_search(n, |i| Ok::<bool, core::convert::Infallible>(pred(i))) {
        Ok(pos) => pos,
        Err(never) => match never {},
    }
}

/// Fallible version of [`search`], the first `Err` returned by `pred` ends the search.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn try_search<P, E>(n: usize, mut pred: P) -> Result<usize, E>
where
    P: FnMut(usize) -> Result<bool, E>,
{
    // Define pred(-1) == false and pred(n) == true.
    // Invariant: pred(i - 1) == false, pred(j) == true.
    let mut i = 0;
    let mut j = n;
    while i < j {
        // i <= h < j, can't overflow.
        let h = i + (j - i) / 2;
        if !pred(h)? {
            i = h + 1;
        } else {
            j = h;
        }
    }

    // i == j, pred(i - 1) == false and pred(j) == true, so i is the answer.
    Ok(i)
}

/// Looks up `target` in `v`, which must be sorted ascending under `cmp`.
///
/// Returns the leftmost position whose element is not less than `target`, together with whether
/// that element is equivalent to `target`. When `target` is absent the position is where it would
/// have to be inserted to keep `v` sorted.
pub(crate) fn binary_search_by<T, C>(
    v: &[T],
    target: &T,
    cmp: &mut C,
) -> Result<(usize, bool), C::Error>
where
    C: Comparator<T>,
{
    let pos = try_search(v.len(), |i| cmp.greater_eq(&v[i], target))?;

    match v.get(pos) {
        Some(elem) => Ok((pos, cmp.equivalent(elem, target)?)),
        None => Ok((pos, false)),
    }
}
