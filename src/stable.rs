//! Stable in-place sorting.
//!
//! Blocks of `STABLE_BLOCK_LEN` elements are sorted with binary insertion sort, then merged
//! bottom-up with SymMerge, as described in "Stable Minimum Storage Merging by Symmetric
//! Comparisons" by Pok-Son Kim and Arne Kutzner (2004). Merging is done with rotations and binary
//! searches only, there is no merge buffer. Equivalent elements from the left run are always
//! emitted before those from the right run.
//!
//! For `n` elements this does *O*(*n* \* log(*n*)) comparisons and *O*(*n* \* log(*n*)^2) moves,
//! with *O*(log(*n*)) recursion depth and no allocation.

use core::mem;

use crate::ordering::Comparator;
use crate::search::try_search;
use crate::smallsort::binary_insertion_sort;

/// Length of the blocks that are insertion sorted before merging starts.
pub(crate) const STABLE_BLOCK_LEN: usize = 20;

/// Sorts `v` ascending under `cmp`, keeping equivalent elements in their original order.
pub(crate) fn stable_sort<T, C>(v: &mut [T], cmp: &mut C) -> Result<(), C::Error>
where
    C: Comparator<T>,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 {
        return Ok(());
    }

    let len = v.len();
    if len < 2 {
        return Ok(());
    }

    // The last block may be shorter.
    for block in v.chunks_mut(STABLE_BLOCK_LEN) {
        binary_insertion_sort(block, 1, cmp)?;
    }

    let mut width = STABLE_BLOCK_LEN;
    while width < len {
        let mut start = 0;

        // Only pairs with a non-empty right run need merging.
        while start + width < len {
            let end = len.min(start + 2 * width);
            sym_merge(&mut v[start..end], width, cmp)?;
            start = end;
        }

        width *= 2;
    }

    Ok(())
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` in place.
///
/// The recursion splits `v` around its midpoint, so the depth is bounded by log2(v.len()).
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn sym_merge<T, C>(v: &mut [T], mid: usize, cmp: &mut C) -> Result<(), C::Error>
where
    C: Comparator<T>,
{
    let len = v.len();
    if mid == 0 || mid >= len {
        return Ok(());
    }

    // A single element on the left is inserted into the right run, before any equivalent element.
    if mid == 1 {
        let pos = 1 + try_search(len - 1, |i| cmp.greater_eq(&v[1 + i], &v[0]))?;
        v[..pos].rotate_left(1);
        return Ok(());
    }

    // A single element on the right is inserted into the left run, after any equivalent element.
    if len - mid == 1 {
        let pos = try_search(mid, |i| cmp.less(&v[mid], &v[i]))?;
        v[pos..].rotate_right(1);
        return Ok(());
    }

    let half = len / 2;
    let n = half + mid;

    // Find the split point `start` such that `v[start..mid]` and `v[mid..end]` swap places,
    // with `end = n - start`. Elements are compared symmetrically around the center of `v`.
    let (mut start, mut r) = if mid > half {
        (n - len, half)
    } else {
        (0, mid)
    };
    let p = n - 1;

    while start < r {
        let c = start + (r - start) / 2;
        if !cmp.less(&v[p - c], &v[c])? {
            start = c + 1;
        } else {
            r = c;
        }
    }

    let end = n - start;
    if start < mid && mid < end {
        v[start..end].rotate_left(mid - start);
    }

    if 0 < start && start < half {
        sym_merge(&mut v[..half], start, cmp)?;
    }
    if half < end && end < len {
        sym_merge(&mut v[half..], end - half, cmp)?;
    }

    Ok(())
}
