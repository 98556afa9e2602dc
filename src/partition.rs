//! Partitioning around a pivot.
//!
//! All routines only rearrange elements with swaps. If the comparator fails or panics part way
//! through, `v` still holds every original element exactly once.

use crate::ordering::Comparator;
use crate::smallsort::{shift_head, shift_tail};

/// Partitions `v` into elements smaller than `v[pivot]`, followed by elements greater than or
/// equal to `v[pivot]`.
///
/// Returns a tuple of:
///
/// 1. The final position of the pivot. Everything left of it is less than the pivot, nothing
///    right of it is.
/// 2. `true` if `v` was already partitioned and no element had to be moved.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn partition<T, C>(
    v: &mut [T],
    pivot: usize,
    cmp: &mut C,
) -> Result<(usize, bool), C::Error>
where
    C: Comparator<T>,
{
    // Place the pivot at the beginning of slice.
    v.swap(0, pivot);
    let (pivot_slot, rest) = v.split_at_mut(1);
    let pivot = &pivot_slot[0];

    // `l` and `r` bound the elements of `rest` that still have to be looked at, `rest[..l]` is
    // less than the pivot and `rest[r..]` is not.
    let mut l = 0;
    let mut r = rest.len();

    // Find the first pair of out-of-order elements.
    while l < r && cmp.less(&rest[l], pivot)? {
        l += 1;
    }
    while l < r && !cmp.less(&rest[r - 1], pivot)? {
        r -= 1;
    }

    let was_partitioned = l >= r;

    if !was_partitioned {
        loop {
            r -= 1;
            rest.swap(l, r);
            l += 1;

            while l < r && cmp.less(&rest[l], pivot)? {
                l += 1;
            }
            while l < r && !cmp.less(&rest[r - 1], pivot)? {
                r -= 1;
            }

            if l >= r {
                break;
            }
        }
    }

    // Place the pivot between the two partitions.
    v.swap(0, l);

    Ok((l, was_partitioned))
}

/// Partitions `v` into elements equal to `v[pivot]` followed by elements greater than `v[pivot]`.
///
/// Returns the number of elements equal to the pivot. It is assumed that `v` does not contain
/// elements smaller than the pivot.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn partition_equal<T, C>(
    v: &mut [T],
    pivot: usize,
    cmp: &mut C,
) -> Result<usize, C::Error>
where
    C: Comparator<T>,
{
    // Place the pivot at the beginning of slice.
    v.swap(0, pivot);
    let (pivot_slot, rest) = v.split_at_mut(1);
    let pivot = &pivot_slot[0];

    let mut l = 0;
    let mut r = rest.len();
    loop {
        // Find the first element greater than the pivot.
        while l < r && !cmp.less(pivot, &rest[l])? {
            l += 1;
        }

        // Find the last element equal to the pivot.
        while l < r && cmp.less(pivot, &rest[r - 1])? {
            r -= 1;
        }

        if l >= r {
            break;
        }

        r -= 1;
        rest.swap(l, r);
        l += 1;
    }

    // The pivot is part of the equal run.
    Ok(l + 1)
}

/// Partially sorts a slice by shifting several out-of-order elements around.
///
/// Returns `true` if the slice is sorted at the end. This function is *O*(*n*) worst-case.
#[cold]
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn partial_insertion_sort<T, C>(v: &mut [T], cmp: &mut C) -> Result<bool, C::Error>
where
    C: Comparator<T>,
{
    // Maximum number of adjacent out-of-order pairs that will get shifted.
    const MAX_STEPS: usize = 5;
    // If the slice is shorter than this, don't shift any elements.
    const SHORTEST_SHIFTING: usize = 50;

    let len = v.len();
    let mut i = 1;

    for _ in 0..MAX_STEPS {
        // Find the next pair of adjacent out-of-order elements.
        while i < len && !cmp.less(&v[i], &v[i - 1])? {
            i += 1;
        }

        // Are we done?
        if i == len {
            return Ok(true);
        }

        // Don't shift elements on short arrays, that has a performance cost.
        if len < SHORTEST_SHIFTING {
            return Ok(false);
        }

        // Swap the found pair of elements. This puts them in correct order.
        v.swap(i - 1, i);

        // Shift the smaller element to the left.
        if i >= 2 {
            shift_tail(&mut v[..i], cmp)?;
        }

        // Shift the greater element to the right.
        if len - i >= 2 {
            shift_head(&mut v[i..], cmp)?;
        }
    }

    // Didn't manage to sort the slice in the limited number of steps.
    Ok(false)
}

/// Reports whether `v` is sorted ascending under `cmp`.
pub(crate) fn is_sorted_by<T, C>(v: &[T], cmp: &mut C) -> Result<bool, C::Error>
where
    C: Comparator<T>,
{
    for i in (1..v.len()).rev() {
        if cmp.less(&v[i], &v[i - 1])? {
            return Ok(false);
        }
    }

    Ok(true)
}
