use crate::ordering::Comparator;
use crate::search::try_search;

/// Sorts `v[offset..]` into the already sorted prefix `v[..offset]` using binary insertion sort.
///
/// Each element is placed after every element it is equivalent to, so the sort is stable. It
/// does *O*(*n* \* log(*n*)) comparisons but *O*(*n*^2) moves, only meant for short slices.
/// Elements already in place cost one comparison.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn binary_insertion_sort<T, C>(
    v: &mut [T],
    offset: usize,
    cmp: &mut C,
) -> Result<(), C::Error>
where
    C: Comparator<T>,
{
    let len = v.len();

    for i in offset.max(1)..len {
        let (sorted, rest) = v.split_at(i);
        let elem = &rest[0];

        if !cmp.less(elem, &sorted[i - 1])? {
            continue;
        }

        // The last element of `sorted` is known to be greater, skip it.
        let pos = try_search(i - 1, |j| cmp.less(elem, &sorted[j]))?;
        v[pos..=i].rotate_right(1);
    }

    Ok(())
}

/// Moves `v[0]` right until it meets an element that is not less than it. `v[1..]` must be
/// sorted. Returns the final position.
pub(crate) fn shift_head<T, C>(v: &mut [T], cmp: &mut C) -> Result<usize, C::Error>
where
    C: Comparator<T>,
{
    let mut i = 0;
    while i + 1 < v.len() && cmp.less(&v[i + 1], &v[i])? {
        v.swap(i, i + 1);
        i += 1;
    }

    Ok(i)
}

/// Moves the last element of `v` left until it meets an element that it is not less than.
/// `v[..len - 1]` must be sorted. Returns the final position.
pub(crate) fn shift_tail<T, C>(v: &mut [T], cmp: &mut C) -> Result<usize, C::Error>
where
    C: Comparator<T>,
{
    let mut i = v.len().saturating_sub(1);
    while i > 0 && cmp.less(&v[i], &v[i - 1])? {
        v.swap(i, i - 1);
        i -= 1;
    }

    Ok(i)
}
