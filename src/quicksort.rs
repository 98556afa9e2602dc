//! Pattern-defeating quicksort driver.
//!
//! Sub-ranges waiting to be sorted live on a fixed size work-list instead of the call stack. The
//! larger side of every partition is pushed and the smaller side is sorted next, so the list never
//! holds more than log2(len) entries.

use core::mem;

use crate::heapsort::heapsort;
use crate::ordering::Comparator;
use crate::partition::{partial_insertion_sort, partition, partition_equal};
use crate::pivot::{break_patterns, choose_pivot, SortedHint};
use crate::smallsort::binary_insertion_sort;

/// Ranges of at most this length are sorted with binary insertion sort.
pub(crate) const SMALL_SORT_THRESHOLD: usize = 12;

// One slot per bit of `usize` is enough, every pushed range is at least twice as long as the
// range sorted next.
const MAX_PENDING: usize = usize::BITS as usize;

/// A sub-range `start..end` waiting to be sorted, with the state inherited from its parent.
#[derive(Copy, Clone, Debug, Default)]
struct Task {
    start: usize,
    end: usize,
    // Number of imbalanced partitions still allowed before switching to heapsort.
    limit: u32,
    was_balanced: bool,
    was_partitioned: bool,
}

struct WorkList {
    tasks: [Task; MAX_PENDING],
    len: usize,
}

impl WorkList {
    fn new() -> Self {
        Self {
            tasks: [Task::default(); MAX_PENDING],
            len: 0,
        }
    }

    fn push(&mut self, task: Task) {
        self.tasks[self.len] = task;
        self.len += 1;
    }

    fn pop(&mut self) -> Option<Task> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        Some(self.tasks[self.len])
    }
}

/// Sorts `v` using pattern-defeating quicksort, which is *O*(*n* \* log(*n*)) worst-case.
pub(crate) fn quicksort<T, C>(v: &mut [T], cmp: &mut C) -> Result<(), C::Error>
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

    if len > SMALL_SORT_THRESHOLD {
        let (streak_end, was_reversed) = find_streak(v, cmp)?;
        if streak_end == len {
            if was_reversed {
                v.reverse();
            }

            return Ok(());
        }
    }

    // Limit the number of imbalanced partitions to the bit length of `len`.
    let limit = usize::BITS - len.leading_zeros();

    recurse(v, limit, cmp)
}

/// Finds a streak of presorted elements starting at the beginning of the slice. Returns the first
/// value that is not part of said streak, and a bool denoting wether the streak was reversed.
/// Streaks can be increasing or strictly decreasing.
fn find_streak<T, C>(v: &[T], cmp: &mut C) -> Result<(usize, bool), C::Error>
where
    C: Comparator<T>,
{
    let len = v.len();

    if len < 2 {
        return Ok((len, false));
    }

    let mut end = 2;

    if cmp.less(&v[1], &v[0])? {
        while end < len && cmp.less(&v[end], &v[end - 1])? {
            end += 1;
        }

        Ok((end, true))
    } else {
        while end < len && !cmp.less(&v[end], &v[end - 1])? {
            end += 1;
        }

        Ok((end, false))
    }
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn recurse<T, C>(v: &mut [T], limit: u32, cmp: &mut C) -> Result<(), C::Error>
where
    C: Comparator<T>,
{
    let mut work = WorkList::new();
    work.push(Task {
        start: 0,
        end: v.len(),
        limit,
        was_balanced: true,
        was_partitioned: true,
    });

    while let Some(task) = work.pop() {
        let Task {
            mut start,
            mut end,
            mut limit,
            mut was_balanced,
            mut was_partitioned,
        } = task;

        loop {
            // Everything left of `start` is already known to be less than or equal to every
            // element of `range`.
            let (before, range) = v[..end].split_at_mut(start);
            let len = range.len();

            if len <= SMALL_SORT_THRESHOLD {
                binary_insertion_sort(range, 1, cmp)?;
                break;
            }

            // If too many bad pivot choices were made, simply fall back to heapsort in order to
            // guarantee `O(n * log(n))` worst-case.
            if limit == 0 {
                heapsort(range, cmp)?;
                break;
            }

            // If the last partitioning was imbalanced, try breaking patterns in the slice by
            // shuffling some elements around. Hopefully we'll choose a better pivot this time.
            if !was_balanced {
                break_patterns(range);
                limit -= 1;
            }

            // Choose a pivot and try guessing whether the slice is already sorted.
            let (mut pivot, mut hint) = choose_pivot(range, cmp)?;

            if hint == SortedHint::Decreasing {
                range.reverse();
                pivot = (len - 1) - pivot;
                hint = SortedHint::Increasing;
            }

            // If the last partitioning was decently balanced and didn't shuffle elements, and if
            // pivot selection predicts the slice is likely already sorted...
            if was_balanced && was_partitioned && hint == SortedHint::Increasing {
                // Try identifying several out-of-order elements and shifting them to correct
                // positions. If the slice ends up being completely sorted, we're done.
                if partial_insertion_sort(range, cmp)? {
                    break;
                }
            }

            // If the chosen pivot is equal to the predecessor, then it's the smallest element in
            // the slice. Partition the slice into elements equal to and elements greater than the
            // pivot. This case is usually hit when the slice contains many duplicate elements.
            if let Some(pred) = before.last() {
                if !cmp.less(pred, &range[pivot])? {
                    let num_eq = partition_equal(range, pivot, cmp)?;

                    // Continue sorting elements greater than the pivot.
                    start += num_eq;
                    continue;
                }
            }

            let (mid, already_partitioned) = partition(range, pivot, cmp)?;
            was_partitioned = already_partitioned;

            let left_len = mid;
            let right_len = len - mid - 1;
            let balance_threshold = len / 8;
            let mid = start + mid;

            // Push the longer side and keep going with the shorter one.
            if left_len < right_len {
                was_balanced = left_len >= balance_threshold;
                work.push(Task {
                    start: mid + 1,
                    end,
                    limit,
                    was_balanced,
                    was_partitioned,
                });
                end = mid;
            } else {
                was_balanced = right_len >= balance_threshold;
                work.push(Task {
                    start,
                    end: mid,
                    limit,
                    was_balanced,
                    was_partitioned,
                });
                start = mid + 1;
            }
        }
    }

    Ok(())
}
