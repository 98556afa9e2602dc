//! Pivot selection and presortedness hints.

use crate::ordering::Comparator;

// Ranges shorter than this take the median of the three quarter points as pivot, longer ones
// use the median of the medians of each quarter point and its neighbours.
const SHORTEST_NINTHER: usize = 50;

// Number of sample pairs that get ordered when picking a ninther pivot.
const MAX_SWAPS: usize = 4 * 3;

/// What sampling the pivot candidates revealed about the order of a range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum SortedHint {
    Unknown,
    Increasing,
    Decreasing,
}

/// Chooses a pivot in `v` and returns its index together with a hint about the order of `v`.
///
/// Every sampled pair that had to be swapped to put the candidates in order is counted. If none
/// had to be swapped the range is likely ascending, if all had to be swapped it is likely
/// descending.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn choose_pivot<T, C>(v: &[T], cmp: &mut C) -> Result<(usize, SortedHint), C::Error>
where
    C: Comparator<T>,
{
    let len = v.len();
    let mut swaps = 0;

    let mut a = len / 4;
    let mut b = len / 4 * 2;
    let mut c = len / 4 * 3;

    if len >= 8 {
        if len >= SHORTEST_NINTHER {
            a = median_adjacent(v, a, &mut swaps, cmp)?;
            b = median_adjacent(v, b, &mut swaps, cmp)?;
            c = median_adjacent(v, c, &mut swaps, cmp)?;
        }

        b = median3(v, a, b, c, &mut swaps, cmp)?;
    }

    let hint = match swaps {
        0 => SortedHint::Increasing,
        MAX_SWAPS => SortedHint::Decreasing,
        _ => SortedHint::Unknown,
    };

    Ok((b, hint))
}

/// Returns `(a, b)` ordered so that `v[first] <= v[second]`.
fn order2<T, C>(
    v: &[T],
    a: usize,
    b: usize,
    swaps: &mut usize,
    cmp: &mut C,
) -> Result<(usize, usize), C::Error>
where
    C: Comparator<T>,
{
    if cmp.less(&v[b], &v[a])? {
        *swaps += 1;
        Ok((b, a))
    } else {
        Ok((a, b))
    }
}

fn median3<T, C>(
    v: &[T],
    a: usize,
    b: usize,
    c: usize,
    swaps: &mut usize,
    cmp: &mut C,
) -> Result<usize, C::Error>
where
    C: Comparator<T>,
{
    let (a, b) = order2(v, a, b, swaps, cmp)?;
    let (b, _c) = order2(v, b, c, swaps, cmp)?;
    let (_a, b) = order2(v, a, b, swaps, cmp)?;

    Ok(b)
}

fn median_adjacent<T, C>(
    v: &[T],
    a: usize,
    swaps: &mut usize,
    cmp: &mut C,
) -> Result<usize, C::Error>
where
    C: Comparator<T>,
{
    median3(v, a - 1, a, a + 1, swaps, cmp)
}

/// Scatters some elements around in an attempt to break patterns that might cause imbalanced
/// partitions in quicksort.
///
/// The positions are drawn from a xorshift generator seeded with the length, so the outcome is
/// deterministic for a given input.
#[cold]
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn break_patterns<T>(v: &mut [T]) {
    let len = v.len();
    if len < 8 {
        return;
    }

    let mut random = XorShift(len as u64);
    let modulus = len.next_power_of_two();

    let pos = len / 4 * 2;
    for i in 0..3 {
        // Generate a random number modulo `len`. Because `modulus` is at most twice `len` a
        // single subtraction is enough.
        let mut other = (random.next() as usize) & (modulus - 1);
        if other >= len {
            other -= len;
        }

        v.swap(pos - 2 + i, other);
    }
}

// xorshift paper: https://www.jstatsoft.org/article/view/v008i14/xorshift.pdf
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::{into_ok, Natural};

    #[test]
    fn hints() {
        let asc: Vec<i32> = (0..100).collect();
        let (pivot, hint) = into_ok(choose_pivot(&asc, &mut Natural));
        assert_eq!(hint, SortedHint::Increasing);
        assert_eq!(pivot, 50);

        let desc: Vec<i32> = (0..100).rev().collect();
        let (_, hint) = into_ok(choose_pivot(&desc, &mut Natural));
        assert_eq!(hint, SortedHint::Decreasing);

        let mixed = [5, 1, 9, 2, 8, 3, 7, 4, 6, 0, 11, 10];
        let (_, hint) = into_ok(choose_pivot(&mixed, &mut Natural));
        assert_eq!(hint, SortedHint::Unknown);
    }

    #[test]
    fn ninther_is_a_median_of_samples() {
        let v: Vec<i32> = (0..64).map(|i| (i * 37) % 64).collect();
        let (pivot, _) = into_ok(choose_pivot(&v, &mut Natural));
        let below = v.iter().filter(|&&x| x < v[pivot]).count();
        // Never an extreme element.
        assert!(below > 0 && below < v.len() - 1);
    }

    #[test]
    fn short_ranges_pick_middle() {
        let v = [3, 2, 1, 0];
        let (pivot, _) = into_ok(choose_pivot(&v, &mut Natural));
        assert_eq!(pivot, 2);
    }

    #[test]
    fn break_patterns_is_deterministic_permutation() {
        let mut a: Vec<u32> = (0..1000).collect();
        let mut b = a.clone();
        break_patterns(&mut a);
        break_patterns(&mut b);
        assert_eq!(a, b);

        a.sort();
        assert_eq!(a, (0..1000).collect::<Vec<_>>());
    }
}
