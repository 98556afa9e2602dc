use crate::ordering::Comparator;

/// Sorts `v` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
///
/// Only used as fallback once the badness budget of a quicksort call tree is spent.
#[cold]
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn heapsort<T, C>(v: &mut [T], cmp: &mut C) -> Result<(), C::Error>
where
    C: Comparator<T>,
{
    let len = v.len();

    // Build the heap in linear time.
    for i in (0..len / 2).rev() {
        sift_down(v, i, cmp)?;
    }

    // Pop maximal elements from the heap.
    for i in (1..len).rev() {
        v.swap(0, i);
        sift_down(&mut v[..i], 0, cmp)?;
    }

    Ok(())
}

// This binary heap respects the invariant `parent >= child`.
fn sift_down<T, C>(v: &mut [T], mut node: usize, cmp: &mut C) -> Result<(), C::Error>
where
    C: Comparator<T>,
{
    let len = v.len();

    loop {
        // Children of `node`.
        let mut child = 2 * node + 1;
        if child >= len {
            break;
        }

        // Choose the greater child.
        if child + 1 < len && cmp.less(&v[child], &v[child + 1])? {
            child += 1;
        }

        // Stop if the invariant holds at `node`.
        if !cmp.less(&v[node], &v[child])? {
            break;
        }

        // Swap `node` with the greater child, move one step down, and continue sifting.
        v.swap(node, child);
        node = child;
    }

    Ok(())
}
