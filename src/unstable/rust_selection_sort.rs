use std::cmp::Ordering;

sort_impl!("rust_selection_sort_unstable");

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not
/// allocate), and *O*(*n*^2) in every case. It performs at most `len - 1` exchanges.
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    selection_sort(arr, |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
#[inline]
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(arr, |a, b| compare(a, b) == Ordering::Less);
}

fn selection_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len {
        // First minimum of the unsorted suffix wins on ties.
        let mut min_idx = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[min_idx]) {
                min_idx = j;
            }
        }

        if min_idx != i {
            v.swap(i, min_idx);
        }
    }
}
