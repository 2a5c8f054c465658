//! Bubble sort.
//!
//! Worst-case and average *O*(*n*^2), best-case *O*(*n*) on already sorted input. *O*(1) extra
//! space.

use std::cmp::Ordering;

sort_impl!("rust_bubble_sort_stable");

/// Sorts the slice.
///
/// This sort is stable (i.e., does not reorder equal elements), in-place (i.e., does not
/// allocate), and *O*(*n*^2) worst-case.
///
/// # Current implementation
///
/// Full left-to-right passes over the slice, each exchanging every adjacent pair that is out of
/// order, repeated until a pass performs no exchange. An already sorted slice costs exactly one
/// pass of `len - 1` comparisons.
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    bubble_sort(arr, |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function.
///
/// This sort is stable (i.e., does not reorder equal elements), in-place (i.e., does not
/// allocate), and *O*(*n*^2) worst-case.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified. Unlike the other sorts
/// here, the call may also never return, since passes repeat until one sees no pair with
/// `compare(right, left) == Less`.
#[inline]
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(arr, |a, b| compare(a, b) == Ordering::Less);
}

fn bubble_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    let mut is_sorted = false;
    while !is_sorted {
        is_sorted = true;

        for i in 0..len.saturating_sub(1) {
            // Only a strictly greater left element is moved, equal neighbours keep their order.
            if is_less(&v[i + 1], &v[i]) {
                v.swap(i, i + 1);
                is_sorted = false;
            }
        }
    }
}
