//! Insertion sort.
//!
//! Worst-case and average *O*(*n*^2), best-case *O*(*n*) on already sorted input. *O*(1) extra
//! space.

use std::cmp::Ordering;

sort_impl!("rust_insertion_sort_stable");

/// Sorts the slice.
///
/// This sort is stable (i.e., does not reorder equal elements), in-place (i.e., does not
/// allocate), and *O*(*n*^2) worst-case.
///
/// # Current implementation
///
/// Grows a sorted prefix one element at a time. The next element is held aside, every larger
/// element of the prefix shifts one slot to the right, and the held element drops into the
/// vacated slot. On already sorted input nothing ever shifts.
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    insertion_sort(arr, |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function.
///
/// This sort is stable (i.e., does not reorder equal elements), in-place (i.e., does not
/// allocate), and *O*(*n*^2) worst-case.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified.
#[inline]
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(arr, |a, b| compare(a, b) == Ordering::Less);
}

fn insertion_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    insertion_sort_shift_left(v, 1, &mut is_less);
}

/// Sort `v` assuming `v[..offset]` is already sorted.
///
/// # Panics
///
/// Panics if `offset` is zero or greater than `v.len()`.
pub fn insertion_sort_shift_left<T, F>(v: &mut [T], offset: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    assert!(offset != 0 && offset <= len, "offset {offset} out of range 1..={len}");

    for tail in offset..len {
        insert_tail(&mut v[..=tail], is_less);
    }
}

/// Inserts the last element of `v` into the sorted range `v[..v.len() - 1]`.
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let tail = v.len() - 1;

    // The held element stays at `tail` until its slot is known, so a panicking `is_less` leaves
    // `v` untouched.
    let mut hole = tail;
    while hole > 0 && is_less(&v[tail], &v[hole - 1]) {
        hole -= 1;
    }

    if hole != tail {
        // Shifts `v[hole..tail]` one slot right and moves the held element into `hole`.
        v[hole..].rotate_right(1);
    }
}
