//! Classic quadratic comparison sorts, kept small and readable.
//!
//! Every sort module exposes `sort` and `sort_by` with the same signatures as the slice methods,
//! and registers itself with `sort_impl!` so the shared test suite and benchmarks can drive it.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod stable;
pub mod unstable;
