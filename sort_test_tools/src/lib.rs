pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;

#[doc(hidden)]
pub use paste;

/// Instantiates the generic test suite in `tests` for `$sort_impl`, one `#[test]` per case.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_test_fns!(
            $sort_impl,
            basic,
            sample_inputs,
            random,
            random_d4,
            random_d20,
            random_zipf,
            random_sorted,
            all_equal,
            ascending,
            descending,
            saw_ascending,
            pipe_organ,
            sort_by_descending,
            idempotent,
            panic_retain_original_set,
        );

        $crate::instantiate_sort_type_tests!($sort_impl; i32, u64, String);
    };
}

/// Like `instantiate_sort_tests` but only for sorts that claim to be stable.
#[macro_export]
macro_rules! instantiate_stable_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_test_fns!($sort_impl, stability, stability_with_patterns);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! instantiate_sort_test_fns {
    ($sort_impl:ty, $($test_fn:ident),* $(,)?) => {
        $(
            #[test]
            fn $test_fn() {
                $crate::tests::$test_fn::<$sort_impl>();
            }
        )*
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! instantiate_sort_type_tests {
    ($sort_impl:ty; $($ty:ident),* $(,)?) => {
        $crate::paste::paste! {
            $(
                #[test]
                fn [<random_type_ $ty:lower>]() {
                    $crate::tests::random_type::<$ty, $sort_impl>();
                }

                #[test]
                fn [<random_d4_type_ $ty:lower>]() {
                    $crate::tests::random_d4_type::<$ty, $sort_impl>();
                }

                #[test]
                fn [<descending_type_ $ty:lower>]() {
                    $crate::tests::descending_type::<$ty, $sort_impl>();
                }
            )*
        }
    };
}
