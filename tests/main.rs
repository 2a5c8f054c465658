use sort_test_tools::patterns;
use sort_test_tools::tests::count_comparisons;

const SORTED_LENS: [usize; 6] = [0, 1, 2, 10, 100, 1_000];

mod rust_std_stable {
    type TestSort = quadratic_sort_rs::stable::rust_std::SortImpl;

    sort_test_tools::instantiate_sort_tests!(TestSort);
    sort_test_tools::instantiate_stable_sort_tests!(TestSort);
}

mod rust_std_unstable {
    type TestSort = quadratic_sort_rs::unstable::rust_std::SortImpl;

    sort_test_tools::instantiate_sort_tests!(TestSort);
}

#[cfg(feature = "rust_bubble_sort")]
mod rust_bubble_sort {
    use super::*;

    use quadratic_sort_rs::stable::rust_bubble_sort;

    type TestSort = rust_bubble_sort::SortImpl;

    sort_test_tools::instantiate_sort_tests!(TestSort);
    sort_test_tools::instantiate_stable_sort_tests!(TestSort);

    #[test]
    fn sample_input() {
        let mut v = [2, 3, 3, 1, 3, 4, 2, 4, 3, 3];
        rust_bubble_sort::sort(&mut v);
        assert_eq!(v, [1, 2, 2, 3, 3, 3, 3, 3, 4, 4]);
    }

    #[test]
    fn sorted_input_single_pass() {
        for len in SORTED_LENS {
            let mut v = patterns::ascending(len);
            let comparisons = count_comparisons::<_, TestSort>(&mut v);

            // One confirming pass without exchanges.
            assert_eq!(comparisons, len.saturating_sub(1), "len: {len}");
            assert_eq!(v, patterns::ascending(len));
        }
    }

    #[test]
    fn one_swap_costs_two_passes() {
        let mut v = [1, 2, 4, 3, 5];
        let comparisons = count_comparisons::<_, TestSort>(&mut v);

        assert_eq!(comparisons, 8);
        assert_eq!(v, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn name() {
        use sort_test_tools::Sort;
        assert_eq!(TestSort::name(), "rust_bubble_sort_stable");
    }
}

#[cfg(feature = "rust_insertion_sort")]
mod rust_insertion_sort {
    use super::*;

    use quadratic_sort_rs::stable::rust_insertion_sort;

    type TestSort = rust_insertion_sort::SortImpl;

    sort_test_tools::instantiate_sort_tests!(TestSort);
    sort_test_tools::instantiate_stable_sort_tests!(TestSort);

    #[test]
    fn sample_input() {
        let mut v = [5, 4, 3, 2, 32, 3, 3, 2, 1, 1];
        rust_insertion_sort::sort(&mut v);
        assert_eq!(v, [1, 1, 2, 2, 3, 3, 3, 4, 5, 32]);
    }

    #[test]
    fn sorted_input_no_shifts() {
        for len in SORTED_LENS {
            let mut v = patterns::ascending(len);
            let comparisons = count_comparisons::<_, TestSort>(&mut v);

            // Every held element is compared once against its left neighbour and stays put.
            assert_eq!(comparisons, len.saturating_sub(1), "len: {len}");
            assert_eq!(v, patterns::ascending(len));
        }
    }

    #[test]
    fn descending_input_worst_case() {
        let len = 50;
        let mut v = patterns::descending(len);
        let comparisons = count_comparisons::<_, TestSort>(&mut v);

        assert_eq!(comparisons, len * (len - 1) / 2);
        assert_eq!(v, patterns::ascending(len));
    }

    #[test]
    fn shift_left_presorted_prefix() {
        for offset in [1, 5, 20, 99, 100] {
            let mut v = patterns::random_uniform(100, -20..=20);
            v[..offset].sort();

            let mut expected = v.clone();
            expected.sort();

            let mut is_less = |a: &i32, b: &i32| a < b;
            rust_insertion_sort::insertion_sort_shift_left(&mut v, offset, &mut is_less);
            assert_eq!(v, expected, "offset: {offset}");
        }
    }

    #[test]
    fn shift_left_full_offset_is_noop() {
        let mut v = [3, 1, 2];
        let mut is_less = |a: &i32, b: &i32| a < b;
        rust_insertion_sort::insertion_sort_shift_left(&mut v, 3, &mut is_less);
        assert_eq!(v, [3, 1, 2]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn shift_left_zero_offset() {
        let mut v = [2, 1];
        let mut is_less = |a: &i32, b: &i32| a < b;
        rust_insertion_sort::insertion_sort_shift_left(&mut v, 0, &mut is_less);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn shift_left_offset_past_end() {
        let mut v = [2, 1];
        let mut is_less = |a: &i32, b: &i32| a < b;
        rust_insertion_sort::insertion_sort_shift_left(&mut v, 3, &mut is_less);
    }
}

#[cfg(feature = "rust_selection_sort")]
mod rust_selection_sort {
    use super::*;

    use quadratic_sort_rs::unstable::rust_selection_sort;

    type TestSort = rust_selection_sort::SortImpl;

    sort_test_tools::instantiate_sort_tests!(TestSort);

    #[test]
    fn sample_input() {
        let mut v = [3, 5, 2, 4, 33, 2, 1, 4, 10, 9, 5, 7, 6, 4, 3, 4];
        rust_selection_sort::sort(&mut v);
        assert_eq!(v, [1, 2, 2, 3, 3, 4, 4, 4, 4, 5, 5, 6, 7, 9, 10, 33]);
    }

    #[test]
    fn sorted_input_still_quadratic() {
        for len in SORTED_LENS {
            let mut v = patterns::ascending(len);
            let comparisons = count_comparisons::<_, TestSort>(&mut v);

            assert_eq!(comparisons, len * len.saturating_sub(1) / 2, "len: {len}");
            assert_eq!(v, patterns::ascending(len));
        }
    }

    #[test]
    fn not_stable() {
        // The first exchange moves (2, 0) behind its equal (2, 1).
        let mut v = [(2, 0), (2, 1), (1, 2)];
        rust_selection_sort::sort_by(&mut v, |a, b| a.0.cmp(&b.0));
        assert_eq!(v, [(1, 2), (2, 1), (2, 0)]);
    }
}
