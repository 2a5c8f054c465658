use quadratic_sort_rs::stable::{rust_bubble_sort, rust_insertion_sort};
use quadratic_sort_rs::unstable::rust_selection_sort;
use sort_test_tools::Sort;

fn main() {
    let mut bubble_input = [2, 3, 3, 1, 3, 4, 2, 4, 3, 3];
    rust_bubble_sort::sort(&mut bubble_input);
    println!("{}: {bubble_input:?}", rust_bubble_sort::SortImpl::name());

    let mut insertion_input = [5, 4, 3, 2, 32, 3, 3, 2, 1, 1];
    rust_insertion_sort::sort(&mut insertion_input);
    println!("{}: {insertion_input:?}", rust_insertion_sort::SortImpl::name());

    let mut selection_input = [3, 5, 2, 4, 33, 2, 1, 4, 10, 9, 5, 7, 6, 4, 3, 4];
    rust_selection_sort::sort(&mut selection_input);
    println!("{}: {selection_input:?}", rust_selection_sort::SortImpl::name());
}
