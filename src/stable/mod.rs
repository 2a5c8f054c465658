pub mod rust_std;

#[cfg(feature = "rust_bubble_sort")]
pub mod rust_bubble_sort;

#[cfg(feature = "rust_insertion_sort")]
pub mod rust_insertion_sort;
