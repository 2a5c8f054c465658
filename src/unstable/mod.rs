pub mod rust_std;

#[cfg(feature = "rust_selection_sort")]
pub mod rust_selection_sort;
