//! Reusable checks for sort implementations.
//!
//! An implementation is described by the [`Sort`] trait and the whole suite is instantiated for it
//! with [`instantiate_sort_tests!`].

pub trait Sort {
    fn name() -> String;

    /// Whether the implementation promises to keep equal elements in order.
    fn is_stable() -> bool;

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
