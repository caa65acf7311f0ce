//! Comparators.
//!
//! The `Vector` has no notion of natural ordering: sorting and searching defer to a caller-supplied comparator.
//!
//! -   A `Comparator` defines a total order over two elements, for `sort` and `binary_search`.
//! -   An `Equivalence` defines equality over two elements, for `linear_find` and `linear_search_or_insert`.
//!
//! Both are implemented for the matching closures and functions, and are expected to be pure: the same two
//! arguments must always yield the same result.
//!
//! #   Example
//!
//! ```
//! use std::cmp::Ordering;
//!
//! use ductile::compare::{Comparator, Equal, Equivalence, Natural};
//!
//! let by_magnitude = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
//!
//! assert_eq!(Ordering::Less, by_magnitude.compare(&1, &-2));
//! assert_eq!(Ordering::Greater, Natural.compare(&1, &-2));
//!
//! assert!(Equal(by_magnitude).equivalent(&3, &-3));
//! assert!(!Natural.equivalent(&3, &-3));
//! ```

use super::root::cmp::Ordering;

/// Comparator
///
/// A three-way comparison of two elements.
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering { self(a, b) }
}

/// Equivalence
///
/// An equality test between two elements.
pub trait Equivalence<T: ?Sized> {
    /// Returns whether `a` and `b` are equivalent.
    fn equivalent(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Equivalence<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equivalent(&self, a: &T, b: &T) -> bool { self(a, b) }
}

/// Natural
///
/// Defers to the `Ord` and `Eq` implementations of the element.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering { a.cmp(b) }
}

impl<T: Eq + ?Sized> Equivalence<T> for Natural {
    fn equivalent(&self, a: &T, b: &T) -> bool { a == b }
}

/// Equal
///
/// Turns a `Comparator` into an `Equivalence`: two elements are equivalent if they compare `Equal`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Equal<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Equivalence<T> for Equal<C> {
    fn equivalent(&self, a: &T, b: &T) -> bool {
        self.0.compare(a, b) == Ordering::Equal
    }
}

//  mod tests
