//! Searching and sorting the Vector.
//!
//! All operations defer to a caller-supplied comparator; see the `compare` module.

use super::failure::Result;
use super::hooks::VectorHooks;
use super::root::result;
use super::vector::{panic_from_failure, Vector};

use crate::compare::{Comparator, Equivalence};

impl<T: Copy, H: VectorHooks> Vector<T, H> {
    /// Sorts the elements, in place, as per `comparator`.
    ///
    /// The sort is not stable: equivalent elements may be reordered.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::vector::Vector;
    /// let mut vec: Vector<i32> = [3, -1, 2].iter().copied().collect();
    ///
    /// vec.sort(&|a: &i32, b: &i32| b.cmp(a));
    /// assert_eq!(&[3, 2, -1], vec.as_slice());
    /// ```
    pub fn sort<C>(&mut self, comparator: &C)
    where
        C: Comparator<T>,
    {
        self.as_mut_slice().sort_unstable_by(|a, b| comparator.compare(a, b));
    }

    /// Returns the index of the first element equivalent to `key`, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::compare::Natural;
    /// #   use ductile::vector::Vector;
    /// let vec: Vector<i32> = [3, 1, 3].iter().copied().collect();
    ///
    /// assert_eq!(Some(0), vec.linear_position(&3, &Natural));
    /// assert_eq!(None, vec.linear_position(&2, &Natural));
    /// ```
    pub fn linear_position<E>(&self, key: &T, equivalence: &E) -> Option<usize>
    where
        E: Equivalence<T>,
    {
        self.iter().position(|e| equivalence.equivalent(key, e))
    }

    /// Returns a reference to the first element equivalent to `key`, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::vector::Vector;
    /// let vec: Vector<(u8, char)> = [(1, 'a'), (2, 'b'), (1, 'c')].iter().copied().collect();
    ///
    /// let same_id = |a: &(u8, char), b: &(u8, char)| a.0 == b.0;
    ///
    /// assert_eq!(Some(&(1, 'a')), vec.linear_find(&(1, ' '), &same_id));
    /// assert_eq!(None, vec.linear_find(&(3, ' '), &same_id));
    /// ```
    pub fn linear_find<E>(&self, key: &T, equivalence: &E) -> Option<&T>
    where
        E: Equivalence<T>,
    {
        let index = self.linear_position(key, equivalence)?;

        //  Safety:
        //  -   `index` is within bounds, as it was found.
        Some(unsafe { self.get_unchecked(index) })
    }

    /// Returns a reference to the first element equivalent to `key`, appending `key` first if there is none.
    ///
    /// #   Errors
    ///
    /// Returns an error if `key` must be appended, and cannot be, leaving the instance unchanged.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::compare::Natural;
    /// #   use ductile::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    ///
    /// assert_eq!(Ok(&mut 4), vec.try_linear_search_or_insert(4, &Natural));
    /// assert_eq!(Ok(&mut 4), vec.try_linear_search_or_insert(4, &Natural));
    /// assert_eq!(1, vec.len());
    /// ```
    pub fn try_linear_search_or_insert<E>(&mut self, key: T, equivalence: &E) -> Result<&mut T>
    where
        E: Equivalence<T>,
    {
        let index = match self.linear_position(&key, equivalence) {
            Some(index) => index,
            None => {
                self.try_push(key)?;
                self.len() - 1
            },
        };

        //  Safety:
        //  -   `index` is within bounds, as it was either found or pushed.
        Ok(unsafe { self.get_unchecked_mut(index) })
    }

    /// Returns a reference to the first element equivalent to `key`, appending `key` first if there is none.
    ///
    /// Calling this method is equivalent to calling `try_linear_search_or_insert` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `key` must be appended, and cannot be.
    pub fn linear_search_or_insert<E>(&mut self, key: T, equivalence: &E) -> &mut T
    where
        E: Equivalence<T>,
    {
        self.try_linear_search_or_insert(key, equivalence)
            .unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Binary searches for `key`, returning the index of an equivalent element if any, or the index at which `key`
    /// could be inserted to maintain the order otherwise.
    ///
    /// The elements are assumed to be sorted as per `comparator`; if they are not, the result is unspecified.
    ///
    /// If multiple elements are equivalent to `key`, any of them may be returned.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::compare::Natural;
    /// #   use ductile::vector::Vector;
    /// let vec: Vector<i32> = [1, 3, 5].iter().copied().collect();
    ///
    /// assert_eq!(Ok(1), vec.binary_search_index(&3, &Natural));
    /// assert_eq!(Err(2), vec.binary_search_index(&4, &Natural));
    /// ```
    pub fn binary_search_index<C>(&self, key: &T, comparator: &C) -> result::Result<usize, usize>
    where
        C: Comparator<T>,
    {
        self.as_slice().binary_search_by(|probe| comparator.compare(probe, key))
    }

    /// Binary searches for `key`, returning a reference to an equivalent element, if any.
    ///
    /// The elements are assumed to be sorted as per `comparator`; if they are not, the result is unspecified.
    ///
    /// If multiple elements are equivalent to `key`, any of them may be returned.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::compare::Natural;
    /// #   use ductile::vector::Vector;
    /// let vec: Vector<i32> = [1, 3, 5].iter().copied().collect();
    ///
    /// assert_eq!(Some(&5), vec.binary_search(&5, &Natural));
    /// assert_eq!(None, vec.binary_search(&4, &Natural));
    /// ```
    pub fn binary_search<C>(&self, key: &T, comparator: &C) -> Option<&T>
    where
        C: Comparator<T>,
    {
        let index = self.binary_search_index(key, comparator).ok()?;

        //  Safety:
        //  -   `index` is within bounds, as it was found.
        Some(unsafe { self.get_unchecked(index) })
    }
}

//  mod tests
