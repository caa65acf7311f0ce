//! The Vector

use super::root::{cmp, fmt, iter, mem, ops, ptr, slice};

use super::buffer::Buffer;
use super::capacity;
use super::failure::{Failure, Result};
use super::hooks::VectorHooks;

#[cfg(feature = "with-std")]
use super::hooks::DefaultVectorHooks;

//
//  Public Interface
//

/// `Vector`
#[cfg(not(feature = "with-std"))]
pub struct Vector<T: Copy, H: VectorHooks> {
    hooks: H,
    buffer: Buffer<T>,
    length: usize,
}

/// `Vector`
#[cfg(feature = "with-std")]
pub struct Vector<T: Copy, H: VectorHooks = DefaultVectorHooks> {
    //  Hooks of the Vector.
    hooks: H,
    //  The storage, allocated with `hooks`.
    buffer: Buffer<T>,
    //  The number of elements in the vector; the first `length` slots of `buffer` are initialized.
    length: usize,
}

impl<T: Copy, H: VectorHooks + Default> Vector<T, H> {
    /// Creates a new, empty, instance of the `Vector`.
    ///
    /// No memory is allocated.
    ///
    /// #   Panics
    ///
    /// Panics if `T` is zero-sized.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::vector::Vector;
    /// let vec: Vector<i32> = Vector::new();
    ///
    /// assert_eq!(0, vec.len());
    /// assert_eq!(0, vec.capacity());
    /// ```
    pub fn new() -> Self {
        Self::with_hooks(H::default())
    }

    /// Creates a new instance of the `Vector` with a capacity of at least `capacity`.
    ///
    /// If `capacity` is not a power of 2, it is rounded up. The slots are zero-filled.
    ///
    /// If `capacity` is 0, no memory is allocated.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    ///
    /// #   Panics
    ///
    /// Panics if `T` is zero-sized.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::failure::Failure;
    /// #   use ductile::vector::Vector;
    /// let vec: Vector<i32> = Vector::try_with_capacity(5).unwrap();
    ///
    /// assert_eq!(0, vec.len());
    /// assert_eq!(8, vec.capacity());
    ///
    /// //  ElementsOverflow signals that the rounded capacity overflows `usize`.
    /// let vec: Result<Vector<i32>, _> = Vector::try_with_capacity(usize::MAX);
    /// assert_eq!(Some(Failure::ElementsOverflow), vec.err());
    ///
    /// //  BytesOverflow signals that the size of the buffer to allocate, in bytes, overflows.
    /// let vec: Result<Vector<i32>, _> = Vector::try_with_capacity(usize::MAX / 4);
    /// assert_eq!(Some(Failure::BytesOverflow), vec.err());
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        Self::try_with_capacity_and_hooks(capacity, H::default())
    }

    /// Creates a new instance of the `Vector` with a capacity of at least `capacity`.
    ///
    /// Calling this method is equivalent to calling `try_with_capacity` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `T` is zero-sized, or if the memory cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::vector::Vector;
    /// let vec: Vector<i32> = Vector::with_capacity(4);
    ///
    /// assert_eq!(0, vec.len());
    /// assert_eq!(4, vec.capacity());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(|failure| panic_from_failure(failure))
    }
}

impl<T: Copy, H: VectorHooks> Vector<T, H> {
    /// Creates a new, empty, instance of the `Vector` with the specified hooks.
    ///
    /// No memory is allocated.
    ///
    /// #   Panics
    ///
    /// Panics if `T` is zero-sized.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::vector::{Vector, DefaultVectorHooks};
    /// let vec: Vector<i32> = Vector::with_hooks(DefaultVectorHooks::default());
    ///
    /// assert_eq!(0, vec.len());
    /// assert_eq!(0, vec.capacity());
    /// ```
    pub fn with_hooks(hooks: H) -> Self {
        if mem::size_of::<T>() == 0 {
            panic_zero_sized_element();
        }

        Self { hooks, buffer: Buffer::new(), length: 0 }
    }

    /// Creates a new instance of the `Vector` with a capacity of at least `capacity`, and the specified hooks.
    ///
    /// If `capacity` is not a power of 2, it is rounded up. The slots are zero-filled.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated.
    ///
    /// #   Panics
    ///
    /// Panics if `T` is zero-sized.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::vector::{Vector, DefaultVectorHooks};
    /// let hooks = DefaultVectorHooks::default();
    /// let vec: Vector<i32> = Vector::try_with_capacity_and_hooks(3, hooks).unwrap();
    ///
    /// assert_eq!(4, vec.capacity());
    /// ```
    pub fn try_with_capacity_and_hooks(capacity: usize, hooks: H) -> Result<Self> {
        let mut result = Self::with_hooks(hooks);

        if capacity == 0 {
            return Ok(result);
        }

        let capacity = capacity::round_up(capacity).ok_or(Failure::ElementsOverflow)?;

        result.buffer = Buffer::zeroed(capacity, &result.hooks)?;

        Ok(result)
    }

    /// Creates a new instance of the `Vector` with a capacity of at least `capacity`, and the specified hooks.
    ///
    /// Calling this method is equivalent to calling `try_with_capacity_and_hooks` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `T` is zero-sized, or if the memory cannot be allocated.
    pub fn with_capacity_and_hooks(capacity: usize, hooks: H) -> Self {
        Self::try_with_capacity_and_hooks(capacity, hooks).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Returns a reference to the hooks of the instance.
    pub fn hooks(&self) -> &H { &self.hooks }

    /// Returns whether the instance contains any element, or not.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::vector::Vector;
    /// let mut vec: Vector<_> = Vector::new();
    /// assert!(vec.is_empty());
    ///
    /// vec.push(1);
    /// assert!(!vec.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.length == 0 }

    /// Returns the number of elements contained in the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::vector::Vector;
    /// let mut vec: Vector<_> = Vector::new();
    /// assert_eq!(0, vec.len());
    ///
    /// vec.push(1);
    /// assert_eq!(1, vec.len());
    /// ```
    pub fn len(&self) -> usize { self.length }

    /// Returns the current capacity of the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::vector::Vector;
    /// let mut vec: Vector<_> = Vector::new();
    /// assert_eq!(0, vec.capacity());
    ///
    /// vec.extend([1, 2, 3, 4, 5].iter().copied());
    /// assert_eq!(8, vec.capacity());
    /// ```
    pub fn capacity(&self) -> usize { self.buffer.capacity() }

    /// Returns a slice of all the elements.
    pub fn as_slice(&self) -> &[T] {
        //  Safety:
        //  -   The pointer is non-null and aligned, even when no memory is allocated.
        //  -   The first `length` slots are initialized.
        unsafe { slice::from_raw_parts(self.buffer.as_ptr(), self.length) }
    }

    /// Returns a mutable slice of all the elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        //  Safety:
        //  -   The pointer is non-null and aligned, even when no memory is allocated.
        //  -   The first `length` slots are initialized.
        //  -   Exclusive access, as per &mut self.
        unsafe { slice::from_raw_parts_mut(self.buffer.as_mut_ptr(), self.length) }
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> slice::Iter<'_, T> { self.as_slice().iter() }

    /// Returns an iterator over the elements, allowing modification.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> { self.as_mut_slice().iter_mut() }

    /// Returns a reference to the ith element, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.push(1);
    ///
    /// assert_eq!(Some(1), vec.get(0).copied());
    /// assert_eq!(None, vec.get(1));
    /// ```
    pub fn get(&self, i: usize) -> Option<&T> {
        if i < self.length {
            //  Safety:
            //  -   `i` is within bounds.
            Some(unsafe { self.get_unchecked(i) })
        } else {
            None
        }
    }

    /// Returns a reference to the ith element.
    ///
    /// #   Safety
    ///
    /// -   Assumes that i is a valid index.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.push(1);
    ///
    /// assert_eq!(1, unsafe { *vec.get_unchecked(0) });
    /// ```
    pub unsafe fn get_unchecked(&self, i: usize) -> &T {
        debug_assert!(i < self.length);

        //  Safety:
        //  -   `i` is within bounds, as per pre-condition.
        unsafe { &*self.buffer.as_ptr().add(i) }
    }

    /// Returns a reference to the ith element, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.push(1);
    ///
    /// if let Some(e) = vec.get_mut(0) {
    ///     *e = 3;
    /// }
    /// assert_eq!(3, vec[0]);
    /// ```
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        if i < self.length {
            //  Safety:
            //  -   `i` is within bounds.
            Some(unsafe { self.get_unchecked_mut(i) })
        } else {
            None
        }
    }

    /// Returns a reference to the ith element.
    ///
    /// #   Safety
    ///
    /// -   Assumes that i is a valid index.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.push(1);
    ///
    /// unsafe { *vec.get_unchecked_mut(0) = 3 };
    /// assert_eq!(3, vec[0]);
    /// ```
    pub unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut T {
        debug_assert!(i < self.length);

        //  Safety:
        //  -   `i` is within bounds, as per pre-conditions.
        //  -   Exclusive access, as per &mut self.
        unsafe { &mut *self.buffer.as_mut_ptr().add(i) }
    }

    /// Appends an element to the back, returning a reference to the stored copy.
    ///
    /// If the instance is full, its capacity first grows to the next power of 2, and at least doubles.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, leaving the instance unchanged.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// assert_eq!(Ok(&mut 3), vec.try_push(3));
    /// assert_eq!(3, vec[0]);
    /// assert_eq!(2, vec.capacity());
    /// ```
    pub fn try_push(&mut self, value: T) -> Result<&mut T> {
        if self.length == self.buffer.capacity() {
            let capacity = capacity::grow(self.buffer.capacity()).ok_or(Failure::ElementsOverflow)?;

            //  Safety:
            //  -   The buffer was allocated with `self.hooks`.
            unsafe { self.buffer.resize(capacity, &self.hooks) }?;
        }

        debug_assert!(self.length < self.buffer.capacity());

        let index = self.length;

        //  Safety:
        //  -   `index` is within the capacity.
        unsafe { ptr::write(self.buffer.as_mut_ptr().add(index), value) };

        self.length += 1;

        //  Safety:
        //  -   `index` is within bounds, now.
        Ok(unsafe { self.get_unchecked_mut(index) })
    }

    /// Appends an element to the back, returning a reference to the stored copy.
    ///
    /// Calling this method is equivalent to calling `try_push` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the value cannot be pushed.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// *vec.push(3) += 1;
    /// assert_eq!(4, vec[0]);
    /// ```
    pub fn push(&mut self, value: T) -> &mut T {
        self.try_push(value).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Appends multiple elements to the back.
    ///
    /// #   Errors
    ///
    /// Returns an error if any of the values cannot be pushed, in which case the values pushed prior to the failure
    /// remain.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// assert_eq!(Ok(()), vec.try_extend([1, 2, 3].iter().copied()));
    /// assert_eq!(3, vec.len());
    /// ```
    pub fn try_extend<C>(&mut self, collection: C) -> Result<()>
    where
        C: IntoIterator<Item = T>,
    {
        for e in collection {
            self.try_push(e)?;
        }

        Ok(())
    }

    /// Appends multiple elements to the back.
    ///
    /// Calling this method is equivalent to calling `try_extend` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if any of the values cannot be pushed.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.extend([1, 2, 3].iter().copied());
    /// assert_eq!(3, vec.len());
    /// ```
    pub fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>,
    {
        self.try_extend(collection).unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Removes the last element, and returns it, if any.
    ///
    /// The capacity is left unchanged.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.extend([1, 2].iter().copied());
    ///
    /// assert_eq!(Some(2), vec.pop());
    /// assert_eq!(Some(1), vec.pop());
    /// assert_eq!(None, vec.pop());
    /// assert_eq!(2, vec.capacity());
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        let last = self.length.checked_sub(1)?;

        //  Safety:
        //  -   `last` is within bounds.
        let value = unsafe { *self.get_unchecked(last) };

        self.length = last;

        Some(value)
    }

    /// Removes the ith element, and returns it, if any.
    ///
    /// The last element takes the place of the removed one, in O(1), hence the order of elements is not preserved.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.extend([1, 2, 3, 4].iter().copied());
    ///
    /// assert_eq!(Some(2), vec.swap_remove(1));
    /// assert_eq!(&[1, 4, 3], vec.as_slice());
    ///
    /// assert_eq!(None, vec.swap_remove(3));
    /// assert_eq!(&[1, 4, 3], vec.as_slice());
    /// ```
    pub fn swap_remove(&mut self, i: usize) -> Option<T> {
        if i >= self.length {
            return None;
        }

        let last = self.length - 1;
        let base = self.buffer.as_mut_ptr();

        //  Safety:
        //  -   `i` and `last` are within bounds.
        //  -   `ptr::copy` handles `i == last`, where source and destination are the same slot.
        let value = unsafe {
            let value = ptr::read(base.add(i));
            ptr::copy(base.add(last), base.add(i), 1);
            value
        };

        self.length = last;

        Some(value)
    }

    /// Clears the instance.
    ///
    /// The instance is then empty, although it retains previously allocated memory.
    ///
    /// Use `shrink` to release excess memory, or `release` to release all memory.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.extend([1, 2, 3].iter().copied());
    ///
    /// vec.clear();
    /// assert_eq!(0, vec.len());
    /// assert_eq!(4, vec.capacity());
    /// ```
    pub fn clear(&mut self) { self.length = 0; }

    /// Releases the instance.
    ///
    /// All memory is released, and the instance is then empty. It remains usable, and will allocate anew on demand.
    ///
    /// Calling this method on an already released instance has no effect.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.extend([1, 2, 3].iter().copied());
    ///
    /// vec.release();
    /// assert_eq!(0, vec.len());
    /// assert_eq!(0, vec.capacity());
    ///
    /// vec.release();
    /// vec.push(4);
    /// assert_eq!(&[4], vec.as_slice());
    /// ```
    pub fn release(&mut self) {
        self.length = 0;

        //  Safety:
        //  -   The buffer was allocated with `self.hooks`.
        unsafe { self.buffer.release(&self.hooks) };
    }

    /// Reserves capacity for at least `capacity` elements, in total.
    ///
    /// If the current capacity is insufficient, the capacity becomes exactly `capacity`, without rounding.
    ///
    /// Returns the capacity of the instance.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be allocated, leaving the instance unchanged.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::failure::Failure;
    /// #   use ductile::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::with_capacity(4);
    ///
    /// assert_eq!(Ok(4), vec.try_reserve(2));
    /// assert_eq!(Ok(5), vec.try_reserve(5));
    ///
    /// //  BytesOverflow signals that the size of the buffer to allocate, in bytes, overflows.
    /// assert_eq!(Err(Failure::BytesOverflow), vec.try_reserve(usize::MAX));
    /// assert_eq!(5, vec.capacity());
    /// ```
    pub fn try_reserve(&mut self, capacity: usize) -> Result<usize> {
        if capacity > self.capacity() {
            self.try_realloc(capacity)
        } else {
            Ok(self.capacity())
        }
    }

    /// Reserves capacity for at least `capacity` elements, in total.
    ///
    /// Calling this method is equivalent to calling `try_reserve` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be allocated.
    pub fn reserve(&mut self, capacity: usize) -> usize {
        self.try_reserve(capacity).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Truncates the capacity to at most `capacity` elements.
    ///
    /// If the current capacity exceeds `capacity`, the capacity becomes exactly `capacity`.
    ///
    /// The caller is expected to ensure that `capacity` is no less than the length of the instance; if it is, the
    /// elements beyond the new capacity are discarded.
    ///
    /// Returns the capacity of the instance.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be reallocated, leaving the instance unchanged.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::with_capacity(8);
    /// vec.extend([1, 2, 3].iter().copied());
    ///
    /// assert_eq!(Ok(8), vec.try_truncate(10));
    /// assert_eq!(Ok(5), vec.try_truncate(5));
    /// assert_eq!(&[1, 2, 3], vec.as_slice());
    /// ```
    pub fn try_truncate(&mut self, capacity: usize) -> Result<usize> {
        if capacity < self.capacity() {
            self.try_realloc(capacity)
        } else {
            Ok(self.capacity())
        }
    }

    /// Truncates the capacity to at most `capacity` elements.
    ///
    /// Calling this method is equivalent to calling `try_truncate` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be reallocated.
    pub fn truncate(&mut self, capacity: usize) -> usize {
        self.try_truncate(capacity).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Shrinks the instance.
    ///
    /// This method releases excess capacity, retaining just enough to accommodate the current elements.
    ///
    /// Returns the capacity of the instance.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be reallocated, leaving the instance unchanged.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::with_capacity(8);
    /// vec.extend([1, 2, 3].iter().copied());
    ///
    /// assert_eq!(Ok(3), vec.try_shrink());
    /// assert_eq!(&[1, 2, 3], vec.as_slice());
    /// ```
    pub fn try_shrink(&mut self) -> Result<usize> {
        self.try_truncate(self.length)
    }

    /// Shrinks the instance.
    ///
    /// Calling this method is equivalent to calling `try_shrink` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be reallocated.
    pub fn shrink(&mut self) -> usize {
        self.try_shrink().unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Sets the capacity to exactly `capacity` elements, be it larger or smaller than the current one.
    ///
    /// The caller is expected to ensure that `capacity` is no less than the length of the instance; if it is, the
    /// elements beyond the new capacity are discarded.
    ///
    /// A `capacity` of 0 releases all memory.
    ///
    /// Returns the capacity of the instance.
    ///
    /// #   Errors
    ///
    /// Returns an error if the memory cannot be reallocated, leaving the instance unchanged.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use ductile::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    ///
    /// assert_eq!(Ok(3), vec.try_realloc(3));
    /// vec.extend([1, 2, 3].iter().copied());
    /// assert_eq!(3, vec.capacity());
    ///
    /// assert_eq!(Ok(0), vec.try_realloc(0));
    /// assert!(vec.is_empty());
    /// ```
    pub fn try_realloc(&mut self, capacity: usize) -> Result<usize> {
        //  Safety:
        //  -   The buffer was allocated with `self.hooks`.
        unsafe { self.buffer.resize(capacity, &self.hooks) }?;

        debug_assert_eq!(self.buffer.is_allocated(), capacity > 0);

        self.length = cmp::min(self.length, capacity);

        Ok(self.capacity())
    }

    /// Sets the capacity to exactly `capacity` elements.
    ///
    /// Calling this method is equivalent to calling `try_realloc` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the memory cannot be reallocated.
    pub fn realloc(&mut self, capacity: usize) -> usize {
        self.try_realloc(capacity).unwrap_or_else(|failure| panic_from_failure(failure))
    }
}

/// A `Vector<T>` can be `Send` across threads whenever a `Vec<T>` can.
///
/// #   Example of Send.
///
/// ```
/// # use ductile::vector::Vector;
/// fn ensure_send<T: Send>(_: T) {}
///
/// let mut vec: Vector<_> = Vector::new();
/// vec.push(1u32);
///
/// ensure_send(vec);
/// ```
///
/// #   Example of not Send.
///
/// Types that are not Send, however, prevent from sending `Vector` across threads.
///
/// ```compile_fail
/// # use ductile::vector::Vector;
/// fn ensure_send<T: Send>(_: T) {}
///
/// let mut vec: Vector<_> = Vector::new();
/// vec.push(&std::cell::Cell::new(3) as *const _);
///
/// ensure_send(vec);
/// ```
unsafe impl<T: Copy + Send, H: VectorHooks + Send> Send for Vector<T, H> {}

/// A `Vector<T>` can be shared across threads whenever a `Vec<T>` can, as all modifications require `&mut self`.
///
/// Concurrent modifications require external synchronization, such as a `Mutex`.
unsafe impl<T: Copy + Sync, H: VectorHooks + Sync> Sync for Vector<T, H> {}

impl<T: Copy, H: VectorHooks> Drop for Vector<T, H> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T: Copy, H: VectorHooks + Default> Default for Vector<T, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, H: VectorHooks + Clone> Clone for Vector<T, H> {
    fn clone(&self) -> Self {
        let mut result = Self::with_hooks(self.hooks.clone());
        result.realloc(self.capacity());

        //  Safety:
        //  -   Both buffers hold at least `self.length` slots.
        //  -   Distinct allocations do not overlap.
        unsafe { ptr::copy_nonoverlapping(self.buffer.as_ptr(), result.buffer.as_mut_ptr(), self.length) };

        result.length = self.length;
        result
    }
}

impl<T: Copy + fmt::Debug, H: VectorHooks> fmt::Debug for Vector<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Vector")
            .field("capacity", &self.capacity())
            .field("length", &self.length)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: Copy + PartialEq, H: VectorHooks, G: VectorHooks> PartialEq<Vector<T, G>> for Vector<T, H> {
    fn eq(&self, other: &Vector<T, G>) -> bool { self.as_slice() == other.as_slice() }
}

impl<T: Copy + Eq, H: VectorHooks> Eq for Vector<T, H> {}

impl<T: Copy, H: VectorHooks + Default> iter::FromIterator<T> for Vector<T, H> {
    fn from_iter<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = T>,
    {
        let mut result = Vector::with_hooks(H::default());
        result.extend(collection);
        result
    }
}

impl<T: Copy, H: VectorHooks> iter::Extend<T> for Vector<T, H> {
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>,
    {
        self.try_extend(collection).unwrap_or_else(|failure| panic_from_failure(failure));
    }
}

impl<'a, T: Copy, H: VectorHooks> IntoIterator for &'a Vector<T, H> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T: Copy, H: VectorHooks> IntoIterator for &'a mut Vector<T, H> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<T: Copy, H: VectorHooks> ops::Index<usize> for Vector<T, H> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.get(index).expect("Valid index")
    }
}

impl<T: Copy, H: VectorHooks> ops::IndexMut<usize> for Vector<T, H> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index).expect("Valid index")
    }
}

#[cold]
#[inline(never)]
pub(super) fn panic_from_failure(failure: Failure) -> ! {
    panic!("{}", failure);
}

#[cold]
#[inline(never)]
fn panic_zero_sized_element() -> ! {
    panic!("Zero-sized elements are not supported");
}

#[cfg(test)]
mod tests {

    use std::mem;

    use super::Vector;

    use crate::failure::Failure;
    use crate::utils::tester::*;

    #[test]
    fn size_of() {
        const PTR_SIZE: usize = mem::size_of::<usize>();

        assert_eq!(3 * PTR_SIZE, mem::size_of::<Vector<u8>>());
    }

    #[test]
    #[should_panic(expected = "Zero-sized elements are not supported")]
    fn zero_sized_element() {
        let _: Vector<()> = Vector::new();
    }

    #[test]
    fn scenario_push_swap_remove_pop() {
        let mut vec: Vector<u32> = Vector::new();
        assert_eq!(4, mem::size_of::<u32>());

        vec.push(10);
        vec.push(20);
        vec.push(30);

        assert_eq!(3, vec.len());
        assert_eq!(4, vec.capacity());
        assert_eq!(&[10, 20, 30], vec.as_slice());

        assert_eq!(Some(10), vec.swap_remove(0));
        assert_eq!(2, vec.len());
        assert_eq!(Some(&30), vec.get(0));
        assert_eq!(Some(&20), vec.get(1));

        assert_eq!(Some(20), vec.pop());
        assert_eq!(1, vec.len());
    }

    #[test]
    fn push_growth() {
        let mut vec: Vector<u16> = Vector::new();
        let mut capacities = Vec::new();

        for i in 0..17 {
            vec.push(i);
            capacities.push(vec.capacity());
        }

        assert_eq!(
            vec![2, 2, 4, 4, 8, 8, 8, 8, 16, 16, 16, 16, 16, 16, 16, 16, 32],
            capacities
        );
    }

    #[test]
    fn push_after_reserve_grows_to_power_of_2() {
        let mut vec: Vector<u16> = Vector::new();
        vec.reserve(5);
        vec.extend(0..5);

        assert_eq!(5, vec.capacity());

        vec.push(5);
        assert_eq!(8, vec.capacity());
    }

    #[test]
    fn push_failure_leaves_unchanged() {
        let allocator = TestAllocator::default();
        allocator.allowed.set(1);

        let mut vec: Vector<u32, _> = Vector::with_hooks(&allocator);
        vec.push(1);
        vec.push(2);
        assert_eq!(2, vec.capacity());

        assert_eq!(Err(Failure::OutOfMemory), vec.try_push(3));

        assert_eq!(2, vec.len());
        assert_eq!(2, vec.capacity());
        assert_eq!(&[1, 2], vec.as_slice());
        assert_eq!(vec![8], allocator.allocation_sizes());
    }

    #[test]
    #[should_panic(expected = "OutOfMemory")]
    fn push_failure_panics() {
        let allocator = TestAllocator::default();

        let mut vec: Vector<u32, _> = Vector::with_hooks(&allocator);
        vec.push(1);
    }

    #[test]
    fn extend_failure_keeps_prefix() {
        let allocator = TestAllocator::default();
        allocator.allowed.set(2);

        let mut vec: Vector<u8, _> = Vector::with_hooks(&allocator);

        assert_eq!(Err(Failure::OutOfMemory), vec.try_extend(0..10));
        assert_eq!(&[0, 1, 2, 3], vec.as_slice());
        assert_eq!(4, vec.capacity());
    }

    #[test]
    fn with_capacity_zero() {
        let allocator = TestAllocator::default();

        let vec: Vector<u32, _> = Vector::try_with_capacity_and_hooks(0, &allocator).unwrap();

        assert_eq!(0, vec.capacity());
        assert!(allocator.allocations().is_empty());
    }

    #[test]
    fn with_capacity_rounds_up() {
        let allocator = TestAllocator::unlimited();

        let vec: Vector<u32, _> = Vector::with_capacity_and_hooks(5, &allocator);

        assert_eq!(0, vec.len());
        assert_eq!(8, vec.capacity());
        assert_eq!(vec![32], allocator.allocation_sizes());
    }

    #[test]
    fn with_capacity_failure() {
        let allocator = TestAllocator::default();

        let vec = Vector::<u32, _>::try_with_capacity_and_hooks(5, &allocator);

        assert_eq!(Some(Failure::OutOfMemory), vec.err());
        assert!(allocator.allocations().is_empty());
    }

    #[test]
    fn get_out_of_range() {
        let mut vec: Vector<u32> = Vector::with_capacity(4);

        assert_eq!(None, vec.get(0));
        assert_eq!(None, vec.get_mut(0));

        vec.push(1);

        assert_eq!(Some(&1), vec.get(0));
        assert_eq!(None, vec.get(1));
        assert_eq!(None, vec.get(usize::MAX));
    }

    #[test]
    fn pop_empty() {
        let mut vec: Vector<u32> = Vector::new();

        assert_eq!(None, vec.pop());
        assert_eq!(0, vec.len());
        assert_eq!(0, vec.capacity());
    }

    #[test]
    fn pop_keeps_capacity() {
        let mut vec: Vector<u32> = (0..5).collect();

        while vec.pop().is_some() {}

        assert_eq!(0, vec.len());
        assert_eq!(8, vec.capacity());
    }

    #[test]
    fn swap_remove_last() {
        let mut vec: Vector<u32> = (0..4).collect();

        assert_eq!(Some(3), vec.swap_remove(3));
        assert_eq!(&[0, 1, 2], vec.as_slice());

        assert_eq!(Some(2), vec.swap_remove(2));
        assert_eq!(Some(1), vec.swap_remove(1));
        assert_eq!(Some(0), vec.swap_remove(0));
        assert!(vec.is_empty());
        assert_eq!(None, vec.swap_remove(0));
    }

    #[test]
    fn swap_remove_out_of_range() {
        let mut vec: Vector<u32> = (0..4).collect();

        assert_eq!(None, vec.swap_remove(4));
        assert_eq!(&[0, 1, 2, 3], vec.as_slice());
    }

    #[test]
    fn reserve_exact() {
        let allocator = TestAllocator::unlimited();

        let mut vec: Vector<u32, _> = Vector::with_hooks(&allocator);

        assert_eq!(5, vec.reserve(5));
        assert_eq!(1, allocator.allocations().len());

        vec.extend(0..5);

        assert_eq!(5, vec.capacity());
        assert_eq!(vec![20], allocator.allocation_sizes());

        assert_eq!(5, vec.reserve(3));
        assert_eq!(vec![20], allocator.allocation_sizes());
    }

    #[test]
    fn reserve_failure_leaves_unchanged() {
        let allocator = TestAllocator::default();
        allocator.allowed.set(1);

        let mut vec: Vector<u32, _> = Vector::with_hooks(&allocator);
        vec.extend([7, 8].iter().copied());

        assert_eq!(Err(Failure::OutOfMemory), vec.try_reserve(16));
        assert_eq!(2, vec.capacity());
        assert_eq!(&[7, 8], vec.as_slice());
    }

    #[test]
    fn truncate_capacity() {
        let mut vec: Vector<u32> = Vector::with_capacity(16);
        vec.extend(0..3);

        assert_eq!(16, vec.truncate(20));
        assert_eq!(16, vec.capacity());

        assert_eq!(6, vec.truncate(6));
        assert_eq!(6, vec.capacity());
        assert_eq!(&[0, 1, 2], vec.as_slice());
    }

    #[test]
    fn truncate_below_length_discards() {
        let mut vec: Vector<u32> = (0..8).collect();

        assert_eq!(2, vec.truncate(2));
        assert_eq!(&[0, 1], vec.as_slice());
    }

    #[test]
    fn truncate_failure_leaves_unchanged() {
        let allocator = TestAllocator::default();
        allocator.allowed.set(1);

        let mut vec: Vector<u32, _> = Vector::with_capacity_and_hooks(8, &allocator);
        vec.extend(0..5);

        assert_eq!(Err(Failure::OutOfMemory), vec.try_truncate(2));
        assert_eq!(8, vec.capacity());
        assert_eq!(&[0, 1, 2, 3, 4], vec.as_slice());
    }

    #[test]
    fn shrink_to_length() {
        let mut vec: Vector<u32> = (0..5).collect();
        assert_eq!(8, vec.capacity());

        assert_eq!(5, vec.shrink());
        assert_eq!(&[0, 1, 2, 3, 4], vec.as_slice());

        vec.clear();
        assert_eq!(0, vec.shrink());
        assert_eq!(0, vec.capacity());
    }

    #[test]
    fn realloc_both_ways() {
        let allocator = TestAllocator::unlimited();

        let mut vec: Vector<u64, _> = Vector::with_hooks(&allocator);

        assert_eq!(3, vec.realloc(3));
        vec.extend(0..3);

        assert_eq!(7, vec.realloc(7));
        assert_eq!(&[0, 1, 2], vec.as_slice());
        assert_eq!(vec![56], allocator.allocation_sizes());

        assert_eq!(3, vec.realloc(3));
        assert_eq!(&[0, 1, 2], vec.as_slice());

        assert_eq!(0, vec.realloc(0));
        assert!(vec.is_empty());
        assert!(allocator.allocations().is_empty());
    }

    #[test]
    fn release_idempotent() {
        let allocator = TestAllocator::unlimited();

        let mut vec: Vector<u32, _> = Vector::with_hooks(&allocator);
        vec.extend(0..10);

        vec.release();
        assert_eq!(0, vec.len());
        assert_eq!(0, vec.capacity());
        assert!(allocator.allocations().is_empty());

        vec.release();
        assert!(allocator.allocations().is_empty());

        vec.push(3);
        assert_eq!(&[3], vec.as_slice());
    }

    #[test]
    fn drop_releases() {
        let allocator = TestAllocator::unlimited();

        {
            let mut vec: Vector<u32, _> = Vector::with_hooks(&allocator);
            vec.extend(0..10);
            assert_eq!(1, allocator.allocations().len());
        }

        assert!(allocator.allocations().is_empty());
    }

    #[test]
    fn trait_clone() {
        let mut vec: Vector<u32> = Vector::new();
        vec.reserve(5);
        vec.extend(0..3);

        let clone = vec.clone();

        assert_eq!(5, clone.capacity());
        assert_eq!(vec, clone);
    }

    #[test]
    fn trait_debug() {
        use std::fmt::Write;

        let mut vec: Vector<_> = Vector::new();
        vec.extend([1, 2, 3, 4, 5].iter().copied());

        let mut sink = String::new();
        let _ = write!(sink, "{:?}", vec);

        assert_eq!(
            "Vector { capacity: 8, length: 5, elements: [1, 2, 3, 4, 5] }",
            sink
        );
    }

    #[test]
    fn trait_from_iterator() {
        let vec: Vector<_> = [1, 2, 3, 4, 5].iter().copied().collect();

        assert_eq!(5, vec.len());
    }

    #[test]
    fn trait_into_iterator() {
        let mut vec: Vector<u32> = (1..4).collect();

        for e in &mut vec {
            *e *= 2;
        }

        let sum: u32 = (&vec).into_iter().sum();
        assert_eq!(12, sum);
    }

    #[test]
    #[should_panic(expected = "Valid index")]
    fn trait_index_out_of_range() {
        let vec: Vector<u32> = (1..4).collect();

        let _element = vec[3];
    }
} //  mod tests
