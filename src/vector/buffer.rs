//! The contiguous storage of the vector.

use super::root::{marker, mem, ptr::NonNull};

use super::allocator::{Allocator, Layout};
use super::failure::{Failure, Result};

//  The storage.
//
//  A run of `capacity` slots, each suitably sized and aligned for a `T`:
//
//  -   `ptr` is None if and only if `capacity` is 0.
//  -   The Buffer does not know which slots are initialized; this is the Vector's business.
//  -   The Buffer does not know which allocator it was allocated with; this is the Vector's business too.
pub struct Buffer<T> {
    ptr: Option<NonNull<T>>,
    capacity: usize,
    _marker: marker::PhantomData<T>,
}

impl<T> Buffer<T> {
    //  Creates an empty instance, without allocating.
    pub const fn new() -> Self {
        Self { ptr: None, capacity: 0, _marker: marker::PhantomData }
    }

    //  Creates an instance of exactly `capacity` zero-filled slots.
    //
    //  #   Errors
    //
    //  Returns an error if the memory cannot be allocated.
    pub fn zeroed<A: Allocator>(capacity: usize, allocator: &A) -> Result<Self> {
        if capacity == 0 {
            return Ok(Self::new());
        }

        let layout = Self::allocation_layout(capacity)?;

        //  Safety:
        //  -   The size of the layout is non-zero, as capacity is non-zero and T is not zero-sized.
        let ptr = unsafe { allocator.allocate_zeroed(layout) };

        let ptr = NonNull::new(ptr as *mut T).ok_or(Failure::OutOfMemory)?;

        Ok(Self { ptr: Some(ptr), capacity, _marker: marker::PhantomData })
    }

    //  Returns whether the buffer is allocated, or not.
    pub fn is_allocated(&self) -> bool { self.ptr.is_some() }

    //  Returns the number of slots.
    pub fn capacity(&self) -> usize { self.capacity }

    //  Returns a pointer to the first slot.
    //
    //  The pointer is dangling, yet suitably aligned, if no slot is allocated.
    pub fn as_ptr(&self) -> *const T {
        self.ptr.unwrap_or(NonNull::dangling()).as_ptr()
    }

    //  Returns a mutable pointer to the first slot.
    //
    //  The pointer is dangling, yet suitably aligned, if no slot is allocated.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.unwrap_or(NonNull::dangling()).as_ptr()
    }

    //  Resizes the buffer to exactly `capacity` slots.
    //
    //  The content of the first `min(capacity, self.capacity())` slots is preserved, the content of any new slot is
    //  unspecified.
    //
    //  #   Errors
    //
    //  Returns an error if the memory cannot be allocated, leaving the buffer unchanged.
    //
    //  #   Safety
    //
    //  -   Assumes that `allocator` is the allocator the buffer was allocated with, if allocated.
    pub unsafe fn resize<A: Allocator>(&mut self, capacity: usize, allocator: &A) -> Result<()> {
        if capacity == self.capacity {
            return Ok(());
        }

        if capacity == 0 {
            //  Safety:
            //  -   Forwarding.
            unsafe { self.release(allocator) };
            return Ok(());
        }

        let layout = Self::allocation_layout(capacity)?;

        let ptr = match self.ptr {
            //  Safety:
            //  -   The size of the layout is non-zero.
            None => unsafe { allocator.allocate(layout) },
            Some(current) => {
                let current_layout = Self::current_layout(self.capacity);

                //  Safety:
                //  -   `current` was allocated by `allocator`, with `current_layout`, as per pre-conditions.
                //  -   The new size is non-zero, and was validated by `Layout::array`.
                unsafe { allocator.reallocate(current.as_ptr() as *mut u8, current_layout, layout.size()) }
            },
        };

        let ptr = NonNull::new(ptr as *mut T).ok_or(Failure::OutOfMemory)?;

        #[cfg(feature = "logging")]
        log::trace!(
            "relocated {} slots of {} bytes to {} slots",
            self.capacity,
            mem::size_of::<T>(),
            capacity
        );

        self.ptr = Some(ptr);
        self.capacity = capacity;

        Ok(())
    }

    //  Releases the memory, if any, leaving the buffer empty.
    //
    //  #   Safety
    //
    //  -   Assumes that `allocator` is the allocator the buffer was allocated with, if allocated.
    pub unsafe fn release<A: Allocator>(&mut self, allocator: &A) {
        let Some(ptr) = self.ptr.take() else { return };

        let layout = Self::current_layout(self.capacity);
        self.capacity = 0;

        //  Safety:
        //  -   The pointer matches the pointer of the allocation.
        //  -   The layout matches the layout of the allocation.
        unsafe { allocator.deallocate(ptr.as_ptr() as *mut u8, layout) };
    }

    //  Computes the layout for a given capacity.
    //
    //  #   Fails
    //
    //  -   If the necessary size overflows.
    fn allocation_layout(capacity: usize) -> Result<Layout> {
        debug_assert!(mem::size_of::<T>() > 0);

        Layout::array::<T>(capacity).map_err(|_| Failure::BytesOverflow)
    }

    //  Computes the layout of the current allocation.
    fn current_layout(capacity: usize) -> Layout {
        match Self::allocation_layout(capacity) {
            Ok(layout) => layout,
            Err(_) => {
                //  Safety:
                //  -   Cannot error, it succeeded during the allocation.
                debug_assert!(false, "{:?} succeeded in allocation!", capacity);
                unsafe { super::root::hint::unreachable_unchecked() }
            },
        }
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {

use super::*;

use crate::utils::tester::*;

#[test]
fn buffer_allocation_layout() {
    fn allocation_layout<T>(capacity: usize) -> Result<usize> {
        Buffer::<T>::allocation_layout(capacity).map(|layout| {
            assert_eq!(mem::align_of::<T>(), layout.align());
            layout.size()
        })
    }

    assert_eq!(Ok(4), allocation_layout::<u8>(4));
    assert_eq!(Ok(16), allocation_layout::<u32>(4));
    assert_eq!(Ok(24), allocation_layout::<(u16, u8)>(6));
    assert_eq!(Err(Failure::BytesOverflow), allocation_layout::<u32>(usize::MAX / 2));
}

#[test]
fn buffer_new() {
    let buffer = Buffer::<u32>::new();

    assert!(!buffer.is_allocated());
    assert_eq!(0, buffer.capacity());
    assert!(!buffer.as_ptr().is_null());
}

#[test]
fn buffer_zeroed() {
    let allocator = TestAllocator::default();
    allocator.allowed.set(1);

    let mut buffer = Buffer::<u32>::zeroed(4, &allocator).unwrap();

    assert!(buffer.is_allocated());
    assert_eq!(4, buffer.capacity());
    assert_eq!(vec![16], allocator.allocation_sizes());

    let slots = unsafe { std::slice::from_raw_parts(buffer.as_ptr(), 4) };
    assert_eq!(&[0, 0, 0, 0], slots);

    unsafe { buffer.release(&allocator) };
    assert!(allocator.allocations().is_empty());
}

#[test]
fn buffer_zeroed_empty() {
    let allocator = TestAllocator::default();

    let buffer = Buffer::<u32>::zeroed(0, &allocator).unwrap();

    assert!(!buffer.is_allocated());
    assert!(allocator.allocations().is_empty());
}

#[test]
fn buffer_zeroed_failure() {
    let allocator = TestAllocator::default();

    let buffer = Buffer::<u32>::zeroed(4, &allocator);

    assert_eq!(Some(Failure::OutOfMemory), buffer.err());
}

#[test]
fn buffer_resize_grow_and_shrink() {
    let allocator = TestAllocator::unlimited();

    let mut buffer = Buffer::<u32>::new();

    unsafe { buffer.resize(2, &allocator) }.unwrap();
    assert_eq!(2, buffer.capacity());
    assert_eq!(vec![8], allocator.allocation_sizes());

    unsafe {
        buffer.as_mut_ptr().write(7);
        buffer.as_mut_ptr().add(1).write(9);
    }

    unsafe { buffer.resize(5, &allocator) }.unwrap();
    assert_eq!(5, buffer.capacity());
    assert_eq!(vec![20], allocator.allocation_sizes());

    unsafe { buffer.resize(1, &allocator) }.unwrap();
    assert_eq!(1, buffer.capacity());
    assert_eq!(vec![4], allocator.allocation_sizes());
    assert_eq!(7, unsafe { *buffer.as_ptr() });

    unsafe { buffer.resize(0, &allocator) }.unwrap();
    assert!(!buffer.is_allocated());
    assert!(allocator.allocations().is_empty());
}

#[test]
fn buffer_resize_failure() {
    let allocator = TestAllocator::default();
    allocator.allowed.set(1);

    let mut buffer = Buffer::<u32>::new();
    unsafe { buffer.resize(2, &allocator) }.unwrap();

    let before = buffer.as_ptr();

    assert_eq!(Err(Failure::OutOfMemory), unsafe { buffer.resize(4, &allocator) });
    assert_eq!(2, buffer.capacity());
    assert_eq!(before, buffer.as_ptr());

    assert_eq!(Err(Failure::BytesOverflow), unsafe { buffer.resize(usize::MAX, &allocator) });
    assert_eq!(2, buffer.capacity());

    unsafe { buffer.release(&allocator) };
}

#[test]
fn buffer_release_idempotent() {
    let allocator = TestAllocator::default();
    allocator.allowed.set(1);

    let mut buffer = Buffer::<u64>::zeroed(3, &allocator).unwrap();

    unsafe { buffer.release(&allocator) };
    unsafe { buffer.release(&allocator) };

    assert!(!buffer.is_allocated());
    assert_eq!(0, buffer.capacity());
    assert!(allocator.allocations().is_empty());
}

} //  mod tests
