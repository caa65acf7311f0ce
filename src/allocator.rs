//! Allocator.
//!
//! The `Allocator` trait allows a user to customize allocation on a per instance basis, without depending on the
//! `alloc` crate.
use super::root::{alloc, cmp, ptr};

/// Layout, re-exported.
pub type Layout = alloc::Layout;

/// Allocator
pub trait Allocator {
    /// Allocates memory as per the size and alignment requirements.
    ///
    /// May return a null pointer if the allocation cannot be satisfied.
    ///
    /// #   Safety
    ///
    /// -   Assumes that the size of the Layout is non-zero.
    unsafe fn allocate(&self, layout: Layout) -> *mut u8;

    /// Deallocates memory.
    ///
    /// #   Safety
    ///
    /// -   Assumes that `ptr` was allocated by `self.alloc`.
    /// -   Assumes that `ptr` was not already deallocated.
    /// -   Assumes that `layout` matches the layout with which `ptr` was allocated.
    unsafe fn deallocate(&self, ptr: *mut u8, layout: Layout);

    /// Allocates zero-filled memory as per the size and alignment requirements.
    ///
    /// May return a null pointer if the allocation cannot be satisfied.
    ///
    /// #   Safety
    ///
    /// -   Assumes that the size of the Layout is non-zero.
    unsafe fn allocate_zeroed(&self, layout: Layout) -> *mut u8 {
        //  Safety:
        //  -   Forwarding.
        let result = unsafe { self.allocate(layout) };

        if !result.is_null() {
            //  Safety:
            //  -   `result` points to at least `layout.size()` writable bytes.
            unsafe { ptr::write_bytes(result, 0, layout.size()) };
        }

        result
    }

    /// Resizes a block of memory to `new_size` bytes, preserving its content up to the smaller of the two sizes.
    ///
    /// Returns a null pointer if the request cannot be satisfied, in which case the original block is left untouched
    /// and still owned by the caller.
    ///
    /// #   Safety
    ///
    /// -   Assumes that `ptr` was allocated by `self.alloc`, with `layout`, and not already deallocated.
    /// -   Assumes that `new_size` is non-zero.
    /// -   Assumes that `new_size`, rounded up to `layout.align()`, does not overflow `isize`.
    unsafe fn reallocate(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        //  Safety:
        //  -   `new_size` is valid, as per pre-conditions.
        let new_layout = unsafe { Layout::from_size_align_unchecked(new_size, layout.align()) };

        //  Safety:
        //  -   `new_size` is non-zero, as per pre-conditions.
        let result = unsafe { self.allocate(new_layout) };

        if result.is_null() {
            return result;
        }

        //  Safety:
        //  -   Both blocks are valid for at least the smaller size.
        //  -   Distinct allocations do not overlap.
        //  -   `ptr` was allocated by `self` with `layout`, as per pre-conditions.
        unsafe {
            ptr::copy_nonoverlapping(ptr, result, cmp::min(layout.size(), new_size));
            self.deallocate(ptr, layout);
        }

        result
    }
}

impl<'a, A: Allocator + ?Sized> Allocator for &'a A {
    unsafe fn allocate(&self, layout: Layout) -> *mut u8 {
        //  Safety:
        //  -   Forwarding.
        unsafe { (**self).allocate(layout) }
    }

    unsafe fn deallocate(&self, ptr: *mut u8, layout: Layout) {
        //  Safety:
        //  -   Forwarding.
        unsafe { (**self).deallocate(ptr, layout) }
    }

    unsafe fn allocate_zeroed(&self, layout: Layout) -> *mut u8 {
        //  Safety:
        //  -   Forwarding.
        unsafe { (**self).allocate_zeroed(layout) }
    }

    unsafe fn reallocate(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        //  Safety:
        //  -   Forwarding.
        unsafe { (**self).reallocate(ptr, layout, new_size) }
    }
}

/// DefaultAllocator
///
/// A default implementation of the `Allocator` trait, relying on the `alloc` crate global allocator.
#[cfg(feature = "with-std")]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DefaultAllocator;

#[cfg(feature = "with-std")]
impl Allocator for DefaultAllocator {
    unsafe fn allocate(&self, layout: Layout) -> *mut u8 {
        alloc::alloc(layout)
    }

    unsafe fn deallocate(&self, ptr: *mut u8, layout: Layout) {
        alloc::dealloc(ptr, layout)
    }

    unsafe fn allocate_zeroed(&self, layout: Layout) -> *mut u8 {
        alloc::alloc_zeroed(layout)
    }

    unsafe fn reallocate(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        alloc::realloc(ptr, layout, new_size)
    }
}

//  mod tests
