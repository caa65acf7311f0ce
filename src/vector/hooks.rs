//! Hooks of the Vector.

use super::allocator;

/// VectorHooks
///
/// The hooks of a Vector customize how its storage is obtained, resized and released, on a per instance basis.
///
/// In particular, a failing allocator lets a user observe how the Vector handles allocation failure: the Vector is
/// then left exactly as it was before the failed operation.
///
/// Also see DefaultVectorHooks for the default, when the `with-std` feature is used.
pub trait VectorHooks: allocator::Allocator {}

/// DefaultVectorHooks
///
/// Default hooks for the Vector:
/// -   deferring allocation, reallocation and deallocation to `DefaultAllocator`.
#[cfg(feature = "with-std")]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DefaultVectorHooks(allocator::DefaultAllocator);

#[cfg(feature = "with-std")]
impl allocator::Allocator for DefaultVectorHooks {
    unsafe fn allocate(&self, layout: allocator::Layout) -> *mut u8 {
        //  Safety:
        //  -   Forwarding.
        unsafe { self.0.allocate(layout) }
    }

    unsafe fn deallocate(&self, ptr: *mut u8, layout: allocator::Layout) {
        //  Safety:
        //  -   Forwarding.
        unsafe { self.0.deallocate(ptr, layout) }
    }

    unsafe fn allocate_zeroed(&self, layout: allocator::Layout) -> *mut u8 {
        //  Safety:
        //  -   Forwarding.
        unsafe { self.0.allocate_zeroed(layout) }
    }

    unsafe fn reallocate(&self, ptr: *mut u8, layout: allocator::Layout, new_size: usize) -> *mut u8 {
        //  Safety:
        //  -   Forwarding.
        unsafe { self.0.reallocate(ptr, layout, new_size) }
    }
}

#[cfg(feature = "with-std")]
impl VectorHooks for DefaultVectorHooks {}
