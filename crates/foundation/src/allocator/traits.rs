//! Byte-level allocator trait
//!
//! [`RawAllocator`] is the seam between the typed [`Allocator`] and the
//! primitive that actually hands out bytes. It knows nothing about element
//! types or object lifetimes: it only acquires and releases
//! [`Layout`]-described regions.
//!
//! # Safety
//!
//! Implementors must uphold:
//! - returned pointers are valid for reads and writes of `layout.size()`
//!   bytes and aligned to `layout.align()`;
//! - a region is exclusive to its caller until it is deallocated;
//! - zero-size layouts never reach the underlying primitive.
//!
//! [`Allocator`]: super::Allocator

use core::alloc::Layout;
use core::ptr::NonNull;

use super::{AllocError, AllocResult};

/// Validation of layout parameters
///
/// Catches layouts that would overflow once padded to their alignment.
#[inline]
pub(crate) fn validate_layout(layout: Layout) -> AllocResult<()> {
    // Zero-sized allocations are valid but never reach the primitive
    if layout.size() == 0 {
        return Ok(());
    }

    // Check for potential overflow when adding padding
    if layout.size() > isize::MAX as usize - (layout.align() - 1) {
        return Err(AllocError::size_overflow("pad layout to alignment"));
    }

    Ok(())
}

/// Raw storage acquisition and release
///
/// All methods are unsafe as they deal with raw pointers and have specific
/// safety requirements.
///
/// # Safety Requirements
///
/// Implementors must ensure that:
/// - Returned pointers are valid until deallocated
/// - Memory is properly aligned according to the layout
/// - Memory content is left uninitialized
pub unsafe trait RawAllocator {
    /// Allocates memory with the given layout
    ///
    /// # Safety
    /// - Memory content is uninitialized and must be initialized before use
    ///
    /// # Errors
    /// - Returns `AllocationFailed` if the primitive cannot satisfy the request
    unsafe fn allocate(&self, layout: Layout) -> AllocResult<NonNull<[u8]>>;

    /// Deallocates memory at the given pointer with the specified layout
    ///
    /// # Safety
    /// - `ptr` must have been allocated by this allocator
    /// - `layout` must match the original allocation layout exactly
    /// - After this call, `ptr` becomes invalid and must not be used
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Returns maximum supported allocation size for this allocator
    fn max_allocation_size() -> usize
    where
        Self: Sized,
    {
        isize::MAX as usize
    }
}

/// Blanket implementation of RawAllocator for references
///
/// # Safety
///
/// Forwards every call to the underlying `T: RawAllocator`, so its contract
/// carries over unchanged.
unsafe impl<T: RawAllocator + ?Sized> RawAllocator for &T {
    unsafe fn allocate(&self, layout: Layout) -> AllocResult<NonNull<[u8]>> {
        // SAFETY: Same safety contract as T::allocate.
        unsafe { (**self).allocate(layout) }
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: Same safety contract as T::deallocate.
        unsafe { (**self).deallocate(ptr, layout) }
    }
}
