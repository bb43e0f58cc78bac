//! System allocator implementation
//!
//! Provides a backend that wraps the platform's default memory allocator.
//! It adds no strategy of its own: every request goes straight to
//! `std::alloc::System`.

use core::alloc::{GlobalAlloc, Layout};
use core::ptr::NonNull;
use std::alloc::System;

use super::traits::validate_layout;
use super::{AllocError, AllocResult, RawAllocator};

/// Wrapper for the system's default allocator
///
/// Zero-sized and stateless; constructing one is free.
///
/// # Thread Safety
/// The system allocator is inherently thread-safe as it uses the platform's
/// default memory management.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemAllocator;

impl SystemAllocator {
    /// Creates a new SystemAllocator
    #[inline]
    pub const fn new() -> Self {
        SystemAllocator
    }
}

unsafe impl RawAllocator for SystemAllocator {
    #[inline]
    unsafe fn allocate(&self, layout: Layout) -> AllocResult<NonNull<[u8]>> {
        validate_layout(layout)?;

        if layout.size() == 0 {
            // Zero-sized requests get a well-aligned dangling pointer;
            // the primitive is undefined for them.
            let ptr = NonNull::<u8>::dangling();
            return Ok(NonNull::slice_from_raw_parts(ptr, 0));
        }

        // SAFETY: layout has non-zero size (checked above).
        let ptr = unsafe { System.alloc(layout) };

        match NonNull::new(ptr) {
            Some(non_null) => Ok(NonNull::slice_from_raw_parts(non_null, layout.size())),
            None => Err(AllocError::allocation_failed_with_layout(layout)),
        }
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() == 0 {
            return; // Nothing to deallocate for zero-sized allocations
        }

        // SAFETY: ptr came from System.alloc with this layout (caller contract).
        unsafe { System.dealloc(ptr.as_ptr(), layout) };
    }
}
