//! Rollback guard for range construction
//!
//! While a range of slots is being constructed, the guard counts how many
//! leading slots are live. If construction stops early (an error return or a
//! panic), dropping the guard destroys exactly those slots, in forward order,
//! so the caller gets back storage with no live objects in it.

use core::ptr::NonNull;

#[cfg(feature = "logging")]
use tracing::debug;

pub(crate) struct ConstructGuard<T> {
    first: NonNull<T>,
    initialized: usize,
}

impl<T> ConstructGuard<T> {
    #[inline]
    pub(crate) const fn new(first: NonNull<T>) -> Self {
        Self {
            first,
            initialized: 0,
        }
    }

    /// Pointer to the next slot to construct
    #[inline]
    pub(crate) fn next_slot(&self) -> NonNull<T> {
        // SAFETY: the caller only asks for slots inside the range it is
        // constructing, and `initialized` never exceeds that range.
        unsafe { self.first.add(self.initialized) }
    }

    /// Record that the slot returned by [`next_slot`](Self::next_slot) is live
    #[inline]
    pub(crate) fn commit(&mut self) {
        self.initialized += 1;
    }

    /// Keep every constructed slot alive
    #[inline]
    pub(crate) fn disarm(mut self) {
        self.initialized = 0;
    }
}

impl<T> Drop for ConstructGuard<T> {
    fn drop(&mut self) {
        if self.initialized == 0 {
            return;
        }

        #[cfg(feature = "logging")]
        debug!(
            type_name = core::any::type_name::<T>(),
            constructed = self.initialized,
            "rolling back partial range construction"
        );

        for i in 0..self.initialized {
            // SAFETY: slots [0, initialized) were constructed and are live.
            unsafe { self.first.add(i).drop_in_place() };
        }
    }
}
