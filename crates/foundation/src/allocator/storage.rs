//! Uninitialized storage handle
//!
//! A [`RawStorage<T>`] names a contiguous region with room for `capacity`
//! values of `T`. Holding one says nothing about whether any slot contains a
//! live object: bringing objects into and out of existence is done with the
//! explicit construct / destroy operations on [`Allocator`].
//!
//! The handle is owned by whoever obtained it and is consumed by
//! `deallocate`, so releasing the same storage twice does not compile. It has
//! no destructor: forgetting to deallocate leaks the region, it never frees
//! it behind the owner's back.
//!
//! [`Allocator`]: super::Allocator

use core::fmt;
use core::mem::MaybeUninit;
use core::ptr::NonNull;

/// Handle to raw, uninitialized storage for `capacity` values of `T`
pub struct RawStorage<T> {
    ptr: Option<NonNull<T>>,
    capacity: usize,
}

// SAFETY: RawStorage is a plain owning handle to memory holding (future)
// values of T; sending or sharing it is as safe as sending or sharing T.
unsafe impl<T: Send> Send for RawStorage<T> {}
unsafe impl<T: Sync> Sync for RawStorage<T> {}

impl<T> RawStorage<T> {
    /// The null handle: no storage, capacity zero
    #[inline]
    pub const fn null() -> Self {
        Self {
            ptr: None,
            capacity: 0,
        }
    }

    /// Rebuild a handle from parts previously taken with [`into_raw_parts`]
    ///
    /// # Safety
    /// `ptr` and `capacity` must describe storage obtained from
    /// [`Allocator::allocate_n`] (or `allocate` with capacity 1) that has not
    /// been released and is not owned by another handle.
    ///
    /// [`into_raw_parts`]: Self::into_raw_parts
    /// [`Allocator::allocate_n`]: super::Allocator::allocate_n
    #[inline]
    pub const unsafe fn from_raw_parts(ptr: Option<NonNull<T>>, capacity: usize) -> Self {
        Self { ptr, capacity }
    }

    #[inline]
    pub(crate) const fn from_allocation(ptr: NonNull<T>, capacity: usize) -> Self {
        Self {
            ptr: Some(ptr),
            capacity,
        }
    }

    /// Give up the handle, returning its pointer and capacity
    #[inline]
    pub fn into_raw_parts(self) -> (Option<NonNull<T>>, usize) {
        (self.ptr, self.capacity)
    }

    /// Whether this is the null handle
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.ptr.is_none()
    }

    /// Number of `T` slots
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Size of the region in bytes
    #[inline]
    pub const fn byte_len(&self) -> usize {
        self.capacity * size_of::<T>()
    }

    /// Pointer to the first slot, `None` for the null handle
    #[inline]
    pub const fn as_ptr(&self) -> Option<NonNull<T>> {
        self.ptr
    }

    /// Raw pointer to the first slot, null for the null handle
    #[inline]
    pub fn as_mut_ptr(&self) -> *mut T {
        self.ptr.map_or(core::ptr::null_mut(), NonNull::as_ptr)
    }

    /// Pointer to slot `index`, `None` when out of range
    #[inline]
    pub fn slot(&self, index: usize) -> Option<NonNull<T>> {
        if index >= self.capacity {
            return None;
        }
        // SAFETY: index < capacity, so the offset stays inside the
        // allocation (or is a zero-byte step for zero-sized T).
        self.ptr.map(|ptr| unsafe { ptr.add(index) })
    }

    /// One-past-the-end pointer, the `last` bound of a whole-region range
    #[inline]
    pub fn end(&self) -> Option<NonNull<T>> {
        // SAFETY: offsetting to one past the last slot is allowed.
        self.ptr.map(|ptr| unsafe { ptr.add(self.capacity) })
    }

    /// View the region as uninitialized slots
    ///
    /// Writing through the view never drops what a slot held before, so a
    /// slot that was live is leaked rather than destroyed.
    #[inline]
    pub fn as_uninit_slice_mut(&mut self) -> &mut [MaybeUninit<T>] {
        match self.ptr {
            // SAFETY: the region holds `capacity` slots exclusively owned
            // by this handle, and MaybeUninit<T> has no validity invariant.
            Some(ptr) => unsafe {
                core::slice::from_raw_parts_mut(ptr.as_ptr().cast::<MaybeUninit<T>>(), self.capacity)
            },
            None => &mut [],
        }
    }
}

impl<T> Default for RawStorage<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> fmt::Debug for RawStorage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawStorage")
            .field("type", &core::any::type_name::<T>())
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_handle() {
        let storage = RawStorage::<u64>::null();
        assert!(storage.is_null());
        assert_eq!(storage.capacity(), 0);
        assert_eq!(storage.byte_len(), 0);
        assert!(storage.as_ptr().is_none());
        assert!(storage.as_mut_ptr().is_null());
        assert!(storage.slot(0).is_none());
        assert!(storage.end().is_none());
    }

    #[test]
    fn slots_stay_in_range() {
        let mut backing = [0_u32; 4];
        let base = NonNull::new(backing.as_mut_ptr()).unwrap();
        let storage = RawStorage::from_allocation(base, 4);

        assert_eq!(storage.byte_len(), 16);
        assert_eq!(storage.slot(0), Some(base));
        assert_eq!(
            storage.slot(3).unwrap().as_ptr() as usize - base.as_ptr() as usize,
            12
        );
        assert!(storage.slot(4).is_none());
        assert_eq!(
            storage.end().unwrap().as_ptr() as usize - base.as_ptr() as usize,
            16
        );
    }

    #[test]
    fn raw_parts_round_trip() {
        let mut backing = [0_u8; 2];
        let base = NonNull::new(backing.as_mut_ptr()).unwrap();
        let storage = RawStorage::from_allocation(base, 2);

        let (ptr, capacity) = storage.into_raw_parts();
        let rebuilt = unsafe { RawStorage::from_raw_parts(ptr, capacity) };
        assert_eq!(rebuilt.as_ptr(), Some(base));
        assert_eq!(rebuilt.capacity(), 2);
    }

    #[test]
    fn uninit_view_writes_through() {
        let mut backing = [0_u16; 3];
        let base = NonNull::new(backing.as_mut_ptr()).unwrap();
        let mut storage = RawStorage::from_allocation(base, 3);

        for (i, slot) in storage.as_uninit_slice_mut().iter_mut().enumerate() {
            slot.write(i as u16 * 10);
        }
        assert_eq!(backing, [0, 10, 20]);
    }

    #[test]
    fn null_uninit_view_is_empty() {
        let mut storage = RawStorage::<String>::null();
        assert!(storage.as_uninit_slice_mut().is_empty());
    }

    #[test]
    fn debug_names_the_element_type() {
        let storage = RawStorage::<u32>::null();
        assert!(format!("{storage:?}").contains("u32"));
    }
}
