//! Typed, stateless allocator
//!
//! [`Allocator<T, R>`] separates *where the bytes live* from *what object
//! lives there*. It exposes four independent transitions and never fuses
//! them:
//!
//! ```text
//!            allocate / allocate_n            construct*
//!   (nothing) ───────────────────────▶ raw ─────────────▶ live
//!            ◀─────────────────────── storage ◀───────────
//!            deallocate / deallocate_n         destroy*
//! ```
//!
//! A growing container therefore allocates new storage, move-constructs into
//! it, destroys the old elements and releases the old storage, without ever
//! default-initializing slots it is about to overwrite.
//!
//! The allocator has no receiver: every operation is an associated function
//! of the type, e.g. `Allocator::<String>::allocate_n(8)`.
//!
//! # Examples
//!
//! ```rust
//! use tinystl_foundation::allocator::Allocator;
//!
//! # fn main() -> tinystl_foundation::AllocResult<()> {
//! type Alloc = Allocator<String>;
//!
//! let storage = Alloc::allocate_n(2)?;
//! let (a, b) = (storage.slot(0).unwrap(), storage.slot(1).unwrap());
//!
//! unsafe {
//!     Alloc::construct_move(a, String::from("left"));
//!     Alloc::construct_from(b, "right");
//!     assert_eq!(a.as_ref(), "left");
//!     assert_eq!(b.as_ref(), "right");
//!
//!     Alloc::destroy_n(a, 2);
//!     Alloc::deallocate_n(storage, 2);
//! }
//! # Ok(())
//! # }
//! ```

use core::alloc::Layout;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::guard::ConstructGuard;
use super::{AllocError, AllocResult, RawAllocator, RawStorage, SystemAllocator};
use crate::core::config;
use crate::core::traits::{ConstructFrom, Forward};

#[cfg(feature = "logging")]
use tracing::trace;

/// Stateless typed allocator over the raw backend `R`
///
/// Never constructed; it only names a set of operations for element type
/// `T`. `R` is default-constructed on each call, so it must be a stateless
/// (typically zero-sized) backend.
pub struct Allocator<T, R = SystemAllocator> {
    _marker: PhantomData<fn() -> (T, R)>,
}

// ============================================================================
// Storage acquisition and release
// ============================================================================

impl<T, R: RawAllocator + Default> Allocator<T, R> {
    /// Acquire storage for exactly one `T`
    ///
    /// The slot is uninitialized. Backend failure propagates unchanged.
    pub fn allocate() -> AllocResult<RawStorage<T>> {
        let ptr = Self::acquire(Layout::new::<T>(), 1)?;
        Ok(RawStorage::from_allocation(ptr, 1))
    }

    /// Acquire storage for `n` contiguous `T` slots
    ///
    /// `n == 0` returns the null handle without calling the backend. For
    /// `n > 0` the region is exactly `n * size_of::<T>()` bytes, all slots
    /// uninitialized.
    pub fn allocate_n(n: usize) -> AllocResult<RawStorage<T>> {
        if n == 0 {
            return Ok(RawStorage::null());
        }

        let layout = Self::array_layout(n)?;
        let ptr = Self::acquire(layout, n)?;
        Ok(RawStorage::from_allocation(ptr, n))
    }

    /// Release storage obtained from [`allocate`](Self::allocate) or
    /// [`allocate_n`](Self::allocate_n)
    ///
    /// The null handle is a no-op. Objects still live in the storage are not
    /// destroyed; call a `destroy*` operation first.
    ///
    /// # Safety
    /// `storage` must have been allocated through the same backend `R`.
    pub unsafe fn deallocate(storage: RawStorage<T>) {
        let capacity = storage.capacity();
        // SAFETY: forwarded caller contract; capacity is the recorded count.
        unsafe { Self::deallocate_n(storage, capacity) }
    }

    /// Release storage, stating its element count explicitly
    ///
    /// `n` must be the count used at allocation time. The backend layout is
    /// rebuilt from `n`, so a size-tracking backend depends on it being
    /// right. The null handle is a no-op whatever `n` is.
    ///
    /// # Safety
    /// `storage` must have been allocated through the same backend `R`
    /// with a count of `n`.
    pub unsafe fn deallocate_n(storage: RawStorage<T>, n: usize) {
        let (ptr, capacity) = storage.into_raw_parts();
        let Some(ptr) = ptr else {
            return;
        };
        debug_assert_eq!(
            capacity, n,
            "deallocate_n count must match the allocation count"
        );

        // A count that allocated successfully always yields a layout.
        let Ok(layout) = Layout::array::<T>(n) else {
            return;
        };

        #[cfg(feature = "logging")]
        if config::get().trace_allocations {
            trace!(
                type_name = core::any::type_name::<T>(),
                count = n,
                bytes = layout.size(),
                "deallocate"
            );
        }

        // SAFETY: ptr came from R::allocate with this layout (caller contract).
        unsafe { R::default().deallocate(ptr.cast(), layout) };
    }

    fn array_layout(n: usize) -> AllocResult<Layout> {
        Layout::array::<T>(n).map_err(|_| {
            AllocError::size_overflow(&format!(
                "allocate {n} x {} bytes",
                core::mem::size_of::<T>()
            ))
        })
    }

    fn acquire(layout: Layout, count: usize) -> AllocResult<NonNull<T>> {
        let config = config::get();
        let limit = config.max_allocation_size.min(R::max_allocation_size());
        if layout.size() > limit {
            return Err(AllocError::allocation_too_large(layout.size(), limit));
        }

        // SAFETY: layout is a valid Layout for `count` values of T; the
        // returned region is uninitialized and exclusively ours.
        let block = unsafe { R::default().allocate(layout)? };

        #[cfg(feature = "logging")]
        if config.trace_allocations {
            trace!(
                type_name = core::any::type_name::<T>(),
                count,
                bytes = layout.size(),
                "allocate"
            );
        }
        #[cfg(not(feature = "logging"))]
        let _ = count;

        Ok(block.cast::<T>())
    }
}

// ============================================================================
// Object construction and destruction
// ============================================================================

/// Construction and destruction never touch the backend, so they are
/// available for any `R`.
///
/// A `construct*` call on a slot that already holds a live object
/// overwrites it without dropping it. Every `destroy*` call leaves its slots
/// uninitialized, ready to be constructed again or released.
impl<T, R> Allocator<T, R> {
    /// Default-construct a `T` in place
    ///
    /// # Safety
    /// `ptr` must be a valid, aligned slot for `T` holding no live object.
    #[inline]
    pub unsafe fn construct_default(ptr: NonNull<T>)
    where
        T: Default,
    {
        // SAFETY: caller guarantees an unconstructed, valid slot.
        unsafe { ptr.write(T::default()) }
    }

    /// Copy-construct a `T` in place from `value`
    ///
    /// # Safety
    /// `ptr` must be a valid, aligned slot for `T` holding no live object.
    #[inline]
    pub unsafe fn construct_copy(ptr: NonNull<T>, value: &T)
    where
        T: Clone,
    {
        // SAFETY: caller guarantees an unconstructed, valid slot.
        unsafe { ptr.write(value.clone()) }
    }

    /// Move `value` into the slot
    ///
    /// # Safety
    /// `ptr` must be a valid, aligned slot for `T` holding no live object.
    #[inline]
    pub unsafe fn construct_move(ptr: NonNull<T>, value: T) {
        // SAFETY: caller guarantees an unconstructed, valid slot.
        unsafe { ptr.write(value) }
    }

    /// Construct from an argument, keeping its value category
    ///
    /// An owned `T` is moved in; a `&T` is cloned in.
    ///
    /// # Safety
    /// `ptr` must be a valid, aligned slot for `T` holding no live object.
    #[inline]
    pub unsafe fn construct<A>(ptr: NonNull<T>, arg: A)
    where
        A: Forward<T>,
    {
        // SAFETY: caller guarantees an unconstructed, valid slot.
        unsafe { ptr.write(arg.forward()) }
    }

    /// Construct from an arbitrary argument pack
    ///
    /// `args` is handed to `T`'s matching [`ConstructFrom`] impl unchanged:
    /// a tuple keeps its arity, and each element stays owned or borrowed as
    /// the caller passed it.
    ///
    /// # Safety
    /// `ptr` must be a valid, aligned slot for `T` holding no live object.
    #[inline]
    pub unsafe fn construct_from<Args>(ptr: NonNull<T>, args: Args)
    where
        T: ConstructFrom<Args>,
    {
        // SAFETY: caller guarantees an unconstructed, valid slot.
        unsafe { ptr.write(T::construct_from(args)) }
    }

    /// Construct the value produced by `init` in place
    ///
    /// # Safety
    /// `ptr` must be a valid, aligned slot for `T` holding no live object.
    #[inline]
    pub unsafe fn construct_with<F>(ptr: NonNull<T>, init: F)
    where
        F: FnOnce() -> T,
    {
        // SAFETY: caller guarantees an unconstructed, valid slot.
        unsafe { ptr.write(init()) }
    }

    /// Construct in place with a fallible constructor
    ///
    /// On `Err` the error is returned unchanged and the slot stays
    /// unconstructed: do not `destroy` it.
    ///
    /// # Safety
    /// `ptr` must be a valid, aligned slot for `T` holding no live object.
    #[inline]
    pub unsafe fn try_construct_with<E, F>(ptr: NonNull<T>, init: F) -> Result<(), E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let value = init()?;
        // SAFETY: caller guarantees an unconstructed, valid slot.
        unsafe { ptr.write(value) };
        Ok(())
    }

    /// Construct `n` consecutive slots starting at `first`, in forward order
    ///
    /// `init(i)` builds the value for slot `i`. If it fails for slot `k`
    /// (error or panic), slots `[0, k)` are destroyed in forward order before
    /// the failure propagates, leaving no live object in the range.
    ///
    /// # Safety
    /// `first` must point at `n` consecutive valid slots in one allocation,
    /// none of them holding a live object.
    pub unsafe fn try_construct_range<E, F>(first: NonNull<T>, n: usize, mut init: F) -> Result<(), E>
    where
        F: FnMut(usize) -> Result<T, E>,
    {
        let mut guard = ConstructGuard::new(first);
        for i in 0..n {
            let value = init(i)?;
            // SAFETY: slot i is inside the caller's range and unconstructed.
            unsafe { guard.next_slot().write(value) };
            guard.commit();
        }
        guard.disarm();
        Ok(())
    }

    /// Copy-construct `n` consecutive slots from `value`
    ///
    /// A panicking `clone` rolls back the slots already constructed.
    ///
    /// # Safety
    /// `first` must point at `n` consecutive valid slots in one allocation,
    /// none of them holding a live object.
    pub unsafe fn construct_range_copy(first: NonNull<T>, n: usize, value: &T)
    where
        T: Clone,
    {
        let result: Result<(), core::convert::Infallible> =
            // SAFETY: forwarded caller contract.
            unsafe { Self::try_construct_range(first, n, |_| Ok(value.clone())) };
        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Run `T`'s destructor in place without releasing storage
    ///
    /// # Safety
    /// `ptr` must hold a live `T`.
    #[inline]
    pub unsafe fn destroy(ptr: NonNull<T>) {
        // SAFETY: caller guarantees a live T at ptr.
        unsafe { ptr.drop_in_place() }
    }

    /// Destroy every object in the half-open range `[first, last)`, in
    /// forward order, without releasing storage
    ///
    /// For zero-sized `T` a pointer range carries no length (`first` always
    /// equals `last`); use [`destroy_n`](Self::destroy_n) instead.
    ///
    /// # Safety
    /// `first` and `last` must bound a range of live objects in one
    /// allocation, with `first <= last`.
    pub unsafe fn destroy_range(first: NonNull<T>, last: NonNull<T>) {
        let mut cursor = first;
        while cursor != last {
            // SAFETY: cursor lies in [first, last), which holds live objects.
            unsafe {
                cursor.drop_in_place();
                cursor = cursor.add(1);
            }
        }
    }

    /// Destroy `n` consecutive objects starting at `first`, in forward order
    ///
    /// # Safety
    /// `first` must point at `n` consecutive live objects in one allocation.
    pub unsafe fn destroy_n(first: NonNull<T>, n: usize) {
        for i in 0..n {
            // SAFETY: slots [0, n) hold live objects (caller contract).
            unsafe { first.add(i).drop_in_place() };
        }
    }
}
