//! Compile-time type predicates
//!
//! [`IsPair`] answers, for any type, whether it is an instantiation of
//! [`Pair`]. Containers use it to pick pair-specific code paths (for
//! example, extracting a key from a map entry) without any runtime check.
//!
//! The trait is sealed: the only `true` answer is the one given by `Pair`
//! itself. Other types say "not a pair" through the [`NotAPair`] marker,
//! either directly or with [`not_a_pair!`](crate::not_a_pair). A type that
//! has neither answer simply does not satisfy an `IsPair` bound. Std types
//! (collections, cells, locks, smart pointers, tuples up to twelve
//! elements) are answered here, since only this crate may implement
//! `NotAPair` for them.
//!
//! ```rust
//! use tinystl_foundation::type_traits::is_pair;
//! use tinystl_foundation::Pair;
//!
//! const ENTRY_IS_PAIR: bool = is_pair::<Pair<u32, String>>();
//!
//! assert!(ENTRY_IS_PAIR);
//! assert!(!is_pair::<(u32, String)>());
//! assert!(!is_pair::<i32>());
//! ```
//!
//! Claiming to be a pair does not compile:
//!
//! ```rust,compile_fail
//! use tinystl_foundation::type_traits::{IsPair, TrueType};
//!
//! struct Impostor(u8, u8);
//!
//! impl IsPair for Impostor {
//!     type Verdict = TrueType;
//! }
//! ```

use std::any::TypeId;
use std::alloc::Layout;
use std::borrow::Cow;
use std::cell::{Cell, OnceCell, RefCell, UnsafeCell};
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::ffi::{CStr, CString, OsStr, OsString};
use std::marker::PhantomData;
use std::mem::{ManuallyDrop, MaybeUninit};
use std::num::{
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize, Wrapping,
};
use std::ops::{Range, RangeInclusive};
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::ptr::NonNull;
use std::rc::{self, Rc};
use std::sync::atomic::{
    AtomicBool, AtomicI8, AtomicI16, AtomicI32, AtomicI64, AtomicIsize, AtomicU8, AtomicU16,
    AtomicU32, AtomicU64, AtomicUsize,
};
use std::sync::{self, Arc, Mutex, OnceLock, RwLock};
use std::time::{Duration, Instant, SystemTime};

use crate::pair::Pair;

// ============================================================================
// Boolean constants
// ============================================================================

/// A `bool` lifted to the type level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoolConstant<const B: bool>;

impl<const B: bool> BoolConstant<B> {
    pub const VALUE: bool = B;

    /// The constant as a runtime value
    #[inline]
    pub const fn value(self) -> bool {
        B
    }
}

impl<const B: bool> From<BoolConstant<B>> for bool {
    #[inline]
    fn from(_: BoolConstant<B>) -> Self {
        B
    }
}

pub type TrueType = BoolConstant<true>;
pub type FalseType = BoolConstant<false>;

mod sealed {
    pub trait Verdict {}
    pub trait IsPair {}

    impl<const B: bool> Verdict for super::BoolConstant<B> {}
    impl<T: super::NotAPair + ?Sized> IsPair for T {}
    impl<A, B> IsPair for super::Pair<A, B> {}
}

/// Type-level answer of a predicate: [`TrueType`] or [`FalseType`]
pub trait Verdict: sealed::Verdict {
    const VALUE: bool;
}

impl<const B: bool> Verdict for BoolConstant<B> {
    const VALUE: bool = B;
}

// ============================================================================
// Pair predicate
// ============================================================================

/// Whether `Self` is some `Pair<A, B>`
///
/// Sealed. `Pair<A, B>` answers [`TrueType`]; every [`NotAPair`] type
/// answers [`FalseType`].
pub trait IsPair: sealed::IsPair {
    type Verdict: Verdict;
}

impl<T: NotAPair + ?Sized> IsPair for T {
    type Verdict = FalseType;
}

impl<A, B> IsPair for Pair<A, B> {
    type Verdict = TrueType;
}

/// Marker for types that are known not to be pairs
///
/// Implemented here for std types; use [`not_a_pair!`](crate::not_a_pair)
/// or a direct impl for your own.
pub trait NotAPair {}

/// `true` exactly when `T` is some `Pair<A, B>`
///
/// Usable in `const` items and `const { }` blocks.
#[inline]
pub const fn is_pair<T: IsPair + ?Sized>() -> bool {
    <T::Verdict as Verdict>::VALUE
}

/// Field access for pair element types
///
/// Only `Pair<A, B>` can implement it, since the bound requires a
/// [`TrueType`] answer from [`IsPair`]. Containers bound on it to take keys
/// out of pair elements generically.
pub trait PairLike: IsPair<Verdict = TrueType> {
    type First;
    type Second;

    fn first(&self) -> &Self::First;
    fn second(&self) -> &Self::Second;
    fn into_parts(self) -> (Self::First, Self::Second);
}

impl<A, B> PairLike for Pair<A, B> {
    type First = A;
    type Second = B;

    #[inline]
    fn first(&self) -> &A {
        &self.first
    }

    #[inline]
    fn second(&self) -> &B {
        &self.second
    }

    #[inline]
    fn into_parts(self) -> (A, B) {
        self.into_tuple()
    }
}

// ============================================================================
// Built-in answers
// ============================================================================

crate::not_a_pair!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String,
);

crate::not_a_pair!(
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
);

crate::not_a_pair!(
    AtomicBool, AtomicI8, AtomicI16, AtomicI32, AtomicI64, AtomicIsize, AtomicU8, AtomicU16,
    AtomicU32, AtomicU64, AtomicUsize,
);

crate::not_a_pair!(
    Ordering, Layout, TypeId, Duration, Instant, SystemTime, OsStr, OsString, Path, PathBuf, CStr,
    CString,
);

// References, pointers and owning handles
impl<T: ?Sized> NotAPair for &T {}
impl<T: ?Sized> NotAPair for &mut T {}
impl<T: ?Sized> NotAPair for *const T {}
impl<T: ?Sized> NotAPair for *mut T {}
impl<T: ?Sized> NotAPair for NonNull<T> {}
impl<T: ?Sized> NotAPair for Box<T> {}
impl<T: ?Sized> NotAPair for Rc<T> {}
impl<T: ?Sized> NotAPair for rc::Weak<T> {}
impl<T: ?Sized> NotAPair for Arc<T> {}
impl<T: ?Sized> NotAPair for sync::Weak<T> {}
impl<B: ?Sized + ToOwned> NotAPair for Cow<'_, B> {}
impl<P> NotAPair for Pin<P> {}
impl<T: ?Sized> NotAPair for PhantomData<T> {}

// Collections
impl<T> NotAPair for Vec<T> {}
impl<T> NotAPair for VecDeque<T> {}
impl<T> NotAPair for LinkedList<T> {}
impl<T> NotAPair for BinaryHeap<T> {}
impl<T> NotAPair for BTreeSet<T> {}
impl<K, V> NotAPair for BTreeMap<K, V> {}
impl<T, S> NotAPair for HashSet<T, S> {}
impl<K, V, S> NotAPair for HashMap<K, V, S> {}
impl<T> NotAPair for [T] {}
impl<T, const N: usize> NotAPair for [T; N] {}

// Cells and synchronization
impl<T: ?Sized> NotAPair for Cell<T> {}
impl<T: ?Sized> NotAPair for RefCell<T> {}
impl<T: ?Sized> NotAPair for UnsafeCell<T> {}
impl<T> NotAPair for OnceCell<T> {}
impl<T: ?Sized> NotAPair for Mutex<T> {}
impl<T: ?Sized> NotAPair for RwLock<T> {}
impl<T> NotAPair for OnceLock<T> {}

// Wrappers
impl<T> NotAPair for Option<T> {}
impl<T, E> NotAPair for Result<T, E> {}
impl<T: ?Sized> NotAPair for ManuallyDrop<T> {}
impl<T> NotAPair for MaybeUninit<T> {}
impl<T> NotAPair for Wrapping<T> {}
impl<T> NotAPair for Reverse<T> {}
impl<T> NotAPair for Range<T> {}
impl<T> NotAPair for RangeInclusive<T> {}
impl<const B: bool> NotAPair for BoolConstant<B> {}

/// Tuples of every arity up to twelve, so `(A, B)` is never a pair
macro_rules! tuples_not_a_pair {
    () => {};
    ($head:ident $($tail:ident)*) => {
        impl<$head, $($tail),*> NotAPair for ($head, $($tail,)*) {}
        tuples_not_a_pair!($($tail)*);
    };
}

tuples_not_a_pair!(T1 T2 T3 T4 T5 T6 T7 T8 T9 T10 T11 T12);
