//! Value-category and exchange utilities
//!
//! Moving out of a place that stays alive, forwarding an argument with the
//! category the caller chose, and exchanging values or whole ranges.

use core::ptr;

use crate::core::traits::Forward;

/// Move the value out of `place`, leaving `T::default()` behind
///
/// `place` stays a valid `T` afterwards, so it can be reused or dropped as
/// usual.
///
/// ```rust
/// use tinystl_foundation::utility::move_out;
///
/// let mut name = String::from("kept");
/// let taken = move_out(&mut name);
/// assert_eq!(taken, "kept");
/// assert!(name.is_empty());
/// ```
#[inline]
pub fn move_out<T: Default>(place: &mut T) -> T {
    core::mem::take(place)
}

/// Forward `arg` as a `T`
///
/// An owned `T` is passed through untouched; a `&T` arrives as a clone.
#[inline]
pub fn forward<T, A: Forward<T>>(arg: A) -> T {
    arg.forward()
}

/// Exchange the values behind `a` and `b`
///
/// Moves `a` into a temporary, `b` into `a`, then the temporary into `b`.
/// No `Clone`, `Default` or other bound is needed.
#[inline]
pub fn swap<T>(a: &mut T, b: &mut T) {
    // SAFETY: `a` and `b` are distinct live `&mut T`, so they do not overlap.
    // Between the read and the final write `a`'s bits exist twice, but
    // nothing in between can panic, so no value is dropped twice.
    unsafe {
        let tmp = ptr::read(a);
        ptr::copy_nonoverlapping(b, a, 1);
        ptr::write(b, tmp);
    }
}

/// Swap element-wise across two ranges, in forward order
///
/// Stops once `first` is exhausted (or `second`, if it is shorter) and
/// returns `second` positioned one past the last element swapped.
///
/// ```rust
/// use tinystl_foundation::utility::swap_range;
///
/// let mut a = [1, 2];
/// let mut b = [7, 8, 9];
/// let mut rest = swap_range(a.iter_mut(), b.iter_mut());
///
/// assert_eq!(rest.next(), Some(&mut 9));
/// assert_eq!(a, [7, 8]);
/// assert_eq!(b, [1, 2, 9]);
/// ```
pub fn swap_range<'a, T, I1, I2>(first: I1, second: I2) -> I2::IntoIter
where
    T: 'a,
    I1: IntoIterator<Item = &'a mut T>,
    I2: IntoIterator<Item = &'a mut T>,
{
    let mut second = second.into_iter();
    for a in first {
        let Some(b) = second.next() else {
            break;
        };
        swap(a, b);
    }
    second
}

/// Swap two same-length arrays element by element
#[inline]
pub fn swap_arrays<T, const N: usize>(a: &mut [T; N], b: &mut [T; N]) {
    swap_range(a.iter_mut(), b.iter_mut());
}
