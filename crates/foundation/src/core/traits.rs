//! Core traits for value construction
//!
//! Two predicates drive every generic constructor in this crate:
//!
//! - **convertibility** is `From` / `Into`. A conversion with a `From` impl is
//!   safe to perform without naming it at the call site (std reserves `From`
//!   for lossless conversions).
//! - **constructibility** is [`ConstructFrom`]. Every `From` conversion is
//!   also a construction; a type may add construction paths that are *only*
//!   reachable through an explicitly named constructor by implementing
//!   [`ConstructFrom`] directly.
//!
//! [`Forward`] carries whether an argument was handed over owned or borrowed
//! through a generic call chain, so the final constructor moves owned values
//! and copies borrowed ones.

/// Build `Self` from a `U`, possibly without an implicit conversion path
///
/// Blanket-implemented for every `T: From<U>`. Implement it directly for
/// conversions that must stay explicit:
///
/// ```rust
/// use tinystl_foundation::core::traits::ConstructFrom;
///
/// #[derive(Debug, PartialEq)]
/// struct Capacity(usize);
///
/// // Only reachable through an explicitly named constructor.
/// impl ConstructFrom<u32> for Capacity {
///     fn construct_from(value: u32) -> Self {
///         Capacity(value as usize)
///     }
/// }
///
/// assert_eq!(Capacity::construct_from(8u32), Capacity(8));
/// ```
pub trait ConstructFrom<U>: Sized {
    /// Construct `Self` from `value`
    fn construct_from(value: U) -> Self;
}

impl<T, U> ConstructFrom<U> for T
where
    T: From<U>,
{
    #[inline]
    fn construct_from(value: U) -> Self {
        T::from(value)
    }
}

/// An argument that can produce a `T` while keeping its value category
///
/// - an owned `T` is moved through untouched;
/// - a borrowed `&T` is cloned, the caller keeps the original.
///
/// Forwarding a borrow of a type that cannot be cloned is rejected at
/// compile time.
pub trait Forward<T> {
    /// Hand the argument over as a `T`
    fn forward(self) -> T;
}

impl<T> Forward<T> for T {
    #[inline(always)]
    fn forward(self) -> T {
        self
    }
}

impl<T: Clone> Forward<T> for &T {
    #[inline]
    fn forward(self) -> T {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Label(String);

    impl ConstructFrom<usize> for Label {
        fn construct_from(value: usize) -> Self {
            Label(format!("#{value}"))
        }
    }

    fn build<T, U>(value: U) -> T
    where
        T: ConstructFrom<U>,
    {
        T::construct_from(value)
    }

    fn receive<T>(arg: impl Forward<T>) -> T {
        arg.forward()
    }

    #[test]
    fn construct_from_covers_from_conversions() {
        let wide: i64 = build(7_i32);
        assert_eq!(wide, 7);

        let text: String = build("abc");
        assert_eq!(text, "abc");
    }

    #[test]
    fn construct_from_accepts_explicit_only_paths() {
        let label: Label = build(3_usize);
        assert_eq!(label, Label("#3".to_string()));
    }

    #[test]
    fn forward_moves_owned_values() {
        let original = vec![1, 2, 3];
        let ptr = original.as_ptr();

        let received: Vec<i32> = receive(original);
        // Same buffer: nothing was copied.
        assert_eq!(received.as_ptr(), ptr);
    }

    #[test]
    fn forward_clones_borrowed_values() {
        let original = vec![1, 2, 3];

        let received: Vec<i32> = receive(&original);
        assert_eq!(received, original);
        assert_ne!(received.as_ptr(), original.as_ptr());
    }
}
