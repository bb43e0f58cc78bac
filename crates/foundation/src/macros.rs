//! Public macros for tinystl-foundation

/// Create a [`Pair`](crate::Pair), inferring both field types
///
/// # Examples
/// ```
/// use tinystl_foundation::{pair, Pair};
///
/// let p = pair!(1, "one");
/// assert_eq!(p, Pair::new(1, "one"));
/// ```
#[macro_export]
macro_rules! pair {
    ($first:expr, $second:expr $(,)?) => {{
        $crate::pair::make_pair($first, $second)
    }};
}

/// Declare types that are not pairs
///
/// The listed types implement [`NotAPair`](crate::type_traits::NotAPair),
/// so [`is_pair`](crate::type_traits::is_pair) answers `false` for them and
/// they can be used wherever an [`IsPair`](crate::type_traits::IsPair)
/// bound is required. Generic types implement `NotAPair` directly.
///
/// # Examples
/// ```
/// use tinystl_foundation::not_a_pair;
/// use tinystl_foundation::type_traits::is_pair;
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// not_a_pair!(Point);
///
/// assert!(!is_pair::<Point>());
/// ```
#[macro_export]
macro_rules! not_a_pair {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::type_traits::NotAPair for $ty {}
        )+
    };
}
