//! Two-element product type
//!
//! [`Pair<A, B>`] groups two values with public, independently accessible
//! fields. Its constructor set keeps two questions apart:
//!
//! - *convertibility* (`From` / `Into`): conversions that may happen without
//!   naming a constructor, e.g. `let p: Pair<f64, f64> = (1, 2).into()`;
//! - *constructibility* ([`ConstructFrom`]): conversions that are allowed but
//!   must be asked for by name, e.g. `Pair::construct(a, b)`.
//!
//! | From                      | Implicit                         | Explicit                        |
//! |---------------------------|----------------------------------|---------------------------------|
//! | two declared-type values  | [`Pair::new`]                    |                                 |
//! | two borrowed values       | [`Pair::from_refs`]              |                                 |
//! | two values of other types | `From<(U1, U2)>`, [`Pair::from_values`] | [`Pair::construct`]      |
//! | another pair, by value    | [`Pair::from_pair`], [`Pair::convert`] | [`Pair::construct_from_pair`] |
//! | another pair, borrowed    | [`Pair::from_pair_ref`]          | [`Pair::construct_from_pair_ref`] |
//!
//! A field type that is constructible but not convertible from its source
//! gets no `From` impl, so the implicit form does not compile:
//!
//! ```rust,compile_fail
//! use tinystl_foundation::{ConstructFrom, Pair};
//!
//! struct Label(String);
//!
//! impl ConstructFrom<usize> for Label {
//!     fn construct_from(value: usize) -> Self {
//!         Label(format!("#{value}"))
//!     }
//! }
//!
//! let implicit: Pair<Label, i32> = (3_usize, 1).into();
//! ```
//!
//! The explicit form accepts the same arguments:
//!
//! ```rust
//! use tinystl_foundation::{ConstructFrom, Pair};
//!
//! struct Label(String);
//!
//! impl ConstructFrom<usize> for Label {
//!     fn construct_from(value: usize) -> Self {
//!         Label(format!("#{value}"))
//!     }
//! }
//!
//! let explicit: Pair<Label, i32> = Pair::construct(3_usize, 1);
//! assert_eq!(explicit.first.0, "#3");
//! assert_eq!(explicit.second, 1);
//! ```

use core::cmp::Ordering;
use core::fmt;

use crate::core::traits::ConstructFrom;
use crate::utility;

/// Two values, `first` and `second`, stored in that order
///
/// Comparison is lexicographic: `first` decides unless equal, then
/// `second` does.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Pair<A, B> {
    /// Move two values of the declared types into a pair
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Build a pair by cloning two borrowed values
    #[inline]
    pub fn from_refs(first: &A, second: &B) -> Self
    where
        A: Clone,
        B: Clone,
    {
        Self::new(first.clone(), second.clone())
    }

    /// Build a pair from values that convert into the field types
    ///
    /// Same conversion as `From<(U1, U2)>`, without building the tuple.
    #[inline]
    pub fn from_values<U1, U2>(first: U1, second: U2) -> Self
    where
        A: From<U1>,
        B: From<U2>,
    {
        Self::new(A::from(first), B::from(second))
    }

    /// Build a pair through each field type's explicit constructor
    ///
    /// Accepts every conversion [`from_values`](Self::from_values) accepts,
    /// plus field types that are only [`ConstructFrom`] their argument.
    #[inline]
    pub fn construct<U1, U2>(first: U1, second: U2) -> Self
    where
        A: ConstructFrom<U1>,
        B: ConstructFrom<U2>,
    {
        Self::new(A::construct_from(first), B::construct_from(second))
    }

    /// Convert another pair, field by field, consuming it
    #[inline]
    pub fn from_pair<U1, U2>(other: Pair<U1, U2>) -> Self
    where
        A: From<U1>,
        B: From<U2>,
    {
        Self::from_values(other.first, other.second)
    }

    /// Convert a borrowed pair, cloning its fields first
    #[inline]
    pub fn from_pair_ref<U1, U2>(other: &Pair<U1, U2>) -> Self
    where
        U1: Clone,
        U2: Clone,
        A: From<U1>,
        B: From<U2>,
    {
        Self::from_values(other.first.clone(), other.second.clone())
    }

    /// Explicitly construct from another pair, consuming it
    #[inline]
    pub fn construct_from_pair<U1, U2>(other: Pair<U1, U2>) -> Self
    where
        A: ConstructFrom<U1>,
        B: ConstructFrom<U2>,
    {
        Self::construct(other.first, other.second)
    }

    /// Explicitly construct from a borrowed pair, cloning its fields first
    #[inline]
    pub fn construct_from_pair_ref<U1, U2>(other: &Pair<U1, U2>) -> Self
    where
        U1: Clone,
        U2: Clone,
        A: ConstructFrom<U1>,
        B: ConstructFrom<U2>,
    {
        Self::construct(other.first.clone(), other.second.clone())
    }

    /// Convert into a pair of other field types
    ///
    /// ```rust
    /// use tinystl_foundation::Pair;
    ///
    /// let wide: Pair<i64, f64> = Pair::new(3_i32, 1.5_f32).convert();
    /// assert_eq!(wide, Pair::new(3, 1.5));
    /// ```
    #[inline]
    pub fn convert<C, D>(self) -> Pair<C, D>
    where
        C: From<A>,
        D: From<B>,
    {
        Pair::from_pair(self)
    }

    #[inline]
    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }

    /// Borrow both fields as a pair of references
    #[inline]
    pub const fn as_refs(&self) -> Pair<&A, &B> {
        Pair::new(&self.first, &self.second)
    }

    /// Mutably borrow both fields at once
    #[inline]
    pub fn as_mut(&mut self) -> Pair<&mut A, &mut B> {
        Pair::new(&mut self.first, &mut self.second)
    }

    #[inline]
    pub fn map_first<C>(self, f: impl FnOnce(A) -> C) -> Pair<C, B> {
        Pair::new(f(self.first), self.second)
    }

    #[inline]
    pub fn map_second<D>(self, f: impl FnOnce(B) -> D) -> Pair<A, D> {
        Pair::new(self.first, f(self.second))
    }

    /// Assign from a pair of other field types, field by field
    pub fn assign_from<U1, U2>(&mut self, other: Pair<U1, U2>)
    where
        A: From<U1>,
        B: From<U2>,
    {
        self.first = A::from(other.first);
        self.second = B::from(other.second);
    }

    /// Assign from a borrowed pair of other field types, field by field
    pub fn assign_from_ref<U1, U2>(&mut self, other: &Pair<U1, U2>)
    where
        U1: Clone,
        U2: Clone,
        A: From<U1>,
        B: From<U2>,
    {
        self.first = A::from(other.first.clone());
        self.second = B::from(other.second.clone());
    }

    /// Exchange both fields with `other`
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        utility::swap(&mut self.first, &mut other.first);
        utility::swap(&mut self.second, &mut other.second);
    }
}

/// Pair up two values, inferring both field types
///
/// ```rust
/// use tinystl_foundation::{make_pair, Pair};
///
/// let p: Pair<i32, &str> = make_pair(1, "a");
/// assert_eq!(p.second, "a");
/// ```
#[inline]
pub const fn make_pair<A, B>(first: A, second: B) -> Pair<A, B> {
    Pair::new(first, second)
}

// Member-wise so that clone_from can reuse each field's resources.
#[allow(clippy::expl_impl_clone_on_copy)]
impl<A: Clone, B: Clone> Clone for Pair<A, B> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.first.clone_from(&source.first);
        self.second.clone_from(&source.second);
    }
}

impl<A, B, U1, U2> From<(U1, U2)> for Pair<A, B>
where
    A: From<U1>,
    B: From<U2>,
{
    #[inline]
    fn from((first, second): (U1, U2)) -> Self {
        Self::from_values(first, second)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    #[inline]
    fn from(pair: Pair<A, B>) -> Self {
        pair.into_tuple()
    }
}

/// Every relation is built from `==` and the lexicographic `<`.
impl<A: PartialOrd, B: PartialOrd> PartialOrd for Pair<A, B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.lt(other) {
            Some(Ordering::Less)
        } else if other.lt(self) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.first < other.first || (self.first == other.first && self.second < other.second)
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        other.lt(self)
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        self.lt(other) || self == other
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        other.lt(self) || self == other
    }
}

impl<A: Ord, B: Ord> Ord for Pair<A, B> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            Ordering::Equal
        } else if self.lt(other) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Celsius(f64);

    impl From<i32> for Celsius {
        fn from(value: i32) -> Self {
            Celsius(f64::from(value))
        }
    }

    #[derive(Debug, PartialEq)]
    struct Label(String);

    impl ConstructFrom<usize> for Label {
        fn construct_from(value: usize) -> Self {
            Label(format!("#{value}"))
        }
    }

    #[test]
    fn default_is_field_defaults() {
        assert_eq!(Pair::<i32, i32>::default(), Pair::new(0, 0));
        let p = Pair::<String, Vec<u8>>::default();
        assert!(p.first.is_empty() && p.second.is_empty());
    }

    #[test]
    fn const_construction() {
        const ORIGIN: Pair<i32, i32> = Pair::new(0, 0);
        const UNIT: Pair<u8, char> = make_pair(1, 'x');
        assert_eq!(ORIGIN.first + ORIGIN.second, 0);
        assert_eq!(UNIT.second, 'x');
    }

    #[test]
    fn from_refs_clones() {
        let name = String::from("key");
        let value = vec![1, 2];
        let p = Pair::from_refs(&name, &value);
        assert_eq!(p, Pair::new(String::from("key"), vec![1, 2]));
        assert_eq!(name, "key");
    }

    #[test]
    fn implicit_conversion_from_tuple() {
        let p: Pair<f64, f64> = (1_i32, 2_i32).into();
        assert_eq!(p, Pair::new(1.0, 2.0));

        let q = Pair::<Celsius, String>::from_values(21_i32, "warm");
        assert_eq!(q.first, Celsius(21.0));
        assert_eq!(q.second, "warm");
    }

    #[test]
    fn explicit_construction_accepts_both_paths() {
        let p: Pair<Label, i64> = Pair::construct(3_usize, 4_i32);
        assert_eq!(p.first, Label("#3".into()));
        assert_eq!(p.second, 4);
    }

    #[test]
    fn pair_to_pair_conversions() {
        let source = Pair::new(7_i32, "seven");

        let by_ref: Pair<i64, String> = Pair::from_pair_ref(&source);
        assert_eq!(by_ref, Pair::new(7, String::from("seven")));

        let by_value: Pair<f64, String> = Pair::from_pair(source);
        assert_eq!(by_value.first, 7.0);

        let labels = Pair::new(1_usize, 2_usize);
        let explicit: Pair<Label, Label> = Pair::construct_from_pair_ref(&labels);
        assert_eq!(explicit.second, Label("#2".into()));
        let explicit: Pair<Label, usize> = Pair::construct_from_pair(labels);
        assert_eq!(explicit.first, Label("#1".into()));
    }

    #[test]
    fn tuple_round_trip_and_field_access() {
        let mut p = Pair::new(String::from("a"), 1);
        {
            let refs = p.as_mut();
            refs.first.push('b');
            *refs.second += 1;
        }
        assert_eq!(p.as_refs().first, "ab");

        let (a, n): (String, i32) = p.into();
        assert_eq!((a.as_str(), n), ("ab", 2));
    }

    #[test]
    fn map_fields() {
        let p = Pair::new(2, "x").map_first(|n| n * 10).map_second(str::len);
        assert_eq!(p, Pair::new(20, 1));
    }

    #[test]
    fn clone_from_is_member_wise() {
        let source = Pair::new(String::from("hi"), vec![1, 2, 3]);
        let mut target = Pair::new(String::with_capacity(64), Vec::with_capacity(64));
        let buffer = target.first.as_ptr();

        target.clone_from(&source);
        assert_eq!(target, source);
        // The existing allocation was reused.
        assert_eq!(target.first.as_ptr(), buffer);
    }

    #[test]
    fn heterogeneous_assignment() {
        let mut p = Pair::new(0_i64, String::new());
        p.assign_from(Pair::new(5_i32, "five"));
        assert_eq!(p, Pair::new(5, String::from("five")));

        let other = Pair::new(6_u8, String::from("six"));
        p.assign_from_ref(&other);
        assert_eq!(p, Pair::new(6, String::from("six")));
        assert_eq!(other.second, "six");
    }

    #[test]
    fn swap_exchanges_both_fields() {
        let mut a = Pair::new(1, String::from("one"));
        let mut b = Pair::new(2, String::from("two"));
        a.swap(&mut b);
        assert_eq!(a, Pair::new(2, String::from("two")));
        assert_eq!(b, Pair::new(1, String::from("one")));
    }

    #[test]
    fn lexicographic_ordering() {
        let p = Pair::new(1, 2);
        assert!(p == Pair::new(1, 2));
        assert!(p != Pair::new(2, 1));
        assert!(p < Pair::new(1, 3));
        assert!(p < Pair::new(2, 0));
        assert!(Pair::new(2, 0) > p);
        assert!(p <= Pair::new(1, 2));
        assert!(p >= Pair::new(0, 9));
        assert_eq!(p.cmp(&Pair::new(1, 1)), Ordering::Greater);
    }

    #[test]
    fn incomparable_fields() {
        let a = Pair::new(f64::NAN, 1.0);
        let b = Pair::new(f64::NAN, 1.0);
        assert_eq!(a.partial_cmp(&b), None);
        assert!(!(a < b) && !(a > b) && !(a <= b) && !(a >= b));
    }

    /// `<` follows the number, `Ord::cmp` runs backwards
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Skewed(u8);

    #[allow(clippy::non_canonical_partial_ord_impl)]
    impl PartialOrd for Skewed {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            self.0.partial_cmp(&other.0)
        }
    }

    impl Ord for Skewed {
        fn cmp(&self, other: &Self) -> Ordering {
            other.0.cmp(&self.0)
        }
    }

    #[test]
    fn total_order_follows_less_than() {
        let low = Pair::new(Skewed(1), 0_u8);
        let high = Pair::new(Skewed(2), 0_u8);
        assert!(low < high);
        assert_eq!(low.cmp(&high), Ordering::Less);
        assert_eq!(high.cmp(&low), Ordering::Greater);
        assert_eq!(low.cmp(&Pair::new(Skewed(1), 0)), Ordering::Equal);

        let mut sorted = vec![high, Pair::new(Skewed(1), 5), low];
        sorted.sort();
        assert_eq!(sorted, vec![low, Pair::new(Skewed(1), 5), high]);

        let set: std::collections::BTreeSet<_> = sorted.iter().copied().collect();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), sorted);
    }

    #[test]
    fn display_renders_fields() {
        assert_eq!(Pair::new(1, "one").to_string(), "(1, one)");
    }
}
