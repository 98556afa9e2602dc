//! Ordering strategies.
//!
//! Every routine of the sort and search engines talks to a single [`Comparator`]. The three ways a
//! caller can express an order (the type's own `PartialOrd`, a less-than predicate, a key
//! extractor) are adapters implementing that trait. All derived relations are defined in terms of
//! [`Comparator::less`] so they can never disagree with each other.
//!
//! A comparator must be a strict weak ordering: `less(a, a)` is false, `less(a, b)` implies
//! `!less(b, a)`, `less` is transitive, and incomparability (`!less(a, b) && !less(b, a)`) is
//! transitive too. Violations are not detected. They make the result order unspecified but never
//! lose or duplicate elements.

use core::cmp::Ordering;
use core::convert::Infallible;

/// A strict weak ordering over `T`, possibly fallible.
///
/// Infallible comparators use [`Infallible`] as their error type.
pub trait Comparator<T> {
    type Error;

    /// Returns `true` if `a` is ordered strictly before `b`.
    fn less(&mut self, a: &T, b: &T) -> Result<bool, Self::Error>;

    #[inline]
    fn greater(&mut self, a: &T, b: &T) -> Result<bool, Self::Error> {
        self.less(b, a)
    }

    #[inline]
    fn less_eq(&mut self, a: &T, b: &T) -> Result<bool, Self::Error> {
        Ok(!self.less(b, a)?)
    }

    #[inline]
    fn greater_eq(&mut self, a: &T, b: &T) -> Result<bool, Self::Error> {
        Ok(!self.less(a, b)?)
    }

    /// `a` and `b` belong to the same equivalence class.
    #[inline]
    fn equivalent(&mut self, a: &T, b: &T) -> Result<bool, Self::Error> {
        Ok(!self.less(a, b)? && !self.less(b, a)?)
    }

    #[inline]
    fn not_equivalent(&mut self, a: &T, b: &T) -> Result<bool, Self::Error> {
        Ok(!self.equivalent(a, b)?)
    }

    /// Three-way comparison derived from `less`.
    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Result<Ordering, Self::Error> {
        if self.less(a, b)? {
            Ok(Ordering::Less)
        } else if self.less(b, a)? {
            Ok(Ordering::Greater)
        } else {
            Ok(Ordering::Equal)
        }
    }
}

impl<T, C> Comparator<T> for &mut C
where
    C: Comparator<T> + ?Sized,
{
    type Error = C::Error;

    #[inline]
    fn less(&mut self, a: &T, b: &T) -> Result<bool, Self::Error> {
        (**self).less(a, b)
    }

    #[inline]
    fn equivalent(&mut self, a: &T, b: &T) -> Result<bool, Self::Error> {
        (**self).equivalent(a, b)
    }

    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Result<Ordering, Self::Error> {
        (**self).compare(a, b)
    }
}

/// The type's own ordering, via the `<` operator.
///
/// Results are unspecified for values that are incomparable with everything, such as NaN.
#[derive(Copy, Clone, Debug, Default)]
pub struct Natural;

impl<T: PartialOrd> Comparator<T> for Natural {
    type Error = Infallible;

    #[inline]
    fn less(&mut self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok(a < b)
    }

    #[inline]
    fn equivalent(&mut self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok(a == b)
    }
}

/// Caller supplied less-than predicate.
#[derive(Copy, Clone, Debug)]
pub struct LessFunc<F>(pub F);

impl<T, F> Comparator<T> for LessFunc<F>
where
    F: FnMut(&T, &T) -> bool,
{
    type Error = Infallible;

    #[inline]
    fn less(&mut self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok((self.0)(a, b))
    }
}

/// Caller supplied less-than predicate that may fail. The first error ends the operation and is
/// handed back unchanged.
#[derive(Copy, Clone, Debug)]
pub struct TryLessFunc<F>(pub F);

impl<T, E, F> Comparator<T> for TryLessFunc<F>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    type Error = E;

    #[inline]
    fn less(&mut self, a: &T, b: &T) -> Result<bool, E> {
        (self.0)(a, b)
    }
}

/// Caller supplied three-way comparison.
#[derive(Copy, Clone, Debug)]
pub struct CmpFunc<F>(pub F);

impl<T, F> Comparator<T> for CmpFunc<F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    type Error = Infallible;

    #[inline]
    fn less(&mut self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok((self.0)(a, b) == Ordering::Less)
    }

    #[inline]
    fn equivalent(&mut self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok((self.0)(a, b) == Ordering::Equal)
    }

    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Result<Ordering, Infallible> {
        Ok((self.0)(a, b))
    }
}

/// Caller supplied three-way comparison that may fail.
#[derive(Copy, Clone, Debug)]
pub struct TryCmpFunc<F>(pub F);

impl<T, E, F> Comparator<T> for TryCmpFunc<F>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    type Error = E;

    #[inline]
    fn less(&mut self, a: &T, b: &T) -> Result<bool, E> {
        Ok((self.0)(a, b)? == Ordering::Less)
    }

    #[inline]
    fn equivalent(&mut self, a: &T, b: &T) -> Result<bool, E> {
        Ok((self.0)(a, b)? == Ordering::Equal)
    }

    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Result<Ordering, E> {
        (self.0)(a, b)
    }
}

/// Orders elements by a derived key.
///
/// Only the extracted keys are ever compared, two elements with equal keys are equivalent even
/// if they differ otherwise. The key function is called once per element per comparison, it is
/// not cached.
///
/// ```ignore
/// let mut by_len = Key::new(|s: &&str| s.len());
/// assert!(by_len.lt(&"ab", &"abc"));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Key<F>(pub F);

impl<F> Key<F> {
    pub fn new(key: F) -> Self {
        Self(key)
    }

    pub fn lt<T, K>(&mut self, left: &T, right: &T) -> bool
    where
        F: FnMut(&T) -> K,
        K: PartialOrd,
    {
        (self.0)(left) < (self.0)(right)
    }

    pub fn le<T, K>(&mut self, left: &T, right: &T) -> bool
    where
        F: FnMut(&T) -> K,
        K: PartialOrd,
    {
        (self.0)(left) <= (self.0)(right)
    }

    pub fn gt<T, K>(&mut self, left: &T, right: &T) -> bool
    where
        F: FnMut(&T) -> K,
        K: PartialOrd,
    {
        (self.0)(left) > (self.0)(right)
    }

    pub fn ge<T, K>(&mut self, left: &T, right: &T) -> bool
    where
        F: FnMut(&T) -> K,
        K: PartialOrd,
    {
        (self.0)(left) >= (self.0)(right)
    }

    pub fn eq<T, K>(&mut self, left: &T, right: &T) -> bool
    where
        F: FnMut(&T) -> K,
        K: PartialOrd,
    {
        (self.0)(left) == (self.0)(right)
    }

    pub fn ne<T, K>(&mut self, left: &T, right: &T) -> bool
    where
        F: FnMut(&T) -> K,
        K: PartialOrd,
    {
        (self.0)(left) != (self.0)(right)
    }

    /// Three-way comparison of the keys. Incomparable keys report `Equal`.
    pub fn cmp<T, K>(&mut self, left: &T, right: &T) -> Ordering
    where
        F: FnMut(&T) -> K,
        K: PartialOrd,
    {
        let (l, r) = ((self.0)(left), (self.0)(right));
        if l == r {
            Ordering::Equal
        } else if l < r {
            Ordering::Less
        } else if l > r {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<T, K, F> Comparator<T> for Key<F>
where
    F: FnMut(&T) -> K,
    K: PartialOrd,
{
    type Error = Infallible;

    #[inline]
    fn less(&mut self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok(self.lt(a, b))
    }

    #[inline]
    fn equivalent(&mut self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok(self.eq(a, b))
    }

    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Result<Ordering, Infallible> {
        Ok(self.cmp(a, b))
    }
}

/// Unwraps the result of an operation driven by an infallible comparator.
#[inline]
pub(crate) fn into_ok<R>(result: Result<R, Infallible>) -> R {
    match result {
        Ok(val) => val,
        Err(never) => match never {},
    }
}
