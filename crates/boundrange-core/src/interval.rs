// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Closed Intervals
//!
//! The [`Interval`] type models an immutable closed integer range
//! `[start, end]`. Both bounds are part of the interval, the bounds are
//! normalized on construction, and an interval always spans at least two
//! integers; a zero-size interval cannot be represented.

use crate::err::{PercentOutOfRangeError, ZeroLengthIntervalError};
use crate::RangeValue;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

/// An immutable closed interval `[start, end]`.
///
/// Construction normalizes reversed bounds and rejects coinciding ones,
/// so `start < end` holds for every value of this type. Equality and
/// hashing are structural on `(start, end)`.
///
/// # Examples
///
/// ```
/// use boundrange_core::interval::Interval;
///
/// let interval = Interval::new(9, 0).unwrap();
/// assert_eq!(interval.start(), 0);
/// assert_eq!(interval.end(), 9);
/// assert_eq!(interval.length(), 10);
/// assert!(interval.contains_index(9)); // both ends are inclusive
/// assert!(Interval::new(5, 5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    start: T,
    end: T,
}

impl<T: RangeValue> Interval<T> {
    /// Creates a new closed interval from two distinct bounds.
    ///
    /// The bounds may be given in either order; the smaller one becomes
    /// `start` and the larger one `end`. Coinciding bounds are rejected,
    /// since an interval of size zero is disallowed by design.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundrange_core::interval::Interval;
    ///
    /// let interval = Interval::new(5, 3).unwrap();
    /// assert_eq!(interval.start(), 3);
    /// assert_eq!(interval.end(), 5);
    /// ```
    #[inline]
    pub fn new(a: T, b: T) -> Result<Self, ZeroLengthIntervalError<T>> {
        if a == b {
            return Err(ZeroLengthIntervalError::new(a));
        }
        let (start, end) = if a < b { (a, b) } else { (b, a) };
        Ok(Self { start, end })
    }

    /// Returns the inclusive start of the interval.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Returns the inclusive end of the interval.
    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    /// Returns the number of integers in the interval.
    ///
    /// A closed interval spans `end - start + 1` values, so the length of
    /// any interval is at least two.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundrange_core::interval::Interval;
    ///
    /// let interval = Interval::new(-3, 2).unwrap();
    /// assert_eq!(interval.length(), 6);
    /// ```
    #[inline]
    pub fn length(&self) -> T {
        self.end - self.start + T::one()
    }

    /// Returns the value in the middle of the interval.
    ///
    /// The midpoint is the exact rational average of the bounds, rounded
    /// half away from zero. Truncating integer division would bias odd
    /// averages toward zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundrange_core::interval::Interval;
    ///
    /// assert_eq!(Interval::new(2, 6).unwrap().midpoint(), 4);
    /// assert_eq!(Interval::new(0, 9).unwrap().midpoint(), 5);
    /// assert_eq!(Interval::new(-9, 0).unwrap().midpoint(), -5);
    /// ```
    #[inline]
    pub fn midpoint(&self) -> T {
        let two = T::one() + T::one();
        let sum = self.start + self.end;
        let half = sum / two;
        if (sum % two).is_zero() {
            half
        } else if sum.is_negative() {
            half - T::one()
        } else {
            half + T::one()
        }
    }

    /// Checks if this interval fully contains another interval.
    ///
    /// Containment is inclusive; an interval contains itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundrange_core::interval::Interval;
    ///
    /// let a = Interval::new(0, 9).unwrap();
    /// let b = Interval::new(2, 5).unwrap();
    /// assert!(a.contains(&b));
    /// assert!(a.contains(&a));
    /// assert!(!b.contains(&a));
    /// ```
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// Checks if the given index lies within the interval bounds.
    #[inline]
    pub fn contains_index(&self, index: T) -> bool {
        self.start <= index && self.end >= index
    }

    /// Returns the index clamped to within the bounds of the interval.
    ///
    /// Values inside the interval pass through unchanged; values outside
    /// snap to the nearest bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundrange_core::interval::Interval;
    ///
    /// let interval = Interval::new(3, 7).unwrap();
    /// assert_eq!(interval.clamp_index(5), 5);
    /// assert_eq!(interval.clamp_index(-2), 3);
    /// assert_eq!(interval.clamp_index(11), 7);
    /// ```
    #[inline]
    pub fn clamp_index(&self, index: T) -> T {
        if index < self.start {
            self.start
        } else if index > self.end {
            self.end
        } else {
            index
        }
    }

    /// Returns the number of unique integers spanning `a` and `b`,
    /// both endpoints included.
    ///
    /// This is `|a - b| + 1`, not plain subtraction; it is the basis for
    /// all length arithmetic on intervals.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundrange_core::interval::Interval;
    ///
    /// assert_eq!(Interval::distance(3, 7), 5);
    /// assert_eq!(Interval::distance(7, 3), 5);
    /// assert_eq!(Interval::distance(4, 4), 1);
    /// ```
    #[inline]
    pub fn distance(a: T, b: T) -> T {
        let diff = if a > b { a - b } else { b - a };
        diff + T::one()
    }

    /// Returns the value at the given percent of this interval.
    ///
    /// Accepts percentages in `(0, 100]` and fails otherwise. The result
    /// is `round(percent/100 * (start + end))`, rounded half away from
    /// zero on the exact rational and clamped into the interval. The
    /// scaling is by the bound sum, not the length; this mirrors the
    /// observable behavior the type was specified against.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundrange_core::interval::Interval;
    ///
    /// let interval = Interval::new(0, 9).unwrap();
    /// assert_eq!(interval.at_percent(100).unwrap(), 9);
    /// assert_eq!(interval.at_percent(50).unwrap(), 5);
    /// assert!(interval.at_percent(0).is_err());
    /// assert!(interval.at_percent(101).is_err());
    /// ```
    pub fn at_percent(&self, percent: i32) -> Result<T, PercentOutOfRangeError> {
        if percent <= 0 || percent > 100 {
            return Err(PercentOutOfRangeError::new(percent));
        }
        let start = self
            .start
            .to_i128()
            .expect("interval bound fits in i128");
        let end = self.end.to_i128().expect("interval bound fits in i128");
        let scaled = (start + end) * percent as i128;
        let value = round_half_away(scaled, 100).clamp(start, end);
        Ok(T::from(value).expect("clamped value fits the carrier type"))
    }

    /// Returns an iterator over every integer in `[start, end]`,
    /// ascending.
    ///
    /// The iterator is lazy and finite. Each call yields a fresh
    /// iterator, so iteration is restartable and has no effect on the
    /// interval itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundrange_core::interval::Interval;
    ///
    /// let interval = Interval::new(1, 4).unwrap();
    /// let values: Vec<_> = interval.iter().collect();
    /// assert_eq!(values, vec![1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn iter(&self) -> IntervalIter<T> {
        IntervalIter::new(self)
    }

    /// Converts the interval into the equivalent inclusive range.
    #[inline]
    pub fn to_range_inclusive(&self) -> RangeInclusive<T> {
        self.start..=self.end
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    /// Formats the interval as `[start, end]`.
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl<T: RangeValue> TryFrom<RangeInclusive<T>> for Interval<T> {
    type Error = ZeroLengthIntervalError<T>;

    /// Converts an inclusive range into an interval, rejecting ranges
    /// that span a single value.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundrange_core::interval::Interval;
    ///
    /// let interval = Interval::try_from(1..=5).unwrap();
    /// assert_eq!((interval.start(), interval.end()), (1, 5));
    /// assert!(Interval::try_from(3..=3).is_err());
    /// ```
    #[inline]
    fn try_from(r: RangeInclusive<T>) -> Result<Self, Self::Error> {
        Self::new(*r.start(), *r.end())
    }
}

impl<T: RangeValue> IntoIterator for Interval<T> {
    type Item = T;
    type IntoIter = IntervalIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntervalIter::new(&self)
    }
}

/// Rounds the exact rational `numerator / denominator` half away from
/// zero. The denominator must be positive.
fn round_half_away(numerator: i128, denominator: i128) -> i128 {
    debug_assert!(denominator > 0);
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if remainder.abs() * 2 >= denominator {
        if numerator >= 0 {
            quotient + 1
        } else {
            quotient - 1
        }
    } else {
        quotient
    }
}

/// An iterator over the integers of a closed interval.
///
/// Yields every value from `start` through `end` inclusive.
pub struct IntervalIter<T> {
    next: T,
    end: T,
    exhausted: bool,
}

impl<T: RangeValue> IntervalIter<T> {
    #[inline]
    fn new(interval: &Interval<T>) -> Self {
        Self {
            next: interval.start(),
            end: interval.end(),
            exhausted: false,
        }
    }
}

impl<T: RangeValue> Iterator for IntervalIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let value = self.next;
        if value == self.end {
            // Stop without stepping past `end`; incrementing here could
            // overflow the carrier type at its maximum.
            self.exhausted = true;
        } else {
            self.next = value + T::one();
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        match (self.end - self.next + T::one()).to_usize() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<T: RangeValue> FusedIterator for IntervalIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_normalizes_order() {
        let i = Interval::new(5i32, 3i32).unwrap();
        assert_eq!(i.start(), 3);
        assert_eq!(i.end(), 5);
    }

    #[test]
    fn test_new_keeps_order_when_sorted() {
        let i = Interval::new(-4i64, 9i64).unwrap();
        assert_eq!(i.start(), -4);
        assert_eq!(i.end(), 9);
    }

    #[test]
    fn test_new_rejects_coinciding_bounds() {
        let err = Interval::new(5i32, 5i32).unwrap_err();
        assert_eq!(err.anchor(), 5);
    }

    #[test]
    fn test_order_independent_construction_is_equal() {
        assert_eq!(
            Interval::new(2i32, 9i32).unwrap(),
            Interval::new(9i32, 2i32).unwrap()
        );
    }

    #[test]
    fn test_length_is_abs_difference_plus_one() {
        assert_eq!(Interval::new(-3i32, 2i32).unwrap().length(), 6);
        assert_eq!(Interval::new(0i32, 9i32).unwrap().length(), 10);
        assert_eq!(Interval::new(7i8, 8i8).unwrap().length(), 2);
    }

    #[test]
    fn test_midpoint_even_sum_is_exact() {
        assert_eq!(Interval::new(2i32, 6i32).unwrap().midpoint(), 4);
        assert_eq!(Interval::new(-6i32, -2i32).unwrap().midpoint(), -4);
    }

    #[test]
    fn test_midpoint_odd_sum_rounds_away_from_zero() {
        assert_eq!(Interval::new(0i32, 9i32).unwrap().midpoint(), 5);
        assert_eq!(Interval::new(-9i32, 0i32).unwrap().midpoint(), -5);
        assert_eq!(Interval::new(2i32, 5i32).unwrap().midpoint(), 4);
    }

    #[test]
    fn test_contains_interval_inclusive() {
        let a = Interval::new(0i32, 9i32).unwrap();
        assert!(a.contains(&Interval::new(0, 9).unwrap()));
        assert!(a.contains(&Interval::new(0, 5).unwrap()));
        assert!(a.contains(&Interval::new(4, 9).unwrap()));
        assert!(!a.contains(&Interval::new(-1, 5).unwrap()));
        assert!(!a.contains(&Interval::new(4, 10).unwrap()));
    }

    #[test]
    fn test_contains_index_at_edges() {
        let i = Interval::new(3i32, 7i32).unwrap();
        assert!(i.contains_index(3));
        assert!(i.contains_index(7));
        assert!(!i.contains_index(2));
        assert!(!i.contains_index(8));
    }

    #[test]
    fn test_clamp_index_passes_inner_values_through() {
        let i = Interval::new(3i32, 7i32).unwrap();
        for v in 3..=7 {
            assert_eq!(i.clamp_index(v), v);
        }
    }

    #[test]
    fn test_clamp_index_snaps_to_nearest_bound() {
        let i = Interval::new(3i32, 7i32).unwrap();
        assert_eq!(i.clamp_index(i32::MIN), 3);
        assert_eq!(i.clamp_index(i32::MAX), 7);
    }

    #[test]
    fn test_distance_counts_both_endpoints() {
        assert_eq!(Interval::distance(0i32, 9i32), 10);
        assert_eq!(Interval::distance(9i32, 0i32), 10);
        assert_eq!(Interval::distance(-3i32, 3i32), 7);
        assert_eq!(Interval::distance(5i32, 5i32), 1);
    }

    #[test]
    fn test_at_percent_rejects_out_of_window_values() {
        let i = Interval::new(0i32, 9i32).unwrap();
        assert_eq!(i.at_percent(0).unwrap_err().percent(), 0);
        assert_eq!(i.at_percent(-5).unwrap_err().percent(), -5);
        assert_eq!(i.at_percent(101).unwrap_err().percent(), 101);
    }

    #[test]
    fn test_at_percent_scales_by_bound_sum_and_clamps() {
        let i = Interval::new(0i32, 9i32).unwrap();
        // 50% of (0 + 9) = 4.5, rounded away from zero.
        assert_eq!(i.at_percent(50).unwrap(), 5);
        assert_eq!(i.at_percent(100).unwrap(), 9);
        // 10% of 9 = 0.9, rounds to 1.
        assert_eq!(i.at_percent(10).unwrap(), 1);
    }

    #[test]
    fn test_at_percent_clamps_when_sum_exceeds_end() {
        // 100% of (5 + 9) = 14, clamped back to the end bound.
        let i = Interval::new(5i32, 9i32).unwrap();
        assert_eq!(i.at_percent(100).unwrap(), 9);
    }

    #[test]
    fn test_at_percent_on_negative_interval() {
        // 50% of (-9 + 0) = -4.5, rounds away from zero to -5.
        let i = Interval::new(-9i32, 0i32).unwrap();
        assert_eq!(i.at_percent(50).unwrap(), -5);
    }

    #[test]
    fn test_iter_yields_every_integer_inclusive() {
        let i = Interval::new(1i32, 5i32).unwrap();
        let v: Vec<_> = i.iter().collect();
        assert_eq!(v, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_iter_is_restartable() {
        let i = Interval::new(-2i32, 2i32).unwrap();
        let first: Vec<_> = i.iter().collect();
        let second: Vec<_> = i.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_iter_stops_at_carrier_maximum() {
        let i = Interval::new(i8::MAX - 1, i8::MAX).unwrap();
        let v: Vec<_> = i.iter().collect();
        assert_eq!(v, vec![i8::MAX - 1, i8::MAX]);
    }

    #[test]
    fn test_iter_size_hint_is_exact() {
        let i = Interval::new(0i32, 9i32).unwrap();
        assert_eq!(i.iter().size_hint(), (10, Some(10)));
        let mut it = i.iter();
        it.next();
        assert_eq!(it.size_hint(), (9, Some(9)));
    }

    #[test]
    fn test_into_iterator_matches_iter() {
        let i = Interval::new(3i32, 6i32).unwrap();
        let collected: Vec<_> = i.into_iter().collect();
        assert_eq!(collected, vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_display_formats_closed_bounds() {
        let i = Interval::new(1i32, 5i32).unwrap();
        assert_eq!(format!("{}", i), "[1, 5]");
    }

    #[test]
    fn test_try_from_range_inclusive() {
        let i = Interval::try_from(2i32..=8i32).unwrap();
        assert_eq!((i.start(), i.end()), (2, 8));
        assert!(Interval::try_from(4i32..=4i32).is_err());
    }

    #[test]
    fn test_to_range_inclusive_roundtrip() {
        let i = Interval::new(-2i32, 5i32).unwrap();
        assert_eq!(i.to_range_inclusive(), -2..=5);
    }

    #[test]
    fn test_hash_and_eq_allow_dedup_in_set() {
        let mut set = HashSet::new();
        set.insert(Interval::new(5i32, 3i32).unwrap());
        set.insert(Interval::new(3i32, 5i32).unwrap());
        assert_eq!(set.len(), 1);
        assert!(set.contains(&Interval::new(3, 5).unwrap()));
    }

    #[test]
    fn test_round_half_away_on_exact_halves() {
        assert_eq!(round_half_away(450, 100), 5);
        assert_eq!(round_half_away(-450, 100), -5);
        assert_eq!(round_half_away(449, 100), 4);
        assert_eq!(round_half_away(-449, 100), -4);
        assert_eq!(round_half_away(400, 100), 4);
        assert_eq!(round_half_away(0, 100), 0);
    }
}
