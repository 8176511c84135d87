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

//! # Nested Intervals
//!
//! A [`NestedInterval`] keeps a variable inner interval living inside a
//! fixed parent interval, the way a viewport lives inside a document.
//! Editing operations express intent (push, pull, grow, shrink, expand,
//! contract) and the refit algorithm corrects the inner interval so the
//! parent can always contain what it reports.

use crate::err::OutOfParentBoundsError;
use boundrange_core::interval::Interval;
use boundrange_core::RangeValue;
use tracing::{debug, trace};

/// A variable inner interval constrained to a fixed parent interval.
///
/// The parent is set once at construction and never changes; the inner
/// interval starts equal to the parent and mutates through the editing
/// operations below. The inner length never exceeds the parent length.
///
/// # Examples
///
/// ```
/// use boundrange_core::interval::Interval;
/// use boundrange_window::nested::NestedInterval;
///
/// let parent = Interval::new(0, 9).unwrap();
/// let mut window = NestedInterval::new(parent);
/// assert!(window.is_maximized());
///
/// window.set_to(Interval::new(-3, 2).unwrap(), true).unwrap();
/// assert_eq!(window.inner(), Interval::new(0, 5).unwrap()); // refitted
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NestedInterval<T> {
    parent: Interval<T>,
    inner: Interval<T>,
}

impl<T: RangeValue> NestedInterval<T> {
    /// Creates a nested interval bound to `parent`, with the inner
    /// interval initialized to the full parent.
    #[inline]
    pub fn new(parent: Interval<T>) -> Self {
        Self {
            parent,
            inner: parent,
        }
    }

    /// The fixed interval the inner interval is contained within.
    #[inline]
    pub fn parent(&self) -> Interval<T> {
        self.parent
    }

    /// The current inner interval.
    #[inline]
    pub fn inner(&self) -> Interval<T> {
        self.inner
    }

    /// Returns true if the inner interval occupies the full parent.
    #[inline]
    pub fn is_maximized(&self) -> bool {
        self.inner == self.parent
    }

    /// Sets the inner interval to `candidate`, corrected for parent
    /// bounds.
    ///
    /// With `allow_resize` the candidate is always accepted and refitted
    /// via [`Self::refit_to_parent`]. Without it, a candidate the parent
    /// does not fully contain is rejected outright and the inner
    /// interval is left untouched; no refit is attempted.
    pub fn set_to(
        &mut self,
        candidate: Interval<T>,
        allow_resize: bool,
    ) -> Result<(), OutOfParentBoundsError<T>> {
        if !allow_resize && !self.parent.contains(&candidate) {
            debug!(parent = %self.parent, %candidate, "rejected non-resizing assignment");
            return Err(OutOfParentBoundsError::new(self.parent, candidate));
        }
        self.inner = Self::refit_to_parent(candidate, self.parent);
        Ok(())
    }

    /// Given two intervals, returns a new inner interval fitted to
    /// within the bounds of the parent.
    ///
    /// An inner interval at least as long as the parent is forced to
    /// fill the parent. One hanging out past the parent's start or end
    /// is translated back inside, length preserved. An inner interval
    /// that already fits is returned unchanged.
    pub fn refit_to_parent(inner: Interval<T>, parent: Interval<T>) -> Interval<T> {
        if inner.length() >= parent.length() {
            return parent;
        }
        if inner.start() < parent.start() {
            let shift = Interval::distance(inner.start(), parent.start()) - T::one();
            let fitted = translated(inner, shift);
            trace!(%inner, %parent, %fitted, "refitted inner interval rightward");
            fitted
        } else if inner.end() > parent.end() {
            let shift = Interval::distance(inner.end(), parent.end()) - T::one();
            let fitted = translated(inner, -shift);
            trace!(%inner, %parent, %fitted, "refitted inner interval leftward");
            fitted
        } else {
            inner
        }
    }

    /// Pushes the inner interval flush against the far end of the
    /// parent, preserving its length.
    pub fn push_to_end(&mut self) {
        let length = self.inner.length();
        self.inner = span(
            self.parent.end() - (length - T::one()),
            self.parent.end(),
        );
    }

    /// Pulls the inner interval flush against the start of the parent,
    /// preserving its length.
    pub fn pull_to_start(&mut self) {
        let length = self.inner.length();
        self.inner = span(
            self.parent.start(),
            self.parent.start() + length - T::one(),
        );
    }

    /// Relocates the inner interval to the middle of the parent.
    ///
    /// Only takes effect if the inner interval is shorter than half the
    /// parent; the relocated interval starts at the parent's midpoint
    /// and spans one value more than before.
    pub fn push_to_middle(&mut self) {
        let two = T::one() + T::one();
        if self.inner.length() < self.parent.length() / two {
            let middle = self.parent.midpoint();
            self.inner = span(middle, middle + self.inner.length());
        }
    }

    /// Grows the inner interval's end by `amount`, never past the
    /// parent on either side.
    ///
    /// Growth that would exceed the parent's length snaps the inner
    /// interval to the full parent. Growth that would push past the
    /// parent's end shifts the whole window left to stay inside.
    /// A negative amount shrinks instead.
    pub fn grow_range(&mut self, amount: T) {
        if amount.is_negative() {
            self.shrink_range(-amount);
            return;
        }
        if amount.is_zero() {
            return;
        }
        if self.inner.length() + amount > self.parent.length() {
            self.inner = self.parent;
            return;
        }
        let grown_end = self.inner.end() + amount;
        if grown_end > self.parent.end() {
            let offset = self.parent.end() - grown_end;
            self.inner = span(self.inner.start() + offset, grown_end + offset);
        } else {
            self.inner = span(self.inner.start(), grown_end);
        }
    }

    /// Shrinks the inner interval's end by `amount`.
    ///
    /// Shrinking past the smallest legal size is silently capped so the
    /// inner interval never degenerates below a span of two. A negative
    /// amount grows instead.
    pub fn shrink_range(&mut self, amount: T) {
        if amount.is_negative() {
            self.grow_range(-amount);
            return;
        }
        let two = T::one() + T::one();
        let max_shrink = self.inner.length() - two;
        let capped = if amount > max_shrink { max_shrink } else { amount };
        if capped.is_zero() {
            return;
        }
        self.inner = span(self.inner.start(), self.inner.end() - capped);
    }

    /// Translates the inner interval towards the parent's end by
    /// `amount`.
    ///
    /// No bounds correction is applied in the same call; this is a
    /// minimal primitive for composing higher-level moves.
    #[inline]
    pub fn push_range(&mut self, amount: T) {
        self.inner = translated(self.inner, amount);
    }

    /// Translates the inner interval towards the parent's start by
    /// `amount`. Like [`Self::push_range`], applies no bounds
    /// correction.
    #[inline]
    pub fn pull_range(&mut self, amount: T) {
        self.inner = translated(self.inner, -amount);
    }

    /// Expands the inner interval from both sides by `amount` in total,
    /// then refits it to the parent.
    ///
    /// The amount is split by truncating division: the start side moves
    /// by `amount / 2` and the end side by the remainder, so an odd
    /// amount is asymmetric by one unit on the end side.
    pub fn expand(&mut self, amount: T) {
        if amount.is_negative() {
            self.contract(-amount);
            return;
        }
        if amount.is_zero() {
            return;
        }
        let two = T::one() + T::one();
        let front = amount / two;
        let candidate = span(
            self.inner.start() - front,
            self.inner.end() + (amount - front),
        );
        self.inner = Self::refit_to_parent(candidate, self.parent);
    }

    /// Contracts the inner interval from both sides by `amount` in
    /// total, split the same way as [`Self::expand`].
    ///
    /// Contraction past the smallest legal size corrects to the minimal
    /// interval at the current start.
    pub fn contract(&mut self, amount: T) {
        if amount.is_negative() {
            self.expand(-amount);
            return;
        }
        if amount.is_zero() {
            return;
        }
        if amount >= self.inner.length() - T::one() {
            self.minimize_range();
            return;
        }
        let two = T::one() + T::one();
        let front = amount / two;
        self.inner = span(
            self.inner.start() + front,
            self.inner.end() - (amount - front),
        );
    }

    /// Sets the inner interval to the bounds of the parent.
    #[inline]
    pub fn maximize_range(&mut self) {
        self.inner = self.parent;
    }

    /// Sets the inner interval to its smallest legal size, anchored at
    /// the current start.
    #[inline]
    pub fn minimize_range(&mut self) {
        self.inner = span(self.inner.start(), self.inner.start() + T::one());
    }
}

/// Translates an interval by a signed amount, preserving its length.
#[inline]
fn translated<T: RangeValue>(interval: Interval<T>, amount: T) -> Interval<T> {
    span(interval.start() + amount, interval.end() + amount)
}

/// Builds an interval from endpoints the window arithmetic guarantees
/// to be distinct and ordered.
#[inline]
fn span<T: RangeValue>(start: T, end: T) -> Interval<T> {
    Interval::new(start, end).expect("window endpoints always form a valid interval")
}
