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

//! # Boundary Policies
//!
//! A boundary policy decides what happens to a value that falls outside
//! an interval. The set of behaviors is fixed and exhaustive, so the
//! policy is a closed enum dispatched by `match` rather than an open
//! trait object. Policies are stateless; the random source for
//! [`BoundaryPolicy::RandomReposition`] is supplied per call.

use crate::WalkValue;
use boundrange_core::interval::Interval;
use rand::Rng;

/// A strategy mapping an arbitrary integer onto a value inside a given
/// interval.
///
/// Application is total; no input value can make it fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundaryPolicy {
    /// Values outside the interval snap to the nearest bound.
    #[default]
    Clamp,
    /// Values outside wrap around modularly, treating the interval as
    /// circular.
    Wrap,
    /// Values outside are replaced by a uniformly random value drawn
    /// from the interval, bounds included.
    RandomReposition,
}

impl BoundaryPolicy {
    /// Maps `value` onto a value inside `range` according to this
    /// policy.
    ///
    /// Every variant takes the random source so callers can hold one
    /// generator regardless of the active policy; only
    /// [`BoundaryPolicy::RandomReposition`] draws from it, and then only
    /// for out-of-bounds values.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundrange_core::interval::Interval;
    /// use boundrange_window::policy::BoundaryPolicy;
    ///
    /// let range = Interval::new(0, 9).unwrap();
    /// let mut rng = rand::rng();
    /// assert_eq!(BoundaryPolicy::Clamp.apply(&range, 14, &mut rng), 9);
    /// assert_eq!(BoundaryPolicy::Wrap.apply(&range, -1, &mut rng), 9);
    /// let drawn = BoundaryPolicy::RandomReposition.apply(&range, 100, &mut rng);
    /// assert!(range.contains_index(drawn));
    /// ```
    pub fn apply<T, R>(&self, range: &Interval<T>, value: T, rng: &mut R) -> T
    where
        T: WalkValue,
        R: Rng + ?Sized,
    {
        match self {
            BoundaryPolicy::Clamp => range.clamp_index(value),
            BoundaryPolicy::Wrap => wrap(range, value),
            BoundaryPolicy::RandomReposition => {
                if range.contains_index(value) {
                    value
                } else {
                    rng.random_range(range.start()..=range.end())
                }
            }
        }
    }
}

/// Wraps `value` into `range` by euclidean remainder, treating the
/// interval as circular. Correct for values arbitrarily far outside the
/// bounds on either side.
fn wrap<T: WalkValue>(range: &Interval<T>, value: T) -> T {
    let span = range.end() - range.start() + T::one();
    let offset = value - range.start();
    let wrapped = ((offset % span) + span) % span;
    range.start() + wrapped
}
