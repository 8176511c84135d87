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

//! # Interval Cursors
//!
//! A cursor walks the values of an interval without ever leaving its
//! bounds. Every mutation funnels through the active
//! [`BoundaryPolicy`], so the current position is valid by construction
//! after any sequence of operations.

use crate::policy::BoundaryPolicy;
use crate::WalkValue;
use boundrange_core::interval::Interval;
use rand::Rng;
use tracing::trace;

/// A stateful walker holding an always-valid position inside an
/// interval.
///
/// The cursor owns its random source so the random-reposition policy
/// stays deterministic under an injected seeded generator; no global
/// randomness is consulted.
///
/// # Examples
///
/// ```
/// use boundrange_core::interval::Interval;
/// use boundrange_window::cursor::IntervalCursor;
/// use boundrange_window::policy::BoundaryPolicy;
///
/// let range = Interval::new(0, 9).unwrap();
/// let mut cursor = IntervalCursor::new(range, BoundaryPolicy::Wrap, rand::rng());
/// assert_eq!(cursor.current(), 0);
/// cursor.step_back();
/// assert_eq!(cursor.current(), 9); // wrapped around the start
/// ```
#[derive(Debug, Clone)]
pub struct IntervalCursor<T, R> {
    range: Interval<T>,
    current: T,
    policy: BoundaryPolicy,
    rng: R,
}

impl<T, R> IntervalCursor<T, R>
where
    T: WalkValue,
    R: Rng,
{
    /// Creates a cursor bound to `range` under the given policy.
    ///
    /// The current position starts at the policy-corrected value of
    /// zero, so a range containing zero starts there and any other range
    /// starts wherever the policy relocates zero to.
    pub fn new(range: Interval<T>, policy: BoundaryPolicy, rng: R) -> Self {
        let mut cursor = Self {
            range,
            current: T::zero(),
            policy,
            rng,
        };
        cursor.revalidate();
        cursor
    }

    /// The current position. Always inside [`Self::range`].
    #[inline]
    pub fn current(&self) -> T {
        self.current
    }

    /// The interval the cursor is bound to.
    #[inline]
    pub fn range(&self) -> Interval<T> {
        self.range
    }

    /// The active boundary policy.
    #[inline]
    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    /// Moves the current position one step forward, policy-corrected.
    #[inline]
    pub fn step_forward(&mut self) {
        self.set_current(self.current + T::one());
    }

    /// Moves the current position one step back, policy-corrected.
    #[inline]
    pub fn step_back(&mut self) {
        self.set_current(self.current - T::one());
    }

    /// Moves the current position to `value`, policy-corrected.
    #[inline]
    pub fn step_to(&mut self, value: T) {
        self.set_current(value);
    }

    /// Replaces the bound interval and revalidates the current position
    /// against it.
    ///
    /// The revalidation may silently relocate the position, for example
    /// clamping it inward when the new range no longer covers it.
    pub fn set_range(&mut self, range: Interval<T>) {
        self.range = range;
        let before = self.current;
        self.revalidate();
        if before != self.current {
            trace!(%range, %before, current = %self.current, "cursor relocated by range change");
        }
    }

    /// Replaces the boundary policy and revalidates the current
    /// position under it.
    pub fn set_policy(&mut self, policy: BoundaryPolicy) {
        self.policy = policy;
        self.revalidate();
    }

    #[inline]
    fn set_current(&mut self, value: T) {
        self.current = self.policy.apply(&self.range, value, &mut self.rng);
    }

    #[inline]
    fn revalidate(&mut self) {
        self.set_current(self.current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn cursor(
        start: i32,
        end: i32,
        policy: BoundaryPolicy,
    ) -> IntervalCursor<i32, ChaCha8Rng> {
        let range = Interval::new(start, end).unwrap();
        IntervalCursor::new(range, policy, ChaCha8Rng::seed_from_u64(7))
    }

    #[test]
    fn test_starts_at_zero_when_range_covers_it() {
        let c = cursor(-5, 5, BoundaryPolicy::Clamp);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_starts_at_policy_corrected_zero_outside_range() {
        let clamped = cursor(3, 9, BoundaryPolicy::Clamp);
        assert_eq!(clamped.current(), 3);
        // span = 7, so 0 wraps to 3 + ((0 - 3) mod 7) = 7
        let wrapped = cursor(3, 9, BoundaryPolicy::Wrap);
        assert_eq!(wrapped.current(), 7);
    }

    #[test]
    fn test_step_forward_clamps_at_end() {
        let mut c = cursor(0, 2, BoundaryPolicy::Clamp);
        for _ in 0..5 {
            c.step_forward();
        }
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_step_back_clamps_at_start() {
        let mut c = cursor(0, 2, BoundaryPolicy::Clamp);
        c.step_back();
        c.step_back();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_wrap_steps_around_both_edges() {
        let mut c = cursor(0, 9, BoundaryPolicy::Wrap);
        c.step_back();
        assert_eq!(c.current(), 9);
        c.step_forward();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_nine_steps_back_across_a_span_of_ten() {
        // (0 - 9) mod 10 = 1 after nine consecutive wrapping steps.
        let mut c = cursor(0, 9, BoundaryPolicy::Wrap);
        for _ in 0..9 {
            c.step_back();
        }
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_step_to_is_policy_corrected() {
        let mut c = cursor(0, 9, BoundaryPolicy::Wrap);
        c.step_to(23);
        assert_eq!(c.current(), 3);
        c.step_to(4);
        assert_eq!(c.current(), 4);
    }

    #[test]
    fn test_set_range_relocates_current_inward() {
        let mut c = cursor(0, 9, BoundaryPolicy::Clamp);
        c.step_to(9);
        c.set_range(Interval::new(2, 5).unwrap());
        assert_eq!(c.current(), 5);
    }

    #[test]
    fn test_set_policy_revalidates_current() {
        let mut c = cursor(0, 9, BoundaryPolicy::Clamp);
        c.step_to(100);
        assert_eq!(c.current(), 9);
        c.set_policy(BoundaryPolicy::Wrap);
        assert_eq!(c.policy(), BoundaryPolicy::Wrap);
        assert!(c.range().contains_index(c.current()));
    }

    #[test]
    fn test_invariant_holds_across_mixed_operations() {
        let mut c = cursor(-10, 10, BoundaryPolicy::RandomReposition);
        let moves: [&dyn Fn(&mut IntervalCursor<i32, ChaCha8Rng>); 5] = [
            &|c| c.step_forward(),
            &|c| c.step_back(),
            &|c| c.step_to(37),
            &|c| c.step_to(-99),
            &|c| c.set_policy(BoundaryPolicy::Wrap),
        ];
        for (i, apply) in moves.iter().cycle().take(50).enumerate() {
            apply(&mut c);
            assert!(
                c.range().contains_index(c.current()),
                "invariant broken after move {}",
                i
            );
        }
        c.set_range(Interval::new(1, 3).unwrap());
        assert!(c.range().contains_index(c.current()));
    }

    #[test]
    fn test_same_seed_same_walk() {
        let walk = |seed: u64| {
            let range = Interval::new(0i32, 9).unwrap();
            let mut c = IntervalCursor::new(
                range,
                BoundaryPolicy::RandomReposition,
                ChaCha8Rng::seed_from_u64(seed),
            );
            let mut seen = Vec::new();
            for _ in 0..10 {
                c.step_to(1_000);
                seen.push(c.current());
            }
            seen
        };
        assert_eq!(walk(3), walk(3));
    }
}
