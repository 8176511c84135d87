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

//! # Slice Span Views
//!
//! Read-only helpers mapping a slice's valid index span to an interval
//! and slicing a slice by an interval. Nothing here mutates the slice or
//! allocates; [`SliceSpanExt::slice_span`] borrows a sub-slice.

use boundrange_core::err::ZeroLengthIntervalError;
use boundrange_core::interval::Interval;
use boundrange_core::RangeValue;

/// Interval-oriented views over a slice's index space.
///
/// # Examples
///
/// ```
/// use boundrange_core::interval::Interval;
/// use boundrange_window::view::SliceSpanExt;
///
/// let data = [10, 20, 30, 40, 50, 60];
/// let span: Interval<i32> = data.index_span().unwrap();
/// assert_eq!(span, Interval::new(0, 5).unwrap());
/// assert_eq!(data.slice_span(&Interval::new(1, 3).unwrap()), &[20, 30, 40]);
/// ```
pub trait SliceSpanExt<E> {
    /// Returns the interval of valid indices, `[0, len - 1]`.
    ///
    /// Slices shorter than two elements cannot form a legal interval and
    /// propagate the construction error.
    fn index_span<T: RangeValue>(&self) -> Result<Interval<T>, ZeroLengthIntervalError<T>>;

    /// Returns true if the slice has any indexable values.
    fn has_span(&self) -> bool;

    /// Returns true if the slice is non-empty and its full index span
    /// contains `candidate`.
    fn contains_span<T: RangeValue>(&self, candidate: &Interval<T>) -> bool;

    /// Returns the elements at offsets `[span.start, span.start + span.length)`,
    /// or the empty slice if the span is not contained in this slice's
    /// index space.
    fn slice_span<T: RangeValue>(&self, span: &Interval<T>) -> &[E];
}

impl<E> SliceSpanExt<E> for [E] {
    fn index_span<T: RangeValue>(&self) -> Result<Interval<T>, ZeroLengthIntervalError<T>> {
        let last = self.len().saturating_sub(1);
        let end = T::from(last).expect("slice length fits the carrier type");
        Interval::new(T::zero(), end)
    }

    #[inline]
    fn has_span(&self) -> bool {
        !self.is_empty()
    }

    fn contains_span<T: RangeValue>(&self, candidate: &Interval<T>) -> bool {
        self.has_span()
            && self
                .index_span::<T>()
                .is_ok_and(|span| span.contains(candidate))
    }

    fn slice_span<T: RangeValue>(&self, span: &Interval<T>) -> &[E] {
        if !self.contains_span(span) {
            return &[];
        }
        let start = span
            .start()
            .to_usize()
            .expect("contained span start is a valid offset");
        let count = span
            .length()
            .to_usize()
            .expect("contained span length is a valid count");
        &self[start..start + count]
    }
}
