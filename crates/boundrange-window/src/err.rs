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

use boundrange_core::interval::Interval;
use boundrange_core::RangeValue;
use std::fmt::Display;

/// A non-resizing inner-interval assignment the parent cannot contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutOfParentBoundsError<T: RangeValue> {
    parent: Interval<T>,
    candidate: Interval<T>,
}

impl<T: RangeValue> OutOfParentBoundsError<T> {
    #[inline]
    pub fn new(parent: Interval<T>, candidate: Interval<T>) -> Self {
        Self { parent, candidate }
    }

    /// The fixed parent interval the assignment was checked against.
    #[inline]
    pub fn parent(&self) -> Interval<T> {
        self.parent
    }

    /// The rejected candidate interval.
    #[inline]
    pub fn candidate(&self) -> Interval<T> {
        self.candidate
    }
}

impl<T: RangeValue> Display for OutOfParentBoundsError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Parent interval {} does not contain candidate {}",
            self.parent, self.candidate
        )
    }
}

impl<T: RangeValue> std::error::Error for OutOfParentBoundsError<T> {}
