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

use crate::RangeValue;
use std::fmt::Display;

/// An attempt to construct an interval whose bounds coincide.
///
/// Zero-size intervals are disallowed by design; the smallest legal
/// interval spans two integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZeroLengthIntervalError<T: RangeValue> {
    anchor: T,
}

impl<T: RangeValue> ZeroLengthIntervalError<T> {
    #[inline]
    pub fn new(anchor: T) -> Self {
        Self { anchor }
    }

    /// The value both bounds were given as.
    #[inline]
    pub fn anchor(&self) -> T {
        self.anchor
    }
}

impl<T: RangeValue> Display for ZeroLengthIntervalError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cannot create an interval of size zero at {}",
            self.anchor
        )
    }
}

impl<T: RangeValue> std::error::Error for ZeroLengthIntervalError<T> {}

/// A percentage argument outside the accepted `(0, 100]` window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PercentOutOfRangeError {
    percent: i32,
}

impl PercentOutOfRangeError {
    #[inline]
    pub fn new(percent: i32) -> Self {
        Self { percent }
    }

    #[inline]
    pub fn percent(&self) -> i32 {
        self.percent
    }
}

impl Display for PercentOutOfRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Percentage needs to be an integer value between 1 and 100, got {}",
            self.percent
        )
    }
}

impl std::error::Error for PercentOutOfRangeError {}
