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

//! # Bounded Interval Primitives
//!
//! This crate provides the pure value layer for bounded-interval
//! navigation: an immutable closed integer interval `[start, end]`
//! together with its iterator and construction errors.
//!
//! Unlike the half-open ranges of the standard library, every interval
//! here is closed on both ends and is guaranteed to span at least two
//! integers. "Mutation" never exists at this layer; every operation that
//! would change an interval produces a new value instead.

use num_traits::{PrimInt, Signed};
use std::fmt::{Debug, Display};

pub mod err;
pub mod interval;

/// The numeric carrier for interval bounds.
///
/// Any built-in signed integer satisfies this trait through the blanket
/// implementation below.
pub trait RangeValue: PrimInt + Signed + Send + Sync + Debug + Display {}
impl<T> RangeValue for T where T: PrimInt + Signed + Send + Sync + Debug + Display {}
