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

//! # Bounded Window Machinery
//!
//! This crate builds the stateful navigation layer on top of the interval
//! primitives from `boundrange-core`:
//!
//! - [`policy::BoundaryPolicy`]: maps arbitrary integers onto a value
//!   inside a given interval (clamp, wrap, or random reposition).
//! - [`cursor::IntervalCursor`]: a walker holding an always-valid current
//!   position inside an interval.
//! - [`nested::NestedInterval`]: a variable inner interval kept fitted
//!   inside a fixed parent interval across resize and move operations.
//! - [`view::SliceSpanExt`]: maps a slice's valid index span to an
//!   interval and slices by an interval.
//!
//! Everything here is synchronous and single-threaded. The only
//! non-determinism is the random-reposition policy, whose random source
//! is always injected by the caller so tests can substitute a seeded
//! generator.

use boundrange_core::RangeValue;
use rand::distr::uniform::SampleUniform;

pub mod cursor;
pub mod err;
pub mod nested;
pub mod policy;
pub mod view;

/// The numeric carrier for walkable intervals.
///
/// Extends [`RangeValue`] with uniform sampling so the random-reposition
/// boundary policy can draw replacement values. Every built-in signed
/// integer qualifies through the blanket implementation.
pub trait WalkValue: RangeValue + SampleUniform {}
impl<T> WalkValue for T where T: RangeValue + SampleUniform {}
