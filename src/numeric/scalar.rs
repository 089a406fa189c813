// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::fmt::Debug;

use num_traits::Float;
use num_traits::float::FloatCore;

/// Floating-point scalar the whole crate is generic over.
///
/// Implemented for `f32` and `f64`. Beyond the `Float` operations it only
/// adds the tolerance under which a determinant is treated as degenerate.
/// The `FloatCore` bound is what `ordered_float::NotNan` keys need.
pub trait Scalar: Float + FloatCore + Debug + 'static {
    /// Magnitude below which a determinant counts as zero.
    fn tolerance() -> Self;

    fn two() -> Self {
        Self::one() + Self::one()
    }

    fn half() -> Self {
        Self::one() / Self::two()
    }
}

impl Scalar for f32 {
    fn tolerance() -> Self {
        1.0e-7
    }
}

impl Scalar for f64 {
    fn tolerance() -> Self {
        1.0e-10
    }
}
