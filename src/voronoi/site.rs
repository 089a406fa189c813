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

use std::cmp::Ordering;

use crate::geometry::Point2;
use crate::numeric::scalar::Scalar;

/// An input point that seeds one cell of the diagram.
///
/// The id is the point's position in sweep order, assigned once the input
/// has been sorted bottom-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Site<T: Scalar> {
    pub coord: Point2<T>,
    pub id: usize,
}

impl<T: Scalar> Site<T> {
    /// Sweep ordering over raw points: y first, x breaks ties.
    pub(crate) fn sweep_order(a: &Point2<T>, b: &Point2<T>) -> Ordering {
        match a.y.partial_cmp(&b.y) {
            Some(Ordering::Equal) | None => a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal),
            Some(ord) => ord,
        }
    }
}
