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

use crate::geometry::{Point2, Rect};
use crate::numeric::scalar::Scalar;

/// Working state for one diagram computation: the extent of the input
/// sites and a bucket count derived from their number.
///
/// Owned by a single `Voronoi::new` invocation and dropped with it, so
/// independent computations never share state.
#[derive(Debug, Clone)]
pub(crate) struct SweepContext<T: Scalar> {
    /// Bounding box of the input sites, not the clip rectangle.
    pub bounds: Rect<T>,
    /// Roughly the square root of the site count; sizes the beach-line
    /// search buckets and the event queue's initial capacity.
    pub sqrt_sites: usize,
}

impl<T: Scalar> SweepContext<T> {
    pub fn new(points: &[Point2<T>]) -> Option<Self> {
        let bounds = Rect::bounding(points)?;
        let sqrt_sites = ((points.len() + 4) as f64).sqrt() as usize + 1;
        Some(SweepContext { bounds, sqrt_sites })
    }
}
