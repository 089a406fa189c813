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

use crate::geometry::{Line2, Point2};
use crate::numeric::scalar::Scalar;
use crate::voronoi::site::Site;

/// Which side of an edge a beach-line half-edge tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Index of an edge in the diagram's edge arena.
pub(crate) type EdgeId = usize;

/// A diagram edge under construction: the bisector line between two sites
/// plus the endpoints discovered as circle events fire.
///
/// `sites[0]` is the left region, `sites[1]` the right. An endpoint still
/// `None` extends to infinity on that side until the clipper truncates it.
#[derive(Debug, Clone)]
pub(crate) struct Edge<T: Scalar> {
    pub line: Line2<T>,
    pub sites: [Site<T>; 2],
    pub endpoints: [Option<Point2<T>>; 2],
}

impl<T: Scalar> Edge<T> {
    pub fn bisector(s1: Site<T>, s2: Site<T>) -> Self {
        Edge {
            line: Line2::bisector(&s1.coord, &s2.coord),
            sites: [s1, s2],
            endpoints: [None, None],
        }
    }

    /// Assign one endpoint. Writing the same side twice is a logic error;
    /// release builds keep the first value.
    pub fn set_endpoint(&mut self, side: Side, v: Point2<T>) {
        let slot = &mut self.endpoints[side.index()];
        debug_assert!(slot.is_none(), "endpoint {:?} assigned twice", side);
        if slot.is_none() {
            *slot = Some(v);
        }
    }
}
