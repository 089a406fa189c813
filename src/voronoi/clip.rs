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
use crate::voronoi::edge::{Edge, Side};

/// Clip `edge` to `bounds`, returning the surviving segment.
///
/// Assigned endpoints are truncated to the rectangle, unassigned sides run
/// along the line until they meet it. Edges entirely outside the rectangle
/// and edges whose line is degenerate (coincident sites) yield `None`.
pub(crate) fn clip_edge<T: Scalar>(
    edge: &Edge<T>,
    bounds: &Rect<T>,
) -> Option<(Point2<T>, Point2<T>)> {
    let line = edge.line;
    let (pxmin, pxmax) = (bounds.min.x, bounds.max.x);
    let (pymin, pymax) = (bounds.min.y, bounds.max.y);

    // Orient the traversal so the parameter below runs min to max.
    let (s1, s2) = if line.a == T::one() && line.b >= T::zero() {
        (
            edge.endpoints[Side::Right.index()],
            edge.endpoints[Side::Left.index()],
        )
    } else {
        (
            edge.endpoints[Side::Left.index()],
            edge.endpoints[Side::Right.index()],
        )
    };

    let (p1, p2) = if line.a == T::one() {
        // Mostly-vertical edge, parametrized by y.
        let mut y1 = pymin;
        if let Some(s) = s1 {
            if s.y > pymin {
                y1 = s.y;
            }
        }
        if y1 > pymax {
            return None;
        }
        let mut x1 = line.c - line.b * y1;

        let mut y2 = pymax;
        if let Some(s) = s2 {
            if s.y < pymax {
                y2 = s.y;
            }
        }
        if y2 < pymin {
            return None;
        }
        let mut x2 = line.c - line.b * y2;

        if (x1 > pxmax && x2 > pxmax) || (x1 < pxmin && x2 < pxmin) {
            return None;
        }
        if x1 > pxmax {
            x1 = pxmax;
            y1 = (line.c - x1) / line.b;
        }
        if x1 < pxmin {
            x1 = pxmin;
            y1 = (line.c - x1) / line.b;
        }
        if x2 > pxmax {
            x2 = pxmax;
            y2 = (line.c - x2) / line.b;
        }
        if x2 < pxmin {
            x2 = pxmin;
            y2 = (line.c - x2) / line.b;
        }
        (Point2::new(x1, y1), Point2::new(x2, y2))
    } else {
        // Mostly-horizontal edge, parametrized by x.
        let mut x1 = pxmin;
        if let Some(s) = s1 {
            if s.x > pxmin {
                x1 = s.x;
            }
        }
        if x1 > pxmax {
            return None;
        }
        let mut y1 = line.c - line.a * x1;

        let mut x2 = pxmax;
        if let Some(s) = s2 {
            if s.x < pxmax {
                x2 = s.x;
            }
        }
        if x2 < pxmin {
            return None;
        }
        let mut y2 = line.c - line.a * x2;

        if (y1 > pymax && y2 > pymax) || (y1 < pymin && y2 < pymin) {
            return None;
        }
        if y1 > pymax {
            y1 = pymax;
            x1 = (line.c - y1) / line.a;
        }
        if y1 < pymin {
            y1 = pymin;
            x1 = (line.c - y1) / line.a;
        }
        if y2 > pymax {
            y2 = pymax;
            x2 = (line.c - y2) / line.a;
        }
        if y2 < pymin {
            y2 = pymin;
            x2 = (line.c - y2) / line.a;
        }
        (Point2::new(x1, y1), Point2::new(x2, y2))
    };

    if !p1.is_finite() || !p2.is_finite() {
        return None;
    }
    Some((p1, p2))
}
