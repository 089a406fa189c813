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

use num_traits::Float;

use crate::geometry::Point2;
use crate::numeric::scalar::Scalar;

/// A line in general form `a*x + b*y = c`.
///
/// The three-coefficient form has no vertical-line singularity. Bisector
/// construction normalizes so that the dominant coefficient is one, which
/// the breakpoint predicate and the clipper both rely on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2<T: Scalar> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T: Scalar> Line2<T> {
    /// Perpendicular bisector of the segment from `p1` to `p2`.
    ///
    /// Normalized on the larger direction component: `a == 1` when the
    /// segment is wider than tall, `b == 1` otherwise.
    pub fn bisector(p1: &Point2<T>, p2: &Point2<T>) -> Self {
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        let c = p1.x * dx + p1.y * dy + (dx * dx + dy * dy) * T::half();

        if Float::abs(dx) > Float::abs(dy) {
            Line2 {
                a: T::one(),
                b: dy / dx,
                c: c / dx,
            }
        } else {
            Line2 {
                a: dx / dy,
                b: T::one(),
                c: c / dy,
            }
        }
    }

    /// Intersection point of two lines.
    ///
    /// Returns `None` when the lines are parallel, when the determinant is
    /// too small to trust, or when the division produces a non-finite
    /// coordinate, so NaN and infinity never leave this function.
    pub fn intersection(&self, other: &Self) -> Option<Point2<T>> {
        let d = self.a * other.b - self.b * other.a;
        if Float::abs(d) < T::tolerance() {
            return None;
        }
        let x = (self.c * other.b - other.c * self.b) / d;
        let y = (other.c * self.a - self.c * other.a) / d;
        let p = Point2::new(x, y);
        if !p.is_finite() {
            return None;
        }
        Some(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_line(l: &Line2<f64>, p: &Point2<f64>) -> bool {
        (l.a * p.x + l.b * p.y - l.c).abs() < 1e-12
    }

    #[test]
    fn bisector_passes_through_midpoint() {
        let pairs = [
            (Point2::new(0.0, 0.0), Point2::new(4.0, 0.0)),
            (Point2::new(0.0, 0.0), Point2::new(0.0, 4.0)),
            (Point2::new(-1.0, 2.0), Point2::new(3.0, -5.0)),
        ];
        for (p1, p2) in pairs {
            let l = Line2::bisector(&p1, &p2);
            let mid = Point2::new((p1.x + p2.x) * 0.5, (p1.y + p2.y) * 0.5);
            assert!(on_line(&l, &mid));
        }
    }

    #[test]
    fn bisector_of_vertical_pair_is_horizontal() {
        let l = Line2::bisector(&Point2::new(0.0, 0.0), &Point2::new(0.0, 2.0));
        assert_eq!(l.a, 0.0);
        assert_eq!(l.b, 1.0);
        assert_eq!(l.c, 1.0);
    }

    #[test]
    fn bisector_of_horizontal_pair_is_vertical() {
        let l = Line2::bisector(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0));
        assert_eq!(l.a, 1.0);
        assert_eq!(l.b, 0.0);
        assert_eq!(l.c, 1.0);
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let l1 = Line2 { a: 0.0, b: 1.0, c: 1.0 };
        let l2 = Line2 { a: 0.0, b: 1.0, c: 3.0 };
        assert_eq!(l1.intersection(&l2), None);
    }

    #[test]
    fn near_parallel_lines_are_rejected() {
        let l1 = Line2 { a: 0.0, b: 1.0, c: 0.0 };
        let l2 = Line2 { a: 1.0e-12, b: 1.0, c: 5.0 };
        assert_eq!(l1.intersection(&l2), None);
    }

    #[test]
    fn perpendicular_lines_intersect() {
        let l1 = Line2 { a: 1.0, b: 0.0, c: 1.0 };
        let l2 = Line2 { a: 0.0, b: 1.0, c: 2.0 };
        assert_eq!(l1.intersection(&l2), Some(Point2::new(1.0, 2.0)));
    }
}
