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

use voromap::{Line2, Point2, Rect};

#[test]
fn test_distance() {
    let p1 = Point2::new(0.0, 0.0);
    let p2 = Point2::new(3.0, 4.0);
    assert_eq!(p1.distance_to(&p2), 5.0);
}

#[test]
fn test_bounding_rect_of_points() {
    let points = [
        Point2::new(2.0, -1.0),
        Point2::new(-3.0, 4.0),
        Point2::new(0.5, 0.5),
    ];
    let r = Rect::bounding(&points).unwrap();
    assert_eq!(r.min, Point2::new(-3.0, -1.0));
    assert_eq!(r.max, Point2::new(2.0, 4.0));
    assert_eq!(r.width(), 5.0);
    assert_eq!(r.height(), 5.0);
}

#[test]
fn test_bounding_rect_of_nothing() {
    assert_eq!(Rect::<f64>::bounding(&[]), None);
}

#[test]
fn test_rect_contains_is_boundary_inclusive() {
    let r = Rect::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
    assert!(r.contains(&Point2::new(0.0, 0.0)));
    assert!(r.contains(&Point2::new(1.0, 1.0)));
    assert!(r.contains(&Point2::new(0.5, 1.0)));
    assert!(!r.contains(&Point2::new(0.5, 1.0 + 1e-9)));
    assert!(!r.contains(&Point2::new(-1e-9, 0.5)));
}

#[test]
fn test_bisector_intersection_is_the_circumcenter() {
    let a: Point2<f64> = Point2::new(0.0, 0.0);
    let b = Point2::new(4.0, 0.0);
    let c = Point2::new(2.0, 3.0);

    let ab = Line2::bisector(&a, &b);
    let ac = Line2::bisector(&a, &c);
    let center = ab.intersection(&ac).unwrap();

    assert!((center.x - 2.0).abs() < 1e-12);
    assert!((center.y - 5.0 / 6.0).abs() < 1e-12);

    let r = center.distance_to(&a);
    assert!((center.distance_to(&b) - r).abs() < 1e-12);
    assert!((center.distance_to(&c) - r).abs() < 1e-12);
}

#[test]
fn test_coincident_points_never_intersect_anything() {
    let p = Point2::new(1.0, 1.0);
    let degenerate = Line2::bisector(&p, &p);
    let other = Line2::bisector(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0));
    assert_eq!(degenerate.intersection(&other), None);
    assert_eq!(other.intersection(&degenerate), None);
}
