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

use voromap::{Point2, Rect, Voronoi};

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect<f64> {
    Rect::new(Point2::new(x0, y0), Point2::new(x1, y1))
}

fn assert_all_finite(v: &Voronoi<f64>) {
    for e in v.edges() {
        assert!(e.start.is_finite(), "non-finite start in {:?}", e);
        assert!(e.end.is_finite(), "non-finite end in {:?}", e);
    }
}

#[test]
fn vertically_collinear_sites_yield_parallel_bisectors() {
    let sites = [
        Point2::new(5.0, 1.0),
        Point2::new(5.0, 2.0),
        Point2::new(5.0, 3.0),
    ];
    let v = Voronoi::new(&sites, &rect(0.0, 0.0, 10.0, 10.0));

    assert_eq!(v.edges().len(), 2);
    let mut ys: Vec<f64> = v.edges().iter().map(|e| e.start.y).collect();
    ys.sort_by(f64::total_cmp);
    assert_eq!(ys, vec![1.5, 2.5]);
    for e in v.edges() {
        assert_eq!(e.start.y, e.end.y);
        let mut xs = [e.start.x, e.end.x];
        xs.sort_by(f64::total_cmp);
        assert_eq!(xs, [0.0, 10.0]);
    }
}

#[test]
fn horizontally_collinear_sites_yield_parallel_bisectors() {
    let sites = [
        Point2::new(1.0, 5.0),
        Point2::new(2.0, 5.0),
        Point2::new(3.0, 5.0),
    ];
    let v = Voronoi::new(&sites, &rect(0.0, 0.0, 10.0, 10.0));

    assert_eq!(v.edges().len(), 2);
    let mut xs: Vec<f64> = v.edges().iter().map(|e| e.start.x).collect();
    xs.sort_by(f64::total_cmp);
    assert_eq!(xs, vec![1.5, 2.5]);
    for e in v.edges() {
        assert_eq!(e.start.x, e.end.x);
    }
}

#[test]
fn epsilon_close_sites_produce_no_nan_or_infinity() {
    let sites = [
        Point2::new(50.0, 50.0),
        Point2::new(50.0, 50.0 + 1e-12),
        Point2::new(20.0, 40.0),
        Point2::new(20.0 + 1e-12, 40.0),
        Point2::new(10.0, 10.0),
        Point2::new(90.0, 20.0),
        Point2::new(30.0, 80.0),
    ];
    let v = Voronoi::new(&sites, &rect(0.0, 0.0, 100.0, 100.0));
    assert_all_finite(&v);
}

#[test]
fn two_epsilon_close_sites_alone_stay_finite() {
    let sites = [Point2::new(1.0, 1.0), Point2::new(1.0 + 1e-13, 1.0)];
    let v = Voronoi::new(&sites, &rect(0.0, 0.0, 2.0, 2.0));
    assert_all_finite(&v);
}

#[test]
fn bisector_outside_the_window_is_dropped() {
    let sites = [Point2::new(0.0, 0.0), Point2::new(0.0, 2.0)];
    // The bisector runs along y = 1, nowhere near this window.
    let v = Voronoi::new(&sites, &rect(10.0, 10.0, 20.0, 20.0));
    assert!(v.edges().is_empty());
}

#[test]
fn partially_outside_edges_are_truncated_to_the_window() {
    let sites = [
        Point2::new(0.0, 0.0),
        Point2::new(4.0, 0.0),
        Point2::new(2.0, 3.0),
    ];
    // Window that cuts through the diagram around the circumcenter.
    let bounds = rect(0.0, 0.0, 4.0, 3.0);
    let v = Voronoi::new(&sites, &bounds);
    assert!(!v.edges().is_empty());
    for e in v.edges() {
        assert!(bounds.contains(&e.start), "{:?} outside {:?}", e.start, bounds);
        assert!(bounds.contains(&e.end), "{:?} outside {:?}", e.end, bounds);
    }
}
