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
use crate::voronoi::beachline::{ArcId, Beachline};
use crate::voronoi::clip::clip_edge;
use crate::voronoi::context::SweepContext;
use crate::voronoi::edge::{Edge, Side};
use crate::voronoi::event_queue::EventQueue;
use crate::voronoi::site::Site;

/// A finished diagram edge, clipped to the bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoronoiEdge<T: Scalar> {
    pub start: Point2<T>,
    pub end: Point2<T>,
    /// The two sites this edge separates.
    pub sites: [Site<T>; 2],
}

/// Planar Voronoi diagram of a point set, built with a sweep line and
/// clipped to a caller-supplied rectangle.
#[derive(Debug, Clone)]
pub struct Voronoi<T: Scalar> {
    edges: Vec<VoronoiEdge<T>>,
}

impl<T: Scalar> Voronoi<T> {
    /// Compute the diagram of `points`, clipping every edge to `bounds`.
    ///
    /// The points need not be sorted; they are ordered bottom-up internally
    /// and sites are numbered in that order. Fewer than two points yield an
    /// empty diagram.
    pub fn new(points: &[Point2<T>], bounds: &Rect<T>) -> Self {
        if points.len() < 2 {
            return Voronoi { edges: Vec::new() };
        }

        let mut sorted = points.to_vec();
        sorted.sort_by(|a, b| Site::sweep_order(a, b));
        let sites: Vec<Site<T>> = sorted
            .iter()
            .enumerate()
            .map(|(id, &coord)| Site { coord, id })
            .collect();

        let Some(ctx) = SweepContext::new(&sorted) else {
            return Voronoi { edges: Vec::new() };
        };

        let edges = sweep(&sites, &ctx)
            .iter()
            .filter_map(|e| {
                clip_edge(e, bounds).map(|(start, end)| VoronoiEdge {
                    start,
                    end,
                    sites: e.sites,
                })
            })
            .collect();
        Voronoi { edges }
    }

    pub fn edges(&self) -> &[VoronoiEdge<T>] {
        &self.edges
    }

    /// Polygon of the cell containing `point`.
    ///
    /// Not implemented: always returns an empty polygon. Kept on the public
    /// surface so callers can already code against the eventual shape.
    pub fn region(&self, _point: &Point2<T>) -> Vec<Point2<T>> {
        Vec::new()
    }
}

/// Does a site at `p` come before a circle event keyed at `key`?
/// y decides, x breaks the tie.
fn site_before<T: Scalar>(p: Point2<T>, key: Point2<T>) -> bool {
    p.y < key.y || (p.y == key.y && p.x < key.x)
}

/// Where the breakpoints carried by `left` and `right` will meet, if their
/// edges converge ahead of the sweep line.
fn intersect<T: Scalar>(
    beach: &Beachline<T>,
    edges: &[Edge<T>],
    left: ArcId,
    right: ArcId,
) -> Option<Point2<T>> {
    let e1 = &edges[beach.edge(left)?];
    let e2 = &edges[beach.edge(right)?];
    if e1.sites[1].id == e2.sites[1].id {
        // Both bound the same region; they never meet.
        return None;
    }

    let p = e1.line.intersection(&e2.line)?;

    // Judge plausibility against the half-edge whose upper site comes
    // later in sweep order.
    let e1_first = site_before(e1.sites[1].coord, e2.sites[1].coord);
    let (el, e) = if e1_first { (left, e1) } else { (right, e2) };
    let right_of_site = p.x >= e.sites[1].coord.x;
    match beach.side(el) {
        Side::Left if right_of_site => None,
        Side::Right if !right_of_site => None,
        _ => Some(p),
    }
}

/// The sweep loop: consume site and circle events in order of increasing
/// y, maintaining the beach-line, and accumulate every bisector edge.
fn sweep<T: Scalar>(sites: &[Site<T>], ctx: &SweepContext<T>) -> Vec<Edge<T>> {
    let mut edges: Vec<Edge<T>> = Vec::new();
    let mut beach = Beachline::new(ctx);
    let mut queue = EventQueue::new(ctx);

    // The lowest site never gets its own arc; it is the region below
    // everything until another site's arc claims part of it.
    let bottom = sites[0];
    let mut pending = sites[1..].iter().copied();
    let mut next_site = pending.next();

    loop {
        if let Some(site) = next_site {
            let site_first = queue.is_empty()
                || queue.min().is_some_and(|key| site_before(site.coord, key));
            if site_first {
                // Site event: split the arc above the new site with a
                // fresh bisector, one half-edge per side.
                let lbnd = beach.left_bound(site.coord, &edges);
                let rbnd = beach.right(lbnd);
                let bot = beach.right_region(lbnd, &edges, bottom);

                let edge_id = edges.len();
                edges.push(Edge::bisector(bot, site));

                let left_half = beach.create(edge_id, Side::Left);
                beach.insert(lbnd, left_half);
                if let Some(p) = intersect(&beach, &edges, lbnd, left_half) {
                    queue.delete(lbnd);
                    queue.insert(lbnd, p, p.distance_to(&site.coord));
                }

                let right_half = beach.create(edge_id, Side::Right);
                beach.insert(left_half, right_half);
                if let Some(p) = intersect(&beach, &edges, right_half, rbnd) {
                    queue.insert(right_half, p, p.distance_to(&site.coord));
                }

                next_site = pending.next();
                continue;
            }
        }

        if let Some((lbnd, vertex)) = queue.extract_min() {
            // Circle event: the arc at `lbnd` vanishes at `vertex`, closing
            // both of its bounding edges there.
            let llbnd = beach.left(lbnd);
            let rbnd = beach.right(lbnd);
            let rrbnd = beach.right(rbnd);
            let bot = beach.left_region(lbnd, &edges, bottom);
            let top = beach.right_region(rbnd, &edges, bottom);

            if let Some(e) = beach.edge(lbnd) {
                edges[e].set_endpoint(beach.side(lbnd), vertex);
            }
            if let Some(e) = beach.edge(rbnd) {
                edges[e].set_endpoint(beach.side(rbnd), vertex);
            }
            beach.delete(lbnd);
            queue.delete(rbnd);
            beach.delete(rbnd);

            // Keep the lower site as the left region; when the order flips,
            // the surviving half-edge tracks the right side instead.
            let (bot, top, side) = if bot.coord.y > top.coord.y {
                (top, bot, Side::Right)
            } else {
                (bot, top, Side::Left)
            };

            let edge_id = edges.len();
            edges.push(Edge::bisector(bot, top));
            let bisector = beach.create(edge_id, side);
            beach.insert(llbnd, bisector);
            edges[edge_id].set_endpoint(side.other(), vertex);

            if let Some(p) = intersect(&beach, &edges, llbnd, bisector) {
                queue.delete(llbnd);
                queue.insert(llbnd, p, p.distance_to(&bot.coord));
            }
            if let Some(p) = intersect(&beach, &edges, bisector, rrbnd) {
                queue.insert(bisector, p, p.distance_to(&bot.coord));
            }
            continue;
        }

        break;
    }

    // Every bisector ever created is a diagram edge; edges still on the
    // beach-line simply kept one or both endpoints unassigned.
    edges
}
