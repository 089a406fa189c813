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

use crate::geometry::Point2;
use crate::numeric::scalar::Scalar;
use crate::voronoi::context::SweepContext;
use crate::voronoi::edge::{Edge, EdgeId, Side};
use crate::voronoi::site::Site;

/// Stable handle to an arc node in the beach-line arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ArcId(usize);

impl ArcId {
    pub fn index(self) -> usize {
        self.0
    }
}

const NIL: usize = usize::MAX;
const LEFT_END: usize = 0;
const RIGHT_END: usize = 1;

/// One half-edge on the beach-line: the boundary a parabolic arc traces.
#[derive(Debug, Clone)]
struct ArcNode {
    left: usize,
    right: usize,
    edge: Option<EdgeId>,
    side: Side,
    removed: bool,
}

/// Doubly linked, ordered sequence of beach-line arcs bounded by two
/// immutable sentinels.
///
/// Nodes live in an arena and are never reused, so a handle to a removed
/// arc stays recognizable as stale. `left_bound` lookups are seeded from a
/// bucket over the input x extent and then walk the list with the
/// breakpoint predicate.
#[derive(Debug)]
pub(crate) struct Beachline<T: Scalar> {
    arcs: Vec<ArcNode>,
    hash: Vec<Option<usize>>,
    xmin: T,
    deltax: T,
}

impl<T: Scalar> Beachline<T> {
    pub fn new(ctx: &SweepContext<T>) -> Self {
        let size = 2 * ctx.sqrt_sites;
        let mut arcs = Vec::with_capacity(size);
        arcs.push(ArcNode {
            left: NIL,
            right: RIGHT_END,
            edge: None,
            side: Side::Left,
            removed: false,
        });
        arcs.push(ArcNode {
            left: LEFT_END,
            right: NIL,
            edge: None,
            side: Side::Left,
            removed: false,
        });
        let mut hash = vec![None; size];
        hash[0] = Some(LEFT_END);
        hash[size - 1] = Some(RIGHT_END);
        Beachline {
            arcs,
            hash,
            xmin: ctx.bounds.min.x,
            deltax: ctx.bounds.width(),
        }
    }

    /// New unlinked arc tracking `side` of `edge`.
    pub fn create(&mut self, edge: EdgeId, side: Side) -> ArcId {
        self.arcs.push(ArcNode {
            left: NIL,
            right: NIL,
            edge: Some(edge),
            side,
            removed: false,
        });
        ArcId(self.arcs.len() - 1)
    }

    pub fn insert(&mut self, after: ArcId, arc: ArcId) {
        let right = self.arcs[after.0].right;
        self.arcs[arc.0].left = after.0;
        self.arcs[arc.0].right = right;
        self.arcs[right].left = arc.0;
        self.arcs[after.0].right = arc.0;
    }

    /// Unlink `arc`. The node stays in the arena, flagged removed, so any
    /// bucket still pointing at it is detected and cleared on lookup.
    pub fn delete(&mut self, arc: ArcId) {
        debug_assert!(!self.arcs[arc.0].removed, "arc deleted twice");
        let l = self.arcs[arc.0].left;
        let r = self.arcs[arc.0].right;
        self.arcs[l].right = r;
        self.arcs[r].left = l;
        self.arcs[arc.0].removed = true;
    }

    pub fn left(&self, arc: ArcId) -> ArcId {
        ArcId(self.arcs[arc.0].left)
    }

    pub fn right(&self, arc: ArcId) -> ArcId {
        ArcId(self.arcs[arc.0].right)
    }

    pub fn edge(&self, arc: ArcId) -> Option<EdgeId> {
        self.arcs[arc.0].edge
    }

    pub fn side(&self, arc: ArcId) -> Side {
        self.arcs[arc.0].side
    }

    /// Site of the region to the left of `arc`; an arc with no edge yet
    /// (a sentinel) maps to the bottom-most site.
    pub fn left_region(&self, arc: ArcId, edges: &[Edge<T>], bottom: Site<T>) -> Site<T> {
        let node = &self.arcs[arc.0];
        match node.edge {
            None => bottom,
            Some(e) => match node.side {
                Side::Left => edges[e].sites[0],
                Side::Right => edges[e].sites[1],
            },
        }
    }

    /// Site of the region to the right of `arc`.
    pub fn right_region(&self, arc: ArcId, edges: &[Edge<T>], bottom: Site<T>) -> Site<T> {
        let node = &self.arcs[arc.0];
        match node.edge {
            None => bottom,
            Some(e) => match node.side {
                Side::Left => edges[e].sites[1],
                Side::Right => edges[e].sites[0],
            },
        }
    }

    fn hash_get(&mut self, bucket: usize) -> Option<usize> {
        let candidate = self.hash[bucket]?;
        if self.arcs[candidate].removed {
            self.hash[bucket] = None;
            None
        } else {
            Some(candidate)
        }
    }

    /// The arc immediately left of the vertical through `p`: the insertion
    /// anchor for a site event at `p`.
    pub fn left_bound(&mut self, p: Point2<T>, edges: &[Edge<T>]) -> ArcId {
        let size = self.hash.len();
        let rel = if self.deltax > T::zero() {
            ((p.x - self.xmin) / self.deltax).to_f64().unwrap_or(0.0)
        } else {
            0.0
        };
        let bucket = ((rel * size as f64) as usize).min(size - 1);

        let mut found = self.hash_get(bucket);
        if found.is_none() {
            for i in 1..size {
                if let Some(b) = bucket.checked_sub(i) {
                    if let Some(h) = self.hash_get(b) {
                        found = Some(h);
                        break;
                    }
                }
                if bucket + i < size {
                    if let Some(h) = self.hash_get(bucket + i) {
                        found = Some(h);
                        break;
                    }
                }
            }
        }
        // The sentinels are pinned in the outermost buckets, so the scan
        // always terminates with a live node.
        let mut he = found.unwrap_or(LEFT_END);

        if he == LEFT_END || (he != RIGHT_END && self.right_of(he, p, edges)) {
            loop {
                he = self.arcs[he].right;
                if he == RIGHT_END || !self.right_of(he, p, edges) {
                    break;
                }
            }
            he = self.arcs[he].left;
        } else {
            loop {
                he = self.arcs[he].left;
                if he == LEFT_END || self.right_of(he, p, edges) {
                    break;
                }
            }
        }

        if bucket > 0 && bucket < size - 1 {
            self.hash[bucket] = Some(he);
        }
        ArcId(he)
    }

    /// Is `p` to the right of the breakpoint traced by half-edge `arc`?
    ///
    /// The cheap site-side tests settle most queries; the remainder fall
    /// through to the parabola comparison, split on which coefficient the
    /// bisector was normalized to.
    fn right_of(&self, arc: usize, p: Point2<T>, edges: &[Edge<T>]) -> bool {
        let node = &self.arcs[arc];
        let Some(edge_id) = node.edge else {
            return false;
        };
        let e = &edges[edge_id];
        let topsite = e.sites[1].coord;

        let right_of_site = p.x > topsite.x;
        if right_of_site && node.side == Side::Left {
            return true;
        }
        if !right_of_site && node.side == Side::Right {
            return false;
        }

        let above;
        if e.line.a == T::one() {
            let dyp = p.y - topsite.y;
            let dxp = p.x - topsite.x;
            let mut fast = false;
            let mut result = if (!right_of_site && e.line.b < T::zero())
                || (right_of_site && e.line.b >= T::zero())
            {
                let a = dyp >= e.line.b * dxp;
                fast = a;
                a
            } else {
                let mut a = p.x + p.y * e.line.b > e.line.c;
                if e.line.b < T::zero() {
                    a = !a;
                }
                if !a {
                    fast = true;
                }
                a
            };
            if !fast {
                let dxs = topsite.x - e.sites[0].coord.x;
                result = e.line.b * (dxp * dxp - dyp * dyp)
                    < dxs * dyp * (T::one() + T::two() * dxp / dxs + e.line.b * e.line.b);
                if e.line.b < T::zero() {
                    result = !result;
                }
            }
            above = result;
        } else {
            let yl = e.line.c - e.line.a * p.x;
            let t1 = p.y - yl;
            let t2 = p.x - topsite.x;
            let t3 = yl - topsite.y;
            above = t1 * t1 > t2 * t2 + t3 * t3;
        }

        match node.side {
            Side::Left => above,
            Side::Right => !above,
        }
    }
}
