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

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use ordered_float::NotNan;

use crate::geometry::Point2;
use crate::numeric::scalar::Scalar;
use crate::voronoi::beachline::ArcId;
use crate::voronoi::context::SweepContext;

/// A pending circle event: the sweep position at which the arc is
/// predicted to vanish at `vertex`.
#[derive(Debug, Clone, Copy)]
struct CircleEvent<T: Scalar> {
    ystar: NotNan<T>,
    x: NotNan<T>,
    arc: ArcId,
    generation: u64,
    vertex: Point2<T>,
}

impl<T: Scalar> PartialEq for CircleEvent<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ystar == other.ystar && self.x == other.x
    }
}

impl<T: Scalar> Eq for CircleEvent<T> {}

impl<T: Scalar> Ord for CircleEvent<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ystar.cmp(&other.ystar).then(self.x.cmp(&other.x))
    }
}

impl<T: Scalar> PartialOrd for CircleEvent<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-queue of circle events keyed by `(vertex.y + offset, vertex.x)`.
///
/// Deletion is lazy: removing the event of an arc bumps that arc's
/// generation counter, and stale heap entries are skipped on the way out.
/// An arc has at most one live event at any time.
#[derive(Debug)]
pub(crate) struct EventQueue<T: Scalar> {
    heap: BinaryHeap<Reverse<CircleEvent<T>>>,
    generations: Vec<u64>,
}

impl<T: Scalar> EventQueue<T> {
    pub fn new(ctx: &SweepContext<T>) -> Self {
        EventQueue {
            heap: BinaryHeap::with_capacity(4 * ctx.sqrt_sites),
            generations: Vec::new(),
        }
    }

    fn generation(&mut self, arc: ArcId) -> &mut u64 {
        let idx = arc.index();
        if idx >= self.generations.len() {
            self.generations.resize(idx + 1, 0);
        }
        &mut self.generations[idx]
    }

    /// Queue a circle event for `arc`, keyed at `vertex.y + offset`.
    /// Non-finite keys come from degenerate intersections and are refused.
    pub fn insert(&mut self, arc: ArcId, vertex: Point2<T>, offset: T) {
        let key = Point2::new(vertex.x, vertex.y + offset);
        if !key.is_finite() || !vertex.is_finite() {
            return;
        }
        let (Ok(ystar), Ok(x)) = (NotNan::new(key.y), NotNan::new(key.x)) else {
            return;
        };
        let generation = {
            let g = self.generation(arc);
            *g += 1;
            *g
        };
        self.heap.push(Reverse(CircleEvent {
            ystar,
            x,
            arc,
            generation,
            vertex,
        }));
    }

    /// Invalidate any pending event owned by `arc`.
    pub fn delete(&mut self, arc: ArcId) {
        *self.generation(arc) += 1;
    }

    fn prune(&mut self) {
        while let Some(Reverse(ev)) = self.heap.peek() {
            let current = self.generations.get(ev.arc.index()).copied().unwrap_or(0);
            if current == ev.generation {
                break;
            }
            self.heap.pop();
        }
    }

    /// True when no live events remain.
    pub fn is_empty(&mut self) -> bool {
        self.prune();
        self.heap.is_empty()
    }

    /// The `(x, y*)` key of the next live event, if any.
    pub fn min(&mut self) -> Option<Point2<T>> {
        self.prune();
        self.heap
            .peek()
            .map(|Reverse(ev)| Point2::new(ev.x.into_inner(), ev.ystar.into_inner()))
    }

    /// Pop the next live event, yielding the vanishing arc and its vertex.
    pub fn extract_min(&mut self) -> Option<(ArcId, Point2<T>)> {
        self.prune();
        self.heap.pop().map(|Reverse(ev)| (ev.arc, ev.vertex))
    }
}
