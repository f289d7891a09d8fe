//! Graph layout state and its energy function.

use super::config::Weights;
use crate::anneal::CostModel;
use crate::geometry::{self, Point, SegmentRelation};
use crate::rank;
use rand::Rng;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// Coordinate range `0..DEFAULT_SPAN` used by random jump moves.
pub(crate) const DEFAULT_SPAN: u32 = 10;

/// Per-term counts behind the scalar energy.
///
/// Diagnostic counterpart of [`LayoutModel::energy`]: the same pass,
/// reported term by term instead of collapsed into one weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyBreakdown {
    /// Vertex pairs closer than one unit.
    pub node_node: usize,

    /// Vertices on the interior of an edge they do not end.
    pub node_edge: usize,

    /// Properly crossing edge pairs.
    pub edge_edge_intersect: usize,

    /// Colinearly overlapping edge pairs.
    pub edge_edge_overlap: usize,

    /// Edges neither axis-aligned nor rank-respecting.
    pub rank_violations: usize,

    /// Sum of Euclidean edge lengths.
    pub total_edge_length: f64,
}

impl EnergyBreakdown {
    /// Collapses the terms into the scalar energy under `weights`.
    pub fn weighted(&self, weights: &Weights) -> f64 {
        self.node_node as f64 * weights.node_node
            + self.node_edge as f64 * weights.node_edge
            + self.edge_edge_intersect as f64 * weights.edge_edge_intersect
            + self.edge_edge_overlap as f64 * weights.edge_edge_overlap
            + self.rank_violations as f64 * weights.rank
            + self.total_edge_length * weights.length
    }
}

/// Undo token for one position mutation: the moved vertex and where it
/// was. Created by [`LayoutModel::propose_move`], consumed by the
/// matching [`LayoutModel::undo_move`].
#[derive(Debug, Clone)]
pub struct MoveRecord<V> {
    vertex: V,
    prior: Point,
}

/// Mutable layout state: one position per vertex, plus the immutable
/// edge list and rank assignment shared by every clone.
///
/// Only the positions ever change after construction. Cloning copies
/// the positions and shares the rest, so a clone can be mutated freely
/// without touching the original.
#[derive(Debug, Clone)]
pub struct LayoutModel<V> {
    positions: HashMap<V, Point>,
    vertices: Arc<Vec<V>>,
    edges: Arc<Vec<(V, V)>>,
    ranks: Arc<HashMap<V, u32>>,
    weights: Weights,
    span: u32,
}

impl<V> LayoutModel<V>
where
    V: Clone + Eq + Hash + Ord,
{
    /// Builds the initial state for an edge list: every endpoint
    /// ranked, and every position at the origin.
    pub fn new(edges: Vec<(V, V)>) -> Self {
        let ranks = rank::rank_edges(&edges);
        let mut vertices: Vec<V> = ranks.keys().cloned().collect();
        vertices.sort();
        let positions = vertices
            .iter()
            .map(|v| (v.clone(), Point::default()))
            .collect();
        Self {
            positions,
            vertices: Arc::new(vertices),
            edges: Arc::new(edges),
            ranks: Arc::new(ranks),
            weights: Weights::default(),
            span: DEFAULT_SPAN,
        }
    }

    /// Replaces the scoring weights.
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the coordinate range `0..span` used by random jump moves.
    /// Spans below 1 are clamped to 1.
    pub fn with_span(mut self, span: u32) -> Self {
        self.span = span.max(1);
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Current position of every vertex.
    pub fn positions(&self) -> &HashMap<V, Point> {
        &self.positions
    }

    /// Rank assigned to every vertex (0 everywhere iff the graph is cyclic).
    pub fn ranks(&self) -> &HashMap<V, u32> {
        &self.ranks
    }

    pub fn edges(&self) -> &[(V, V)] {
        &self.edges
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Current position of one vertex.
    pub fn position(&self, vertex: &V) -> Option<Point> {
        self.positions.get(vertex).copied()
    }

    /// Overrides one vertex position. Unknown vertices are ignored.
    pub fn set_position(&mut self, vertex: &V, position: Point) {
        if let Some(slot) = self.positions.get_mut(vertex) {
            *slot = position;
        }
    }

    /// Scores the current configuration. Lower is better, zero ideal.
    pub fn energy(&self) -> f64 {
        self.breakdown().weighted(&self.weights)
    }

    /// Computes every energy term individually.
    pub fn breakdown(&self) -> EnergyBreakdown {
        let mut out = EnergyBreakdown::default();

        // Vertex pairs packed too close together.
        for (i, a) in self.vertices.iter().enumerate() {
            let pa = self.positions[a];
            for b in &self.vertices[i + 1..] {
                if pa.distance(self.positions[b]) < 1.0 {
                    out.node_node += 1;
                }
            }
        }

        // Vertices sitting on the interior of an unrelated edge.
        for (a, b) in self.edges.iter() {
            let (pa, pb) = (self.positions[a], self.positions[b]);
            for vertex in self.vertices.iter() {
                if vertex == a || vertex == b {
                    continue;
                }
                if geometry::point_on_segment(pa, pb, self.positions[vertex]) {
                    out.node_edge += 1;
                }
            }
        }

        // Pairwise edge crossings and colinear overlaps.
        for (i, (a, b)) in self.edges.iter().enumerate() {
            let (p0, p1) = (self.positions[a], self.positions[b]);
            for (c, d) in &self.edges[i + 1..] {
                match geometry::segments_intersect(
                    p0,
                    p1,
                    self.positions[c],
                    self.positions[d],
                ) {
                    SegmentRelation::Intersect => out.edge_edge_intersect += 1,
                    SegmentRelation::Overlap => out.edge_edge_overlap += 1,
                    SegmentRelation::Separate => {}
                }
            }
        }

        // Total length, plus the orthogonality/rank term.
        for (a, b) in self.edges.iter() {
            let (pa, pb) = (self.positions[a], self.positions[b]);
            out.total_edge_length += pa.distance(pb);
            if !self.edge_conforms(a, b, pa, pb) {
                out.rank_violations += 1;
            }
        }

        out
    }

    /// An edge conforms when it is axis-aligned, or when both endpoints
    /// carry valid ranks and y increases strictly with rank along it.
    /// Equal ranks place no constraint beyond axis alignment being
    /// unnecessary.
    fn edge_conforms(&self, a: &V, b: &V, pa: Point, pb: Point) -> bool {
        if pa.x == pb.x || pa.y == pb.y {
            return true;
        }
        let (ra, rb) = (self.ranks[a], self.ranks[b]);
        if ra == 0 || rb == 0 {
            return false;
        }
        match ra.cmp(&rb) {
            Ordering::Less => pa.y < pb.y,
            Ordering::Greater => pa.y > pb.y,
            Ordering::Equal => true,
        }
    }

    /// Mutates one uniformly chosen vertex and returns the undo token.
    ///
    /// Half of the moves jitter the vertex by at most one unit per axis
    /// (local refinement); the other half teleport it uniformly over
    /// the `0..span` grid (global escape from local minima).
    pub fn propose_move<R: Rng>(&mut self, rng: &mut R) -> MoveRecord<V> {
        let vertex = self.vertices[rng.random_range(0..self.vertices.len())].clone();
        let prior = self.positions[&vertex];
        let next = if rng.random::<bool>() {
            Self::jitter(prior, rng)
        } else {
            self.jump(rng)
        };
        self.positions.insert(vertex.clone(), next);
        MoveRecord { vertex, prior }
    }

    fn jitter<R: Rng>(from: Point, rng: &mut R) -> Point {
        loop {
            let dx = rng.random_range(-1..=1);
            let dy = rng.random_range(-1..=1);
            if dx != 0 || dy != 0 {
                return Point::new(from.x + dx as f64, from.y + dy as f64);
            }
        }
    }

    fn jump<R: Rng>(&self, rng: &mut R) -> Point {
        Point::new(
            rng.random_range(0..self.span) as f64,
            rng.random_range(0..self.span) as f64,
        )
    }

    /// Restores the prior position of the recorded vertex. Must follow
    /// the `propose_move` call that produced `record`.
    pub fn undo_move(&mut self, record: MoveRecord<V>) {
        self.positions.insert(record.vertex, record.prior);
    }

    /// Scatters every vertex uniformly over a compact square grid just
    /// large enough to hold the whole graph.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        let side = (self.vertices.len() as f64).sqrt().ceil().max(1.0) as u32;
        for i in 0..self.vertices.len() {
            let position = Point::new(
                rng.random_range(0..side) as f64,
                rng.random_range(0..side) as f64,
            );
            let vertex = self.vertices[i].clone();
            self.positions.insert(vertex, position);
        }
    }

    /// Keeps the best of `tries` random scatters. A cheap way to start
    /// the search from something better than a single arbitrary state.
    pub fn random_start<R: Rng>(&mut self, tries: usize, rng: &mut R) {
        let mut best = self.positions.clone();
        let mut best_energy = self.energy();
        for _ in 0..tries {
            self.randomize(rng);
            let energy = self.energy();
            if energy < best_energy {
                best_energy = energy;
                best = self.positions.clone();
            }
        }
        self.positions = best;
    }
}

impl<V> CostModel for LayoutModel<V>
where
    V: Clone + Eq + Hash + Ord,
{
    type Move = MoveRecord<V>;

    fn energy(&self) -> f64 {
        LayoutModel::energy(self)
    }

    fn propose_move<R: Rng>(&mut self, rng: &mut R) -> MoveRecord<V> {
        LayoutModel::propose_move(self, rng)
    }

    fn undo_move(&mut self, record: MoveRecord<V>) {
        LayoutModel::undo_move(self, record)
    }
}
