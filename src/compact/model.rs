//! Struct-of-arrays layout state with fixed capacity.

use crate::anneal::CostModel;
use crate::geometry::{self, Point, SegmentRelation};
use crate::layout::{EnergyBreakdown, Weights, DEFAULT_SPAN};
use crate::rank;
use rand::Rng;
use std::collections::HashMap;
use std::hash::Hash;

/// Maximum number of vertices a compact model can hold.
pub const MAX_NODES: usize = 128;

/// Maximum number of edges a compact model can hold.
pub const MAX_EDGES: usize = 128;

/// Undo token for one compact move.
#[derive(Debug, Clone, Copy)]
pub struct CompactMove {
    index: usize,
    x: f32,
    y: f32,
}

/// Fixed-capacity layout state over dense vertex indices.
///
/// Construction assigns indices in sorted vertex order; the caller
/// keeps the returned vertex list to translate positions back. All
/// arrays are inline, so `Clone` is a flat copy.
#[derive(Clone)]
pub struct CompactModel {
    node_count: usize,
    edge_count: usize,
    xs: [f32; MAX_NODES],
    ys: [f32; MAX_NODES],
    ranks: [u32; MAX_NODES],
    edge_a: [usize; MAX_EDGES],
    edge_b: [usize; MAX_EDGES],
    weights: Weights,
    span: u32,
}

impl CompactModel {
    /// Builds a compact model from an edge list, returning the model
    /// and the vertex order used for index assignment. Inputs beyond
    /// the fixed capacity are rejected before any search begins.
    pub fn from_edges<V>(edges: &[(V, V)]) -> Result<(Self, Vec<V>), String>
    where
        V: Clone + Eq + Hash + Ord,
    {
        if edges.len() > MAX_EDGES {
            return Err(format!(
                "edge count {} exceeds fixed capacity {}",
                edges.len(),
                MAX_EDGES
            ));
        }
        let ranks_by_vertex = rank::rank_edges(edges);
        let mut vertices: Vec<V> = ranks_by_vertex.keys().cloned().collect();
        vertices.sort();
        if vertices.len() > MAX_NODES {
            return Err(format!(
                "vertex count {} exceeds fixed capacity {}",
                vertices.len(),
                MAX_NODES
            ));
        }

        let index: HashMap<&V, usize> = vertices.iter().enumerate().map(|(i, v)| (v, i)).collect();
        let mut model = Self {
            node_count: vertices.len(),
            edge_count: edges.len(),
            xs: [0.0; MAX_NODES],
            ys: [0.0; MAX_NODES],
            ranks: [0; MAX_NODES],
            edge_a: [0; MAX_EDGES],
            edge_b: [0; MAX_EDGES],
            weights: Weights::default(),
            span: DEFAULT_SPAN,
        };
        for (i, vertex) in vertices.iter().enumerate() {
            model.ranks[i] = ranks_by_vertex[vertex];
        }
        for (i, (a, b)) in edges.iter().enumerate() {
            model.edge_a[i] = index[a];
            model.edge_b[i] = index[b];
        }
        Ok((model, vertices))
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

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Position of the vertex at `index`.
    pub fn position(&self, index: usize) -> Point {
        Point::new(self.xs[index] as f64, self.ys[index] as f64)
    }

    /// Overrides the position of the vertex at `index`. Out-of-range
    /// indices are ignored.
    pub fn set_position(&mut self, index: usize, position: Point) {
        if index < self.node_count {
            self.xs[index] = position.x as f32;
            self.ys[index] = position.y as f32;
        }
    }

    /// Rank of the vertex at `index`.
    pub fn rank(&self, index: usize) -> u32 {
        self.ranks[index]
    }

    /// Scores the current configuration. Lower is better, zero ideal.
    pub fn energy(&self) -> f64 {
        self.breakdown().weighted(&self.weights)
    }

    /// Computes every energy term individually. Same formula as the
    /// baseline model, over dense indices.
    pub fn breakdown(&self) -> EnergyBreakdown {
        let mut out = EnergyBreakdown::default();

        for i in 0..self.node_count {
            let pi = self.position(i);
            for j in i + 1..self.node_count {
                if pi.distance(self.position(j)) < 1.0 {
                    out.node_node += 1;
                }
            }
        }

        for e in 0..self.edge_count {
            let (a, b) = (self.edge_a[e], self.edge_b[e]);
            let (pa, pb) = (self.position(a), self.position(b));
            for i in 0..self.node_count {
                if i == a || i == b {
                    continue;
                }
                if geometry::point_on_segment(pa, pb, self.position(i)) {
                    out.node_edge += 1;
                }
            }
        }

        for e in 0..self.edge_count {
            let (p0, p1) = (self.position(self.edge_a[e]), self.position(self.edge_b[e]));
            for f in e + 1..self.edge_count {
                let (p2, p3) = (self.position(self.edge_a[f]), self.position(self.edge_b[f]));
                match geometry::segments_intersect(p0, p1, p2, p3) {
                    SegmentRelation::Intersect => out.edge_edge_intersect += 1,
                    SegmentRelation::Overlap => out.edge_edge_overlap += 1,
                    SegmentRelation::Separate => {}
                }
            }
        }

        for e in 0..self.edge_count {
            let (a, b) = (self.edge_a[e], self.edge_b[e]);
            let (pa, pb) = (self.position(a), self.position(b));
            out.total_edge_length += pa.distance(pb);
            if !self.edge_conforms(a, b, pa, pb) {
                out.rank_violations += 1;
            }
        }

        out
    }

    fn edge_conforms(&self, a: usize, b: usize, pa: Point, pb: Point) -> bool {
        if pa.x == pb.x || pa.y == pb.y {
            return true;
        }
        let (ra, rb) = (self.ranks[a], self.ranks[b]);
        if ra == 0 || rb == 0 {
            return false;
        }
        match ra.cmp(&rb) {
            std::cmp::Ordering::Less => pa.y < pb.y,
            std::cmp::Ordering::Greater => pa.y > pb.y,
            std::cmp::Ordering::Equal => true,
        }
    }

    /// Mutates one uniformly chosen vertex and returns the undo token.
    /// Same half-jitter half-jump policy as the baseline model.
    pub fn propose_move<R: Rng>(&mut self, rng: &mut R) -> CompactMove {
        let index = rng.random_range(0..self.node_count);
        let record = CompactMove {
            index,
            x: self.xs[index],
            y: self.ys[index],
        };
        if rng.random::<bool>() {
            loop {
                let dx = rng.random_range(-1..=1);
                let dy = rng.random_range(-1..=1);
                if dx != 0 || dy != 0 {
                    self.xs[index] += dx as f32;
                    self.ys[index] += dy as f32;
                    break;
                }
            }
        } else {
            self.xs[index] = rng.random_range(0..self.span) as f32;
            self.ys[index] = rng.random_range(0..self.span) as f32;
        }
        record
    }

    /// Restores the prior position of the recorded vertex.
    pub fn undo_move(&mut self, record: CompactMove) {
        self.xs[record.index] = record.x;
        self.ys[record.index] = record.y;
    }

    /// Scatters every vertex uniformly over a compact square grid just
    /// large enough to hold the whole graph.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        let side = (self.node_count as f64).sqrt().ceil().max(1.0) as u32;
        for i in 0..self.node_count {
            self.xs[i] = rng.random_range(0..side) as f32;
            self.ys[i] = rng.random_range(0..side) as f32;
        }
    }

    /// Keeps the best of `tries` random scatters.
    pub fn random_start<R: Rng>(&mut self, tries: usize, rng: &mut R) {
        let mut best = self.clone();
        let mut best_energy = self.energy();
        for _ in 0..tries {
            self.randomize(rng);
            let energy = self.energy();
            if energy < best_energy {
                best_energy = energy;
                best = self.clone();
            }
        }
        *self = best;
    }
}

impl CostModel for CompactModel {
    type Move = CompactMove;

    fn energy(&self) -> f64 {
        CompactModel::energy(self)
    }

    fn propose_move<R: Rng>(&mut self, rng: &mut R) -> CompactMove {
        CompactModel::propose_move(self, rng)
    }

    fn undo_move(&mut self, record: CompactMove) {
        CompactModel::undo_move(self, record)
    }
}
