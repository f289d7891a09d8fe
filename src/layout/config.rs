//! Cost-model weight configuration.

/// Weight applied to each term of the layout energy.
///
/// All weights must be non-negative. The defaults punish hard
/// geometric violations (coincident vertices, overlapping edges) far
/// harder than soft aesthetics (edge length), so the search resolves
/// collisions first and compacts the drawing second.
///
/// # Examples
///
/// ```
/// use graph_anneal::layout::Weights;
///
/// let weights = Weights::default().with_rank(5.0).with_length(2.0);
/// assert!(weights.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weights {
    /// Per pair of vertices closer than one unit.
    pub node_node: f64,

    /// Per vertex lying on the interior of an edge it does not end.
    pub node_edge: f64,

    /// Per properly crossing edge pair.
    pub edge_edge_intersect: f64,

    /// Per colinearly overlapping edge pair.
    pub edge_edge_overlap: f64,

    /// Per edge that is neither axis-aligned nor rank-respecting.
    pub rank: f64,

    /// Per unit of total edge length.
    pub length: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            node_node: 100.0,
            node_edge: 100.0,
            edge_edge_intersect: 50.0,
            edge_edge_overlap: 100.0,
            rank: 10.0,
            length: 1.0,
        }
    }
}

impl Weights {
    pub fn with_node_node(mut self, w: f64) -> Self {
        self.node_node = w;
        self
    }

    pub fn with_node_edge(mut self, w: f64) -> Self {
        self.node_edge = w;
        self
    }

    pub fn with_edge_edge_intersect(mut self, w: f64) -> Self {
        self.edge_edge_intersect = w;
        self
    }

    pub fn with_edge_edge_overlap(mut self, w: f64) -> Self {
        self.edge_edge_overlap = w;
        self
    }

    pub fn with_rank(mut self, w: f64) -> Self {
        self.rank = w;
        self
    }

    pub fn with_length(mut self, w: f64) -> Self {
        self.length = w;
        self
    }

    /// Validates that every weight is finite and non-negative.
    pub fn validate(&self) -> Result<(), String> {
        let named = [
            ("node_node", self.node_node),
            ("node_edge", self.node_edge),
            ("edge_edge_intersect", self.edge_edge_intersect),
            ("edge_edge_overlap", self.edge_edge_overlap),
            ("rank", self.rank),
            ("length", self.length),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("weight {name} must be non-negative, got {value}"));
            }
        }
        Ok(())
    }
}
