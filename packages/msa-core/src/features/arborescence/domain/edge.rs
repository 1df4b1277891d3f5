//! Weighted directed edge

use serde::{Deserialize, Serialize};

use super::weight::Weight;

/// Vertex index in `0..n`
pub type VertexId = usize;

/// Directed edge `src → dst` with a cost
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge<W> {
    pub src: VertexId,
    pub dst: VertexId,
    pub weight: W,
}

impl<W: Weight> Edge<W> {
    pub fn new(src: VertexId, dst: VertexId, weight: W) -> Self {
        Self { src, dst, weight }
    }

    /// Zero-weight self edge, used as the root's incoming choice
    pub(crate) fn anchor(root: VertexId) -> Self {
        Self::new(root, root, W::zero())
    }

    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.src == self.dst
    }
}
