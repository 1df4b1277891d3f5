//! Directed weighted graph snapshot
//!
//! Vertices are implicit (`0..vertex_count`); edges are kept in insertion
//! order, which is also the tie-break order used by the contraction solver.
//!
//! The model performs no validation on insertion. Out-of-range endpoints and
//! self-loops are caller preconditions; [`Graph::validate`] checks them on
//! demand (the analyzer calls it when configured to).

use serde::{Deserialize, Serialize};

use super::edge::{Edge, VertexId};
use super::weight::Weight;
use crate::errors::{MsaError, Result};

/// Directed graph consumed by the arborescence solvers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph<W> {
    vertex_count: usize,
    edges: Vec<Edge<W>>,
    /// Sum of all edge weights currently in the graph
    total_weight: W,
}

impl<W: Weight> Graph<W> {
    pub fn new(vertex_count: usize) -> Self {
        Self::with_capacity(vertex_count, 0)
    }

    pub fn with_capacity(vertex_count: usize, edges: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::with_capacity(edges),
            total_weight: W::zero(),
        }
    }

    /// Build a graph from `(src, dst, weight)` triples
    pub fn from_edges(vertex_count: usize, edges: impl IntoIterator<Item = (VertexId, VertexId, W)>) -> Self {
        let mut graph = Self::new(vertex_count);
        for (src, dst, weight) in edges {
            graph.add_edge(src, dst, weight);
        }
        graph
    }

    /// Append an edge. O(1), no bounds checks.
    pub fn add_edge(&mut self, src: VertexId, dst: VertexId, weight: W) {
        self.edges.push(Edge::new(src, dst, weight));
        self.total_weight += weight;
    }

    /// Remove the first edge `src → dst`, if any
    pub fn remove_edge(&mut self, src: VertexId, dst: VertexId) -> Option<Edge<W>> {
        let idx = self
            .edges
            .iter()
            .position(|e| e.src == src && e.dst == dst)?;
        let edge = self.edges.remove(idx);
        self.total_weight -= edge.weight;
        Some(edge)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Sum of the weights of every edge in the graph
    #[inline]
    pub fn total_weight(&self) -> W {
        self.total_weight
    }

    /// Edges entering `v`, in insertion order
    pub fn incoming(&self, v: VertexId) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.edges.iter().filter(move |e| e.dst == v)
    }

    /// Check the solver preconditions for `root`
    ///
    /// # Errors
    /// - [`MsaError::RootOutOfRange`] if `root >= vertex_count`
    /// - [`MsaError::VertexOutOfRange`] for the first edge with an endpoint out of range
    /// - [`MsaError::SelfLoop`] for the first edge with `src == dst`
    pub fn validate(&self, root: VertexId) -> Result<()> {
        if root >= self.vertex_count {
            return Err(MsaError::RootOutOfRange {
                root,
                vertex_count: self.vertex_count,
            });
        }

        for (index, edge) in self.edges.iter().enumerate() {
            let vertex = if edge.src >= self.vertex_count {
                Some(edge.src)
            } else if edge.dst >= self.vertex_count {
                Some(edge.dst)
            } else {
                None
            };
            if let Some(vertex) = vertex {
                return Err(MsaError::VertexOutOfRange {
                    edge: index,
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
            if edge.is_self_loop() {
                return Err(MsaError::SelfLoop {
                    edge: index,
                    vertex: edge.src,
                });
            }
        }

        Ok(())
    }
}
