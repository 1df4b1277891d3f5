//! Seeded random graph generation for comparisons and benchmarks

use num_traits::NumCast;
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::ConfigError;
use crate::errors::{MsaError, Result};
use crate::features::arborescence::domain::{Graph, VertexId, Weight};

/// Random directed multigraph generator
///
/// Every vertex gets `0..max_out_degree` outgoing edges to uniformly chosen
/// targets other than itself, so graphs never contain self-loops but may
/// contain parallel edges. The same seed always yields the same sequence
/// of graphs.
///
/// Weights are drawn uniformly from `min..=max` in the weight type itself:
/// integer weights stay whole, real weights are fractional.
///
/// With [`RandomGraphGenerator::reachable_from`] a random spanning tree out
/// of the root is laid down first, so every graph has an arborescence.
#[derive(Debug, Clone)]
pub struct RandomGraphGenerator {
    rng: StdRng,
    vertex_count: usize,
    max_out_degree: usize,
    min_weight: i32,
    max_weight: i32,
    root: Option<VertexId>,
}

impl RandomGraphGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            vertex_count: 100,
            max_out_degree: 10,
            min_weight: 1,
            max_weight: 100,
            root: None,
        }
    }

    /// Builder: Set vertex_count
    pub fn vertex_count(mut self, n: usize) -> Self {
        self.vertex_count = n;
        self
    }

    /// Builder: Set max_out_degree (exclusive upper bound)
    pub fn max_out_degree(mut self, d: usize) -> Self {
        self.max_out_degree = d;
        self
    }

    /// Builder: Set weight range
    pub fn weights(mut self, min: i32, max: i32) -> Self {
        self.min_weight = min;
        self.max_weight = max;
        self
    }

    /// Builder: Guarantee every vertex is reachable from `root`
    pub fn reachable_from(mut self, root: VertexId) -> Self {
        self.root = Some(root);
        self
    }

    /// Generate the next graph with the configured vertex count
    pub fn generate<W>(&mut self) -> Result<Graph<W>>
    where
        W: Weight + NumCast + SampleUniform,
    {
        self.generate_sized(self.vertex_count)
    }

    /// Generate the next graph with `vertex_count` vertices
    pub fn generate_sized<W>(&mut self, vertex_count: usize) -> Result<Graph<W>>
    where
        W: Weight + NumCast + SampleUniform,
    {
        let (min, max) = self.weight_bounds::<W>()?;

        let mut graph = Graph::with_capacity(vertex_count, vertex_count * self.max_out_degree / 2);
        if let Some(root) = self.root {
            if root >= vertex_count {
                return Err(MsaError::RootOutOfRange { root, vertex_count });
            }
            self.spanning_tree(&mut graph, root, min, max);
        }

        // A lone vertex has no valid target
        if vertex_count < 2 || self.max_out_degree == 0 {
            return Ok(graph);
        }

        for src in 0..vertex_count {
            let degree = self.rng.gen_range(0..self.max_out_degree);
            for _ in 0..degree {
                // Sample from n - 1 slots and skip over src
                let mut dst = self.rng.gen_range(0..vertex_count - 1);
                if dst >= src {
                    dst += 1;
                }
                let weight = self.rng.gen_range(min..=max);
                graph.add_edge(src, dst, weight);
            }
        }

        Ok(graph)
    }

    /// Random vertex count in `1..=max`, drawn from the same stream
    pub fn random_vertex_count(&mut self, max: usize) -> usize {
        self.rng.gen_range(1..=max.max(1))
    }

    fn weight_bounds<W: Weight + NumCast>(&self) -> Result<(W, W)> {
        if self.min_weight > self.max_weight {
            return Err(ConfigError::Validation(format!(
                "empty weight range {}..={}",
                self.min_weight, self.max_weight
            ))
            .into());
        }
        match (<W as NumCast>::from(self.min_weight), <W as NumCast>::from(self.max_weight)) {
            (Some(min), Some(max)) => Ok((min, max)),
            _ => Err(ConfigError::Validation(format!(
                "weight range {}..={} does not fit the weight type",
                self.min_weight, self.max_weight
            ))
            .into()),
        }
    }

    /// Attach every non-root vertex, in random order, below a vertex
    /// already in the tree
    fn spanning_tree<W>(&mut self, graph: &mut Graph<W>, root: VertexId, min: W, max: W)
    where
        W: Weight + SampleUniform,
    {
        let mut order: Vec<VertexId> = (0..graph.vertex_count()).filter(|&v| v != root).collect();
        order.shuffle(&mut self.rng);

        for i in 0..order.len() {
            let parent = match self.rng.gen_range(0..=i) {
                0 => root,
                k => order[k - 1],
            };
            let weight = self.rng.gen_range(min..=max);
            graph.add_edge(parent, order[i], weight);
        }
    }
}
