//! Exhaustive reference solver for tiny graphs

use msa_core::features::arborescence::{Edge, Graph};

/// Minimum arborescence weight by trying every parent assignment
///
/// Exponential in the vertex count; only for graphs with a handful of
/// vertices and edges.
pub fn brute_force(graph: &Graph<i64>, root: usize) -> Option<i64> {
    let n = graph.vertex_count();
    let candidates: Vec<Vec<Edge<i64>>> = (0..n)
        .map(|v| {
            if v == root {
                Vec::new()
            } else {
                graph.incoming(v).filter(|e| e.src != e.dst).copied().collect()
            }
        })
        .collect();

    let mut parent = vec![None; n];
    let mut best = None;
    search(root, 0, &candidates, &mut parent, 0, &mut best);
    best
}

fn search(
    root: usize,
    v: usize,
    candidates: &[Vec<Edge<i64>>],
    parent: &mut [Option<usize>],
    cost: i64,
    best: &mut Option<i64>,
) {
    if v == candidates.len() {
        if reaches_root(root, parent) && best.map_or(true, |b| cost < b) {
            *best = Some(cost);
        }
        return;
    }
    if v == root {
        search(root, v + 1, candidates, parent, cost, best);
        return;
    }
    for edge in &candidates[v] {
        parent[v] = Some(edge.src);
        search(root, v + 1, candidates, parent, cost + edge.weight, best);
    }
    parent[v] = None;
}

/// Every vertex follows parent links to the root without repeating
fn reaches_root(root: usize, parent: &[Option<usize>]) -> bool {
    (0..parent.len()).all(|start| {
        let mut v = start;
        for _ in 0..parent.len() {
            if v == root {
                return true;
            }
            match parent[v] {
                Some(p) => v = p,
                None => return false,
            }
        }
        v == root
    })
}
