//! Lazy Mergeable Heap (skew heap with deferred additive offsets)
//!
//! Per-vertex priority queue of incoming edges for the Gabow solver:
//! - `push` / `pop` / `merge`: O(log n) amortized
//! - `add`: O(1), shifts every key in the heap at once
//!
//! Every node carries a pending `delta` that applies to its whole subtree.
//! A node's true weight is its stored weight plus the deltas on the path from
//! the root. Before a node's weight is compared, merged or reported it is
//! *propagated*: its delta is folded into its key and handed to both children.
//!
//! Nodes are uniquely owned boxes. `merge` takes the other heap by value, so
//! two heaps can never share a subtree.
//!
//! # References
//! - Sleator, D. D. & Tarjan, R. E. "Self-Adjusting Heaps" (SIAM J. Comput. 1986)

use super::super::domain::{Edge, Weight};

type Link<W> = Option<Box<Node<W>>>;

#[derive(Debug)]
struct Node<W> {
    key: Edge<W>,
    /// Pending shift for this node and everything below it
    delta: W,
    children: [Link<W>; 2],
}

impl<W: Weight> Node<W> {
    fn new(key: Edge<W>) -> Box<Self> {
        Box::new(Self {
            key,
            delta: W::zero(),
            children: [None, None],
        })
    }

    /// Apply the pending delta to this key and defer it to the children
    #[inline]
    fn propagate(&mut self) {
        if self.delta.is_zero() {
            return;
        }
        let delta = self.delta;
        self.key.weight += delta;
        for child in self.children.iter_mut().flatten() {
            child.delta += delta;
        }
        self.delta = W::zero();
    }
}

/// Skew heap of edges ordered by (lazily shifted) weight
#[derive(Debug)]
pub struct LazyHeap<W> {
    root: Link<W>,
    len: usize,
}

impl<W> Default for LazyHeap<W> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<W: Weight> LazyHeap<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an edge keyed by its weight
    pub fn push(&mut self, edge: Edge<W>) {
        self.root = merge_links(self.root.take(), Some(Node::new(edge)));
        self.len += 1;
    }

    /// Remove and return the minimum edge, with every pending shift applied
    pub fn pop(&mut self) -> Option<Edge<W>> {
        let mut root = self.root.take()?;
        root.propagate();
        let [left, right] = std::mem::take(&mut root.children);
        self.root = merge_links(left, right);
        self.len -= 1;
        Some(root.key)
    }

    /// Minimum edge, with every pending shift applied
    pub fn top(&mut self) -> Option<Edge<W>> {
        let root = self.root.as_mut()?;
        root.propagate();
        Some(root.key)
    }

    /// Shift every key in the heap by `delta`. No-op on an empty heap.
    #[inline]
    pub fn add(&mut self, delta: W) {
        if let Some(root) = self.root.as_mut() {
            root.delta += delta;
        }
    }

    /// Absorb `other`; it is consumed
    pub fn merge(&mut self, mut other: LazyHeap<W>) {
        self.root = merge_links(self.root.take(), other.root.take());
        self.len += std::mem::take(&mut other.len);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }
}

impl<W: Weight> FromIterator<Edge<W>> for LazyHeap<W> {
    fn from_iter<T: IntoIterator<Item = Edge<W>>>(iter: T) -> Self {
        let mut heap = Self::new();
        for edge in iter {
            heap.push(edge);
        }
        heap
    }
}

impl<W> Drop for LazyHeap<W> {
    // Iterative teardown: skew heap spines can be linear in the worst case.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<W>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

/// Skew-heap meld of two trees.
///
/// Walks down the right spines, always keeping the smaller (propagated) root
/// on top, then rebuilds bottom-up, swapping each spine node's children.
fn merge_links<W: Weight>(a: Link<W>, b: Link<W>) -> Link<W> {
    let mut spine: Vec<Box<Node<W>>> = Vec::new();
    let (mut a, mut b) = (a, b);

    let tail = loop {
        match (a, b) {
            (None, rest) | (rest, None) => break rest,
            (Some(mut x), Some(mut y)) => {
                x.propagate();
                y.propagate();
                if x.key.weight > y.key.weight {
                    std::mem::swap(&mut x, &mut y);
                }
                a = Some(y);
                b = x.children[1].take();
                spine.push(x);
            }
        }
    };

    let mut merged = tail;
    while let Some(mut node) = spine.pop() {
        node.children[1] = merged;
        node.children.swap(0, 1);
        merged = Some(node);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(src: usize, weight: i64) -> Edge<i64> {
        Edge::new(src, 0, weight)
    }

    fn drain(heap: &mut LazyHeap<i64>) -> Vec<i64> {
        std::iter::from_fn(|| heap.pop()).map(|e| e.weight).collect()
    }

    #[test]
    fn test_pop_in_weight_order() {
        let mut heap: LazyHeap<i64> = [5, 1, 4, 2, 3].iter().map(|&w| edge(0, w)).collect();

        assert_eq!(heap.len(), 5);
        assert_eq!(heap.top().map(|e| e.weight), Some(1));
        assert_eq!(drain(&mut heap), vec![1, 2, 3, 4, 5]);
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
    }

    #[test]
    fn test_empty_heap() {
        let mut heap = LazyHeap::<i64>::new();
        assert!(heap.is_empty());
        assert!(heap.top().is_none());
        assert!(heap.pop().is_none());

        // shifting nothing is harmless
        heap.add(10);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_add_shifts_every_key() {
        let mut heap: LazyHeap<i64> = [10, 30, 20].iter().map(|&w| edge(0, w)).collect();
        heap.add(-10);

        assert_eq!(drain(&mut heap), vec![0, 10, 20]);
    }

    #[test]
    fn test_add_after_pop_applies_to_remainder_only() {
        let mut heap: LazyHeap<i64> = [7, 3, 9].iter().map(|&w| edge(0, w)).collect();

        let min = heap.pop().unwrap();
        assert_eq!(min.weight, 3);
        heap.add(-min.weight);

        assert_eq!(drain(&mut heap), vec![4, 6]);
    }

    #[test]
    fn test_merge_respects_pending_shifts() {
        let mut a: LazyHeap<i64> = [100, 200].iter().map(|&w| edge(1, w)).collect();
        let mut b: LazyHeap<i64> = [5, 50].iter().map(|&w| edge(2, w)).collect();

        // Without propagation before comparing, 100 would lose to 5
        a.add(-99);
        b.add(10);
        a.merge(b);

        assert_eq!(a.len(), 4);
        let popped: Vec<(usize, i64)> = std::iter::from_fn(|| a.pop())
            .map(|e| (e.src, e.weight))
            .collect();
        assert_eq!(popped, vec![(1, 1), (2, 15), (2, 60), (1, 101)]);
    }

    #[test]
    fn test_nested_shifts_compose() {
        let mut inner: LazyHeap<i64> = [1, 2].iter().map(|&w| edge(0, w)).collect();
        inner.add(10);
        let mut outer: LazyHeap<i64> = [12].iter().map(|&w| edge(0, w)).collect();
        outer.merge(inner);
        outer.add(-2);
        outer.push(edge(0, 10));

        assert_eq!(drain(&mut outer), vec![9, 10, 10, 10]);
    }

    #[test]
    fn test_real_weights() {
        let mut heap = LazyHeap::new();
        for w in [2.5f64, -1.25, 0.75] {
            heap.push(Edge::new(0, 1, w));
        }
        heap.add(0.25);
        let weights: Vec<f64> = std::iter::from_fn(|| heap.pop()).map(|e| e.weight).collect();
        assert_eq!(weights, vec![-1.0, 1.0, 2.75]);
    }

    #[test]
    fn test_large_heap_does_not_overflow_stack() {
        let mut heap = LazyHeap::new();
        for w in 0..200_000i64 {
            heap.push(edge(0, w));
        }
        let mut other = LazyHeap::new();
        for w in (0..200_000i64).rev() {
            other.push(edge(1, w));
        }
        heap.merge(other);
        assert_eq!(heap.len(), 400_000);
        assert_eq!(heap.pop().map(|e| e.weight), Some(0));
        // dropped here with ~400k nodes still inside
    }
}
