//! Infrastructure layer for arborescence computation
//!
//! Algorithm implementations and their supporting structures:
//! - **DisjointSet**: path-compressed, union-by-size union-find
//! - **LazyHeap**: skew heap with lazy additive offsets
//! - **ContractionSolver**: Chu-Liu/Edmonds, O(V·E)
//! - **GabowSolver**: union-find + lazy heap, O(E log V)

pub mod contraction_solver;
pub mod gabow_solver;
pub mod lazy_heap;
pub mod union_find;

pub use contraction_solver::ContractionSolver;
pub use gabow_solver::GabowSolver;
pub use lazy_heap::LazyHeap;
pub use union_find::DisjointSet;
