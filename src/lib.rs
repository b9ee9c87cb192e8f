//! Single-source path costs over sparse-matrix graphs, driven by an indexed
//! binary heap with key updates.
//! Provides two variants sharing one relaxation loop:
//!  - Shortest path: min-heap, additive weights (`ShortestPathEngine`)
//!  - Widest product path: max-heap, multiplicative weights
//!    (`WidestProductPathEngine`)
//!
//! Pipeline: `matrix` (Matrix Market reader) → `graph` → `engine` (using
//! `heap`) → `output`. A C ABI over CSR arrays lives in `ffi`.
//!
//! ```
//! use sssp_relax::{ShortestPathEngine, WeightedGraph};
//!
//! let g = WeightedGraph::from_edges(3, &[(0, 1, 2.0), (1, 2, 3.0)]).unwrap();
//! let costs = ShortestPathEngine::new().compute_costs(&g, 1).unwrap();
//! assert_eq!(costs.to_output(), vec![0.0, 2.0, 5.0]);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod ffi;
pub mod graph;
pub mod heap;
pub mod matrix;
pub mod output;
pub mod pipeline;
pub mod synth;

pub use config::RunConfig;
pub use engine::{
    compute_costs, solve, Additive, CostArray, Multiplicative, PathAlgebra, PathMode, RelaxOutcome,
    RelaxStats, RelaxationEngine, ShortestPathEngine, WidestProductPathEngine, UNREACHABLE_COST,
};
pub use error::{Result, SsspError};
pub use ffi::{sssp_relax_compute, sssp_relax_version, SsspRelaxInfo};
pub use graph::{Edge, WeightedGraph};
pub use heap::{HeapEntry, HeapOrder, IndexedBinaryHeap, MaxFirst, MinFirst};
pub use matrix::{load_matrix_file, read_matrix, EdgeList, MatrixHeader};
pub use output::{format_cost, write_costs, write_costs_file, RunReport};
pub use pipeline::{run_graph, run_matrix_file};
pub use synth::random_graph;
