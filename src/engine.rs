//! Relaxation engine driving the indexed heap over a `WeightedGraph`.
//!
//! A single loop serves both variants; `PathAlgebra` supplies the heap
//! direction, the combine operator and the source identity:
//!  - `Additive`: min-heap, `cost + w`, identity 0 (shortest path)
//!  - `Multiplicative`: max-heap, `cost * w`, identity 1 (widest product path)
//!
//! Vertex states: unvisited (no cost, in heap), frontier (cost known, in
//! heap), finalized (extracted, cost fixed).

use core::fmt;
use core::marker::PhantomData;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Result, SsspError};
use crate::graph::WeightedGraph;
use crate::heap::{HeapEntry, HeapOrder, IndexedBinaryHeap, MaxFirst, MinFirst};

/// Value reported for vertices with no path from the source.
pub const UNREACHABLE_COST: f64 = -1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PathMode {
    /// Additive weights, lower is better.
    #[default]
    Shortest,
    /// Multiplicative weights, higher is better.
    WidestProduct,
}

impl PathMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PathMode::Shortest => "shortest",
            PathMode::WidestProduct => "widest_product",
        }
    }
}

impl fmt::Display for PathMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathMode {
    type Err = SsspError;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shortest" | "min" | "additive" => Ok(PathMode::Shortest),
            "widest_product" | "widest-product" | "max" | "product" => Ok(PathMode::WidestProduct),
            other => Err(SsspError::Config(format!("unknown path mode '{}'", other))),
        }
    }
}

/// Combine operator, identity and heap direction of one relaxation variant.
pub trait PathAlgebra {
    type Order: HeapOrder;
    const MODE: PathMode;
    /// Cost of the source vertex.
    const IDENTITY: f64;
    fn combine(cost: f64, weight: f64) -> f64;
    /// Whether a combined cost still counts as a path. Candidates that fail
    /// this never mark a vertex reachable.
    fn reaches(candidate: f64) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Additive;

#[derive(Debug, Clone, Copy, Default)]
pub struct Multiplicative;

impl PathAlgebra for Additive {
    type Order = MinFirst;
    const MODE: PathMode = PathMode::Shortest;
    const IDENTITY: f64 = 0.0;
    #[inline(always)]
    fn combine(cost: f64, weight: f64) -> f64 {
        cost + weight
    }
    #[inline(always)]
    fn reaches(candidate: f64) -> bool {
        candidate < f64::INFINITY
    }
}

impl PathAlgebra for Multiplicative {
    type Order = MaxFirst;
    const MODE: PathMode = PathMode::WidestProduct;
    const IDENTITY: f64 = 1.0;
    #[inline(always)]
    fn combine(cost: f64, weight: f64) -> f64 {
        cost * weight
    }
    // zero, negative and underflowed products carry no probability mass
    #[inline(always)]
    fn reaches(candidate: f64) -> bool {
        candidate > f64::MIN_POSITIVE
    }
}

/// Per-vertex best cost; `None` marks an unreachable vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct CostArray {
    costs: Vec<Option<f64>>,
}

impl CostArray {
    pub fn from_costs(costs: Vec<Option<f64>>) -> Self {
        Self { costs }
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Cost of zero-based `vertex`, `None` if unreachable or out of range.
    pub fn get(&self, vertex: usize) -> Option<f64> {
        self.costs.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.get(vertex).is_some()
    }

    pub fn reachable_count(&self) -> usize {
        self.costs.iter().filter(|c| c.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.costs.iter().copied()
    }

    /// Dense output form: unreachable vertices become `-1`.
    pub fn to_output(&self) -> Vec<f64> {
        self.costs.iter().map(|c| c.unwrap_or(UNREACHABLE_COST)).collect()
    }
}

/// Counters gathered during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelaxStats {
    /// Heap extractions (always equals the vertex count).
    pub extractions: u64,
    /// Edges whose relaxation improved the target's cost.
    pub relaxations: u64,
    /// `update_key` calls, including the initial source update.
    pub key_updates: u64,
    /// Extracted vertices that carried a cost.
    pub settled: u32,
}

#[derive(Debug, Clone)]
pub struct RelaxOutcome {
    pub mode: PathMode,
    /// Zero-based source vertex.
    pub source: u32,
    pub costs: CostArray,
    pub predecessors: Vec<Option<u32>>,
    pub stats: RelaxStats,
}

impl RelaxOutcome {
    /// Vertex chain from the source to zero-based `target`, or `None` if the
    /// target is unreachable.
    pub fn path_to(&self, target: usize) -> Option<Vec<u32>> {
        if !self.costs.is_reachable(target) {
            return None;
        }
        let mut path = vec![target as u32];
        let mut cur = target;
        while cur != self.source as usize {
            let p = self.predecessors.get(cur).copied().flatten()?;
            path.push(p);
            cur = p as usize;
            if path.len() > self.predecessors.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Validate a 1-based source id against the graph and return it zero-based.
pub fn source_index(graph: &WeightedGraph, source: u32) -> Result<usize> {
    let n = graph.vertex_count();
    if source == 0 || source as usize > n {
        return Err(SsspError::VertexOutOfRange { vertex: source as u64, count: n });
    }
    Ok(source as usize - 1)
}

pub struct RelaxationEngine<A: PathAlgebra> {
    _algebra: PhantomData<A>,
}

pub type ShortestPathEngine = RelaxationEngine<Additive>;
pub type WidestProductPathEngine = RelaxationEngine<Multiplicative>;

impl<A: PathAlgebra> Default for RelaxationEngine<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: PathAlgebra> RelaxationEngine<A> {
    pub fn new() -> Self {
        Self { _algebra: PhantomData }
    }

    /// Costs from the 1-based `source` to every vertex.
    pub fn compute_costs(&self, graph: &WeightedGraph, source: u32) -> Result<CostArray> {
        self.solve(graph, source).map(|o| o.costs)
    }

    /// Full run: costs, predecessors and counters.
    pub fn solve(&self, graph: &WeightedGraph, source: u32) -> Result<RelaxOutcome> {
        let src = source_index(graph, source)?;
        let n = graph.vertex_count();
        let mode = A::MODE;
        debug!(%mode, n, m = graph.edge_count(), source, "relaxation start");

        let mut costs: Vec<Option<f64>> = vec![None; n];
        let mut pred: Vec<Option<u32>> = vec![None; n];
        let mut stats = RelaxStats::default();

        let seed = (0..n as u32).map(|v| HeapEntry::new(<A::Order as HeapOrder>::WORST, v)).collect();
        let mut heap = IndexedBinaryHeap::<A::Order>::build(seed)?;
        costs[src] = Some(A::IDENTITY);
        heap.update_key(src as u32, A::IDENTITY)?;
        stats.key_updates += 1;

        while !heap.is_empty() {
            let HeapEntry { vertex, priority } = heap.extract_root()?;
            stats.extractions += 1;
            let u = vertex as usize;
            let Some(base) = costs[u] else { continue };
            stats.settled += 1;
            trace!(vertex = u, cost = priority, "settled");
            for edge in graph.neighbors(u) {
                let w = edge.target as usize;
                if !heap.contains(w) {
                    continue;
                }
                let candidate = A::combine(base, edge.weight);
                if !A::reaches(candidate) {
                    continue;
                }
                let improves = match costs[w] {
                    None => true,
                    Some(cur) => <A::Order as HeapOrder>::beats(candidate, cur),
                };
                if improves {
                    costs[w] = Some(candidate);
                    pred[w] = Some(vertex);
                    heap.update_key(edge.target, candidate)?;
                    stats.relaxations += 1;
                    stats.key_updates += 1;
                }
            }
        }

        debug!(
            %mode,
            settled = stats.settled,
            relaxations = stats.relaxations,
            key_updates = stats.key_updates,
            "relaxation done"
        );
        Ok(RelaxOutcome {
            mode,
            source: src as u32,
            costs: CostArray::from_costs(costs),
            predecessors: pred,
            stats,
        })
    }
}

/// Runtime dispatch over `PathMode`.
pub fn solve(mode: PathMode, graph: &WeightedGraph, source: u32) -> Result<RelaxOutcome> {
    match mode {
        PathMode::Shortest => ShortestPathEngine::new().solve(graph, source),
        PathMode::WidestProduct => WidestProductPathEngine::new().solve(graph, source),
    }
}

pub fn compute_costs(mode: PathMode, graph: &WeightedGraph, source: u32) -> Result<CostArray> {
    solve(mode, graph, source).map(|o| o.costs)
}
