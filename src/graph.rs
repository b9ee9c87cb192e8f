//! Directed weighted graph stored as per-vertex edge lists.
//!
//! Vertices are dense `0..vertex_count` ids fixed at construction. Edges are
//! only ever appended; parallel edges and self-loops are kept as given.

use crate::error::{Result, SsspError};

/// Outgoing edge: destination vertex and weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: u32,
    pub weight: f64,
}

#[derive(Debug, Clone)]
pub struct WeightedGraph {
    adj: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl WeightedGraph {
    /// Allocate `vertex_count` empty adjacency lists.
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(SsspError::InvalidArgument("graph needs at least one vertex".into()));
        }
        if vertex_count > u32::MAX as usize {
            return Err(SsspError::InvalidArgument(format!(
                "vertex count {} exceeds u32 id space",
                vertex_count
            )));
        }
        Ok(Self { adj: vec![Vec::new(); vertex_count], edge_count: 0 })
    }

    /// Build from zero-based `(source, destination, weight)` triples.
    pub fn from_edges(vertex_count: usize, edges: &[(u32, u32, f64)]) -> Result<Self> {
        let mut g = Self::new(vertex_count)?;
        for &(s, d, w) in edges {
            g.add_edge(s, d, w)?;
        }
        Ok(g)
    }

    /// Build from CSR arrays (`offsets.len() == n + 1`, `targets`/`weights` of
    /// length `offsets[n]`).
    pub fn from_csr(offsets: &[u32], targets: &[u32], weights: &[f64]) -> Result<Self> {
        let n = offsets.len().checked_sub(1).ok_or_else(|| {
            SsspError::InvalidArgument("offsets must hold n + 1 entries".into())
        })?;
        let mut g = Self::new(n)?;
        let m = offsets[n] as usize;
        if targets.len() < m || weights.len() < m {
            return Err(SsspError::InvalidArgument(format!(
                "offsets declare {} edges but targets/weights hold {}/{}",
                m,
                targets.len(),
                weights.len()
            )));
        }
        for u in 0..n {
            let (start, end) = (offsets[u] as usize, offsets[u + 1] as usize);
            if start > end || end > m {
                return Err(SsspError::InvalidArgument(format!(
                    "offsets not monotonic at row {}",
                    u
                )));
            }
            for e in start..end {
                g.add_edge(u as u32, targets[e], weights[e])?;
            }
        }
        Ok(g)
    }

    /// Append an edge to `source`'s list. Both endpoints must exist.
    pub fn add_edge(&mut self, source: u32, destination: u32, weight: f64) -> Result<()> {
        let n = self.adj.len();
        for v in [source, destination] {
            if v as usize >= n {
                return Err(SsspError::VertexOutOfRange { vertex: v as u64, count: n });
            }
        }
        self.adj[source as usize].push(Edge { target: destination, weight });
        self.edge_count += 1;
        Ok(())
    }

    /// Outgoing edges of `vertex`, most recently added first.
    ///
    /// Panics if `vertex` is out of range.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = &Edge> + '_ {
        self.adj[vertex].iter().rev()
    }

    pub fn out_degree(&self, vertex: usize) -> usize {
        self.adj.get(vertex).map_or(0, Vec::len)
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True if any edge carries a negative weight.
    pub fn has_negative_weight(&self) -> bool {
        self.adj.iter().flatten().any(|e| e.weight < 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_vertices_rejected() {
        assert!(matches!(WeightedGraph::new(0), Err(SsspError::InvalidArgument(_))));
    }

    #[test]
    fn neighbors_are_insertion_reversed() {
        let mut g = WeightedGraph::new(3).unwrap();
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(0, 2, 2.0).unwrap();
        g.add_edge(0, 1, 3.0).unwrap(); // parallel edge kept
        let got: Vec<(u32, f64)> = g.neighbors(0).map(|e| (e.target, e.weight)).collect();
        assert_eq!(got, vec![(1, 3.0), (2, 2.0), (1, 1.0)]);
        assert_eq!(g.out_degree(0), 3);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn self_loop_allowed() {
        let mut g = WeightedGraph::new(1).unwrap();
        g.add_edge(0, 0, 0.5).unwrap();
        assert_eq!(g.neighbors(0).count(), 1);
    }

    #[test]
    fn out_of_range_endpoint_rejected() {
        let mut g = WeightedGraph::new(2).unwrap();
        let err = g.add_edge(0, 2, 1.0).unwrap_err();
        assert!(matches!(err, SsspError::VertexOutOfRange { vertex: 2, count: 2 }));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn csr_roundtrip_matches_degrees() {
        // 0 -> 1, 0 -> 2, 1 -> 2
        let off = [0u32, 2, 3, 3];
        let tgt = [1u32, 2, 2];
        let wts = [1.0f64, 2.0, 0.25];
        let g = WeightedGraph::from_csr(&off, &tgt, &wts).unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.out_degree(0), 2);
        assert_eq!(g.out_degree(2), 0);
    }

    #[test]
    fn csr_non_monotonic_rejected() {
        let off = [0u32, 2, 1, 2];
        let tgt = [1u32, 2];
        let wts = [1.0f64, 1.0];
        assert!(WeightedGraph::from_csr(&off, &tgt, &wts).is_err());
    }
}
