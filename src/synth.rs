//! Seeded random graphs for benchmarks and parity tests.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, SsspError};
use crate::graph::WeightedGraph;

/// `n * avg_degree` random directed edges (no self-loops) with weights drawn
/// uniformly from `[w_min, w_max)`.
pub fn random_graph(n: usize, avg_degree: f64, w_min: f64, w_max: f64, seed: u64) -> Result<WeightedGraph> {
    if n < 2 {
        return Err(SsspError::InvalidArgument("random graph needs at least two vertices".into()));
    }
    if !(w_min < w_max) || !avg_degree.is_finite() || avg_degree < 0.0 {
        return Err(SsspError::InvalidArgument(format!(
            "bad generator parameters: degree {} weights [{}, {})",
            avg_degree, w_min, w_max
        )));
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut g = WeightedGraph::new(n)?;
    let m_est = (n as f64 * avg_degree) as usize;
    for _ in 0..m_est {
        let u = rng.gen_range(0..n as u32);
        let v = rng.gen_range(0..n as u32);
        if u == v {
            continue;
        }
        let w = rng.gen_range(w_min..w_max);
        g.add_edge(u, v, w)?;
    }
    Ok(g)
}
