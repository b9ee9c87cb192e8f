//! Cost serialization: plain text (one value per vertex) and a JSON run report.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::engine::{CostArray, PathMode, RelaxOutcome, RelaxStats};
use crate::error::Result;

/// `-1` for unreachable, otherwise eight fractional digits.
pub fn format_cost(cost: Option<f64>) -> String {
    match cost {
        Some(c) => format!("{:.8}", c),
        None => "-1".to_string(),
    }
}

pub fn write_costs<W: Write>(mut out: W, costs: &CostArray) -> Result<()> {
    for c in costs.iter() {
        writeln!(out, "{}", format_cost(c))?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_costs_file<P: AsRef<Path>>(path: P, costs: &CostArray) -> Result<()> {
    let f = File::create(path.as_ref())?;
    write_costs(BufWriter::new(f), costs)
}

/// Summary of one run, serialized as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub mode: PathMode,
    /// 1-based, as given by the caller.
    pub source: u32,
    pub vertices: usize,
    pub edges: usize,
    pub reachable: usize,
    pub stats: RelaxStats,
    /// Output form (`-1` == unreachable). A reachable cost of exactly `-1.0`
    /// (negative additive weights) looks the same here; use `reachable` or the
    /// text writer, which prints it as `-1.00000000`, to tell them apart.
    pub costs: Vec<f64>,
}

impl RunReport {
    pub fn new(outcome: &RelaxOutcome, edges: usize) -> Self {
        Self {
            mode: outcome.mode,
            source: outcome.source + 1,
            vertices: outcome.costs.len(),
            edges,
            reachable: outcome.costs.reachable_count(),
            stats: outcome.stats,
            costs: outcome.costs.to_output(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let mut f = File::create(path)?;
        f.write_all(self.to_json()?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::solve;
    use crate::graph::WeightedGraph;

    #[test]
    fn text_format_matches_contract() {
        let costs = CostArray::from_costs(vec![Some(0.0), Some(2.5), None, Some(1.0 / 3.0)]);
        let mut buf = Vec::new();
        write_costs(&mut buf, &costs).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "0.00000000\n2.50000000\n-1\n0.33333333\n");
    }

    #[test]
    fn reachable_minus_one_differs_from_unreachable_in_text() {
        // 0 -> 1 with weight -1: vertex 1 is reachable at cost exactly -1
        let g = WeightedGraph::from_edges(3, &[(0, 1, -1.0)]).unwrap();
        let out = solve(PathMode::Shortest, &g, 1).unwrap();
        let report = RunReport::new(&out, g.edge_count());
        assert_eq!(report.costs, vec![0.0, -1.0, -1.0]);
        assert_eq!(report.reachable, 2);
        let mut buf = Vec::new();
        write_costs(&mut buf, &out.costs).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0.00000000\n-1.00000000\n-1\n");
    }

    #[test]
    fn report_json_fields() {
        let g = WeightedGraph::from_edges(3, &[(0, 1, 2.0)]).unwrap();
        let out = solve(PathMode::WidestProduct, &g, 1).unwrap();
        let report = RunReport::new(&out, g.edge_count());
        let v: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(v["mode"], "widest_product");
        assert_eq!(v["source"], 1);
        assert_eq!(v["reachable"], 2);
        assert_eq!(v["costs"], serde_json::json!([1.0, 2.0, -1.0]));
        assert_eq!(v["stats"]["extractions"], 3);
    }
}
