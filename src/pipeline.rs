//! Load → build → relax → write, driven by a `RunConfig`.

use std::path::Path;

use tracing::{info, warn};

use crate::config::RunConfig;
use crate::engine::{solve, PathMode};
use crate::error::Result;
use crate::graph::WeightedGraph;
use crate::matrix::load_matrix_file;
use crate::output::{write_costs_file, RunReport};

/// Relax an in-memory graph and write whatever outputs `cfg` names.
pub fn run_graph(graph: &WeightedGraph, cfg: &RunConfig) -> Result<RunReport> {
    cfg.validate()?;
    if cfg.warn_negative_weights && cfg.mode == PathMode::Shortest && graph.has_negative_weight() {
        warn!("negative edge weight in additive graph; costs may not be minimal");
    }
    let outcome = solve(cfg.mode, graph, cfg.source)?;
    if let Some(path) = &cfg.output {
        write_costs_file(path, &outcome.costs)?;
        info!(path = %path.display(), "costs written");
    }
    let report = RunReport::new(&outcome, graph.edge_count());
    if let Some(path) = &cfg.report {
        report.write_json_file(path)?;
        info!(path = %path.display(), "report written");
    }
    Ok(report)
}

pub fn run_matrix_file<P: AsRef<Path>>(path: P, cfg: &RunConfig) -> Result<RunReport> {
    let path = path.as_ref();
    let edges = load_matrix_file(path)?;
    info!(path = %path.display(), vertices = edges.vertex_count(), edges = edges.edge_count(), "matrix loaded");
    let graph = edges.to_graph()?;
    run_graph(&graph, cfg)
}
