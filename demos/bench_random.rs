use std::fs::File;
use std::io::Write;
use std::time::Instant;

use sssp_relax::{random_graph, solve, PathMode};
use tracing_subscriber::EnvFilter;

fn run_one(n: usize, avg_degree: f64, seed: u64) -> sssp_relax::Result<serde_json::Value> {
    // probabilities in (0, 1] keep the product variant meaningful on the same graph
    let g = random_graph(n, avg_degree, 0.01, 1.0, seed)?;
    let t0 = Instant::now();
    let short = solve(PathMode::Shortest, &g, 1)?;
    let dt_short = t0.elapsed().as_secs_f64() * 1000.0;
    let t1 = Instant::now();
    let wide = solve(PathMode::WidestProduct, &g, 1)?;
    let dt_wide = t1.elapsed().as_secs_f64() * 1000.0;
    Ok(serde_json::json!({
        "n": n, "m": g.edge_count(), "avg_degree": avg_degree, "seed": seed,
        "shortest_ms": dt_short, "widest_product_ms": dt_wide,
        "reachable": short.costs.reachable_count(),
        "shortest": short.stats,
        "widest_product": wide.stats,
    }))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help") { eprintln!("Usage: bench_random --sizes 10000,20000 --degrees 2,4,8 --seed 42 --out benchmarks/relax_sample.json"); return; }
    let sizes_arg = args.iter().position(|a| a == "--sizes").and_then(|i| args.get(i + 1)).cloned().unwrap_or("10000,20000".into());
    let degrees_arg = args.iter().position(|a| a == "--degrees").and_then(|i| args.get(i + 1)).cloned().unwrap_or("4".into());
    let seed: u64 = args.iter().position(|a| a == "--seed").and_then(|i| args.get(i + 1)).and_then(|v| v.parse().ok()).unwrap_or(42);
    let out_path = args.iter().position(|a| a == "--out").and_then(|i| args.get(i + 1)).cloned().unwrap_or("benchmarks/relax_sample.json".into());
    let sizes: Vec<usize> = sizes_arg.split(',').filter_map(|s| s.parse().ok()).collect();
    let degrees: Vec<f64> = degrees_arg.split(',').filter_map(|s| s.parse().ok()).collect();

    let mut results = Vec::new();
    for &n in &sizes {
        for &deg in &degrees {
            match run_one(n, deg, seed) {
                Ok(v) => results.push(v),
                Err(e) => { eprintln!("n={} degree={} failed: {}", n, deg, e); std::process::exit(1); }
            }
        }
    }
    let json = serde_json::Value::Array(results);
    if let Some(dir) = std::path::Path::new(&out_path).parent() { std::fs::create_dir_all(dir).ok(); }
    let mut f = File::create(&out_path).expect("create out");
    f.write_all(serde_json::to_string_pretty(&json).expect("serialize").as_bytes()).expect("write out");
    eprintln!("wrote {}", out_path);
}
