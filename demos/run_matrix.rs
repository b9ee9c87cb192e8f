use std::process::ExitCode;

use sssp_relax::{run_matrix_file, PathMode, RunConfig};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.iter().any(|a| a == "--help") {
        eprintln!("usage: run_matrix <matrix.mtx> [shortest|widest_product]   (SSSP_RELAX_* env knobs apply)");
        return ExitCode::FAILURE;
    }
    let mut cfg = match RunConfig::from_env() {
        Ok(c) => c,
        Err(e) => { eprintln!("error: {e}"); return ExitCode::FAILURE; }
    };
    if let Some(mode) = args.get(2) {
        match mode.parse::<PathMode>() {
            Ok(m) => cfg.mode = m,
            Err(e) => { eprintln!("error: {e}"); return ExitCode::FAILURE; }
        }
    }
    if cfg.output.is_none() {
        let name = match cfg.mode { PathMode::Shortest => "a.txt", PathMode::WidestProduct => "b.txt" };
        cfg.output = Some(name.into());
    }

    match run_matrix_file(&args[1], &cfg) {
        Ok(report) => {
            println!(
                "mode={} n={} m={} reachable={} relax={} key_updates={}",
                report.mode, report.vertices, report.edges, report.reachable, report.stats.relaxations, report.stats.key_updates
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
