//! C ABI over CSR arrays.
//!
//! Status codes: 0 success, -1 empty graph / invalid argument, -2 source out
//! of range, -3 null pointer, -4 malformed CSR, -5 unknown mode.

use core::slice;

use crate::engine::{solve, PathMode, UNREACHABLE_COST};
use crate::error::SsspError;
use crate::graph::WeightedGraph;

pub const SSSP_MODE_SHORTEST: u32 = 0;
pub const SSSP_MODE_WIDEST_PRODUCT: u32 = 1;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct SsspRelaxInfo {
    pub extractions: u64,  // heap pops
    pub relaxations: u64,  // improving relaxations
    pub key_updates: u64,  // update_key calls
    pub settled: u32,      // vertices extracted with a cost
    pub error_code: i32,   // 0 == success
}

#[no_mangle]
pub extern "C" fn sssp_relax_version() -> u32 { 1 }

/// Relax the CSR graph from the 1-based `source`.
///
/// `out_costs[v]` receives the cost of vertex `v` or `-1` if unreachable;
/// `out_pred[v]` (optional, may be null) receives the zero-based predecessor
/// or `-1`. A reachable cost of exactly `-1.0` is indistinguishable from
/// unreachable in `out_costs`; a non-source vertex with `out_pred[v] >= 0`
/// is reachable.
///
/// # Safety
///
/// `offsets` must point to `n + 1` values, `targets`/`weights` to
/// `offsets[n]` values, `out_costs` (and `out_pred` when non-null) to `n`
/// writable values. `info` may be null.
#[no_mangle]
pub unsafe extern "C" fn sssp_relax_compute(
    n: u32,
    offsets: *const u32, // len n+1
    targets: *const u32, // len m
    weights: *const f64, // len m
    source: u32,         // 1-based
    mode: u32,
    out_costs: *mut f64, // len n
    out_pred: *mut i32,  // len n, nullable
    info: *mut SsspRelaxInfo,
) -> i32 {
    if n == 0 { return -1; }
    if source == 0 || source > n { return -2; }
    if offsets.is_null() || targets.is_null() || weights.is_null() || out_costs.is_null() { return -3; }
    let mode = match mode {
        SSSP_MODE_SHORTEST => PathMode::Shortest,
        SSSP_MODE_WIDEST_PRODUCT => PathMode::WidestProduct,
        _ => return -5,
    };

    let n_usize = n as usize;
    let off = slice::from_raw_parts(offsets, n_usize + 1);
    let m = off[n_usize] as usize;
    let tgt = slice::from_raw_parts(targets, m);
    let wts = slice::from_raw_parts(weights, m);

    let result = WeightedGraph::from_csr(off, tgt, wts)
        .map_err(|e| match e {
            SsspError::InvalidArgument(_) | SsspError::VertexOutOfRange { .. } => -4,
            other => other.code(),
        })
        .and_then(|g| solve(mode, &g, source).map_err(|e| e.code()));
    let outcome = match result {
        Ok(o) => o,
        Err(rc) => {
            if !info.is_null() { *info = SsspRelaxInfo { error_code: rc, ..SsspRelaxInfo::default() }; }
            return rc;
        }
    };

    let dist = slice::from_raw_parts_mut(out_costs, n_usize);
    for (d, c) in dist.iter_mut().zip(outcome.costs.iter()) { *d = c.unwrap_or(UNREACHABLE_COST); }
    if !out_pred.is_null() {
        let pred = slice::from_raw_parts_mut(out_pred, n_usize);
        for (p, q) in pred.iter_mut().zip(&outcome.predecessors) { *p = q.map_or(-1, |v| v as i32); }
    }
    if !info.is_null() {
        let s = outcome.stats;
        *info = SsspRelaxInfo {
            extractions: s.extractions,
            relaxations: s.relaxations,
            key_updates: s.key_updates,
            settled: s.settled,
            error_code: 0,
        };
    }
    0
}
