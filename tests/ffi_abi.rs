use sssp_relax::ffi::{SSSP_MODE_SHORTEST, SSSP_MODE_WIDEST_PRODUCT};
use sssp_relax::{sssp_relax_compute, sssp_relax_version, SsspRelaxInfo};

// Triangle 0->1 (1.0), 0->2 (2.0), 1->2 (0.25) plus isolated vertex 3
const OFFSETS: [u32; 5] = [0, 2, 3, 3, 3];
const TARGETS: [u32; 3] = [1, 2, 2];
const WEIGHTS: [f64; 3] = [1.0, 2.0, 0.25];

fn call(mode: u32, source: u32) -> (i32, Vec<f64>, Vec<i32>, SsspRelaxInfo) {
    let n = 4u32;
    let mut dist = vec![0f64; n as usize];
    let mut pred = vec![0i32; n as usize];
    let mut info = SsspRelaxInfo::default();
    let rc = unsafe {
        sssp_relax_compute(n, OFFSETS.as_ptr(), TARGETS.as_ptr(), WEIGHTS.as_ptr(), source, mode, dist.as_mut_ptr(), pred.as_mut_ptr(), &mut info as *mut _)
    };
    (rc, dist, pred, info)
}

#[test]
fn shortest_over_csr() {
    let (rc, dist, pred, info) = call(SSSP_MODE_SHORTEST, 1);
    assert_eq!(rc, 0);
    assert_eq!(dist, vec![0.0, 1.0, 1.25, -1.0]);
    assert_eq!(pred, vec![-1, 0, 1, -1]);
    assert_eq!(info.error_code, 0);
    assert_eq!(info.extractions, 4);
    assert_eq!(info.settled, 3);
}

#[test]
fn widest_product_over_csr() {
    let (rc, dist, _pred, info) = call(SSSP_MODE_WIDEST_PRODUCT, 1);
    assert_eq!(rc, 0);
    // direct 0->2 (2.0) beats 1.0 * 0.25
    assert_eq!(dist, vec![1.0, 1.0, 2.0, -1.0]);
    assert_eq!(info.settled, 3);
}

#[test]
fn bad_arguments_return_codes() {
    assert_eq!(call(SSSP_MODE_SHORTEST, 0).0, -2);
    assert_eq!(call(SSSP_MODE_SHORTEST, 5).0, -2);
    let (rc, _, _, info) = call(9, 1);
    assert_eq!(rc, -5);
    assert_eq!(info.error_code, 0); // untouched: rejected before running
    let mut dist = [0f64; 1];
    let rc = unsafe { sssp_relax_compute(0, OFFSETS.as_ptr(), TARGETS.as_ptr(), WEIGHTS.as_ptr(), 1, 0, dist.as_mut_ptr(), core::ptr::null_mut(), core::ptr::null_mut()) };
    assert_eq!(rc, -1);
    let rc = unsafe { sssp_relax_compute(1, core::ptr::null(), TARGETS.as_ptr(), WEIGHTS.as_ptr(), 1, 0, dist.as_mut_ptr(), core::ptr::null_mut(), core::ptr::null_mut()) };
    assert_eq!(rc, -3);
}

#[test]
fn target_out_of_range_is_malformed_csr() {
    let off = [0u32, 1, 1];
    let tgt = [7u32];
    let wts = [1.0f64];
    let mut dist = [0f64; 2];
    let mut info = SsspRelaxInfo::default();
    let rc = unsafe { sssp_relax_compute(2, off.as_ptr(), tgt.as_ptr(), wts.as_ptr(), 1, SSSP_MODE_SHORTEST, dist.as_mut_ptr(), core::ptr::null_mut(), &mut info as *mut _) };
    assert_eq!(rc, -4);
    assert_eq!(info.error_code, -4);
}

#[test]
fn predecessor_marks_reachable_minus_one_cost() {
    let off = [0u32, 1, 1];
    let tgt = [1u32];
    let wts = [-1.0f64];
    let mut dist = [0f64; 2];
    let mut pred = [0i32; 2];
    let rc = unsafe { sssp_relax_compute(2, off.as_ptr(), tgt.as_ptr(), wts.as_ptr(), 1, SSSP_MODE_SHORTEST, dist.as_mut_ptr(), pred.as_mut_ptr(), core::ptr::null_mut()) };
    assert_eq!(rc, 0);
    assert_eq!(dist, [0.0, -1.0]);
    assert_eq!(pred, [-1, 0]);
}

#[test]
fn version_is_nonzero() {
    assert!(sssp_relax_version() >= 1);
}
