#![allow(dead_code)]

use criterion::PlotConfiguration;
use slot_bst::SlotBst;

// unbalanced shapes are exponential-space in this layout, so the benchmark
// trees are built from a midpoint insertion order and stay dense
pub const SIZES: [usize; 4] = [1 << 8, 1 << 10, 1 << 12, 1 << 14];

/// An insertion order for `0..len` that produces a balanced tree: every
/// range contributes its midpoint before either half.
pub fn balanced_order(len: usize) -> Vec<u64> {
    fn push(out: &mut Vec<u64>, low: u64, high: u64) {
        let mid = low + (high - low) / 2;
        out.push(mid);
        if mid > low {
            push(out, low, mid - 1);
        }
        if mid < high {
            push(out, mid + 1, high);
        }
    }

    let mut order = Vec::with_capacity(len);
    if len > 0 {
        push(&mut order, 0, len as u64 - 1);
    }
    order
}

pub fn build_tree(len: usize) -> SlotBst<u64> {
    balanced_order(len).into_iter().collect()
}

pub fn plot_config() -> PlotConfiguration {
    PlotConfiguration::default().summary_scale(criterion::AxisScale::Logarithmic)
}
