//! Greedy, score-maximizing placement of blocks into partitions.
//!
//! Blocks arrive largest-first. For each block the assigner scores every
//! partition with a Cross-Edge term (locality) times a Balance-Score term
//! (remaining capacity), and places the block in the partition with the
//! highest product, ties going to the lowest index.

use tracing::debug;

use crate::partitioner::block::Block;
use crate::partitioner::graph_tables::GraphTables;
use crate::partitioner::partition::Partition;

/// "Strictly greater" tie-break guard (SPEC_FULL.md §4.5).
const EPS: f64 = 1e-6;

/// Per-role capacity coefficients, already scaled by `N` and the user's
/// α/β/γ weights.
pub struct Coefficients {
    pub alpha_c: f64,
    pub beta_c: f64,
    pub gamma_c: f64,
}

impl Coefficients {
    pub fn new(alpha: f64, beta: f64, gamma: f64, train: usize, val: usize, test: usize, n: usize) -> Self {
        let n = n as f64;
        Coefficients {
            alpha_c: alpha * train as f64 / n,
            beta_c: beta * val as f64 / n,
            gamma_c: gamma * test as f64 / n,
        }
    }
}

fn cross_edge_score(partition: &Partition, block: &Block) -> f64 {
    if partition.node_size() == 0 {
        0.0
    } else {
        partition.cross_edge(block) as f64 / partition.node_size() as f64
    }
}

/// `legacy_bs_formula = true` preserves the reference's weighting of Val
/// by the Train coefficient instead of the Beta coefficient (Open
/// Question 1, SPEC_FULL.md §4.5). `false` uses the corrected formula.
fn balance_score(partition: &Partition, coeffs: &Coefficients, legacy_bs_formula: bool) -> f64 {
    let val_coeff = if legacy_bs_formula {
        coeffs.alpha_c
    } else {
        coeffs.beta_c
    };
    1.0 - coeffs.alpha_c * partition.train_size() as f64
        - val_coeff * partition.val_size() as f64
        - coeffs.gamma_c * partition.test_size() as f64
}

/// Place every block into one of `n` partitions under the CE x BS
/// objective, largest block first.
pub fn assign_blocks(
    blocks: Vec<Block>,
    n: usize,
    coeffs: &Coefficients,
    headers: &GraphTables,
    legacy_bs_formula: bool,
) -> Vec<Partition> {
    let mut partitions: Vec<Partition> = (0..n)
        .map(|_| Partition::with_headers(headers.headers_only()))
        .collect();

    for (i, block) in blocks.into_iter().enumerate() {
        let mut best = 0;
        let mut best_score = f64::MIN;
        for (j, partition) in partitions.iter().enumerate() {
            let ce = cross_edge_score(partition, &block);
            let bs = balance_score(partition, coeffs, legacy_bs_formula);
            let score = ce * bs;
            debug!(block = i, partition = j, ce, bs, score, "scored placement");
            if score > best_score + EPS {
                best_score = score;
                best = j;
            }
        }
        debug!(block = i, partition = best, "placed block");
        partitions[best].add_block(block);
    }

    partitions
}
