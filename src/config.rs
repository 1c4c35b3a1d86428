//! CLI surface and run configuration.
//!
//! `Cli` is the `clap`-derived argument struct; `PartitionConfig` is the
//! validated, library-facing configuration the orchestrator actually runs
//! with. Keeping the two separate means `partitioner::orchestrator` never
//! depends on `clap` types.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

/// Partition a labeled, directed graph into N vertex-disjoint partitions.
#[derive(Parser, Debug)]
#[command(name = "partition")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Folder containing node_table, edge_table, train_table, val_table, test_table
    pub input_folder: PathBuf,

    /// Folder to write metadata and part<k>/ subfolders into
    pub output_folder: PathBuf,

    /// Number of partitions to produce
    pub num_partitions: NonZeroUsize,

    /// Weight on the Train role set in the balance score
    pub alpha: f64,

    /// Weight on the Val role set in the balance score
    pub beta: f64,

    /// Weight on the Test role set in the balance score
    pub gamma: f64,

    /// Maximum BFS hop count for neighborhood broadcasts
    #[arg(long, default_value_t = 1)]
    pub k_hop: usize,

    /// Worker threads for concurrent broadcasting (default: all logical CPUs)
    #[arg(long)]
    pub workers: Option<usize>,

    /// Preserve the reference's balance-score formula, which weights Val
    /// by the Train coefficient instead of the Beta coefficient (see
    /// SPEC_FULL.md §4.5 / Open Question 1). Pass `--legacy-bs-formula=false`
    /// for the corrected formula.
    #[arg(long, default_value_t = true)]
    pub legacy_bs_formula: bool,

    /// Minimum tracing level to emit (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Validated configuration the orchestrator runs with.
#[derive(Debug, Clone)]
pub struct PartitionConfig {
    pub input_folder: PathBuf,
    pub output_folder: PathBuf,
    pub num_partitions: usize,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub k_hop: usize,
    pub workers: Option<usize>,
    pub legacy_bs_formula: bool,
}

impl From<Cli> for PartitionConfig {
    fn from(cli: Cli) -> Self {
        PartitionConfig {
            input_folder: cli.input_folder,
            output_folder: cli.output_folder,
            num_partitions: cli.num_partitions.get(),
            alpha: cli.alpha,
            beta: cli.beta,
            gamma: cli.gamma,
            k_hop: cli.k_hop,
            workers: cli.workers,
            legacy_bs_formula: cli.legacy_bs_formula,
        }
    }
}
