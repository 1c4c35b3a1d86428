//! Wires the pipeline: load -> seed -> broadcast -> build blocks ->
//! assign -> emit. This is the only place that knows the full sequence;
//! every stage it calls is independently unit-tested.

use tracing::info;

use crate::config::PartitionConfig;
use crate::error::{PartitionError, Result};
use crate::partitioner::adjacency::AdjacencyIndex;
use crate::partitioner::assign::{assign_blocks, Coefficients};
use crate::partitioner::block::build_blocks;
use crate::partitioner::broadcast::{run_broadcasts, seed_self_ownership};
use crate::partitioner::graph_tables::GraphTables;
use crate::partitioner::io::{build_metadata, write_metadata, write_partitions};
use crate::partitioner::sharded_map::ShardedIdMap;

/// Run the full pipeline against `config` and write its output folder.
pub fn run(config: &PartitionConfig) -> Result<()> {
    if config.num_partitions == 0 {
        return Err(PartitionError::ZeroPartitions);
    }

    info!(input = %config.input_folder.display(), "loading graph");
    let graph = GraphTables::load(&config.input_folder)?;
    info!(
        nodes = graph.node_table.node_count(),
        edges = graph.edge_table.node_count(),
        "graph loaded"
    );

    let id_map = ShardedIdMap::new();
    let sources: Vec<String> = graph.role_keys_in_order().map(str::to_string).collect();
    seed_self_ownership(&id_map, sources.iter().map(String::as_str));

    let adjacency = AdjacencyIndex::build(&graph.edge_table);
    info!(sources = sources.len(), k_hop = config.k_hop, "broadcasting");
    run_broadcasts(&sources, &adjacency, &id_map, config.k_hop, config.workers)?;

    let blocks = build_blocks(&graph, &id_map);
    info!(blocks = blocks.len(), "blocks constructed");

    let coeffs = Coefficients::new(
        config.alpha,
        config.beta,
        config.gamma,
        graph.train.len(),
        graph.val.len(),
        graph.test.len(),
        config.num_partitions,
    );
    let partitions = assign_blocks(
        blocks,
        config.num_partitions,
        &coeffs,
        &graph,
        config.legacy_bs_formula,
    );
    info!(partitions = partitions.len(), "blocks assigned");

    std::fs::create_dir_all(&config.output_folder)
        .map_err(|e| PartitionError::io(&config.output_folder, e))?;
    write_partitions(&config.output_folder, &partitions)?;

    let node_key_column = graph
        .node_table
        .header
        .first()
        .cloned()
        .unwrap_or_else(|| "node_id".to_string());
    let metadata = build_metadata(&partitions);
    write_metadata(&config.output_folder, &node_key_column, &metadata)?;

    info!(output = %config.output_folder.display(), "partitioning complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_input(dir: &std::path::Path) {
        fs::write(dir.join("node_table"), "node_id\tfeat\na\t1\nb\t2\nc\t3\nd\t4\n").unwrap();
        fs::write(dir.join("edge_table"), "src\tdst\na\tb\nc\td\n").unwrap();
        fs::write(dir.join("train_table"), "node_id\na\nc\n").unwrap();
        fs::write(dir.join("val_table"), "node_id\n").unwrap();
        fs::write(dir.join("test_table"), "node_id\n").unwrap();
    }

    #[test]
    fn end_to_end_run_produces_complete_partitioning() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write_input(input.path());

        let config = PartitionConfig {
            input_folder: input.path().to_path_buf(),
            output_folder: output.path().to_path_buf(),
            num_partitions: 2,
            alpha: 1.0,
            beta: 1.0,
            gamma: 1.0,
            k_hop: 1,
            workers: Some(1),
            legacy_bs_formula: true,
        };
        run(&config).unwrap();

        let metadata = fs::read_to_string(output.path().join("metadata")).unwrap();
        let lines: Vec<&str> = metadata.lines().collect();
        assert_eq!(lines[0], "node_id\tpartition-id:int64");
        // completeness: every input node appears exactly once across parts.
        assert_eq!(lines.len() - 1, 4);
        assert!(output.path().join("part0/node_table").exists());
        assert!(output.path().join("part1/node_table").exists());
    }

    #[test]
    fn zero_partitions_is_rejected() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write_input(input.path());
        let config = PartitionConfig {
            input_folder: input.path().to_path_buf(),
            output_folder: output.path().to_path_buf(),
            num_partitions: 0,
            alpha: 0.0,
            beta: 0.0,
            gamma: 0.0,
            k_hop: 1,
            workers: Some(1),
            legacy_bs_formula: true,
        };
        assert!(matches!(run(&config), Err(PartitionError::ZeroPartitions)));
    }
}
