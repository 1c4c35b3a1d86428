//! Output-folder layout: `metadata` plus one `part<k>/` subfolder per
//! partition, each holding the same five files an input folder has.

use std::fs;
use std::path::Path;

use crate::error::{PartitionError, Result};
use crate::partitioner::partition::Partition;
use crate::partitioner::table::{write_role_array, write_table};

/// `(node_key, partition_index)` pairs obtained by walking each
/// partition's node table in order.
pub fn build_metadata(partitions: &[Partition]) -> Vec<(String, usize)> {
    let mut metadata = Vec::new();
    for (index, partition) in partitions.iter().enumerate() {
        for row in &partition.tables.node_table.rows {
            if let Some(key) = row.first() {
                metadata.push((key.clone(), index));
            }
        }
    }
    metadata
}

pub fn write_metadata(
    output_folder: &Path,
    node_key_column: &str,
    metadata: &[(String, usize)],
) -> Result<()> {
    let path = output_folder.join("metadata");
    let mut lines = vec![format!("{node_key_column}\tpartition-id:int64")];
    lines.extend(metadata.iter().map(|(key, idx)| format!("{key}\t{idx}")));
    fs::write(&path, lines.join("\n") + "\n").map_err(|e| PartitionError::io(&path, e))
}

pub fn write_partitions(output_folder: &Path, partitions: &[Partition]) -> Result<()> {
    for (index, partition) in partitions.iter().enumerate() {
        let part_dir = output_folder.join(format!("part{index}"));
        fs::create_dir_all(&part_dir).map_err(|e| PartitionError::io(&part_dir, e))?;
        write_table(&part_dir.join("node_table"), &partition.tables.node_table)?;
        write_table(&part_dir.join("edge_table"), &partition.tables.edge_table)?;
        write_role_array(&part_dir.join("train_table"), &partition.tables.train)?;
        write_role_array(&part_dir.join("val_table"), &partition.tables.val)?;
        write_role_array(&part_dir.join("test_table"), &partition.tables.test)?;
    }
    Ok(())
}
