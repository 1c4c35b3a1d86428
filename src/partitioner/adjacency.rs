//! Directed out-neighbor lookup, built once from the edge table and
//! read-only for the rest of the run.

use std::collections::HashMap;

use crate::partitioner::table::Table;

pub struct AdjacencyIndex {
    out_neighbors: HashMap<String, Vec<String>>,
}

impl AdjacencyIndex {
    /// Scan every edge row once, appending destination to the list for
    /// its source. No deduplication — parallel edges are kept, so a
    /// broadcast may revisit a vertex it already claimed; that's cheap
    /// since the revisit is just a failed `try_claim`.
    pub fn build(edge_table: &Table) -> Self {
        let mut out_neighbors: HashMap<String, Vec<String>> = HashMap::new();
        for row in &edge_table.rows {
            let (Some(src), Some(dst)) = (row.first(), row.get(1)) else {
                continue;
            };
            out_neighbors
                .entry(src.clone())
                .or_default()
                .push(dst.clone());
        }
        AdjacencyIndex { out_neighbors }
    }

    /// Out-neighbors of `key` in edge-table order. A source with no
    /// outgoing edges yields an empty slice.
    pub fn neighbors(&self, key: &str) -> &[String] {
        self.out_neighbors
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
