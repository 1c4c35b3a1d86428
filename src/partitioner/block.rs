//! A `Block` groups nodes, edges, and role members by their broadcast
//! owner key. Blocks are the unit the [`crate::partitioner::assign`]
//! stage places into partitions.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::partitioner::graph_tables::GraphTables;
use crate::partitioner::sharded_map::ShardedIdMap;

#[derive(Debug, Clone)]
pub struct Block {
    pub owner: String,
    pub tables: GraphTables,
}

impl Block {
    pub fn node_count(&self) -> usize {
        self.tables.node_table.node_count()
    }
}

/// Owner of `key` after broadcasting: whatever the id map already holds,
/// or a self-claim if nothing reached it. At this point all broadcasts
/// have joined, so this ordinary (unlocked) insert is safe.
fn owner_of(id_map: &ShardedIdMap, key: &str) -> String {
    match id_map.get(key) {
        Some(owner) => owner,
        None => {
            id_map.try_claim(key, key);
            key.to_string()
        }
    }
}

/// Group every node, edge, and role member by its owner key, and return
/// the resulting blocks sorted by node count descending, ties broken by
/// owner key ascending (Design Note "Tie-break stability under
/// multi-thread").
pub fn build_blocks(graph: &GraphTables, id_map: &ShardedIdMap) -> Vec<Block> {
    let mut by_owner: HashMap<String, Block> = HashMap::new();
    let headers = graph.headers_only();

    let mut block_for = |owner: &str, by_owner: &mut HashMap<String, Block>| {
        by_owner
            .entry(owner.to_string())
            .or_insert_with(|| Block {
                owner: owner.to_string(),
                tables: headers.clone(),
            })
    };

    for row in &graph.node_table.rows {
        let Some(key) = row.first() else { continue };
        let owner = owner_of(id_map, key);
        block_for(&owner, &mut by_owner)
            .tables
            .node_table
            .rows
            .push(row.clone());
    }

    for row in &graph.edge_table.rows {
        let Some(src) = row.first() else { continue };
        let owner = owner_of(id_map, src);
        block_for(&owner, &mut by_owner)
            .tables
            .edge_table
            .rows
            .push(row.clone());
    }

    for key in &graph.train.keys {
        let owner = owner_of(id_map, key);
        block_for(&owner, &mut by_owner)
            .tables
            .train
            .keys
            .push(key.clone());
    }
    for key in &graph.val.keys {
        let owner = owner_of(id_map, key);
        block_for(&owner, &mut by_owner)
            .tables
            .val
            .keys
            .push(key.clone());
    }
    for key in &graph.test.keys {
        let owner = owner_of(id_map, key);
        block_for(&owner, &mut by_owner)
            .tables
            .test
            .keys
            .push(key.clone());
    }

    let mut blocks: Vec<Block> = by_owner.into_values().collect();
    blocks.sort_by_key(|b| (Reverse(b.node_count()), b.owner.clone()));
    blocks
}
