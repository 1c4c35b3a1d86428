//! `GraphTables`: the node/edge/role-array bundle shared by a `Graph`
//! (the whole input), a `Block` (one neighborhood), and a `Partition`
//! (one output shard). Composition, not inheritance — see SPEC_FULL.md
//! §3 and Design Note "Inheritance of Block and Partition from Graph".

use std::path::Path;

use crate::error::Result;
use crate::partitioner::table::{read_role_array, read_table, RoleArray, Table};

#[derive(Debug, Clone, Default)]
pub struct GraphTables {
    pub node_table: Table,
    pub edge_table: Table,
    pub train: RoleArray,
    pub val: RoleArray,
    pub test: RoleArray,
}

impl GraphTables {
    /// Load the five well-known files out of an input folder.
    pub fn load(input_folder: &Path) -> Result<Self> {
        Ok(GraphTables {
            node_table: read_table(&input_folder.join("node_table"))?,
            edge_table: read_table(&input_folder.join("edge_table"))?,
            train: read_role_array(&input_folder.join("train_table"))?,
            val: read_role_array(&input_folder.join("val_table"))?,
            test: read_role_array(&input_folder.join("test_table"))?,
        })
    }

    /// Headers only, used to stamp freshly created `Block`/`Partition`
    /// tables before any rows are added.
    pub fn headers_only(&self) -> GraphTables {
        GraphTables {
            node_table: Table {
                header: self.node_table.header.clone(),
                rows: Vec::new(),
            },
            edge_table: Table {
                header: self.edge_table.header.clone(),
                rows: Vec::new(),
            },
            train: RoleArray {
                header: self.train.header.clone(),
                keys: Vec::new(),
            },
            val: RoleArray {
                header: self.val.header.clone(),
                keys: Vec::new(),
            },
            test: RoleArray {
                header: self.test.header.clone(),
                keys: Vec::new(),
            },
        }
    }

    /// Train, Val, and Test keys in that order — the canonical
    /// single-threaded broadcast seeding/traversal order (SPEC_FULL.md §5).
    pub fn role_keys_in_order(&self) -> impl Iterator<Item = &str> {
        self.train
            .keys
            .iter()
            .chain(self.val.keys.iter())
            .chain(self.test.keys.iter())
            .map(String::as_str)
    }
}
