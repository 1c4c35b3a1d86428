//! Tabular data model: `Table` (node/edge tables) and `RoleArray`
//! (Train/Val/Test role sets), plus their tab-separated on-disk format.
//!
//! A row is kept as `Vec<String>` and never parsed further — column 0 is
//! the only column this crate ever looks at, everything else rides along
//! verbatim from input to output.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{PartitionError, Result};

pub type Row = Vec<String>;

/// A node table or edge table: a header plus zero or more rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn node_count(&self) -> usize {
        self.rows.len()
    }
}

/// One of Train, Val, or Test: a header plus an ordered list of node keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleArray {
    pub header: Vec<String>,
    pub keys: Vec<String>,
}

impl RoleArray {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Split a line on runs of tabs, after stripping a trailing `\r`/`\n`.
fn split_line(line: &str) -> Vec<String> {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    trimmed
        .split('\t')
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| PartitionError::io(path, e))?;
    Ok(BufReader::new(file))
}

/// Read a header + matrix table (`node_table` / `edge_table` format).
pub fn read_table(path: &Path) -> Result<Table> {
    let mut reader = open(path)?;
    let mut header_line = String::new();
    reader
        .read_line(&mut header_line)
        .map_err(|e| PartitionError::io(path, e))?;
    if header_line.trim_end_matches(['\r', '\n']).is_empty() {
        return Err(PartitionError::EmptyHeader {
            path: path.to_path_buf(),
        });
    }
    let header = split_line(&header_line);

    let mut rows = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| PartitionError::io(path, e))?;
        if line.is_empty() {
            continue;
        }
        rows.push(split_line(&line));
    }
    Ok(Table { header, rows })
}

/// Read a header + one-key-per-line role file (`train_table` / `val_table`
/// / `test_table` format). Only column 0 of each row is kept as the key.
pub fn read_role_array(path: &Path) -> Result<RoleArray> {
    let mut reader = open(path)?;
    let mut header_line = String::new();
    reader
        .read_line(&mut header_line)
        .map_err(|e| PartitionError::io(path, e))?;
    if header_line.trim_end_matches(['\r', '\n']).is_empty() {
        return Err(PartitionError::EmptyHeader {
            path: path.to_path_buf(),
        });
    }
    let header = split_line(&header_line);

    let mut keys = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| PartitionError::io(path, e))?;
        if line.is_empty() {
            continue;
        }
        let fields = split_line(&line);
        if let Some(key) = fields.into_iter().next() {
            keys.push(key);
        }
    }
    Ok(RoleArray { header, keys })
}

fn write_row(writer: &mut impl Write, path: &Path, fields: &[String]) -> Result<()> {
    let line = fields.join("\t");
    writeln!(writer, "{line}").map_err(|e| PartitionError::io(path, e))
}

pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let file = File::create(path).map_err(|e| PartitionError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_row(&mut writer, path, &table.header)?;
    for row in &table.rows {
        write_row(&mut writer, path, row)?;
    }
    writer.flush().map_err(|e| PartitionError::io(path, e))
}

pub fn write_role_array(path: &Path, array: &RoleArray) -> Result<()> {
    let file = File::create(path).map_err(|e| PartitionError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_row(&mut writer, path, &array.header)?;
    for key in &array.keys {
        writeln!(writer, "{key}").map_err(|e| PartitionError::io(path, e))?;
    }
    writer.flush().map_err(|e| PartitionError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_line_collapses_tab_runs_and_strips_crlf() {
        assert_eq!(split_line("a\t\tb\tc\r\n"), vec!["a", "b", "c"]);
        assert_eq!(split_line("solo\n"), vec!["solo"]);
    }

    #[test]
    fn read_write_table_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("node_table");
        let table = Table {
            header: vec!["node_id".into(), "feat".into()],
            rows: vec![
                vec!["a".into(), "1.0".into()],
                vec!["b".into(), "2.0".into()],
            ],
        };
        write_table(&path, &table).unwrap();
        let roundtripped = read_table(&path).unwrap();
        assert_eq!(roundtripped, table);
    }

    #[test]
    fn read_table_rejects_empty_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("node_table");
        std::fs::write(&path, "\na\tb\n").unwrap();
        assert!(matches!(
            read_table(&path),
            Err(PartitionError::EmptyHeader { .. })
        ));
    }

    #[test]
    fn read_table_tolerates_ragged_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edge_table");
        std::fs::write(&path, "src\tdst\tweight\na\tb\n").unwrap();
        let table = read_table(&path).unwrap();
        assert_eq!(table.rows[0], vec!["a", "b"]);
    }
}
