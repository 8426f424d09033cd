use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::table::{Table, TableRow};

/// Read a table previously written by the exporter.
///
/// Columns are matched by name, so the leading row-index column is ignored.
pub fn import_table<R: TableRow>(path: &Path) -> Result<Table<R>> {
    let file = std::fs::File::open(path)?;
    read_table(file)
}

pub fn read_table<R: TableRow, S: Read>(source: S) -> Result<Table<R>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(source);

    let rows = reader
        .deserialize::<R>()
        .collect::<std::result::Result<Vec<R>, csv::Error>>()?;

    Ok(Table::from_rows(rows))
}
