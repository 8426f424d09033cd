use csv::WriterBuilder;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, info};

use crate::error::{GeoTableError, Result};
use crate::settings::Settings;
use crate::table::{AnyTable, Table, TableRow};
use crate::utils::filename::normalize_separators;

/// Writes tables as CSV with a leading row-index column
pub struct TableExporter {
    show_output_message: bool,
}

impl TableExporter {
    pub fn new() -> Self {
        Self {
            show_output_message: true,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new().with_output_message(settings.show_output_message)
    }

    pub fn with_output_message(mut self, show: bool) -> Self {
        self.show_output_message = show;
        self
    }

    /// Serialize `table` into any writer: header row first, then one
    /// indexed line per row
    pub fn write_table<R: TableRow, W: Write>(&self, table: &Table<R>, writer: W) -> Result<()> {
        let mut csv_writer = WriterBuilder::new().from_writer(writer);

        let mut header = vec![""];
        header.extend_from_slice(table.columns());
        csv_writer.write_record(&header)?;

        for (index, row) in table.iter().enumerate() {
            let mut record = Vec::with_capacity(table.columns().len() + 1);
            record.push(index.to_string());
            record.extend(row.fields());
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Export to `path`, creating parent directories. Errors are returned.
    pub fn try_export<R: TableRow>(&self, table: &Table<R>, path: &str) -> Result<PathBuf> {
        let normalized = normalize_separators(path.trim());
        if normalized.is_empty() || normalized.ends_with('/') {
            return Err(GeoTableError::InvalidPath(format!(
                "'{}' does not name a file",
                path
            )));
        }

        let target = PathBuf::from(normalized);
        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = fs::File::create(&target)?;
        self.write_table(table, file)?;

        info!("Wrote {} {} rows to {}", table.len(), table.kind(), target.display());
        Ok(target)
    }

    /// Export to `path`, reporting any failure instead of returning it.
    ///
    /// Returns whether the file was written.
    pub fn export<R: TableRow>(&self, table: &Table<R>, path: &str) -> bool {
        match self.try_export(table, path) {
            Ok(target) => {
                if self.show_output_message {
                    println!("Message: Data written to {}.", target.display());
                }
                true
            }
            Err(e) => {
                error!("Failed to export {} table to '{}': {}", table.kind(), path, e);
                eprintln!("Error: Cannot export table to '{}': {}", path, e);
                false
            }
        }
    }

    pub fn export_any(&self, table: &AnyTable, path: &str) -> bool {
        match table {
            AnyTable::Nodes(t) => self.export(t, path),
            AnyTable::Arcs(t) => self.export(t, path),
            AnyTable::Assignments(t) => self.export(t, path),
        }
    }
}

impl Default for TableExporter {
    fn default() -> Self {
        Self::new()
    }
}
