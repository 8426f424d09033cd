use chrono::{Datelike, Local};
use std::path::PathBuf;

use crate::table::TableKind;
use crate::utils::constants::DEFAULT_OUTPUT_DIR;

/// Default export path with format: output/{kind}-{YYMMDD}.csv
pub fn generate_default_table_filename(kind: TableKind) -> PathBuf {
    let now = Local::now();

    let filename = format!(
        "{}-{:02}{:02}{:02}.csv",
        kind.name(),
        now.year() % 100,
        now.month(),
        now.day()
    );
    PathBuf::from(DEFAULT_OUTPUT_DIR).join(filename)
}

/// Replace Windows separators so paths split the same way on every platform
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
