pub mod analyzers;
pub mod builders;
pub mod cli;
pub mod error;
pub mod models;
pub mod readers;
pub mod settings;
pub mod snap;
pub mod table;
pub mod units;
pub mod utils;
pub mod writers;

pub use analyzers::{compute_boundary, MapBoundary};
pub use builders::{ArcBuilder, NodeBuilder};
pub use error::{GeoTableError, Result};
pub use table::{init_table, AnyTable, Table, TableKind, TableRow};
pub use units::{convert_distance, convert_speed, convert_time};
pub use writers::TableExporter;
