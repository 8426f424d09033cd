pub mod location_reader;
pub mod table_reader;

pub use location_reader::LocationReader;
pub use table_reader::{import_table, read_table};
