pub mod constants;
pub mod coordinates;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use coordinates::{dms_to_decimal, haversine_distance, parse_coordinate};
pub use filename::{generate_default_table_filename, normalize_separators};
pub use progress::ProgressReporter;
