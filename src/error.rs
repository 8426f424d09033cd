use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeoTableError>;

#[derive(Error, Debug)]
pub enum GeoTableError {
    #[error("Unrecognized {kind} unit: '{unit}'")]
    UnrecognizedUnit { unit: String, kind: &'static str },

    #[error("Unknown table kind: '{0}' (expected nodes, arcs or assignments)")]
    UnknownTableKind(String),

    #[error("Start id must be a positive integer, got {0}")]
    InvalidStartId(u32),

    #[error("Cannot assign {count} ids starting at {first}: identifier space exhausted")]
    IdOverflow { first: u32, count: usize },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Export failed: {0}")]
    ExportFailed(String),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid coordinate format: {0}")]
    InvalidCoordinate(String),

    #[error("Cannot compute a map boundary without any coordinates")]
    EmptyBoundary,

    #[error("Road snapping returned {actual} locations for {expected} inputs")]
    SnapMismatch { expected: usize, actual: usize },

    #[error("Road snapping failed: {0}")]
    Snap(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for GeoTableError {
    fn from(err: config::ConfigError) -> Self {
        GeoTableError::Config(err.to_string())
    }
}
