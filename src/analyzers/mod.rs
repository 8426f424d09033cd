pub mod boundary;

pub use boundary::{compute_boundary, MapBoundary};
