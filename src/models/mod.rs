pub mod arc;
pub mod assignment;
pub mod location;
pub mod node;
pub mod style;

pub use arc::Arc;
pub use assignment::Assignment;
pub use location::Location;
pub use node::Node;
pub use style::{ArcStyle, CesiumIconStyle, LeafletIconStyle, LineStyle};
