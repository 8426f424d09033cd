pub mod arc_builder;
pub mod node_builder;

pub use arc_builder::ArcBuilder;
pub use node_builder::NodeBuilder;
