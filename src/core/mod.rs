pub mod relevance;
pub mod snapshot_generator;
pub mod tree_walker;
