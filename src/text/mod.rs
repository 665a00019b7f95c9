//! Bengali text structure: character classes, clusters and cluster reordering.

pub mod cluster;
pub mod reorder;
pub mod script;

pub use cluster::{segment, ClusterSpan, Segment};
pub use reorder::{reorder, reorder_with, ReorderMode};
pub use script::{char_class, CharClass};
