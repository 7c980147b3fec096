//! 重叠图与片段仓库。

pub mod build;
pub mod overlap_graph;
pub mod store;

pub use build::build;
pub use overlap_graph::OverlapGraph;
pub use store::{FragmentId, FragmentStore};
