use crate::graph::FragmentId;

/// 组装过程中的错误类型
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ScsError {
    #[error("sequence length must be non-negative, got {length}")]
    InvalidLength { length: i64 },
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
    #[error("invalid base '{base}' at position {position} (expected A, C, G or T)")]
    InvalidSequence { position: usize, base: char },
    #[error("no overlap edge left to contract while {remaining} fragments remain; try a lower threshold")]
    NoOverlapAvailable { remaining: usize },
    #[error("no overlap edge from fragment {suffix} to fragment {prefix}")]
    MissingEdge { suffix: FragmentId, prefix: FragmentId },
    #[error("fragment set is empty")]
    EmptyFragmentSet,
}

pub type Result<T> = std::result::Result<T, ScsError>;
