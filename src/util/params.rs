use crate::error::{Result, ScsError};
use crate::kmer;

/// 组装参数：k-mer 长度与建图时的最小重叠阈值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyParams {
    pub k: usize,
    pub threshold: usize,
}

impl AssemblyParams {
    pub fn new(k: usize, threshold: usize) -> Self {
        Self { k, threshold }
    }

    /// 检查 `1 <= k <= seq_len` 且 `threshold < k`
    pub fn validate(&self, seq_len: usize) -> Result<()> {
        if self.k == 0 {
            return Err(ScsError::InvalidParameters("k must be at least 1".to_string()));
        }
        if self.k > seq_len {
            return Err(ScsError::InvalidParameters(format!(
                "k ({}) cannot be higher than the length of the sequence ({})",
                self.k, seq_len
            )));
        }
        if self.threshold >= self.k {
            return Err(ScsError::InvalidParameters(format!(
                "overlap threshold ({}) must be smaller than k ({})",
                self.threshold, self.k
            )));
        }
        Ok(())
    }

    pub fn kmer_count(&self, seq_len: usize) -> usize {
        kmer::kmer_count(seq_len, self.k)
    }
}
