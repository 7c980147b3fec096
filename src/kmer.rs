/// 将序列切分为有序、相互重叠的 k-mer 列表（起点 0..=len-k）。
///
/// 内容相同但起点不同的 k-mer 作为不同的条目保留。
/// 序列必须为 ASCII（A/C/G/T）；含非 ASCII 字符、`k == 0` 或 `k > seq.len()`
/// 时返回空列表。
pub fn extract(seq: &str, k: usize) -> Vec<&str> {
    if k == 0 || k > seq.len() {
        return Vec::new();
    }
    if !seq.is_ascii() {
        log::warn!("non-ASCII sequence rejected by k-mer extraction");
        return Vec::new();
    }
    (0..=seq.len() - k).map(|i| &seq[i..i + k]).collect()
}

/// k-mer 数量：len - k + 1（参数越界时为 0）
#[inline]
pub fn kmer_count(seq_len: usize, k: usize) -> usize {
    if k == 0 || k > seq_len {
        0
    } else {
        seq_len - k + 1
    }
}
