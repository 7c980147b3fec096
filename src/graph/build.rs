use super::overlap_graph::OverlapGraph;
use super::store::{FragmentId, FragmentStore};
use crate::kmer;
use crate::overlap::overlap;

/// 从序列构建初始重叠图与片段仓库。
///
/// 对每一对有序且不同的 k-mer 计算重叠，仅当重叠 ≥ `threshold` 时加边。
/// 调用方负责保证 `1 <= k <= seq.len()` 且 `threshold < k`，这里不再检查。
pub fn build(seq: &str, k: usize, threshold: usize) -> (OverlapGraph, FragmentStore) {
    let kmers = kmer::extract(seq, k);
    let store = FragmentStore::from_kmers(&kmers);

    let mut graph = OverlapGraph::new();
    for (s, suf) in kmers.iter().enumerate() {
        let src = FragmentId::from(s);
        graph.add_node(src);
        for (p, pre) in kmers.iter().enumerate() {
            if s == p {
                continue;
            }
            let len = overlap(suf, pre);
            if len >= threshold {
                graph.insert_edge(src, FragmentId::from(p), len);
            }
        }
    }

    log::info!(
        "overlap graph built: {} k-mers (k={}), {} edges with overlap >= {}",
        kmers.len(),
        k,
        graph.edge_count(),
        threshold
    );
    (graph, store)
}
