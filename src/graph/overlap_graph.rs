use std::collections::BTreeMap;

use super::store::FragmentId;

/// 有向带权重叠图：source → (destination → 重叠长度)。
///
/// 边权表示 source 的后缀与 destination 的前缀的重叠长度。不存在自环。
/// 使用 BTreeMap，遍历顺序只取决于句柄，固定随机种子时结果可复现。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlapGraph {
    rows: BTreeMap<FragmentId, BTreeMap<FragmentId, usize>>,
}

impl OverlapGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// 确保节点存在（可以没有出边）
    pub fn add_node(&mut self, id: FragmentId) {
        self.rows.entry(id).or_default();
    }

    pub fn contains_node(&self, id: FragmentId) -> bool {
        self.rows.contains_key(&id)
    }

    /// 插入或覆盖一条边；自环被忽略。source 行不存在时自动创建。
    pub fn insert_edge(&mut self, src: FragmentId, dst: FragmentId, weight: usize) {
        if src == dst {
            return;
        }
        self.rows.entry(src).or_default().insert(dst, weight);
    }

    pub fn weight(&self, src: FragmentId, dst: FragmentId) -> Option<usize> {
        self.rows.get(&src).and_then(|row| row.get(&dst)).copied()
    }

    /// 删除节点及所有以其为 source 或 destination 的边
    pub fn remove_node(&mut self, id: FragmentId) {
        self.rows.remove(&id);
        for row in self.rows.values_mut() {
            row.remove(&id);
        }
    }

    pub fn node_count(&self) -> usize {
        self.rows.len()
    }

    pub fn edge_count(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    pub fn out_edges(&self, src: FragmentId) -> impl Iterator<Item = (FragmentId, usize)> + '_ {
        self.rows
            .get(&src)
            .into_iter()
            .flat_map(|row| row.iter().map(|(&d, &w)| (d, w)))
    }

    /// 所有边 (src, dst, weight)，先按 src 再按 dst 升序
    pub fn edges(&self) -> impl Iterator<Item = (FragmentId, FragmentId, usize)> + '_ {
        self.rows
            .iter()
            .flat_map(|(&s, row)| row.iter().map(move |(&d, &w)| (s, d, w)))
    }

    /// 全局最大边权；无边时为 None
    pub fn max_weight(&self) -> Option<usize> {
        self.edges().map(|(_, _, w)| w).max()
    }

    /// 取得最大边权及达到该权重的全部边（按遍历顺序）
    pub fn max_edges(&self) -> Option<(usize, Vec<(FragmentId, FragmentId)>)> {
        let best = self.max_weight()?;
        let pairs = self
            .edges()
            .filter(|&(_, _, w)| w == best)
            .map(|(s, d, _)| (s, d))
            .collect();
        Some((best, pairs))
    }
}
