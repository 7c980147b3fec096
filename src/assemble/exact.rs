use crate::kmer;
use crate::overlap::{overlap, skip_chars};

/// 穷举求最短公共超串（仅适用于很少的 k-mer，复杂度 O(n!·n·k)）。
///
/// 按 k-mer 出现位置的字典序枚举全部排列，每个排列依次把下一个 k-mer
/// 接到已拼出的串后面（去掉与当前串的重叠），保留最短的候选；
/// 长度相同时保留最先找到的那个。重复的 k-mer 作为不同条目参与排列，
/// 因此结果是这组出现序列上的最短拼接，而不是去重后内容集合上的最短超串。
pub fn exact_solve(seq: &str, k: usize) -> String {
    let kmers = kmer::extract(seq, k);
    let best = shortest_concatenation(&kmers);
    log::info!("exact: {} k-mers, shortest superstring length {}", kmers.len(), best.len());
    best
}

/// 在给定条目的所有排列上搜索最短拼接串
pub fn shortest_concatenation(items: &[&str]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut search = Search {
        items,
        used: vec![false; items.len()],
        current: String::new(),
        best: None,
    };
    search.descend(0);
    search.best.unwrap_or_default()
}

struct Search<'a> {
    items: &'a [&'a str],
    used: Vec<bool>,
    current: String,
    best: Option<String>,
}

impl Search<'_> {
    fn descend(&mut self, depth: usize) {
        if depth == self.items.len() {
            if self.best.as_ref().map(|b| self.current.len() < b.len()).unwrap_or(true) {
                self.best = Some(self.current.clone());
            }
            return;
        }
        for i in 0..self.items.len() {
            if self.used[i] {
                continue;
            }
            let item = self.items[i];
            let ov = overlap(&self.current, item);
            let mark = self.current.len();
            self.current.push_str(skip_chars(item, ov));

            // a candidate only grows, so a prefix as long as the best cannot win
            let hopeless = self.best.as_ref().map(|b| self.current.len() >= b.len()).unwrap_or(false);
            if !hopeless {
                self.used[i] = true;
                self.descend(depth + 1);
                self.used[i] = false;
            }
            self.current.truncate(mark);
        }
    }
}

/// 串 `s` 是否包含每个条目作为连续子串
pub fn is_superstring<S: AsRef<str>>(s: &str, items: &[S]) -> bool {
    items.iter().all(|m| s.contains(m.as_ref()))
}
