use std::fmt;

/// 片段句柄：指向 [`FragmentStore`] 中记录的稳定整数下标。
///
/// 初始 k-mer 的句柄与其在序列中的起点序号一致（第 i 个 k-mer 的句柄为 i）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FragmentId(usize);

impl FragmentId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for FragmentId {
    fn from(i: usize) -> Self {
        FragmentId(i)
    }
}

impl fmt::Display for FragmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Kmer(usize),
    Merged { suffix: FragmentId, prefix: FragmentId },
}

#[derive(Debug, Clone)]
struct FragmentRecord {
    seq: String,
    origin: Origin,
    live: bool,
}

/// 片段仓库（arena）。
/// - 每条记录只追加、不删除；合并时旧记录标记为失效，新记录追加在末尾。
/// - `parent` 为并查集父指针：失效句柄指向它被合并进的句柄，存活句柄指向自身。
/// - 存活片段的来源集合划分全部 k-mer 下标（完整且互不相交）。
#[derive(Debug, Clone)]
pub struct FragmentStore {
    records: Vec<FragmentRecord>,
    parent: Vec<FragmentId>,
    live: usize,
    n_kmers: usize,
}

impl FragmentStore {
    pub fn from_kmers<S: AsRef<str>>(kmers: &[S]) -> Self {
        let records: Vec<FragmentRecord> = kmers
            .iter()
            .enumerate()
            .map(|(i, s)| FragmentRecord {
                seq: s.as_ref().to_string(),
                origin: Origin::Kmer(i),
                live: true,
            })
            .collect();
        let parent = (0..records.len()).map(FragmentId::from).collect();
        let n = records.len();
        Self { records, parent, live: n, n_kmers: n }
    }

    /// 当前存活片段数
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// 初始 k-mer 数量
    #[inline]
    pub fn kmer_count(&self) -> usize {
        self.n_kmers
    }

    pub fn contains(&self, id: FragmentId) -> bool {
        self.records.get(id.index()).map(|r| r.live).unwrap_or(false)
    }

    /// 存活片段的字符串内容
    pub fn get(&self, id: FragmentId) -> Option<&str> {
        self.records
            .get(id.index())
            .filter(|r| r.live)
            .map(|r| r.seq.as_str())
    }

    /// 存活句柄，按句柄升序
    pub fn ids(&self) -> impl Iterator<Item = FragmentId> + '_ {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.live)
            .map(|(i, _)| FragmentId::from(i))
    }

    /// 将 `suffix` 与 `prefix` 合并为内容为 `seq` 的新片段，返回新句柄。
    /// 两个句柄都必须存活且互不相同。
    pub fn merge(&mut self, suffix: FragmentId, prefix: FragmentId, seq: String) -> FragmentId {
        debug_assert!(suffix != prefix);
        debug_assert!(self.contains(suffix) && self.contains(prefix));

        let id = FragmentId::from(self.records.len());
        self.records[suffix.index()].live = false;
        self.records[prefix.index()].live = false;
        // 失效记录不再需要内容
        self.records[suffix.index()].seq = String::new();
        self.records[prefix.index()].seq = String::new();
        self.records.push(FragmentRecord {
            seq,
            origin: Origin::Merged { suffix, prefix },
            live: true,
        });
        self.parent.push(id);
        self.parent[suffix.index()] = id;
        self.parent[prefix.index()] = id;
        self.live -= 1;
        id
    }

    /// 查询第 `kmer` 个 k-mer 当前所在的存活片段（不做路径压缩）
    pub fn resolve(&self, kmer: usize) -> Option<FragmentId> {
        if kmer >= self.n_kmers {
            return None;
        }
        let mut cur = FragmentId::from(kmer);
        loop {
            let next = self.parent[cur.index()];
            if next == cur {
                return Some(cur);
            }
            cur = next;
        }
    }

    /// 同 [`resolve`](Self::resolve)，但沿途做路径减半
    pub fn find(&mut self, kmer: usize) -> Option<FragmentId> {
        if kmer >= self.n_kmers {
            return None;
        }
        let mut cur = FragmentId::from(kmer);
        while self.parent[cur.index()] != cur {
            let grand = self.parent[self.parent[cur.index()].index()];
            self.parent[cur.index()] = grand;
            cur = grand;
        }
        Some(cur)
    }

    /// 片段的来源：按拼接顺序排列的原始 k-mer 下标
    pub fn provenance(&self, id: FragmentId) -> Vec<usize> {
        let mut out = Vec::new();
        if id.index() >= self.records.len() {
            return out;
        }
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            match self.records[cur.index()].origin {
                Origin::Kmer(i) => out.push(i),
                Origin::Merged { suffix, prefix } => {
                    stack.push(prefix);
                    stack.push(suffix);
                }
            }
        }
        out
    }

    /// 仅剩一个片段时取出其内容
    pub fn single(&self) -> Option<&str> {
        if self.live != 1 {
            return None;
        }
        self.records.iter().find(|r| r.live).map(|r| r.seq.as_str())
    }
}
