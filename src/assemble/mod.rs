use anyhow::Result;
use rand::Rng;
use std::io::Write;

use crate::error::ScsError;
use crate::graph;
use crate::kmer;
use crate::util::params::AssemblyParams;

pub mod exact;
pub mod greedy;

pub use exact::{exact_solve, is_superstring, shortest_concatenation};
pub use greedy::{contract_max_edge, greedy_solve, merge, MergeState};

/// 穷举求解默认允许的最大 k-mer 数
pub const DEFAULT_EXACT_LIMIT: usize = 9;

#[derive(Debug, Clone, Copy)]
pub struct AssembleOpt {
    pub k: usize,
    pub threshold: usize,
    /// 同时运行穷举求解
    pub exact: bool,
    /// 穷举求解允许的最大 k-mer 数
    pub exact_limit: usize,
    /// 贪心卡住时逐步降低阈值重试
    pub relax: bool,
}

impl Default for AssembleOpt {
    fn default() -> Self {
        Self {
            k: 4,
            threshold: 3,
            exact: false,
            exact_limit: DEFAULT_EXACT_LIMIT,
            relax: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreedyOutcome {
    pub superstring: String,
    /// 实际使用的阈值（`relax` 时可能低于请求值）
    pub threshold: usize,
}

#[derive(Debug, Clone)]
pub struct AssemblyReport {
    pub seq_len: usize,
    pub k: usize,
    pub n_kmers: usize,
    pub greedy: std::result::Result<GreedyOutcome, ScsError>,
    pub exact: Option<String>,
}

impl AssemblyReport {
    /// 贪心结果长度 / 穷举结果长度
    pub fn ratio(&self) -> Option<f64> {
        let g = self.greedy.as_ref().ok()?;
        let e = self.exact.as_ref()?;
        if e.is_empty() {
            return None;
        }
        Some(g.superstring.len() as f64 / e.len() as f64)
    }
}

/// 建图并贪心求解；`relax` 为真时，每次 `NoOverlapAvailable` 后把阈值减一再试。
/// 阈值为 0 时图是完全图，一定能收缩到底。
pub fn greedy_with_relax<R: Rng + ?Sized>(
    seq: &str,
    params: AssemblyParams,
    relax: bool,
    rng: &mut R,
) -> std::result::Result<GreedyOutcome, ScsError> {
    let mut threshold = params.threshold;
    loop {
        let (mut g, mut store) = graph::build(seq, params.k, threshold);
        match greedy_solve(&mut g, &mut store, rng) {
            Ok(superstring) => return Ok(GreedyOutcome { superstring, threshold }),
            Err(ScsError::NoOverlapAvailable { remaining }) if relax && threshold > 0 => {
                log::warn!(
                    "threshold {} leaves {} fragments unmerged, retrying with {}",
                    threshold,
                    remaining,
                    threshold - 1
                );
                threshold -= 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// 校验参数后运行贪心（以及可选的穷举）求解
pub fn assemble<R: Rng + ?Sized>(seq: &str, opt: AssembleOpt, rng: &mut R) -> Result<AssemblyReport> {
    let params = AssemblyParams::new(opt.k, opt.threshold);
    params.validate(seq.len())?;
    let n_kmers = params.kmer_count(seq.len());

    if opt.exact && n_kmers > opt.exact_limit {
        anyhow::bail!(
            "exact search over {} k-mers is intractable (limit {}); raise --exact-limit or k",
            n_kmers,
            opt.exact_limit
        );
    }

    let greedy = greedy_with_relax(seq, params, opt.relax, rng);
    if let Ok(g) = &greedy {
        debug_assert!(is_superstring(&g.superstring, &kmer::extract(seq, opt.k)));
    }
    let exact = opt.exact.then(|| exact_solve(seq, opt.k));

    Ok(AssemblyReport {
        seq_len: seq.len(),
        k: opt.k,
        n_kmers,
        greedy,
        exact,
    })
}

pub fn write_report(out: &mut dyn Write, report: &AssemblyReport) -> Result<()> {
    writeln!(out, "sequence length: {}", report.seq_len)?;
    writeln!(out, "k-mers: {} (k={})", report.n_kmers, report.k)?;

    writeln!(out, "\nGreedy approach:")?;
    match &report.greedy {
        Ok(g) => {
            writeln!(out, "{}", g.superstring)?;
            writeln!(out, "Length: {}", g.superstring.len())?;
            writeln!(out, "Threshold: {}", g.threshold)?;
        }
        Err(e) => writeln!(out, "failed: {}", e)?,
    }

    if let Some(e) = &report.exact {
        writeln!(out, "\nBrute force approach:")?;
        writeln!(out, "{}", e)?;
        writeln!(out, "Length: {}", e.len())?;
    }
    if let Some(r) = report.ratio() {
        writeln!(out, "\ngreedy/exact length ratio: {:.3}", r)?;
    }
    Ok(())
}

/// 组装并把报告写入 `out_path`（省略时写到 stdout）
pub fn assemble_to<R: Rng + ?Sized>(
    seq: &str,
    opt: AssembleOpt,
    rng: &mut R,
    out_path: Option<&str>,
) -> Result<AssemblyReport> {
    let report = assemble(seq, opt, rng)?;

    let mut out_box: Box<dyn Write> = if let Some(p) = out_path {
        Box::new(std::io::BufWriter::new(std::fs::File::create(p)?))
    } else {
        Box::new(std::io::BufWriter::new(std::io::stdout()))
    };
    write_report(&mut *out_box, &report)?;
    out_box.flush()?;
    Ok(report)
}
