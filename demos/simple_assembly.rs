//! 演示如何在 library 模式下使用 scs-assembler 组装 k-mer。
//!
//! 运行方式：
//! ```bash
//! cargo run --example simple_assembly
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;

use scs_assembler::assemble::{self, is_superstring};
use scs_assembler::graph;
use scs_assembler::kmer;
use scs_assembler::util::dna;

fn main() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(2024);

    // 1. 生成随机序列
    let seq = dna::generate_sequence(&mut rng, 12)?;
    let k = 5;
    let threshold = 2;
    println!("序列: {} ({} bp)", seq, seq.len());

    // 2. 切分 k-mer
    let kmers = kmer::extract(&seq, k);
    println!("k-mer (k={}): {:?}", k, kmers);

    // 3. 构建重叠图
    let (mut g, mut store) = graph::build(&seq, k, threshold);
    println!("重叠图：{} 个节点, {} 条边", g.node_count(), g.edge_count());
    for (s, d, w) in g.edges().filter(|&(_, _, w)| w >= k - 1) {
        println!("  {} -> {} 重叠 {}", s, d, w);
    }

    // 4. 贪心收缩
    let greedy = assemble::greedy_solve(&mut g, &mut store, &mut rng)?;
    println!("\n贪心结果: {} (长度 {})", greedy, greedy.len());
    println!("包含全部 k-mer: {}", is_superstring(&greedy, &kmers));

    // 5. 穷举精确解
    let exact = assemble::exact_solve(&seq, k);
    println!("穷举结果: {} (长度 {})", exact, exact.len());

    Ok(())
}
