//! # scs-assembler
//!
//! 基于 k-mer 的最短公共超串（SCS）组装演示。
//!
//! 把一条序列切成相互重叠的 k-mer，再把它们拼回一条尽量短的超串：
//!
//! - **重叠计算**：两串之间最长的后缀/前缀匹配
//! - **重叠图**：以片段为节点、重叠长度为边权的有向图
//! - **贪心收缩**：反复合并最大权边两端的片段，直到只剩一个
//! - **穷举求解**：枚举全部排列得到精确解，只适用于很少的 k-mer，用来检验贪心结果
//!
//! ## 快速示例
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use scs_assembler::assemble::{exact_solve, greedy_solve};
//! use scs_assembler::graph;
//!
//! let seq = "ACGTACGT";
//! let (mut g, mut store) = graph::build(seq, 4, 3);
//! let mut rng = StdRng::seed_from_u64(42);
//! let greedy = greedy_solve(&mut g, &mut store, &mut rng).unwrap();
//! let exact = exact_solve(seq, 4);
//! assert!(greedy.len() >= exact.len());
//! ```
//!
//! ## 模块说明
//!
//! - [`overlap`] — 后缀/前缀重叠长度
//! - [`kmer`] — k-mer 切分
//! - [`graph`] — 重叠图、片段仓库与建图
//! - [`assemble`] — 贪心收缩与穷举求解
//! - [`io`] — FASTA 读取
//! - [`util`] — 随机序列生成、序列规范化、参数校验

pub mod assemble;
pub mod error;
pub mod graph;
pub mod io;
pub mod kmer;
pub mod overlap;
pub mod util;

pub use error::{Result, ScsError};
