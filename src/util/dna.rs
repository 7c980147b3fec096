use rand::Rng;

use crate::error::{Result, ScsError};

/// 核苷酸字母表
pub const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

#[inline]
pub fn is_base(b: u8) -> bool {
    matches!(b, b'A' | b'C' | b'G' | b'T')
}

/// 规范化输入序列：去掉空白、转大写、U→T，遇到 A/C/G/T 之外的字符报错。
pub fn normalize_seq(seq: &str) -> Result<String> {
    let mut out = String::with_capacity(seq.len());
    for (position, c) in seq.chars().filter(|c| !c.is_whitespace()).enumerate() {
        let up = c.to_ascii_uppercase();
        let nb = match up {
            'A' | 'C' | 'G' | 'T' => up,
            'U' => 'T',
            _ => return Err(ScsError::InvalidSequence { position, base: c }),
        };
        out.push(nb);
    }
    Ok(out)
}

/// 生成长度为 `length` 的随机序列，四种碱基等概率。
/// `length < 0` 时返回 `InvalidLength`。
pub fn generate_sequence<R: Rng + ?Sized>(rng: &mut R, length: i64) -> Result<String> {
    if length < 0 {
        return Err(ScsError::InvalidLength { length });
    }
    let seq = (0..length)
        .map(|_| BASES[rng.gen_range(0..BASES.len())] as char)
        .collect();
    Ok(seq)
}
