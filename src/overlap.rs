/// 后缀/前缀最长重叠长度：返回最大的 i ∈ [0, min(|s|,|p|)]，
/// 使得 s 的最后 i 个字符等于 p 的前 i 个字符。没有匹配时为 0。
///
/// 长度按字符计。逐个候选长度朴素比较，最坏 O(min(|s|,|p|)^2)。
pub fn overlap(s: &str, p: &str) -> usize {
    if s.is_ascii() && p.is_ascii() {
        return overlap_bytes(s.as_bytes(), p.as_bytes());
    }
    let s: Vec<char> = s.chars().collect();
    let p: Vec<char> = p.chars().collect();
    overlap_slice(&s, &p)
}

#[inline]
pub fn overlap_bytes(s: &[u8], p: &[u8]) -> usize {
    overlap_slice(s, p)
}

/// 去掉 `p` 的前 `n` 个字符后剩余的部分；`n` 超出长度时为空串。
/// 与 [`overlap`] 配合使用，按字符而非字节切分。
pub fn skip_chars(p: &str, n: usize) -> &str {
    if p.is_ascii() {
        return p.get(n..).unwrap_or_default();
    }
    p.char_indices().nth(n).map(|(i, _)| &p[i..]).unwrap_or_default()
}

fn overlap_slice<T: PartialEq>(s: &[T], p: &[T]) -> usize {
    let max = s.len().min(p.len());
    // longest candidate first, so the first hit is the answer
    for i in (1..=max).rev() {
        if s[s.len() - i..] == p[..i] {
            return i;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_basic() {
        assert_eq!(overlap("ACGT", "CGTA"), 3);
        assert_eq!(overlap("ACGT", "GTAC"), 2);
        assert_eq!(overlap("ACGT", "TTTT"), 1);
        assert_eq!(overlap("ACGT", "CCCC"), 0);
    }

    #[test]
    fn overlap_identical_strings_reach_full_length() {
        assert_eq!(overlap("ACGT", "ACGT"), 4);
        assert_eq!(overlap("AAAA", "AAAA"), 4);
    }

    #[test]
    fn overlap_empty_inputs() {
        assert_eq!(overlap("", "ACGT"), 0);
        assert_eq!(overlap("ACGT", ""), 0);
        assert_eq!(overlap("", ""), 0);
    }

    #[test]
    fn overlap_is_asymmetric() {
        assert_eq!(overlap("AACC", "CCGG"), 2);
        assert_eq!(overlap("CCGG", "AACC"), 0);
    }

    #[test]
    fn overlap_picks_longest_match() {
        // both "A" and "ABA" match; the longer one wins
        assert_eq!(overlap("XABA", "ABAY"), 3);
    }

    #[test]
    fn overlap_counts_characters_not_bytes() {
        assert_eq!(overlap("é", "é"), 1);
        assert_eq!(overlap("aé", "éb"), 1);
        assert_eq!(overlap("xéé", "ééy"), 2);
        assert_eq!(overlap("é", "e"), 0);
    }

    #[test]
    fn skip_chars_respects_char_boundaries() {
        assert_eq!(skip_chars("ACGT", 2), "GT");
        assert_eq!(skip_chars("ACGT", 9), "");
        assert_eq!(skip_chars("ééx", 1), "éx");
        let (s, p) = ("aé", "éb");
        assert_eq!(format!("{}{}", s, skip_chars(p, overlap(s, p))), "aéb");
    }

    #[test]
    fn overlap_bounded_by_shorter_string() {
        let pairs = [("ACGTACGT", "GT"), ("T", "TTTTT"), ("GATTACA", "ACAGATT")];
        for (s, p) in pairs {
            assert!(overlap(s, p) <= s.len().min(p.len()), "s={} p={}", s, p);
        }
        assert_eq!(overlap("ACGTACGT", "GT"), 2);
        assert_eq!(overlap("T", "TTTTT"), 1);
    }
}
