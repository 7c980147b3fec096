use anyhow::{bail, Result};
use std::io::BufRead;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub desc: Option<String>,
    pub seq: String,
}

/// 逐条读取 FASTA 记录；多行序列会被拼接，空白字符被丢弃。
pub struct FastaReader<R: BufRead> {
    lines: std::io::Lines<R>,
    pending: Option<String>,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self { lines: reader.lines(), pending: None }
    }

    pub fn next_record(&mut self) -> Result<Option<FastaRecord>> {
        let header = match self.pending.take() {
            Some(h) => h,
            None => loop {
                match self.lines.next() {
                    None => return Ok(None),
                    Some(line) => {
                        let line = line?;
                        let line = line.trim();
                        if line.is_empty() || line.starts_with(';') {
                            continue;
                        }
                        match line.strip_prefix('>') {
                            Some(h) => break h.trim().to_string(),
                            None => bail!("FASTA sequence data before the first '>' header"),
                        }
                    }
                }
            },
        };

        let (id, desc) = match header.split_once(char::is_whitespace) {
            Some((id, rest)) => {
                let rest = rest.trim();
                (id.to_string(), (!rest.is_empty()).then(|| rest.to_string()))
            }
            None => (header, None),
        };

        let mut seq = String::new();
        for line in self.lines.by_ref() {
            let line = line?;
            if let Some(h) = line.trim_start().strip_prefix('>') {
                self.pending = Some(h.trim().to_string());
                break;
            }
            seq.extend(line.chars().filter(|c| !c.is_whitespace()));
        }

        Ok(Some(FastaRecord { id, desc, seq }))
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<FastaRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

/// 读取文件中的第一条序列
pub fn read_first_sequence(path: &str) -> Result<FastaRecord> {
    let fh = std::fs::File::open(path)
        .map_err(|e| anyhow::anyhow!("cannot open FASTA '{}': {}", path, e))?;
    let mut reader = FastaReader::new(std::io::BufReader::new(fh));
    match reader.next_record()? {
        Some(rec) => Ok(rec),
        None => bail!("FASTA file '{}' contains no sequences", path),
    }
}
