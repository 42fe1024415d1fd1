//! 稳定名称生成器
//!
//! 为选中的标记生成形如 `{前缀}{序号}_{指纹}` 的新名称：
//!
//! - 序号按标记的字节序排序后从 1 开始分配，与提取顺序无关
//! - 指纹是标记本身 SHA-256 摘要的前 6 个十六进制字符，只取决于标记字符串
//! - 若候选名称已被占用，则依次追加 `_1`、`_2`……直到唯一
//!
//! 相同的标记集合与前缀总能得到逐字节相同的映射。

use std::collections::{BTreeSet, HashSet};

use super::mapping::TokenMapping;
use crate::utils::digest::sha256_hex;

/// Number of hex characters of the token digest kept in generated names
pub const FINGERPRINT_LENGTH: usize = 6;

/// Minimum width of the zero-padded counter
pub const COUNTER_WIDTH: usize = 3;

/// Hex prefix of the SHA-256 digest of the token's UTF-8 bytes
pub fn fingerprint(token: &str) -> String {
    sha256_hex(token.as_bytes(), FINGERPRINT_LENGTH)
}

/// Whether `prefix` can start a CSS identifier: `[A-Za-z_][A-Za-z0-9_-]*`
pub fn is_valid_prefix(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        }
        _ => false,
    }
}

pub struct StableNameGenerator {
    prefix: String,
    taken: HashSet<String>,
}

impl StableNameGenerator {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            taken: HashSet::new(),
        }
    }

    /// Marks names that must never be generated, such as tokens kept as they are
    pub fn with_reserved<'a, I>(mut self, reserved: I) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        self.taken.extend(reserved.into_iter().cloned());
        self
    }

    fn candidate(&self, rank: usize, token: &str) -> String {
        format!(
            "{}{:0width$}_{}",
            self.prefix,
            rank,
            fingerprint(token),
            width = COUNTER_WIDTH
        )
    }

    fn claim(&mut self, candidate: String) -> String {
        let mut name = candidate.clone();
        let mut suffix: usize = 0;

        while self.taken.contains(&name) {
            suffix += 1;
            name = format!("{}_{}", candidate, suffix);
        }

        self.taken.insert(name.clone());
        name
    }

    /// Assigns a unique name to every token.
    ///
    /// Tokens are deduplicated and ranked by byte-wise order before numbering,
    /// so the order they are handed in does not matter.
    pub fn generate<'a, I>(mut self, tokens: I) -> TokenMapping
    where
        I: IntoIterator<Item = &'a str>,
    {
        let sorted: BTreeSet<&str> = tokens.into_iter().collect();
        let mut mapping = TokenMapping::new();

        for (index, token) in sorted.into_iter().enumerate() {
            let candidate = self.candidate(index + 1, token);
            let name = self.claim(candidate);
            tracing::debug!("{} -> {}", token, name);
            mapping.insert(token.to_string(), name);
        }

        mapping
    }
}
