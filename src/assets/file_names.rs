//! 本地文件名
//!
//! 为下载的脚本选择文件名：URL 最后一段看起来像文件名时直接使用（解码百分号编码后），
//! 否则根据 URL 的摘要生成 `script_<12位十六进制>.js`。
//! 同一次运行中的重名通过在扩展名之前追加 `_1`、`_2`…… 解决。

use percent_encoding::percent_decode_str;
use std::collections::HashSet;

use crate::utils::digest::sha256_hex;
use crate::utils::url::Url;

const FALLBACK_PREFIX: &str = "script_";
const FALLBACK_EXTENSION: &str = "js";
const FALLBACK_DIGEST_LENGTH: usize = 12;
const MAX_FILE_NAME_LENGTH: usize = 255;

/// Whether a decoded path segment can be used as a file name as it is
fn is_file_like(segment: &str) -> bool {
    if segment.is_empty() || segment.len() > MAX_FILE_NAME_LENGTH || segment.starts_with('.') {
        return false;
    }

    if !segment
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return false;
    }

    match segment.rsplit_once('.') {
        Some((stem, extension)) => {
            !stem.is_empty()
                && !extension.is_empty()
                && extension.chars().all(|c| c.is_ascii_alphanumeric())
        }
        None => false,
    }
}

pub fn fallback_file_name(url: &Url) -> String {
    format!(
        "{}{}.{}",
        FALLBACK_PREFIX,
        sha256_hex(url.as_str().as_bytes(), FALLBACK_DIGEST_LENGTH),
        FALLBACK_EXTENSION
    )
}

/// Picks the local file name for a script URL
pub fn local_file_name(url: &Url) -> String {
    url.path_segments()
        .and_then(|segments| segments.last())
        .and_then(|segment| percent_decode_str(segment).decode_utf8().ok())
        .map(|segment| segment.into_owned())
        .filter(|segment| is_file_like(segment))
        .unwrap_or_else(|| fallback_file_name(url))
}

fn with_suffix(name: &str, suffix: usize) -> String {
    match name.rsplit_once('.') {
        Some((stem, extension)) => format!("{}_{}.{}", stem, suffix, extension),
        None => format!("{}_{}", name, suffix),
    }
}

/// File names handed out during one run.
///
/// Names are compared case-insensitively so two scripts never share a file
/// on case-insensitive file systems.
#[derive(Debug, Default)]
pub struct FileNameRegistry {
    taken: HashSet<String>,
}

impl FileNameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves `name`, or the first free `stem_N.ext` variant of it
    pub fn claim(&mut self, name: &str) -> String {
        let mut candidate = name.to_string();
        let mut suffix: usize = 0;

        while self.taken.contains(&candidate.to_lowercase()) {
            suffix += 1;
            candidate = with_suffix(name, suffix);
        }

        self.taken.insert(candidate.to_lowercase());
        candidate
    }
}
