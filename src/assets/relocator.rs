//! 脚本迁移
//!
//! 把 HTML 中引用的外部脚本下载到输出目录下的脚本子目录，并把 `src` 改写为本地相对路径：
//!
//! 1. 定位所有 `<script src>`，跳过 `data:` / `blob:` 等内联引用
//! 2. 解析为绝对 HTTP(S) 地址（相对地址需要提供基础 URL）
//! 3. 按地址去重，每个地址只下载一次
//! 4. 先写入临时文件再原子重命名，只有完整写入的文件才会被引用
//! 5. 重新解析每个 `src`，命中已下载的地址则替换为本地路径，引号保持不变
//!
//! 单个资源失败只记录到报告中并保留原地址，不会中断整个流程。

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use super::file_names::{local_file_name, FileNameRegistry};
use crate::core::ClassmintError;
use crate::network::session::AssetFetcher;
use crate::parsers::js::find_script_sources;
use crate::parsers::patterns::splice;
use crate::utils::url::{clean_url, resolve_http_url, Url};

/// Where relocated scripts go and how their references are resolved
#[derive(Clone, Debug)]
pub struct RelocationOptions {
    pub base_url: Option<Url>,
    pub output_dir: PathBuf,
    /// Directory under `output_dir`, also used as the prefix of rewritten `src` values
    pub scripts_dir: String,
}

/// A script stored locally
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelocatedScript {
    pub url: String,
    pub local_path: String,
    pub size: usize,
}

/// A script that could not be stored; its references keep pointing at `url`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelocationFailure {
    pub url: String,
    pub reason: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelocationReport {
    pub relocated: Vec<RelocatedScript>,
    pub failures: Vec<RelocationFailure>,
    /// `src` values left alone because they are inline or cannot be resolved
    pub skipped: usize,
}

impl RelocationReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Whether `dir` is a relative path that stays inside the output directory
/// and can be written into an attribute value as it is.
pub fn is_valid_scripts_dir(dir: &str) -> bool {
    if dir.is_empty() || dir.starts_with('/') || dir.starts_with('\\') {
        return false;
    }

    dir.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/'))
        && dir.split('/').all(|segment| segment != "..")
}

/// Resolves a raw `src` value to the absolute URL it downloads from
pub fn resolve_script_url(src: &str, base: Option<&Url>) -> Option<Url> {
    resolve_http_url(src, base)
}

/// Key under which occurrences of the same remote script are merged
fn script_key(url: &Url) -> String {
    clean_url(url.clone()).to_string()
}

fn relative_reference(scripts_dir: &str, file_name: &str) -> String {
    let scripts_dir = scripts_dir.trim_matches('/');
    if scripts_dir.is_empty() {
        file_name.to_string()
    } else {
        format!("{}/{}", scripts_dir, file_name)
    }
}

/// Writes `data` next to its final location and moves it into place.
fn persist_atomically(dir: &Path, file_name: &str, data: &[u8]) -> std::io::Result<()> {
    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(data)?;
    temp_file.flush()?;
    temp_file
        .persist(dir.join(file_name))
        .map_err(|error| error.error)?;
    Ok(())
}

/// Downloads every external script of `html` and points its references at the local copy.
///
/// Returns the rewritten document together with a report of what happened to
/// each unique script. Only failing to create the scripts directory is fatal.
pub fn relocate_scripts(
    html: &str,
    options: &RelocationOptions,
    fetcher: &dyn AssetFetcher,
) -> Result<(String, RelocationReport), ClassmintError> {
    let mut report = RelocationReport::default();
    let base = options.base_url.as_ref();

    let sources = find_script_sources(html);
    let mut pending: BTreeMap<String, Url> = BTreeMap::new();

    for source in &sources {
        match resolve_script_url(source.value, base) {
            Some(url) => {
                pending.entry(script_key(&url)).or_insert(url);
            }
            None => {
                tracing::debug!("Leaving script reference {:?} as it is", source.value);
                report.skipped += 1;
            }
        }
    }

    if pending.is_empty() {
        return Ok((html.to_string(), report));
    }

    let scripts_path = options.output_dir.join(options.scripts_dir.trim_matches('/'));
    fs::create_dir_all(&scripts_path).map_err(|e| {
        ClassmintError::Io(format!(
            "unable to create scripts directory {}: {}",
            scripts_path.display(),
            e
        ))
    })?;

    let mut registry = FileNameRegistry::new();
    let mut located: BTreeMap<String, String> = BTreeMap::new();

    for (key, url) in pending {
        let data = match fetcher.fetch(&url) {
            Ok(data) => data,
            Err(error) => {
                tracing::warn!("Keeping remote script {}: {}", key, error);
                report.failures.push(RelocationFailure {
                    url: key,
                    reason: error.to_string(),
                });
                continue;
            }
        };

        let file_name = registry.claim(&local_file_name(&url));
        if let Err(error) = persist_atomically(&scripts_path, &file_name, &data) {
            tracing::warn!("Unable to store script {} as {}: {}", key, file_name, error);
            report.failures.push(RelocationFailure {
                url: key,
                reason: error.to_string(),
            });
            continue;
        }

        let local_path = relative_reference(&options.scripts_dir, &file_name);
        tracing::info!("Relocated {} to {}", key, local_path);
        report.relocated.push(RelocatedScript {
            url: key.clone(),
            local_path: local_path.clone(),
            size: data.len(),
        });
        located.insert(key, local_path);
    }

    let replacements = sources.into_iter().filter_map(|source| {
        let url = resolve_script_url(source.value, base)?;
        located
            .get(&script_key(&url))
            .map(|local_path| (source.range, local_path.clone()))
    });

    Ok((splice(html, replacements), report))
}
