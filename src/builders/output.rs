//! 输出构建器
//!
//! 把一次重命名的结果写入输出目录：两份重写后的文档，以及记录映射关系的 `mapping.json`。

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{ClassmintError, RenameOutcome};
use crate::naming::TokenMapping;

pub const MAPPING_FILE_NAME: &str = "mapping.json";

/// Serialized form of both mappings, keys sorted
#[derive(Debug, Serialize)]
pub struct MappingDocument<'a> {
    pub classes: &'a TokenMapping,
    pub ids: &'a TokenMapping,
}

impl<'a> MappingDocument<'a> {
    pub fn new(outcome: &'a RenameOutcome) -> Self {
        Self {
            classes: &outcome.class_map,
            ids: &outcome.id_map,
        }
    }

    /// Pretty JSON followed by a newline
    pub fn to_json(&self) -> Result<String, ClassmintError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Paths of the files written for one run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenOutputs {
    pub html: PathBuf,
    pub css: PathBuf,
    pub mapping: PathBuf,
}

/// Rejects output names that would overwrite one another
fn check_output_names(html_name: &str, css_name: &str) -> Result<(), ClassmintError> {
    // 比较时忽略大小写，大小写不敏感的文件系统上同样会冲突
    let clash = if html_name.eq_ignore_ascii_case(css_name) {
        Some(html_name)
    } else {
        [html_name, css_name]
            .into_iter()
            .find(|name| name.eq_ignore_ascii_case(MAPPING_FILE_NAME))
    };

    match clash {
        Some(name) => Err(ClassmintError::InvalidOption(format!(
            "output file name \"{}\" is used more than once",
            name
        ))),
        None => Ok(()),
    }
}

/// Creates `dir` and writes the rewritten documents and the mapping into it
pub fn write_outputs(
    dir: &Path,
    html_name: &str,
    css_name: &str,
    outcome: &RenameOutcome,
) -> Result<WrittenOutputs, ClassmintError> {
    check_output_names(html_name, css_name)?;

    fs::create_dir_all(dir).map_err(|e| {
        ClassmintError::Io(format!(
            "unable to create output directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    let outputs = WrittenOutputs {
        html: dir.join(html_name),
        css: dir.join(css_name),
        mapping: dir.join(MAPPING_FILE_NAME),
    };
    let mapping = MappingDocument::new(outcome).to_json()?;

    for (path, contents) in [
        (&outputs.html, outcome.html.as_str()),
        (&outputs.css, outcome.css.as_str()),
        (&outputs.mapping, mapping.as_str()),
    ] {
        fs::write(path, contents).map_err(|e| {
            ClassmintError::Io(format!("unable to write {}: {}", path.display(), e))
        })?;
        tracing::info!("Wrote {}", path.display());
    }

    Ok(outputs)
}
