use encoding_rs::{Encoding, UTF_8};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::assets::relocator::{
    is_valid_scripts_dir, relocate_scripts, RelocationOptions, RelocationReport,
};
use crate::env::{core::NoColor, EnvVar};
use crate::naming::classifier::{classify, RenameMode, TokenKind};
use crate::naming::extractor::extract_tokens;
use crate::naming::generator::{is_valid_prefix, StableNameGenerator};
use crate::naming::mapping::TokenMapping;
use crate::network::session::{AssetFetcher, FetchError, DEFAULT_TIMEOUT};
use crate::parsers::css::rewrite_css;
use crate::parsers::html::rewrite_html;
use crate::utils::url::{parse_base_url, Url};

/// Represents errors that can occur while renaming a document pair
#[derive(Error, Debug)]
pub enum ClassmintError {
    /// An input document could not be read or decoded
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A caller-supplied option has an unusable value
    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("network error: {0}")]
    Network(String),
}

impl From<std::io::Error> for ClassmintError {
    fn from(error: std::io::Error) -> Self {
        ClassmintError::Io(error.to_string())
    }
}

impl From<serde_json::Error> for ClassmintError {
    fn from(error: serde_json::Error) -> Self {
        ClassmintError::Serialization(error.to_string())
    }
}

impl From<FetchError> for ClassmintError {
    fn from(error: FetchError) -> Self {
        ClassmintError::Network(error.to_string())
    }
}

/// Configuration options for a rename run
#[derive(Clone, Debug)]
pub struct RenameOptions {
    pub class_prefix: String,
    pub id_prefix: String,
    pub mode: RenameMode,
    pub base_url: Option<String>,
    pub relocate_scripts: bool,
    pub scripts_dir: String,
    pub encoding: Option<String>,
    pub silent: bool,
    pub timeout: u64,
    pub user_agent: Option<String>,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            class_prefix: "c".to_string(),
            id_prefix: "i".to_string(),
            mode: RenameMode::Default,
            base_url: None,
            relocate_scripts: false,
            scripts_dir: "js".to_string(),
            encoding: None,
            silent: false,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }
}

impl RenameOptions {
    /// Checks every option before any document is touched
    pub fn validate(&self) -> Result<(), ClassmintError> {
        for (name, prefix) in [("class", &self.class_prefix), ("id", &self.id_prefix)] {
            if !is_valid_prefix(prefix) {
                return Err(ClassmintError::InvalidOption(format!(
                    "{} prefix \"{}\" is not a valid CSS identifier start",
                    name, prefix
                )));
            }
        }

        if !is_valid_scripts_dir(&self.scripts_dir) {
            return Err(ClassmintError::InvalidOption(format!(
                "scripts directory \"{}\" must be a relative path",
                self.scripts_dir
            )));
        }

        if let Some(label) = &self.encoding {
            if Encoding::for_label_no_replacement(label.as_bytes()).is_none() {
                return Err(ClassmintError::InvalidOption(format!(
                    "unknown encoding \"{}\"",
                    label
                )));
            }
        }

        self.parsed_base_url()?;

        Ok(())
    }

    /// Base URL for script resolution, if one was given
    pub fn parsed_base_url(&self) -> Result<Option<Url>, ClassmintError> {
        match self.base_url.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(input) => parse_base_url(input).map(Some).ok_or_else(|| {
                ClassmintError::InvalidOption(format!(
                    "base URL \"{}\" must be an absolute http(s) URL",
                    input
                ))
            }),
        }
    }
}

/// Everything a rename run produces
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenameOutcome {
    pub html: String,
    pub css: String,
    pub class_map: TokenMapping,
    pub id_map: TokenMapping,
    /// Present when scripts were relocated
    pub relocation: Option<RelocationReport>,
}

/// Renames the tokens of a linked HTML + CSS pair.
///
/// Either both documents and both mappings are produced, or an error is
/// returned and nothing is.
///
/// # Example
///
/// ```rust
/// use classmint::core::{process_documents, RenameOptions};
///
/// let html = r#"<div class="nav a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4"></div>"#;
/// let css = ".a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4 { color: red }";
///
/// let outcome = process_documents(html, css, &RenameOptions::default()).unwrap();
/// let name = outcome.class_map.get("a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4").unwrap();
///
/// assert!(name.starts_with("c001_"));
/// assert!(outcome.html.contains(&format!("nav {}", name)));
/// assert_eq!(outcome.css, format!(".{} {{ color: red }}", name));
/// ```
pub fn process_documents(
    html: &str,
    css: &str,
    options: &RenameOptions,
) -> Result<RenameOutcome, ClassmintError> {
    DocumentProcessor::new(options.clone()).process_documents(html, css)
}

/// Reads a document from disk and decodes it.
///
/// Without an explicit label the document is read as UTF-8; a byte order
/// mark always wins over the label. Bytes that do not decode are an error,
/// the document is never passed on with replacement characters.
pub fn read_document(path: &Path, encoding: Option<&str>) -> Result<String, ClassmintError> {
    let data = fs::read(path).map_err(|e| {
        ClassmintError::MalformedInput(format!("unable to read {}: {}", path.display(), e))
    })?;

    let encoding = match encoding {
        Some(label) => Encoding::for_label_no_replacement(label.as_bytes()).ok_or_else(|| {
            ClassmintError::MalformedInput(format!("unknown encoding \"{}\"", label))
        })?,
        None => UTF_8,
    };

    let (text, used_encoding, had_errors) = encoding.decode(&data);
    if had_errors {
        return Err(ClassmintError::MalformedInput(format!(
            "{} is not valid {}",
            path.display(),
            used_encoding.name()
        )));
    }

    Ok(text.into_owned())
}

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

fn use_color() -> bool {
    atty::is(atty::Stream::Stderr) && !NoColor::get_or_default(false)
}

/// Prints an error message to stderr
pub fn print_error_message(msg: &str) {
    if use_color() {
        eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
    } else {
        eprintln!("{msg}");
    }
}

/// Prints an info message to stderr, keeping stdout free for piping
pub fn print_info_message(msg: &str) {
    eprintln!("{msg}");
}

/// 文档处理器，负责协调整个重命名流程
pub struct DocumentProcessor {
    options: RenameOptions,
}

impl DocumentProcessor {
    pub fn new(options: RenameOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenameOptions {
        &self.options
    }

    /// 处理文档对并返回重写结果
    pub fn process_documents(&self, html: &str, css: &str) -> Result<RenameOutcome, ClassmintError> {
        // 1. 验证配置
        self.options.validate()?;

        // 2. 提取标记
        let tokens = extract_tokens(html, css);
        tracing::info!(
            "Found {} classes and {} ids",
            tokens.classes.len(),
            tokens.ids.len()
        );
        if tokens.is_empty() {
            tracing::info!("No tokens found, documents are left as they are");
        }

        // 3. 筛选并生成新名称，类名与 ID 各自独立编号
        let mapping_builder = MappingBuilder::new(self.options.mode);
        let class_map =
            mapping_builder.build(&tokens.classes, TokenKind::Class, &self.options.class_prefix);
        let id_map = mapping_builder.build(&tokens.ids, TokenKind::Id, &self.options.id_prefix);
        tracing::info!(
            "Renaming {} classes and {} ids",
            class_map.len(),
            id_map.len()
        );

        // 4. 重写两份文档
        let html = rewrite_html(html, &class_map, &id_map);
        let css = rewrite_css(css, &class_map, &id_map);

        Ok(RenameOutcome {
            html,
            css,
            class_map,
            id_map,
            relocation: None,
        })
    }

    /// 下载外部脚本并改写结果中的引用
    pub fn relocate_scripts(
        &self,
        outcome: &mut RenameOutcome,
        output_dir: &Path,
        fetcher: &dyn AssetFetcher,
    ) -> Result<(), ClassmintError> {
        let options = RelocationOptions {
            base_url: self.options.parsed_base_url()?,
            output_dir: output_dir.to_path_buf(),
            scripts_dir: self.options.scripts_dir.clone(),
        };

        let (html, report) = relocate_scripts(&outcome.html, &options, fetcher)?;
        tracing::info!(
            "Relocated {} scripts, {} failed, {} skipped",
            report.relocated.len(),
            report.failures.len(),
            report.skipped
        );

        outcome.html = html;
        outcome.relocation = Some(report);
        Ok(())
    }
}

/// 映射构建器：分类、筛选并生成名称
pub struct MappingBuilder {
    mode: RenameMode,
}

impl MappingBuilder {
    pub fn new(mode: RenameMode) -> Self {
        Self { mode }
    }

    /// Builds the mapping for one kind of token.
    ///
    /// Every token of that kind is reserved, so a generated name never
    /// equals a name already present in the documents.
    pub fn build(&self, tokens: &BTreeSet<String>, kind: TokenKind, prefix: &str) -> TokenMapping {
        let selected: Vec<&str> = tokens
            .iter()
            .map(String::as_str)
            .filter(|token| {
                let decision = classify(token, kind, self.mode);
                tracing::debug!(
                    "{:?} {:?}: {} ({:?})",
                    kind,
                    token,
                    if decision.rename { "rename" } else { "keep" },
                    decision.rule
                );
                decision.rename
            })
            .collect();

        StableNameGenerator::new(prefix)
            .with_reserved(tokens)
            .generate(selected)
    }
}
