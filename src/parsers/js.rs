//! JavaScript 引用解析模块
//!
//! 定位 HTML 中所有带 `src` 属性的 `<script>` 元素。
//! 每个结果都记录了属性值、包裹它的引号以及值在原文中的字节范围，
//! 供脚本迁移时原位替换。
//!
//! 内联脚本（没有 `src` 属性）不会被返回。

use std::ops::Range;

use crate::parsers::patterns::script_sources;

/// One `<script src>` occurrence
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptSource<'a> {
    /// Byte range of the attribute value, quotes excluded
    pub range: Range<usize>,
    pub value: &'a str,
    pub quote: char,
}

impl ScriptSource<'_> {
    /// Attribute value with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }
}

/// 查找文档中所有外部脚本引用，按出现顺序返回
///
/// # 示例
/// ```rust
/// use classmint::parsers::js::find_script_sources;
///
/// let html = r#"<script src="app.js"></script><script>inline()</script>"#;
/// let sources = find_script_sources(html);
///
/// assert_eq!(sources.len(), 1);
/// assert_eq!(sources[0].value, "app.js");
/// assert_eq!(sources[0].quote, '"');
/// ```
pub fn find_script_sources(html: &str) -> Vec<ScriptSource<'_>> {
    script_sources(html)
        .into_iter()
        .map(|capture| ScriptSource {
            range: capture.range,
            value: capture.value,
            quote: capture.quote.unwrap_or('"'),
        })
        .collect()
}
