//! 链接重写模块
//!
//! 负责重写 HTML 中指向文档内部元素的引用，使其跟随重命名后的 ID：
//!
//! - `href="#x"` / `xlink:href="#x"` 片段链接
//! - `for`、`list`、`form` 以及 `aria-*` 等 ID 引用属性
//! - 属性值中的 `url(#x)`（SVG 渐变、遮罩等）

use std::ops::Range;

use crate::naming::TokenMapping;
use crate::parsers::patterns::{fragment_references, idref_values, splice, url_fragments};

/// 判断片段链接是否应该跳过重写
fn should_skip_fragment(fragment: &str) -> bool {
    // 跳过以下类型的片段：
    // 1. 空片段 (#)
    // 2. hashbang 路由 (#!/path)
    // 3. 含有空白的片段，不可能是合法 ID
    fragment.is_empty() || fragment.starts_with('!') || fragment.contains(char::is_whitespace)
}

/// 重写单个片段链接的值，返回 `None` 表示保持原样
fn rewrite_fragment(value: &str, id_map: &TokenMapping) -> Option<String> {
    let fragment = value.strip_prefix('#')?;

    if should_skip_fragment(fragment) {
        return None;
    }

    id_map.get(fragment).map(|name| format!("#{}", name))
}

/// 重写 HTML 中的片段链接
///
/// 只有 `#` 之后的部分完整命中映射表时才会替换，
/// 指向其他页面的链接（如 `/page#x`）不在匹配范围内。
pub fn rewrite_fragment_references(html: &str, id_map: &TokenMapping) -> String {
    if id_map.is_empty() {
        return html.to_string();
    }

    let replacements = fragment_references(html)
        .into_iter()
        .filter_map(|capture| {
            rewrite_fragment(capture.value, id_map).map(|value| (capture.range, value))
        });

    splice(html, replacements)
}

/// Byte ranges of the whitespace separated tokens of an attribute value
fn list_tokens(value: &str) -> Vec<(Range<usize>, &str)> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (index, c) in value.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(begin)) => {
                tokens.push((begin..index, &value[begin..index]));
                start = None;
            }
            (false, None) => start = Some(index),
            _ => {}
        }
    }
    if let Some(begin) = start {
        tokens.push((begin..value.len(), &value[begin..]));
    }

    tokens
}

/// 重写 ID 引用属性与 `url(#x)` 引用
///
/// 引用属性的值按空白拆分（`aria-labelledby="a b"`），逐个替换，
/// 分隔用的空白原样保留。
pub fn rewrite_id_references(html: &str, id_map: &TokenMapping) -> String {
    if id_map.is_empty() {
        return html.to_string();
    }

    let mut replacements: Vec<(Range<usize>, String)> = Vec::new();

    for capture in idref_values(html) {
        let offset = capture.range.start;
        for (range, token) in list_tokens(capture.value) {
            if let Some(name) = id_map.get(token) {
                replacements.push((offset + range.start..offset + range.end, name.to_string()));
            }
        }
    }

    for capture in url_fragments(html) {
        if let Some(name) = id_map.get(capture.value) {
            replacements.push((capture.range, name.to_string()));
        }
    }

    splice(html, replacements)
}
