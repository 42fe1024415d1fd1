//! HTML 标记重写
//!
//! 在 HTML 原文上定位 `class`、`id` 属性值以及内嵌 `<style>` 元素，
//! 按映射表替换其中的标记。替换只发生在捕获到的值内部，其余字节原样保留。

use crate::naming::TokenMapping;
use crate::parsers::css::rewrite_css;
use crate::parsers::link_rewriter::{rewrite_fragment_references, rewrite_id_references};
use crate::parsers::patterns::{attribute_values, splice, style_blocks, TokenAttribute};

/// Splits a `class` attribute value into its tokens
pub fn class_tokens(value: &str) -> impl Iterator<Item = &str> {
    value.split_whitespace()
}

/// Substitutes mapped tokens of a single `class` value.
///
/// Returns `None` when no token of the value is mapped, so the caller can
/// leave the original text (including its whitespace) alone.
pub fn rewrite_class_value(value: &str, class_map: &TokenMapping) -> Option<String> {
    let mut changed = false;
    let tokens: Vec<&str> = class_tokens(value)
        .map(|token| match class_map.get(token) {
            Some(name) => {
                changed = true;
                name
            }
            None => token,
        })
        .collect();

    changed.then(|| tokens.join(" "))
}

/// Rewrites the tokens of every `class` attribute
pub fn rewrite_html_classes(html: &str, class_map: &TokenMapping) -> String {
    if class_map.is_empty() {
        return html.to_string();
    }

    let replacements = attribute_values(html, TokenAttribute::Class)
        .into_iter()
        .filter_map(|capture| {
            rewrite_class_value(capture.value, class_map).map(|value| (capture.range, value))
        });

    splice(html, replacements)
}

/// Rewrites every `id` attribute whose whole value is a mapped token
pub fn rewrite_html_ids(html: &str, id_map: &TokenMapping) -> String {
    if id_map.is_empty() {
        return html.to_string();
    }

    let replacements = attribute_values(html, TokenAttribute::Id)
        .into_iter()
        .filter_map(|capture| {
            id_map
                .get(capture.value)
                .map(|name| (capture.range, name.to_string()))
        });

    splice(html, replacements)
}

/// Rewrites selectors inside `<style>` elements of the document
pub fn rewrite_embedded_styles(
    html: &str,
    class_map: &TokenMapping,
    id_map: &TokenMapping,
) -> String {
    if class_map.is_empty() && id_map.is_empty() {
        return html.to_string();
    }

    let replacements = style_blocks(html).into_iter().filter_map(|block| {
        let rewritten = rewrite_css(block.value, class_map, id_map);
        (rewritten != block.value).then_some((block.range, rewritten))
    });

    splice(html, replacements)
}

/// Applies both mappings to every place an HTML document mentions a token:
/// `class` and `id` attributes, fragment links, ID references and embedded styles.
pub fn rewrite_html(html: &str, class_map: &TokenMapping, id_map: &TokenMapping) -> String {
    let html = rewrite_html_classes(html, class_map);
    let html = rewrite_html_ids(&html, id_map);
    let html = rewrite_fragment_references(&html, id_map);
    let html = rewrite_id_references(&html, id_map);
    rewrite_embedded_styles(&html, class_map, id_map)
}
