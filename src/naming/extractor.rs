//! 标记提取
//!
//! 扫描 HTML 与 CSS 原文，收集两份文档中出现过的全部类名和 ID。
//! 提取过程不修改原文，也不关心标记出现的位置和次数。

use std::collections::BTreeSet;

use crate::parsers::html::class_tokens;
use crate::parsers::patterns::{
    attribute_values, selector_names, style_blocks, SelectorKind, TokenAttribute,
};

/// Distinct class and ID tokens seen across both documents
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenSets {
    pub classes: BTreeSet<String>,
    pub ids: BTreeSet<String>,
}

impl TokenSets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.ids.is_empty()
    }

    /// Collects tokens from `class` / `id` attributes and embedded `<style>` elements
    pub fn add_html(&mut self, html: &str) {
        for capture in attribute_values(html, TokenAttribute::Class) {
            for token in class_tokens(capture.value) {
                self.classes.insert(token.to_string());
            }
        }

        for capture in attribute_values(html, TokenAttribute::Id) {
            if !capture.value.trim().is_empty() {
                self.ids.insert(capture.value.to_string());
            }
        }

        for block in style_blocks(html) {
            self.add_css(block.value);
        }
    }

    /// Collects tokens from class and ID selectors
    pub fn add_css(&mut self, css: &str) {
        for selector in selector_names(css) {
            let token = selector.capture.value.to_string();
            match selector.kind {
                SelectorKind::Class => self.classes.insert(token),
                SelectorKind::Id => self.ids.insert(token),
            };
        }
    }
}

/// Extracts the token sets of a linked HTML + CSS pair
pub fn extract_tokens(html: &str, css: &str) -> TokenSets {
    let mut sets = TokenSets::new();
    sets.add_html(html);
    sets.add_css(css);
    sets
}
