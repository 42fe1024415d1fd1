//! # 解析器模块
//!
//! 这个模块包含所有在 HTML 和 CSS 原文上定位并替换标记的功能：
//!
//! - 模式库：正则匹配器与标识符形状判断
//! - HTML 属性与内嵌样式的重写
//! - CSS 选择器的重写
//! - 片段链接与 ID 引用的重写
//! - 外部脚本引用的定位
//!
//! # 模块组织
//!
//! - `patterns` - 匹配器、捕获结构与按范围替换
//! - `html` - `class` / `id` 属性与 `<style>` 元素
//! - `css` - 类选择器与 ID 选择器
//! - `link_rewriter` - `href="#x"`、ID 引用属性与 `url(#x)`
//! - `js` - `<script src>` 引用

pub mod css;
pub mod html;
pub mod js;
pub mod link_rewriter;
pub mod patterns;

// Re-export commonly used items for convenience
pub use css::rewrite_css;
pub use html::{
    class_tokens, rewrite_embedded_styles, rewrite_html, rewrite_html_classes, rewrite_html_ids,
};
pub use js::{find_script_sources, ScriptSource};
pub use link_rewriter::{rewrite_fragment_references, rewrite_id_references};
