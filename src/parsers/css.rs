//! CSS 解析器模块
//!
//! 在样式表原文中定位类选择器（`.name`）和 ID 选择器（`#name`），
//! 并把映射表中出现的名称替换为新名称。
//!
//! 这里不构建语法树：选择器名称通过模式库中的匹配器定位，
//! 只替换名称本身所在的字节范围，注释、空白和声明块保持不变。
//!
//! # 使用示例
//!
//! ```rust
//! use classmint::naming::TokenMapping;
//! use classmint::parsers::css::rewrite_css;
//!
//! let classes: TokenMapping = vec![("card".to_string(), "c001_abcdef".to_string())]
//!     .into_iter()
//!     .collect();
//! let ids = TokenMapping::new();
//!
//! let css = ".card:hover { margin: 0.5em; }";
//! assert_eq!(rewrite_css(css, &classes, &ids), ".c001_abcdef:hover { margin: 0.5em; }");
//! ```

use crate::naming::TokenMapping;
use crate::parsers::patterns::{selector_names, splice, SelectorKind};

/// 替换样式表中的类选择器和 ID 选择器
///
/// # 参数
///
/// * `css` - 样式表原文
/// * `class_map` - 类名映射
/// * `id_map` - ID 映射
///
/// # 返回值
///
/// 替换后的样式表；未出现在映射表中的选择器原样保留
pub fn rewrite_css(css: &str, class_map: &TokenMapping, id_map: &TokenMapping) -> String {
    if class_map.is_empty() && id_map.is_empty() {
        return css.to_string();
    }

    let replacements = selector_names(css).into_iter().filter_map(|selector| {
        let map = match selector.kind {
            SelectorKind::Class => class_map,
            SelectorKind::Id => id_map,
        };
        map.get(selector.capture.value)
            .map(|name| (selector.capture.range, name.to_string()))
    });

    splice(css, replacements)
}
