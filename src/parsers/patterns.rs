//! 模式库
//!
//! 本模块集中定义了所有用于在 HTML 和 CSS 文本中定位类名、ID 以及脚本引用的匹配器，
//! 以及分类器使用的标识符形状判断。所有正则表达式只在第一次使用时编译一次，
//! 之后在整个进程中只读共享。
//!
//! 每个匹配器都返回 [`Capture`]，其中包含被捕获值在原始文本中的字节范围，
//! 调用方只需替换这一段文本，无需重建周围的语法。

use regex::{Captures, Regex};
use std::ops::Range;
use std::sync::OnceLock;

/// A captured value inside a larger document.
///
/// `range` always addresses `value` inside the haystack the matcher ran on,
/// so `&haystack[capture.range.clone()] == capture.value`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Capture<'a> {
    pub range: Range<usize>,
    pub value: &'a str,
    /// Quote character surrounding the value, for attribute captures
    pub quote: Option<char>,
    /// Attribute name as written in the source, for multi-attribute matchers
    pub attribute: Option<&'a str>,
}

/// HTML attributes whose values hold tokens
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenAttribute {
    Class,
    Id,
}

/// Attributes holding references to element IDs (besides `href`)
pub const IDREF_ATTRIBUTES: &[&str] = &[
    "for",
    "list",
    "form",
    "aria-activedescendant",
    "aria-controls",
    "aria-describedby",
    "aria-labelledby",
    "aria-owns",
];

// 属性名之前必须是空白、引号或斜杠，避免匹配 data-class= 之类的属性
const ATTRIBUTE_LEAD: &str = r#"(?:^|[\s"'/])"#;
const QUOTED_VALUE: &str = r#"\s*=\s*(?:"([^"]*)"|'([^']*)')"#;

static CLASS_ATTRIBUTE: OnceLock<Regex> = OnceLock::new();
static ID_ATTRIBUTE: OnceLock<Regex> = OnceLock::new();
static FRAGMENT_REFERENCE: OnceLock<Regex> = OnceLock::new();
static IDREF_ATTRIBUTE: OnceLock<Regex> = OnceLock::new();
static URL_FRAGMENT: OnceLock<Regex> = OnceLock::new();
static SCRIPT_SRC: OnceLock<Regex> = OnceLock::new();
static STYLE_ELEMENT: OnceLock<Regex> = OnceLock::new();
static SELECTOR: OnceLock<Regex> = OnceLock::new();

static MEANINGFUL_NAME: OnceLock<Regex> = OnceLock::new();
static GUID: OnceLock<Regex> = OnceLock::new();
static BARE_HEX: OnceLock<Regex> = OnceLock::new();
static HASHY: OnceLock<Regex> = OnceLock::new();
static WEBFLOW_NODE: OnceLock<Regex> = OnceLock::new();

/// Compiles one of the built-in patterns.
///
/// Patterns are string constants of this module, so a failure here is a
/// programming error rather than bad input.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

fn class_attribute_regex() -> &'static Regex {
    CLASS_ATTRIBUTE
        .get_or_init(|| compile(&format!("(?i){ATTRIBUTE_LEAD}class{QUOTED_VALUE}")))
}

fn id_attribute_regex() -> &'static Regex {
    ID_ATTRIBUTE.get_or_init(|| compile(&format!("(?i){ATTRIBUTE_LEAD}id{QUOTED_VALUE}")))
}

fn fragment_reference_regex() -> &'static Regex {
    FRAGMENT_REFERENCE.get_or_init(|| {
        compile(&format!(
            r#"(?i){ATTRIBUTE_LEAD}(?:xlink:)?href\s*=\s*(?:"(#[^"]*)"|'(#[^']*)')"#
        ))
    })
}

fn idref_attribute_regex() -> &'static Regex {
    IDREF_ATTRIBUTE.get_or_init(|| {
        let names = IDREF_ATTRIBUTES.join("|");
        compile(&format!(r#"(?i){ATTRIBUTE_LEAD}({names}){QUOTED_VALUE}"#))
    })
}

fn url_fragment_regex() -> &'static Regex {
    URL_FRAGMENT
        .get_or_init(|| compile(r#"(?i)url\(\s*["']?#([^"'()\s]+)["']?\s*\)"#))
}

fn script_src_regex() -> &'static Regex {
    SCRIPT_SRC.get_or_init(|| {
        compile(r#"(?i)<script\b[^>]*?\ssrc\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
    })
}

fn style_element_regex() -> &'static Regex {
    STYLE_ELEMENT.get_or_init(|| compile(r"(?is)<style\b[^>]*>(.*?)</style\s*>"))
}

// CSS 标识符：可选的前导连字符；数字开头的名称在 selector_names 中另行筛选
const CSS_NAME: &str = r"(-?(?:[_a-zA-Z0-9]|[^\x00-\x7F])(?:[_a-zA-Z0-9-]|[^\x00-\x7F])*)";

fn selector_regex() -> &'static Regex {
    SELECTOR.get_or_init(|| compile(&format!(r"([.#]){CSS_NAME}")))
}

/// Returns the capture of whichever quote-style group participated.
///
/// Quoted-value patterns carry one group per quote style: `double` for `"…"`
/// and `double + 1` for `'…'`.
fn quoted_capture<'a>(caps: &Captures<'a>, double: usize) -> Option<Capture<'a>> {
    if let Some(m) = caps.get(double) {
        return Some(Capture {
            range: m.range(),
            value: m.as_str(),
            quote: Some('"'),
            attribute: None,
        });
    }
    caps.get(double + 1).map(|m| Capture {
        range: m.range(),
        value: m.as_str(),
        quote: Some('\''),
        attribute: None,
    })
}

/// Finds every quoted value of the given HTML attribute.
pub fn attribute_values(html: &str, attribute: TokenAttribute) -> Vec<Capture<'_>> {
    let regex = match attribute {
        TokenAttribute::Class => class_attribute_regex(),
        TokenAttribute::Id => id_attribute_regex(),
    };

    regex
        .captures_iter(html)
        .filter_map(|caps| quoted_capture(&caps, 1))
        .collect()
}

/// Finds `href` / `xlink:href` values pointing inside the same document.
///
/// The captured value includes the leading `#`.
pub fn fragment_references(html: &str) -> Vec<Capture<'_>> {
    fragment_reference_regex()
        .captures_iter(html)
        .filter_map(|caps| quoted_capture(&caps, 1))
        .collect()
}

/// Finds values of attributes listed in [`IDREF_ATTRIBUTES`].
pub fn idref_values(html: &str) -> Vec<Capture<'_>> {
    idref_attribute_regex()
        .captures_iter(html)
        .filter_map(|caps| {
            let attribute = caps.get(1).map(|m| m.as_str());
            quoted_capture(&caps, 2).map(|capture| Capture {
                attribute,
                ..capture
            })
        })
        .collect()
}

/// Finds the ID part of `url(#id)` references.
pub fn url_fragments(text: &str) -> Vec<Capture<'_>> {
    url_fragment_regex()
        .captures_iter(text)
        .filter_map(|caps| {
            caps.get(1).map(|m| Capture {
                range: m.range(),
                value: m.as_str(),
                quote: None,
                attribute: None,
            })
        })
        .collect()
}

/// Finds the `src` value of every `<script>` start tag.
pub fn script_sources(html: &str) -> Vec<Capture<'_>> {
    script_src_regex()
        .captures_iter(html)
        .filter_map(|caps| quoted_capture(&caps, 1))
        .collect()
}

/// Finds the bodies of `<style>` elements.
pub fn style_blocks(html: &str) -> Vec<Capture<'_>> {
    style_element_regex()
        .captures_iter(html)
        .filter_map(|caps| {
            caps.get(1).map(|m| Capture {
                range: m.range(),
                value: m.as_str(),
                quote: None,
                attribute: None,
            })
        })
        .collect()
}

/// Rebuilds `haystack` with each range swapped for its replacement.
///
/// Ranges must come from matchers run on `haystack`; overlapping ranges
/// after the first one are dropped.
pub fn splice<I>(haystack: &str, replacements: I) -> String
where
    I: IntoIterator<Item = (Range<usize>, String)>,
{
    let mut replacements: Vec<(Range<usize>, String)> = replacements.into_iter().collect();
    if replacements.is_empty() {
        return haystack.to_string();
    }
    replacements.sort_by_key(|(range, _)| range.start);

    let mut result = String::with_capacity(haystack.len());
    let mut cursor = 0;

    for (range, replacement) in replacements {
        if range.start < cursor || range.end > haystack.len() {
            continue;
        }
        result.push_str(&haystack[cursor..range.start]);
        result.push_str(&replacement);
        cursor = range.end;
    }
    result.push_str(&haystack[cursor..]);

    result
}

fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' || byte >= 0x80
}

/// Whether a selector name that starts with a digit is kept.
///
/// Only generated shapes qualify, so numbers such as `.5em` or colors such as
/// `#1a2b3c` never turn into selectors.
fn is_digit_start_selector(name: &str) -> bool {
    is_guid(name) || is_bare_hex(name) || is_webflow_node_shape(name)
}

/// Selector kind for [`selector_names`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectorKind {
    Class,
    Id,
}

/// Selector match tagged with its kind
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorCapture<'a> {
    pub kind: SelectorKind,
    pub capture: Capture<'a>,
}

/// Finds class and ID selector names in a stylesheet, in document order.
///
/// A sigil preceded by an identifier character is part of something else
/// (`0.5em`, `logo.png`, `foo.bar`) and is skipped, unless it directly
/// continues the previously accepted selector (`.a.b`, `#nav.open`).
pub fn selector_names(css: &str) -> Vec<SelectorCapture<'_>> {
    let bytes = css.as_bytes();
    let mut previous_end: Option<usize> = None;
    let mut found = Vec::new();

    for caps in selector_regex().captures_iter(css) {
        let (Some(whole), Some(sigil), Some(name)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        let start = whole.start();

        if start > 0 && is_identifier_byte(bytes[start - 1]) && previous_end != Some(start) {
            continue;
        }

        let first = name.as_str().trim_start_matches('-').as_bytes().first();
        if first.is_some_and(u8::is_ascii_digit) && !is_digit_start_selector(name.as_str()) {
            continue;
        }

        previous_end = Some(whole.end());
        let kind = if sigil.as_str() == "." {
            SelectorKind::Class
        } else {
            SelectorKind::Id
        };
        found.push(SelectorCapture {
            kind,
            capture: Capture {
                range: name.range(),
                value: name.as_str(),
                quote: None,
                attribute: None,
            },
        });
    }

    found
}

/// Finds class selector names (`.name`) in a stylesheet.
pub fn class_selectors(css: &str) -> Vec<Capture<'_>> {
    selector_names(css)
        .into_iter()
        .filter(|s| s.kind == SelectorKind::Class)
        .map(|s| s.capture)
        .collect()
}

/// Finds ID selector names (`#name`) in a stylesheet.
pub fn id_selectors(css: &str) -> Vec<Capture<'_>> {
    selector_names(css)
        .into_iter()
        .filter(|s| s.kind == SelectorKind::Id)
        .map(|s| s.capture)
        .collect()
}

/// Short hand-authored looking name, e.g. `nav`, `btn-primary`, `col-6`
pub fn is_meaningful_name(token: &str) -> bool {
    MEANINGFUL_NAME
        .get_or_init(|| compile(r"^[a-z][a-z0-9-]{0,24}$"))
        .is_match(token)
}

/// 36-character hyphenated hexadecimal GUID
pub fn is_guid(token: &str) -> bool {
    GUID.get_or_init(|| {
        compile(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
    })
    .is_match(token)
}

/// 32 hexadecimal characters without separators
pub fn is_bare_hex(token: &str) -> bool {
    BARE_HEX
        .get_or_init(|| compile(r"^[0-9a-fA-F]{32}$"))
        .is_match(token)
}

/// Ten or more characters drawn from letters, digits, `_` and `-`
pub fn is_hashy(token: &str) -> bool {
    HASHY
        .get_or_init(|| compile(r"^[A-Za-z0-9_-]{10,}$"))
        .is_match(token)
}

/// Webflow grid/flex node identifier without its `w-node-` prefix:
/// a GUID segment followed by a hex suffix, optionally led by `_`
pub fn is_webflow_node_shape(token: &str) -> bool {
    WEBFLOW_NODE
        .get_or_init(|| {
            compile(
                r"^_?[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}-[0-9a-fA-F]+$",
            )
        })
        .is_match(token)
}
