//! 标记分类器
//!
//! 判断一个类名或 ID 是自动生成的“噪声”（需要重命名）还是有意义的手写名称（保留）。
//! 规则按固定顺序逐条检查，命中第一条即返回，便于单独审阅和测试每条规则。

use std::fmt;
use std::str::FromStr;

use crate::parsers::patterns::{
    is_bare_hex, is_guid, is_hashy, is_meaningful_name, is_webflow_node_shape,
};

/// Prefix Webflow puts on IDs it generates for grid/flex placement
pub const WEBFLOW_NODE_PREFIX: &str = "w-node-";

/// Icon library class prefixes, compared case-insensitively
const ICON_PREFIXES: &[&str] = &[
    "fa-",
    "bi-",
    "glyphicon",
    "material-icons",
    "material-symbols",
    "icon-",
    "ion-",
    "ti-",
    "mdi-",
    "la-",
];

/// Icon library family classes used on their own
const ICON_FAMILIES: &[&str] = &[
    "fa", "fas", "far", "fab", "fal", "fad", "fat", "bi", "mdi", "las", "lar", "lab",
];

/// How aggressively tokens are selected for renaming
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenameMode {
    /// Only GUID-shaped and 32-hex tokens
    Strict,
    /// GUID-shaped tokens plus any long opaque-looking token
    #[default]
    Default,
}

impl FromStr for RenameMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "strict" | "guid" => Ok(RenameMode::Strict),
            "default" | "opaque" => Ok(RenameMode::Default),
            _ => Err(format!(
                "Invalid rename mode '{}'. Use: strict, default",
                value
            )),
        }
    }
}

impl fmt::Display for RenameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameMode::Strict => write!(f, "strict"),
            RenameMode::Default => write!(f, "default"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Class,
    Id,
}

/// Rule that decided a token's fate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Blank,
    WebflowNode,
    IconLibrary,
    MeaningfulName,
    Guid,
    BareHex,
    Opaque,
    Fallthrough,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub rename: bool,
    pub rule: Rule,
}

impl Decision {
    fn rename(rule: Rule) -> Self {
        Self { rename: true, rule }
    }

    fn preserve(rule: Rule) -> Self {
        Self {
            rename: false,
            rule,
        }
    }
}

pub fn is_blank(token: &str) -> bool {
    token.trim().is_empty()
}

pub fn is_icon_class(token: &str) -> bool {
    let lowercased = token.to_lowercase();
    ICON_FAMILIES.contains(&lowercased.as_str())
        || ICON_PREFIXES.iter().any(|p| lowercased.starts_with(p))
}

pub fn is_webflow_node(token: &str) -> bool {
    token.starts_with(WEBFLOW_NODE_PREFIX) || is_webflow_node_shape(token)
}

fn blank_rule(token: &str, _mode: RenameMode) -> Option<Decision> {
    is_blank(token).then(|| Decision::preserve(Rule::Blank))
}

fn webflow_rule(token: &str, _mode: RenameMode) -> Option<Decision> {
    is_webflow_node(token).then(|| Decision::rename(Rule::WebflowNode))
}

fn icon_rule(token: &str, _mode: RenameMode) -> Option<Decision> {
    is_icon_class(token).then(|| Decision::preserve(Rule::IconLibrary))
}

fn meaningful_rule(token: &str, _mode: RenameMode) -> Option<Decision> {
    is_meaningful_name(token).then(|| Decision::preserve(Rule::MeaningfulName))
}

fn guid_rule(token: &str, _mode: RenameMode) -> Option<Decision> {
    if is_guid(token) {
        Some(Decision::rename(Rule::Guid))
    } else if is_bare_hex(token) {
        Some(Decision::rename(Rule::BareHex))
    } else {
        None
    }
}

fn opaque_rule(token: &str, mode: RenameMode) -> Option<Decision> {
    (mode == RenameMode::Default && is_hashy(token)).then(|| Decision::rename(Rule::Opaque))
}

type RuleFn = fn(&str, RenameMode) -> Option<Decision>;

const CLASS_RULES: &[RuleFn] = &[blank_rule, icon_rule, meaningful_rule, guid_rule, opaque_rule];

// 生成的布局 ID 无论何种模式都要重命名，因此排在图标和有意义名称检查之前
const ID_RULES: &[RuleFn] = &[
    blank_rule,
    webflow_rule,
    icon_rule,
    meaningful_rule,
    guid_rule,
    opaque_rule,
];

fn run_rules(rules: &[RuleFn], token: &str, mode: RenameMode) -> Decision {
    rules
        .iter()
        .find_map(|rule| rule(token, mode))
        .unwrap_or(Decision::preserve(Rule::Fallthrough))
}

/// Classifies a token, reporting the rule that decided it
pub fn classify(token: &str, kind: TokenKind, mode: RenameMode) -> Decision {
    match kind {
        TokenKind::Class => run_rules(CLASS_RULES, token, mode),
        TokenKind::Id => run_rules(ID_RULES, token, mode),
    }
}

pub fn should_rename_class(token: &str, mode: RenameMode) -> bool {
    classify(token, TokenKind::Class, mode).rename
}

pub fn should_rename_id(token: &str, mode: RenameMode) -> bool {
    classify(token, TokenKind::Id, mode).rename
}
