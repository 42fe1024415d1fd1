//! # 命名模块
//!
//! 决定哪些类名和 ID 需要重命名，以及它们的新名称：
//!
//! - `extractor` - 从 HTML 与 CSS 中收集全部标记
//! - `classifier` - 判断标记是否为自动生成的噪声
//! - `generator` - 生成确定性的短名称
//! - `mapping` - 旧名称到新名称的有序映射

pub mod classifier;
pub mod extractor;
pub mod generator;
pub mod mapping;

pub use classifier::{
    classify, should_rename_class, should_rename_id, Decision, RenameMode, Rule, TokenKind,
};
pub use extractor::{extract_tokens, TokenSets};
pub use generator::{fingerprint, StableNameGenerator};
pub use mapping::TokenMapping;
