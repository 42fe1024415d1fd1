//! # 工具模块
//!
//! 这个模块包含各种工具函数和实用程序：
//!
//! - URL处理和解析工具
//! - 摘要计算
//! - 脚本引用的绝对地址解析
//!
//! # 模块组织
//!
//! - `url` - URL解析、清理、基础URL验证等工具函数
//! - `digest` - SHA-256 十六进制摘要

pub mod digest;
pub mod url;

// Re-export commonly used items for convenience
pub use digest::sha256_hex;
pub use url::{
    clean_url, get_referer_url, is_http_url, is_inline_reference, parse_base_url, resolve_http_url,
    Url,
};
