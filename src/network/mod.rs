//! # 网络模块
//!
//! 这个模块包含所有与网络通信相关的功能：
//!
//! - HTTP 会话管理和资源下载
//! - 可替换的资源获取接口
//!
//! # 模块组织
//!
//! - `session` - HTTP 会话、请求处理、资源下载

pub mod session;

// Re-export commonly used items for convenience
pub use session::{AssetFetcher, FetchError, Session};
