//! # Classmint Library
//!
//! 将 HTML 与 CSS 文档对中自动生成的类名和 ID 替换为简短、确定的名称，
//! 并保持两份文档之间的所有引用一致；可选地把外部脚本迁移到本地。
//!
//! ## 模块组织
//!
//! - `core` - 错误类型、配置与主要处理流程
//! - `naming` - 标记提取、分类、名称生成与映射
//! - `parsers` - HTML、CSS 与链接的模式匹配和重写
//! - `assets` - 外部脚本迁移
//! - `network` - HTTP 会话
//! - `utils` - 工具函数和实用程序
//! - `builders` - 输出构建器
//! - `env` - 环境变量配置

pub mod assets;
pub mod builders;
pub mod core;
pub mod env;
pub mod naming;
pub mod network;
pub mod parsers;
pub mod utils;

// Re-export commonly used items for convenience
pub use self::core::*;
pub use naming::*;
