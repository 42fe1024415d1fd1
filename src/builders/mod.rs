//! # 构建器模块
//!
//! 这个模块包含用于构建输出的构建器：
//!
//! - 映射文件（JSON）构建
//! - 输出目录写入
//!
//! # 模块组织
//!
//! - `output` - `mapping.json` 序列化与结果写入

pub mod output;

// Re-export commonly used items for convenience
pub use output::{write_outputs, MappingDocument, WrittenOutputs, MAPPING_FILE_NAME};
