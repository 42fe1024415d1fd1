//! # 资源迁移模块
//!
//! 把外部托管的脚本保存到本地，并改写文档中的引用。
//!
//! # 模块组织
//!
//! - `relocator` - 下载、去重、原子写入与引用改写
//! - `file_names` - 本地文件名的选择与重名处理

pub mod file_names;
pub mod relocator;

pub use file_names::{local_file_name, FileNameRegistry};
pub use relocator::{
    relocate_scripts, resolve_script_url, RelocatedScript, RelocationFailure, RelocationOptions,
    RelocationReport,
};
