//! # 工具函数模块
//!
//! 提供美化输出、进度条、格式化命令构造等工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `batch/` 模块使用
//! - 子模块: output, progress, uncrustify

pub mod output;
pub mod progress;
pub mod uncrustify;
