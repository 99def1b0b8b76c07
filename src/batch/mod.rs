//! # 批量处理模块
//!
//! 提供输出目录准备、源文件枚举与逐个执行的能力。
//!
//! ## 功能
//! - 创建或清空输出目录
//! - 枚举源目录中的条目（不递归）
//! - 顺序执行，单个失败不影响其余条目
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/beautify.rs` 使用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod purge;
pub mod runner;

pub use collector::{FileCollector, SourceEntry};
pub use purge::{ensure_distinct, prepare_output_dir, PrepareOutcome};
pub use runner::{BatchResult, BatchRunner, ProcessResult};
