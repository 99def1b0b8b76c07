//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! 不带任何参数运行时，格式化 `../` 下的文件并输出到 `../beautify_out`。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: beautify

pub mod beautify;

use clap::Parser;

/// beautify - 批量调用 uncrustify 美化源代码
#[derive(Parser)]
#[command(name = "beautify")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Batch-run uncrustify over a directory into a clean output directory", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub args: beautify::BeautifyArgs,
}
