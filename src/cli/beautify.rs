//! # beautify 参数定义
//!
//! 所有选项都有默认值，默认布局为工具目录位于源目录之下。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/beautify.rs`

use clap::Args;
use std::path::PathBuf;

/// beautify 参数
#[derive(Args, Debug)]
pub struct BeautifyArgs {
    /// Directory whose files are formatted (not searched recursively)
    #[arg(long, default_value = "../")]
    pub src_dir: PathBuf,

    /// Output directory; its regular files are deleted before each run
    #[arg(long, default_value = "../beautify_out")]
    pub out_dir: PathBuf,

    // ─────────────────────────────────────────────────────────────
    // Formatter options
    // ─────────────────────────────────────────────────────────────
    /// Formatter configuration file (passed through unchecked)
    #[arg(short = 'c', long, default_value = "uncrustify.cfg")]
    pub config: PathBuf,

    /// Language mode passed to the formatter
    #[arg(short = 'l', long, default_value = "C")]
    pub lang: String,

    /// Formatter executable
    #[arg(long, default_value = "uncrustify")]
    pub formatter: String,

    // ─────────────────────────────────────────────────────────────
    // Output control
    // ─────────────────────────────────────────────────────────────
    /// Print each formatter command line before running it
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,

    /// Disable the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}
