//! # beautify - 批量源代码美化工具
//!
//! 对一个目录中的所有普通文件逐个调用 uncrustify，
//! 结果写入一个每次运行前都会被清空的输出目录。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── batch/     (目录准备、枚举、顺序执行)
//!   ├── utils/      (输出、进度条、uncrustify 命令)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&e.detail());
        std::process::exit(1);
    }
}
