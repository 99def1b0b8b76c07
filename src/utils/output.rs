//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `batch/` 模块使用
//! - 使用 `colored`, `tabled` crate

use colored::Colorize;
use tabled::{Table, Tabled};

/// 失败汇总行
#[derive(Tabled)]
struct FailureRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Error")]
    error: String,
}

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印跳过消息
pub fn print_skip(msg: &str) {
    println!("{} {}", "[SKIP]".dimmed(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印执行的外部命令
pub fn print_command(cmdline: &str) {
    println!("{} {}", "[$]".cyan().bold(), cmdline.dimmed());
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

/// 以表格形式打印失败列表
pub fn print_failures(title: &str, failures: &[(String, String)]) {
    if failures.is_empty() {
        return;
    }

    println!("\n{} {}", "[ERR]".red().bold(), title.bold());
    println!("{}", failure_table(failures));
}

fn failure_table(failures: &[(String, String)]) -> String {
    let rows: Vec<FailureRow> = failures
        .iter()
        .enumerate()
        .map(|(i, (item, error))| FailureRow {
            index: i + 1,
            item: item.clone(),
            error: error.clone(),
        })
        .collect();

    Table::new(&rows).to_string()
}
