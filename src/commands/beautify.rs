//! # beautify 命令实现
//!
//! 批量调用 uncrustify 格式化源目录中的文件。
//!
//! ## 流程
//! 1. 准备输出目录（不存在则创建，存在则清空普通文件）
//! 2. 枚举源目录的直接条目
//! 3. 对每个普通文件执行一次格式化，非普通条目静默跳过
//! 4. 打印汇总；单个文件失败不影响退出码
//!
//! ## 依赖关系
//! - 使用 `cli/beautify.rs` 定义的参数
//! - 使用 `batch/`
//! - 使用 `utils/uncrustify.rs`, `utils/output.rs`

use crate::batch::{
    ensure_distinct, prepare_output_dir, BatchResult, BatchRunner, FileCollector, PrepareOutcome, ProcessResult,
    SourceEntry,
};
use crate::cli::beautify::BeautifyArgs;
use crate::error::Result;
use crate::utils::output;
use crate::utils::uncrustify::{FormatJob, FormatterConfig};

use std::path::Path;

/// 运行选项
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// 打印每条命令
    pub verbose: bool,
    /// 显示进度条
    pub show_progress: bool,
}

/// 一次运行的完整结果
#[derive(Debug)]
pub struct RunSummary {
    pub prepare: PrepareOutcome,
    pub batch: BatchResult,
}

impl RunSummary {
    /// 清空输出目录时的删除失败
    pub fn purge_failures(&self) -> &[(String, String)] {
        match &self.prepare {
            PrepareOutcome::Purged(report) => report.failures.as_slice(),
            PrepareOutcome::Created => &[],
        }
    }
}

/// 执行 beautify 命令
pub fn execute(args: BeautifyArgs) -> Result<()> {
    output::print_header("Batch Source Beautify");

    let formatter = FormatterConfig {
        program: args.formatter,
        config: args.config,
        language: args.lang,
    };

    // 进度条会与逐条命令输出交错，verbose 时关闭
    let options = RunOptions {
        verbose: args.verbose,
        show_progress: !args.no_progress && !args.verbose,
    };

    let summary = run_batch(&args.src_dir, &args.out_dir, &formatter, options)?;

    output::print_separator();
    output::print_done(&format!(
        "Formatted {} files into '{}', skipped {} entries, {} failures",
        summary.batch.success,
        args.out_dir.display(),
        summary.batch.skipped,
        summary.batch.failed
    ));

    output::print_failures("Could not clean output directory:", summary.purge_failures());
    output::print_failures("Failed entries:", &summary.batch.failures);

    Ok(())
}

/// 准备输出目录并格式化源目录中的所有普通文件
///
/// 只有输出目录无法准备、与源目录相同或源目录无法读取时才返回错误。
pub fn run_batch(
    src_dir: &Path,
    out_dir: &Path,
    formatter: &FormatterConfig,
    options: RunOptions,
) -> Result<RunSummary> {
    ensure_distinct(src_dir, out_dir)?;

    let prepare = prepare_output_dir(out_dir)?;
    match &prepare {
        PrepareOutcome::Created => {
            output::print_info(&format!("Created output directory '{}'", out_dir.display()));
        }
        PrepareOutcome::Purged(report) => {
            output::print_info(&format!(
                "Cleaned output directory '{}' ({} files removed)",
                out_dir.display(),
                report.removed
            ));
            for (path, err) in &report.failures {
                output::print_error(&format!("{}: {}", path, err));
            }
        }
    }

    let collected = FileCollector::new(src_dir).collect()?;
    for (path, err) in &collected.failures {
        output::print_error(&format!("{}: {}", path, err));
    }

    let regular = collected.regular_count();
    if regular == 0 {
        output::print_warning(&format!(
            "No regular files found in '{}'",
            src_dir.display()
        ));
    } else {
        output::print_info(&format!(
            "Formatting {} files from '{}'",
            regular,
            src_dir.display()
        ));
    }

    let runner = BatchRunner::new(options.show_progress);
    let mut batch = runner.run(&collected.entries, |entry| {
        format_entry(entry, out_dir, formatter, options.verbose)
    });

    for (path, err) in collected.failures {
        batch.merge(ProcessResult::Failed(path, err));
    }

    Ok(RunSummary { prepare, batch })
}

/// 格式化单个条目；非普通文件直接跳过
fn format_entry(
    entry: &SourceEntry,
    out_dir: &Path,
    formatter: &FormatterConfig,
    verbose: bool,
) -> ProcessResult {
    let name = entry.path.display().to_string();

    if !entry.is_regular() {
        if verbose {
            output::print_skip(&name);
        }
        return ProcessResult::Skipped(name);
    }

    let job = match FormatJob::new(&entry.path, out_dir) {
        Ok(job) => job,
        Err(e) => return ProcessResult::Failed(name, e.detail()),
    };

    if let Err(e) = job.unlink_stale_output() {
        return ProcessResult::Failed(name, e.detail());
    }

    if verbose {
        output::print_command(&formatter.command_line(&job));
    }

    match formatter.run(&job) {
        Ok(()) => {
            if verbose {
                output::print_success(&name);
            }
            ProcessResult::Success(name)
        }
        Err(e) => ProcessResult::Failed(name, e.detail()),
    }
}
