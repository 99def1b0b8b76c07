//! # 批量执行器
//!
//! 顺序执行批量处理任务。
//!
//! ## 功能
//! - 逐个处理，前一个完成后才开始下一个
//! - 进度条显示
//! - 失败即时打印，继续处理下一个
//! - 错误收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/beautify.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `utils/output.rs` 打印失败

use crate::utils::{output, progress};

/// 单个条目处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    /// 处理成功
    Success(String),
    /// 跳过（非普通文件）
    Skipped(String),
    /// 处理失败
    Failed(String, String), // (条目, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(_) => self.success += 1,
            ProcessResult::Skipped(_) => self.skipped += 1,
            ProcessResult::Failed(item, err) => {
                self.failed += 1;
                self.failures.push((item, err));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 是否显示进度条
    show_progress: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(show_progress: bool) -> Self {
        Self { show_progress }
    }

    /// 顺序处理条目列表
    ///
    /// `processor` 的失败不会中断循环。
    pub fn run<T, F>(&self, items: &[T], mut processor: F) -> BatchResult
    where
        F: FnMut(&T) -> ProcessResult,
    {
        let pb = progress::create_optional_bar(items.len() as u64, "Formatting", self.show_progress);

        let mut batch_result = BatchResult::default();

        for item in items {
            let result = processor(item);

            if let ProcessResult::Failed(name, err) = &result {
                pb.suspend(|| output::print_error(&format!("{}: {}", name, err)));
            }

            batch_result.merge(result);
            pb.inc(1);
        }

        pb.finish_and_clear();

        batch_result
    }
}
