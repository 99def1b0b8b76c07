//! # 统一错误处理模块
//!
//! 定义 beautify 的所有错误类型，使用 `thiserror` 派生。
//!
//! 致命错误（源目录不存在、输出目录无法创建）通过 `Result` 传递到 `main`；
//! 单个文件的失败由 `batch/` 收集，不会中断整个批处理。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// beautify 统一错误类型
#[derive(Error, Debug)]
pub enum BeautifyError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to delete file: {path}")]
    FileDeleteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory: {path}")]
    CreateDirError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Path exists but is not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Output directory is the source directory: {path}")]
    SameDirectory { path: String },

    #[error("Invalid directory entry: {path}")]
    InvalidEntry { path: String },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    #[error("Failed to launch: {command}")]
    CommandSpawnError {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl BeautifyError {
    /// 生成包含底层原因的完整错误描述（用于失败汇总）
    pub fn detail(&self) -> String {
        use std::error::Error as _;

        match self.source() {
            Some(source) => format!("{}: {}", self, source),
            None => self.to_string(),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, BeautifyError>;
