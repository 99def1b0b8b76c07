//! # 源文件收集器
//!
//! 列出源目录下的直接条目，并按自身文件类型分类。
//!
//! ## 功能
//! - 只看当前一层，不递归
//! - 不跟随符号链接：符号链接、目录、特殊文件都归为 `Other`
//! - 按文件名排序
//! - 读取失败的条目单独记录，不中断枚举
//!
//! ## 依赖关系
//! - 被 `commands/beautify.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{BeautifyError, Result};

use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

/// 条目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// 普通文件
    Regular,
    /// 目录、符号链接或特殊文件
    Other,
}

/// 源目录中的一个条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// 源目录与文件名拼接得到的完整路径
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl SourceEntry {
    pub fn is_regular(&self) -> bool {
        self.kind == EntryKind::Regular
    }
}

/// 收集结果
#[derive(Debug, Default)]
pub struct Collected {
    pub entries: Vec<SourceEntry>,
    /// 无法读取的条目 (路径, 错误信息)
    pub failures: Vec<(String, String)>,
}

impl Collected {
    /// 普通文件数量
    pub fn regular_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_regular()).count()
    }
}

/// 源文件收集器
pub struct FileCollector {
    /// 源目录
    source: PathBuf,
}

impl FileCollector {
    /// 创建新的收集器
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// 列出源目录中的所有直接条目
    ///
    /// 源目录不存在或无法读取时返回错误；单个条目出错只记录到 `failures`。
    pub fn collect(&self) -> Result<Collected> {
        if !self.source.exists() {
            return Err(BeautifyError::DirectoryNotFound {
                path: self.source.display().to_string(),
            });
        }
        if !self.source.is_dir() {
            return Err(BeautifyError::NotADirectory {
                path: self.source.display().to_string(),
            });
        }

        // 提前暴露权限问题，避免 walkdir 把根目录错误混进条目错误
        fs::read_dir(&self.source).map_err(|e| BeautifyError::FileReadError {
            path: self.source.display().to_string(),
            source: e,
        })?;

        let mut collected = Collected::default();

        let walker = WalkDir::new(&self.source)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        for item in walker {
            match item {
                Ok(entry) => {
                    let kind = if entry.file_type().is_file() {
                        EntryKind::Regular
                    } else {
                        EntryKind::Other
                    };
                    collected.entries.push(SourceEntry {
                        path: entry.into_path(),
                        kind,
                    });
                }
                Err(e) => {
                    let path = e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| self.source.display().to_string());
                    collected.failures.push((path, e.to_string()));
                }
            }
        }

        Ok(collected)
    }
}
