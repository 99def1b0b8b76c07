//! # 输出目录准备
//!
//! 先判断输出目录是否存在，再决定创建还是清空。
//!
//! ## 规则
//! - 不存在：创建（含父目录），创建失败是致命错误
//! - 已存在且为目录：删除其中所有普通文件，保留子目录和其他条目
//! - 已存在但不是目录：致命错误
//! - 与源目录是同一目录：致命错误，清空会删掉源文件
//! - 清空过程中单个文件删除失败只记录，不中断
//!
//! ## 依赖关系
//! - 被 `commands/beautify.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{BeautifyError, Result};

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;
use walkdir::WalkDir;

/// 清空结果
#[derive(Debug, Default)]
pub struct PurgeReport {
    /// 已删除的文件数
    pub removed: usize,
    /// 删除失败 (路径, 错误信息)
    pub failures: Vec<(String, String)>,
}

/// 输出目录准备结果
#[derive(Debug)]
pub enum PrepareOutcome {
    /// 新建了目录
    Created,
    /// 目录已存在，已清空
    Purged(PurgeReport),
}

/// 输出目录与源目录解析到同一位置时返回错误
///
/// 任一路径尚不存在时无法比较，视为不同。
pub fn ensure_distinct(src_dir: &Path, out_dir: &Path) -> Result<()> {
    let (Ok(src), Ok(out)) = (fs::canonicalize(src_dir), fs::canonicalize(out_dir)) else {
        return Ok(());
    };

    if src == out {
        return Err(BeautifyError::SameDirectory {
            path: out.display().to_string(),
        });
    }

    Ok(())
}

/// 确保输出目录存在且不含普通文件
pub fn prepare_output_dir(dir: &Path) -> Result<PrepareOutcome> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(PrepareOutcome::Purged(purge_dir(dir))),
        Ok(_) => Err(BeautifyError::NotADirectory {
            path: dir.display().to_string(),
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            fs::create_dir_all(dir).map_err(|e| BeautifyError::CreateDirError {
                path: dir.display().to_string(),
                source: e,
            })?;
            Ok(PrepareOutcome::Created)
        }
        Err(e) => Err(BeautifyError::FileReadError {
            path: dir.display().to_string(),
            source: e,
        }),
    }
}

/// 删除目录下所有普通文件，保留目录本身与子目录
///
/// 永不返回错误：每个失败都记录在报告里。
pub fn purge_dir(dir: &Path) -> PurgeReport {
    purge_dir_with(dir, |path| fs::remove_file(path))
}

/// 使用指定的删除函数清空目录，按文件名顺序处理
fn purge_dir_with<F>(dir: &Path, mut remove: F) -> PurgeReport
where
    F: FnMut(&Path) -> io::Result<()>,
{
    let mut report = PurgeReport::default();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for item in walker {
        let entry = match item {
            Ok(entry) => entry,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| dir.display().to_string());
                report.failures.push((path, e.to_string()));
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        match remove(entry.path()) {
            Ok(()) => report.removed += 1,
            Err(e) => {
                let err = BeautifyError::FileDeleteError {
                    path: entry.path().display().to_string(),
                    source: e,
                };
                report
                    .failures
                    .push((entry.path().display().to_string(), err.detail()));
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_prepare_creates_missing_dir() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("beautify_out");

        let outcome = prepare_output_dir(&out).unwrap();
        assert!(matches!(outcome, PrepareOutcome::Created));
        assert!(out.is_dir());
    }

    #[test]
    fn test_prepare_purges_existing_dir() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("beautify_out");
        fs::create_dir(&out).unwrap();
        File::create(out.join("stale.c")).unwrap();
        File::create(out.join("old.h")).unwrap();
        fs::create_dir(out.join("keep")).unwrap();
        File::create(out.join("keep").join("inner.c")).unwrap();

        let outcome = prepare_output_dir(&out).unwrap();
        match outcome {
            PrepareOutcome::Purged(report) => {
                assert_eq!(report.removed, 2);
                assert!(report.failures.is_empty());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        assert!(out.is_dir());
        assert!(!out.join("stale.c").exists());
        assert!(!out.join("old.h").exists());
        assert!(out.join("keep").is_dir());
        assert!(out.join("keep").join("inner.c").exists());
    }

    #[test]
    fn test_prepare_rejects_file() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("beautify_out");
        File::create(&out).unwrap();

        let err = prepare_output_dir(&out).unwrap_err();
        assert!(matches!(err, BeautifyError::NotADirectory { .. }));
        assert!(out.is_file());
    }

    #[test]
    fn test_delete_failure_does_not_stop_purge() {
        let dir = tempdir().unwrap();
        for name in ["a.c", "b.c", "c.c"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let report = purge_dir_with(dir.path(), |path| {
            if path.ends_with("b.c") {
                Err(io::Error::new(ErrorKind::PermissionDenied, "denied"))
            } else {
                fs::remove_file(path)
            }
        });

        assert_eq!(report.removed, 2);
        assert_eq!(report.failures.len(), 1);
        let (path, err) = &report.failures[0];
        assert!(path.ends_with("b.c"));
        assert!(err.contains("Failed to delete file"));
        assert!(err.contains("denied"));
        assert!(!dir.path().join("a.c").exists());
        assert!(dir.path().join("b.c").exists());
        assert!(!dir.path().join("c.c").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_read_only_dir_records_every_failure() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();
        File::create(out.join("a.c")).unwrap();
        File::create(out.join("b.c")).unwrap();
        fs::set_permissions(&out, fs::Permissions::from_mode(0o555)).unwrap();

        // root 不受目录权限限制，无法构造删除失败
        if File::create(out.join("write-check")).is_ok() {
            fs::set_permissions(&out, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let report = purge_dir(&out);
        fs::set_permissions(&out, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(report.removed, 0);
        assert_eq!(report.failures.len(), 2);
        assert!(out.join("a.c").exists());
        assert!(out.join("b.c").exists());
    }

    #[test]
    fn test_same_directory_is_rejected() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir(&src).unwrap();

        let err = ensure_distinct(&src, &src.join(".")).unwrap_err();
        assert!(matches!(err, BeautifyError::SameDirectory { .. }));
    }

    #[test]
    fn test_distinct_or_missing_dirs_pass() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir(&src).unwrap();

        assert!(ensure_distinct(&src, &src.join("beautify_out")).is_ok());
        assert!(ensure_distinct(&src, dir.path()).is_ok());
    }

    #[test]
    fn test_purge_empty_dir() {
        let dir = tempdir().unwrap();
        let report = purge_dir(dir.path());
        assert_eq!(report.removed, 0);
        assert!(report.failures.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_purge_keeps_symlinked_dir() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target");
        fs::create_dir(&target).unwrap();
        File::create(target.join("x.c")).unwrap();

        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();
        std::os::unix::fs::symlink(&target, out.join("link")).unwrap();

        let report = purge_dir(&out);
        assert_eq!(report.removed, 0);
        assert!(out.join("link").exists());
        assert!(target.join("x.c").exists());
    }
}
