//! # uncrustify 命令构造工具
//!
//! 生成并执行 `uncrustify -c <cfg> -l <lang> -f <input> -o <output>`。
//!
//! 命令同步执行；退出码和输出被忽略，只有启动失败才算错误。
//!
//! ## 依赖关系
//! - 被 `commands/beautify.rs` 使用
//! - 无外部模块依赖

use crate::error::{BeautifyError, Result};

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

/// 格式化工具配置
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// 可执行文件名
    pub program: String,
    /// 配置文件路径（不做校验，直接交给工具）
    pub config: PathBuf,
    /// 语言模式
    pub language: String,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        FormatterConfig {
            program: "uncrustify".to_string(),
            config: PathBuf::from("uncrustify.cfg"),
            language: "C".to_string(),
        }
    }
}

/// 单个文件的格式化任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl FormatJob {
    /// 输出路径为输出目录下的同名文件
    pub fn new(input: &Path, out_dir: &Path) -> Result<Self> {
        let name = input
            .file_name()
            .ok_or_else(|| BeautifyError::InvalidEntry {
                path: input.display().to_string(),
            })?;

        Ok(Self {
            input: input.to_path_buf(),
            output: out_dir.join(name),
        })
    }

    /// 输出位置上残留的符号链接只删除链接本身，防止格式化结果写到链接目标
    pub fn unlink_stale_output(&self) -> Result<()> {
        match fs::symlink_metadata(&self.output) {
            Ok(meta) if meta.file_type().is_symlink() => {
                fs::remove_file(&self.output).map_err(|e| BeautifyError::FileDeleteError {
                    path: self.output.display().to_string(),
                    source: e,
                })
            }
            _ => Ok(()),
        }
    }
}

impl FormatterConfig {
    /// 命令行参数（不含程序名）
    pub fn args(&self, job: &FormatJob) -> Vec<OsString> {
        vec![
            "-c".into(),
            self.config.clone().into_os_string(),
            "-l".into(),
            self.language.clone().into(),
            "-f".into(),
            job.input.clone().into_os_string(),
            "-o".into(),
            job.output.clone().into_os_string(),
        ]
    }

    /// 构造待执行的命令
    pub fn command(&self, job: &FormatJob) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args(job));
        cmd
    }

    /// 用于显示的命令行字符串
    pub fn command_line(&self, job: &FormatJob) -> String {
        format!(
            "{} -c {} -l {} -f {} -o {}",
            self.program,
            self.config.display(),
            self.language,
            job.input.display(),
            job.output.display()
        )
    }

    /// 同步执行格式化，忽略退出码与输出
    pub fn run(&self, job: &FormatJob) -> Result<()> {
        match self.command(job).output() {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(BeautifyError::CommandNotFound {
                command: self.program.clone(),
            }),
            Err(e) => Err(BeautifyError::CommandSpawnError {
                command: self.command_line(job),
                source: e,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_output_uses_same_name() {
        let job = FormatJob::new(Path::new("../main.c"), Path::new("../beautify_out")).unwrap();
        assert_eq!(job.input, PathBuf::from("../main.c"));
        assert_eq!(job.output, PathBuf::from("../beautify_out/main.c"));
    }

    #[test]
    fn test_job_without_file_name() {
        let err = FormatJob::new(Path::new(".."), Path::new("out")).unwrap_err();
        assert!(matches!(err, BeautifyError::InvalidEntry { .. }));
    }

    #[test]
    fn test_command_line() {
        let config = FormatterConfig::default();
        let job = FormatJob::new(Path::new("../isrs.c"), Path::new("../beautify_out")).unwrap();
        assert_eq!(
            config.command_line(&job),
            "uncrustify -c uncrustify.cfg -l C -f ../isrs.c -o ../beautify_out/isrs.c"
        );

        let args: Vec<String> = config
            .args(&job)
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            [
                "-c",
                "uncrustify.cfg",
                "-l",
                "C",
                "-f",
                "../isrs.c",
                "-o",
                "../beautify_out/isrs.c"
            ]
        );
    }

    #[test]
    fn test_missing_program_is_reported() {
        let config = FormatterConfig {
            program: "beautify-test-no-such-formatter".to_string(),
            ..FormatterConfig::default()
        };
        let job = FormatJob::new(Path::new("a.c"), Path::new("out")).unwrap();
        let err = config.run(&job).unwrap_err();
        assert!(matches!(err, BeautifyError::CommandNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_unlink_stale_output_keeps_target() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();
        let target = dir.path().join("victim.txt");
        fs::write(&target, "OLD\n").unwrap();
        std::os::unix::fs::symlink(&target, out.join("main.c")).unwrap();

        let job = FormatJob::new(Path::new("main.c"), &out).unwrap();
        job.unlink_stale_output().unwrap();

        assert!(fs::symlink_metadata(&job.output).is_err());
        assert_eq!(fs::read_to_string(&target).unwrap(), "OLD\n");
    }

    #[test]
    fn test_unlink_stale_output_leaves_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("main.c"), "x").unwrap();

        let job = FormatJob::new(Path::new("main.c"), dir.path()).unwrap();
        job.unlink_stale_output().unwrap();
        job.unlink_stale_output().unwrap();

        assert!(job.output.is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_ignored() {
        let config = FormatterConfig {
            program: "false".to_string(),
            ..FormatterConfig::default()
        };
        let job = FormatJob::new(Path::new("a.c"), Path::new("out")).unwrap();
        assert!(config.run(&job).is_ok());
    }
}
