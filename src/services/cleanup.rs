//! 旧音频清理服务 - 业务能力层
//!
//! 只负责"删除匹配模式的旧文件"，删除失败只记日志，不中断流程

use crate::error::{ConfigError, FileError};
use regex::Regex;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// 清理结果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanupReport {
    /// 已删除的文件
    pub removed: Vec<PathBuf>,
    /// 删除失败的文件数
    pub failed: usize,
}

/// 旧音频清理服务
pub struct CleanupService {
    pattern: String,
    matcher: Regex,
}

impl CleanupService {
    /// 使用文件名模式创建（支持 * 和 ?）
    pub fn new(pattern: impl Into<String>) -> Result<Self, ConfigError> {
        let pattern = pattern.into();
        let matcher = glob_to_regex(&pattern)?;
        Ok(Self { pattern, matcher })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// 文件名是否匹配
    pub fn matches(&self, file_name: &str) -> bool {
        self.matcher.is_match(file_name)
    }

    /// 删除目录下所有匹配的文件
    ///
    /// 目录读取失败或单个文件删除失败都只记警告
    pub async fn run(&self, dir: &Path) -> CleanupReport {
        let mut report = CleanupReport::default();

        let mut entries = match fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("⚠️ 无法读取目录 {}: {}", dir.display(), e);
                return report;
            }
        };

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    warn!("⚠️ 遍历目录 {} 出错: {}", dir.display(), e);
                    break;
                }
            };

            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if !self.matches(name) {
                continue;
            }

            // 符号链接本身也删除（不跟随到目标）
            let removable = entry
                .file_type()
                .await
                .map(|t| t.is_file() || t.is_symlink())
                .unwrap_or(false);
            if !removable {
                debug!("跳过非文件: {}", name);
                continue;
            }

            let path = entry.path();
            match remove(&path).await {
                Ok(()) => {
                    info!("🗑️ 已删除旧文件: {}", name);
                    report.removed.push(path);
                }
                Err(e) => {
                    warn!("⚠️ {}", e);
                    report.failed += 1;
                }
            }
        }

        report
    }
}

async fn remove(path: &Path) -> Result<(), FileError> {
    fs::remove_file(path)
        .await
        .map_err(|e| FileError::delete_failed(path.display().to_string(), e))
}

/// 把简单通配符转换为整串匹配的正则
fn glob_to_regex(pattern: &str) -> Result<Regex, ConfigError> {
    let mut expr = String::from("^");
    for c in pattern.chars() {
        match c {
            '*' => expr.push_str(".*"),
            '?' => expr.push('.'),
            _ => expr.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    expr.push('$');

    Regex::new(&expr).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// 清理目录：配置优先，否则取输出文件所在目录
pub fn cleanup_dir(configured: Option<&str>, output_file: &str) -> PathBuf {
    if let Some(dir) = configured {
        return PathBuf::from(dir);
    }

    match Path::new(output_file).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    #[test]
    fn test_glob_matching() {
        let service = CleanupService::new("tts_*.mp3").unwrap();
        assert!(service.matches("tts_1700000000000.mp3"));
        assert!(service.matches("tts_.mp3"));
        assert!(!service.matches("output.mp3"));
        assert!(!service.matches("tts_1.mp3.bak"));
        // '.' 按字面匹配
        assert!(!service.matches("tts_1xmp3"));

        let service = CleanupService::new("a?.wav").unwrap();
        assert!(service.matches("ab.wav"));
        assert!(!service.matches("abc.wav"));
    }

    #[test]
    fn test_cleanup_dir() {
        assert_eq!(cleanup_dir(None, "output.mp3"), PathBuf::from("."));
        assert_eq!(cleanup_dir(None, "/tmp/a/tts_1.mp3"), PathBuf::from("/tmp/a"));
        assert_eq!(cleanup_dir(Some("/var/tts"), "/tmp/a/tts_1.mp3"), PathBuf::from("/var/tts"));
    }

    #[tokio::test]
    async fn test_run_removes_only_matching_files() {
        let dir = tempfile::tempdir().unwrap();
        std_fs::write(dir.path().join("tts_1.mp3"), b"old").unwrap();
        std_fs::write(dir.path().join("tts_2.mp3"), b"old").unwrap();
        std_fs::write(dir.path().join("keep.mp3"), b"keep").unwrap();
        std_fs::create_dir(dir.path().join("tts_dir.mp3")).unwrap();

        let service = CleanupService::new("tts_*.mp3").unwrap();
        let report = service.run(dir.path()).await;

        assert_eq!(report.removed.len(), 2);
        assert_eq!(report.failed, 0);
        assert!(!dir.path().join("tts_1.mp3").exists());
        assert!(!dir.path().join("tts_2.mp3").exists());
        assert!(dir.path().join("keep.mp3").exists());
        assert!(dir.path().join("tts_dir.mp3").is_dir());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_removes_matching_symlink_but_not_target() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("keep.mp3");
        std_fs::write(&target, b"keep").unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("tts_link.mp3")).unwrap();

        let service = CleanupService::new("tts_*.mp3").unwrap();
        let report = service.run(dir.path()).await;

        assert_eq!(report.removed.len(), 1);
        assert!(std_fs::symlink_metadata(dir.path().join("tts_link.mp3")).is_err());
        assert!(target.exists());
    }

    #[tokio::test]
    async fn test_run_on_missing_dir_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        let service = CleanupService::new("tts_*.mp3").unwrap();
        let report = service.run(&missing).await;

        assert_eq!(report, CleanupReport::default());
    }
}
