//! 语音合成流程 - 流程层
//!
//! 核心职责：定义"一次调用"的完整处理流程
//!
//! 流程顺序：
//! 1. 清理旧音频（失败只记日志）
//! 2. 校验语言 → 合成
//! 3. 写入输出文件
//! 4. 回读并 base64 编码
//! 5. 按约定格式写到 stdout

use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::clients::SpeechSynthesizer;
use crate::config::Config;
use crate::error::{AppResult, FileError, TtsError};
use crate::models::{Language, TtsArgs};
use crate::services::cleanup::{self, CleanupService};
use crate::services::encoder;
use crate::utils::truncate_text;

/// 一次调用的结果
#[derive(Debug, Clone)]
pub struct TtsOutcome {
    /// 输出文件
    pub output_file: PathBuf,
    /// 音频字节数
    pub bytes: usize,
    /// base64 载荷
    pub payload: String,
    /// 清理掉的旧文件数
    pub removed: usize,
}

/// 语音合成流程
///
/// - 编排清理、合成、保存、编码、输出
/// - 合成能力通过 SpeechSynthesizer 注入
pub struct TtsFlow<S> {
    synthesizer: S,
    cleanup: CleanupService,
    cleanup_dir: Option<String>,
}

impl<S: SpeechSynthesizer> TtsFlow<S> {
    /// 创建新的流程
    pub fn new(synthesizer: S, config: &Config) -> AppResult<Self> {
        Ok(Self {
            synthesizer,
            cleanup: CleanupService::new(config.cleanup_pattern.as_str())?,
            cleanup_dir: config.cleanup_dir.clone(),
        })
    }

    pub async fn run<W: Write>(&self, args: &TtsArgs, out: &mut W) -> AppResult<TtsOutcome> {
        let output_path = Path::new(&args.output_file);

        // ========== 步骤 1: 清理旧文件 ==========
        let dir = cleanup::cleanup_dir(self.cleanup_dir.as_deref(), &args.output_file);
        debug!("清理目录: {} (模式: {})", dir.display(), self.cleanup.pattern());
        let report = self.cleanup.run(&dir).await;
        if report.failed > 0 {
            info!("清理完成: 删除 {} 个, 失败 {} 个", report.removed.len(), report.failed);
        }

        // ========== 步骤 2: 合成 ==========
        let lang = Language::parse(&args.lang).map_err(|e| {
            let supported: Vec<&str> = Language::supported_codes().collect();
            warn!("⚠️ 支持的语言: {}", supported.join(", "));
            e
        })?;
        info!("🔊 合成语音 [{}]: {}", lang, truncate_text(&args.text, 40));

        let audio = self.synthesizer.synthesize(&args.text, lang).await?;
        if audio.is_empty() {
            return Err(TtsError::NoAudioReceived.into());
        }
        debug!("收到音频 {} 字节 ({})", audio.len(), audio.format.mime_type());

        // ========== 步骤 3: 保存 ==========
        tokio::fs::write(output_path, &audio.data)
            .await
            .map_err(|e| FileError::write_failed(args.output_file.as_str(), e))?;

        // ========== 步骤 4: 回读编码 ==========
        let (bytes, payload) = encoder::encode_file(output_path).await?;

        // ========== 步骤 5: 输出 ==========
        encoder::write_result(out, &args.output_file, &payload)
            .map_err(|e| FileError::write_failed("<stdout>", e))?;

        Ok(TtsOutcome {
            output_file: output_path.to_path_buf(),
            bytes,
            payload,
            removed: report.removed.len(),
        })
    }
}
