//! 应用入口 - 编排层
//!
//! 负责组装客户端与流程，并把结果写到 stdout

use crate::clients::GttsClient;
use crate::config::Config;
use crate::error::AppError;
use crate::models::TtsArgs;
use crate::utils::logging::{log_complete, log_startup};
use crate::workflow::{TtsFlow, TtsOutcome};
use anyhow::{Context, Result};

/// 应用主结构
pub struct App {
    flow: TtsFlow<GttsClient>,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let client = GttsClient::new(&config)
            .map_err(AppError::from)
            .context("初始化 TTS 客户端失败")?;
        let flow = TtsFlow::new(client, &config).context("初始化处理流程失败")?;

        Ok(Self { flow })
    }

    /// 运行一次合成，结果写到 stdout
    pub async fn run(&self, args: &TtsArgs) -> Result<TtsOutcome> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        let outcome = self
            .flow
            .run(args, &mut out)
            .await
            .with_context(|| format!("生成语音失败 (lang: {}, 输出: {})", args.lang, args.output_file))?;

        log_complete(&args.output_file, outcome.bytes, outcome.payload.len());

        Ok(outcome)
    }
}
