pub mod gtts_client;
pub mod tokenizer;

pub use gtts_client::GttsClient;

use crate::error::TtsError;
use crate::models::{AudioOutput, Language};

/// 语音合成能力
///
/// 流程层只依赖这个 trait，测试时可以替换为本地实现
#[allow(async_fn_in_trait)]
pub trait SpeechSynthesizer {
    /// 合成整段文本
    async fn synthesize(&self, text: &str, lang: Language) -> Result<AudioOutput, TtsError>;
}
