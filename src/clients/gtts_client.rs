/// Google 翻译 TTS 客户端
///
/// 封装 batchexecute 接口的请求打包、发送和音频提取
use crate::clients::tokenizer;
use crate::clients::SpeechSynthesizer;
use crate::config::Config;
use crate::error::{ConfigError, TtsError};
use crate::models::{AudioOutput, Language, Speed};
use base64::{engine::general_purpose, Engine as _};
use regex::Regex;
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

/// 接口中 TTS 对应的 RPC 标识
pub const RPC_ID: &str = "jQ1olc";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/47.0.2526.106 Safari/537.36";
const REFERER: &str = "http://translate.google.com/";
const CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=utf-8";
const AUDIO_PATTERN: &str = r#"jQ1olc","\[\\"(.*)\\"\]"#;

/// 表单请求体
#[derive(Debug, Serialize)]
struct RpcForm<'a> {
    #[serde(rename = "f.req")]
    f_req: &'a str,
}

/// Google 翻译 TTS 客户端
pub struct GttsClient {
    http_client: reqwest::Client,
    base_url: String,
    tld: String,
    speed: Speed,
    audio_parser: AudioParser,
}

impl GttsClient {
    /// 创建新的客户端
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ConfigError::HttpClient)?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| format!("https://translate.google.{}", config.tld));

        Ok(Self {
            http_client,
            base_url,
            tld: config.tld.clone(),
            speed: Speed::from_slow_flag(config.slow),
            audio_parser: AudioParser::new()?,
        })
    }

    /// 接口地址
    pub fn endpoint(&self) -> String {
        format!(
            "{}/_/TranslateWebserverUi/data/batchexecute",
            self.base_url.trim_end_matches('/')
        )
    }

    /// 请求单个片段的音频
    async fn request_chunk(&self, chunk: &str, lang: Language) -> Result<Vec<u8>, TtsError> {
        let endpoint = self.endpoint();
        let f_req = package_rpc(chunk, lang.code(), self.speed);

        debug!("请求片段 ({} 字符): {}", chunk.chars().count(), chunk);

        let response = self
            .http_client
            .post(&endpoint)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::REFERER, REFERER)
            .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE)
            .form(&RpcForm { f_req: &f_req })
            .send()
            .await
            .map_err(|source| TtsError::RequestFailed {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TtsError::from_status(status, &self.tld));
        }

        let body = response
            .text()
            .await
            .map_err(|source| TtsError::RequestFailed { endpoint, source })?;

        self.audio_parser.parse(&body)
    }
}

impl SpeechSynthesizer for GttsClient {
    async fn synthesize(&self, text: &str, lang: Language) -> Result<AudioOutput, TtsError> {
        let chunks = tokenizer::tokenize(text)?;
        debug!("文本切分为 {} 段", chunks.len());

        let mut data = Vec::new();
        for chunk in &chunks {
            let audio = self.request_chunk(chunk, lang).await?;
            data.extend_from_slice(&audio);
        }

        Ok(AudioOutput::mp3(data))
    }
}

/// 打包 f.req 字段
///
/// 内层参数数组先序列化成字符串，再嵌入外层 RPC 数组
pub fn package_rpc(text: &str, lang: &str, speed: Speed) -> String {
    let parameter = json!([text, lang, speed.as_json(), "null"]);
    let rpc = json!([[[RPC_ID, parameter.to_string(), Value::Null, "generic"]]]);
    rpc.to_string()
}

/// 从 batchexecute 响应中提取音频
pub struct AudioParser {
    re: Regex,
}

impl AudioParser {
    pub fn new() -> Result<Self, ConfigError> {
        let re = Regex::new(AUDIO_PATTERN).map_err(|source| ConfigError::InvalidPattern {
            pattern: AUDIO_PATTERN.to_string(),
            source,
        })?;
        Ok(Self { re })
    }

    /// 逐行扫描，含 RPC 标识的行必须带音频
    pub fn parse(&self, body: &str) -> Result<Vec<u8>, TtsError> {
        let mut audio = Vec::new();

        for line in body.lines().filter(|line| line.contains(RPC_ID)) {
            let captures = self.re.captures(line).ok_or(TtsError::NoAudioStream)?;
            let encoded = &captures[1];
            audio.extend(general_purpose::STANDARD.decode(encoded)?);
        }

        if audio.is_empty() {
            return Err(TtsError::NoAudioReceived);
        }

        Ok(audio)
    }
}
